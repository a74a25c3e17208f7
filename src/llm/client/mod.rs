//! LLM客户端 - 流式调用chat completion接口并聚合增量内容

use anyhow::Result;
use futures::StreamExt;
use std::time::Duration;

use crate::config::Config;
use crate::llm::prompts::{SYSTEM_PROMPT, build_user_prompt};

pub mod stream;
pub mod types;

use stream::SseAccumulator;
use types::{ChatCompletionRequest, ChatMessage};

/// 错误响应正文在错误信息中保留的最大长度
const ERROR_BODY_LIMIT: usize = 512;

/// 生成流程的错误分类
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Input text and API key are required")]
    MissingInput,
    #[error("Chat completion request failed with status {status}: {body}")]
    RequestFailure { status: u16, body: String },
    #[error("Stream yielded no usable content")]
    EmptyResult,
    #[error("Failed to call chat completion API: {0}")]
    Transport(#[from] reqwest::Error),
}

/// LLM客户端
pub struct LLMClient {
    config: Config,
    http: reqwest::Client,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.llm.timeout_seconds))
            .build()?;
        Ok(Self { config, http })
    }

    /// 发起流式请求并返回聚合后的完整文本
    ///
    /// 输入文本或API KEY为空时在发起网络请求前即失败；
    /// 非成功状态码返回RequestFailure，聚合结果为空。
    pub async fn generate(&self, input_text: &str) -> Result<String, GenerateError> {
        let llm = &self.config.llm;

        if input_text.trim().is_empty() || llm.api_key.trim().is_empty() {
            return Err(GenerateError::MissingInput);
        }

        let request = ChatCompletionRequest {
            model: llm.resolved_model().to_string(),
            stream: true,
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_user_prompt(input_text)),
            ],
            max_tokens: Some(llm.max_tokens),
            temperature: Some(llm.temperature),
        };

        if self.config.verbose {
            println!("🔄 正在请求模型 {} ...", llm.resolved_model());
        }

        let response = self
            .http
            .post(llm.completions_url())
            .header("Content-Type", "application/json")
            .bearer_auth(&llm.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = body.chars().take(ERROR_BODY_LIMIT).collect();
            return Err(GenerateError::RequestFailure {
                status: status.as_u16(),
                body,
            });
        }

        let mut accumulator = SseAccumulator::new();
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            accumulator.push_bytes(&chunk?);
            if accumulator.is_done() {
                break;
            }
        }

        Ok(accumulator.finish())
    }
}
