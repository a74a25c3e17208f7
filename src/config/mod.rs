use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "deepseek")]
    DeepSeek,
}

impl LLMProvider {
    /// 对应Provider的默认API基地址
    pub fn default_api_base_url(&self) -> &'static str {
        match self {
            LLMProvider::OpenAI => "https://api.openai.com/v1",
            LLMProvider::DeepSeek => "https://api.deepseek.com/v1",
        }
    }

    /// 对应Provider的默认模型
    pub fn default_model(&self) -> &'static str {
        match self {
            LLMProvider::OpenAI => "gpt-3.5-turbo",
            LLMProvider::DeepSeek => "deepseek-chat",
        }
    }
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 变更描述文本（仅来自命令行，不参与配置文件）
    #[serde(skip)]
    pub input_text: Option<String>,

    /// 输出标识，提供时结果写入 /tmp/branch_name_<identifier>.txt
    #[serde(skip)]
    pub identifier: Option<String>,

    /// 分支名前缀（如 feature），拼接为 <prefix>/<slug>
    pub branch_prefix: Option<String>,

    /// 分支名最大长度，0表示不限制
    pub max_length: usize,

    /// 是否启用详细日志
    pub verbose: bool,

    /// LLM模型配置
    pub llm: LLMConfig,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址，留空时使用Provider默认地址
    pub api_base_url: String,

    /// 模型名称，留空时使用Provider默认模型
    pub model: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 超时时间（秒）
    pub timeout_seconds: u64,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

impl LLMConfig {
    /// 实际请求使用的API基地址
    pub fn resolved_api_base_url(&self) -> &str {
        if self.api_base_url.trim().is_empty() {
            self.provider.default_api_base_url()
        } else {
            &self.api_base_url
        }
    }

    /// 实际请求使用的模型名称
    pub fn resolved_model(&self) -> &str {
        if self.model.trim().is_empty() {
            self.provider.default_model()
        } else {
            &self.model
        }
    }

    /// chat completion接口完整URL
    pub fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.resolved_api_base_url().trim_end_matches('/')
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_text: None,
            identifier: None,
            branch_prefix: None,
            max_length: 0,
            verbose: false,
            llm: LLMConfig::default(),
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("BRANCHNAME_LLM_API_KEY").unwrap_or_default(),
            api_base_url: String::new(),
            model: String::new(),
            max_tokens: 256,
            temperature: 0.1,
            timeout_seconds: 30,
        }
    }
}
