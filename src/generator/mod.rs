//! 生成流程编排 - 请求、清洗、输出

use anyhow::Result;

use crate::branch;
use crate::config::Config;
use crate::llm::{GenerateError, LLMClient};

/// 执行一次完整的分支名生成
///
/// 流程：校验输入 -> 流式请求模型 -> 清洗为slug -> 写文件或打印。
/// 除可恢复的坏行跳过外，任何失败都向上传播并以非零退出码结束。
pub async fn launch(config: &Config) -> Result<()> {
    let input_text = config.input_text.clone().unwrap_or_default();

    let client = LLMClient::new(config.clone())?;
    let raw = client.generate(&input_text).await?;

    if config.verbose {
        println!("🔄 模型返回: {}", raw);
    }

    let branch_name = branch::finalize(&raw, config.branch_prefix.as_deref(), config.max_length);
    if branch_name.is_empty() {
        return Err(GenerateError::EmptyResult.into());
    }

    branch::persist(&branch_name, config.identifier.as_deref())?;
    Ok(())
}
