use crate::config::{Config, LLMProvider};
use clap::Parser;
use std::path::PathBuf;

/// branchname-rs - AI驱动的git分支名生成工具
#[derive(Parser, Debug)]
#[command(name = "branchname")]
#[command(
    about = "AI-based git branch name generator. Sends a change description (mixed English/Chinese supported) to a chat-completion endpoint and turns the suggestion into a branch-name slug."
)]
#[command(version)]
pub struct Args {
    /// 变更描述文本（支持中英文混合）
    pub input_text: Option<String>,

    /// LLM API KEY（也可通过 --llm-api-key、配置文件或环境变量提供）
    pub api_key: Option<String>,

    /// 输出标识，提供时结果写入 /tmp/branch_name_<identifier>.txt，否则打印到标准输出
    pub identifier: Option<String>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// LLM Provider (openai, deepseek)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 模型名称
    #[arg(short, long)]
    pub model: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 请求超时时间（秒）
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// 分支名前缀，如 feature，拼接为 <prefix>/<slug>
    #[arg(long)]
    pub branch_prefix: Option<String>,

    /// 分支名最大长度，0表示不限制
    #[arg(long)]
    pub max_length: Option<usize>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 如果显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path).unwrap_or_else(|_| {
                panic!("⚠️ 警告: 无法读取配置文件 {:?}", config_path)
            })
        } else {
            // 如果没有显式指定配置文件，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| std::path::PathBuf::from("."))
                .join("branchname.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|_| {
                    panic!(
                        "⚠️ 警告: 无法读取默认配置文件 {:?}",
                        default_config_path
                    )
                })
            } else {
                // 默认配置文件不存在，使用默认值
                Config::default()
            }
        };

        // 请求参数（仅来自命令行）
        config.input_text = self.input_text;
        config.identifier = self.identifier;

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        // 位置参数的API KEY优先级最高
        if let Some(api_key) = self.api_key {
            config.llm.api_key = api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }
        if let Some(timeout_seconds) = self.timeout_seconds {
            config.llm.timeout_seconds = timeout_seconds;
        }

        // 输出配置
        if let Some(branch_prefix) = self.branch_prefix {
            config.branch_prefix = Some(branch_prefix);
        }
        if let Some(max_length) = self.max_length {
            config.max_length = max_length;
        }

        // 其他配置
        config.verbose = self.verbose;

        config
    }
}

// Include tests
#[cfg(test)]
mod tests;
