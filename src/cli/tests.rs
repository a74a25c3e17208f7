#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::config::LLMProvider;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_args_default_values() {
        let args = Args::try_parse_from(&["branchname"]).unwrap();

        assert!(args.input_text.is_none());
        assert!(args.api_key.is_none());
        assert!(args.identifier.is_none());
        assert!(args.config.is_none());
        assert!(args.branch_prefix.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_positional() {
        let args = Args::try_parse_from(&[
            "branchname",
            "添加新的登录页面",
            "sk-test-key",
            "ticket-42",
        ])
        .unwrap();

        assert_eq!(args.input_text, Some("添加新的登录页面".to_string()));
        assert_eq!(args.api_key, Some("sk-test-key".to_string()));
        assert_eq!(args.identifier, Some("ticket-42".to_string()));
    }

    #[test]
    fn test_args_llm_options() {
        let args = Args::try_parse_from(&[
            "branchname",
            "fix login bug",
            "--llm-provider", "deepseek",
            "--llm-api-key", "test-key",
            "--llm-api-base-url", "https://api.deepseek.com/v1",
            "--model", "deepseek-chat",
            "--max-tokens", "128",
            "--temperature", "0.7",
            "--timeout-seconds", "60",
        ])
        .unwrap();

        assert_eq!(args.llm_provider, Some("deepseek".to_string()));
        assert_eq!(args.llm_api_key, Some("test-key".to_string()));
        assert_eq!(
            args.llm_api_base_url,
            Some("https://api.deepseek.com/v1".to_string())
        );
        assert_eq!(args.model, Some("deepseek-chat".to_string()));
        assert_eq!(args.max_tokens, Some(128));
        assert_eq!(args.temperature, Some(0.7));
        assert_eq!(args.timeout_seconds, Some(60));
    }

    #[test]
    fn test_args_output_options() {
        let args = Args::try_parse_from(&[
            "branchname",
            "fix login bug",
            "--branch-prefix", "feature",
            "--max-length", "48",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.branch_prefix, Some("feature".to_string()));
        assert_eq!(args.max_length, Some(48));
        assert!(args.verbose);
    }

    #[test]
    fn test_into_config_basic() {
        let args = Args::try_parse_from(&[
            "branchname",
            "fix login bug",
            "sk-test-key",
        ])
        .unwrap();

        let config = args.into_config();

        assert_eq!(config.input_text, Some("fix login bug".to_string()));
        assert_eq!(config.llm.api_key, "sk-test-key");
        assert!(config.identifier.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_into_config_with_overrides() {
        let args = Args::try_parse_from(&[
            "branchname",
            "fix login bug",
            "--llm-provider", "deepseek",
            "--llm-api-key", "test-key",
            "--max-tokens", "128",
            "--temperature", "0.5",
            "--branch-prefix", "bugfix",
            "--max-length", "40",
            "--verbose",
        ])
        .unwrap();

        let config = args.into_config();

        assert_eq!(config.llm.provider, LLMProvider::DeepSeek);
        assert_eq!(config.llm.api_key, "test-key");
        assert_eq!(config.llm.max_tokens, 128);
        assert_eq!(config.llm.temperature, 0.5);
        assert_eq!(config.branch_prefix, Some("bugfix".to_string()));
        assert_eq!(config.max_length, 40);
        assert!(config.verbose);
    }

    #[test]
    fn test_into_config_positional_key_wins() {
        let args = Args::try_parse_from(&[
            "branchname",
            "fix login bug",
            "positional-key",
            "--llm-api-key", "flag-key",
        ])
        .unwrap();

        let config = args.into_config();
        assert_eq!(config.llm.api_key, "positional-key");
    }

    #[test]
    fn test_into_config_identifier() {
        let args = Args::try_parse_from(&[
            "branchname",
            "fix login bug",
            "sk-test-key",
            "ticket-42",
        ])
        .unwrap();

        let config = args.into_config();
        assert_eq!(config.identifier, Some("ticket-42".to_string()));
    }

    #[test]
    fn test_into_config_config_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("branchname.toml");
        std::fs::write(
            &config_path,
            r#"
branch_prefix = "feature"

[llm]
api_key = "file-key"
"#,
        )
        .unwrap();

        let args = Args::try_parse_from(&[
            "branchname",
            "fix login bug",
            "-c",
            config_path.to_str().unwrap(),
        ])
        .unwrap();

        let config = args.into_config();
        assert_eq!(config.branch_prefix, Some("feature".to_string()));
        assert_eq!(config.llm.api_key, "file-key");
        // 命令行的请求参数仍然生效
        assert_eq!(config.input_text, Some("fix login bug".to_string()));
    }

    #[test]
    fn test_into_config_cli_overrides_config_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("branchname.toml");
        std::fs::write(
            &config_path,
            r#"
[llm]
api_key = "file-key"
model = "file-model"
"#,
        )
        .unwrap();

        let args = Args::try_parse_from(&[
            "branchname",
            "fix login bug",
            "cli-key",
            "-c",
            config_path.to_str().unwrap(),
            "--model",
            "cli-model",
        ])
        .unwrap();

        let config = args.into_config();
        assert_eq!(config.llm.api_key, "cli-key");
        assert_eq!(config.llm.model, "cli-model");
    }

    #[test]
    fn test_args_config_path() {
        let args = Args::try_parse_from(&[
            "branchname",
            "fix login bug",
            "-c",
            "/config.toml",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("/config.toml")));
    }
}
