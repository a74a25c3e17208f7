//! 分支名生成使用的prompt模板

/// 文本摘要角色的系统指令
pub const SYSTEM_PROMPT: &str = "As a skilled linguist fluent in both English and Chinese, \
extract the key terms from the user's input (which may contain both Chinese and English) and \
generate a concise, descriptive branch name in English. Return only the branch name as a single \
string, and if other formats are present, convert them into a string.";

/// 构造嵌入用户输入的user消息
pub fn build_user_prompt(input_text: &str) -> String {
    format!(
        "Based on the user's input '{}', extract the key ideas and generate a concise branch \
name in English. The branch name should reflect the main concept of the suggestion without \
unnecessary detail.",
        input_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_user_prompt_embeds_input() {
        let prompt = build_user_prompt("修复登录页崩溃");
        assert!(prompt.contains("'修复登录页崩溃'"));
        assert!(prompt.contains("branch name in English"));
    }
}
