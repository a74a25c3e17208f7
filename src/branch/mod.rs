//! 分支名处理 - 清洗、拼接与输出

use anyhow::{Context, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static INVALID_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9-]").unwrap());
static HYPHEN_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// 将模型返回的原始文本清洗为分支名slug
///
/// 去除前后空白、转小写、内部空白替换为短横线，移除`[a-z0-9-]`之外的
/// 字符，连续短横线折叠为一个，再去掉首尾短横线。纯函数且幂等，
/// 输入经过滤后可能得到空字符串。
pub fn sanitize(raw: &str) -> String {
    let name = raw.trim().to_lowercase();

    // 内部空白替换为短横线
    let name = name.split_whitespace().collect::<Vec<_>>().join("-");

    // 移除非字母数字和短横线的字符
    let name = INVALID_CHARS.replace_all(&name, "");

    // 折叠连续短横线并去除首尾短横线
    let name = HYPHEN_RUNS.replace_all(&name, "-");
    name.trim_matches('-').to_string()
}

/// 清洗后追加长度限制与前缀，得到最终分支名
///
/// max_length为0时不限制长度；截断发生在前缀拼接之前，
/// 截断后重新去除尾部短横线。
pub fn finalize(raw: &str, branch_prefix: Option<&str>, max_length: usize) -> String {
    let mut slug = sanitize(raw);

    if max_length > 0 && slug.len() > max_length {
        // slug此时只含ASCII，可以按字节截断
        slug = slug[..max_length].trim_end_matches('-').to_string();
    }

    if slug.is_empty() {
        return slug;
    }

    match branch_prefix {
        Some(prefix) if !prefix.trim().is_empty() => {
            format!("{}/{}", prefix.trim().trim_matches('/'), slug)
        }
        _ => slug,
    }
}

/// identifier对应的固定输出文件路径
pub fn output_path(identifier: &str) -> PathBuf {
    PathBuf::from(format!("/tmp/branch_name_{}.txt", identifier))
}

/// 输出分支名
///
/// 提供identifier时整体覆盖写入固定路径文件，否则打印到标准输出。
pub fn persist(branch_name: &str, identifier: Option<&str>) -> Result<()> {
    match identifier {
        Some(identifier) => {
            let path = output_path(identifier);
            write_branch_name(&path, branch_name)?;
            println!("Branch name saved to {}", path.display());
        }
        None => {
            println!("{}", branch_name);
        }
    }
    Ok(())
}

fn write_branch_name(path: &Path, branch_name: &str) -> Result<()> {
    std::fs::write(path, branch_name)
        .context(format!("Failed to write branch name to {:?}", path))
}
