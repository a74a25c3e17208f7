//! SSE流解析 - 按到达顺序聚合增量内容

use super::types::StreamChunk;

/// SSE数据行前缀
pub const DATA_PREFIX: &str = "data: ";

/// 流结束哨兵
pub const DONE_SENTINEL: &str = "[DONE]";

/// SSE流聚合器
///
/// 以字节块喂入，内部按行切分；`data: `前缀被剥除，遇到`[DONE]`后
/// 不再接受内容。无法解析为JSON的行直接跳过，不视为错误。
#[derive(Debug, Default)]
pub struct SseAccumulator {
    buffer: Vec<u8>,
    content: String,
    done: bool,
}

impl SseAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 喂入一个响应字节块，行边界可以落在块中间
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        if self.done {
            return;
        }
        self.buffer.extend_from_slice(bytes);

        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line_bytes: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&line_bytes);
            self.push_line(line.trim_end_matches(['\n', '\r']));
            if self.done {
                return;
            }
        }
    }

    /// 处理一条完整的SSE行
    pub fn push_line(&mut self, line: &str) {
        if self.done {
            return;
        }
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        let payload = line.strip_prefix(DATA_PREFIX).unwrap_or(line);
        if payload == DONE_SENTINEL {
            self.done = true;
            return;
        }

        if let Some(delta) = parse_delta(payload) {
            self.content.push_str(&delta);
        }
    }

    /// 是否已收到结束哨兵
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// 取出按到达顺序拼接的全部增量内容
    pub fn finish(self) -> String {
        self.content
    }
}

/// 从一行JSON payload中提取`choices[0].delta.content`
///
/// 无法解析为JSON或不携带内容的行返回None
pub fn parse_delta(payload: &str) -> Option<String> {
    let chunk: StreamChunk = serde_json::from_str(payload).ok()?;
    chunk.choices.into_iter().next()?.delta.content
}
