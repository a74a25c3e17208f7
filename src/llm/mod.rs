//! LLM访问层 - 以流式方式调用chat completion接口

pub mod client;
pub mod prompts;

pub use client::{GenerateError, LLMClient};
