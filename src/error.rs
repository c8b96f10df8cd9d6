//! 全局错误类型定义
//! 仅用于初始化阶段（规则加载/编译/配置），提取阶段不产生错误

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum FailsigError {
    // 规则相关错误
    #[error("规则加载失败：{0}")]
    RuleLoadError(String),
    #[error("规则解析失败：{0}")]
    RuleParseError(String),

    // 编译相关错误
    #[error("规则编译失败：规则={rule}，模式={pattern}，错误：{source}")]
    RuleCompileError {
        rule: String,
        pattern: String,
        #[source]
        source: RegexError,
    },

    // 分类相关错误
    #[error("分类器未初始化")]
    ClassifierNotInitialized,

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type FailsigResult<T> = Result<T, FailsigError>;
