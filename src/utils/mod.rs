//! 工具模块：日志格式化、日志行安全访问
#[macro_use]
pub mod log_format;
pub mod line;

// 导出核心接口
pub use self::log_format::preview_compact;
pub use self::line::{line_at, text_after, whitespace_fields};
