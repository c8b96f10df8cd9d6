//! 规则模块：负责规则的数据模型定义、内置规则表与加载
pub mod model;
pub mod builtin;
pub mod loader;

// 导出核心接口
pub use self::model::{Category, InfraRuleDef, PatternRuleDef, RuleLibrary};
pub use self::loader::RuleLoader;
