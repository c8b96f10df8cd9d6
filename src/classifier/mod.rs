//! 分类模块：类别注册表与分类入口
pub mod registry;
pub mod classifier;
pub mod global;

// 导出核心接口
pub use self::registry::CategoryRegistry;
pub use self::classifier::Classifier;
pub use self::global::{classify_failure, init_classifier, init_classifier_with_config};
