//! failsig - CI构建/测试日志失败签名提取引擎

// 日志宏需先于其他模块声明
#[macro_use]
pub mod utils;

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod compiler;
pub mod extractor;
pub mod classifier;

// 导出全局错误类型
pub use self::error::{FailsigError, FailsigResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{Category, InfraRuleDef, PatternRuleDef, RuleLibrary, RuleLoader};

// 导出编译模块核心接口
pub use self::compiler::{CompiledRuleLibrary, RuleCompiler};

// 导出提取模块核心接口
pub use self::extractor::{
    Extractor,
    GenericRuleExtractor,
    UnconditionalInfraExtractor,
    UnitTestExtractor,
    IntegrationTestExtractor,
    NativeTestExtractor,
    AnnotatedCheckExtractor,
};

// 导出分类模块核心接口
pub use self::classifier::{
    Classifier,
    CategoryRegistry,
    init_classifier,
    init_classifier_with_config,
    classify_failure,
};
