//! 分类器核心：按类别依次调用提取器，拼接所有签名

use std::sync::Arc;

use super::registry::CategoryRegistry;
use crate::compiler::RuleCompiler;
use crate::config::GlobalConfig;
use crate::error::FailsigResult;
use crate::extractor::Extractor;
use crate::rule::{Category, RuleLibrary, RuleLoader};
use crate::utils::preview_compact;

/// 失败签名分类器
/// 构建后不可变，可跨线程共享
#[derive(Debug, Clone)]
pub struct Classifier {
    registry: Arc<CategoryRegistry>,
    config: GlobalConfig,
}

impl Classifier {
    /// 创建分类器（规则来源由配置决定：rule_path 或内置规则）
    pub fn new(config: GlobalConfig) -> FailsigResult<Self> {
        let rule_lib = RuleLoader::load(&config)?;
        Self::with_rules(config, &rule_lib)
    }

    /// 使用指定规则库创建分类器
    pub fn with_rules(config: GlobalConfig, rule_lib: &RuleLibrary) -> FailsigResult<Self> {
        let compiled = RuleCompiler::compile(rule_lib)?;
        let registry = CategoryRegistry::build(&config, &compiled);
        Ok(Self {
            registry: Arc::new(registry),
            config,
        })
    }

    /// 当前配置
    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// 类别对应的提取器列表
    pub fn extractors(&self, category: Category) -> &[Extractor] {
        self.registry.extractors(category)
    }

    /// 对单个类别分类：提取器声明顺序，再按提取器内部输出顺序
    pub fn classify<S: AsRef<str>>(&self, category: Category, job: &str, lines: &[S]) -> Vec<String> {
        let mut signatures = Vec::new();
        for extractor in self.registry.extractors(category) {
            let found = extractor.extract(job, lines);
            if found.is_empty() {
                continue;
            }
            if self.config.verbose {
                log_debug!(
                    "类别={}，提取器={}，作业={}，签名={:?}，首行={}",
                    category,
                    extractor.kind(),
                    job,
                    found,
                    lines.first().map(|l| preview_compact(l.as_ref(), 120).to_string()).unwrap_or_default()
                );
            }
            signatures.extend(found);
        }
        signatures
    }

    /// 依次对所有类别分类，仅返回有签名的类别
    pub fn classify_all<S: AsRef<str>>(&self, job: &str, lines: &[S]) -> Vec<(Category, Vec<String>)> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.classify(category, job, lines)))
            .filter(|(_, signatures)| !signatures.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::rule::{InfraRuleDef, PatternRuleDef};

    fn classifier() -> Classifier {
        Classifier::new(ConfigManager::get_default()).unwrap()
    }

    #[test]
    fn test_registry_order() {
        let c = classifier();
        let kinds: Vec<&str> = c.extractors(Category::Case).iter().map(Extractor::kind).collect();
        assert_eq!(kinds, vec!["generic", "unit_test", "integration_test", "native_test"]);
        let kinds: Vec<&str> = c.extractors(Category::Check).iter().map(Extractor::kind).collect();
        assert_eq!(kinds, vec!["generic", "annotated_check"]);
    }

    #[test]
    fn test_environment_category() {
        let lines = ["curl: (6) Could not resolve host: fileserver.pingcap.net"];
        assert_eq!(
            classifier().classify(Category::Environment, "tikv_ghpr_test", &lines),
            vec!["dns_resolve_failure"]
        );
    }

    #[test]
    fn test_compile_category_scoped_by_job() {
        let lines = ["error[E0425]: cannot find value `x` in this scope"];
        let c = classifier();
        assert_eq!(c.classify(Category::Compile, "tikv_ghpr_build", &lines), vec!["rust_compile_error"]);
        assert!(c.classify(Category::Compile, "tidb_ghpr_build", &lines).is_empty());
    }

    #[test]
    fn test_check_category_concatenates_extractors() {
        let lib = RuleLibrary {
            check: vec![PatternRuleDef::new(&[], "fatal_seen", &["FATAL"])],
            ..RuleLibrary::default()
        };
        let config = ConfigManager::custom().annotated_check_job("ddl_test").build();
        let c = Classifier::with_rules(config, &lib).unwrap();
        let lines = ["[FATAL] [error=schema version mismatch]"];
        assert_eq!(
            c.classify(Category::Check, "ddl_test", &lines),
            vec!["fatal_seen", "FATAL] [error=schema version mismatch]"]
        );
    }

    #[test]
    fn test_case_category_unit_test() {
        let lines = ["[2021-06-01T10:00:00.000Z] FAIL: ddl_test.go:123: testDDLSuite.TestColumn"];
        assert_eq!(
            classifier().classify(Category::Case, "tidb_ghpr_unit_test", &lines),
            vec!["ddl_test.go:testDDLSuite.TestColumn"]
        );
    }

    #[test]
    fn test_case_category_native_test() {
        let lines = vec![
            "[suite] failures:".to_string(),
            "[suite] case_one".to_string(),
            "[suite] test result: FAILED. 0 passed; 1 failed; 0 ignored".to_string(),
        ];
        assert_eq!(classifier().classify(Category::Case, "tikv_ghpr_test", &lines), vec!["case_one"]);
    }

    #[test]
    fn test_verbose_classify_with_debug_logging() {
        // 其他测试可能已安装订阅者，忽略重复安装
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("failsig=debug"))
            .with_test_writer()
            .try_init();

        let config = ConfigManager::custom().verbose(true).build();
        let c = Classifier::new(config).unwrap();
        let lines = ["[2021-06-01T10:00:00.000Z] FAIL: ddl_test.go:123: testDDLSuite.TestColumn"];
        assert_eq!(
            c.classify(Category::Case, "tidb_ghpr_unit_test", &lines),
            vec!["ddl_test.go:testDDLSuite.TestColumn"]
        );
    }

    #[test]
    fn test_empty_buffer_never_faults() {
        let empty: Vec<String> = Vec::new();
        let c = classifier();
        for category in Category::ALL {
            assert!(c.classify(category, "tikv_ghpr_test", &empty).is_empty());
            assert!(c.classify(category, "tidb_ghpr_unit_test", &empty).is_empty());
        }
    }

    #[test]
    fn test_classify_all_skips_empty_categories() {
        let lib = RuleLibrary {
            environment: vec![InfraRuleDef {
                name: "kill_signal".to_string(),
                pattern: "signal killed".to_string(),
            }],
            ..RuleLibrary::default()
        };
        let c = Classifier::with_rules(ConfigManager::get_default(), &lib).unwrap();
        let lines = ["go test: signal killed"];
        assert_eq!(
            c.classify_all("tidb_ghpr_check", &lines),
            vec![(Category::Environment, vec!["kill_signal".to_string()])]
        );
    }
}
