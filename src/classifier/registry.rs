//! 类别注册表：每个失败类别对应一个有序的提取器列表
//! 构建后只读

use std::collections::HashMap;

use crate::compiler::CompiledRuleLibrary;
use crate::config::GlobalConfig;
use crate::extractor::{
    AnnotatedCheckExtractor, Extractor, GenericRuleExtractor, IntegrationTestExtractor,
    NativeTestExtractor, UnconditionalInfraExtractor, UnitTestExtractor,
};
use crate::rule::Category;

/// 类别注册表
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    entries: HashMap<Category, Vec<Extractor>>,
}

impl CategoryRegistry {
    /// 按编译后的规则库与作业配置构建注册表
    pub fn build(config: &GlobalConfig, compiled: &CompiledRuleLibrary) -> Self {
        let mut entries = HashMap::new();

        entries.insert(
            Category::Environment,
            vec![Extractor::Infra(UnconditionalInfraExtractor::new(compiled.environment.clone()))],
        );
        entries.insert(
            Category::Compile,
            vec![Extractor::Generic(GenericRuleExtractor::new(compiled.compile.clone()))],
        );
        entries.insert(
            Category::Check,
            vec![
                Extractor::Generic(GenericRuleExtractor::new(compiled.check.clone())),
                Extractor::AnnotatedCheck(AnnotatedCheckExtractor::new(config.annotated_check_job.clone())),
            ],
        );
        entries.insert(
            Category::Case,
            vec![
                Extractor::Generic(GenericRuleExtractor::new(compiled.case.clone())),
                Extractor::UnitTest(UnitTestExtractor::new(config.unit_test_jobs.clone())),
                Extractor::IntegrationTest(IntegrationTestExtractor::new(config.tics_job.clone())),
                Extractor::NativeTest(NativeTestExtractor::new(config.native_test_job.clone())),
            ],
        );

        Self { entries }
    }

    /// 类别对应的提取器列表（按声明顺序）
    pub fn extractors(&self, category: Category) -> &[Extractor] {
        self.entries.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }
}
