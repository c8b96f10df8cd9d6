//! 提取模块：六种签名提取策略
//! 集合是封闭的，统一通过 Extractor 枚举分发
pub mod generic;
pub mod infra;
pub mod annotated_check;

pub use self::generic::GenericRuleExtractor;
pub use self::infra::UnconditionalInfraExtractor;
pub use self::unit_test::UnitTestExtractor;
pub use self::integration_test::IntegrationTestExtractor;
pub use self::native_test::NativeTestExtractor;
pub use self::annotated_check::AnnotatedCheckExtractor;

/// 签名提取器
#[derive(Debug, Clone)]
pub enum Extractor {
    Generic(GenericRuleExtractor),
    Infra(UnconditionalInfraExtractor),
    UnitTest(UnitTestExtractor),
    IntegrationTest(IntegrationTestExtractor),
    NativeTest(NativeTestExtractor),
    AnnotatedCheck(AnnotatedCheckExtractor),
}

impl Extractor {
    /// 对 (作业, 日志行) 提取签名；短输入、未命中均返回空
    pub fn extract<S: AsRef<str>>(&self, job: &str, lines: &[S]) -> Vec<String> {
        match self {
            Extractor::Generic(ex) => ex.extract(job, lines),
            Extractor::Infra(ex) => ex.extract(job, lines),
            Extractor::UnitTest(ex) => ex.extract(job, lines),
            Extractor::IntegrationTest(ex) => ex.extract(job, lines),
            Extractor::NativeTest(ex) => ex.extract(job, lines),
            Extractor::AnnotatedCheck(ex) => ex.extract(job, lines),
        }
    }

    /// 提取器名称（日志用）
    pub fn kind(&self) -> &'static str {
        match self {
            Extractor::Generic(_) => "generic",
            Extractor::Infra(_) => "infra",
            Extractor::UnitTest(_) => "unit_test",
            Extractor::IntegrationTest(_) => "integration_test",
            Extractor::NativeTest(_) => "native_test",
            Extractor::AnnotatedCheck(_) => "annotated_check",
        }
    }
}
