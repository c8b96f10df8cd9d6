//! 全局分类器单例管理
use once_cell::sync::OnceCell;

use super::classifier::Classifier;
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::{FailsigError, FailsigResult};
use crate::rule::Category;

/// 全局分类器实例
static GLOBAL_CLASSIFIER: OnceCell<Classifier> = OnceCell::new();

/// 初始化全局分类器（默认配置）
pub fn init_classifier() -> FailsigResult<()> {
    init_classifier_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局分类器，重复初始化保持首次结果
pub fn init_classifier_with_config(config: GlobalConfig) -> FailsigResult<()> {
    GLOBAL_CLASSIFIER.get_or_try_init(|| Classifier::new(config))?;
    Ok(())
}

/// 获取全局分类器
pub(crate) fn get_global_classifier() -> FailsigResult<&'static Classifier> {
    GLOBAL_CLASSIFIER.get().ok_or(FailsigError::ClassifierNotInitialized)
}

/// 使用全局分类器分类
pub fn classify_failure<S: AsRef<str>>(
    category: Category,
    job: &str,
    lines: &[S],
) -> FailsigResult<Vec<String>> {
    let classifier = get_global_classifier()?;
    Ok(classifier.classify(category, job, lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_classifier() {
        init_classifier().unwrap();
        init_classifier().unwrap();
        let lines = ["HTTP/1.1 500 Internal Server Error"];
        assert_eq!(
            classify_failure(Category::Environment, "tidb_ghpr_check", &lines).unwrap(),
            vec!["http_500"]
        );
    }
}
