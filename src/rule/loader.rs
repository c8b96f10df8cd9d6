//! 规则加载管理器
//! 负责选择内置规则或从本地JSON文件加载替代规则

use std::fs;
use std::path::Path;

use super::builtin::builtin_library;
use super::model::RuleLibrary;
use crate::config::GlobalConfig;
use crate::error::{FailsigError, FailsigResult};

/// 规则加载管理器
pub struct RuleLoader;

impl RuleLoader {
    /// 加载规则库（配置了 rule_path 时读取文件，否则使用内置规则）
    pub fn load(config: &GlobalConfig) -> FailsigResult<RuleLibrary> {
        match &config.rule_path {
            Some(path) => Self::from_json_file(path),
            None => {
                log_debug!("使用内置规则库");
                Ok(Self::builtin())
            }
        }
    }

    /// 内置规则库
    pub fn builtin() -> RuleLibrary {
        builtin_library()
    }

    /// 从JSON文件加载规则库
    pub fn from_json_file(path: &Path) -> FailsigResult<RuleLibrary> {
        let content = fs::read_to_string(path).map_err(|e| {
            FailsigError::RuleLoadError(format!("读取规则文件{}失败：{}", path.display(), e))
        })?;
        let rule_lib = Self::from_json_str(&content)?;
        log_debug!(
            "从{}加载规则库成功：environment={}，compile={}，check={}，case={}",
            path.display(),
            rule_lib.environment.len(),
            rule_lib.compile.len(),
            rule_lib.check.len(),
            rule_lib.case.len()
        );
        Ok(rule_lib)
    }

    /// 从JSON字符串解析规则库
    pub fn from_json_str(content: &str) -> FailsigResult<RuleLibrary> {
        let rule_lib: RuleLibrary = serde_json::from_str(content)
            .map_err(|e| FailsigError::RuleParseError(e.to_string()))?;
        Self::validate(&rule_lib)?;
        Ok(rule_lib)
    }

    /// 基础校验：规则名不能为空，作用域规则至少一条模式
    fn validate(rule_lib: &RuleLibrary) -> FailsigResult<()> {
        for rule in &rule_lib.environment {
            if rule.name.trim().is_empty() {
                return Err(FailsigError::RuleParseError("环境规则名称为空".to_string()));
            }
        }
        let tables = [
            ("compile", &rule_lib.compile),
            ("check", &rule_lib.check),
            ("case", &rule_lib.case),
        ];
        for (table, rules) in tables {
            for rule in rules.iter() {
                if rule.name.trim().is_empty() {
                    return Err(FailsigError::RuleParseError(format!("{}表存在空名称规则", table)));
                }
                if rule.patterns.is_empty() {
                    return Err(FailsigError::RuleParseError(format!(
                        "{}表规则{}没有任何模式",
                        table, rule.name
                    )));
                }
            }
        }
        Ok(())
    }
}
