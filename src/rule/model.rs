//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::FailsigError;

/// 失败类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Environment,
    Compile,
    Check,
    Case,
}

impl Category {
    /// 注册表中的类别顺序
    pub const ALL: [Category; 4] = [
        Category::Environment,
        Category::Compile,
        Category::Check,
        Category::Case,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Environment => "environment",
            Category::Compile => "compile",
            Category::Check => "check",
            Category::Case => "case",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FailsigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "environment" | "env" => Ok(Category::Environment),
            "compile" => Ok(Category::Compile),
            "check" => Ok(Category::Check),
            "case" => Ok(Category::Case),
            other => Err(FailsigError::InvalidInput(format!("未知的失败类别：{}", other))),
        }
    }
}

/// 作业作用域规则定义（scope 为空表示对所有作业生效）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRuleDef {
    #[serde(default)]
    pub scope: Vec<String>,
    pub name: String,
    pub patterns: Vec<String>,
}

impl PatternRuleDef {
    pub fn new(scope: &[&str], name: &str, patterns: &[&str]) -> Self {
        Self {
            scope: scope.iter().map(|s| s.to_string()).collect(),
            name: name.to_string(),
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// 环境类规则定义：名称 -> 单条正则，无作业作用域
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfraRuleDef {
    pub name: String,
    pub pattern: String,
}

/// 完整规则库，各表内部顺序即匹配与输出顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleLibrary {
    #[serde(default)]
    pub environment: Vec<InfraRuleDef>,
    #[serde(default)]
    pub compile: Vec<PatternRuleDef>,
    #[serde(default)]
    pub check: Vec<PatternRuleDef>,
    #[serde(default)]
    pub case: Vec<PatternRuleDef>,
}
