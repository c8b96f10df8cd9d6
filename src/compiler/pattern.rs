//! 编译后规则模型
//! 正则编译后的结构，构建后只读，可在线程间共享

use std::collections::HashSet;
use std::sync::Arc;
use regex::Regex;

/// 编译后的作业作用域规则
#[derive(Debug, Clone)]
pub struct CompiledPatternRule {
    pub scope: HashSet<String>,
    pub name: String,
    pub patterns: Vec<Regex>,
}

impl CompiledPatternRule {
    /// 作用域为空表示所有作业
    #[inline]
    pub fn in_scope(&self, job: &str) -> bool {
        self.scope.is_empty() || self.scope.contains(job)
    }

    /// 按顺序尝试模式，返回首个命中的模式
    pub fn first_match(&self, line: &str) -> Option<&Regex> {
        self.patterns.iter().find(|regex| regex.is_match(line))
    }
}

/// 编译后的规则表（保持声明顺序）
pub type CompiledRuleTable = Arc<Vec<CompiledPatternRule>>;

/// 编译后的环境规则
#[derive(Debug, Clone)]
pub struct CompiledInfraRule {
    pub name: String,
    pub regex: Regex,
}

/// 编译后的规则库
#[derive(Debug, Clone)]
pub struct CompiledRuleLibrary {
    pub environment: Arc<Vec<CompiledInfraRule>>,
    pub compile: CompiledRuleTable,
    pub check: CompiledRuleTable,
    pub case: CompiledRuleTable,
}
