//! 规则编译器核心
//! 仅负责将原始规则编译为可执行的正则模式，任何一条模式编译失败都直接返回错误

use std::sync::Arc;
use std::time::Instant;
use regex::Regex;

use super::pattern::{CompiledInfraRule, CompiledPatternRule, CompiledRuleLibrary};
use crate::error::{FailsigError, FailsigResult};
use crate::rule::{InfraRuleDef, PatternRuleDef, RuleLibrary};

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译规则库
    pub fn compile(rule_lib: &RuleLibrary) -> FailsigResult<CompiledRuleLibrary> {
        let start = Instant::now();
        let mut stats = CompileStats::default();

        let environment = Self::compile_infra_rules(&rule_lib.environment, &mut stats)?;
        let compile = Self::compile_table(&rule_lib.compile, &mut stats)?;
        let check = Self::compile_table(&rule_lib.check, &mut stats)?;
        let case = Self::compile_table(&rule_lib.case, &mut stats)?;

        let _total_time = start.elapsed();
        log_debug!("✅ 规则编译完成，总耗时{:?}", _total_time);
        log_debug!(
            "📊 编译统计：规则{}条、模式{}条（environment={}，compile={}，check={}，case={}）",
            stats.rule_count,
            stats.pattern_count,
            environment.len(),
            compile.len(),
            check.len(),
            case.len()
        );

        Ok(CompiledRuleLibrary {
            environment: Arc::new(environment),
            compile: Arc::new(compile),
            check: Arc::new(check),
            case: Arc::new(case),
        })
    }

    /// 编译作业作用域规则表（保持声明顺序）
    pub fn compile_table(
        rules: &[PatternRuleDef],
        stats: &mut CompileStats,
    ) -> FailsigResult<Vec<CompiledPatternRule>> {
        rules
            .iter()
            .map(|rule| {
                let patterns = rule
                    .patterns
                    .iter()
                    .map(|pattern| Self::compile_single_pattern(&rule.name, pattern))
                    .collect::<FailsigResult<Vec<_>>>()?;
                stats.rule_count += 1;
                stats.pattern_count += patterns.len();
                Ok(CompiledPatternRule {
                    scope: rule.scope.iter().cloned().collect(),
                    name: rule.name.clone(),
                    patterns,
                })
            })
            .collect()
    }

    /// 编译环境规则（单条正则）
    fn compile_infra_rules(
        rules: &[InfraRuleDef],
        stats: &mut CompileStats,
    ) -> FailsigResult<Vec<CompiledInfraRule>> {
        rules
            .iter()
            .map(|rule| {
                let regex = Self::compile_single_pattern(&rule.name, &rule.pattern)?;
                stats.rule_count += 1;
                stats.pattern_count += 1;
                Ok(CompiledInfraRule {
                    name: rule.name.clone(),
                    regex,
                })
            })
            .collect()
    }

    /// 编译单个正则模式，失败时带上规则名
    fn compile_single_pattern(rule_name: &str, raw_pattern: &str) -> FailsigResult<Regex> {
        Regex::new(raw_pattern).map_err(|source| FailsigError::RuleCompileError {
            rule: rule_name.to_string(),
            pattern: raw_pattern.to_string(),
            source,
        })
    }
}

/// 编译统计信息
#[derive(Debug, Clone, Default)]
pub struct CompileStats {
    pub rule_count: usize,
    pub pattern_count: usize,
}
