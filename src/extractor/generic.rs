//! 通用规则提取器：按作业作用域过滤的多模式匹配

use crate::compiler::CompiledRuleTable;
use crate::utils::{line_at, preview_compact};

/// 通用规则提取器
/// 每条规则只看第0行，首个命中的模式即贡献规则名，后续规则继续匹配
#[derive(Debug, Clone)]
pub struct GenericRuleExtractor {
    table: CompiledRuleTable,
}

impl GenericRuleExtractor {
    pub fn new(table: CompiledRuleTable) -> Self {
        Self { table }
    }

    pub fn extract<S: AsRef<str>>(&self, job: &str, lines: &[S]) -> Vec<String> {
        let Some(line) = line_at(lines, 0) else {
            return Vec::new();
        };

        let mut signatures = Vec::new();
        for rule in self.table.iter() {
            if !rule.in_scope(job) {
                continue;
            }
            if let Some(_regex) = rule.first_match(line) {
                log_debug!(
                    "规则命中：作业={}，规则={}，模式={}，行={}",
                    job,
                    rule.name,
                    _regex.as_str(),
                    preview_compact(line, 120)
                );
                signatures.push(rule.name.clone());
            }
        }
        signatures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::compiler::{CompileStats, RuleCompiler};
    use crate::rule::PatternRuleDef;

    fn extractor(rules: &[PatternRuleDef]) -> GenericRuleExtractor {
        let table = RuleCompiler::compile_table(rules, &mut CompileStats::default()).unwrap();
        GenericRuleExtractor::new(Arc::new(table))
    }

    #[test]
    fn test_two_rules_fire_in_table_order() {
        let ex = extractor(&[
            PatternRuleDef::new(&[], "errcheck", &[r"\(errcheck\)"]),
            PatternRuleDef::new(&[], "unrelated", &["nothing"]),
            PatternRuleDef::new(&[], "revive", &[r"\(revive\)"]),
        ]);
        let lines = ["util.go:3:1: exported func (revive) ... value is not checked (errcheck)"];
        assert_eq!(ex.extract("tidb_ghpr_check", &lines), vec!["errcheck", "revive"]);
    }

    #[test]
    fn test_first_pattern_short_circuits_rule() {
        let ex = extractor(&[PatternRuleDef::new(&[], "go_mod_error", &["go.sum", "missing"])]);
        let lines = ["missing go.sum entry for module"];
        assert_eq!(ex.extract("tidb_ghpr_build", &lines), vec!["go_mod_error"]);
    }

    #[test]
    fn test_out_of_scope_rule_skipped() {
        let ex = extractor(&[PatternRuleDef::new(&["tikv_ghpr_build"], "rust_compile_error", &[r"error\[E\d{4}\]"])]);
        let lines = ["error[E0308]: mismatched types"];
        assert!(ex.extract("tidb_ghpr_build", &lines).is_empty());
        assert_eq!(ex.extract("tikv_ghpr_build", &lines), vec!["rust_compile_error"]);
    }

    #[test]
    fn test_only_first_line_is_inspected() {
        let ex = extractor(&[PatternRuleDef::new(&[], "rustfmt", &[r"Diff in \S+\.rs"])]);
        let lines = ["Running rustfmt", "Diff in src/lib.rs at line 3:"];
        assert!(ex.extract("tikv_ghpr_build", &lines).is_empty());
        let empty: [&str; 0] = [];
        assert!(ex.extract("tikv_ghpr_build", &empty).is_empty());
    }
}
