//! 环境/基础设施提取器：与作业无关，检测DNS失败、进程被杀、连接重置等噪声

use std::sync::Arc;

use crate::compiler::CompiledInfraRule;
use crate::utils::line_at;

/// 环境提取器，所有命中的规则都会返回
#[derive(Debug, Clone)]
pub struct UnconditionalInfraExtractor {
    rules: Arc<Vec<CompiledInfraRule>>,
}

impl UnconditionalInfraExtractor {
    pub fn new(rules: Arc<Vec<CompiledInfraRule>>) -> Self {
        Self { rules }
    }

    pub fn extract<S: AsRef<str>>(&self, _job: &str, lines: &[S]) -> Vec<String> {
        let Some(line) = line_at(lines, 0) else {
            return Vec::new();
        };

        self.rules
            .iter()
            .filter(|rule| rule.regex.is_match(line))
            .map(|rule| {
                log_debug!("环境规则命中：规则={}", rule.name);
                rule.name.clone()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::RuleCompiler;
    use crate::rule::RuleLoader;

    fn extractor() -> UnconditionalInfraExtractor {
        let compiled = RuleCompiler::compile(&RuleLoader::builtin()).unwrap();
        UnconditionalInfraExtractor::new(compiled.environment)
    }

    #[test]
    fn test_dns_failure_any_job() {
        let lines = ["fatal: unable to access 'https://github.com/pingcap/tidb/': Could not resolve host: github.com"];
        assert_eq!(extractor().extract("whatever_job", &lines), vec!["dns_resolve_failure"]);
    }

    #[test]
    fn test_multiple_entries_fire_together() {
        let lines = ["make: *** [test] signal killed (core dumped)"];
        assert_eq!(extractor().extract("tikv_ghpr_test", &lines), vec!["kill_signal", "core_dumped"]);
    }

    #[test]
    fn test_socket_errors() {
        let lines = ["java.net.SocketException: Socket closed; Connection reset by peer"];
        assert_eq!(
            extractor().extract("tidb_ghpr_check", &lines),
            vec!["connection_reset", "socket_close"]
        );
    }

    #[test]
    fn test_clean_line_yields_nothing() {
        let lines = ["ok  github.com/pingcap/tidb/ddl 12.3s"];
        assert!(extractor().extract("tidb_ghpr_check", &lines).is_empty());
    }
}
