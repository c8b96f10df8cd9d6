//! 内置规则表
//! 进程启动时编译一次，之后只读

use super::model::{InfraRuleDef, PatternRuleDef, RuleLibrary};

const TIDB_JOBS: &[&str] = &[
    "tidb_ghpr_build",
    "tidb_ghpr_check",
    "tidb_ghpr_check_2",
    "tidb_ghpr_unit_test",
];

const TIKV_JOBS: &[&str] = &[
    "tikv_ghpr_build",
    "tikv_ghpr_test",
    "tikv_ghpr_integration_common_test",
];

const MYSQL_TEST_JOBS: &[&str] = &[
    "tidb_ghpr_mysql_test",
    "tidb_ghpr_integration_common_test",
];

/// 环境/基础设施规则（名称 -> 单条正则），按声明顺序输出
const ENVIRONMENT_RULES: &[(&str, &str)] = &[
    ("plugin_ver_mismatch", r"[FATAL].*?plugin was built with a different version of package"),
    ("dns_resolve_failure", r"Could not resolve host"),
    ("pod_vanish", r"\[get\]  for kind: \[Pod\]  with name: \[(.*?)\]  in namespace: \[jenkins-ci\]  failed"),
    ("http_500", r"500 Internal Server Error"),
    ("kill_signal", r"signal killed|signal interrupt"),
    ("core_dumped", r"core dumped"),
    ("rewrite_error", r"Rewrite error"),
    ("connection_closed", r"java\.nio\.channels\.ClosedByInterruptException"),
    ("connection_reset", r"[Cc]onnection reset"),
    ("socket_timeout", r"java.net.SocketTimeoutException"),
    ("socket_close", r"java.net.SocketException: Socket closed"),
];

fn environment_rules() -> Vec<InfraRuleDef> {
    ENVIRONMENT_RULES
        .iter()
        .map(|(name, pattern)| InfraRuleDef {
            name: name.to_string(),
            pattern: pattern.to_string(),
        })
        .collect()
}

fn compile_rules() -> Vec<PatternRuleDef> {
    vec![
        PatternRuleDef::new(TIDB_JOBS, "go_build_error", &[
            r"\.go:\d+:\d+: undefined: ",
            r"\.go:\d+:\d+: cannot use ",
            r"\.go:\d+:\d+: (too many|not enough) arguments",
            r"\.go:\d+:\d+: .* declared (and|but) not used",
        ]),
        PatternRuleDef::new(TIDB_JOBS, "go_mod_error", &[
            r"verifying (module|go\.mod): checksum mismatch",
            r"missing go\.sum entry",
            r"go: updates to go\.mod needed",
        ]),
        PatternRuleDef::new(TIDB_JOBS, "parser_generate_error", &[
            r"make: \*\*\* \[.*parser.*\] Error \d+",
            r"goyacc: .*conflicts",
        ]),
        PatternRuleDef::new(TIKV_JOBS, "rust_compile_error", &[
            r"error\[E\d{4}\]",
            r"error: could not compile `",
        ]),
        PatternRuleDef::new(TIKV_JOBS, "rust_link_error", &[
            r"error: linking with `.*` failed",
            r"collect2: error: ld returned \d+ exit status",
        ]),
    ]
}

fn check_rules() -> Vec<PatternRuleDef> {
    vec![
        PatternRuleDef::new(TIDB_JOBS, "gofmt", &[
            r"File is not `gofmt`-ed",
            r"please run 'gofmt",
        ]),
        PatternRuleDef::new(TIDB_JOBS, "goimports", &[r"File is not `goimports`-ed"]),
        PatternRuleDef::new(TIDB_JOBS, "revive", &[r"\(revive\)"]),
        PatternRuleDef::new(TIDB_JOBS, "go_vet", &[r"\(govet\)", r"^vet: "]),
        PatternRuleDef::new(TIDB_JOBS, "staticcheck", &[r"\(staticcheck\)", r"\bSA\d{4}: "]),
        PatternRuleDef::new(TIDB_JOBS, "errcheck", &[
            r"\(errcheck\)",
            r"Error return value of .* is not checked",
        ]),
        PatternRuleDef::new(TIDB_JOBS, "unused", &[r"\(unused\)", r"\(deadcode\)", r"\(varcheck\)"]),
        PatternRuleDef::new(&[], "license_header", &[r"[Ll]icense header", r"missing license"]),
        PatternRuleDef::new(&[], "git_dirty", &[
            r"Your commit is changed after running",
            r"git diff --quiet",
        ]),
        PatternRuleDef::new(TIKV_JOBS, "rustfmt", &[r"Diff in \S+\.rs at line \d+"]),
        PatternRuleDef::new(TIKV_JOBS, "clippy", &[r"clippy::[a-z_]+"]),
    ]
}

fn case_rules() -> Vec<PatternRuleDef> {
    vec![
        PatternRuleDef::new(TIKV_JOBS, "tikv_test_timeout", &[
            r"has been running for over \d+ seconds",
        ]),
        PatternRuleDef::new(MYSQL_TEST_JOBS, "mysql_test_connection_lost", &[
            r"invalid connection",
            r"driver: bad connection",
        ]),
    ]
}

/// 内置规则库
pub fn builtin_library() -> RuleLibrary {
    RuleLibrary {
        environment: environment_rules(),
        compile: compile_rules(),
        check: check_rules(),
        case: case_rules(),
    }
}
