//! FATAL日志检查提取器：单作业，排除已知的瞬时错误 "open DB failed"

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::line_at;

static FATAL_ERROR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"FATAL.*error=.*").unwrap());

const TRANSIENT_EXCLUSION: &str = "open DB failed";

#[derive(Debug, Clone)]
pub struct AnnotatedCheckExtractor {
    job: String,
}

impl AnnotatedCheckExtractor {
    pub fn new(job: impl Into<String>) -> Self {
        Self { job: job.into() }
    }

    pub fn extract<S: AsRef<str>>(&self, job: &str, lines: &[S]) -> Vec<String> {
        if job != self.job {
            return Vec::new();
        }
        let Some(line) = line_at(lines, 0) else {
            return Vec::new();
        };
        match FATAL_ERROR_REGEX.find(line) {
            Some(matched) if !line.contains(TRANSIENT_EXCLUSION) => vec![matched.as_str().to_string()],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = "tidb_ghpr_integration_ddl_test";

    #[test]
    fn test_open_db_failed_excluded() {
        let lines = ["[2021/06/01 10:00:00.000 +08:00] [FATAL] [main.go:30] [\"run failed\"] [error=open DB failed: timeout]"];
        assert!(AnnotatedCheckExtractor::new(JOB).extract(JOB, &lines).is_empty());
    }

    #[test]
    fn test_fatal_raw_text() {
        let lines = ["[2021/06/01 10:00:00.000 +08:00] [FATAL] [ddl.go:88] [error=unexpected nil pointer]"];
        assert_eq!(
            AnnotatedCheckExtractor::new(JOB).extract(JOB, &lines),
            vec!["FATAL] [ddl.go:88] [error=unexpected nil pointer]"]
        );
    }

    #[test]
    fn test_other_job_ignored() {
        let lines = ["FATAL ... error=unexpected nil pointer"];
        assert!(AnnotatedCheckExtractor::new(JOB).extract("tidb_ghpr_check", &lines).is_empty());
    }

    #[test]
    fn test_plain_fatal_lines() {
        let ex = AnnotatedCheckExtractor::new(JOB);
        assert!(ex.extract(JOB, &["FATAL ... error=open DB failed: timeout"]).is_empty());
        assert_eq!(
            ex.extract(JOB, &["FATAL ... error=unexpected nil pointer"]),
            vec!["FATAL ... error=unexpected nil pointer"]
        );
    }
}
