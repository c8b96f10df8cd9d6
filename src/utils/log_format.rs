//! 日志格式化工具
//! 日志行可能很长（完整SQL、堆栈），输出到日志前统一压缩预览

use std::fmt::{self, Write};

/// 调试日志宏：开启 logging 特性时转发到 tracing::debug，否则不产生任何代码
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        {
            tracing::debug!($($arg)*);
        }
    }};
}

/// 空白字符折叠 + 截断，零堆分配
/// 超过 max_len 个字符时追加省略号
#[inline(always)]
pub fn preview_compact<'a>(s: &'a str, max_len: usize) -> impl fmt::Display + 'a {
    struct CompactView<'a> {
        source: &'a str,
        max_length: usize,
    }

    impl fmt::Display for CompactView<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut char_count = 0;
            let mut last_was_whitespace = false;

            for ch in self.source.trim().chars() {
                if char_count >= self.max_length {
                    f.write_char('…')?;
                    break;
                }

                if ch.is_whitespace() {
                    if !last_was_whitespace {
                        f.write_char(' ')?;
                        char_count += 1;
                        last_was_whitespace = true;
                    }
                } else {
                    f.write_char(ch)?;
                    char_count += 1;
                    last_was_whitespace = false;
                }
            }
            Ok(())
        }
    }

    CompactView {
        source: s,
        max_length: max_len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_collapses_whitespace() {
        let preview = preview_compact("  FAIL:\t\tddl_test.go:12:   testSuite  ", 64).to_string();
        assert_eq!(preview, "FAIL: ddl_test.go:12: testSuite");
    }

    #[test]
    fn test_preview_truncates() {
        let preview = preview_compact("abcdefgh", 4).to_string();
        assert_eq!(preview, "abcd…");
    }
}
