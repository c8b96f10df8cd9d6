//! 日志行安全访问工具
//! 调用方给出的窗口长度不可信，所有下标/切分都经由这里，越界一律视为未匹配

/// 按下标读取日志行，越界返回 None
#[inline]
pub fn line_at<S: AsRef<str>>(lines: &[S], index: usize) -> Option<&str> {
    lines.get(index).map(AsRef::as_ref)
}

/// 返回第一个 marker 之后的文本（已trim），marker 不存在返回 None
#[inline]
pub fn text_after<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.find(marker).map(|pos| line[pos + marker.len()..].trim())
}

/// 按连续空白切分，不做首尾trim：行首缩进会产生一个空字段
/// 例如 "  Goroutine 42" -> ["", "Goroutine", "42"]
pub fn whitespace_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut in_field = true;
    for (idx, ch) in line.char_indices() {
        if ch.is_whitespace() {
            if in_field {
                fields.push(&line[start..idx]);
                in_field = false;
            }
        } else if !in_field {
            start = idx;
            in_field = true;
        }
    }
    if in_field {
        fields.push(&line[start..]);
    }
    fields
}
