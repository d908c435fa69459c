//! Pure string helpers shared by the node serializer and the template
//! builder: common-indentation detection, canonical newline splitting,
//! and the flat-string analogs of `expand_to_node`.

use crate::template::TemplateParts;

/// Splits `s` on `\r\n`, `\r`, or `\n`, treating `\r\n` as a single
/// separator. The target-language analog of the source's
/// `NEWLINE_REGEXP`.
#[must_use]
pub fn split_newlines(s: &str) -> Vec<&str> {
    let bytes = s.as_bytes();
    let mut result = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                result.push(&s[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                result.push(&s[start..i]);
                i += 1;
                if i < bytes.len() && bytes[i] == b'\n' {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    result.push(&s[start..]);
    result
}

/// The length of the longest run of leading ASCII space characters shared
/// by every line whose length is non-zero. Lines of length zero are
/// excluded from the comparison; tabs are not treated as spaces.
#[must_use]
pub fn find_indentation(lines: &[&str]) -> usize {
    let mut common: Option<usize> = None;
    for line in lines {
        if line.is_empty() {
            continue;
        }
        let leading = line.bytes().take_while(|&b| b == b' ').count();
        common = Some(match common {
            None => leading,
            Some(c) => c.min(leading),
        });
    }
    common.unwrap_or(0)
}

/// The string-returning analog of [`crate::template::expand_to_node`].
/// Applies the same template-shape rules and returns the flat output.
#[must_use]
pub fn expand_to_string(parts: TemplateParts) -> String {
    crate::template::expand_to_node(parts).serialize()
}

/// As [`expand_to_string`], but the result is guaranteed to end in
/// exactly one `\n`.
#[must_use]
pub fn expand_to_string_with_nl(parts: TemplateParts) -> String {
    let mut s = expand_to_string(parts);
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
    s.push('\n');
    s
}

/// Rewrites every line terminator in `s` (`\n`, `\r\n`, or `\r`) to `eol`.
#[must_use]
pub fn normalize_eol(s: &str, eol: &str) -> String {
    split_newlines(s).join(eol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_newlines_handles_all_three_forms() {
        assert_eq!(split_newlines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn split_newlines_preserves_empty_segments() {
        assert_eq!(split_newlines("\n\n"), vec!["", "", ""]);
    }

    #[test]
    fn find_indentation_ignores_empty_lines() {
        assert_eq!(find_indentation(&["    foo", "", "    bar"]), 4);
    }

    #[test]
    fn find_indentation_is_bounded_by_shortest_prefix() {
        assert_eq!(find_indentation(&["    foo", "  bar"]), 2);
    }

    #[test]
    fn find_indentation_of_all_empty_is_zero() {
        assert_eq!(find_indentation(&["", ""]), 0);
    }

    #[test]
    fn normalize_eol_is_idempotent_through_lf() {
        let s = "a\r\nb\rc\n";
        let once = normalize_eol(s, "\r\n");
        let twice = normalize_eol(&normalize_eol(&once, "\n"), "\r\n");
        assert_eq!(once, twice);
    }
}
