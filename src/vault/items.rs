//! Item framing inside the decrypted plaintext.
//!
//! The plaintext is a sequence of JSON documents joined by a separator,
//! newest first:
//!
//! ```text
//! item_n <SEP> item_n-1 <SEP> ... <SEP> item_0
//! ```
//!
//! The default separator is ASCII RS (`0x1E`).  JSON does not allow raw
//! control characters inside strings and RS is not JSON whitespace, so a
//! valid item can never contain it.

use serde::de::IgnoredAny;

use crate::errors::{PasscError, Result};

/// Default item separator (ASCII record separator).
pub const DEFAULT_SEPARATOR: &str = "\u{1e}";

/// Put `newest` in front of the existing plaintext.
pub fn prepend_item(newest: &str, older: &str, separator: &str) -> String {
    let mut out = String::with_capacity(newest.len() + separator.len() + older.len());
    out.push_str(newest);
    out.push_str(separator);
    out.push_str(older);
    out
}

/// Split a decrypted plaintext into its items, newest first.
pub fn split_items<'a>(plaintext: &'a str, separator: &str) -> Vec<&'a str> {
    plaintext.split(separator).collect()
}

/// Returns `true` if `separator` contains a character that cannot occur
/// anywhere in a valid JSON document.
pub fn separator_is_json_safe(separator: &str) -> bool {
    separator
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\t' | '\n' | '\r'))
}

/// Re-render one item with two-space indentation.
///
/// The item is checked to be a single JSON document, then re-indented
/// token by token: key order, duplicate keys, and the exact text of
/// numbers and strings are kept.
pub fn pretty_item(index: usize, item: &str) -> Result<String> {
    check_json(index, item)?;
    Ok(reindent(item))
}

fn check_json(index: usize, item: &str) -> Result<()> {
    serde_json::from_str::<IgnoredAny>(item)
        .map(|_| ())
        .map_err(|source| PasscError::InvalidItem { index, source })
}

/// Whitespace allowed between JSON tokens.
fn is_json_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Re-indent an already validated JSON document.
///
/// Empty objects and arrays stay on one line (`{}`, `[]`).
fn reindent(src: &str) -> String {
    let mut out = String::with_capacity(src.len() * 2);
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '{' | '[' => {
                out.push(c);
                while chars.peek().is_some_and(|&n| is_json_space(n)) {
                    chars.next();
                }
                let close = if c == '{' { '}' } else { ']' };
                if chars.peek() == Some(&close) {
                    chars.next();
                    out.push(close);
                } else {
                    depth += 1;
                    newline(&mut out, depth);
                }
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                newline(&mut out, depth);
                out.push(c);
            }
            ',' => {
                out.push(c);
                newline(&mut out, depth);
            }
            ':' => out.push_str(": "),
            c if is_json_space(c) => {}
            c => out.push(c),
        }
    }

    out
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Drop insignificant whitespace from a JSON document, leaving strings
/// untouched.
fn compact(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in src.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        } else if is_json_space(c) {
            continue;
        }
        out.push(c);
    }

    out
}

/// Render items as the export document: `[item0,item1,...]`.
///
/// Every item is validated before anything is returned, so the caller
/// either gets the whole document or an error.
pub fn render_export(items: &[&str]) -> Result<String> {
    let rendered = items
        .iter()
        .enumerate()
        .map(|(index, item)| pretty_item(index, item))
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("[{}]", rendered.join(",")))
}

/// One-line preview of an item for tables.
pub fn compact_preview(item: &str, max_chars: usize) -> String {
    let compact = match serde_json::from_str::<IgnoredAny>(item) {
        Ok(_) => compact(item),
        Err(_) => item.replace(['\n', '\r'], " "),
    };

    if compact.chars().count() <= max_chars {
        compact
    } else {
        let cut: String = compact.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{cut}\u{2026}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepend_puts_new_item_first() {
        let out = prepend_item("B", "A", DEFAULT_SEPARATOR);
        assert_eq!(out, "B\u{1e}A");
        assert_eq!(split_items(&out, DEFAULT_SEPARATOR), vec!["B", "A"]);
    }

    #[test]
    fn split_single_item() {
        assert_eq!(split_items("{\"a\":1}", DEFAULT_SEPARATOR), vec!["{\"a\":1}"]);
    }

    #[test]
    fn default_separator_is_json_safe() {
        assert!(separator_is_json_safe(DEFAULT_SEPARATOR));
        assert!(!separator_is_json_safe(","));
        assert!(!separator_is_json_safe("\n"));
        assert!(separator_is_json_safe("--\u{1f}--"));
    }

    #[test]
    fn default_separator_never_survives_json_encoding() {
        let value = serde_json::json!({ "note": "a\u{1e}b" });
        let encoded = serde_json::to_string(&value).unwrap();
        assert!(!encoded.contains(DEFAULT_SEPARATOR));
    }

    #[test]
    fn pretty_item_uses_two_space_indent_and_keeps_order() {
        let out = pretty_item(0, r#"{"z":1,"a":"x"}"#).unwrap();
        assert_eq!(out, "{\n  \"z\": 1,\n  \"a\": \"x\"\n}");
    }

    #[test]
    fn pretty_item_keeps_number_text_and_duplicate_keys() {
        let item = r#"{"pin":1.50,"big":123456789012345678901234,"e":1e2,"k":"a","k":"b"}"#;
        let out = pretty_item(0, item).unwrap();
        assert_eq!(
            out,
            "{\n  \"pin\": 1.50,\n  \"big\": 123456789012345678901234,\n  \"e\": 1e2,\n  \"k\": \"a\",\n  \"k\": \"b\"\n}"
        );
    }

    #[test]
    fn pretty_item_leaves_string_contents_alone() {
        let out = pretty_item(0, r#"{ "p" : "a, b: {c} [d] \"e\" \\" , "q":[ ] ,"r":{ }}"#).unwrap();
        assert_eq!(
            out,
            "{\n  \"p\": \"a, b: {c} [d] \\\"e\\\" \\\\\",\n  \"q\": [],\n  \"r\": {}\n}"
        );
    }

    #[test]
    fn pretty_item_handles_nesting_and_scalars() {
        let out = pretty_item(0, "[1,[2,{\"a\":null}]]").unwrap();
        assert_eq!(out, "[\n  1,\n  [\n    2,\n    {\n      \"a\": null\n    }\n  ]\n]");
        assert_eq!(pretty_item(0, " true ").unwrap(), "true");
    }

    #[test]
    fn pretty_item_rejects_trailing_data() {
        assert!(pretty_item(1, "{} {}").is_err());
    }

    #[test]
    fn pretty_item_reports_index_on_bad_json() {
        let err = pretty_item(3, "{not json").unwrap_err();
        assert!(matches!(err, PasscError::InvalidItem { index: 3, .. }));
    }

    #[test]
    fn render_export_has_no_trailing_comma() {
        let doc = render_export(&[r#"{"a":1}"#, r#"{"b":2}"#]).unwrap();
        assert_eq!(doc, "[{\n  \"a\": 1\n},{\n  \"b\": 2\n}]");
    }

    #[test]
    fn render_export_is_all_or_nothing() {
        assert!(render_export(&[r#"{"a":1}"#, "oops"]).is_err());
    }

    #[test]
    fn compact_preview_truncates_long_items() {
        let preview = compact_preview(r#"{ "site": "example.com", "user": "alice" }"#, 12);
        assert_eq!(preview.chars().count(), 12);
        assert!(preview.ends_with('\u{2026}'));

        let short = compact_preview(r#"{ "a": 1.50, "b": "x y" }"#, 40);
        assert_eq!(short, r#"{"a":1.50,"b":"x y"}"#);
    }
}
