//! Text output for [`Value`] trees.
//!
//! Two layouts, both deterministic:
//!
//! - **indented**: one child per line, 3-space indent unit per nesting level,
//!   and a trailing newline after the top-level container;
//! - **compact**: a single line with no inter-token spaces except one space
//!   after each `:`.
//!
//! Output is always printable ASCII: every character outside `0x20..=0x7E`
//! (non-ASCII and control characters alike) is emitted as a `\uXXXX` escape
//! per UTF-16 code unit, so characters beyond the BMP produce a surrogate
//! pair. Object keys are escaped exactly like string values.

use crate::value::{Array, Object, Value};

/// Serialize `value` to text. `indent` selects the indented layout;
/// otherwise output is a single line.
pub fn to_text(value: &Value, indent: bool) -> String {
    let mut out = String::new();
    write_value(value, indent, 0, &mut out);
    if indent && matches!(value, Value::Object(_) | Value::Array(_)) {
        out.push('\n');
    }
    out
}

fn write_value(value: &Value, indent: bool, depth: usize, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Float(f) => out.push_str(&format_float(*f)),
        Value::String(s) => write_escaped(s, out),
        Value::Object(obj) => write_object(obj, indent, depth, out),
        Value::Array(arr) => write_array(arr, indent, depth, out),
    }
}

fn write_object(obj: &Object, indent: bool, depth: usize, out: &mut String) {
    if obj.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push('{');
    let child_indent = make_indent(depth + 1);
    let mut first = true;
    for entry in obj {
        if !first {
            out.push(',');
        }
        first = false;
        if indent {
            out.push('\n');
            out.push_str(&child_indent);
        }
        write_escaped(&entry.key, out);
        out.push_str(": ");
        write_value(&entry.value, indent, depth + 1, out);
    }
    if indent {
        out.push('\n');
        out.push_str(&make_indent(depth));
    }
    out.push('}');
}

fn write_array(arr: &Array, indent: bool, depth: usize, out: &mut String) {
    if arr.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push('[');
    let child_indent = make_indent(depth + 1);
    let mut first = true;
    for item in arr {
        if !first {
            out.push(',');
        }
        first = false;
        if indent {
            out.push('\n');
            out.push_str(&child_indent);
        }
        write_value(item, indent, depth + 1, out);
    }
    if indent {
        out.push('\n');
        out.push_str(&make_indent(depth));
    }
    out.push(']');
}

/// Emit a string literal with its quotes, escaping per the fixed table and
/// `\uXXXX`-encoding everything outside printable ASCII.
fn write_escaped(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            ' '..='~' => out.push(ch),
            _ => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04x}", unit));
                }
            }
        }
    }
    out.push('"');
}

/// Canonical float text: shortest form that still reads back as a float
/// (`100.0`, never `100`). Non-finite values have no literal and render as
/// `null`.
pub(crate) fn format_float(f: f64) -> String {
    if f.is_finite() {
        format!("{:?}", f)
    } else {
        "null".to_string()
    }
}

/// 3-space indentation unit per nesting level.
fn make_indent(depth: usize) -> String {
    "   ".repeat(depth)
}
