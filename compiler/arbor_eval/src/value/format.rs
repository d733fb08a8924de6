//! Number formatting and console inspection.

use std::fmt::Write;

use arbor_ir::StringInterner;

use super::Value;

/// Arrays nested deeper than this print as `[Array]`.
const MAX_INSPECT_DEPTH: usize = 2;

/// Format a number the way JavaScript's `String(n)` does.
///
/// Uses the shortest digit string that round-trips, then places the
/// decimal point by magnitude: plain notation for exponents in `-7..21`,
/// exponent notation (`1e+21`, `1e-7`) outside it.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    let sci = format!("{:e}", n.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        let zeros = usize::try_from(point - k).unwrap_or(0);
        format!("{digits}{}", "0".repeat(zeros))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(usize::try_from(point).unwrap_or(0));
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        let zeros = usize::try_from(-point).unwrap_or(0);
        format!("0.{}{digits}", "0".repeat(zeros))
    } else {
        let exp = point - 1;
        let exp_sign = if exp >= 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exp_sign}{}", exp.abs())
        } else {
            format!("{first}.{rest}e{exp_sign}{}", exp.abs())
        }
    };
    format!("{sign}{body}")
}

/// Render a value the way the console shows it nested inside other values:
/// strings quoted, functions as `[Function: name]`, host objects with
/// their members.
pub fn inspect(value: &Value<'_>, interner: &StringInterner) -> String {
    let mut out = String::new();
    inspect_into(&mut out, value, interner, 0);
    out
}

/// Join console arguments with spaces. Top-level strings print raw.
pub fn format_console_args(args: &[Value<'_>], interner: &StringInterner) -> String {
    args.iter()
        .map(|arg| match arg {
            Value::Str(s) => s.to_string(),
            other => inspect(other, interner),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn inspect_into(out: &mut String, value: &Value<'_>, interner: &StringInterner, depth: usize) {
    match value {
        Value::Str(s) => quote_into(out, s),
        Value::Array(elements) => {
            if elements.is_empty() {
                out.push_str("[]");
            } else if depth > MAX_INSPECT_DEPTH {
                out.push_str("[Array]");
            } else {
                out.push_str("[ ");
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    inspect_into(out, element, interner, depth + 1);
                }
                out.push_str(" ]");
            }
        }
        Value::Function(closure) => {
            let _ = write!(out, "[Function: {}]", closure.name(interner));
        }
        Value::Native(native) => {
            let _ = write!(out, "[Function: {}]", native.name);
        }
        Value::Object(object) => {
            let _ = write!(out, "Object [{}]", object.name());
            let mut members = object.members().peekable();
            if members.peek().is_none() {
                out.push_str(" {}");
                return;
            }
            out.push_str(" {");
            for (i, (key, member)) in members.enumerate() {
                out.push_str(if i == 0 { " " } else { ", " });
                let _ = write!(out, "{key}: ");
                inspect_into(out, member, interner, depth + 1);
            }
            out.push_str(" }");
        }
        other => out.push_str(&other.to_js_string(interner)),
    }
}

/// Single-quote a string, switching quote style to avoid escapes.
fn quote_into(out: &mut String, s: &str) {
    let quote = if !s.contains('\'') {
        '\''
    } else if !s.contains('"') {
        '"'
    } else if !s.contains('`') {
        '`'
    } else {
        '\''
    };

    out.push(quote);
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}
