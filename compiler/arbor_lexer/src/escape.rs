//! String literal cooking: resolves escape sequences in the body of a
//! quoted literal.

use crate::{LexError, LexErrorKind};
use arbor_ir::Span;

/// Cook the body of a string literal (quotes already stripped).
///
/// `body_start` is the byte offset of the body in the source, used to point
/// errors at the offending escape.
pub(crate) fn cook_string(body: &str, body_start: u32) -> Result<String, LexError> {
    if !body.contains('\\') {
        return Ok(body.to_string());
    }

    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some((_, esc)) = chars.next() else {
            // The string scanner never ends a body on a lone backslash.
            out.push('\\');
            break;
        };
        match esc {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            'x' => {
                let digits = take_hex(&mut chars, 2);
                push_code_point(&mut out, &digits, 2, body, pos, body_start)?;
            }
            'u' => {
                if chars.peek().map(|&(_, c)| c) == Some('{') {
                    chars.next();
                    let mut digits = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        digits.push(c);
                    }
                    if !closed || digits.is_empty() || digits.len() > 6 {
                        return Err(invalid_escape(body, pos, pos + 3 + digits.len(), body_start));
                    }
                    let len = digits.len();
                    push_code_point(&mut out, &digits, len, body, pos, body_start)?;
                } else {
                    let digits = take_hex(&mut chars, 4);
                    push_code_point(&mut out, &digits, 4, body, pos, body_start)?;
                }
            }
            // Any other escaped character stands for itself (`\'`, `\"`, `\\`, `\q`).
            other => out.push(other),
        }
    }

    Ok(out)
}

fn take_hex(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>, max: usize) -> String {
    let mut digits = String::new();
    while digits.len() < max {
        match chars.peek() {
            Some(&(_, c)) if c.is_ascii_hexdigit() => {
                digits.push(c);
                chars.next();
            }
            _ => break,
        }
    }
    digits
}

fn push_code_point(
    out: &mut String,
    digits: &str,
    expected: usize,
    body: &str,
    pos: usize,
    body_start: u32,
) -> Result<(), LexError> {
    let end = pos + 2 + digits.len();
    if digits.len() != expected {
        return Err(invalid_escape(body, pos, end, body_start));
    }
    let c = u32::from_str_radix(digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| invalid_escape(body, pos, end, body_start))?;
    out.push(c);
    Ok(())
}

#[cold]
fn invalid_escape(body: &str, start: usize, end: usize, body_start: u32) -> LexError {
    let end = end.min(body.len());
    let text = body.get(start..end).unwrap_or("\\").to_string();
    let to_u32 = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
    let span = Span::new(
        body_start.saturating_add(to_u32(start)),
        body_start.saturating_add(to_u32(end)),
    );
    LexError::new(LexErrorKind::InvalidEscape { text }, span)
}

#[cfg(test)]
mod tests;
