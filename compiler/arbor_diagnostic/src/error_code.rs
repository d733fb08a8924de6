use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Evaluation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unexpected character in source
    E0001,
    /// Unterminated string literal
    E0002,
    /// Invalid number literal
    E0003,
    /// Invalid escape sequence
    E0004,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// `return` outside of a function
    E1005,

    // Evaluation Errors (E6xxx)
    /// Name declared twice in the same scope
    E6001,
    /// Syntax the evaluator has no rule for
    E6002,
    /// Binary operator without an evaluation rule
    E6003,
    /// Called value is not a function
    E6004,
    /// Property read on `undefined` or `null`
    E6005,
    /// Maximum call stack size exceeded
    E6006,
    /// Other runtime error
    E6099,
}

impl ErrorCode {
    /// Get the string representation (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6099 => "E6099",
        }
    }

    /// Short description shown by `arbor explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unexpected character in source",
            ErrorCode::E0002 => "unterminated string literal",
            ErrorCode::E0003 => "invalid number literal",
            ErrorCode::E0004 => "invalid escape sequence",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected an expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected an identifier",
            ErrorCode::E1005 => "`return` outside of a function",
            ErrorCode::E6001 => "a name was declared twice in the same scope",
            ErrorCode::E6002 => "the evaluator has no rule for this syntax",
            ErrorCode::E6003 => "only `+`, `-`, `*` and `/` can be evaluated",
            ErrorCode::E6004 => "the called value is not a function",
            ErrorCode::E6005 => "a property was read from `undefined` or `null`",
            ErrorCode::E6006 => "the maximum call stack size was exceeded",
            ErrorCode::E6099 => "runtime error",
        }
    }

    /// Check if this is a front-end (lexer or parser) error.
    pub fn is_syntax_error(&self) -> bool {
        self.as_str().starts_with("E0") || self.as_str().starts_with("E1")
    }

    /// Parse an error code string such as `"E6001"` (case-insensitive).
    pub fn from_code(code: &str) -> Option<ErrorCode> {
        const ALL: &[ErrorCode] = &[
            ErrorCode::E0001,
            ErrorCode::E0002,
            ErrorCode::E0003,
            ErrorCode::E0004,
            ErrorCode::E1001,
            ErrorCode::E1002,
            ErrorCode::E1003,
            ErrorCode::E1004,
            ErrorCode::E1005,
            ErrorCode::E6001,
            ErrorCode::E6002,
            ErrorCode::E6003,
            ErrorCode::E6004,
            ErrorCode::E6005,
            ErrorCode::E6006,
            ErrorCode::E6099,
        ];
        ALL.iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E1001.to_string(), "E1001");
        assert_eq!(ErrorCode::E6001.as_str(), "E6001");
    }

    #[test]
    fn test_syntax_error_ranges() {
        assert!(ErrorCode::E0002.is_syntax_error());
        assert!(ErrorCode::E1005.is_syntax_error());
        assert!(!ErrorCode::E6003.is_syntax_error());
    }

    #[test]
    fn test_from_code() {
        assert_eq!(ErrorCode::from_code("e6004"), Some(ErrorCode::E6004));
        assert_eq!(ErrorCode::from_code("E9999"), None);
    }
}
