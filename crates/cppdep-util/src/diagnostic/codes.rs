//! Diagnostic codes for categorizing preprocessor errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, enabling users to look up documentation and suppress
//! specific warnings.
//!
//! # Examples
//!
//! ```
//! use cppdep_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_UNKNOWN_TOKEN;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is typically "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
///
/// This allows users to reference specific diagnostics in documentation
/// and suppression attributes.
///
/// # Examples
///
/// ```
/// use cppdep_util::diagnostic::DiagnosticCode;
///
/// let code = DiagnosticCode::new("E", 1001);
/// assert_eq!(code.as_str(), "E1001");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001", "W0002")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER CODES (E1xxx) - line splicing and tokenization
    // =========================================================================

    /// E1001: a character starts no token the grammar recognizes
    pub const E_UNKNOWN_TOKEN: Self = Self::new("E", 1001);
    /// E1002: a `#` line names a directive the grammar does not recognize
    pub const E_UNKNOWN_DIRECTIVE: Self = Self::new("E", 1002);

    // =========================================================================
    // PARSER CODES (E2xxx) - directive and AST construction
    // =========================================================================

    /// E2001: a token appeared where the current grammar production forbids it
    pub const E_UNEXPECTED_TOKEN: Self = Self::new("E", 2001);
    /// E2002: input ended mid-construct
    pub const E_UNEXPECTED_EOF: Self = Self::new("E", 2002);
    /// E2003: an `#if`/`#ifdef`/`#ifndef` block was never closed by `#endif`
    pub const E_UNTERMINATED_CONDITIONAL: Self = Self::new("E", 2003);
    /// E2004: `#endif`/`#else`/`#elif` seen with no matching open block
    pub const E_UNMATCHED_CONDITIONAL: Self = Self::new("E", 2004);

    // =========================================================================
    // EXPRESSION COMPILER CODES (E3xxx) - Shunting-Yard
    // =========================================================================

    /// E3001: `)` with no matching `(` on the operator stack
    pub const E_UNMATCHED_RPAREN: Self = Self::new("E", 3001);
    /// E3002: `(` left on the operator stack when the expression ended
    pub const E_UNMATCHED_LPAREN: Self = Self::new("E", 3002);
    /// E3003: an expression could not be reduced to a single RPN result
    pub const E_MALFORMED_EXPRESSION: Self = Self::new("E", 3003);

    // =========================================================================
    // INTERPRETER CODES (E4xxx) - macro table and dependency walk
    // =========================================================================

    /// E4001: a function-like macro was used where `#include` requires a plain name
    pub const E_FUNCTION_MACRO_IN_INCLUDE: Self = Self::new("E", 4001);
    /// E4002: a function-like macro appeared inside an `#if` expression
    pub const E_FUNCTION_MACRO_IN_EXPRESSION: Self = Self::new("E", 4002);
    /// E4003: `#include MACRO` referenced a name absent from the macro table
    pub const E_UNDEFINED_INCLUDE_MACRO: Self = Self::new("E", 4003);

    // =========================================================================
    // WARNING CODES (W0xxx)
    // =========================================================================

    /// W0001: `#undef` named a macro that was never defined
    pub const W_UNDEF_UNKNOWN_MACRO: Self = Self::new("W", 1);
    /// W0002: `#define` redefined a macro already present in the table
    pub const W_MACRO_REDEFINED: Self = Self::new("W", 2);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_code() {
        let code = DiagnosticCode::new("E", 1001);
        assert_eq!(code.prefix(), "E");
        assert_eq!(code.number(), 1001);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("W", 1).as_str(), "W0001");
        assert_eq!(DiagnosticCode::E_UNKNOWN_TOKEN.as_str(), "E1001");
    }

    #[test]
    fn test_display_and_debug() {
        let code = DiagnosticCode::E_MALFORMED_EXPRESSION;
        assert_eq!(format!("{}", code), "E3003");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E3003)");
    }

    #[test]
    fn test_code_equality() {
        let code1 = DiagnosticCode::new("E", 1001);
        let code2 = DiagnosticCode::new("E", 1001);
        let code3 = DiagnosticCode::new("E", 1002);
        assert_eq!(code1, code2);
        assert_ne!(code1, code3);
    }

    #[test]
    fn test_predefined_codes_distinct() {
        let codes = [
            DiagnosticCode::E_UNKNOWN_TOKEN,
            DiagnosticCode::E_UNKNOWN_DIRECTIVE,
            DiagnosticCode::E_UNEXPECTED_TOKEN,
            DiagnosticCode::E_UNEXPECTED_EOF,
            DiagnosticCode::E_UNTERMINATED_CONDITIONAL,
            DiagnosticCode::E_UNMATCHED_CONDITIONAL,
            DiagnosticCode::E_UNMATCHED_RPAREN,
            DiagnosticCode::E_UNMATCHED_LPAREN,
            DiagnosticCode::E_MALFORMED_EXPRESSION,
            DiagnosticCode::E_FUNCTION_MACRO_IN_INCLUDE,
            DiagnosticCode::E_FUNCTION_MACRO_IN_EXPRESSION,
            DiagnosticCode::E_UNDEFINED_INCLUDE_MACRO,
        ];
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b);
                }
            }
        }
    }
}
