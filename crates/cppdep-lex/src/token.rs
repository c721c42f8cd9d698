//! Token kinds produced by the lexer.
//!
//! A directive line lexes to an ordered sequence of [`Token`]s. Kinds
//! partition into structural tokens, operators, and punctuation; the closed
//! classifications [`Kind::is_value`], [`Kind::is_rtl_unary`], and
//! [`Kind::is_operator`] are consulted by the expression compiler.

use cppdep_util::Symbol;

/// Discriminator for a lexed token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `#` followed by the directive name, e.g. `#include`, `#if`, `#`.
    Directive,
    /// `[A-Za-z_][A-Za-z0-9_]*`, excluding the `defined` keyword.
    Identifier,
    /// `\d+`.
    IntegerConst,
    /// `'x'`.
    CharConst,
    /// `"…"` (interior only, quotes stripped).
    String,
    /// `<…>`, recognized whenever a single-token run is immediately closed
    /// by `>` — not only after `#include`.
    Filename,

    /// The `defined` operator keyword.
    Defined,
    /// `!`.
    Not,
    /// `&&`.
    And,
    /// `||`.
    Or,
    /// `==`.
    Equal,
    /// `!=`.
    NotEqual,
    /// `<`.
    LessThan,
    /// `<=`.
    LessEqual,
    /// `>`.
    GreaterThan,
    /// `>=`.
    GreaterEqual,
    /// `##`.
    TokenConcatenation,
    /// `#` appearing outside directive position (stringification).
    Stringification,

    /// `(`.
    LParen,
    /// `)`.
    RParen,
    /// `,`.
    Comma,
    /// `...`.
    Ellipsis,
}

impl Kind {
    /// `VALUE = {Identifier, IntegerConst, CharConst}`.
    pub fn is_value(self) -> bool {
        matches!(self, Kind::Identifier | Kind::IntegerConst | Kind::CharConst)
    }

    /// `RTL_UNARY = {Defined, Not}`.
    pub fn is_rtl_unary(self) -> bool {
        matches!(self, Kind::Defined | Kind::Not)
    }

    /// `OPERATOR = {Defined, Not, Equal, NotEqual, LessEqual, GreaterEqual,
    /// LessThan, GreaterThan, And, Or}`.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Kind::Defined
                | Kind::Not
                | Kind::Equal
                | Kind::NotEqual
                | Kind::LessEqual
                | Kind::GreaterEqual
                | Kind::LessThan
                | Kind::GreaterThan
                | Kind::And
                | Kind::Or
        )
    }
}

/// A lexed token: a [`Kind`], its source position, and the matched text.
///
/// `text` is interned via [`Symbol`] so that repeated identifiers (macro
/// names, in particular) share storage and compare in O(1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: Kind,
    /// 1-based physical source line this token was emitted on, resolved
    /// through the originating [`crate::line_splice::LogicalLine`] so that
    /// backslash-continued directives still cite the correct line.
    pub line: u32,
    /// 1-based column within the logical line's joined text.
    pub column: u32,
    /// The matched substring (quotes/angle-brackets stripped for
    /// `String`/`Filename`; `#` + name for `Directive`).
    pub text: Symbol,
    /// True if at least one whitespace character preceded this token.
    /// Consulted by the parser to distinguish `#define F(x)` (function-like,
    /// no space before `(`) from `#define F (x)` (object-like).
    pub preceded_by_whitespace: bool,
}

impl Token {
    pub fn new(kind: Kind, line: u32, column: u32, text: &str, preceded_by_whitespace: bool) -> Self {
        Self {
            kind,
            line,
            column,
            text: Symbol::intern(text),
            preceded_by_whitespace,
        }
    }

    /// The matched text as a `&str`.
    pub fn text_str(&self) -> &'static str {
        self.text.as_str()
    }
}
