//! Directive lexer: turns one [`LogicalLine`] into an ordered [`Token`]
//! sequence.

use thiserror::Error;

use crate::cursor::StringCursor;
use crate::line_splice::LogicalLine;
use crate::token::{Kind, Token};

/// Errors produced while lexing a single logical line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No rule matched at the current cursor position.
    #[error("unknown token at line {line}, column {column}: {lexeme:?}")]
    UnknownToken {
        line: u32,
        column: u32,
        lexeme: String,
    },
}

/// Lexes a single directive-bearing logical line into a token vector.
///
/// Non-directive lines (first non-whitespace character isn't `#`) are
/// skipped entirely and yield an empty token list — dependency analysis
/// only inspects directive lines.
pub fn lex_line(logical: &LogicalLine) -> Result<Vec<Token>, LexError> {
    let text = logical.text();
    let mut cursor = StringCursor::new(&text);

    let mut preceded_by_whitespace = skip_whitespace(&mut cursor);
    if cursor.is_at_end() || cursor.current_char() != '#' {
        return Ok(Vec::new());
    }

    let mut tokens = Vec::new();
    tokens.push(lex_directive(&mut cursor, logical, preceded_by_whitespace));

    loop {
        preceded_by_whitespace = skip_whitespace(&mut cursor);
        if cursor.is_at_end() {
            break;
        }
        let token = lex_body_token(&mut cursor, logical, preceded_by_whitespace)?;
        tokens.push(token);
    }

    Ok(tokens)
}

/// Maps a cursor's byte offset into the logical line's joined text back to
/// the 1-based physical line it came from.
fn physical_line(logical: &LogicalLine, offset: usize) -> u32 {
    logical.physical_line_at(offset).unwrap_or(0) as u32 + 1
}

fn skip_whitespace(cursor: &mut StringCursor<'_>) -> bool {
    let start = cursor.position();
    cursor.skip_whitespace();
    cursor.position() != start
}

fn lex_directive(
    cursor: &mut StringCursor<'_>,
    logical: &LogicalLine,
    preceded_by_whitespace: bool,
) -> Token {
    let line = physical_line(logical, cursor.position());
    let column = cursor.column();
    let start = cursor.position();
    cursor.advance(); // consume '#'

    while is_ident_continue(cursor.current_char()) {
        cursor.advance();
    }

    let text = cursor.slice_from(start);
    Token::new(Kind::Directive, line, column, text, preceded_by_whitespace)
}

/// Matches a single body token by the priority list in §4.2.
fn lex_body_token(
    cursor: &mut StringCursor<'_>,
    logical: &LogicalLine,
    preceded_by_whitespace: bool,
) -> Result<Token, LexError> {
    let line = physical_line(logical, cursor.position());
    let column = cursor.column();
    let c = cursor.current_char();

    if c == '"' {
        return Ok(lex_string(cursor, line, column, preceded_by_whitespace));
    }

    if c == '<' {
        if let Some(name) = try_filename(cursor) {
            return Ok(Token::new(
                Kind::Filename,
                line,
                column,
                &name,
                preceded_by_whitespace,
            ));
        }
    }

    if c.is_ascii_digit() {
        return Ok(lex_integer(cursor, line, column, preceded_by_whitespace));
    }

    if c == '\'' {
        return Ok(lex_char(cursor, line, column, preceded_by_whitespace));
    }

    if is_ident_start(c) {
        let start = cursor.position();
        cursor.advance();
        while is_ident_continue(cursor.current_char()) {
            cursor.advance();
        }
        let text = cursor.slice_from(start);
        let kind = if text == "defined" {
            Kind::Defined
        } else {
            Kind::Identifier
        };
        return Ok(Token::new(kind, line, column, text, preceded_by_whitespace));
    }

    if let Some((kind, len)) = match_multi_char_operator(cursor) {
        let start = cursor.position();
        cursor.advance_n(len);
        let text = cursor.slice_from(start);
        return Ok(Token::new(kind, line, column, text, preceded_by_whitespace));
    }

    if let Some(kind) = match_single_char(c) {
        let start = cursor.position();
        cursor.advance();
        let text = cursor.slice_from(start);
        return Ok(Token::new(kind, line, column, text, preceded_by_whitespace));
    }

    Err(LexError::UnknownToken {
        line,
        column,
        lexeme: c.to_string(),
    })
}

fn lex_string(
    cursor: &mut StringCursor<'_>,
    line: u32,
    column: u32,
    preceded_by_whitespace: bool,
) -> Token {
    cursor.advance(); // opening quote
    let start = cursor.position();
    while !cursor.is_at_end() && cursor.current_char() != '"' {
        cursor.advance();
    }
    let interior = cursor.slice_from(start);
    if !cursor.is_at_end() {
        cursor.advance(); // closing quote
    }
    Token::new(Kind::String, line, column, interior, preceded_by_whitespace)
}

/// Attempts the anchored pattern `<\s*\S*\s*>`: an opening `<`, an optional
/// run of whitespace, a single non-whitespace run (the filename), another
/// optional run of whitespace, and a closing `>`. Matches regardless of
/// directive, so `#define HDR <x.h>` lexes a `Filename` the same as
/// `#include <x.h>`; an expression like `#if A < 5` has no closing `>`
/// immediately following a single token and falls through unmatched.
/// Leaves the cursor after the closing `>` on success; restores it
/// untouched on failure so the caller can fall back to operator lexing.
fn try_filename(cursor: &mut StringCursor<'_>) -> Option<String> {
    let snapshot = cursor.snapshot();
    cursor.advance(); // '<'
    cursor.skip_whitespace();
    let start = cursor.position();
    while !cursor.is_at_end() && !cursor.current_char().is_whitespace() && cursor.current_char() != '>' {
        cursor.advance();
    }
    let name = cursor.slice_from(start).to_string();
    cursor.skip_whitespace();
    if cursor.current_char() == '>' {
        cursor.advance();
        Some(name)
    } else {
        cursor.restore(snapshot);
        None
    }
}

fn lex_integer(
    cursor: &mut StringCursor<'_>,
    line: u32,
    column: u32,
    preceded_by_whitespace: bool,
) -> Token {
    let start = cursor.position();
    while cursor.current_char().is_ascii_digit() {
        cursor.advance();
    }
    let text = cursor.slice_from(start);
    Token::new(Kind::IntegerConst, line, column, text, preceded_by_whitespace)
}

fn lex_char(
    cursor: &mut StringCursor<'_>,
    line: u32,
    column: u32,
    preceded_by_whitespace: bool,
) -> Token {
    cursor.advance(); // opening quote
    let start = cursor.position();
    if !cursor.is_at_end() && cursor.current_char() == '\\' {
        cursor.advance();
    }
    if !cursor.is_at_end() {
        cursor.advance();
    }
    let interior = cursor.slice_from(start);
    if cursor.current_char() == '\'' {
        cursor.advance();
    }
    Token::new(Kind::CharConst, line, column, interior, preceded_by_whitespace)
}

/// Multi-character operators, checked in the priority order from §4.2:
/// `...`, `<=`, `>=`, `==`, `!=`, `&&`, `||`, `##`.
fn match_multi_char_operator(cursor: &StringCursor<'_>) -> Option<(Kind, usize)> {
    let three = (cursor.char_at(0), cursor.char_at(1), cursor.char_at(2));
    if three == ('.', '.', '.') {
        return Some((Kind::Ellipsis, 3));
    }

    let two = (cursor.char_at(0), cursor.char_at(1));
    match two {
        ('<', '=') => Some((Kind::LessEqual, 2)),
        ('>', '=') => Some((Kind::GreaterEqual, 2)),
        ('=', '=') => Some((Kind::Equal, 2)),
        ('!', '=') => Some((Kind::NotEqual, 2)),
        ('&', '&') => Some((Kind::And, 2)),
        ('|', '|') => Some((Kind::Or, 2)),
        ('#', '#') => Some((Kind::TokenConcatenation, 2)),
        _ => None,
    }
}

fn match_single_char(c: char) -> Option<Kind> {
    match c {
        '(' => Some(Kind::LParen),
        ')' => Some(Kind::RParen),
        ',' => Some(Kind::Comma),
        '<' => Some(Kind::LessThan),
        '>' => Some(Kind::GreaterThan),
        '!' => Some(Kind::Not),
        '#' => Some(Kind::Stringification),
        _ => None,
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_splice::splice;

    fn lex_source(src: &str) -> Vec<Vec<Token>> {
        splice(src)
            .iter()
            .map(|ll| lex_line(ll).expect("lex should succeed"))
            .collect()
    }

    #[test]
    fn test_non_directive_line_skipped() {
        let lines = lex_source("int x = 5;\n");
        assert_eq!(lines[0].len(), 0);
    }

    #[test]
    fn test_include_angle() {
        let lines = lex_source("#include <stdio.h>\n");
        let tokens = &lines[0];
        assert_eq!(tokens[0].kind, Kind::Directive);
        assert_eq!(tokens[0].text_str(), "#include");
        assert_eq!(tokens[1].kind, Kind::Filename);
        assert_eq!(tokens[1].text_str(), "stdio.h");
    }

    #[test]
    fn test_include_quoted() {
        let lines = lex_source("#include \"a.h\"\n");
        let tokens = &lines[0];
        assert_eq!(tokens[1].kind, Kind::String);
        assert_eq!(tokens[1].text_str(), "a.h");
    }

    #[test]
    fn test_angle_in_conditional_is_comparison() {
        let lines = lex_source("#if A < 5\n");
        let tokens = &lines[0];
        // Directive, Identifier(A), LessThan, IntegerConst(5)
        assert_eq!(tokens[2].kind, Kind::LessThan);
        assert_eq!(tokens[3].kind, Kind::IntegerConst);
    }

    #[test]
    fn test_defined_keyword() {
        let lines = lex_source("#if defined(FOO)\n");
        let tokens = &lines[0];
        assert_eq!(tokens[1].kind, Kind::Defined);
        assert_eq!(tokens[2].kind, Kind::LParen);
        assert_eq!(tokens[3].kind, Kind::Identifier);
        assert_eq!(tokens[4].kind, Kind::RParen);
    }

    #[test]
    fn test_multi_char_operators() {
        let lines = lex_source("#if A == 1 && B != 2 || C <= 3 && D >= 4\n");
        let kinds: Vec<Kind> = lines[0].iter().map(|t| t.kind).collect();
        assert!(kinds.contains(&Kind::Equal));
        assert!(kinds.contains(&Kind::And));
        assert!(kinds.contains(&Kind::NotEqual));
        assert!(kinds.contains(&Kind::Or));
        assert!(kinds.contains(&Kind::LessEqual));
        assert!(kinds.contains(&Kind::GreaterEqual));
    }

    #[test]
    fn test_function_macro_no_whitespace_before_paren() {
        let lines = lex_source("#define F(x) x\n");
        let tokens = &lines[0];
        // tokens: Directive(#define) Identifier(F) LParen Identifier(x) RParen Identifier(x)
        let lparen = &tokens[2];
        assert_eq!(lparen.kind, Kind::LParen);
        assert!(!lparen.preceded_by_whitespace);
    }

    #[test]
    fn test_object_macro_whitespace_before_paren() {
        let lines = lex_source("#define F (x)\n");
        let tokens = &lines[0];
        let lparen = &tokens[2];
        assert_eq!(lparen.kind, Kind::LParen);
        assert!(lparen.preceded_by_whitespace);
    }

    #[test]
    fn test_unknown_token_error() {
        let lines = splice("#if A $ B\n");
        let err = lex_line(&lines[0]).unwrap_err();
        match err {
            LexError::UnknownToken { lexeme, .. } => assert_eq!(lexeme, "$"),
        }
    }

    #[test]
    fn test_hash_alone_is_empty_directive() {
        let lines = lex_source("#\n");
        assert_eq!(lines[0].len(), 1);
        assert_eq!(lines[0][0].text_str(), "#");
    }

    #[test]
    fn test_multiline_continuation_directive() {
        let lines = lex_source("#define FOO 1 + \\\n    2\n");
        let tokens = &lines[0];
        assert_eq!(tokens[0].text_str(), "#define");
        // round-trip: concatenating token texts reproduces the line modulo whitespace
        assert_eq!(tokens[1].text_str(), "FOO");
    }

    #[test]
    fn test_char_const() {
        let lines = lex_source("#if 'x' == 1\n");
        let tokens = &lines[0];
        assert_eq!(tokens[1].kind, Kind::CharConst);
        assert_eq!(tokens[1].text_str(), "x");
    }

    #[test]
    fn test_integer_const() {
        let lines = lex_source("#if 42\n");
        assert_eq!(lines[0][1].kind, Kind::IntegerConst);
        assert_eq!(lines[0][1].text_str(), "42");
    }

    #[test]
    fn test_not_and_ellipsis() {
        let lines = lex_source("#if !A\n");
        assert_eq!(lines[0][1].kind, Kind::Not);

        let lines = lex_source("#define F(...) x\n");
        let kinds: Vec<Kind> = lines[0].iter().map(|t| t.kind).collect();
        assert!(kinds.contains(&Kind::Ellipsis));
    }

    #[test]
    fn test_define_body_angle_filename() {
        let lines = lex_source("#define HDR <x.h>\n");
        let tokens = &lines[0];
        // Directive(#define) Identifier(HDR) Filename(x.h)
        assert_eq!(tokens[2].kind, Kind::Filename);
        assert_eq!(tokens[2].text_str(), "x.h");
    }

    #[test]
    fn test_angle_filename_with_interior_whitespace() {
        let lines = lex_source("#define HDR < x.h >\n");
        let tokens = &lines[0];
        assert_eq!(tokens[2].kind, Kind::Filename);
        assert_eq!(tokens[2].text_str(), "x.h");
    }

    #[test]
    fn test_angle_comparison_survives_outside_include() {
        let lines = lex_source("#if A < 5 && B > 3\n");
        let kinds: Vec<Kind> = lines[0].iter().map(|t| t.kind).collect();
        assert!(kinds.contains(&Kind::LessThan));
        assert!(kinds.contains(&Kind::GreaterThan));
        assert!(!kinds.contains(&Kind::Filename));
    }

    #[test]
    fn test_token_line_is_physical_not_logical() {
        let lines = lex_source("#define F(x) x\n#if F\n#endif\n");
        // second logical line: "#if F" sits on physical line 2 (1-based).
        let tokens = &lines[1];
        assert_eq!(tokens[0].text_str(), "#if");
        assert!(tokens.iter().all(|t| t.line == 2));
    }

    #[test]
    fn test_continuation_token_line_follows_segment() {
        let lines = lex_source("#define FOO 1 + \\\n    2\n");
        let tokens = &lines[0];
        // "FOO 1 +" comes from physical line 1, the continued "2" from line 2.
        let foo = tokens.iter().find(|t| t.text_str() == "FOO").unwrap();
        let two = tokens.iter().find(|t| t.text_str() == "2").unwrap();
        assert_eq!(foo.line, 1);
        assert_eq!(two.line, 2);
    }
}
