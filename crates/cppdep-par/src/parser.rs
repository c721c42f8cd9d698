//! Directive parser: builds an ordered [`Ast`] list from already-lexed
//! token-lines.
//!
//! Each line's first token must be [`Kind::Directive`]; the text after `#`
//! selects a handler. Conditional blocks (`#if`/`#ifdef`/`#ifndef` ...
//! `#endif`) are parsed by scanning forward for the matching `#endif` at
//! the same nesting depth, then recursing into each branch's children.

use thiserror::Error;

use cppdep_lex::{Kind, Token};

use crate::ast::{Ast, Branch, BranchKind, Include};
use crate::expr::{self, ExprError};

/// Errors produced while parsing directive lines into an AST.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected token at line {line}, column {column}: expected {expected}")]
    UnexpectedToken {
        line: u32,
        column: u32,
        expected: &'static str,
    },
    #[error("unexpected end of directive line")]
    UnexpectedEof,
    #[error("unknown directive '#{name}' at line {line}, column {column}")]
    UnknownDirective { name: String, line: u32, column: u32 },
    #[error("unterminated conditional opened at line {line}, column {column}")]
    UnterminatedConditional { line: u32, column: u32 },
    #[error("'#{name}' with no matching #if at line {line}, column {column}")]
    UnmatchedConditional { name: String, line: u32, column: u32 },
    #[error("expected filename or quoted string for #include at line {line}, column {column}")]
    ExpectedIncludeArgument { line: u32, column: u32 },
    #[error("expected ',' or ')' in macro parameter list at line {line}, column {column}")]
    ExpectedCommaOrRParen { line: u32, column: u32 },
    #[error(transparent)]
    Expr(#[from] ExprError),
}

/// Parses a sequence of already-lexed lines (one `Vec<Token>` per logical
/// line, possibly empty for skipped non-directive lines) into an AST list.
pub fn parse(token_lines: &[Vec<Token>]) -> Result<Vec<Ast>, ParseError> {
    let directive_lines: Vec<&Vec<Token>> = token_lines.iter().filter(|l| !l.is_empty()).collect();
    parse_sequence(&directive_lines)
}

fn parse_sequence(lines: &[&Vec<Token>]) -> Result<Vec<Ast>, ParseError> {
    let mut nodes = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let directive = &line[0];
        debug_assert_eq!(directive.kind, Kind::Directive);
        let name = directive_name(directive);

        match name {
            "if" | "ifdef" | "ifndef" => {
                let (block, consumed) = parse_conditional_block(lines, i)?;
                nodes.push(block);
                i += consumed;
                continue;
            }
            "elif" | "else" | "endif" => {
                return Err(ParseError::UnmatchedConditional {
                    name: name.to_string(),
                    line: directive.line,
                    column: directive.column,
                });
            }
            "include" => {
                nodes.push(parse_include(line)?);
            }
            "define" => {
                nodes.push(parse_define(line)?);
            }
            "undef" => {
                nodes.push(parse_undef(line)?);
            }
            "pragma" | "" => {
                // `#pragma ...` and the bare null directive `#` are both
                // consumed with no node emitted.
            }
            other => {
                return Err(ParseError::UnknownDirective {
                    name: other.to_string(),
                    line: directive.line,
                    column: directive.column,
                });
            }
        }
        i += 1;
    }
    Ok(nodes)
}

fn directive_name(token: &Token) -> &'static str {
    token.text_str().trim_start_matches('#')
}

fn parse_include(line: &[Token]) -> Result<Ast, ParseError> {
    let arg = line.get(1).ok_or(ParseError::UnexpectedEof)?;
    match arg.kind {
        Kind::Identifier => Ok(Ast::DeferredInclude { identifier: *arg }),
        Kind::Filename => Ok(Ast::Include(Include {
            path: arg.text_str().to_string(),
            quoted: false,
        })),
        Kind::String => Ok(Ast::Include(Include {
            path: arg.text_str().to_string(),
            quoted: true,
        })),
        _ => Err(ParseError::ExpectedIncludeArgument {
            line: arg.line,
            column: arg.column,
        }),
    }
}

fn parse_define(line: &[Token]) -> Result<Ast, ParseError> {
    let name_tok = line.get(1).ok_or(ParseError::UnexpectedEof)?;
    if name_tok.kind != Kind::Identifier {
        return Err(ParseError::UnexpectedToken {
            line: name_tok.line,
            column: name_tok.column,
            expected: "identifier",
        });
    }
    let name = name_tok.text;

    let is_function_like = line
        .get(2)
        .map(|t| t.kind == Kind::LParen && !t.preceded_by_whitespace)
        .unwrap_or(false);

    if !is_function_like {
        let body = line[2..].to_vec();
        return Ok(Ast::ObjectMacro { name, body });
    }

    let mut params = Vec::new();
    let mut idx = 3; // past name and '('
    loop {
        match line.get(idx) {
            Some(t) if t.kind == Kind::RParen => {
                idx += 1;
                break;
            }
            Some(t) if t.kind == Kind::Identifier => {
                params.push(t.text);
                idx += 1;
                match line.get(idx) {
                    Some(t2) if t2.kind == Kind::Comma => {
                        idx += 1;
                    }
                    Some(t2) if t2.kind == Kind::RParen => {
                        idx += 1;
                        break;
                    }
                    Some(t2) => {
                        return Err(ParseError::ExpectedCommaOrRParen {
                            line: t2.line,
                            column: t2.column,
                        })
                    }
                    None => return Err(ParseError::UnexpectedEof),
                }
            }
            Some(t) => {
                return Err(ParseError::ExpectedCommaOrRParen {
                    line: t.line,
                    column: t.column,
                })
            }
            None => return Err(ParseError::UnexpectedEof),
        }
    }

    let body = line[idx..].to_vec();
    Ok(Ast::FunctionMacro { name, params, body })
}

fn parse_undef(line: &[Token]) -> Result<Ast, ParseError> {
    let name_tok = line.get(1).ok_or(ParseError::UnexpectedEof)?;
    if name_tok.kind != Kind::Identifier {
        return Err(ParseError::UnexpectedToken {
            line: name_tok.line,
            column: name_tok.column,
            expected: "identifier",
        });
    }
    Ok(Ast::Undef {
        name: name_tok.text,
    })
}

/// Parses a `#if`/`#ifdef`/`#ifndef` ... `#endif` block starting at
/// `lines[start]`. Returns the built `ConditionalBlock` node and the
/// number of lines it consumed.
fn parse_conditional_block(
    lines: &[&Vec<Token>],
    start: usize,
) -> Result<(Ast, usize), ParseError> {
    let opening = lines[start][0];

    // Collect indices of depth-1 markers: opening, each elif/else, and endif.
    let mut markers = vec![start];
    let mut depth = 1usize;
    let mut i = start + 1;
    let mut endif_index = None;

    while i < lines.len() {
        let name = directive_name(lines[i][0]);
        match name {
            "if" | "ifdef" | "ifndef" => depth += 1,
            "endif" => {
                depth -= 1;
                if depth == 0 {
                    markers.push(i);
                    endif_index = Some(i);
                    break;
                }
            }
            "elif" | "else" if depth == 1 => {
                markers.push(i);
            }
            _ => {}
        }
        i += 1;
    }

    let endif_index = endif_index.ok_or(ParseError::UnterminatedConditional {
        line: opening.line,
        column: opening.column,
    })?;

    let mut branches = Vec::with_capacity(markers.len() - 1);
    for w in markers.windows(2) {
        let (marker_idx, next_idx) = (w[0], w[1]);
        let marker_line = lines[marker_idx];
        let directive = marker_line[0];
        let kind = match directive_name(directive) {
            "if" => BranchKind::If,
            "ifdef" => BranchKind::Ifdef,
            "ifndef" => BranchKind::Ifndef,
            "elif" => BranchKind::Elif,
            "else" => BranchKind::Else,
            _ => unreachable!("marker list only contains if/ifdef/ifndef/elif/else"),
        };

        let (condition, identifier) = match kind {
            BranchKind::If | BranchKind::Elif => {
                let rpn = expr::compile(&marker_line[1..])?;
                (Some(rpn), None)
            }
            BranchKind::Ifdef | BranchKind::Ifndef => {
                let ident = marker_line.get(1).ok_or(ParseError::UnexpectedEof)?;
                if ident.kind != Kind::Identifier {
                    return Err(ParseError::UnexpectedToken {
                        line: ident.line,
                        column: ident.column,
                        expected: "identifier",
                    });
                }
                (None, Some(ident.text))
            }
            BranchKind::Else => (None, None),
        };

        let body_lines = &lines[marker_idx + 1..next_idx];
        let children = parse_sequence(body_lines)?;

        branches.push(Branch {
            kind,
            condition,
            identifier,
            children,
        });
    }

    let consumed = endif_index - start + 1;
    Ok((Ast::ConditionalBlock { branches }, consumed))
}
