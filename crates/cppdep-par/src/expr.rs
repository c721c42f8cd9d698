//! Expression compiler: Shunting-Yard infix-to-RPN transform for `#if`/
//! `#elif` conditions.
//!
//! # Operator precedence (highest binds tightest)
//!
//! | Level | Operators | Associativity |
//! |-------|-----------|----------------|
//! | 100 | `defined`, `!` | right |
//! | 90 | `<=`, `>=`, `<`, `>` | left |
//! | 80 | `==`, `!=` | left |
//! | 50 | `&&` | left |
//! | 40 | `\|\|` | left |

use thiserror::Error;

use cppdep_lex::{Kind, Token};

/// A compiled condition: an RPN token stack. Values are in `VALUE`,
/// operators in `OPERATOR`. No parentheses may appear in the stack.
pub type Expression = Vec<Token>;

/// Errors produced by the Shunting-Yard compiler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// A `)` was seen with no matching `(` on the operator stack.
    #[error("unmatched ')' at line {line}, column {column}")]
    UnmatchedRParen { line: u32, column: u32 },
    /// An `(` remained unclosed at end of input.
    #[error("unmatched '(' at line {line}, column {column}")]
    UnmatchedLParen { line: u32, column: u32 },
}

fn precedence(kind: Kind) -> u8 {
    match kind {
        Kind::Defined | Kind::Not => 100,
        Kind::LessEqual | Kind::GreaterEqual | Kind::LessThan | Kind::GreaterThan => 90,
        Kind::Equal | Kind::NotEqual => 80,
        Kind::And => 50,
        Kind::Or => 40,
        _ => 0,
    }
}

/// Compiles an infix operator/operand token sequence into RPN order.
pub fn compile(tokens: &[Token]) -> Result<Expression, ExprError> {
    let mut output: Vec<Token> = Vec::new();
    let mut operators: Vec<Token> = Vec::new();

    for &token in tokens {
        if token.kind.is_value() {
            output.push(token);
            continue;
        }

        if token.kind.is_rtl_unary() {
            operators.push(token);
            continue;
        }

        if token.kind.is_operator() {
            while let Some(top) = operators.last() {
                if top.kind == Kind::LParen {
                    break;
                }
                if top.kind.is_rtl_unary() || precedence(top.kind) > precedence(token.kind) {
                    output.push(operators.pop().unwrap());
                } else {
                    break;
                }
            }
            operators.push(token);
            continue;
        }

        if token.kind == Kind::LParen {
            operators.push(token);
            continue;
        }

        if token.kind == Kind::RParen {
            loop {
                match operators.pop() {
                    Some(op) if op.kind == Kind::LParen => break,
                    Some(op) => output.push(op),
                    None => {
                        return Err(ExprError::UnmatchedRParen {
                            line: token.line,
                            column: token.column,
                        })
                    }
                }
            }
            continue;
        }
    }

    while let Some(op) = operators.pop() {
        if op.kind == Kind::LParen || op.kind == Kind::RParen {
            return Err(ExprError::UnmatchedLParen {
                line: op.line,
                column: op.column,
            });
        }
        output.push(op);
    }

    Ok(output)
}
