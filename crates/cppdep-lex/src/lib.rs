//! cppdep-lex - Line splicing and directive lexing
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate implements the first two stages of the dependency analyzer
//! pipeline (§2 of the design): the line splicer, which joins
//! backslash-continued physical lines into logical lines, and the lexer,
//! which converts a directive-bearing logical line into an ordered token
//! sequence.
//!
//! Non-directive lines are intentionally skipped by the lexer — this
//! analyzer only cares about preprocessor directives, never about the C/C++
//! code between them.
//!
//! ============================================================================
//! MODULES
//! ============================================================================
//!
//! - [`cursor`] - UTF-8 aware character cursor with line/column tracking
//! - [`line_splice`] - backslash-continuation joining (`LogicalLine`, `splice`)
//! - [`token`] - `Kind`/`Token` and the `VALUE`/`RTL_UNARY`/`OPERATOR` sets
//! - `lexer` - the directive/body lexing rules (`lex_line`, `LexError`)

pub mod cursor;
pub mod line_splice;
pub mod lexer;
pub mod token;

pub use line_splice::{splice, LineSegment, LogicalLine};
pub use lexer::{lex_line, LexError};
pub use token::{Kind, Token};
