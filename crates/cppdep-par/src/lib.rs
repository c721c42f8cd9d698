//! cppdep-par - Directive parser
//!
//! Consumes the line-by-line token vectors produced by `cppdep-lex` and
//! builds an ordered [`Ast`] list per translation unit. Conditional
//! blocks (`#if`/`#ifdef`/`#ifndef` ... `#endif`) are parsed by scanning
//! forward for the matching `#endif` at the same nesting depth and
//! recursing into each branch's body.
//!
//! There is no grammar beyond "one directive per line, dispatched by
//! name" - no precedence climbing, no backtracking. The only nontrivial
//! control flow is the Shunting-Yard expression compiler in [`expr`],
//! used for `#if`/`#elif` conditions.

pub mod ast;
pub mod expr;
pub mod parser;

pub use ast::{Ast, Branch, BranchKind, Include};
pub use expr::{Expression, ExprError};
pub use parser::{parse, ParseError};
