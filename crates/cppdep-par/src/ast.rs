//! cppdep-par - AST node definitions
//!
//! The parser's output is a flat, ordered list of [`Ast`] nodes per
//! translation unit. There is no inheritance or virtual dispatch: every
//! node kind is a variant of one sum type, matched by the interpreter.

use cppdep_lex::Token;
use cppdep_util::Symbol;

/// One parsed preprocessor construct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ast {
    /// A fully resolved `#include`.
    Include(Include),
    /// `#include SOMEMACRO` - resolved against the macro table at
    /// interpretation time.
    DeferredInclude { identifier: Token },
    /// `#define NAME body...` (no parameter list).
    ObjectMacro { name: Symbol, body: Vec<Token> },
    /// `#define NAME(params...) body...`.
    FunctionMacro {
        name: Symbol,
        params: Vec<Symbol>,
        body: Vec<Token>,
    },
    /// `#undef NAME`.
    Undef { name: Symbol },
    /// A nested `#if`/`#ifdef`/`#ifndef` ... `#endif` block.
    ConditionalBlock { branches: Vec<Branch> },
}

/// A fully resolved include target.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Include {
    pub path: String,
    /// `true` for `#include "..."`, `false` for `#include <...>`.
    pub quoted: bool,
}

/// The kind of conditional directive that opened or continued a branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchKind {
    If,
    Ifdef,
    Ifndef,
    Elif,
    Else,
}

/// One arm of a [`Ast::ConditionalBlock`].
///
/// Exactly one of `condition` / `identifier` is populated, except for
/// `Else`, which carries neither.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Branch {
    pub kind: BranchKind,
    /// Compiled RPN expression, present for `If`/`Elif`.
    pub condition: Option<crate::expr::Expression>,
    /// Target macro name, present for `Ifdef`/`Ifndef`.
    pub identifier: Option<Symbol>,
    pub children: Vec<Ast>,
}
