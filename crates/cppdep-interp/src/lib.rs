//! cppdep-interp - AST interpreter
//!
//! Walks the parsed directive tree against a mutable [`MacroTable`],
//! selecting at most one branch per conditional block, and accumulates
//! the reachable [`DependencySet`]. Expression evaluation (RPN walk over
//! a compiled `#if`/`#elif` condition) lives in [`eval`].

pub mod error;
pub mod eval;
pub mod interp;
pub mod macro_table;

pub use error::InterpError;
pub use interp::{interpret, DependencySet};
pub use macro_table::{MacroDef, MacroTable};
