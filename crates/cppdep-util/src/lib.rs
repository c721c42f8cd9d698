//! cppdep-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the fundamental utilities and types shared by every
//! stage of the dependency analyzer pipeline (lexer, parser, expression
//! compiler, interpreter, and driver). These utilities are designed to be
//! zero-cost abstractions that improve code clarity, type safety, and
//! performance without runtime overhead.
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. ZERO-COST ABSTRACTIONS
//!    All utilities compile down to efficient code with no runtime penalty
//!    compared to hand-written implementations.
//!
//! 2. TYPE SAFETY
//!    Leverage Rust's type system to prevent bugs at compile time.
//!
//! 3. ERGONOMICS
//!    APIs should be intuitive and easy to use correctly: builder patterns,
//!    type inference-friendly interfaces.
//!
//! ============================================================================
//! MODULES
//! ============================================================================
//!
//! - [`symbol`] - string interning for macro names and identifiers
//! - [`span`] - source location tracking (byte offsets, line/column, file id)
//! - [`diagnostic`] - error/warning reporting infrastructure
//! - [`error`] - typed errors for this crate's own fallible operations

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use span::{FileId, Span};
pub use symbol::Symbol;

// Re-export commonly used hash types; the teacher uses `rustc-hash`'s
// FxHashMap/FxHashSet for identifier tables throughout the pipeline.
pub use rustc_hash::{FxHashMap, FxHashSet};
