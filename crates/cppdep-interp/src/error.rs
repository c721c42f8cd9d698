//! Interpreter error taxonomy.

use thiserror::Error;

/// Fatal conditions raised while walking the AST or evaluating an
/// expression. All are fatal to the current translation-unit analysis.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InterpError {
    #[error("'{name}' is a function-like macro and cannot be used in #include at line {line}")]
    FunctionMacroInInclude { name: String, line: u32 },

    #[error("'{name}' used in #include SOMEMACRO is not defined at line {line}")]
    UndefinedIncludeMacro { name: String, line: u32 },

    #[error("'{name}' is a function-like macro and cannot be used in an expression at line {line}, column {column}")]
    FunctionMacroInExpression { name: String, line: u32, column: u32 },

    #[error("malformed expression: {remaining} value(s) left on the stack at line {line}")]
    MalformedExpression { remaining: usize, line: u32 },

    #[error("deferred include macro body did not resolve to a filename at line {line}")]
    MalformedDeferredInclude { line: u32 },
}
