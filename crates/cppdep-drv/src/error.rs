//! Error taxonomy surfaced at the driver boundary.

use thiserror::Error;

use cppdep_interp::InterpError;
use cppdep_lex::LexError;
use cppdep_par::ParseError;

/// The typed sum of every fatal condition in the core pipeline, each
/// carrying enough source location to render a caret diagnostic. This is
/// the error type `analyze` returns; it is fatal to the current
/// translation unit only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("lex error in {file}: {source}")]
    Lex {
        file: String,
        #[source]
        source: LexError,
    },
    #[error("parse error in {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: ParseError,
    },
    #[error("interpreter error in {file}: {source}")]
    Interp {
        file: String,
        #[source]
        source: InterpError,
    },
}

/// Errors from the path-normalization collaborator. A sibling of
/// [`AnalysisError`], not folded into it, because unreadable paths and
/// globs are not part of the core's failure taxonomy.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to read glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("failed to enumerate directory '{path}': {source}")]
    DirectoryRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read source file '{path}': {source}")]
    SourceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}
