//! cppdep-drv - Analysis driver
//!
//! Orchestrates the pipeline:
//!
//! ```text
//! source text
//!      |
//!      v
//! [splice]      -> Vec<LogicalLine>
//!      |
//!      v
//! [lex_line]    -> Vec<Token> per line
//!      |
//!      v
//! [parse]       -> Vec<Ast>
//!      |
//!      v
//! [interpret]   -> DependencySet, final MacroTable
//! ```
//!
//! Each stage is traced at debug level; [`analyze`] emits one info-level
//! span per translation unit summarizing the dependency count.

pub mod error;
pub mod paths;

use cppdep_interp::{interpret, DependencySet, MacroDef, MacroTable};
use cppdep_lex::{lex_line, splice, Token};
use cppdep_par::parse;
use cppdep_util::{Diagnostic, Handler};
use tracing::{debug, info, instrument};

pub use error::{AnalysisError, DriverError};
pub use paths::PathSpec;

/// Output rendering selected by the CLI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A single `-D NAME[=VALUE]` command-line macro seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MacroSeed {
    pub name: String,
    pub value: Option<String>,
}

/// The layered configuration object (defaults < config file < CLI flags)
/// driving an analysis run.
#[derive(Clone, Debug, Default)]
pub struct AnalysisConfig {
    pub seed_macros: Vec<MacroSeed>,
    pub include_roots: Vec<std::path::PathBuf>,
    pub output_format: OutputFormat,
}

impl AnalysisConfig {
    /// Builds the initial macro table from `-D` seeds. Values are stored
    /// as a single `IntegerConst`/`String` body token matching how
    /// `#define` bodies are represented, so expression evaluation treats
    /// seeded and source-defined macros identically.
    pub fn seed_macro_table(&self) -> MacroTable {
        let mut table = MacroTable::new();
        for seed in &self.seed_macros {
            let name = cppdep_util::Symbol::intern(&seed.name);
            let body = match &seed.value {
                Some(value) if value.chars().all(|c| c.is_ascii_digit()) => {
                    vec![Token::new(cppdep_lex::Kind::IntegerConst, 0, 0, value, false)]
                }
                Some(value) => vec![Token::new(cppdep_lex::Kind::String, 0, 0, value, false)],
                None => vec![Token::new(cppdep_lex::Kind::IntegerConst, 0, 0, "1", false)],
            };
            table.define(name, MacroDef::Object { body });
        }
        table
    }
}

/// What the driver returns per translation unit.
#[derive(Clone, Debug)]
pub struct TranslationUnitReport {
    pub deps: DependencySet,
    pub macro_table: MacroTable,
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs the full pipeline over one translation unit's source text,
/// starting from `seed_table` (e.g. built by
/// [`AnalysisConfig::seed_macro_table`]). Mutations to the macro table
/// are in-place and visible in the returned report even when analysis
/// fails partway through - see the module-level failure semantics in the
/// core design notes.
#[instrument(skip(source, seed_table), fields(file = %file_name))]
pub fn analyze(
    file_name: &str,
    source: &str,
    mut seed_table: MacroTable,
) -> Result<TranslationUnitReport, AnalysisError> {
    let handler = Handler::new();

    let lines = splice(source);
    debug!(logical_lines = lines.len(), "spliced source");

    let mut token_lines: Vec<Vec<Token>> = Vec::with_capacity(lines.len());
    for line in &lines {
        let tokens = lex_line(line).map_err(|source| AnalysisError::Lex {
            file: file_name.to_string(),
            source,
        })?;
        token_lines.push(tokens);
    }
    debug!(
        directive_lines = token_lines.iter().filter(|l| !l.is_empty()).count(),
        "lexed directive lines"
    );

    let ast = parse(&token_lines).map_err(|source| AnalysisError::Parse {
        file: file_name.to_string(),
        source,
    })?;
    debug!(nodes = ast.len(), "parsed AST");

    let mut deps = DependencySet::default();
    interpret(&ast, &mut seed_table, &mut deps).map_err(|source| AnalysisError::Interp {
        file: file_name.to_string(),
        source,
    })?;

    info!(dependency_count = deps.len(), "translation unit analyzed");

    Ok(TranslationUnitReport {
        deps,
        macro_table: seed_table,
        diagnostics: handler.diagnostics(),
    })
}
