//! Analyze command implementation.
//!
//! Resolves the requested inputs to files, runs the dependency pipeline
//! over each, and renders the combined report in the requested format.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;
use tracing::warn;

use cppdep_drv::{analyze, paths, AnalysisConfig, MacroSeed, OutputFormat as DrvOutputFormat, PathSpec};

use crate::commands::common::error_messages;
use crate::commands::traits::{Command, CommandDescription};
use crate::error::{CliError, Result};

/// Arguments for the analyze command.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Files, directories, or glob patterns naming translation units.
    pub inputs: Vec<String>,
    /// `-D NAME[=VALUE]` seeds, applied to every translation unit.
    pub defines: Vec<String>,
    /// Output rendering.
    pub format: DrvOutputFormat,
    /// Enable verbose logging.
    pub verbose: bool,
}

/// One translation unit's rendered result, for the JSON report.
#[derive(Debug, Serialize)]
struct UnitResult {
    file: String,
    dependencies: Vec<DependencyEntry>,
}

#[derive(Debug, Serialize)]
struct DependencyEntry {
    path: String,
    quoted: bool,
}

/// Analyze command handler.
pub struct AnalyzeCommand {
    args: AnalyzeArgs,
}

impl AnalyzeCommand {
    pub fn new(args: AnalyzeArgs) -> Self {
        Self { args }
    }

    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();

        if self.args.inputs.is_empty() {
            return Err(CliError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }

        let seed_macros = parse_defines(&self.args.defines)?;
        let files = self.resolve_inputs()?;

        let config = AnalysisConfig {
            seed_macros,
            include_roots: Vec::new(),
            output_format: self.args.format,
        };

        let mut results = Vec::with_capacity(files.len());
        for file in &files {
            let source = std::fs::read_to_string(file)?;
            let file_name = file.display().to_string();
            match analyze(&file_name, &source, config.seed_macro_table()) {
                Ok(report) => results.push((file_name, report)),
                Err(e) => {
                    warn!(file = %file_name, error = %e, "analysis failed for translation unit");
                    return Err(CliError::Analysis(e));
                }
            }
        }

        self.render(&results);

        if self.args.verbose {
            eprintln!(
                "analyzed {} translation unit(s) in {:.2}s",
                results.len(),
                start_time.elapsed().as_secs_f64()
            );
        }

        Ok(())
    }

    fn resolve_inputs(&self) -> Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();
        for input in &self.args.inputs {
            let spec = classify_input(input);
            files.extend(paths::resolve(&spec)?);
        }
        Ok(files)
    }

    fn render(&self, results: &[(String, cppdep_drv::TranslationUnitReport)]) {
        match self.args.format {
            DrvOutputFormat::Text => self.render_text(results),
            DrvOutputFormat::Json => self.render_json(results),
        }
    }

    fn render_text(&self, results: &[(String, cppdep_drv::TranslationUnitReport)]) {
        for (file, report) in results {
            println!("{}:", file);
            let mut deps: Vec<&cppdep_par::Include> = report.deps.iter().collect();
            deps.sort_by(|a, b| a.path.cmp(&b.path));
            for dep in deps {
                let (open, close) = if dep.quoted { ('"', '"') } else { ('<', '>') };
                println!("  {open}{}{close}", dep.path);
            }
        }
    }

    fn render_json(&self, results: &[(String, cppdep_drv::TranslationUnitReport)]) {
        let units: Vec<UnitResult> = results
            .iter()
            .map(|(file, report)| {
                let mut dependencies: Vec<DependencyEntry> = report
                    .deps
                    .iter()
                    .map(|dep| DependencyEntry {
                        path: dep.path.clone(),
                        quoted: dep.quoted,
                    })
                    .collect();
                dependencies.sort_by(|a, b| a.path.cmp(&b.path));
                UnitResult {
                    file: file.clone(),
                    dependencies,
                }
            })
            .collect();

        match serde_json::to_string_pretty(&units) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("failed to render JSON report: {}", e),
        }
    }
}

/// Classifies one CLI-provided input string as a file, directory, or glob.
fn classify_input(input: &str) -> PathSpec {
    let path = PathBuf::from(input);
    if path.is_dir() {
        PathSpec::Directory(path)
    } else if input.contains(['*', '?', '[']) {
        PathSpec::Glob(input.to_string())
    } else {
        PathSpec::File(path)
    }
}

/// Parses repeatable `-D NAME[=VALUE]` flags into macro seeds.
fn parse_defines(defines: &[String]) -> Result<Vec<MacroSeed>> {
    defines
        .iter()
        .map(|raw| match raw.split_once('=') {
            Some((name, value)) if !name.is_empty() => Ok(MacroSeed {
                name: name.to_string(),
                value: Some(value.to_string()),
            }),
            Some(_) => Err(CliError::Validation(
                error_messages::INVALID_DEFINE.replace("{}", raw),
            )),
            None if !raw.is_empty() => Ok(MacroSeed {
                name: raw.to_string(),
                value: None,
            }),
            None => Err(CliError::Validation(
                error_messages::INVALID_DEFINE.replace("{}", raw),
            )),
        })
        .collect()
}

impl Command for AnalyzeCommand {
    type Args = AnalyzeArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "analyze"
    }
}

impl CommandDescription for AnalyzeCommand {
    fn description() -> &'static str {
        "Analyze translation units for their #include dependencies"
    }

    fn help() -> &'static str {
        "Resolves the given files, directories, or glob patterns to translation \
         units and reports the set of headers each one would pull in under the \
         given macro environment, honoring conditional compilation."
    }
}

/// Run the analyze command.
pub fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let command = AnalyzeCommand::new(args);
    command.run()
}
