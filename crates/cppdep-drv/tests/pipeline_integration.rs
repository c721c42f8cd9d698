//! End-to-end scenarios exercising the full pipeline through
//! `cppdep_drv::analyze`, each grounded in a numbered scenario from the
//! core design notes.

use cppdep_drv::{analyze, AnalysisConfig, AnalysisError, MacroSeed};
use cppdep_interp::MacroDef;

fn deps(source: &str) -> Vec<String> {
    let config = AnalysisConfig::default();
    let report = analyze("tu.h", source, config.seed_macro_table()).unwrap();
    let mut paths: Vec<String> = report.deps.iter().map(|i| i.path.clone()).collect();
    paths.sort();
    paths
}

#[test]
fn scenario_plain_includes_are_unconditional() {
    let source = "#include <stdio.h>\n#include \"local.h\"\n";
    assert_eq!(deps(source), vec!["local.h", "stdio.h"]);
}

#[test]
fn scenario_taken_branch_contributes_its_includes() {
    let source = "#ifdef FOO\n#include <foo.h>\n#else\n#include <bar.h>\n#endif\n";
    assert_eq!(deps(source), vec!["bar.h"]);
}

#[test]
fn scenario_untaken_branch_is_excluded() {
    let source = "#ifndef FOO\n#include <bar.h>\n#endif\n";
    assert_eq!(deps(source), vec!["bar.h"]);
}

#[test]
fn scenario_macro_expression_gates_inclusion() {
    let source = "#define VERSION 2\n#if VERSION >= 2\n#include <new.h>\n#else\n#include <old.h>\n#endif\n";
    assert_eq!(deps(source), vec!["new.h"]);
}

#[test]
fn scenario_deferred_include_resolves_through_object_macro() {
    let source = "#define CONFIG_HEADER <config.h>\n#include CONFIG_HEADER\n";
    assert_eq!(deps(source), vec!["config.h"]);
}

#[test]
fn scenario_deferred_include_rejects_function_macro() {
    let source = "#define CONFIG_HEADER(x) <config.h>\n#include CONFIG_HEADER\n";
    let config = AnalysisConfig::default();
    let result = analyze("tu.h", source, config.seed_macro_table());
    assert!(matches!(result, Err(AnalysisError::Interp { .. })));
}

#[test]
fn scenario_macro_visibility_crosses_taken_branch_into_later_code() {
    let source = "#ifdef UNSET\n#define SHOULD_NOT_APPEAR 1\n#else\n#define SEEN 1\n#endif\n#ifdef SEEN\n#include <visible.h>\n#endif\n#ifdef SHOULD_NOT_APPEAR\n#include <hidden.h>\n#endif\n";
    assert_eq!(deps(source), vec!["visible.h"]);
}

#[test]
fn scenario_nested_conditionals_select_innermost_branch() {
    let source = "#ifdef OUTER\n#ifdef INNER\n#include <both.h>\n#else\n#include <outer_only.h>\n#endif\n#endif\n";
    let config = AnalysisConfig {
        seed_macros: vec![MacroSeed {
            name: "OUTER".to_string(),
            value: None,
        }],
        ..Default::default()
    };
    let report = analyze("tu.h", source, config.seed_macro_table()).unwrap();
    let paths: Vec<String> = report.deps.iter().map(|i| i.path.clone()).collect();
    assert_eq!(paths, vec!["outer_only.h"]);
}

#[test]
fn scenario_undef_removes_a_macro_mid_unit() {
    let source = "#define FOO 1\n#undef FOO\n#ifdef FOO\n#include <a.h>\n#endif\n";
    assert!(deps(source).is_empty());
}

#[test]
fn scenario_cli_seeded_macro_satisfies_ifdef() {
    let config = AnalysisConfig {
        seed_macros: vec![MacroSeed {
            name: "DEBUG".to_string(),
            value: None,
        }],
        ..Default::default()
    };
    let source = "#ifdef DEBUG\n#include <debug.h>\n#endif\n";
    let report = analyze("tu.h", source, config.seed_macro_table()).unwrap();
    assert_eq!(report.deps.len(), 1);
}

#[test]
fn scenario_final_macro_table_reflects_unit_definitions() {
    let config = AnalysisConfig::default();
    let report = analyze(
        "tu.h",
        "#define GREETING \"hi\"\n",
        config.seed_macro_table(),
    )
    .unwrap();
    let name = cppdep_util::Symbol::intern("GREETING");
    assert!(matches!(
        report.macro_table.get(name),
        Some(MacroDef::Object { .. })
    ));
}
