//! AST interpreter: walks the parsed tree against a macro table and
//! accumulates the reachable [`DependencySet`].

use cppdep_lex::Kind;
use cppdep_par::{Ast, BranchKind, Include};
use cppdep_util::FxHashSet;

use crate::error::InterpError;
use crate::eval;
use crate::macro_table::{MacroDef, MacroTable};

/// A set of resolved includes, deduplicated by `(path, quoted)`.
pub type DependencySet = FxHashSet<Include>;

/// Walks `nodes` in order, mutating `table` and accumulating into `deps`.
pub fn interpret(
    nodes: &[Ast],
    table: &mut MacroTable,
    deps: &mut DependencySet,
) -> Result<(), InterpError> {
    for node in nodes {
        interpret_node(node, table, deps)?;
    }
    Ok(())
}

fn interpret_node(
    node: &Ast,
    table: &mut MacroTable,
    deps: &mut DependencySet,
) -> Result<(), InterpError> {
    match node {
        Ast::Include(include) => {
            deps.insert(include.clone());
        }
        Ast::DeferredInclude { identifier } => {
            match table.get(identifier.text) {
                None => {
                    return Err(InterpError::UndefinedIncludeMacro {
                        name: identifier.text_str().to_string(),
                        line: identifier.line,
                    })
                }
                Some(MacroDef::Function { .. }) => {
                    return Err(InterpError::FunctionMacroInInclude {
                        name: identifier.text_str().to_string(),
                        line: identifier.line,
                    })
                }
                Some(MacroDef::Object { body }) => {
                    let include = include_from_tokens(body, identifier.line)?;
                    deps.insert(include);
                }
            }
        }
        Ast::ObjectMacro { name, body } => {
            table.define(
                *name,
                MacroDef::Object {
                    body: body.clone(),
                },
            );
        }
        Ast::FunctionMacro { name, params, body } => {
            table.define(
                *name,
                MacroDef::Function {
                    params: params.clone(),
                    body: body.clone(),
                },
            );
        }
        Ast::Undef { name } => {
            table.undef(*name);
        }
        Ast::ConditionalBlock { branches } => {
            interpret_conditional(branches, table, deps)?;
        }
    }
    Ok(())
}

fn interpret_conditional(
    branches: &[cppdep_par::Branch],
    table: &mut MacroTable,
    deps: &mut DependencySet,
) -> Result<(), InterpError> {
    for branch in branches {
        let selected = match branch.kind {
            BranchKind::Else => true,
            BranchKind::If | BranchKind::Elif => {
                let condition = branch
                    .condition
                    .as_ref()
                    .expect("If/Elif branches always carry a condition");
                eval::evaluate(condition, table)?
            }
            BranchKind::Ifdef => {
                let name = branch
                    .identifier
                    .expect("Ifdef branches always carry an identifier");
                table.is_defined(name)
            }
            BranchKind::Ifndef => {
                let name = branch
                    .identifier
                    .expect("Ifndef branches always carry an identifier");
                !table.is_defined(name)
            }
        };

        if selected {
            interpret(&branch.children, table, deps)?;
            return Ok(());
        }
    }
    Ok(())
}

/// Resolves an `#include SOMEMACRO` body to a concrete [`Include`]. The
/// macro's first body token must be a `Filename` or `String`.
fn include_from_tokens(
    body: &[cppdep_lex::Token],
    line: u32,
) -> Result<Include, InterpError> {
    match body.first() {
        Some(t) if t.kind == Kind::Filename => Ok(Include {
            path: t.text_str().to_string(),
            quoted: false,
        }),
        Some(t) if t.kind == Kind::String => Ok(Include {
            path: t.text_str().to_string(),
            quoted: true,
        }),
        _ => Err(InterpError::MalformedDeferredInclude { line }),
    }
}
