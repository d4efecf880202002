//! Output renderings for parsed blueprints
//!
//! Every rendering consumes the normalized [`AstSnapshot`] rather than
//! walking the arena itself, so tree text, JSON and YAML always agree on
//! what the tree contains.

use crate::blueprint::ast::{snapshot_with_options, Ast, AstSnapshot};

/// Render the tree as indented plain text, one node per line.
pub fn to_tree_string(ast: &Ast, show_line_numbers: bool) -> String {
    let snapshot = snapshot_with_options(ast, false);
    let mut out = String::new();
    render_tree(&snapshot, 0, show_line_numbers, &mut out);
    out
}

fn render_tree(snapshot: &AstSnapshot, depth: usize, show_line_numbers: bool, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(&snapshot.node_type);
    if !snapshot.label.is_empty() {
        out.push(' ');
        out.push_str(&snapshot.label);
    }
    if show_line_numbers {
        if let Some(line) = snapshot.attributes.get("line") {
            out.push_str(&format!("  [line {}]", line));
        }
    }
    out.push('\n');
    for child in &snapshot.children {
        render_tree(child, depth + 1, show_line_numbers, out);
    }
}

/// Render the snapshot as pretty-printed JSON.
pub fn to_json_string(ast: &Ast, include_metadata: bool) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&snapshot_with_options(ast, include_metadata))
}

/// Render the snapshot as YAML.
pub fn to_yaml_string(ast: &Ast, include_metadata: bool) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&snapshot_with_options(ast, include_metadata))
}
