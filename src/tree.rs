//! Visual tree decomposition of a document.
//!
//! The renderer produces a flat list of [`TreeLine`]s, each carrying its own
//! indent depth, which is the linearized shape the display ultimately needs.
//! Indentation quirk preserved on purpose: a nested object recurses at
//! `depth + 2`, so every object level indents twice as far as the key that
//! introduced it; an array under an object field gets an "Array items" marker
//! at `depth + 2` with element 0 rendered at `depth + 3`. Only the first
//! element of any array is ever rendered.

use colored::Colorize;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Error;
use crate::kind::{ValueKind, classify};
use crate::walk::{Visitor, Walk};

/// Scalar previews are truncated to this many characters.
pub const PREVIEW_MAX_CHARS: usize = 30;

/// One display line. Serializable so a shell can render its own markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "line", rename_all = "snake_case")]
pub enum TreeLine {
    /// Object or array header with its child count.
    Container { depth: usize, kind: ValueKind, count: usize },
    /// One object entry; `preview` is set for scalar values only.
    Field {
        depth: usize,
        key: String,
        kind: ValueKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        preview: Option<String>,
    },
    /// Marker above the sampled element of an array held by an object field.
    Items { depth: usize, count: usize },
    /// Scalar encountered as the root or as an array element.
    Leaf { depth: usize, kind: ValueKind },
}

/// Decompose `value` into display lines.
pub fn render(value: &Value) -> Result<Vec<TreeLine>, Error> {
    let mut visitor = TreeVisitor { depth: 0, lines: Vec::new() };
    Walk::root().visit(value, &mut visitor)?;
    Ok(visitor.lines)
}

/// Format lines for a terminal, two spaces per depth unit. Kind badges are
/// colored when `color` is set.
pub fn format(lines: &[TreeLine], color: bool) -> String {
    let mut out = String::new();
    for line in lines {
        match line {
            TreeLine::Container { depth, kind, count } => {
                let noun = if *kind == ValueKind::Array { "items" } else { "properties" };
                out.push_str(&format!(
                    "{}{} {} ({count} {noun})\n",
                    indent(*depth),
                    badge(*kind, color),
                    kind.primitive_name(),
                ));
            }
            TreeLine::Field { depth, key, kind, preview } => {
                out.push_str(&format!(
                    "{}{} {key}: {}",
                    indent(*depth),
                    badge(*kind, color),
                    kind.primitive_name(),
                ));
                if let Some(preview) = preview {
                    out.push_str(&format!(" = {preview}"));
                }
                out.push('\n');
            }
            TreeLine::Items { depth, count } => {
                out.push_str(&format!("{}Array items ({count})\n", indent(*depth)));
            }
            TreeLine::Leaf { depth, kind } => {
                out.push_str(&format!(
                    "{}{} {}\n",
                    indent(*depth),
                    badge(*kind, color),
                    kind.primitive_name(),
                ));
            }
        }
    }
    out
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

fn badge(kind: ValueKind, color: bool) -> String {
    if color {
        kind.icon().color(kind.color()).to_string()
    } else {
        kind.icon().to_string()
    }
}

/// Truncated JSON rendering of a scalar for inline display.
fn preview(value: &Value) -> String {
    value.to_string().chars().take(PREVIEW_MAX_CHARS).collect()
}

struct TreeVisitor {
    /// Visual indent level, which deliberately diverges from the structural
    /// recursion depth tracked by [`Walk`].
    depth: usize,
    lines: Vec<TreeLine>,
}

impl Visitor for TreeVisitor {
    type Output = ();

    fn on_scalar(&mut self, _walk: &Walk, kind: ValueKind, _value: &Value) -> Result<(), Error> {
        self.lines.push(TreeLine::Leaf { depth: self.depth, kind });
        Ok(())
    }

    fn on_array(&mut self, walk: &Walk, items: &[Value]) -> Result<(), Error> {
        let depth = self.depth;
        self.lines.push(TreeLine::Container {
            depth,
            kind: ValueKind::Array,
            count: items.len(),
        });
        if let Some(first) = items.first() {
            self.depth = depth + 1;
            walk.descend("0")?.visit(first, self)?;
        }
        self.depth = depth;
        Ok(())
    }

    fn on_object(&mut self, walk: &Walk, entries: &Map<String, Value>) -> Result<(), Error> {
        let depth = self.depth;
        self.lines.push(TreeLine::Container {
            depth,
            kind: ValueKind::Object,
            count: entries.len(),
        });
        for (key, child) in entries {
            let kind = classify(child);
            let scalar = !matches!(child, Value::Object(_) | Value::Array(_));
            self.lines.push(TreeLine::Field {
                depth: depth + 1,
                key: key.clone(),
                kind,
                preview: scalar.then(|| preview(child)),
            });
            match child {
                Value::Object(_) => {
                    self.depth = depth + 2;
                    walk.descend(key)?.visit(child, self)?;
                }
                Value::Array(items) if !items.is_empty() => {
                    self.lines.push(TreeLine::Items { depth: depth + 2, count: items.len() });
                    self.depth = depth + 3;
                    walk.descend(key)?.descend("0")?.visit(&items[0], self)?;
                }
                _ => {}
            }
        }
        self.depth = depth;
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
