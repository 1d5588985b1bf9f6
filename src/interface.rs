//! Nested interface declarations from a single example document.
//!
//! One `interface` block per object level, in encounter order, followed by the
//! blocks for its object-valued fields. Naming is deliberately naive: block
//! names come from capitalizing the field key, and array element names drop
//! the key's trailing character ("tags" → "Tag", but "children" → "Childre").
//! Fields are optional only when the sample value was null or an empty array.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::Error;
use crate::kind::{ValueKind, classify};
use crate::walk::{Visitor, Walk};

/// Keys matching this are emitted bare; everything else gets quoted.
static BARE_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_$][a-zA-Z0-9_$]*$").expect("valid identifier regex"));

/// Build the interface declaration text for `value`, rooted at `root_name`.
/// A non-object root degrades to a single `type` alias line.
pub fn synthesize(value: &Value, root_name: &str) -> Result<String, Error> {
    let mut visitor = InterfaceVisitor {
        name: root_name.to_string(),
        blocks: Vec::new(),
    };
    Walk::root().visit(value, &mut visitor)?;
    Ok(format!("{}\n", visitor.blocks.join("\n\n")))
}

struct InterfaceVisitor {
    /// Name for the next block or alias emitted. Rewritten before each
    /// recursive visit.
    name: String,
    blocks: Vec<String>,
}

impl Visitor for InterfaceVisitor {
    type Output = ();

    fn on_scalar(&mut self, _walk: &Walk, kind: ValueKind, _value: &Value) -> Result<(), Error> {
        self.blocks.push(format!("type {} = {};", self.name, kind.primitive_name()));
        Ok(())
    }

    // Only reachable at the root: array fields resolve to `T[]` expressions
    // and recursion goes straight into element 0 when it is an object.
    fn on_array(&mut self, _walk: &Walk, _items: &[Value]) -> Result<(), Error> {
        self.blocks
            .push(format!("type {} = {};", self.name, ValueKind::Array.primitive_name()));
        Ok(())
    }

    fn on_object(&mut self, walk: &Walk, entries: &Map<String, Value>) -> Result<(), Error> {
        let mut block = format!("interface {} {{\n", self.name);
        // (block name, value to recurse into, path segment)
        let mut nested: Vec<(String, &Value, String)> = Vec::new();

        for (key, child) in entries {
            let field = if BARE_IDENT.is_match(key) { key.clone() } else { format!("{key:?}") };
            let optional = matches!(child, Value::Null)
                || child.as_array().is_some_and(|items| items.is_empty());
            let marker = if optional { "?" } else { "" };

            let type_expr = match child {
                Value::Object(_) => {
                    let name = capitalize(key);
                    nested.push((name.clone(), child, key.clone()));
                    name
                }
                Value::Array(items) => match items.first() {
                    None => "any[]".to_string(),
                    Some(first @ Value::Object(_)) => {
                        let name = capitalize(singularize(key));
                        nested.push((name.clone(), first, format!("{key}/0")));
                        format!("{name}[]")
                    }
                    Some(first) => format!("{}[]", classify(first).primitive_name()),
                },
                Value::Null => "null".to_string(),
                scalar => classify(scalar).primitive_name().to_string(),
            };

            block.push_str(&format!("  {field}{marker}: {type_expr};\n"));
        }
        block.push('}');
        self.blocks.push(block);

        for (name, child, segment) in nested {
            self.name = name;
            walk.descend(&segment)?.visit(child, self)?;
        }
        Ok(())
    }
}

/// Uppercase the first character, then strip everything non-alphanumeric from
/// the remainder.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.filter(|c| c.is_ascii_alphanumeric()))
            .collect(),
    }
}

/// Naive singular form: drop the trailing character.
fn singularize(s: &str) -> &str {
    match s.char_indices().last() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
