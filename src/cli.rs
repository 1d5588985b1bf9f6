//! Minimal CLI: one JSON document in → schema | interface | tree out.
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand};
use serde_json::{Value, json};

use crate::schema::Dialect;
use crate::{interface, parse, schema, tree};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer a JSON schema, a nested interface declaration, or a visual tree from one example JSON document
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and print a JSON Schema
    Schema(SchemaOut),
    /// infer and print a nested interface declaration
    Interface(InterfaceOut),
    /// print a tree decomposition of the document
    Tree(TreeOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// input file path, or '-' for stdin
    #[arg(long, short, required_unless_present = "sample", conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// use the built-in sample document instead of reading input
    #[arg(long, default_value_t = false)]
    sample: bool,
}

#[derive(Args, Debug)]
struct SchemaOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// target schema dialect
    #[arg(long, value_enum, default_value = "2020-12")]
    dialect: Dialect,

    /// attach sampled scalar values as `example` annotations
    #[arg(long, default_value_t = false)]
    examples: bool,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InterfaceOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// top-level interface name
    #[arg(long, default_value = "RootObject")]
    root_type: String,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct TreeOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// emit the tree structure as JSON instead of formatted text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_document(&self) -> anyhow::Result<Value> {
        if self.sample {
            return Ok(sample_document());
        }
        let Some(input) = self.input.as_ref() else {
            return Err(anyhow!("no input given (use --input or --sample)"));
        };
        let source = if input.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        } else {
            std::fs::read_to_string(input)
                .with_context(|| format!("failed to read source file: {}", input.display()))?
        };
        parse::document_from_str(&source).map_err(|message| anyhow!("Invalid JSON: {message}"))
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Schema(target) => {
                let document = target.input_settings.load_document()?;
                let schema = schema::synthesize(&document, target.dialect, target.examples)?;
                let rendered = serde_json::to_string_pretty(&schema)?;
                write_output(target.out.as_deref(), &format!("{rendered}\n"))
            }
            Command::Interface(target) => {
                let document = target.input_settings.load_document()?;
                let rendered = interface::synthesize(&document, &target.root_type)?;
                write_output(target.out.as_deref(), &rendered)
            }
            Command::Tree(target) => {
                let document = target.input_settings.load_document()?;
                let lines = tree::render(&document)?;
                let rendered = if target.json {
                    let encoded = serde_json::to_string_pretty(&lines)?;
                    format!("{encoded}\n")
                } else {
                    // color only when writing to a terminal, never into files
                    tree::format(&lines, target.out.is_none())
                };
                write_output(target.out.as_deref(), &rendered)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: Option<&Path>, rendered: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}

/// Built-in sample document for trying the tool without an input file.
fn sample_document() -> Value {
    json!({
        "user": {
            "id": 12345,
            "name": "John Doe",
            "email": "john@example.com",
            "age": 30,
            "isActive": true,
            "tags": ["developer", "typescript", "ai"],
            "address": {
                "street": "123 Main St",
                "city": "San Francisco",
                "zipCode": "94102",
                "country": "USA"
            },
            "metadata": null
        },
        "timestamp": "2024-01-15T10:30:00Z",
        "version": 1.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sample_document_converts_end_to_end() {
        let document = sample_document();

        let schema = schema::synthesize(&document, Dialect::Draft07, true).unwrap();
        assert_eq!(schema["$schema"], json!("http://json-schema.org/draft-07/schema#"));
        assert_eq!(schema["required"], json!(["user", "timestamp", "version"]));
        let user = &schema["properties"]["user"];
        assert_eq!(user["properties"]["metadata"]["type"], json!(["null", "string"]));
        assert_eq!(user["properties"]["tags"]["items"]["example"], json!("developer"));
        // 1.0 has no fractional part
        assert_eq!(schema["properties"]["version"]["type"], json!("integer"));

        let declaration = interface::synthesize(&document, "RootObject").unwrap();
        assert!(declaration.starts_with("interface RootObject {\n  user: User;\n"));
        assert!(declaration.contains("  metadata?: null;\n"));
        assert!(declaration.contains("interface Address {\n"));

        let lines = tree::render(&document).unwrap();
        assert!(!tree::format(&lines, false).is_empty());
    }

    #[test]
    fn invalid_json_surfaces_at_the_shell_boundary() {
        let settings = InputSettings { input: None, sample: false };
        // missing input is caught before any parsing
        assert!(settings.load_document().is_err());

        let err = parse::document_from_str("{bad").unwrap_err();
        let shell_message = format!("Invalid JSON: {err}");
        assert!(shell_message.starts_with("Invalid JSON: "));
    }
}
