//! Minimal CLI: define → (schema | gemini)
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use crate::schema::Schema;
use crate::{definition, gemini};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// load shape definitions and render them as strict JSON Schema or
/// Gemini-dialect documents
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// render the canonical (strict) JSON Schema document
    Schema(RenderTarget),
    /// render the Gemini-dialect document
    Gemini(RenderTarget),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode in each document (e.g. /definitions/user)
    #[arg(long)]
    json_pointer: Option<String>,

    /// name for the root node when the definition carries none
    #[arg(long, default_value = "root")]
    name: String,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug)]
struct RenderTarget {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted; requires a single input)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Schema(target) => target.render(Schema::to_document),
            Command::Gemini(target) => target.render(gemini::document),
        }
    }
}

impl InputSettings {
    /// Load every input into a validated schema tree.
    fn load_schemas(&self) -> Result<Vec<Schema>> {
        let source_paths =
            resolve_file_path_patterns(&self.input).context("failed to resolve input file paths")?;

        let mut schemas = Vec::with_capacity(source_paths.len());
        for source_path in source_paths {
            let source = std::fs::read_to_string(&source_path)
                .with_context(|| format!("failed to read {}", source_path.display()))?;

            let def = match self.json_pointer.as_deref() {
                None => definition::parse(&source),
                Some(pointer) => {
                    let document: Value =
                        serde_json::from_str(&source).context("input is not valid JSON")?;
                    let node = document
                        .pointer(pointer)
                        .with_context(|| format!("JSON pointer {pointer} matched nothing"))?;
                    definition::parse_value(node.clone())
                }
            }
            .with_context(|| format!("invalid shape definition: {}", source_path.display()))?;

            schemas.push(def.into_schema(&self.name)?);
        }
        Ok(schemas)
    }
}

impl RenderTarget {
    fn render(&self, to_document: impl Fn(&Schema) -> Value) -> Result<()> {
        let schemas = self.input_settings.load_schemas()?;
        if self.out.is_some() && schemas.len() != 1 {
            bail!("--out expects exactly one input, got {}", schemas.len());
        }

        for schema in &schemas {
            let rendered = serde_json::to_string_pretty(&to_document(schema))?;
            match self.out.as_ref() {
                Some(out) => {
                    if let Some(parent) = out.parent() {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("failed to create {}", parent.display()))?;
                    }
                    std::fs::write(out, &rendered)
                        .with_context(|| format!("failed to write {}", out.display()))?;
                }
                None => println!("{rendered}"),
            }
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in
                glob::glob(pattern).with_context(|| format!("bad glob pattern: {pattern}"))?
            {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            // Treat as a literal path
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
