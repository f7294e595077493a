//! YAML writer for rendered legal documents.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::text::linkify;
use crate::types::{DisplayBlock, InlineSpan, ListItem, RenderedDocument, Revision};

/// Revision representation for YAML serialization.
#[derive(Debug, Serialize)]
struct YamlRevision {
    raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
}

impl From<&Revision> for YamlRevision {
    fn from(r: &Revision) -> Self {
        Self {
            raw: r.raw.clone(),
            date: r.date.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// List item representation for YAML serialization.
#[derive(Debug, Serialize)]
struct YamlItem {
    number: String,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    spans: Option<Vec<InlineSpan>>,
}

impl From<&ListItem> for YamlItem {
    fn from(item: &ListItem) -> Self {
        Self {
            number: item.number.clone(),
            text: item.text.clone(),
            spans: link_spans(&item.text),
        }
    }
}

/// Block representation for YAML serialization.
///
/// Body text carries its inline spans when it contains links.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum YamlBlock {
    Heading {
        text: String,
    },
    HeadingWithNumberedList {
        heading: String,
        items: Vec<YamlItem>,
    },
    HeadingWithParagraph {
        heading: String,
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        spans: Option<Vec<InlineSpan>>,
    },
    NumberedList {
        items: Vec<YamlItem>,
    },
    Paragraph {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        spans: Option<Vec<InlineSpan>>,
    },
}

impl From<&DisplayBlock> for YamlBlock {
    fn from(block: &DisplayBlock) -> Self {
        match block {
            DisplayBlock::Heading { text } => Self::Heading { text: text.clone() },
            DisplayBlock::HeadingWithNumberedList { heading, items } => {
                Self::HeadingWithNumberedList {
                    heading: heading.clone(),
                    items: items.iter().map(YamlItem::from).collect(),
                }
            }
            DisplayBlock::HeadingWithParagraph { heading, text } => Self::HeadingWithParagraph {
                heading: heading.clone(),
                text: text.clone(),
                spans: link_spans(text),
            },
            DisplayBlock::NumberedList { items } => Self::NumberedList {
                items: items.iter().map(YamlItem::from).collect(),
            },
            DisplayBlock::Paragraph { text } => Self::Paragraph {
                text: text.clone(),
                spans: link_spans(text),
            },
        }
    }
}

/// Full document representation for YAML serialization.
#[derive(Debug, Serialize)]
struct YamlDocument {
    #[serde(rename = "$id")]
    id: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    revision: Option<YamlRevision>,
    blocks: Vec<YamlBlock>,
}

/// Inline spans of a text, or `None` when it has no links.
fn link_spans(text: &str) -> Option<Vec<InlineSpan>> {
    let spans = linkify(text);
    spans
        .iter()
        .any(|span| matches!(span, InlineSpan::Link { .. }))
        .then_some(spans)
}

fn generate_yaml_struct(doc: &RenderedDocument) -> YamlDocument {
    YamlDocument {
        id: doc.id.clone(),
        title: doc.title.clone(),
        revision: doc.revision.as_ref().map(YamlRevision::from),
        blocks: doc.blocks.iter().map(YamlBlock::from).collect(),
    }
}

/// Indent YAML sequences so items sit under their parent key.
///
/// ```yaml
/// # Before:          # After:
/// blocks:            blocks:
/// - kind: heading      - kind: heading
///   text: foo            text: foo
/// ```
fn indent_yaml_sequences(yaml: &str) -> String {
    let mut result: Vec<String> = Vec::new();
    // Stack of indent levels where sequences start
    let mut seq_indents: Vec<usize> = Vec::new();

    for line in yaml.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            result.push(line.to_string());
            continue;
        }

        let indent = line.len() - trimmed.len();

        while let Some(&seq_indent) = seq_indents.last() {
            if indent < seq_indent || (indent == seq_indent && !trimmed.starts_with("- ")) {
                seq_indents.pop();
            } else {
                break;
            }
        }

        if trimmed.starts_with("- ") {
            let is_continuation = seq_indents.last().is_some_and(|&si| si == indent);
            if !is_continuation {
                seq_indents.push(indent);
            }
        }

        let extra = seq_indents.len() * 2;
        if extra > 0 {
            result.push(format!("{}{}", " ".repeat(indent + extra), trimmed));
        } else {
            result.push(line.to_string());
        }
    }

    result.join("\n")
}

/// Generate YAML string from a rendered document.
pub fn generate_yaml(doc: &RenderedDocument) -> Result<String> {
    let yaml_struct = generate_yaml_struct(doc);
    let yaml_string = serde_yaml_ng::to_string(&yaml_struct)?;
    let yaml_string = indent_yaml_sequences(&yaml_string);

    // Add document start marker and clean up trailing whitespace
    let lines: Vec<&str> = yaml_string.lines().map(|l| l.trim_end()).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Save a rendered document as `<output_dir>/<id>.yaml`.
///
/// Writes to a temp file, syncs it and renames it over the target so a
/// crash never leaves a half-written file behind.
///
/// # Returns
/// Path to the saved file
pub fn save_yaml(doc: &RenderedDocument, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let output_file = output_dir.join(format!("{}.yaml", doc.id));
    let temp_file = output_dir.join(format!(".{}.yaml.tmp", doc.id));

    let content = generate_yaml(doc)?;

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file)?;
    }

    fs::rename(&temp_file, &output_file)?;
    tracing::debug!(path = %output_file.display(), "Saved YAML");

    Ok(output_file)
}
