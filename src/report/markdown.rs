use anyhow::{Context, Result};
use chrono::Utc;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{FileAnalysis, OverallAnalysis, ProjectAnalysis};

/// Renders per-file entries in insertion order: an error line for failed
/// files, structure and logic subsections for the rest, separated by
/// horizontal rules.
pub fn render_project_report(analysis: &ProjectAnalysis, title: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", title));

    for (path, entry) in analysis.iter() {
        output.push_str(&format!("## File: {}\n\n", path));
        match entry {
            FileAnalysis::Error(message) => {
                output.push_str(&format!("**Error**: {}\n\n", message));
            }
            FileAnalysis::Sections(sections) => {
                output.push_str(&format!("### Structure\n\n{}\n\n", sections.structure));
                output.push_str(&format!("### Logic\n\n{}\n\n", sections.logic));
            }
        }
        output.push_str("\n---\n\n");
    }

    output
}

/// Renders the aggregate report: language/dependency/construct sections, then
/// the per-file overview in walk order.
pub fn render_overall_report(overall: &OverallAnalysis) -> String {
    let mut output = String::new();

    output.push_str("# Overall Analysis\n\n");
    output.push_str(&format!(
        "_Generated: {}_\n\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!("## Languages\n\n{}\n\n", join_set(&overall.languages)));
    output.push_str(&format!(
        "## Dependencies\n\n{}\n\n",
        join_set(&overall.dependencies)
    ));
    output.push_str(&format!(
        "## Custom Constructs\n\n{}\n\n",
        join_set(&overall.custom_constructs)
    ));

    output.push_str("## File Overview\n\n");
    for (path, sections) in &overall.file_overview {
        output.push_str(&format!("### {}\n\n", path));
        output.push_str(&format!("**Structure**\n\n{}\n\n", sections.structure));
        output.push_str(&format!("**Logic**\n\n{}\n\n", sections.logic));
        output.push_str("---\n\n");
    }

    output
}

fn join_set(set: &BTreeSet<String>) -> String {
    if set.is_empty() {
        "(none)".to_string()
    } else {
        set.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Writes a report, truncating any previous file at `target`, and returns
/// the absolute path of the written document.
pub fn write_report(target: &Path, content: &str) -> Result<PathBuf> {
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(target, content)
        .with_context(|| format!("failed to write {}", target.display()))?;
    fs::canonicalize(target).with_context(|| format!("failed to resolve {}", target.display()))
}
