//! Turns source files into structure/logic analyses via a chat completion
//! provider.

mod splitter;

pub use splitter::SectionSplitter;

use anyhow::Result;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::provider::ChatProvider;
use crate::scan::{first_file, scan_directory};
use crate::types::{AnalysisSections, FileAnalysis, FileEntry, OverallAnalysis, ProjectAnalysis};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("analysis request failed for {path}: {message}")]
    Request { path: String, message: String },
}

/// Result of a full-project pass.
pub struct ProjectRun {
    pub project: ProjectAnalysis,
    pub overall: OverallAnalysis,
}

pub struct AnalysisDriver {
    provider: Box<dyn ChatProvider>,
    splitter: SectionSplitter,
}

fn build_prompt(code: &str) -> String {
    format!(
        "Analyze the following code and describe how the file is organized and what its \
         logic does. Reply with a \"Structure:\" section covering the file's organization, \
         followed by a \"Logic:\" section covering the behavior.\n\n{}\n",
        code
    )
}

impl AnalysisDriver {
    pub fn new(provider: Box<dyn ChatProvider>, splitter: SectionSplitter) -> Self {
        Self { provider, splitter }
    }

    pub async fn analyze_file(
        &self,
        entry: &FileEntry,
    ) -> Result<AnalysisSections, AnalysisError> {
        let code = fs::read_to_string(&entry.path).map_err(|source| AnalysisError::FileRead {
            path: entry.relative_path.clone(),
            source,
        })?;
        let raw = self
            .provider
            .complete(&build_prompt(&code))
            .await
            .map_err(|e| AnalysisError::Request {
                path: entry.relative_path.clone(),
                message: e.to_string(),
            })?;
        Ok(self.splitter.split(&raw))
    }

    /// Quick pass: the first file found, with no extension filter. Any
    /// failure aborts the pass. An empty directory yields an empty result.
    pub async fn analyze_first_file(&self, root: &Path) -> Result<ProjectAnalysis> {
        let mut project = ProjectAnalysis::new();
        let Some(entry) = first_file(root, false)? else {
            return Ok(project);
        };
        let sections = self.analyze_file(&entry).await?;
        project.insert(entry.relative_path, FileAnalysis::Sections(sections));
        Ok(project)
    }

    /// Full pass: every recognized source file in walk order. Per-file
    /// failures are recorded as error entries and the walk continues. The
    /// `on_file` callback fires after each file so callers can write reports
    /// incrementally.
    pub async fn analyze_project<F>(&self, root: &Path, mut on_file: F) -> Result<ProjectRun>
    where
        F: FnMut(&FileEntry, &FileAnalysis) -> Result<()>,
    {
        let files = scan_directory(root, true)?;
        let mut project = ProjectAnalysis::new();
        let mut overall = OverallAnalysis::new();

        for entry in &files {
            overall.add_language(&entry.extension);
            let analysis = match self.analyze_file(entry).await {
                Ok(sections) => {
                    overall.add_overview(&entry.relative_path, sections.clone());
                    FileAnalysis::Sections(sections)
                }
                Err(err) => FileAnalysis::Error(err.to_string()),
            };
            on_file(entry, &analysis)?;
            project.insert(entry.relative_path.clone(), analysis);
        }

        Ok(ProjectRun { project, overall })
    }
}
