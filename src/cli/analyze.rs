use anyhow::{bail, Result};
use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Confirm, Text};
use std::path::{Path, PathBuf};

use crate::analyze::{AnalysisDriver, SectionSplitter};
use crate::config::Config;
use crate::provider::create_provider;
use crate::report::{
    mirror_tree, mirrored_dir, next_available_name, render_overall_report, render_project_report,
    write_report,
};
use crate::scan::{clone_repository, is_remote_url};
use crate::types::{FileAnalysis, ProjectAnalysis};

use super::theme;

static CLONE: Emoji<'_, '_> = Emoji("📦 ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");
static ERROR: Emoji<'_, '_> = Emoji("❌ ", "");

pub async fn run_analyze(path: Option<String>, output: Option<PathBuf>, yes: bool) -> Result<()> {
    inquire::set_global_render_config(theme::render_config());
    theme::print_banner();

    let input = match path {
        Some(value) => value,
        None => Text::new("Project path or GitHub URL:").prompt()?,
    };
    let input = input.trim().to_string();

    let output_dir = match output {
        Some(value) => value,
        None => PathBuf::from(Text::new("Output directory:").with_default(".").prompt()?),
    };
    if !output_dir.is_dir() {
        bail!("output directory {} does not exist", output_dir.display());
    }

    let project_root = if is_remote_url(&input) {
        println!("{}Cloning {}...", CLONE, style(&input).cyan());
        clone_repository(&input, &output_dir)?
    } else {
        PathBuf::from(&input)
    };
    if !project_root.is_dir() {
        bail!("project path {} does not exist", project_root.display());
    }

    let config = Config::load()?;
    let provider = create_provider(&config.provider)?;
    let splitter = SectionSplitter::new(
        &config.report.section_marker,
        &config.report.missing_logic_sentinel,
    );
    let driver = AnalysisDriver::new(provider, splitter);

    let project_name = project_root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string());
    let suffix = config.report.suffix_label.clone();

    // Quick pass: the first file only, as a cheap preview of the model
    // output before committing to a full walk.
    let pb = spinner(format!("Analyzing first file of {}...", project_name));
    let preview = driver.analyze_first_file(&project_root).await;
    pb.finish_and_clear();

    let preview = match preview {
        Ok(preview) => preview,
        Err(e) => {
            theme::print_error(&format!("quick analysis failed: {}", e));
            return Ok(());
        }
    };
    if preview.is_empty() {
        theme::print_error("no files found to analyze");
        return Ok(());
    }

    let report = render_project_report(&preview, "Project Analysis Report");
    let target = next_available_name(
        &output_dir.join(format!("{}{}", project_name, suffix)),
        ".md",
    );
    let written = write_report(&target, &report)?;
    theme::print_success(&format!("quick analysis written to {}", written.display()));

    let proceed = yes
        || Confirm::new("Run the full-project analysis?")
            .with_default(true)
            .with_help_message("Analyzes every recognized source file and mirrors the output tree")
            .prompt()?;
    if !proceed {
        println!("  {}", style("Full-project pass cancelled.").dim());
        return Ok(());
    }

    let mirrored_root = mirror_tree(&output_dir, &project_root, &suffix)?;

    let pb = spinner("Analyzing project...".to_string());
    let run = driver
        .analyze_project(&project_root, |entry, analysis| {
            pb.set_message(entry.relative_path.clone());
            let relative = Path::new(&entry.relative_path);
            let parent = relative.parent().unwrap_or(Path::new(""));
            let stem = relative
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "file".to_string());

            let dir = mirrored_dir(&mirrored_root, parent, &suffix);
            let target = next_available_name(&dir.join(format!("{}{}", stem, suffix)), ".md");

            let mut single = ProjectAnalysis::new();
            single.insert(entry.relative_path.clone(), analysis.clone());
            let report = render_project_report(
                &single,
                &format!("Analysis: {}", entry.relative_path),
            );
            write_report(&target, &report)?;
            Ok(())
        })
        .await?;
    pb.finish_and_clear();

    let overall_target = next_available_name(&mirrored_root.join("overall_analysis"), ".md");
    let overall_written = write_report(&overall_target, &render_overall_report(&run.overall))?;

    let analyzed = run.project.len() - run.project.error_count();
    println!("\n{}Full-project analysis complete!\n", SUCCESS);
    println!("  Files analyzed:  {}", style(analyzed).green());
    println!("  Errors:          {}", style(run.project.error_count()).red());
    println!(
        "  Languages:       {}",
        style(
            run.overall
                .languages
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        )
        .cyan()
    );
    println!(
        "  Reports:         {}",
        style(mirrored_root.display()).cyan()
    );
    println!(
        "  Overall report:  {}",
        style(overall_written.display()).cyan()
    );

    if run.project.error_count() > 0 {
        println!("\n{}Errors ({}):", ERROR, run.project.error_count());
        for (path, analysis) in run.project.iter().filter(|(_, a)| a.is_error()).take(10) {
            if let FileAnalysis::Error(message) = analysis {
                println!("  - {}: {}", path, style(message).red());
            }
        }
        if run.project.error_count() > 10 {
            println!("  ... and {} more", run.project.error_count() - 10);
        }
    }

    Ok(())
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
