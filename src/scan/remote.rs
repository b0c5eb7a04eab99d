use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Whether the user's input names a remote repository rather than a local
/// path.
pub fn is_remote_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://") || input.starts_with("git@")
}

/// Clones `url` into `dest_root`, removing any prior clone at the same
/// destination first. Returns the path of the fresh clone.
pub fn clone_repository(url: &str, dest_root: &Path) -> Result<PathBuf> {
    let name = repo_name_from_url(url)?;
    let dest = dest_root.join(name);

    if dest.exists() {
        fs::remove_dir_all(&dest)
            .with_context(|| format!("failed to remove previous clone at {}", dest.display()))?;
    }

    let status = Command::new("git")
        .arg("clone")
        .arg(url)
        .arg(&dest)
        .status()
        .context("failed to run git; is it installed and on PATH?")?;

    if !status.success() {
        bail!("git clone failed for {}", url);
    }

    Ok(dest)
}

fn repo_name_from_url(url: &str) -> Result<String> {
    let trimmed = url.trim_end_matches('/').trim_end_matches(".git");
    trimmed
        .rsplit(['/', ':'])
        .next()
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .ok_or_else(|| anyhow!("cannot derive a repository name from {}", url))
}
