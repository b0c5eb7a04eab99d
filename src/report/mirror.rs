use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Creates a parallel report tree under `output_root`: a root named after the
/// project plus `suffix`, and one suffixed directory per source
/// subdirectory. Creation is idempotent; failures are fatal for the run.
///
/// Hidden directories (a clone's `.git` among them) are not mirrored.
pub fn mirror_tree(output_root: &Path, project_root: &Path, suffix: &str) -> Result<PathBuf> {
    let project_name = project_root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string());
    let mirrored_root = output_root.join(format!("{}{}", project_name, suffix));
    fs::create_dir_all(&mirrored_root)
        .with_context(|| format!("failed to create {}", mirrored_root.display()))?;

    let walker = WalkDir::new(project_root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let relative = entry.path().strip_prefix(project_root)?;
        let mirrored = mirrored_dir(&mirrored_root, relative, suffix);
        fs::create_dir_all(&mirrored)
            .with_context(|| format!("failed to create {}", mirrored.display()))?;
    }

    Ok(mirrored_root)
}

/// The mirrored directory for a path relative to the project root: the
/// suffix goes on the final component.
pub fn mirrored_dir(mirrored_root: &Path, relative: &Path, suffix: &str) -> PathBuf {
    if relative.as_os_str().is_empty() {
        return mirrored_root.to_path_buf();
    }
    match (relative.parent(), relative.file_name()) {
        (Some(parent), Some(name)) => mirrored_root
            .join(parent)
            .join(format!("{}{}", name.to_string_lossy(), suffix)),
        _ => mirrored_root.to_path_buf(),
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn collect_dirs(root: &Path) -> Vec<String> {
        let mut dirs: Vec<String> = WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
            .map(|e| {
                e.path()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        dirs.sort();
        dirs
    }

    #[test]
    fn test_mirrors_subdirectories_with_suffix() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("myproj");
        let output = temp.path().join("out");
        fs::create_dir_all(project.join("sub").join("inner")).unwrap();
        fs::create_dir_all(&output).unwrap();

        let mirrored_root = mirror_tree(&output, &project, "_analysis").unwrap();

        assert_eq!(mirrored_root, output.join("myproj_analysis"));
        assert!(mirrored_root.join("sub_analysis").is_dir());
        assert!(mirrored_root.join("sub").join("inner_analysis").is_dir());
    }

    #[test]
    fn test_idempotent() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("proj");
        let output = temp.path().join("out");
        fs::create_dir_all(project.join("a").join("b")).unwrap();
        fs::create_dir_all(&output).unwrap();

        let first = mirror_tree(&output, &project, "_analysis").unwrap();
        let dirs_after_first = collect_dirs(&output);
        let second = mirror_tree(&output, &project, "_analysis").unwrap();
        let dirs_after_second = collect_dirs(&output);

        assert_eq!(first, second);
        assert_eq!(dirs_after_first, dirs_after_second);
    }

    #[test]
    fn test_hidden_directories_not_mirrored() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("proj");
        let output = temp.path().join("out");
        fs::create_dir_all(project.join(".git").join("objects")).unwrap();
        fs::create_dir_all(project.join("src")).unwrap();
        fs::create_dir_all(&output).unwrap();

        let mirrored_root = mirror_tree(&output, &project, "_analysis").unwrap();

        assert!(mirrored_root.join("src_analysis").is_dir());
        assert!(!mirrored_root.join(".git_analysis").exists());
    }

    #[test]
    fn test_mirrored_dir_for_root_relative() {
        let root = Path::new("/out/proj_analysis");
        assert_eq!(mirrored_dir(root, Path::new(""), "_analysis"), root);
        assert_eq!(
            mirrored_dir(root, Path::new("sub"), "_analysis"),
            root.join("sub_analysis")
        );
        assert_eq!(
            mirrored_dir(root, Path::new("sub/inner"), "_analysis"),
            root.join("sub").join("inner_analysis")
        );
    }
}
