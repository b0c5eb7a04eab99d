use anyhow::Result;
use ignore::WalkBuilder;
use std::path::Path;

use crate::types::FileEntry;

/// Extensions recognized as analyzable source code.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "c", "cc", "cpp", "cs", "css", "go", "h", "hpp", "html", "java", "js", "jsx", "kt", "lua",
    "m", "php", "pl", "py", "rb", "rs", "scala", "sh", "sql", "swift", "ts", "tsx",
];

pub fn should_include_file(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => SOURCE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

fn walk(root: &Path, respect_gitignore: bool) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder
        .git_ignore(respect_gitignore)
        .git_global(respect_gitignore)
        .git_exclude(respect_gitignore)
        .require_git(false)
        .sort_by_file_path(|a, b| a.cmp(b));
    builder.build()
}

/// Recursively collects source files under `root`, filtered to
/// `SOURCE_EXTENSIONS`, in deterministic path order. Hidden files and
/// directories are skipped.
pub fn scan_directory(root: &Path, respect_gitignore: bool) -> Result<Vec<FileEntry>> {
    let mut files = Vec::new();
    for entry in walk(root, respect_gitignore) {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if !should_include_file(entry.path()) {
            continue;
        }
        files.push(file_entry(root, entry.path()));
    }
    Ok(files)
}

/// First file in walk order, with no extension filter. Used by the quick
/// pass, which previews whatever the project contains.
pub fn first_file(root: &Path, respect_gitignore: bool) -> Result<Option<FileEntry>> {
    for entry in walk(root, respect_gitignore) {
        let entry = entry?;
        if entry.file_type().is_some_and(|t| t.is_file()) {
            return Ok(Some(file_entry(root, entry.path())));
        }
    }
    Ok(None)
}

fn file_entry(root: &Path, path: &Path) -> FileEntry {
    let relative_path = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/");
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    FileEntry {
        path: path.to_path_buf(),
        relative_path,
        extension,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_should_include_file() {
        assert!(should_include_file(Path::new("main.py")));
        assert!(should_include_file(Path::new("src/lib.rs")));
        assert!(should_include_file(Path::new("UPPER.PY")));
        assert!(!should_include_file(Path::new("notes.txt")));
        assert!(!should_include_file(Path::new("Makefile")));
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("b.py"), "print()").unwrap();
        fs::write(temp.path().join("a.txt"), "notes").unwrap();
        fs::write(temp.path().join("sub").join("c.rs"), "fn main() {}").unwrap();

        let files = scan_directory(temp.path(), true).unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["b.py", "sub/c.rs"]);
        assert_eq!(files[0].extension, "py");
    }

    #[test]
    fn test_scan_skips_hidden() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        fs::write(temp.path().join(".git").join("config.py"), "x = 1").unwrap();
        fs::write(temp.path().join("a.py"), "x = 1").unwrap();

        let files = scan_directory(temp.path(), true).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, "a.py");
    }

    #[test]
    fn test_first_file_has_no_extension_filter() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.txt"), "plain text").unwrap();

        let first = first_file(temp.path(), false).unwrap();
        assert_eq!(first.unwrap().relative_path, "notes.txt");
    }

    #[test]
    fn test_first_file_empty_directory() {
        let temp = TempDir::new().unwrap();
        assert!(first_file(temp.path(), false).unwrap().is_none());
    }
}
