use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

static TRAILING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(\d+)$").expect("valid regex"));

/// Returns a collision-free path for `base + extension`.
///
/// When the plain name is taken, a trailing `_<digits>` suffix on `base` is
/// stripped and used as the starting counter (plus one); otherwise counting
/// starts at 1. Names are probed until a free one is found. The function only
/// inspects the filesystem; it never creates anything.
pub fn next_available_name(base: &Path, extension: &str) -> PathBuf {
    let base = base.to_string_lossy();
    let first = PathBuf::from(format!("{}{}", base, extension));
    if !first.exists() {
        return first;
    }

    let (stem, mut counter) = match TRAILING_NUMBER.captures(&base) {
        Some(caps) => {
            let digits = caps.get(1).map(|m| m.as_str()).unwrap_or("0");
            let start = caps.get(0).map(|m| m.start()).unwrap_or(base.len());
            let next = digits.parse::<u64>().map(|n| n + 1).unwrap_or(1);
            (base[..start].to_string(), next)
        }
        None => (base.to_string(), 1),
    };

    loop {
        let candidate = PathBuf::from(format!("{}_{}{}", stem, counter, extension));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_free_name_returned_unchanged() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("report");

        let name = next_available_name(&base, ".md");
        assert_eq!(name, temp.path().join("report.md"));
        // The call records a free name; it must not create it.
        assert!(!name.exists());
    }

    #[test]
    fn test_collision_appends_counter() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("report");
        fs::write(temp.path().join("report.md"), "").unwrap();

        let name = next_available_name(&base, ".md");
        assert_eq!(name, temp.path().join("report_1.md"));
    }

    #[test]
    fn test_counter_skips_existing_sequence() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("report");
        fs::write(temp.path().join("report.md"), "").unwrap();
        fs::write(temp.path().join("report_1.md"), "").unwrap();
        fs::write(temp.path().join("report_2.md"), "").unwrap();

        let name = next_available_name(&base, ".md");
        assert_eq!(name, temp.path().join("report_3.md"));
        assert!(!name.exists());
    }

    #[test]
    fn test_numbered_base_resumes_counting() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("report_4");
        fs::write(temp.path().join("report_4.md"), "").unwrap();

        let name = next_available_name(&base, ".md");
        assert_eq!(name, temp.path().join("report_5.md"));
    }

    #[test]
    fn test_numbered_base_without_collision_kept() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("report_4");

        let name = next_available_name(&base, ".md");
        assert_eq!(name, temp.path().join("report_4.md"));
    }
}
