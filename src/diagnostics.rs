//! Collector for recoverable, per-item problems
//!
//! Discovery and scanning never abort on a single bad entry. They record a
//! [`Warning`] here instead, and the caller decides how to surface them.

use std::path::{Path, PathBuf};

use console::style;

/// A recoverable problem tied to one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, path: impl AsRef<Path>, message: impl Into<String>) {
        self.warnings.push(Warning {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        });
    }

    pub fn extend(&mut self, warnings: impl IntoIterator<Item = Warning>) {
        self.warnings.extend(warnings);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Print every collected warning to stderr
    pub fn flush_to_stderr(&self) {
        for warning in &self.warnings {
            eprintln!(
                "{} {}: {}",
                style("⚠").yellow(),
                style(warning.path.display()).dim(),
                warning.message
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_warnings_in_order() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());

        diagnostics.warn("src/a.ts", "permission denied");
        diagnostics.extend(vec![Warning {
            path: PathBuf::from("src/b.ts"),
            message: "invalid UTF-8".to_string(),
        }]);

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics.warnings()[0].path, PathBuf::from("src/a.ts"));
        assert_eq!(diagnostics.warnings()[1].message, "invalid UTF-8");
    }
}
