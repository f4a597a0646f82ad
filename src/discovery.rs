use std::fs;

use walkdir::WalkDir;

use crate::config::DiscoveryOptions;
use crate::core::SourceFile;
use crate::diagnostics::Diagnostics;
use crate::error::CarouselError;
use crate::progress::ProgressReporter;

pub struct FileDiscovery {
    options: DiscoveryOptions,
}

impl FileDiscovery {
    pub fn new(options: DiscoveryOptions) -> Self {
        Self { options }
    }

    /// Walk the root and collect every recognized source file
    ///
    /// Only an unreadable root is fatal. Unreadable entries below it are
    /// recorded in `diagnostics` and skipped.
    pub fn discover(
        &self,
        diagnostics: &mut Diagnostics,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<SourceFile>, CarouselError> {
        let root = &self.options.root;

        fs::read_dir(root).map_err(|source| CarouselError::RootUnreadable {
            path: root.clone(),
            source,
        })?;

        let mut files = Vec::new();

        // Entries within a directory are visited in file-name order so that
        // index collisions resolve the same way on every platform.
        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || !e.file_type().is_dir()
                    || !self.options.is_excluded_dir(&e.file_name().to_string_lossy())
            });

        for entry in walker {
            if self.options.limit_reached(files.len()) {
                break;
            }

            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(root.as_path()).to_path_buf();
                    diagnostics.warn(path, format!("Error accessing entry: {e}"));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if !self.options.is_source_file(&file_name) {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            if let Some(p) = progress {
                p.discovered_file(&relative);
            }

            files.push(SourceFile::new(relative, entry.path()));
        }

        Ok(files)
    }
}

/// Discover source files under `root` with the fixed exclusion and extension sets
pub fn discover_files(
    root: impl Into<std::path::PathBuf>,
    max_files: Option<usize>,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<SourceFile>, CarouselError> {
    let mut options = DiscoveryOptions::new(root);
    options.max_files = max_files.unwrap_or(0);
    FileDiscovery::new(options).discover(diagnostics, None)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir_all(root.join("src/components")).unwrap();
        fs::create_dir_all(root.join("node_modules/react")).unwrap();
        fs::create_dir_all(root.join("dist")).unwrap();

        fs::write(root.join("src/index.ts"), "import './components';\n").unwrap();
        fs::write(root.join("src/components/index.tsx"), "export {};\n").unwrap();
        fs::write(root.join("src/components/button.jsx"), "export {};\n").unwrap();
        fs::write(root.join("src/types.d.ts"), "declare const x: number;\n").unwrap();
        fs::write(root.join("src/readme.md"), "# docs\n").unwrap();
        fs::write(root.join("node_modules/react/index.js"), "module.exports = {};\n").unwrap();
        fs::write(root.join("dist/bundle.js"), "var a;\n").unwrap();

        temp
    }

    fn relative_paths(files: &[SourceFile]) -> Vec<&str> {
        files.iter().map(|f| f.relative_path()).collect()
    }

    #[test]
    fn test_discovers_sources_and_skips_excluded() {
        let temp = create_test_tree();
        let mut diagnostics = Diagnostics::new();

        let files = discover_files(temp.path(), None, &mut diagnostics).unwrap();

        assert_eq!(
            relative_paths(&files),
            vec![
                "src/components/button.jsx",
                "src/components/index.tsx",
                "src/index.ts",
            ]
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_respects_file_cap() {
        let temp = create_test_tree();
        let mut diagnostics = Diagnostics::new();

        let files = discover_files(temp.path(), Some(2), &mut diagnostics).unwrap();

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_extra_exclusions() {
        let temp = create_test_tree();
        let mut diagnostics = Diagnostics::new();
        let mut options = DiscoveryOptions::new(temp.path());
        options.excluded_dirs.push("components".to_string());

        let files = FileDiscovery::new(options)
            .discover(&mut diagnostics, None)
            .unwrap();

        assert_eq!(relative_paths(&files), vec!["src/index.ts"]);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");
        let mut diagnostics = Diagnostics::new();

        let err = discover_files(&missing, None, &mut diagnostics).unwrap_err();

        match err {
            CarouselError::RootUnreadable { path, .. } => assert_eq!(path, missing),
            other => panic!("Expected RootUnreadable, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_link_is_warned_and_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.ts"), "export {};\n").unwrap();
        std::os::unix::fs::symlink(temp.path().join("nope"), temp.path().join("dangling.ts"))
            .unwrap();
        let mut diagnostics = Diagnostics::new();

        let files = discover_files(temp.path(), None, &mut diagnostics).unwrap();

        assert_eq!(relative_paths(&files), vec!["a.ts"]);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.warnings()[0].path.ends_with("dangling.ts"));
    }

    #[test]
    fn test_root_named_like_excluded_dir_is_still_walked() {
        let temp = TempDir::new().unwrap();
        let build = temp.path().join("build");
        fs::create_dir_all(&build).unwrap();
        fs::write(build.join("main.js"), "").unwrap();
        let mut diagnostics = Diagnostics::new();

        let files = discover_files(&build, None, &mut diagnostics).unwrap();

        assert_eq!(relative_paths(&files), vec!["main.js"]);
    }
}
