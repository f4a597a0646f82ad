use std::collections::HashMap;

use crate::constants::source::{EXTENSIONS, INDEX_BASENAME};
use crate::core::SourceFile;

/// Lookup from every plausible spelling of a discovered file to that file
///
/// Each file is registered under its root-relative path, its path without a
/// recognized extension, and, for `<dir>/index.<ext>` files, under `<dir>`.
/// When two files claim the same spelling, the one registered later wins.
#[derive(Debug, Clone, Default)]
pub struct ModulePathIndex {
    entries: HashMap<String, SourceFile>,
}

impl ModulePathIndex {
    pub fn build(files: &[SourceFile]) -> Self {
        let mut index = Self::default();

        for file in files {
            let relative = file.relative_path();
            index.register(relative, file);

            let without_ext = strip_source_extension(relative);
            if without_ext != relative {
                index.register(without_ext, file);
            }

            if let Some(dir) = index_directory(relative) {
                index.register(dir, file);
            }
        }

        index
    }

    /// Last write wins on collision
    fn register(&mut self, key: &str, file: &SourceFile) {
        self.entries.insert(key.to_string(), file.clone());
    }

    pub fn lookup(&self, key: &str) -> Option<&SourceFile> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn strip_source_extension(path: &str) -> &str {
    EXTENSIONS
        .iter()
        .find_map(|ext| {
            path.strip_suffix(ext)
                .and_then(|rest| rest.strip_suffix('.'))
        })
        .unwrap_or(path)
}

/// The directory a `<dir>/index.<ext>` file stands in for
fn index_directory(path: &str) -> Option<&str> {
    let (dir, file_name) = path.rsplit_once('/')?;
    let (stem, ext) = file_name.rsplit_once('.')?;
    (stem == INDEX_BASENAME && EXTENSIONS.contains(&ext)).then_some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(paths: &[&str]) -> Vec<SourceFile> {
        paths.iter().map(|p| SourceFile::from_relative(*p)).collect()
    }

    #[test]
    fn test_registers_all_spellings() {
        let index = ModulePathIndex::build(&files(&["src/util.ts", "src/ui/index.tsx"]));

        assert_eq!(index.lookup("src/util.ts").unwrap().relative_path(), "src/util.ts");
        assert_eq!(index.lookup("src/util").unwrap().relative_path(), "src/util.ts");
        assert_eq!(index.lookup("src/ui").unwrap().relative_path(), "src/ui/index.tsx");
        assert_eq!(index.lookup("src/ui/index").unwrap().relative_path(), "src/ui/index.tsx");
        assert!(index.lookup("src/ui/index.ts").is_none());
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn test_last_registered_file_wins_collisions() {
        let index = ModulePathIndex::build(&files(&["lib/a.js", "lib/a.ts"]));

        assert_eq!(index.lookup("lib/a").unwrap().relative_path(), "lib/a.ts");
        assert_eq!(index.lookup("lib/a.js").unwrap().relative_path(), "lib/a.js");
    }

    #[test]
    fn test_directory_alias_collides_with_sibling_file() {
        // `lib/a/index.ts` claims "lib/a" after `lib/a.ts` did
        let index = ModulePathIndex::build(&files(&["lib/a.ts", "lib/a/index.ts"]));

        assert_eq!(index.lookup("lib/a").unwrap().relative_path(), "lib/a/index.ts");
    }

    #[test]
    fn test_root_index_has_no_directory_alias() {
        let index = ModulePathIndex::build(&files(&["index.js"]));

        assert!(index.lookup("").is_none());
        assert_eq!(index.lookup("index").unwrap().relative_path(), "index.js");
    }

    #[test]
    fn test_strip_source_extension() {
        assert_eq!(strip_source_extension("a/b.jsx"), "a/b");
        assert_eq!(strip_source_extension("a/b.ts"), "a/b");
        assert_eq!(strip_source_extension("a/b.css"), "a/b.css");
        assert_eq!(strip_source_extension("a/bts"), "a/bts");
    }
}
