use std::path::Component;

use crate::analyzer::ModulePathIndex;
use crate::constants::source::{EXTENSIONS, INDEX_BASENAME, MONOREPO_PREFIXES};
use crate::core::SourceFile;

/// Turns a raw import string into the discovered file it refers to
///
/// Probe order is a tie-break between competing candidates and must not be
/// rearranged: exact spelling, then each extension in priority order, then the
/// directory's index file. Relative specifiers never fall through to the
/// monorepo guesses used for bare specifiers.
pub struct ImportResolver<'a> {
    index: &'a ModulePathIndex,
}

impl<'a> ImportResolver<'a> {
    pub fn new(index: &'a ModulePathIndex) -> Self {
        Self { index }
    }

    /// Resolve `raw_path` as written in `importer`; `None` means no edge
    pub fn resolve(&self, raw_path: &str, importer: &SourceFile) -> Option<&'a SourceFile> {
        if raw_path.starts_with('.') {
            self.resolve_relative(raw_path, importer)
        } else {
            self.resolve_bare(raw_path)
        }
    }

    fn resolve_relative(&self, raw_path: &str, importer: &SourceFile) -> Option<&'a SourceFile> {
        let base = join_normalized(importer.directory(), raw_path)
            .or_else(|| reenter_root(importer, raw_path))?;

        self.index
            .lookup(&base)
            .or_else(|| self.probe_extensions(&base))
            .or_else(|| self.probe_extensions(&format!("{base}/{INDEX_BASENAME}")))
    }

    fn resolve_bare(&self, specifier: &str) -> Option<&'a SourceFile> {
        if let Some(file) = self.index.lookup(specifier) {
            return Some(file);
        }

        monorepo_candidates(specifier).find_map(|candidate| {
            self.index
                .lookup(&candidate)
                .or_else(|| self.probe_extensions(&candidate))
        })
    }

    fn probe_extensions(&self, base: &str) -> Option<&'a SourceFile> {
        EXTENSIONS
            .iter()
            .find_map(|ext| self.index.lookup(&format!("{base}.{ext}")))
    }
}

/// `packages/<s>`, `apps/<s>`, `packages/<s>/index`, `apps/<s>/index`
fn monorepo_candidates(specifier: &str) -> impl Iterator<Item = String> + '_ {
    let direct = MONOREPO_PREFIXES
        .iter()
        .map(move |prefix| format!("{prefix}/{specifier}"));
    let index = MONOREPO_PREFIXES
        .iter()
        .map(move |prefix| format!("{prefix}/{specifier}/{INDEX_BASENAME}"));
    direct.chain(index)
}

/// Resolve `relative` against the root-relative directory `dir`
///
/// Returns `None` when the result would climb above the root, since no
/// discovered file can live there.
fn join_normalized(dir: &str, relative: &str) -> Option<String> {
    let mut segments: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();

    for segment in relative.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }

    Some(segments.join("/"))
}

/// Resolve a specifier that climbs above the root against the importer's
/// absolute location
///
/// `../../web/x` from `src/a.ts` under a root named `web` lands back inside
/// the root as `x`. Anything that stays outside yields `None`.
fn reenter_root(importer: &SourceFile, relative: &str) -> Option<String> {
    let location = std::path::absolute(importer.location()).ok()?;

    let mut segments: Vec<String> = Vec::new();
    for component in location.components() {
        match component {
            Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
            Component::ParentDir => {
                segments.pop();
            }
            _ => {}
        }
    }
    segments.pop()?;

    let depth = importer
        .directory()
        .split('/')
        .filter(|s| !s.is_empty())
        .count();
    let root = segments[..segments.len().checked_sub(depth)?].to_vec();

    for segment in relative.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other.to_string()),
        }
    }

    segments
        .strip_prefix(root.as_slice())
        .map(|inside| inside.join("/"))
}
