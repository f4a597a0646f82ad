//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A discovered source file
///
/// Identity is the root-relative, forward-slash path. The on-disk location is
/// carried along only so the file can be read later.
#[derive(Debug, Clone)]
pub struct SourceFile {
    relative_path: String,
    location: PathBuf,
}

impl SourceFile {
    pub fn new(relative_path: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into().replace('\\', "/"),
            location: location.into(),
        }
    }

    /// A file known only by its root-relative path
    pub fn from_relative(relative_path: impl Into<String>) -> Self {
        let relative_path = relative_path.into();
        let location = PathBuf::from(&relative_path);
        Self::new(relative_path, location)
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Root-relative directory containing this file, "" at the root
    pub fn directory(&self) -> &str {
        self.relative_path
            .rsplit_once('/')
            .map(|(dir, _)| dir)
            .unwrap_or("")
    }
}

impl PartialEq for SourceFile {
    fn eq(&self, other: &Self) -> bool {
        self.relative_path == other.relative_path
    }
}

impl Eq for SourceFile {}

impl Hash for SourceFile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.relative_path.hash(state);
    }
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.relative_path)
    }
}

/// One import-like occurrence found in a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    /// Path exactly as quoted in the source
    pub raw_path: String,
    /// 1-based line number
    pub line_number: usize,
    /// The trimmed source line
    pub code: String,
}
