//! Source discovery configuration

use std::path::PathBuf;

use crate::constants::source::{DECLARATION_SUFFIX, EXCLUDED_DIRS, EXTENSIONS};

/// Options controlling which files under a root become graph nodes
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Directory to walk
    pub root: PathBuf,
    /// Stop after this many files (0 = unlimited)
    pub max_files: usize,
    /// Directory names that are never descended into
    pub excluded_dirs: Vec<String>,
    /// Recognized source extensions, without the leading dot
    pub extensions: Vec<String>,
    /// Files ending with this suffix are skipped
    pub declaration_suffix: String,
}

impl DiscoveryOptions {
    /// Options with the fixed exclusion, extension and declaration sets
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_files: 0,
            excluded_dirs: EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
            extensions: EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            declaration_suffix: DECLARATION_SUFFIX.to_string(),
        }
    }

    pub fn builder() -> DiscoveryOptionsBuilder {
        DiscoveryOptionsBuilder::default()
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    pub fn is_source_file(&self, file_name: &str) -> bool {
        if file_name.ends_with(&self.declaration_suffix) {
            return false;
        }
        file_name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| self.extensions.iter().any(|e| e == ext))
    }

    pub fn limit_reached(&self, count: usize) -> bool {
        self.max_files > 0 && count >= self.max_files
    }
}

#[derive(Default)]
pub struct DiscoveryOptionsBuilder {
    root: Option<PathBuf>,
    max_files: Option<usize>,
    extra_excluded_dirs: Vec<String>,
}

impl DiscoveryOptionsBuilder {
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_max_files(mut self, max_files: Option<usize>) -> Self {
        self.max_files = max_files;
        self
    }

    /// Exclude these directory names in addition to the fixed set
    pub fn with_extra_excluded_dirs(mut self, dirs: Vec<String>) -> Self {
        self.extra_excluded_dirs = dirs;
        self
    }
}

impl crate::common::ConfigBuilder for DiscoveryOptionsBuilder {
    type Config = DiscoveryOptions;

    fn build(self) -> Result<Self::Config, crate::error::CarouselError> {
        let root = self
            .root
            .ok_or_else(|| crate::error::CarouselError::ConfigurationError {
                message: "Missing required field: root".to_string(),
            })?;

        let mut options = DiscoveryOptions::new(root);
        options.max_files = self.max_files.unwrap_or(0);
        for dir in self.extra_excluded_dirs {
            if !options.is_excluded_dir(&dir) {
                options.excluded_dirs.push(dir);
            }
        }

        Ok(options)
    }
}
