//! Configuration constants for import-carousel
//!
//! Fixed sets that drive discovery and resolution live here, together with the
//! progress and output defaults used by the CLI.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the carousel animation
    pub const SPINNER_FRAMES: &[&str] = &["🎠 ", "🎠◐", "🎠◓", "🎠◑", "🎠◒", "🎠○", "🎠●"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default cycle search mode when not specified
    pub const DEFAULT_MODE: &str = "traversal";

    /// Directory label for files that sit directly in the project root
    pub const ROOT_DIRECTORY: &str = "root";
}

/// Source tree conventions used by discovery and import resolution
pub mod source {
    /// Recognized source extensions, in resolution priority order
    pub const EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

    /// Directory names never descended into
    pub const EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", ".next", "coverage"];

    /// Type-declaration-only files carry this suffix and are skipped
    pub const DECLARATION_SUFFIX: &str = ".d.ts";

    /// Basename (without extension) of a directory's entry file
    pub const INDEX_BASENAME: &str = "index";

    /// Top-level monorepo directories probed for bare specifiers, in order
    pub const MONOREPO_PREFIXES: &[&str] = &["packages", "apps"];
}

/// Fallback hop annotation when an edge carries no import metadata
pub mod sentinel {
    pub const UNKNOWN_IMPORT: &str = "unknown import";
    pub const UNKNOWN_LINE: usize = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 7);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
        assert_eq!(output::DEFAULT_MODE, "traversal");
    }

    #[test]
    fn test_extension_priority() {
        assert_eq!(source::EXTENSIONS, &["js", "jsx", "ts", "tsx"]);
    }
}
