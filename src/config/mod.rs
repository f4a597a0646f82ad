//! # Configuration Module
//!
//! This module provides configuration structures for all import-carousel
//! commands. Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **InspectConfig**: Configuration for the `inspect` command that walks a
//!   project and detects circular imports
//! - **ReplayConfig**: Configuration for the `replay` command that re-renders
//!   an interchange artifact
//! - **DiscoveryOptions**: Which files under a root become graph nodes
//!
//! ## Example
//!
//! ```
//! use import_carousel::cli::OutputFormat;
//! use import_carousel::common::ConfigBuilder;
//! use import_carousel::config::{DiscoveryOptions, InspectConfig};
//! use import_carousel::detector::CycleSearchMode;
//!
//! let discovery = DiscoveryOptions::builder()
//!     .with_root("web")
//!     .with_max_files(Some(1_000))
//!     .build()
//!     .unwrap();
//!
//! let config = InspectConfig::builder()
//!     .with_discovery(discovery)
//!     .with_format(OutputFormat::Json)
//!     .with_error_on_cycles(true)
//!     .with_max_cycles(None)
//!     .with_output(None)
//!     .with_mode(CycleSearchMode::Traversal)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.discovery.max_files, 1_000);
//! ```

pub mod discovery;
pub mod inspect;
pub mod replay;

pub use discovery::DiscoveryOptions;
pub use inspect::InspectConfig;
pub use replay::ReplayConfig;
