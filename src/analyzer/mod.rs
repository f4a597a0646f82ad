//! # Import Analysis Module
//!
//! Turns source text into resolved file-to-file relationships.
//!
//! ## Key Components
//!
//! - **extract_imports / scan_file**: line-scoped lexical scan for ES-module
//!   imports and `require` calls
//! - **ModulePathIndex**: every plausible spelling of a discovered file
//! - **ImportResolver**: maps one raw import string to a discovered file
//!
//! ## Example
//!
//! ```
//! use import_carousel::analyzer::{ImportResolver, ModulePathIndex, extract_imports};
//! use import_carousel::core::SourceFile;
//!
//! let files = vec![
//!     SourceFile::from_relative("src/app.ts"),
//!     SourceFile::from_relative("src/store/index.ts"),
//! ];
//! let index = ModulePathIndex::build(&files);
//! let resolver = ImportResolver::new(&index);
//!
//! let imports = extract_imports("import { store } from './store';\nimport React from 'react';");
//! assert_eq!(imports.len(), 2);
//!
//! let target = resolver.resolve(&imports[0].raw_path, &files[0]);
//! assert_eq!(target.map(|f| f.relative_path()), Some("src/store/index.ts"));
//! assert!(resolver.resolve(&imports[1].raw_path, &files[0]).is_none());
//! ```

mod extractor;
mod module_index;
mod resolver;

pub use extractor::{extract_imports, scan_file};
pub use module_index::ModulePathIndex;
pub use resolver::ImportResolver;
