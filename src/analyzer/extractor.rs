use std::fs;
use std::sync::OnceLock;

use regex::Regex;

use crate::core::{ImportRecord, SourceFile};
use crate::error::CarouselError;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

/// `import x from "path"`, `import { a, b } from 'path'`, `import "path"`
///
/// Binding names are ASCII word characters only.
fn regex_es_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"import\s+(?:[[:word:]*{}\s,]+from\s+)?['"]([^'"]+)['"]"#))
}

/// `require("path")`
fn regex_require() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"require\s*\(\s*['"]([^'"]+)['"]\s*\)"#))
}

/// Scan source text for import-like occurrences, one line at a time
///
/// Matching is purely lexical. A statement split across lines is missed, and
/// import-looking text inside comments or strings is reported like any other.
/// Within a line, ES-module matches come before `require` matches.
pub fn extract_imports(content: &str) -> Vec<ImportRecord> {
    let mut imports = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let code = line.trim();
        for re in [regex_es_import(), regex_require()] {
            for captures in re.captures_iter(line) {
                if let Some(path) = captures.get(1) {
                    imports.push(ImportRecord {
                        raw_path: path.as_str().to_string(),
                        line_number: idx + 1,
                        code: code.to_string(),
                    });
                }
            }
        }
    }

    imports
}

/// Read a file from disk and extract its imports
///
/// Invalid UTF-8 is decoded lossily; only an IO failure is an error.
pub fn scan_file(file: &SourceFile) -> Result<Vec<ImportRecord>, CarouselError> {
    let bytes = fs::read(file.location()).map_err(|source| CarouselError::FileReadError {
        path: file.location().to_path_buf(),
        source,
    })?;

    Ok(extract_imports(&String::from_utf8_lossy(&bytes)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn raw_paths(records: &[ImportRecord]) -> Vec<&str> {
        records.iter().map(|r| r.raw_path.as_str()).collect()
    }

    #[test]
    fn test_es_import_forms() {
        let source = r#"import React from "react";
import { useState, useEffect } from 'react';
import * as utils from "./utils";
import "./side-effect.css";
import Default, { named } from '../shared/thing';
"#;

        let records = extract_imports(source);

        assert_eq!(
            raw_paths(&records),
            vec![
                "react",
                "react",
                "./utils",
                "./side-effect.css",
                "../shared/thing"
            ]
        );
        assert_eq!(records[2].line_number, 3);
        assert_eq!(records[2].code, r#"import * as utils from "./utils";"#);
    }

    #[test]
    fn test_require_calls() {
        let source = "const fs = require('fs');\n  const local = require ( \"./local\" ) ;\n";

        let records = extract_imports(source);

        assert_eq!(raw_paths(&records), vec!["fs", "./local"]);
        assert_eq!(records[1].line_number, 2);
        assert_eq!(records[1].code, "const local = require ( \"./local\" ) ;");
    }

    #[test]
    fn test_both_patterns_on_one_line() {
        let source = "import a from './a'; const b = require('./b'); import './c';";

        let records = extract_imports(source);

        assert_eq!(raw_paths(&records), vec!["./a", "./c", "./b"]);
        assert!(records.iter().all(|r| r.line_number == 1));
    }

    #[test]
    fn test_multiline_import_is_not_recognized() {
        let source = "import {\n  a,\n  b,\n} from './letters';\n";

        assert!(extract_imports(source).is_empty());
    }

    #[test]
    fn test_commented_import_is_still_reported() {
        let source = "// import old from './old';\n";

        let records = extract_imports(source);

        assert_eq!(raw_paths(&records), vec!["./old"]);
        assert_eq!(records[0].code, "// import old from './old';");
    }

    #[test]
    fn test_dynamic_import_is_not_matched() {
        let source = "const mod = await import('./lazy');\n";

        assert!(extract_imports(source).is_empty());
    }

    #[test]
    fn test_non_ascii_binding_is_not_matched() {
        let source = "import café from './cafe';\nimport { cafe } from './cafe';\n";

        let records = extract_imports(source);

        assert_eq!(raw_paths(&records), vec!["./cafe"]);
        assert_eq!(records[0].line_number, 2);
    }

    #[test]
    fn test_scan_decodes_invalid_utf8_lossily() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("latin1.ts");
        let mut bytes = b"import { b } from './b';\n// caf".to_vec();
        bytes.extend_from_slice(&[0xe9, b'\n']);
        bytes.extend_from_slice(b"const c = require('./c');\n");
        fs::write(&path, bytes).unwrap();

        let records = scan_file(&SourceFile::new("latin1.ts", &path)).unwrap();

        assert_eq!(raw_paths(&records), vec!["./b", "./c"]);
        assert_eq!(records[1].line_number, 3);
    }

    #[test]
    fn test_scan_missing_file_is_an_error() {
        let file = SourceFile::new("gone.ts", "/definitely/not/here/gone.ts");

        assert!(matches!(
            scan_file(&file),
            Err(CarouselError::FileReadError { .. })
        ));
    }
}
