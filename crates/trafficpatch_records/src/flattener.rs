//! `records.config.yaml` to `records.config`.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::{debug, info};

use crate::error::{RecordsError, RecordsResult};
use crate::flatten::flatten;
use crate::record::render_config;

/// Human-friendly records document, relative to the configuration root.
pub const RECORDS_YAML: &str = "records.config.yaml";

/// Flat records file read by Traffic Server, relative to the configuration root.
pub const RECORDS_CONFIG: &str = "records.config";

/// Turns the optional YAML records document into `records.config`.
pub struct RecordsFlattener {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl RecordsFlattener {
    /// Use the standard file names inside the configuration root `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self::with_paths(root.join(RECORDS_YAML), root.join(RECORDS_CONFIG))
    }

    pub fn with_paths(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Parse the records document, or `None` when there is no such file.
    ///
    /// Merge keys (`<<: *anchor`) are expanded, so anchored blocks can be
    /// shared between sections of the document.
    pub fn load(&self) -> RecordsResult<Option<Value>> {
        if !self.input_path.exists() {
            debug!("No records document at {:?}", self.input_path);
            return Ok(None);
        }

        debug!("Loading records from {:?}", self.input_path);
        let content = fs::read_to_string(&self.input_path).map_err(|e| RecordsError::Read {
            path: self.input_path.clone(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Some(Value::Null));
        }

        let mut document: Value =
            serde_yaml::from_str(&content).map_err(|e| RecordsError::Parse {
                path: self.input_path.clone(),
                source: e,
            })?;
        document.apply_merge().map_err(|e| RecordsError::Parse {
            path: self.input_path.clone(),
            source: e,
        })?;
        Ok(Some(document))
    }

    /// Flatten the document and overwrite the output file.
    ///
    /// Returns the number of lines written, or `None` if there was no document
    /// and nothing was touched.
    pub fn run(&self) -> RecordsResult<Option<usize>> {
        let Some(document) = self.load()? else {
            return Ok(None);
        };

        let records = flatten(&document);
        fs::write(&self.output_path, render_config(&records)).map_err(|e| RecordsError::Write {
            path: self.output_path.clone(),
            source: e,
        })?;

        info!("Wrote {} record(s) to {:?}", records.len(), self.output_path);
        Ok(Some(records.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_document_is_skipped() {
        let temp = tempdir().unwrap();
        let flattener = RecordsFlattener::new(temp.path());

        assert_eq!(flattener.run().unwrap(), None);
        assert!(!temp.path().join(RECORDS_CONFIG).exists());
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(RECORDS_YAML), "proxy: [unterminated\n").unwrap();

        let err = RecordsFlattener::new(temp.path()).run().unwrap_err();
        assert!(matches!(err, RecordsError::Parse { .. }));
    }

    #[test]
    fn test_merge_keys_are_expanded() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(RECORDS_YAML),
            "base: &b\n  x: 1\nderived:\n  <<: *b\n  y: 2\n",
        )
        .unwrap();

        assert_eq!(RecordsFlattener::new(temp.path()).run().unwrap(), Some(3));

        // Merged keys land after the mapping's own keys.
        let output = fs::read_to_string(temp.path().join(RECORDS_CONFIG)).unwrap();
        let mut lines: Vec<_> = output.lines().collect();
        lines.sort_unstable();
        assert_eq!(
            lines,
            vec![
                "CONFIG base.x INT 1",
                "CONFIG derived.x INT 1",
                "CONFIG derived.y INT 2",
            ]
        );
    }

    #[test]
    fn test_explicit_key_wins_over_merged_key() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(RECORDS_YAML),
            "defaults: &d\n  timeout: 30\nslow:\n  <<: *d\n  timeout: 120\n",
        )
        .unwrap();

        RecordsFlattener::new(temp.path()).run().unwrap();
        assert_eq!(
            fs::read_to_string(temp.path().join(RECORDS_CONFIG)).unwrap(),
            "CONFIG defaults.timeout INT 30\nCONFIG slow.timeout INT 120\n"
        );
    }

    #[test]
    fn test_integer_beyond_u64_is_a_parse_error() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(RECORDS_YAML), "big: 99999999999999999999\n").unwrap();

        let err = RecordsFlattener::new(temp.path()).run().unwrap_err();
        assert!(matches!(err, RecordsError::Parse { .. }));
    }

    #[test]
    fn test_unreadable_document_is_a_read_error() {
        let temp = tempdir().unwrap();
        // A directory exists but cannot be read as a file.
        fs::create_dir(temp.path().join(RECORDS_YAML)).unwrap();

        let err = RecordsFlattener::new(temp.path()).run().unwrap_err();
        assert!(matches!(err, RecordsError::Read { .. }));
    }
}
