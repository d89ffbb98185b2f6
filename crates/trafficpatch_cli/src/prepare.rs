//! The two preparation passes run before the handoff.

use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use trafficpatch_records::{RecordsError, RecordsFlattener};
use trafficpatch_templates::{TemplateError, TemplateResolver, VariableSource};

use crate::config::WrapperConfig;

/// Any failure that must keep traffic_server from starting.
#[derive(Error, Debug)]
pub enum PrepareError {
    #[error(transparent)]
    Templates(#[from] TemplateError),

    #[error(transparent)]
    Records(#[from] RecordsError),
}

/// What the preparation passes produced.
#[derive(Debug, Default)]
pub struct PrepareReport {
    /// Target files written by the template pass.
    pub resolved: Vec<PathBuf>,
    /// Lines written to records.config, `None` without a records document.
    pub records: Option<usize>,
}

/// Resolve templates, then flatten the records document.
///
/// Templates go first so `records.config.yaml` may itself come from
/// `records.config.tpl.yaml`.
pub fn prepare(
    config: &WrapperConfig,
    source: &dyn VariableSource,
) -> Result<PrepareReport, PrepareError> {
    info!("Preparing Traffic Server configuration in {:?}", config.etc_dir);

    let resolved = TemplateResolver::new(&config.etc_dir).resolve_all(source)?;
    let records = RecordsFlattener::new(&config.etc_dir).run()?;

    Ok(PrepareReport { resolved, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn config_for(etc_dir: &Path) -> WrapperConfig {
        WrapperConfig {
            etc_dir: etc_dir.to_path_buf(),
            traffic_server: PathBuf::from("/bin/false"),
            argv0: "traffic_server".to_string(),
        }
    }

    #[test]
    fn test_records_document_from_template() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::write(
            root.join("records.config.tpl.yaml"),
            "proxy:\n  config:\n    http:\n      server_ports: \"{{ PORT }}\"\n    cache:\n      ram_cache:\n        size: [{{RAM_MB}}, M]\n",
        )
        .unwrap();

        let mut env = HashMap::new();
        env.insert("PORT".to_string(), "8080".to_string());
        env.insert("RAM_MB".to_string(), "256".to_string());

        let report = prepare(&config_for(root), &env).unwrap();

        assert_eq!(report.resolved, vec![root.join("records.config.yaml")]);
        assert_eq!(report.records, Some(2));
        assert_eq!(
            fs::read_to_string(root.join("records.config")).unwrap(),
            "CONFIG proxy.config.http.server_ports STRING 8080\nCONFIG proxy.config.cache.ram_cache.size INT 256M\n"
        );
    }

    #[test]
    fn test_missing_variable_stops_before_records() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::write(root.join("remap.config.tpl"), "map / {{UNSET_VAR}}\n").unwrap();
        fs::write(root.join("records.config.yaml"), "a: 1\n").unwrap();

        let err = prepare(&config_for(root), &HashMap::<String, String>::new()).unwrap_err();

        assert!(matches!(err, PrepareError::Templates(_)));
        assert!(err.to_string().starts_with("Missing environment variable: UNSET_VAR"));
        assert!(!root.join("records.config").exists());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::write(root.join("records.config.yaml"), "a: [1,\n").unwrap();

        let err = prepare(&config_for(root), &HashMap::<String, String>::new()).unwrap_err();
        assert!(matches!(err, PrepareError::Records(RecordsError::Parse { .. })));
    }

    #[test]
    fn test_empty_root() {
        let temp = tempdir().unwrap();
        let report = prepare(&config_for(temp.path()), &HashMap::<String, String>::new()).unwrap();

        assert!(report.resolved.is_empty());
        assert_eq!(report.records, None);
    }
}
