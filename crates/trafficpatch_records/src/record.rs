//! `CONFIG` lines.

use std::fmt;

use crate::value::{RecordValue, TypeTag};

/// One leaf of the records document, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRecord {
    /// Keys from the document root down to the leaf.
    pub path: Vec<String>,
    pub value: RecordValue,
}

impl FlatRecord {
    pub fn new(path: Vec<String>, value: RecordValue) -> Self {
        Self { path, value }
    }

    /// `proxy.config.http.server_ports` style name.
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }

    pub fn tag(&self) -> TypeTag {
        self.value.tag()
    }
}

impl fmt::Display for FlatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CONFIG {} {} {}", self.dotted_path(), self.tag(), self.value)
    }
}

/// Render records as `records.config` content, one newline-terminated line each.
pub fn render_config(records: &[FlatRecord]) -> String {
    records.iter().map(|r| format!("{r}\n")).collect()
}

/// Split a `CONFIG <path> <TYPE> <value>` line into its parts.
///
/// The value is everything after the type tag, so string values may contain
/// spaces. Returns `None` for anything that is not a well-formed `CONFIG` line.
pub fn parse_config_line(line: &str) -> Option<(String, TypeTag, String)> {
    let rest = line.strip_suffix('\n').unwrap_or(line).strip_prefix("CONFIG ")?;
    let (path, rest) = rest.split_once(' ')?;
    let (tag, value) = rest.split_once(' ')?;
    Some((path.to_string(), tag.parse().ok()?, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::SizeUnit;

    fn path(dotted: &str) -> Vec<String> {
        dotted.split('.').map(String::from).collect()
    }

    #[test]
    fn test_display() {
        let record = FlatRecord::new(path("cache.size"), RecordValue::Size(64, SizeUnit::M));
        assert_eq!(record.to_string(), "CONFIG cache.size INT 64M");

        let record = FlatRecord::new(
            path("proxy.config.http.server_ports"),
            RecordValue::Text("8080 8080:ipv6".into()),
        );
        assert_eq!(
            record.to_string(),
            "CONFIG proxy.config.http.server_ports STRING 8080 8080:ipv6"
        );
    }

    #[test]
    fn test_render_config_empty() {
        assert_eq!(render_config(&[]), "");
    }

    #[test]
    fn test_render_config_lines() {
        let records = vec![
            FlatRecord::new(path("a.b"), RecordValue::Bool(true)),
            FlatRecord::new(path("a.c"), RecordValue::Float(0.25)),
        ];
        assert_eq!(
            render_config(&records),
            "CONFIG a.b INT 1\nCONFIG a.c FLOAT 0.25\n"
        );
    }

    #[test]
    fn test_parse_config_line() {
        assert_eq!(
            parse_config_line("CONFIG proxy.config.http.server_ports STRING 8080 8080:ipv6\n"),
            Some((
                "proxy.config.http.server_ports".to_string(),
                TypeTag::String,
                "8080 8080:ipv6".to_string()
            ))
        );
        assert_eq!(parse_config_line("LOCAL a.b INT 1"), None);
        assert_eq!(parse_config_line("CONFIG a.b BOOL 1"), None);
        assert_eq!(parse_config_line("CONFIG a.b"), None);
    }
}
