//! Template file naming convention.
//!
//! A file is a template when its name is `<base>.tpl` or `<base>.tpl.<ext>`.
//! The target lives in the same directory and drops the `.tpl` marker:
//!
//! | template                | target              |
//! |-------------------------|---------------------|
//! | `records.config.tpl`    | `records.config`    |
//! | `plugin.config.tpl.txt` | `plugin.config.txt` |
//! | `a.tpl.b.c`             | not a template      |

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

fn file_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<base>.*)(\.tpl)(?P<ext>\.[^.]+)?$").expect("valid template name regex")
    })
}

/// A discovered template and the file it resolves into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePath {
    pub template_path: PathBuf,
    pub target_path: PathBuf,
}

impl TemplatePath {
    /// Build the pair for `path` if its file name follows the template convention.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let target = target_file_name(name)?;
        let target_path = match path.parent() {
            Some(parent) => parent.join(target),
            None => PathBuf::from(target),
        };

        Some(Self {
            template_path: path.to_path_buf(),
            target_path,
        })
    }
}

/// Derive the target file name for a template file name.
///
/// Returns `None` when `name` is not a template, or when stripping the marker
/// would leave nothing (a file literally called `.tpl`).
pub fn target_file_name(name: &str) -> Option<String> {
    let caps = file_name_pattern().captures(name)?;
    let base = caps.name("base").map_or("", |m| m.as_str());
    let ext = caps.name("ext").map_or("", |m| m.as_str());

    let target = format!("{base}{ext}");
    if target.is_empty() {
        None
    } else {
        Some(target)
    }
}
