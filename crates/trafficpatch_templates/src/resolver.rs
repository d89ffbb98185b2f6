//! Template discovery and resolution under a configuration root.
//!
//! The resolver handles:
//! - Recursive discovery of `*.tpl` / `*.tpl.<ext>` files
//! - Placeholder substitution from a [`VariableSource`]
//! - Writing each result next to its template

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{TemplateError, TemplateResult};
use crate::naming::TemplatePath;
use crate::renderer::TemplateRenderer;
use crate::source::VariableSource;

/// Resolves every template found below a configuration root.
pub struct TemplateResolver {
    root: PathBuf,
    renderer: TemplateRenderer,
}

impl TemplateResolver {
    /// Create a resolver for the configuration root `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            renderer: TemplateRenderer::new(),
        }
    }

    /// Find all template files below the root.
    ///
    /// A missing root is not an error; it simply holds no templates.
    pub fn find_templates(&self) -> Vec<TemplatePath> {
        if !self.root.exists() {
            warn!("Configuration root does not exist: {:?}", self.root);
            return Vec::new();
        }

        let mut templates = Vec::new();

        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {:?}: {}", self.root, e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            if let Some(tp) = TemplatePath::from_path(path) {
                debug!("Found template {:?} -> {:?}", tp.template_path, tp.target_path);
                templates.push(tp);
            }
        }

        templates.sort_by(|a, b| a.template_path.cmp(&b.template_path));
        templates
    }

    /// Resolve a single template and write its target file.
    ///
    /// The whole template is rendered before the target is opened, so a missing
    /// variable leaves any existing target untouched.
    pub fn process_template(
        &self,
        tp: &TemplatePath,
        source: &dyn VariableSource,
    ) -> TemplateResult<()> {
        let content =
            fs::read_to_string(&tp.template_path).map_err(|e| TemplateError::Read {
                path: tp.template_path.clone(),
                source: e,
            })?;

        let rendered = self
            .renderer
            .render(&content, source)
            .map_err(|name| TemplateError::MissingVariable {
                name,
                template: tp.template_path.clone(),
            })?;

        fs::write(&tp.target_path, rendered).map_err(|e| TemplateError::Write {
            path: tp.target_path.clone(),
            source: e,
        })?;

        debug!("Rendered {:?}", tp.target_path);
        Ok(())
    }

    /// Resolve every template below the root, stopping at the first failure.
    ///
    /// Returns the target files that were written.
    pub fn resolve_all(&self, source: &dyn VariableSource) -> TemplateResult<Vec<PathBuf>> {
        let templates = self.find_templates();
        let mut written = Vec::with_capacity(templates.len());

        for tp in &templates {
            self.process_template(tp, source)?;
            written.push(tp.target_path.clone());
        }

        info!(
            "Resolved {} template(s) under {:?}",
            written.len(),
            self.root
        );
        Ok(written)
    }
}
