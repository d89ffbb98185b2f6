//! Placeholder substitution.

use regex::{Captures, Regex};

use crate::source::VariableSource;

/// Renders `{{ NAME }}` placeholders from a [`VariableSource`].
pub struct TemplateRenderer {
    variable_pattern: Regex,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Create a new template renderer.
    pub fn new() -> Self {
        Self {
            // {{NAME}} with optional whitespace inside the braces, none inside NAME
            variable_pattern: Regex::new(r"\{\{\s*(?P<name>[^}\s]+)\s*\}\}").unwrap(),
        }
    }

    /// Replace every placeholder in `content` with its value, verbatim.
    ///
    /// Text that only looks like a placeholder (unbalanced braces, whitespace
    /// inside the name) is left as is. On failure returns the name of the first
    /// placeholder, in document order, that `source` cannot resolve.
    pub fn render(&self, content: &str, source: &dyn VariableSource) -> Result<String, String> {
        let mut missing: Option<String> = None;

        let rendered = self
            .variable_pattern
            .replace_all(content, |caps: &Captures| {
                let name = &caps["name"];
                match source.get(name) {
                    Some(value) => value,
                    None => {
                        missing.get_or_insert_with(|| name.to_string());
                        String::new()
                    }
                }
            })
            .into_owned();

        match missing {
            Some(name) => Err(name),
            None => Ok(rendered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_render_content() {
        let renderer = TemplateRenderer::new();
        let env = vars(&[("TIMEOUT_MS", "500")]);

        let rendered = renderer.render("timeout = {{TIMEOUT_MS}}", &env).unwrap();
        assert_eq!(rendered, "timeout = 500");
    }

    #[test]
    fn test_whitespace_inside_braces() {
        let renderer = TemplateRenderer::new();
        let env = vars(&[("HOST", "cache.local"), ("PORT", "8080")]);

        let rendered = renderer
            .render("{{ HOST }}:{{\tPORT  }}", &env)
            .unwrap();
        assert_eq!(rendered, "cache.local:8080");
    }

    #[test]
    fn test_values_are_inserted_verbatim() {
        let renderer = TemplateRenderer::new();
        let env = vars(&[("A", "$1 {{B}} \\n"), ("B", "never")]);

        let rendered = renderer.render("x={{A}}", &env).unwrap();
        assert_eq!(rendered, "x=$1 {{B}} \\n");
    }

    #[test]
    fn test_malformed_placeholders_untouched() {
        let renderer = TemplateRenderer::new();
        let env = vars(&[]);

        let content = "{{ two words }} {{}} {{OPEN } }} {single}";
        assert_eq!(renderer.render(content, &env).unwrap(), content);
    }

    #[test]
    fn test_first_missing_variable_reported() {
        let renderer = TemplateRenderer::new();
        let env = vars(&[("SET", "1")]);

        let err = renderer
            .render("{{SET}} {{FIRST_UNSET}} {{SECOND_UNSET}}", &env)
            .unwrap_err();
        assert_eq!(err, "FIRST_UNSET");
    }
}
