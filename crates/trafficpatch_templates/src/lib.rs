//! # trafficpatch_templates
//!
//! Environment-driven resolution of Traffic Server configuration templates.
//!
//! Any regular file below the configuration root named `<base>.tpl` or
//! `<base>.tpl.<ext>` is a template. Its `{{ NAME }}` placeholders are replaced
//! by the value of the environment variable `NAME` and the result is written to
//! `<base>` or `<base>.<ext>` in the same directory, overwriting it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use trafficpatch_templates::{ProcessEnv, TemplateResolver};
//!
//! let resolver = TemplateResolver::new("/etc/trafficserver");
//! let written = resolver.resolve_all(&ProcessEnv).unwrap();
//! println!("{} file(s) resolved", written.len());
//! ```

pub mod error;
pub mod naming;
pub mod renderer;
pub mod resolver;
pub mod source;

pub use error::{TemplateError, TemplateResult};
pub use naming::{target_file_name, TemplatePath};
pub use renderer::TemplateRenderer;
pub use resolver::TemplateResolver;
pub use source::{ProcessEnv, VariableSource};
