//! Where placeholder values come from.

use std::collections::HashMap;
use std::env;

use tracing::warn;

/// A lookup of placeholder names to substitution values.
pub trait VariableSource {
    /// Value for `name`, or `None` when it is not defined.
    fn get(&self, name: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VariableSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        match env::var(name) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                warn!("Environment variable {} is not valid unicode, treating it as unset", name);
                None
            }
        }
    }
}

impl VariableSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl<S: VariableSource + ?Sized> VariableSource for &S {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}
