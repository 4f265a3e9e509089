//! Validation utilities.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on configuration for '{command}':{errors}")]
    MissingSettings { command: String, errors: String },
}

/// Collects settings missing from a subcommand invocation.
pub(crate) struct RequiredSettings {
    command: &'static str,
    errors: String,
}

impl RequiredSettings {
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            errors: String::new(),
        }
    }

    /// Record `flag` as missing when `value` is unset.
    pub fn check<T>(&mut self, value: &Option<T>, flag: &str, env_var: &str) -> &mut Self {
        if value.is_none() {
            self.errors.push_str(&format!(
                "\n  - Missing setting: --{flag} (env. var.: {env_var})"
            ));
        }

        self
    }

    pub fn into_error(self) -> ValidationError {
        ValidationError::MissingSettings {
            command: self.command.into(),
            errors: self.errors,
        }
    }
}
