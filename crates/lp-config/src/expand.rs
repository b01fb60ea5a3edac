//! `${VAR}` and `${VAR:-default}` expansion in configuration strings.

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// Only the braced form is recognised; a bare `$VAR` is kept literally.
/// An unset variable without a default is an error naming `field`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, lookup)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

fn lookup(var: &str) -> Result<Option<String>, UnsetVar> {
    std::env::var(var).map(Some).map_err(|_| UnsetVar)
}

/// Variable referenced without a default and not present in the environment.
struct UnsetVar;
