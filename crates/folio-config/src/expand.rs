//! Environment variable expansion for configuration strings.
//!
//! Only the braced forms are expanded:
//! - `${VAR}` - value of VAR, error if unset
//! - `${VAR:-default}` - value of VAR if set, otherwise `default`
//!
//! A `$` not followed by `{` is kept as written, so secrets and URLs that
//! contain a dollar sign load unchanged.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the config key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(&escape_bare_dollars(value), |var| {
        std::env::var(var).map(Some)
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|err| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", err.var_name),
    })
}

/// Double every `$` that does not open `${`, which shellexpand reads back as a
/// literal `$`.
fn escape_bare_dollars(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 4);
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        escaped.push(c);
        if c == '$' && chars.peek() != Some(&'{') {
            escaped.push('$');
        }
    }
    escaped
}
