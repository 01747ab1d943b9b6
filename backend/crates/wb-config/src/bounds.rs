use crate::{ConfigError, ConfigErrorResult};

use std::fmt::Display;

/// Rejects a setting outside `min..=max`. The message names the TOML key
/// and the environment variable that overrides it.
#[track_caller]
pub(crate) fn within<T: PartialOrd + Display>(
    section: &'static str,
    field: &str,
    env: &str,
    value: T,
    min: T,
    max: T,
) -> ConfigErrorResult<()> {
    if value < min || value > max {
        return Err(ConfigError::setting(
            section,
            format!("{section}.{field} = {value} is outside {min}..={max} (config.toml or {env})"),
        ));
    }
    Ok(())
}
