use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// A setting that failed to load or validate. `section` is the TOML table
/// the bad value belongs to.
#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("invalid [{section}] setting: {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid TOML: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::invalid("auth", message)
    }

    #[track_caller]
    pub fn setting<S: Into<String>>(section: &'static str, message: S) -> Self {
        Self::invalid(section, message)
    }

    #[track_caller]
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::invalid("database", message)
    }

    #[track_caller]
    pub fn notification<S: Into<String>>(message: S) -> Self {
        Self::invalid("notification", message)
    }

    #[track_caller]
    fn invalid<S: Into<String>>(section: &'static str, message: S) -> Self {
        ConfigError::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
