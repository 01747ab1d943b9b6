use wb_core::Outcome;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Ok,
    NoOp,
    Forbidden,
    Error,
}

impl ReplyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NoOp => "noop",
            Self::Forbidden => "forbidden",
            Self::Error => "error",
        }
    }
}

impl<T> From<&Outcome<T>> for ReplyStatus {
    fn from(outcome: &Outcome<T>) -> Self {
        match outcome {
            Outcome::Done(_) => Self::Ok,
            Outcome::NoOp(_) => Self::NoOp,
            Outcome::Forbidden(_) => Self::Forbidden,
        }
    }
}
