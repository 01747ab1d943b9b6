/// Result of an operation that may legitimately decline to act.
///
/// Not-found and conflicts are errors; a refused permission check or a
/// redundant request is an `Outcome` the caller can show as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Done(T),
    NoOp(String),
    Forbidden(String),
}

impl<T> Outcome<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Done(_) => "ok",
            Self::NoOp(_) => "noop",
            Self::Forbidden(_) => "forbidden",
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Done(_) => None,
            Self::NoOp(message) | Self::Forbidden(message) => Some(message),
        }
    }

    pub fn done(self) -> Option<T> {
        match self {
            Self::Done(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Done(value) => Outcome::Done(f(value)),
            Self::NoOp(message) => Outcome::NoOp(message),
            Self::Forbidden(message) => Outcome::Forbidden(message),
        }
    }
}
