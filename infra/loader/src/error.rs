use std::borrow::Cow;
use thiserror::Error;

/// A specialized [`LoadError`] enum of this crate.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read.
    #[error("Source I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The source content could not be decoded into shelter records.
    #[error("Source decode failure{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The loaded collection violated a directory invariant.
    #[error("Directory validation failed{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The load task failed or went away before publishing a snapshot.
    #[error("Directory load failed{}: {message}", format_context(.context))]
    Failed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl From<std::io::Error> for LoadError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source, context: None }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode { source, context: None }
    }
}

/// Context-attaching extension for load results.
pub trait LoadErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LoadError>;
}

impl<T> LoadErrorExt<T> for Result<T, std::io::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LoadError> {
        self.map_err(|source| LoadError::Io { source, context: Some(context.into()) })
    }
}

impl<T> LoadErrorExt<T> for Result<T, serde_json::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LoadError> {
        self.map_err(|source| LoadError::Decode { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
