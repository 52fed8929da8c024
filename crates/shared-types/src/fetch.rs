use crate::AppError;

/// State of one asynchronous data source.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Fetch<T> {
    #[default]
    Pending,
    Loaded(T),
    Failed(AppError),
}

impl<T> Fetch<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Fetch::Pending)
    }

    /// The loaded value, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Fetch::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Fetch<&T> {
        match self {
            Fetch::Pending => Fetch::Pending,
            Fetch::Loaded(value) => Fetch::Loaded(value),
            Fetch::Failed(err) => Fetch::Failed(err.clone()),
        }
    }
}

impl<T> From<Result<T, AppError>> for Fetch<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => Fetch::Loaded(value),
            Err(err) => Fetch::Failed(err),
        }
    }
}
