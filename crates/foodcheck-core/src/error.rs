use thiserror::Error;

/// Alert shown to the user when food data could not be loaded.
pub const FETCH_ALERT: &str = "אירעה שגיאה בטעינת הנתונים. אנא נסה שוב מאוחר יותר.";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("failed to fetch food data: {0}")]
    DataFetch(#[source] BoxError),
}

impl BrowseError {
    pub fn data_fetch(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::DataFetch(Box::new(error))
    }

    /// Message suitable for showing to end users.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::DataFetch(_) => FETCH_ALERT,
        }
    }
}

pub type Result<T> = std::result::Result<T, BrowseError>;
