use crate::messages;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The `layout` parameter was set to an empty value.
    #[error("{}", messages::get(messages::ERROR_MISSING_LAYOUT))]
    MissingLayout,
    /// No data point survived the aggregation.
    #[error("{}", messages::get(messages::WARN_EMPTY_CHART))]
    EmptyChart,
    #[error("failed to encode chart data: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Message key of an error shown to the reader of the page.
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            Error::MissingLayout => Some(messages::ERROR_MISSING_LAYOUT),
            Error::EmptyChart => Some(messages::WARN_EMPTY_CHART),
            Error::Json(_) => None,
        }
    }

    /// Whether the error is rendered in place of the chart rather than
    /// failing the request.
    pub fn is_inline(&self) -> bool {
        self.message_key().is_some()
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
