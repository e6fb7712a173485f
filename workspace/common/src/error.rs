use crate::chart::ChartError;
use thiserror::Error;

/// Everything that can stop a prediction from reaching the screen.
///
/// The `Display` output is exactly the text shown in the error panel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The backend answered `success: false`; its message is shown verbatim
    #[error("{0}")]
    Application(String),

    /// The request could not be sent or the body was not valid JSON
    #[error("Network error: {0}")]
    Network(String),

    /// The payload was accepted but cannot be charted
    #[error("Unable to render prediction: {0}")]
    Render(#[from] ChartError),
}

impl PredictError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }
}
