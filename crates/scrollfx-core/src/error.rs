use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObserverError {
    #[error("invalid root margin {margin:?}: {reason}")]
    InvalidRootMargin { margin: String, reason: String },

    #[error("threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f32),
}

impl ObserverError {
    pub(crate) fn root_margin(margin: &str, reason: impl Into<String>) -> Self {
        ObserverError::InvalidRootMargin {
            margin: margin.to_string(),
            reason: reason.into(),
        }
    }
}
