use scrollfx_core::ObserverError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("layout failed: {0}")]
    Layout(#[from] taffy::TaffyError),

    #[error(transparent)]
    Observer(#[from] ObserverError),

    #[error("viewport {width}x{height} must be finite and non-empty")]
    InvalidViewport { width: f32, height: f32 },

    #[error("scroll step {0} must be positive")]
    InvalidStep(f32),

    #[error("a sweep with step {step} would take {stops} stops (at most {max})")]
    SweepTooLong { step: f32, stops: f32, max: usize },
}
