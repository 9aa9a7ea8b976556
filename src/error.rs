use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IqError {
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        reason: String,
    },
    #[error("sample rate must be finite and greater than zero, got {0}")]
    InvalidSampleRate(f64),
    #[error("failed to render plot: {0}")]
    Plot(String),
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for IqError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        IqError::Plot(format!("{value:?}"))
    }
}
