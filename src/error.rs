//! Error types shared by the chart model, renderers and display layer.

use plotters::drawing::DrawingAreaErrorKind;
use std::path::PathBuf;
use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("{what}: expected {expected} entries, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("unsupported chart: {0}")]
    Unsupported(String),

    #[error("invalid image size: width={width}, height={height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("invalid display configuration: {0}")]
    Config(String),

    #[error("failed to draw chart: {0}")]
    Render(String),

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to open {} in the default viewer: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("interactive viewer failed: {0}")]
    Viewer(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for ChartError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Render(err.to_string())
    }
}
