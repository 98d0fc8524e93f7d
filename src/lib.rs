//! Example sensitivity-analysis and uncertainty charts.
//!
//! Two figures are provided: a bar chart of total-order Sobol indices and a
//! time course with a shaded uncertainty band. Each is built as a
//! backend-neutral [`ChartSpec`] and shown either in a native egui window or
//! as a PNG opened in the system image viewer.

pub mod charts;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod figures;
pub mod gui;
pub mod telemetry;

pub use charts::ChartSpec;
pub use config::{DisplayConfig, RenderTarget};
pub use error::{ChartError, ChartResult};
