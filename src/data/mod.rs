//! Data module - Example series

mod sensitivity;
mod timecourse;

pub use sensitivity::CategorySeries;
pub use timecourse::{
    median_at, TimeSeriesTriple, DECAY_TIME, LOWER_FACTOR, SAMPLE_COUNT, TIME_STEP, UPPER_FACTOR,
};
