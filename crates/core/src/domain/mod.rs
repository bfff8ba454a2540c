pub mod chart;
pub mod dataset;
pub mod ratios;
pub mod record;

pub use chart::ChartSeries;
pub use dataset::{DatasetEnvelope, DATASET_NAME};
pub use ratios::MacroRatios;
pub use record::Record;
