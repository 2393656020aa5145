pub mod conversion;

pub use conversion::{ConvertJob, ConvertReport, ConvertService, OutputPaths};
