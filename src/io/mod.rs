//! I/O layer: the results file writer.
pub mod results;
pub use results::{RECORD_SEPARATOR, ResultsWriter};
