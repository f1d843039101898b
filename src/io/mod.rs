/// I/O operations for converting Disk Copy images

/// Streaming word copier
pub mod copier;
/// End-to-end conversion
pub mod convert;

pub use convert::{convert, convert_file, ConversionReport, ConvertOptions};
pub use copier::{copy_data, CopyOutcome};
