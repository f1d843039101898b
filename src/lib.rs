/*!
# undiskcopy

Extracts raw sector data from Apple Disk Copy 4.2 disk images.

A Disk Copy 4.2 image is an 84-byte big-endian header followed by the data
region and an optional tag region. This crate reads the header, copies the
data region verbatim and verifies it against the header's checksum. Tags
are not extracted, which is fine for Mac images but loses data for Lisa
images.

## Quick Start

```rust,no_run
use undiskcopy::{convert_file, ConvertOptions};

let report = convert_file("System Tools.image", "system-tools.img", &ConvertOptions::default())?;
println!("{} bytes written", report.bytes_written);
# Ok::<(), undiskcopy::DiskCopyError>(())
```

## Modules

- `format`: header layout, decoding and advisory checks
- `checksum`: the Disk Copy 4.2 data checksum
- `io`: streaming copy and file conversion
- `error`: Error types and Result alias
*/

#![warn(missing_docs)]

/// Disk Copy 4.2 data checksum
pub mod checksum;
/// Error types and Result alias
pub mod error;
/// Header layout, decoding and advisory checks
pub mod format;
/// Streaming copy and file conversion
pub mod io;

// Re-export common types
pub use checksum::DataChecksum;
pub use error::{DiskCopyError, Result};
pub use format::{
    assess, read_header, Advisory, CanonicalSize, DiskCopyHeader, DiskEncoding, FormatByte,
    DISKCOPY_MAGIC, HEADER_SIZE,
};
pub use io::{convert, convert_file, copy_data, ConversionReport, ConvertOptions, CopyOutcome};
