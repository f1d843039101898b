use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Disk Copy operations
pub type Result<T> = std::result::Result<T, DiskCopyError>;

/// Errors that can occur while converting a Disk Copy 4.2 image
#[derive(Debug, Error)]
pub enum DiskCopyError {
    /// Wrong command-line usage, carrying the rendered usage text
    #[error("{0}")]
    Usage(String),

    /// Input or output file could not be opened
    #[error("{}: {source}", path.display())]
    FileOpen {
        /// Path that could not be opened
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Short or failed read of the header or data region
    #[error("Read error at offset {offset}: {source}")]
    Read {
        /// Byte offset in the input where the read started
        offset: u64,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input is not a Disk Copy 4.2 image
    #[error(
        "This doesn't look like a Disk Copy 4.2 file\n(Expected a magic number of 0x0100 but got 0x{magic:x})"
    )]
    Format {
        /// Magic number found in the header
        magic: u16,
    },

    /// Failed write or close of the output
    #[error("Write error: {source}")]
    Write {
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Computed data checksum differs from the header
    #[error(
        "Checksum mismatch: expected={expected} actual={actual}\nThis could be a problem with the image or a bug in undiskcopy"
    )]
    ChecksumMismatch {
        /// Checksum stored in the header
        expected: u32,
        /// Checksum computed over the copied data
        actual: u32,
    },
}

impl DiskCopyError {
    /// Create a read error at the given input offset
    pub fn read(offset: u64, source: std::io::Error) -> Self {
        DiskCopyError::Read { offset, source }
    }

    /// Create a write error
    pub fn write(source: std::io::Error) -> Self {
        DiskCopyError::Write { source }
    }

    /// Create a file open error
    pub fn open<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        DiskCopyError::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// True when the output was fully written despite the failure
    pub fn is_non_destructive(&self) -> bool {
        matches!(self, DiskCopyError::ChecksumMismatch { .. })
    }
}
