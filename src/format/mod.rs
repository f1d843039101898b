/// Disk Copy 4.2 format definitions

/// Format constants
pub mod constants;
/// Header record and reader
pub mod header;
/// Advisory checks on header sizes
pub mod policy;

pub use constants::*;
pub use header::{read_header, DiskCopyHeader};
pub use policy::{assess, Advisory};

use std::fmt;

/// Disk encoding recorded in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskEncoding {
    /// GCR CLV single-sided double-density (400K)
    GcrSsdd,
    /// GCR CLV double-sided double-density (800K)
    GcrDsdd,
    /// MFM CAV double-sided double-density (720K)
    MfmDsdd,
    /// MFM CAV double-sided high-density (1440K)
    MfmDshd,
    /// Unrecognized encoding code
    Unknown(u8),
}

impl From<u8> for DiskEncoding {
    fn from(value: u8) -> Self {
        match value {
            0x00 => DiskEncoding::GcrSsdd,
            0x01 => DiskEncoding::GcrDsdd,
            0x02 => DiskEncoding::MfmDsdd,
            0x03 => DiskEncoding::MfmDshd,
            other => DiskEncoding::Unknown(other),
        }
    }
}

impl fmt::Display for DiskEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiskEncoding::GcrSsdd => write!(f, "GCR CLV ssdd (400K)"),
            DiskEncoding::GcrDsdd => write!(f, "GCR CLV dsdd (800K)"),
            DiskEncoding::MfmDsdd => write!(f, "MFM CAV dsdd (720K)"),
            DiskEncoding::MfmDshd => write!(f, "MFM CAV dshd (1440K)"),
            DiskEncoding::Unknown(code) => write!(f, "unknown (0x{:02x})", code),
        }
    }
}

/// Format byte recorded in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatByte {
    /// Macintosh 400K
    Mac400K,
    /// Macintosh larger than 400K
    Mac,
    /// Apple II 800K (ProDOS)
    AppleII800K,
    /// Unrecognized format byte
    Unknown(u8),
}

impl From<u8> for FormatByte {
    fn from(value: u8) -> Self {
        match value {
            0x12 => FormatByte::Mac400K,
            0x22 => FormatByte::Mac,
            0x24 => FormatByte::AppleII800K,
            other => FormatByte::Unknown(other),
        }
    }
}

impl fmt::Display for FormatByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatByte::Mac400K => write!(f, "Mac 400K"),
            FormatByte::Mac => write!(f, "Mac >400K"),
            FormatByte::AppleII800K => write!(f, "Apple II 800K"),
            FormatByte::Unknown(code) => write!(f, "unknown (0x{:02x})", code),
        }
    }
}

/// Canonical data region sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalSize {
    /// 400K GCR
    Gcr400K,
    /// 800K GCR
    Gcr800K,
    /// 720K MFM
    Mfm720K,
    /// 1440K MFM
    Mfm1440K,
}

impl CanonicalSize {
    /// Match a data size against the canonical sizes
    pub fn from_data_size(data_size: u32) -> Option<Self> {
        match data_size {
            SIZE_400K_GCR => Some(CanonicalSize::Gcr400K),
            SIZE_800K_GCR => Some(CanonicalSize::Gcr800K),
            SIZE_720K_MFM => Some(CanonicalSize::Mfm720K),
            SIZE_1440K_MFM => Some(CanonicalSize::Mfm1440K),
            _ => None,
        }
    }

    /// Get a human-readable name for this size
    pub fn name(&self) -> &'static str {
        match self {
            CanonicalSize::Gcr400K => "400K GCR",
            CanonicalSize::Gcr800K => "800K GCR",
            CanonicalSize::Mfm720K => "720K MFM",
            CanonicalSize::Mfm1440K => "1440K MFM",
        }
    }
}
