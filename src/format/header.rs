/// Disk Copy 4.2 header record
///
/// The header is decoded field by field from fixed offsets so nothing depends
/// on host struct layout or byte order.

use crate::error::{DiskCopyError, Result};
use crate::format::constants::*;
use crate::format::{CanonicalSize, DiskEncoding, FormatByte};
use std::io::Read;

/// Decoded Disk Copy 4.2 header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskCopyHeader {
    /// Length of the image name
    pub name_length: u8,
    /// Raw image name buffer
    pub name: [u8; NAME_CAPACITY],
    /// Size of the data region in bytes
    pub data_size: u32,
    /// Size of the tag region in bytes
    pub tag_size: u32,
    /// Expected checksum of the data region
    pub data_checksum: u32,
    /// Expected checksum of the tag region
    pub tag_checksum: u32,
    /// Disk encoding code
    pub disk_encoding: u8,
    /// Format code
    pub format: u8,
    /// Magic number
    pub magic: u16,
}

impl DiskCopyHeader {
    /// Decode a header from its on-disk bytes without validating it
    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        let mut name = [0u8; NAME_CAPACITY];
        name.copy_from_slice(&bytes[NAME_OFFSET..NAME_OFFSET + NAME_CAPACITY]);

        DiskCopyHeader {
            name_length: bytes[NAME_LENGTH_OFFSET],
            name,
            data_size: be_u32(bytes, DATA_SIZE_OFFSET),
            tag_size: be_u32(bytes, TAG_SIZE_OFFSET),
            data_checksum: be_u32(bytes, DATA_CHECKSUM_OFFSET),
            tag_checksum: be_u32(bytes, TAG_CHECKSUM_OFFSET),
            disk_encoding: bytes[DISK_ENCODING_OFFSET],
            format: bytes[FORMAT_OFFSET],
            magic: be_u16(bytes, MAGIC_OFFSET),
        }
    }

    /// Check the magic number
    pub fn validate(&self) -> Result<()> {
        if self.magic != DISKCOPY_MAGIC {
            return Err(DiskCopyError::Format { magic: self.magic });
        }
        Ok(())
    }

    /// Image name, decoded as Latin-1
    pub fn name(&self) -> String {
        let len = (self.name_length as usize).min(NAME_CAPACITY);
        self.name[..len].iter().map(|&b| b as char).collect()
    }

    /// Whether the image carries a tag region
    pub fn has_tags(&self) -> bool {
        self.tag_size != 0
    }

    /// Number of bytes the copier will produce
    pub fn output_size(&self) -> u64 {
        (self.data_size / 2) as u64 * WORD_SIZE as u64
    }

    /// Decoded disk encoding
    pub fn encoding(&self) -> DiskEncoding {
        DiskEncoding::from(self.disk_encoding)
    }

    /// Decoded format byte
    pub fn format_byte(&self) -> FormatByte {
        FormatByte::from(self.format)
    }

    /// Canonical size matching the data region, if any
    pub fn canonical_size(&self) -> Option<CanonicalSize> {
        CanonicalSize::from_data_size(self.data_size)
    }
}

/// Read and validate a header from the start of a stream
///
/// Leaves the stream positioned at the first byte of the data region.
pub fn read_header<R: Read>(reader: &mut R) -> Result<DiskCopyHeader> {
    let mut bytes = [0u8; HEADER_SIZE];
    reader
        .read_exact(&mut bytes)
        .map_err(|e| DiskCopyError::read(0, e))?;

    let header = DiskCopyHeader::from_bytes(&bytes);
    header.validate()?;
    Ok(header)
}

#[inline]
fn be_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[inline]
fn be_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([bytes[offset], bytes[offset + 1]])
}
