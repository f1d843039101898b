/// Disk Copy 4.2 header layout and constants
///
/// All multi-byte integers are big-endian.

/// Size of the fixed header preceding the data region
pub const HEADER_SIZE: usize = 84;

/// Maximum length of the Pascal-style image name
pub const NAME_CAPACITY: usize = 63;

/// Offset of the image name length byte
pub const NAME_LENGTH_OFFSET: usize = 0x00;

/// Offset of the image name bytes
pub const NAME_OFFSET: usize = 0x01;

/// Offset of the data block size (u32)
pub const DATA_SIZE_OFFSET: usize = 0x40;

/// Offset of the tag block size (u32)
pub const TAG_SIZE_OFFSET: usize = 0x44;

/// Offset of the data block checksum (u32)
pub const DATA_CHECKSUM_OFFSET: usize = 0x48;

/// Offset of the tag block checksum (u32)
pub const TAG_CHECKSUM_OFFSET: usize = 0x4C;

/// Offset of the disk encoding byte
pub const DISK_ENCODING_OFFSET: usize = 0x50;

/// Offset of the format byte
pub const FORMAT_OFFSET: usize = 0x51;

/// Offset of the magic number (u16)
pub const MAGIC_OFFSET: usize = 0x52;

/// Magic number identifying a Disk Copy 4.2 image
pub const DISKCOPY_MAGIC: u16 = 0x0100;

/// Size of one checksum/copy unit in bytes
pub const WORD_SIZE: usize = 2;

/// 400K GCR (single-sided Mac)
pub const SIZE_400K_GCR: u32 = 409_600;

/// 800K GCR (double-sided Mac)
pub const SIZE_800K_GCR: u32 = 819_200;

/// 720K MFM (DOS, maybe)
pub const SIZE_720K_MFM: u32 = 737_280;

/// 1440K MFM (high density)
pub const SIZE_1440K_MFM: u32 = 1_474_560;

/// Data sizes normal images have. Other sizes are potentially valid, but unusual.
pub const CANONICAL_DATA_SIZES: [u32; 4] =
    [SIZE_400K_GCR, SIZE_800K_GCR, SIZE_720K_MFM, SIZE_1440K_MFM];
