//! Shared fixtures for building Disk Copy 4.2 images in tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use undiskcopy::{DataChecksum, DISKCOPY_MAGIC, HEADER_SIZE};

/// Encode an 84-byte header
pub fn header(data_size: u32, tag_size: u32, checksum: u32, magic: u16) -> Vec<u8> {
    let mut bytes = vec![0u8; HEADER_SIZE];
    let name = b"Integration";
    bytes[0] = name.len() as u8;
    bytes[1..1 + name.len()].copy_from_slice(name);
    bytes[0x40..0x44].copy_from_slice(&data_size.to_be_bytes());
    bytes[0x44..0x48].copy_from_slice(&tag_size.to_be_bytes());
    bytes[0x48..0x4C].copy_from_slice(&checksum.to_be_bytes());
    bytes[0x50] = 0x01;
    bytes[0x51] = 0x22;
    bytes[0x52..0x54].copy_from_slice(&magic.to_be_bytes());
    bytes
}

/// Encode an image whose header checksum matches `data`
pub fn valid_image(data: &[u8]) -> Vec<u8> {
    image_with_checksum(data, DataChecksum::of(data))
}

/// Encode an image with an explicit stored checksum
pub fn image_with_checksum(data: &[u8], checksum: u32) -> Vec<u8> {
    let mut bytes = header(data.len() as u32, 0, checksum, DISKCOPY_MAGIC);
    bytes.extend_from_slice(data);
    bytes
}

/// Deterministic sector-like test data
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

/// Write an image into `dir` and return its path with an output path beside it
pub fn write_image(dir: &Path, image: &[u8]) -> (PathBuf, PathBuf) {
    let input = dir.join("disk.image");
    let output = dir.join("disk.img");
    std::fs::write(&input, image).expect("write input image");
    (input, output)
}
