/// Advisory checks on header sizes
///
/// Nothing here is fatal. Callers report the advisories and carry on.

use crate::format::DiskCopyHeader;
use std::fmt;

/// Non-fatal observation about a header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// The image has a tag region, which is not extracted
    TagsIgnored {
        /// Declared tag region size
        tag_size: u32,
    },
    /// The data size is not one of the canonical floppy sizes
    UnusualSize {
        /// Declared data region size
        data_size: u32,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::TagsIgnored { .. } => write!(
                f,
                "this disk image has tags but they will be ignored. \
                 You can probably ignore this warning unless it's a Lisa image."
            ),
            Advisory::UnusualSize { data_size } => {
                write!(f, "Unusual image size {}", data_size)
            }
        }
    }
}

/// Collect the advisories that apply to a header
pub fn assess(header: &DiskCopyHeader) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if header.has_tags() {
        advisories.push(Advisory::TagsIgnored {
            tag_size: header.tag_size,
        });
    }

    if header.canonical_size().is_none() {
        advisories.push(Advisory::UnusualSize {
            data_size: header.data_size,
        });
    }

    advisories
}
