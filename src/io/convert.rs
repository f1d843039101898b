/// Disk Copy 4.2 to raw image conversion

use crate::error::{DiskCopyError, Result};
use crate::format::{assess, read_header, Advisory, DiskCopyHeader};
use crate::io::copier::copy_data;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Options for a file conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Fail when the computed checksum differs from the header
    pub verify_checksum: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            verify_checksum: true,
        }
    }
}

/// What a conversion read and produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Header of the input image
    pub header: DiskCopyHeader,
    /// Advisories raised for the header
    pub advisories: Vec<Advisory>,
    /// Bytes written to the output
    pub bytes_written: u64,
    /// Checksum computed over the copied data
    pub checksum: u32,
}

impl ConversionReport {
    /// Whether the computed checksum matches the header
    pub fn checksum_matches(&self) -> bool {
        self.checksum == self.header.data_checksum
    }

    /// Fail with [`DiskCopyError::ChecksumMismatch`] if the checksums differ
    pub fn verify(&self) -> Result<()> {
        if !self.checksum_matches() {
            return Err(DiskCopyError::ChecksumMismatch {
                expected: self.header.data_checksum,
                actual: self.checksum,
            });
        }
        Ok(())
    }
}

/// Convert an image stream into raw data
///
/// Reads the header, collects advisories, then copies the data region. The
/// checksum is computed but not verified; see [`ConversionReport::verify`].
pub fn convert<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<ConversionReport> {
    let header = read_header(reader)?;
    debug!(
        image_name = %header.name(),
        data_size = header.data_size,
        tag_size = header.tag_size,
        encoding = %header.encoding(),
        format = %header.format_byte(),
        canonical = header.canonical_size().map(|c| c.name()).unwrap_or("none"),
        "read Disk Copy 4.2 header"
    );

    let advisories = assess(&header);
    for advisory in &advisories {
        debug!("{}", advisory);
    }

    let outcome = copy_data(reader, writer, header.data_size)?;
    info!(
        bytes = outcome.bytes_written,
        checksum = outcome.checksum,
        expected = header.data_checksum,
        "copied data region"
    );

    Ok(ConversionReport {
        header,
        advisories,
        bytes_written: outcome.bytes_written,
        checksum: outcome.checksum,
    })
}

/// Convert the image at `input` into a raw file at `output`
///
/// Both files are opened before anything is read, so the output exists
/// (possibly empty) even if the header is rejected. On a checksum mismatch
/// the output is left complete on disk.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<ConversionReport> {
    let input = input.as_ref();
    let output = output.as_ref();

    let in_file = File::open(input).map_err(|e| DiskCopyError::open(input, e))?;
    let out_file = File::create(output).map_err(|e| DiskCopyError::open(output, e))?;

    let mut reader = BufReader::new(in_file);
    let mut writer = BufWriter::new(out_file);

    let report = convert(&mut reader, &mut writer)?;

    writer
        .into_inner()
        .map_err(|e| DiskCopyError::write(e.into_error()))?;

    if options.verify_checksum {
        report.verify()?;
    }

    Ok(report)
}
