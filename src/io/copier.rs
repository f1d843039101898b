/// Streaming copy of the data region
///
/// Data is copied one 16-bit word at a time and checksummed in the same pass.
/// An odd data size leaves the final byte unread and unwritten.

use crate::checksum::DataChecksum;
use crate::error::{DiskCopyError, Result};
use crate::format::constants::{HEADER_SIZE, WORD_SIZE};
use std::io::{Read, Write};

/// Result of copying a data region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyOutcome {
    /// Bytes written to the output
    pub bytes_written: u64,
    /// Checksum over the copied words
    pub checksum: u32,
}

/// Copy `data_size / 2` words from `reader` to `writer`
///
/// The reader must be positioned at the start of the data region. A short
/// read fails with [`DiskCopyError::Read`] and a failed write with
/// [`DiskCopyError::Write`]; the writer is not flushed.
pub fn copy_data<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    data_size: u32,
) -> Result<CopyOutcome> {
    let words = data_size / 2;
    let mut checksum = DataChecksum::new();
    let mut word = [0u8; WORD_SIZE];
    let mut copied: u64 = 0;

    for _ in 0..words {
        reader
            .read_exact(&mut word)
            .map_err(|e| DiskCopyError::read(HEADER_SIZE as u64 + copied, e))?;
        writer.write_all(&word).map_err(DiskCopyError::write)?;

        checksum.update_word_bytes(word);
        copied += WORD_SIZE as u64;
    }

    Ok(CopyOutcome {
        bytes_written: copied,
        checksum: checksum.finalize(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::{self, Cursor};

    /// Writer that fails once `limit` bytes have been accepted
    struct FullDisk {
        written: usize,
        limit: usize,
    }

    impl Write for FullDisk {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written + buf.len() > self.limit {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            self.written += buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_copy_example() {
        let mut input = Cursor::new(vec![0x00, 0x01, 0x00, 0x02]);
        let mut output = Vec::new();

        let outcome = copy_data(&mut input, &mut output, 4).expect("copy");
        assert_eq!(output, vec![0x00, 0x01, 0x00, 0x02]);
        assert_eq!(outcome.bytes_written, 4);
        assert_eq!(outcome.checksum, 0x4000_0001);
    }

    #[test]
    fn test_odd_size_drops_last_byte() {
        let mut input = Cursor::new(vec![1, 2, 3, 4, 5]);
        let mut output = Vec::new();

        let outcome = copy_data(&mut input, &mut output, 5).expect("copy");
        assert_eq!(output, vec![1, 2, 3, 4]);
        assert_eq!(outcome.bytes_written, 4);
        // the dangling byte is left in the stream
        assert_eq!(input.position(), 4);
    }

    #[test]
    fn test_trailing_tag_data_not_copied() {
        let mut input = Cursor::new(vec![0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
        let mut output = Vec::new();

        copy_data(&mut input, &mut output, 2).expect("copy");
        assert_eq!(output, vec![0xAA, 0xBB]);
    }

    #[test]
    fn test_short_read() {
        let mut input = Cursor::new(vec![0u8; 5]);
        let mut output = Vec::new();

        let err = copy_data(&mut input, &mut output, 8).unwrap_err();
        match err {
            DiskCopyError::Read { offset, source } => {
                assert_eq!(offset, HEADER_SIZE as u64 + 4);
                assert_eq!(source.kind(), io::ErrorKind::UnexpectedEof);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(output.len(), 4);
    }

    #[test]
    fn test_write_failure() {
        let mut input = Cursor::new(vec![0u8; 8]);
        let mut output = FullDisk {
            written: 0,
            limit: 4,
        };

        let err = copy_data(&mut input, &mut output, 8).unwrap_err();
        assert!(matches!(err, DiskCopyError::Write { .. }));
        assert_eq!(output.written, 4);
    }

    #[test]
    fn test_zero_size() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let outcome = copy_data(&mut input, &mut output, 0).expect("copy");
        assert_eq!(outcome.bytes_written, 0);
        assert_eq!(outcome.checksum, 0);
    }

    proptest! {
        #[test]
        fn prop_output_is_even_prefix(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
            let mut input = Cursor::new(data.clone());
            let mut output = Vec::new();

            let outcome = copy_data(&mut input, &mut output, data.len() as u32).unwrap();
            let expected_len = 2 * (data.len() / 2);
            prop_assert_eq!(output.len(), expected_len);
            prop_assert_eq!(&output[..], &data[..expected_len]);
            prop_assert_eq!(outcome.checksum, DataChecksum::of(&data));
        }
    }
}
