//! Raw PGM (`P5`) reading and writing.
//!
//! Header grammar: `P5`, then width, height and maxval as decimal tokens,
//! each preceded by whitespace and optionally by `#` comment lines, then
//! exactly one whitespace byte followed by `width * height` raw levels in
//! row-major order. Only 8-bit files (maxval up to 255) are accepted.

use crate::image::{parse_maxval, PixelBuffer};
use crate::trace::{trace_event, trace_span};
use crate::util::{GrayKitError, GrayKitResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

/// Decodes a raw PGM stream.
///
/// On any failure no image is returned; the stream may have been partially
/// consumed.
pub fn read_pgm<R: BufRead>(reader: R) -> GrayKitResult<PixelBuffer> {
    let mut header = HeaderReader { inner: reader };

    let magic = [header.next_byte()?, header.next_byte()?];
    if magic != [Some(b'P'), Some(b'5')] {
        return Err(GrayKitError::Pgm {
            reason: "invalid file format",
        });
    }

    let width = header.field("invalid width")?;
    let height = header.field("invalid height")?;
    let maxval = header.field("invalid maxval")?;
    let maxval = u32::try_from(maxval)
        .ok()
        .and_then(|v| parse_maxval(v).ok())
        .ok_or(GrayKitError::Pgm {
            reason: "invalid maxval",
        })?;

    match header.next_byte()? {
        Some(b) if b.is_ascii_whitespace() => {}
        _ => {
            return Err(GrayKitError::Pgm {
                reason: "whitespace expected",
            })
        }
    }

    let mut image = PixelBuffer::new(width, height, maxval)?;
    header
        .inner
        .read_exact(image.data_mut())
        .map_err(|err| match err.kind() {
            ErrorKind::UnexpectedEof => GrayKitError::Pgm {
                reason: "short pixel data",
            },
            _ => GrayKitError::Io {
                context: "reading pixels",
                source: err,
            },
        })?;

    if let Some(index) = image.as_slice().iter().position(|&v| v > maxval) {
        return Err(GrayKitError::LevelAboveMaxval {
            index,
            level: image.as_slice()[index],
            maxval,
        });
    }
    Ok(image)
}

/// Loads a raw PGM file from disk.
pub fn load_pgm<P: AsRef<Path>>(path: P) -> GrayKitResult<PixelBuffer> {
    let path = path.as_ref();
    let _span = trace_span!("load_pgm", path = %path.display()).entered();
    let file = File::open(path).map_err(GrayKitError::io("open"))?;
    let image = read_pgm(BufReader::new(file))?;
    trace_event!(
        "pgm_loaded",
        width = image.width(),
        height = image.height(),
        maxval = image.maxval()
    );
    Ok(image)
}

/// Encodes `image` as raw PGM.
pub fn write_pgm<W: Write>(mut writer: W, image: &PixelBuffer) -> GrayKitResult<()> {
    write!(
        writer,
        "P5\n{} {}\n{}\n",
        image.width(),
        image.height(),
        image.maxval()
    )
    .map_err(GrayKitError::io("writing header"))?;
    writer
        .write_all(image.as_slice())
        .map_err(GrayKitError::io("writing pixels"))?;
    Ok(())
}

/// Saves `image` as a raw PGM file.
///
/// A failed save may leave a truncated file behind.
pub fn save_pgm<P: AsRef<Path>>(image: &PixelBuffer, path: P) -> GrayKitResult<()> {
    let path = path.as_ref();
    let _span = trace_span!("save_pgm", path = %path.display()).entered();
    let file = File::create(path).map_err(GrayKitError::io("open"))?;
    let mut writer = BufWriter::new(file);
    write_pgm(&mut writer, image)?;
    writer.flush().map_err(GrayKitError::io("writing pixels"))?;
    Ok(())
}

struct HeaderReader<R> {
    inner: R,
}

impl<R: BufRead> HeaderReader<R> {
    fn peek_byte(&mut self) -> GrayKitResult<Option<u8>> {
        let buf = self
            .inner
            .fill_buf()
            .map_err(GrayKitError::io("reading header"))?;
        Ok(buf.first().copied())
    }

    fn next_byte(&mut self) -> GrayKitResult<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.inner.consume(1);
        }
        Ok(byte)
    }

    /// Skips whitespace and comment lines, returning how many bytes were
    /// skipped.
    fn skip_separators(&mut self) -> GrayKitResult<usize> {
        let mut skipped = 0;
        while let Some(b) = self.peek_byte()? {
            if b.is_ascii_whitespace() {
                self.inner.consume(1);
                skipped += 1;
            } else if b == b'#' {
                while let Some(c) = self.next_byte()? {
                    skipped += 1;
                    if c == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
        Ok(skipped)
    }

    /// Reads one separator-prefixed decimal token.
    fn field(&mut self, reason: &'static str) -> GrayKitResult<usize> {
        if self.skip_separators()? == 0 {
            return Err(GrayKitError::Pgm { reason });
        }
        let mut value: Option<usize> = None;
        while let Some(b) = self.peek_byte()? {
            if !b.is_ascii_digit() {
                break;
            }
            self.inner.consume(1);
            let digit = usize::from(b - b'0');
            value = Some(
                value
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(digit))
                    .ok_or(GrayKitError::Pgm { reason })?,
            );
        }
        value.ok_or(GrayKitError::Pgm { reason })
    }
}
