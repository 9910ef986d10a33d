//! Typed views over the three file formats.
//!
//! Each value is a decoded header plus the untouched body bytes. Bodies are
//! `Bytes` slices of the input buffer, so parsing never copies block data.

use bytes::{BufMut, Bytes, BytesMut};
use serde::Serialize;

use crate::{
    errors::TimResult,
    header::{decode_header, FileKind, Header, HEADER_SIZE},
    traits::{FormatParser, FormatWriter},
};

/// PXL file: header + raw pixel block to end of buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PxlFile {
    pub header: Header,
    pub pixels: Bytes,
}

/// CLT file: header + length-prefixed CLUT block to end of buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CltFile {
    pub header: Header,
    pub clut: Bytes,
}

/// TIM file: header + optional CLUT block + pixel block.
///
/// `clut` includes its own 4 byte length field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimFile {
    pub header: Header,
    pub clut: Option<Bytes>,
    pub pixels: Bytes,
}

impl PxlFile {
    pub fn new(pixel_type: u32, pixels: Bytes) -> Self {
        PxlFile {
            header: Header::new(FileKind::Pxl, pixel_type),
            pixels,
        }
    }
}

impl CltFile {
    pub fn new(flags: u32, clut: Bytes) -> Self {
        CltFile {
            header: Header::new(FileKind::Clt, flags),
            clut,
        }
    }
}

impl FormatParser for PxlFile {
    fn from_bytes(data: &mut Bytes) -> TimResult<Self> {
        let header = Header::from_bytes(data)?;
        header.expect_kind(FileKind::Pxl)?;

        Ok(PxlFile {
            header,
            pixels: data.split_off(0),
        })
    }
}

impl FormatParser for CltFile {
    /// The CLUT length prefix is carried verbatim and not checked here
    fn from_bytes(data: &mut Bytes) -> TimResult<Self> {
        let header = Header::from_bytes(data)?;
        header.expect_kind(FileKind::Clt)?;

        Ok(CltFile {
            header,
            clut: data.split_off(0),
        })
    }
}

impl FormatWriter for PxlFile {
    fn to_bytes(&self, buffer: &mut BytesMut) -> TimResult<()> {
        buffer.reserve(HEADER_SIZE + self.pixels.len());
        self.header.to_bytes(buffer)?;
        buffer.put(&self.pixels[..]);
        Ok(())
    }
}

impl FormatWriter for CltFile {
    fn to_bytes(&self, buffer: &mut BytesMut) -> TimResult<()> {
        buffer.reserve(HEADER_SIZE + self.clut.len());
        self.header.to_bytes(buffer)?;
        buffer.put(&self.clut[..]);
        Ok(())
    }
}

impl FormatWriter for TimFile {
    fn to_bytes(&self, buffer: &mut BytesMut) -> TimResult<()> {
        let clut_len = self.clut.as_ref().map_or(0, |c| c.len());
        buffer.reserve(HEADER_SIZE + clut_len + self.pixels.len());

        self.header.to_bytes(buffer)?;
        if let Some(clut) = &self.clut {
            buffer.put(&clut[..]);
        }
        buffer.put(&self.pixels[..]);
        Ok(())
    }
}

/// Shape of any supported file, as reported by `tim_converter info`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FileSummary {
    pub kind: Option<FileKind>,
    pub header: Header,
    pub body_len: usize,
    pub pixel_type: u32,
    pub has_clut: bool,
    pub clut_len: Option<usize>,
}

/// Describe `buffer` from its header, locating the CLUT block for TIM input.
/// Unknown tags are summarized rather than rejected.
pub fn summarize(buffer: &[u8]) -> TimResult<FileSummary> {
    let header = decode_header(buffer)?;
    let kind = header.kind();

    let (has_clut, clut_len) = match kind {
        Some(FileKind::Tim) => {
            let tim = TimFile::from_bytes(&mut Bytes::copy_from_slice(buffer))?;
            (tim.clut.is_some(), tim.clut.map(|c| c.len()))
        },
        Some(FileKind::Clt) => (true, Some(buffer.len() - HEADER_SIZE)),
        _ => (false, None),
    };

    Ok(FileSummary {
        kind,
        header,
        body_len: buffer.len() - HEADER_SIZE,
        pixel_type: header.pixel_type(),
        has_clut,
        clut_len,
    })
}
