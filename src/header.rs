use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{TimError, TimResult},
    traits::{FormatParser, FormatWriter},
};

/// Size of the header shared by TIM, CLT and PXL files
pub const HEADER_SIZE: usize = 8;

/// Low 3 bits of `flags`: pixel type code, carried between formats untouched
pub const PIXEL_TYPE_MASK: u32 = 0x07;

/// Bit 3 of `flags`: a CLUT block follows the TIM header
pub const HAS_CLUT: u32 = 0x08;

/// Flags written into every CLT produced by splitting a TIM.
/// Source flags are not consulted.
pub const CLT_OUTPUT_FLAGS: u32 = 0x02;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    Tim,
    Clt,
    Pxl,
}

impl FileKind {
    pub const fn tag(self) -> u8 {
        match self {
            FileKind::Tim => 0x10,
            FileKind::Clt => 0x11,
            FileKind::Pxl => 0x12,
        }
    }

    pub fn from_tag(tag: u8) -> Option<FileKind> {
        match tag {
            0x10 => Some(FileKind::Tim),
            0x11 => Some(FileKind::Clt),
            0x12 => Some(FileKind::Pxl),
            _ => None,
        }
    }

    /// File extension used when deriving output paths
    pub const fn extension(self) -> &'static str {
        match self {
            FileKind::Tim => "tim",
            FileKind::Clt => "clt",
            FileKind::Pxl => "pxl",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            FileKind::Tim => "TIM",
            FileKind::Clt => "CLT",
            FileKind::Pxl => "PXL",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub tag: u8,
    pub version: u8,
    pub reserved: u16,
    pub flags: u32,
}

impl Header {
    /// Header as written by this crate: version and reserved are always zero
    pub fn new(kind: FileKind, flags: u32) -> Self {
        Header {
            tag: kind.tag(),
            version: 0x00,
            reserved: 0x0000,
            flags,
        }
    }

    pub fn kind(&self) -> Option<FileKind> {
        FileKind::from_tag(self.tag)
    }

    /// Fail with `InvalidTag` unless this header belongs to `kind`
    pub fn expect_kind(&self, kind: FileKind) -> TimResult<()> {
        if self.tag != kind.tag() {
            return Err(TimError::InvalidTag {
                kind: kind.name(),
                expected: kind.tag(),
                actual: self.tag,
            });
        }
        Ok(())
    }

    pub fn pixel_type(&self) -> u32 {
        self.flags & PIXEL_TYPE_MASK
    }

    /// Only meaningful for TIM headers
    pub fn has_clut(&self) -> bool {
        self.flags & HAS_CLUT != 0
    }

    pub fn to_array(&self) -> [u8; HEADER_SIZE] {
        encode_header(self.tag, self.version, self.reserved, self.flags)
    }
}

/// Read the first 8 bytes of `buffer` as a header.
/// The version byte is returned as found, it is never validated.
pub fn decode_header(buffer: &[u8]) -> TimResult<Header> {
    if buffer.len() < HEADER_SIZE {
        return Err(TimError::MalformedHeader {
            size: buffer.len(),
        });
    }

    let mut cursor = &buffer[..HEADER_SIZE];
    Ok(Header {
        tag: cursor.get_u8(),
        version: cursor.get_u8(),
        reserved: cursor.get_u16_le(),
        flags: cursor.get_u32_le(),
    })
}

pub fn encode_header(tag: u8, version: u8, reserved: u16, flags: u32) -> [u8; HEADER_SIZE] {
    let mut out = [0u8; HEADER_SIZE];
    out[0] = tag;
    out[1] = version;
    out[2..4].copy_from_slice(&reserved.to_le_bytes());
    out[4..8].copy_from_slice(&flags.to_le_bytes());
    out
}

impl FormatParser for Header {
    /// Consume the header from the front of `data`, leaving the body
    fn from_bytes(data: &mut Bytes) -> TimResult<Self> {
        let header = decode_header(&data[..])?;
        data.advance(HEADER_SIZE);
        Ok(header)
    }
}

impl FormatWriter for Header {
    fn to_bytes(&self, buffer: &mut BytesMut) -> TimResult<()> {
        buffer.put_u8(self.tag);
        buffer.put_u8(self.version);
        buffer.put_u16_le(self.reserved);
        buffer.put_u32_le(self.flags);
        Ok(())
    }
}
