use bytes::{Buf, Bytes};
use tracing::debug;

use crate::{
    errors::{TimError, TimResult},
    formats::{CltFile, PxlFile, TimFile},
    header::{FileKind, Header, CLT_OUTPUT_FLAGS, HEADER_SIZE},
    traits::{FormatParser, FormatWriter},
};

/// Size of the length field opening every CLUT block
const CLUT_LENGTH_SIZE: usize = 4;

/// Split the self-length-prefixed CLUT block off the front of `data`.
///
/// The length field counts the whole block including itself, so the returned
/// slice starts with those 4 bytes.
fn take_clut_block(data: &mut Bytes) -> TimResult<Bytes> {
    if data.remaining() < CLUT_LENGTH_SIZE {
        return Err(TimError::TruncatedBuffer {
            offset: HEADER_SIZE,
            needed: CLUT_LENGTH_SIZE,
            available: data.remaining(),
        });
    }

    let clut_size = (&data[..CLUT_LENGTH_SIZE]).get_u32_le();
    let clut_len = clut_size as usize;
    if clut_len < CLUT_LENGTH_SIZE {
        return Err(TimError::InvalidClutLength { length: clut_size });
    }
    if clut_len > data.remaining() {
        return Err(TimError::TruncatedBuffer {
            offset: HEADER_SIZE,
            needed: clut_len,
            available: data.remaining(),
        });
    }

    Ok(data.split_to(clut_len))
}

impl FormatParser for TimFile {
    fn from_bytes(data: &mut Bytes) -> TimResult<Self> {
        let header = Header::from_bytes(data)?;
        header.expect_kind(FileKind::Tim)?;

        let clut = if header.has_clut() {
            Some(take_clut_block(data)?)
        } else {
            None
        };

        Ok(TimFile {
            header,
            clut,
            pixels: data.split_off(0),
        })
    }
}

impl TimFile {
    /// Break this TIM into its pixel file and, when present, its CLUT file.
    /// Emitted CLT headers always carry `CLT_OUTPUT_FLAGS`.
    pub fn split(self) -> (PxlFile, Option<CltFile>) {
        let pxl = PxlFile::new(self.header.pixel_type(), self.pixels);
        let clt = self.clut.map(|clut| CltFile::new(CLT_OUTPUT_FLAGS, clut));
        (pxl, clt)
    }
}

/// Split TIM bytes into PXL bytes and, if the TIM carries a CLUT, CLT bytes
pub fn split(tim: &[u8]) -> TimResult<(Vec<u8>, Option<Vec<u8>>)> {
    let tim = TimFile::from_bytes(&mut Bytes::copy_from_slice(tim))?;

    debug!(
        pixel_type = tim.header.pixel_type(),
        clut_len = ?tim.clut.as_ref().map(|c| c.len()),
        pixel_len = tim.pixels.len(),
        "splitting TIM"
    );

    let (pxl, clt) = tim.split();
    let clt = match clt {
        Some(clt) => Some(clt.to_vec()?),
        None => None,
    };
    Ok((pxl.to_vec()?, clt))
}
