use bytes::Bytes;
use tracing::debug;

use crate::{
    errors::TimResult,
    formats::{CltFile, PxlFile, TimFile},
    header::{FileKind, Header, HAS_CLUT},
    traits::{FormatParser, FormatWriter},
};

impl TimFile {
    /// Join a pixel file and a CLUT file into one TIM.
    ///
    /// The pixel type comes from the PXL header and the CLUT bit is always
    /// set. The CLT header flags are dropped without inspection.
    pub fn compose(pxl: PxlFile, clt: CltFile) -> TimFile {
        let flags = pxl.header.pixel_type() | HAS_CLUT;

        TimFile {
            header: Header::new(FileKind::Tim, flags),
            clut: Some(clt.clut),
            pixels: pxl.pixels,
        }
    }
}

/// Build TIM bytes from PXL and CLT bytes
pub fn compose(pxl: &[u8], clt: &[u8]) -> TimResult<Vec<u8>> {
    let pxl = PxlFile::from_bytes(&mut Bytes::copy_from_slice(pxl))?;
    let clt = CltFile::from_bytes(&mut Bytes::copy_from_slice(clt))?;

    debug!(
        pixel_type = pxl.header.pixel_type(),
        clut_len = clt.clut.len(),
        pixel_len = pxl.pixels.len(),
        "composing TIM"
    );

    TimFile::compose(pxl, clt).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TimError;

    const PXL: [u8; 10] = [0x12, 0, 0, 0, 0x02, 0, 0, 0, 0xAA, 0xBB];
    const CLT: [u8; 14] = [0x11, 0, 0, 0, 0x02, 0, 0, 0, 0x06, 0, 0, 0, 0xCC, 0xDD];

    #[test]
    fn test_compose_reference_layout() {
        let tim = compose(&PXL, &CLT).unwrap();
        assert_eq!(
            tim,
            vec![
                0x10, 0x00, 0x00, 0x00, 0x0A, 0x00, 0x00, 0x00, // header
                0x06, 0x00, 0x00, 0x00, 0xCC, 0xDD, // clut
                0xAA, 0xBB, // pixels
            ]
        );
    }

    #[test]
    fn test_compose_keeps_only_pixel_type_bits() {
        let mut pxl = PXL;
        pxl[4] = 0xFD; // pixel type 5, stray high bits, CLUT bit set
        pxl[7] = 0x80;

        let tim = compose(&pxl, &CLT).unwrap();
        assert_eq!(&tim[4..8], &[0x0D, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_compose_ignores_clt_flags() {
        let mut clt = CLT;
        clt[4] = 0x00;
        clt[5] = 0xFF;

        let tim = compose(&PXL, &clt).unwrap();
        assert_eq!(tim, compose(&PXL, &CLT).unwrap());
    }

    #[test]
    fn test_compose_rejects_wrong_pxl_tag() {
        let mut pxl = PXL;
        pxl[0] = 0x10;

        assert_eq!(
            compose(&pxl, &CLT),
            Err(TimError::InvalidTag {
                kind: "PXL",
                expected: 0x12,
                actual: 0x10,
            })
        );
    }

    #[test]
    fn test_compose_rejects_wrong_clt_tag() {
        let mut clt = CLT;
        clt[0] = 0x12;

        assert!(matches!(
            compose(&PXL, &clt),
            Err(TimError::InvalidTag { expected: 0x11, actual: 0x12, .. })
        ));
    }

    #[test]
    fn test_compose_short_inputs() {
        assert_eq!(
            compose(&PXL[..5], &CLT),
            Err(TimError::MalformedHeader { size: 5 })
        );
        assert_eq!(
            compose(&PXL, &CLT[..7]),
            Err(TimError::MalformedHeader { size: 7 })
        );
    }

    #[test]
    fn test_compose_header_only_inputs() {
        let tim = compose(&PXL[..8], &CLT[..8]).unwrap();
        assert_eq!(tim, vec![0x10, 0, 0, 0, 0x0A, 0, 0, 0]);
    }
}
