use crate::errors::TimResult;
use bytes::{Bytes, BytesMut};

pub trait FormatParser {
    fn from_bytes(data: &mut Bytes) -> TimResult<Self>
    where
        Self: Sized;
}

pub trait FormatWriter {
    fn to_bytes(&self, buffer: &mut BytesMut) -> TimResult<()>;

    /// Serialize into a freshly allocated buffer
    fn to_vec(&self) -> TimResult<Vec<u8>> {
        let mut buffer = BytesMut::new();
        self.to_bytes(&mut buffer)?;
        Ok(buffer.to_vec())
    }
}
