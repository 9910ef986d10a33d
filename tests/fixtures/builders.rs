//! Builders for TIM, PXL and CLT test buffers
//!
//! These write bytes by hand instead of going through the crate's writers, so
//! tests compare the converter against an independent encoding.

/// Builder for PXL buffers
#[derive(Debug, Clone, Default)]
pub struct PxlBuilder {
    tag: Option<u8>,
    flags: u32,
    pixels: Vec<u8>,
}

impl PxlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tag byte (for invalid data)
    pub fn tag(mut self, tag: u8) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    pub fn pixels(mut self, pixels: &[u8]) -> Self {
        self.pixels = pixels.to_vec();
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = header(self.tag.unwrap_or(0x12), self.flags);
        out.extend_from_slice(&self.pixels);
        out
    }
}

/// Builder for CLT buffers; the CLUT block gets a correct length prefix
#[derive(Debug, Clone, Default)]
pub struct CltBuilder {
    tag: Option<u8>,
    flags: u32,
    entries: Vec<u8>,
}

impl CltBuilder {
    pub fn new() -> Self {
        Self {
            flags: 0x02,
            ..Self::default()
        }
    }

    pub fn tag(mut self, tag: u8) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    /// Palette bytes following the length field
    pub fn entries(mut self, entries: &[u8]) -> Self {
        self.entries = entries.to_vec();
        self
    }

    /// Body of the CLT: length prefix + entries
    pub fn block(&self) -> Vec<u8> {
        clut_block(&self.entries)
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = header(self.tag.unwrap_or(0x11), self.flags);
        out.extend_from_slice(&self.block());
        out
    }
}

/// Builder for TIM buffers
#[derive(Debug, Clone, Default)]
pub struct TimBuilder {
    flags: u32,
    clut: Option<Vec<u8>>,
    pixels: Vec<u8>,
}

impl TimBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pixel_type(mut self, pixel_type: u32) -> Self {
        self.flags = (self.flags & !0x07) | (pixel_type & 0x07);
        self
    }

    /// Attach a well-formed CLUT block and set the CLUT flag
    pub fn clut_entries(mut self, entries: &[u8]) -> Self {
        self.flags |= 0x08;
        self.clut = Some(clut_block(entries));
        self
    }

    /// Attach raw CLUT block bytes verbatim (for broken length prefixes)
    pub fn raw_clut(mut self, block: &[u8]) -> Self {
        self.flags |= 0x08;
        self.clut = Some(block.to_vec());
        self
    }

    pub fn pixels(mut self, pixels: &[u8]) -> Self {
        self.pixels = pixels.to_vec();
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = header(0x10, self.flags);
        if let Some(clut) = &self.clut {
            out.extend_from_slice(clut);
        }
        out.extend_from_slice(&self.pixels);
        out
    }
}

pub fn header(tag: u8, flags: u32) -> Vec<u8> {
    let mut out = vec![tag, 0x00, 0x00, 0x00];
    out.extend_from_slice(&flags.to_le_bytes());
    out
}

/// CLUT block whose length field counts itself
pub fn clut_block(entries: &[u8]) -> Vec<u8> {
    let len = (entries.len() + 4) as u32;
    let mut out = len.to_le_bytes().to_vec();
    out.extend_from_slice(entries);
    out
}

/// Reads the flags field of any header
pub fn flags_of(buffer: &[u8]) -> u32 {
    u32::from_le_bytes([buffer[4], buffer[5], buffer[6], buffer[7]])
}
