//! Conversion between PlayStation TIM textures and their split PXL (pixel)
//! and CLT (colour lookup table) files.
//!
//! ```
//! let pxl = [0x12, 0, 0, 0, 0x02, 0, 0, 0, 0xAA, 0xBB];
//! let clt = [0x11, 0, 0, 0, 0x02, 0, 0, 0, 0x06, 0, 0, 0, 0xCC, 0xDD];
//!
//! let tim = tim_converter::compose(&pxl, &clt).unwrap();
//! let (pxl_out, clt_out) = tim_converter::split(&tim).unwrap();
//!
//! assert_eq!(pxl_out, pxl);
//! assert_eq!(clt_out.as_deref(), Some(&clt[..]));
//! ```

pub mod composer;
pub mod config;
pub mod errors;
pub mod files;
pub mod formats;
pub mod header;
pub mod splitter;
pub mod traits;

pub use composer::compose;
pub use config::*;
pub use errors::*;
pub use formats::*;
pub use header::*;
pub use splitter::split;
pub use traits::*;
