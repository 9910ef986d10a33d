use crate::errors::{TimError, TimResult};

/// Limits applied by the file layer before any conversion runs
///
/// The conversion functions themselves take no configuration; every input
/// that fits in memory is converted the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Maximum size of a single input file (bytes)
    pub max_file_size: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            max_file_size: 16 * 1024 * 1024, // 16MB
        }
    }
}

impl ConverterConfig {
    /// No practical size limit
    pub fn permissive() -> Self {
        Self {
            max_file_size: usize::MAX,
        }
    }

    pub fn with_max_file_size(mut self, max_file_size: usize) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Check if an input file size is acceptable
    pub fn check_file_size(&self, path: &str, size: usize) -> TimResult<()> {
        if size > self.max_file_size {
            return Err(TimError::FileTooLarge {
                path: path.to_string(),
                size,
                limit: self.max_file_size,
            });
        }
        Ok(())
    }
}
