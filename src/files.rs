//! File-level wrappers around [`compose`](crate::compose) and
//! [`split`](crate::split).
//!
//! Every conversion runs to completion in memory before the first output file
//! is created, so a failed conversion never leaves a partial output behind.

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{
    composer::compose,
    config::ConverterConfig,
    errors::{TimError, TimResult},
    formats::{summarize, FileSummary},
    header::FileKind,
    splitter::split,
};

/// Paths written by [`split_file`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPaths {
    pub pxl: PathBuf,
    /// `None` when the TIM carried no CLUT
    pub clt: Option<PathBuf>,
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Read a whole input file, enforcing the configured size limit
pub fn read_input(path: &Path, config: &ConverterConfig) -> TimResult<Vec<u8>> {
    let data = fs::read(path).map_err(|e| TimError::from(e).with_path(&display(path)))?;
    config.check_file_size(&display(path), data.len())?;
    Ok(data)
}

pub fn write_output(path: &Path, data: &[u8]) -> TimResult<()> {
    fs::write(path, data).map_err(|e| TimError::FileWriteError {
        path: display(path),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), bytes = data.len(), "wrote file");
    Ok(())
}

/// `input.pxl` -> `input.tim`
pub fn default_tim_path(pxl_path: &Path) -> PathBuf {
    pxl_path.with_extension(FileKind::Tim.extension())
}

/// `input.tim` -> `input`
pub fn default_split_base(tim_path: &Path) -> PathBuf {
    tim_path.with_extension("")
}

/// Append `.ext` to `base` without replacing any extension it already has
pub fn append_extension(base: &Path, kind: FileKind) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(".");
    name.push(kind.extension());
    PathBuf::from(name)
}

/// Compose `pxl_path` and `clt_path` into a TIM file.
///
/// Writes to `output`, or next to the PXL input when `output` is `None`.
pub fn compose_files(
    pxl_path: &Path,
    clt_path: &Path,
    output: Option<&Path>,
    config: &ConverterConfig,
) -> TimResult<PathBuf> {
    let pxl = read_input(pxl_path, config)?;
    let clt = read_input(clt_path, config)?;
    let tim = compose(&pxl, &clt)?;

    let tim_path = output.map_or_else(|| default_tim_path(pxl_path), Path::to_path_buf);
    write_output(&tim_path, &tim)?;
    Ok(tim_path)
}

/// Split `tim_path` into `<base>.pxl` and, if a CLUT is present, `<base>.clt`.
///
/// `base` defaults to the TIM path without its extension.
pub fn split_file(
    tim_path: &Path,
    base: Option<&Path>,
    config: &ConverterConfig,
) -> TimResult<SplitPaths> {
    let tim = read_input(tim_path, config)?;
    let (pxl, clt) = split(&tim)?;

    let base = base.map_or_else(|| default_split_base(tim_path), Path::to_path_buf);
    let pxl_path = append_extension(&base, FileKind::Pxl);
    write_output(&pxl_path, &pxl)?;

    let clt_path = match clt {
        Some(clt) => {
            let clt_path = append_extension(&base, FileKind::Clt);
            write_output(&clt_path, &clt)?;
            Some(clt_path)
        },
        None => None,
    };

    Ok(SplitPaths {
        pxl: pxl_path,
        clt: clt_path,
    })
}

pub fn inspect_file(path: &Path, config: &ConverterConfig) -> TimResult<FileSummary> {
    let data = read_input(path, config)?;
    summarize(&data)
}
