use std::fs::Metadata;
use std::path::{Path, PathBuf};

use crate::error::UtilError;

fn absolute(base: &Path) -> Result<PathBuf, UtilError> {
    if base.is_absolute() {
        return Ok(base.to_path_buf());
    }
    let cwd = std::env::current_dir()?;
    if base.as_os_str().is_empty() {
        Ok(cwd)
    } else {
        Ok(cwd.join(base))
    }
}

/// `rel` unchanged when absolute, otherwise `rel` joined onto the absolute
/// form of `base`. An empty `rel` resolves to `base` itself.
pub fn resolve_path(base: impl AsRef<Path>, rel: impl AsRef<Path>) -> Result<PathBuf, UtilError> {
    let rel = rel.as_ref();
    if rel.is_absolute() {
        return Ok(rel.to_path_buf());
    }
    let abs = absolute(base.as_ref())?;
    if rel.as_os_str().is_empty() {
        Ok(abs)
    } else {
        Ok(abs.join(rel))
    }
}

pub fn get_existing_file_info(
    base: impl AsRef<Path>,
    rel: impl AsRef<Path>,
) -> Result<(Metadata, PathBuf), UtilError> {
    let path = resolve_path(base, rel)?;
    match std::fs::metadata(&path) {
        Ok(meta) => Ok((meta, path)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(UtilError::FileNotFound(path.display().to_string()))
        }
        Err(e) => Err(UtilError::Io(e)),
    }
}

pub fn file_exists(base: impl AsRef<Path>, rel: impl AsRef<Path>) -> bool {
    get_existing_file_info(base, rel).is_ok_and(|(meta, _)| meta.is_file())
}

pub fn dir_exists(base: impl AsRef<Path>, rel: impl AsRef<Path>) -> bool {
    get_existing_file_info(base, rel).is_ok_and(|(meta, _)| meta.is_dir())
}

pub fn resolve_existing_file(
    base: impl AsRef<Path>,
    rel: impl AsRef<Path>,
) -> Result<PathBuf, UtilError> {
    let (meta, path) = get_existing_file_info(base, rel)?;
    if !meta.is_file() {
        return Err(UtilError::NotAFile(path.display().to_string()));
    }
    Ok(path)
}

pub fn resolve_existing_dir(
    base: impl AsRef<Path>,
    rel: impl AsRef<Path>,
) -> Result<PathBuf, UtilError> {
    let (meta, path) = get_existing_file_info(base, rel)?;
    if !meta.is_dir() {
        return Err(UtilError::NotADirectory(path.display().to_string()));
    }
    Ok(path)
}
