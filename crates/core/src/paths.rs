//! Pure path helpers. Nothing here touches the filesystem.
//!
//! Names are handled as `OsStr` throughout so sources whose names are not
//! valid UTF-8 are discovered and compiled like any other.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Join `name` onto `dir`.
pub fn join(dir: impl AsRef<Path>, name: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(name)
}

/// Final component of `path`.
///
/// Falls back to the whole path when there is no final component (e.g. `/`).
pub fn basename(path: &Path) -> OsString {
    path.file_name().unwrap_or(path.as_os_str()).to_os_string()
}

/// Replace a trailing `from` suffix of `name` with `to`.
///
/// Only the end of the name is considered, so `c.c.c` becomes `c.c.o` and a
/// name without the suffix is returned unchanged.
#[cfg(unix)]
pub fn replace_extension(name: &OsStr, from: &str, to: &str) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    match name.as_bytes().strip_suffix(from.as_bytes()) {
        Some(stem) => {
            let mut bytes = stem.to_vec();
            bytes.extend_from_slice(to.as_bytes());
            OsString::from_vec(bytes)
        }
        None => name.to_os_string(),
    }
}

#[cfg(not(unix))]
pub fn replace_extension(name: &OsStr, from: &str, to: &str) -> OsString {
    match name.to_str().and_then(|n| n.strip_suffix(from)) {
        Some(stem) => format!("{stem}{to}").into(),
        None => name.to_os_string(),
    }
}

/// True if the final component of `path` ends in `.<extension>`, compared
/// byte for byte.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    let suffix = format!(".{extension}");
    path.file_name().is_some_and(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
}
