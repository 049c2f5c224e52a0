//! Capability-based UTF-8 filesystem helpers for the moonscore tools.
//!
//! Every helper resolves an ambient directory handle with `cap-std` and then
//! works relative to it, so callers hand over [`camino`] paths and never
//! touch `std::fs` directly.
#![forbid(unsafe_code)]

use std::io::{self, Read};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open a file for reading.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read a whole file as UTF-8 text.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let mut contents = String::new();
    open_utf8_file(path)?.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Report whether `path` names a regular file.
///
/// A missing path surfaces as an [`io::ErrorKind::NotFound`] error.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_parent_dir(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Create every missing ancestor directory of `path`.
///
/// Paths without a parent, or whose parent is the filesystem root, need no
/// work.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent().filter(|dir| !dir.as_str().is_empty()) else {
        return Ok(());
    };
    let (base, relative) = split_anchor(parent);
    if relative.as_str().is_empty() {
        return Ok(());
    }
    fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?.create_dir_all(&relative)
}

fn open_parent_dir(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split a directory into the anchor `cap-std` can open ambiently and the
/// remainder relative to it.
///
/// Absolute paths anchor at their root (including any Windows prefix);
/// relative paths anchor at the current directory.
fn split_anchor(dir: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    if !dir.has_root() {
        return (Utf8PathBuf::from("."), dir.to_path_buf());
    }
    let anchor = dir
        .ancestors()
        .last()
        .map_or_else(|| Utf8PathBuf::from("/"), Utf8Path::to_path_buf);
    let relative = dir
        .strip_prefix(&anchor)
        .map_or_else(|_| Utf8PathBuf::new(), Utf8Path::to_path_buf);
    (anchor, relative)
}
