//! Shared filesystem helpers built on `cap-std` and `camino`.
//!
//! The session log is an externally-appended resource that may be absent
//! or mid-write when read, so reads are optional rather than fallible;
//! artefact writes create missing parent directories first.

#![forbid(unsafe_code)]

use std::io::{self, Read};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Read an entire UTF-8 file, returning `None` when it does not exist.
///
/// A missing file (or missing parent directory) is an expected state for
/// append-only logs that nothing has written to yet; every other IO
/// failure is surfaced.
pub fn read_optional(path: &Utf8Path) -> io::Result<Option<String>> {
    let mut file = match fs_utf8::File::open_ambient(path, ambient_authority()) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err),
    };
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(Some(contents))
}

/// Ensure the parent directory for `path` exists.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }
    let (base, relative) = if parent.is_absolute() {
        let relative = parent
            .strip_prefix("/")
            .map_err(|_| io::Error::other("failed to strip root from absolute path"))?;
        (Utf8Path::new("/"), relative)
    } else {
        (Utf8Path::new("."), parent)
    };
    if relative.as_str().is_empty() {
        return Ok(());
    }
    let dir = fs_utf8::Dir::open_ambient_dir(base, ambient_authority())?;
    dir.create_dir_all(relative)
}

/// Write a string artefact, creating parent directories as needed.
/// Existing files are truncated.
pub fn write_string(path: &Utf8Path, contents: &str) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let parent = path
        .parent()
        .filter(|p| !p.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.write(file_name, contents.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("create temporary directory")
    }

    fn utf8_join(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("utf8 path")
    }

    #[rstest]
    fn missing_file_reads_as_none(temp_dir: TempDir) {
        let path = utf8_join(&temp_dir, "absent.json");
        let contents = read_optional(&path).expect("optional read");
        assert_eq!(contents, None);
    }

    #[rstest]
    fn missing_parent_directory_reads_as_none(temp_dir: TempDir) {
        let path = utf8_join(&temp_dir, "no-such-dir/absent.json");
        let contents = read_optional(&path).expect("optional read");
        assert_eq!(contents, None);
    }

    #[rstest]
    fn written_contents_round_trip(temp_dir: TempDir) {
        let path = utf8_join(&temp_dir, "artefacts/out.txt");
        write_string(&path, "payload").expect("write artefact");
        let contents = read_optional(&path).expect("optional read");
        assert_eq!(contents.as_deref(), Some("payload"));
    }

    #[rstest]
    fn writes_truncate_existing_files(temp_dir: TempDir) {
        let path = utf8_join(&temp_dir, "out.txt");
        write_string(&path, "a longer first payload").expect("first write");
        write_string(&path, "short").expect("second write");
        let contents = read_optional(&path).expect("optional read");
        assert_eq!(contents.as_deref(), Some("short"));
    }
}
