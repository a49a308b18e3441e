//! Atomic document writer.
//!
//! The serialized document goes to a temporary file next to the destination
//! and is renamed over it once fully written and synced. Readers of the
//! destination see either the previous export or the new one, never a
//! truncated file.
//!
//! The published file keeps the permissions of the file it replaces, or
//! gets `0644` on Unix when there is none, so a web server running as
//! another user can still read it.

use std::fs::Permissions;
use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error_handling::ExportError;

/// Mode of a newly published document: owner read/write, everyone else read.
#[cfg(unix)]
const DEFAULT_MODE: u32 = 0o644;

/// Writes `bytes` to `output`, creating parent directories as needed.
///
/// Returns the number of bytes written.
pub(crate) fn write_atomically(output: &Path, bytes: &[u8]) -> Result<u64, ExportError> {
    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(parent).map_err(|e| ExportError::write_failure(parent, e))?;

    let mut tmp =
        NamedTempFile::new_in(parent).map_err(|e| ExportError::write_failure(parent, e))?;
    debug!("Writing export to temporary file {}", tmp.path().display());

    // tempfile creates 0600 files; widen before the rename publishes it
    if let Some(permissions) = published_permissions(output) {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| ExportError::write_failure(output, e))?;
    }

    tmp.write_all(bytes)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| ExportError::write_failure(output, e))?;

    // On failure the temporary file is dropped and removed with the error
    tmp.persist(output)
        .map_err(|e| ExportError::write_failure(output, e.error))?;

    Ok(bytes.len() as u64)
}

/// Permissions the destination should end up with.
fn published_permissions(output: &Path) -> Option<Permissions> {
    match std::fs::metadata(output) {
        Ok(meta) if meta.is_file() => Some(meta.permissions()),
        _ => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(DEFAULT_MODE))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let output = temp_dir.path().join("site").join("data").join("products.json");

        let written = write_atomically(&output, b"{}").expect("write should succeed");
        assert_eq!(written, 2);
        assert_eq!(std::fs::read(&output).expect("output exists"), b"{}");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let output = temp_dir.path().join("products.json");
        std::fs::write(&output, b"old contents that are longer").expect("seed file");

        write_atomically(&output, b"new").expect("write should succeed");
        assert_eq!(std::fs::read(&output).expect("output exists"), b"new");
    }

    #[test]
    fn test_leaves_no_temporary_files_behind() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let output = temp_dir.path().join("products.json");

        write_atomically(&output, b"[]").expect("write should succeed");
        let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
            .expect("read dir")
            .filter_map(Result::ok)
            .map(|e| e.file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("products.json")]);
    }

    #[test]
    fn test_parent_is_a_file_is_write_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let blocker = temp_dir.path().join("data");
        std::fs::write(&blocker, b"not a directory").expect("seed file");

        let err = write_atomically(&blocker.join("products.json"), b"{}")
            .expect_err("cannot create a directory over a file");
        assert!(matches!(err, ExportError::WriteFailure { .. }));
        assert_eq!(err.stage(), "write");
    }

    #[test]
    fn test_destination_is_directory_is_write_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let output = temp_dir.path().join("products.json");
        std::fs::create_dir(&output).expect("seed directory");

        let err = write_atomically(&output, b"{}").expect_err("cannot rename over a directory");
        assert!(matches!(err, ExportError::WriteFailure { .. }));
        assert!(output.is_dir(), "existing directory must be left alone");
    }

    #[cfg(unix)]
    #[test]
    fn test_new_document_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let output = temp_dir.path().join("data").join("products.json");

        write_atomically(&output, b"{}").expect("write should succeed");
        let mode = std::fs::metadata(&output).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let output = temp_dir.path().join("products.json");
        std::fs::write(&output, b"old").expect("seed file");
        std::fs::set_permissions(&output, Permissions::from_mode(0o664)).expect("chmod");

        write_atomically(&output, b"new").expect("write should succeed");
        let mode = std::fs::metadata(&output).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o664);
    }
}
