/// Reading graph descriptions from disk or stdin.
///
/// The single I/O entry point for the `tred` binary; `tred-core` only ever
/// sees strings. Graph descriptions are small line-oriented files, so both
/// sources go through one capped reader: at most `max_size` bytes are
/// accepted, and one extra probe byte distinguishes "exactly at the limit"
/// from "over it". The bytes must be valid UTF-8; the error carries the
/// offset of the first bad sequence.
use std::io::Read as _;
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

/// Reads the graph description at `source` into a `String`.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for a missing or unreadable file, an
/// input larger than `max_size` bytes, a failed stdin read, or invalid
/// UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => {
            let file = std::fs::File::open(path).map_err(|e| open_error(&e, path))?;
            let name = path.display().to_string();
            let bytes = read_capped(file, max_size).map_err(|e| match e {
                CapError::Overflow => CliError::FileTooLarge {
                    source: name.clone(),
                    limit: max_size,
                    actual: file_size(path),
                },
                CapError::Io(err) => CliError::IoError {
                    source: name.clone(),
                    detail: err.to_string(),
                },
            })?;
            into_utf8(bytes, &name)
        }
        PathOrStdin::Stdin => {
            let bytes = read_capped(std::io::stdin().lock(), max_size).map_err(|e| match e {
                CapError::Overflow => CliError::FileTooLarge {
                    source: "-".to_owned(),
                    limit: max_size,
                    actual: None,
                },
                CapError::Io(err) => CliError::StdinReadError {
                    detail: err.to_string(),
                },
            })?;
            into_utf8(bytes, "-")
        }
    }
}

/// How a capped read can fail: the stream misbehaved, or it kept going past
/// the limit.
#[derive(Debug)]
enum CapError {
    Io(std::io::Error),
    Overflow,
}

/// Reads `reader` to the end, refusing inputs longer than `max_size` bytes.
///
/// The reader is taken at `max_size + 1`: if that final probe byte arrives
/// the input is over the limit, while a stream of exactly `max_size` bytes
/// passes. Allocation never exceeds the cap.
fn read_capped<R: std::io::Read>(reader: R, max_size: u64) -> Result<Vec<u8>, CapError> {
    let mut limited = reader.take(max_size.saturating_add(1));
    let mut buf: Vec<u8> = Vec::new();
    limited.read_to_end(&mut buf).map_err(CapError::Io)?;
    if buf.len() as u64 > max_size {
        return Err(CapError::Overflow);
    }
    Ok(buf)
}

/// Maps a `File::open` failure to the matching [`CliError`] variant.
fn open_error(e: &std::io::Error, path: &Path) -> CliError {
    if e.kind() == std::io::ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if e.kind() == std::io::ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

/// The on-disk size of `path`, for the oversize error message. `None` if
/// the metadata cannot be read.
fn file_size(path: &Path) -> Option<u64> {
    std::fs::metadata(path).ok().map(|m| m.len())
}

/// Converts read bytes into a `String`, reporting the byte offset of the
/// first invalid UTF-8 sequence on failure.
fn into_utf8(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
