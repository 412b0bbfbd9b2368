//! Writing rendered art to disk.

use crate::trace::{trace_event, trace_warn};
use crate::util::{Img2AsciiError, Img2AsciiResult};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Mode given to persisted output; temporary files start owner-only.
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

/// Writes `contents` to a temporary file beside `destination` and renames it
/// into place. On any failure the temporary file is removed and
/// `destination` is left as it was.
pub(crate) fn write_atomic(destination: &Path, contents: &str) -> Img2AsciiResult<()> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_err = |err: io::Error| Img2AsciiError::Write {
        path: destination.to_path_buf(),
        reason: err.to_string(),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(OUTPUT_MODE))
            .map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(destination).map_err(|err| write_err(err.error))?;

    trace_event!("written", bytes = contents.len());
    Ok(())
}

/// Mirrors the output to a debug log. Failures are reported through tracing
/// only; the conversion itself has already succeeded.
pub(crate) fn write_debug_log(path: &Path, contents: &str) {
    if let Err(err) = fs::write(path, contents) {
        trace_warn!(
            "debug_log_failed",
            path = path.display().to_string().as_str(),
            reason = err.to_string().as_str()
        );
    }
}
