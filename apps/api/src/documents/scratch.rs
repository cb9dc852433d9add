use std::io::{self, Write};
use std::path::Path;

use tempfile::TempPath;

/// An uploaded file parked on disk for the length of one request.
///
/// The file is deleted when this value is dropped, so every exit path out of a
/// handler (success, early `?` return, panic unwind) removes it.
pub struct ScratchFile {
    path: TempPath,
}

impl ScratchFile {
    /// Writes `bytes` to a uniquely named file in `dir`. The declared filename
    /// contributes only its extension, so client-supplied path components never
    /// reach the filesystem.
    pub fn write_upload(dir: &Path, declared_filename: &str, bytes: &[u8]) -> io::Result<Self> {
        let suffix = Path::new(declared_filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();

        let mut file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(&suffix)
            .tempfile_in(dir)?;
        file.write_all(bytes)?;
        file.flush()?;

        // Decoders reopen by path; only the path guard is kept.
        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
