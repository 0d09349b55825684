// ABOUTME: Working-directory selection for packaged-bundle execution.
// ABOUTME: Packaged runs relocate into a fresh writable temp directory.

use std::io;
use std::path::PathBuf;

use tracing::info;

/// Prefix for packaged-mode scratch directories under the system temp dir.
const SCRATCH_PREFIX: &str = "fasthtml-app-";

/// Create a fresh uniquely-named scratch directory for a packaged run.
/// The directory is kept past the guard so it lives for the whole process.
pub fn create_scratch_dir() -> io::Result<PathBuf> {
    let dir = tempfile::Builder::new().prefix(SCRATCH_PREFIX).tempdir()?;
    Ok(dir.keep())
}

/// Decide and enter the working directory, once, before the server starts.
///
/// A packaged bundle may live somewhere read-only, so packaged runs chdir
/// into a fresh temp directory where session and scratch files can be
/// written. Normal runs keep the current directory untouched.
pub fn prepare_work_dir(packaged: bool) -> io::Result<PathBuf> {
    if packaged {
        let dir = create_scratch_dir()?;
        std::env::set_current_dir(&dir)?;
        info!(dir = %dir.display(), "packaged run, relocated working directory");
        Ok(dir)
    } else {
        std::env::current_dir()
    }
}
