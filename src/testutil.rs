//! Shared test helpers.
//!
//! Config loading resolves task.toml relative to the current directory, so
//! tests that exercise it must run in a scratch directory. The test runner is
//! parallel and the working directory is process-wide state, hence the lock.

#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use tempfile::TempDir;

/// Serializes tests that change the current working directory.
#[cfg(test)]
pub static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Run a closure inside a fresh temporary directory, restoring the original
/// working directory afterward.
///
/// # Panics
///
/// Panics if the temp directory cannot be created or either directory change
/// fails.
#[cfg(test)]
pub fn with_temp_cwd<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let original = std::env::current_dir().expect("failed to get current directory");
    let temp = TempDir::new().expect("failed to create temp directory");
    std::env::set_current_dir(temp.path()).expect("failed to change to temp directory");
    let result = f();
    std::env::set_current_dir(original).expect("failed to restore original directory");
    result
}
