//! Elevation check before configuration changes.

use nicpanel::CommandRunner;
use nicpanel::netcfg::netsh;

/// Whether the process runs with administrative rights.
///
/// `None` when it cannot be determined.
pub async fn is_elevated<R: CommandRunner>(runner: &R) -> Option<bool> {
    if cfg!(unix) {
        return Some(effective_uid_is_root());
    }
    match runner.run(&netsh::elevation_check()).await {
        Ok(output) => Some(output.is_success()),
        Err(e) => {
            tracing::debug!("elevation check failed: {}", e);
            None
        }
    }
}

#[cfg(unix)]
fn effective_uid_is_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
fn effective_uid_is_root() -> bool {
    false
}

/// Print a warning unless the process is known to be elevated.
///
/// Never blocks the change; the tool itself refuses when rights are missing.
pub async fn warn_if_not_elevated<R: CommandRunner>(runner: &R) {
    match is_elevated(runner).await {
        Some(true) => {}
        Some(false) => eprintln!(
            "Warning: not running with administrative rights; changes will likely be refused"
        ),
        None => eprintln!("Warning: could not confirm administrative rights"),
    }
}
