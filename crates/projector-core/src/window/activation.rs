//! Platform-specific foreground activation.

use tracing::debug;

use super::errors::WindowError;

/// Bring a window to the foreground
///
/// macOS activates the owning application via System Events, Linux asks the
/// window manager through `xdotool`, Windows calls `SetForegroundWindow`.
pub(crate) fn activate_window(id: u32, app_name: &str, title: &str) -> Result<(), WindowError> {
    debug!(
        event = "core.window.activate_started",
        window_id = id,
        title = title
    );

    let result = platform_activate(id, app_name, title);

    match &result {
        Ok(()) => debug!(event = "core.window.activate_completed", window_id = id),
        Err(e) => debug!(
            event = "core.window.activate_failed",
            window_id = id,
            error = %e
        ),
    }

    result
}

#[cfg(target_os = "macos")]
fn platform_activate(_id: u32, app_name: &str, title: &str) -> Result<(), WindowError> {
    let script = format!(
        "tell application \"System Events\" to set frontmost of process \"{}\" to true",
        app_name
    );
    run_command(title, "osascript", &["-e", &script])
}

#[cfg(target_os = "linux")]
fn platform_activate(id: u32, _app_name: &str, title: &str) -> Result<(), WindowError> {
    run_command(title, "xdotool", &["windowactivate", &id.to_string()])
}

#[cfg(target_os = "windows")]
fn platform_activate(id: u32, _app_name: &str, title: &str) -> Result<(), WindowError> {
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::SetForegroundWindow;

    // SAFETY: SetForegroundWindow only reads the handle value; a stale HWND
    // makes the call return FALSE instead of faulting.
    let activated = unsafe { SetForegroundWindow(HWND(id as isize)) };
    if !activated.as_bool() {
        return Err(WindowError::ActivationFailed {
            title: title.to_string(),
            reason: "SetForegroundWindow refused the request".to_string(),
        });
    }
    Ok(())
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn platform_activate(_id: u32, _app_name: &str, title: &str) -> Result<(), WindowError> {
    Err(WindowError::ActivationFailed {
        title: title.to_string(),
        reason: "window activation is not supported on this platform".to_string(),
    })
}

#[cfg(any(target_os = "macos", target_os = "linux"))]
fn run_command(title: &str, program: &str, args: &[&str]) -> Result<(), WindowError> {
    let output = std::process::Command::new(program)
        .args(args)
        .output()
        .map_err(|e| WindowError::ActivationFailed {
            title: title.to_string(),
            reason: format!("Failed to execute {}: {}", program, e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(WindowError::ActivationFailed {
            title: title.to_string(),
            reason: stderr.trim().to_string(),
        });
    }

    Ok(())
}
