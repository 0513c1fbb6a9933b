use tracing::{debug, info, warn};

use super::errors::WindowError;
use super::system::SystemWindow;
use super::types::{MonitorInfo, WindowInfo};

/// Windows smaller than this in either dimension are treated as invisible
const MIN_VISIBLE_DIMENSION: u32 = 10;

/// List all visible windows
pub fn list_windows() -> Result<Vec<WindowInfo>, WindowError> {
    info!(event = "core.window.list_started");

    let windows = xcap::Window::all().map_err(|e| WindowError::EnumerationFailed {
        message: e.to_string(),
    })?;

    let mut skipped_count = 0;
    let mut tiny_count = 0;

    let result: Vec<WindowInfo> = windows
        .into_iter()
        .filter_map(|w| {
            let info = match read_window_info(&w) {
                Ok(info) => info,
                Err((property, e)) => {
                    debug!(
                        event = "core.window.property_access_failed",
                        property = property,
                        error = %e
                    );
                    skipped_count += 1;
                    return None;
                }
            };

            if info.width() < MIN_VISIBLE_DIMENSION || info.height() < MIN_VISIBLE_DIMENSION {
                tiny_count += 1;
                return None;
            }

            Some(info)
        })
        .collect();

    if skipped_count > 0 {
        warn!(
            event = "core.window.list_incomplete",
            skipped_count = skipped_count,
            tiny_count = tiny_count,
            returned_count = result.len()
        );
    }

    info!(event = "core.window.list_completed", count = result.len());
    Ok(result)
}

/// Read every property of an xcap window, naming the first one that fails
fn read_window_info(w: &xcap::Window) -> Result<WindowInfo, (&'static str, xcap::XCapError)> {
    let id = w.id().map_err(|e| ("id", e))?;
    let x = w.x().map_err(|e| ("x", e))?;
    let y = w.y().map_err(|e| ("y", e))?;
    let width = w.width().map_err(|e| ("width", e))?;
    let height = w.height().map_err(|e| ("height", e))?;

    let app_name = w.app_name().unwrap_or_default();
    let title = w.title().unwrap_or_default();
    let display_title = build_display_title(&title, &app_name, id);

    let is_minimized = w.is_minimized().unwrap_or_else(|e| {
        debug!(
            event = "core.window.is_minimized_check_failed",
            window_id = id,
            error = %e
        );
        false
    });

    let pid = w.pid().ok().map(|p| p as i32);

    Ok(WindowInfo::new(
        id,
        display_title,
        app_name,
        x,
        y,
        width,
        height,
        is_minimized,
        pid,
    ))
}

/// Build a display title from window title and app name
fn build_display_title(window_title: &str, app_name: &str, window_id: u32) -> String {
    if !window_title.is_empty() {
        return window_title.to_string();
    }

    if !app_name.is_empty() {
        return app_name.to_string();
    }

    format!("[Window {}]", window_id)
}

/// List all monitors
pub fn list_monitors() -> Result<Vec<MonitorInfo>, WindowError> {
    info!(event = "core.monitor.list_started");

    let monitors = xcap::Monitor::all().map_err(|e| WindowError::MonitorEnumerationFailed {
        message: e.to_string(),
    })?;

    let mut skipped_count = 0;

    let result: Vec<MonitorInfo> = monitors
        .into_iter()
        .enumerate()
        .filter_map(|(idx, m)| {
            let name = m.name().unwrap_or_else(|_| format!("Monitor {}", idx));

            let geometry = m
                .x()
                .and_then(|x| Ok((x, m.y()?, m.width()?, m.height()?)));
            let (x, y, width, height) = match geometry {
                Ok(geometry) => geometry,
                Err(e) => {
                    debug!(
                        event = "core.monitor.property_access_failed",
                        monitor_index = idx,
                        error = %e
                    );
                    skipped_count += 1;
                    return None;
                }
            };

            let is_primary = m.is_primary().unwrap_or_else(|e| {
                debug!(
                    event = "core.monitor.is_primary_check_failed",
                    monitor_index = idx,
                    error = %e
                );
                false
            });

            Some(MonitorInfo::new(
                idx as u32, name, x, y, width, height, is_primary,
            ))
        })
        .collect();

    if skipped_count > 0 {
        warn!(
            event = "core.monitor.list_incomplete",
            skipped_count = skipped_count,
            returned_count = result.len()
        );
    }

    info!(event = "core.monitor.list_completed", count = result.len());
    Ok(result)
}

/// Find every window whose title matches, best match first
///
/// Matching is case-insensitive. Exact title matches come before partial
/// (substring) matches; within each group the system's window enumeration
/// order is kept. Returns an empty vector when nothing matches.
pub fn find_windows_by_title(title: &str) -> Result<Vec<SystemWindow>, WindowError> {
    info!(event = "core.window.find_started", title = title);

    let xcap_windows = xcap::Window::all().map_err(|e| WindowError::EnumerationFailed {
        message: e.to_string(),
    })?;

    let titles: Vec<String> = xcap_windows
        .iter()
        .map(|w| w.title().unwrap_or_default())
        .collect();

    let ranked = rank_title_matches(&titles, title);

    let mut slots: Vec<Option<xcap::Window>> = xcap_windows.into_iter().map(Some).collect();
    let matches: Vec<SystemWindow> = ranked
        .into_iter()
        .filter_map(|(idx, match_type)| {
            let window = slots[idx].take()?;
            debug!(
                event = "core.window.match_found",
                title = titles[idx].as_str(),
                match_type = match_type.as_str()
            );
            Some(SystemWindow::new(window, titles[idx].clone()))
        })
        .collect();

    info!(
        event = "core.window.find_completed",
        title = title,
        count = matches.len()
    );
    Ok(matches)
}

/// Types of window title matches, in priority order
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum MatchType {
    ExactTitle,
    PartialTitle,
}

impl MatchType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            MatchType::ExactTitle => "exact_title",
            MatchType::PartialTitle => "partial_title",
        }
    }
}

/// Indices of matching titles, exact matches first, each group in input order
pub(crate) fn rank_title_matches(titles: &[String], query: &str) -> Vec<(usize, MatchType)> {
    let query_lower = query.to_lowercase();

    let mut exact = Vec::new();
    let mut partial = Vec::new();
    for (idx, title) in titles.iter().enumerate() {
        let title_lower = title.to_lowercase();
        if title_lower == query_lower {
            exact.push((idx, MatchType::ExactTitle));
        } else if title_lower.contains(&query_lower) {
            partial.push((idx, MatchType::PartialTitle));
        }
    }

    exact.extend(partial);
    exact
}
