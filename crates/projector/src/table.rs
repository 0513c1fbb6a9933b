use projector_core::window::{MonitorInfo, WindowInfo};

const ID_WIDTH: usize = 10;
const APP_WIDTH: usize = 20;
const POSITION_WIDTH: usize = 13;
const SIZE_WIDTH: usize = 11;
const STATE_WIDTH: usize = 9;

pub fn print_windows_table(windows: &[WindowInfo]) {
    let title_width = windows
        .iter()
        .map(|w| w.title().chars().count())
        .max()
        .unwrap_or(20)
        .clamp(5, 50);

    let widths = [
        ID_WIDTH,
        title_width,
        APP_WIDTH,
        POSITION_WIDTH,
        SIZE_WIDTH,
        STATE_WIDTH,
    ];

    println!("{}", border('┌', '┬', '┐', &widths));
    println!(
        "{}",
        row(
            &["ID", "Title", "App", "Position", "Size", "State"],
            &widths
        )
    );
    println!("{}", border('├', '┼', '┤', &widths));

    for w in windows {
        let state = if w.is_minimized() {
            "Minimized"
        } else {
            "Visible"
        };
        println!(
            "{}",
            row(
                &[
                    &w.id().to_string(),
                    w.title(),
                    w.app_name(),
                    &format!("{},{}", w.x(), w.y()),
                    &format!("{}x{}", w.width(), w.height()),
                    state,
                ],
                &widths
            )
        );
    }

    println!("{}", border('└', '┴', '┘', &widths));
}

pub fn print_monitors_table(monitors: &[MonitorInfo]) {
    let name_width = monitors
        .iter()
        .map(|m| m.name().chars().count())
        .max()
        .unwrap_or(10)
        .clamp(4, 40);

    let widths = [5, name_width, POSITION_WIDTH, SIZE_WIDTH, 7];

    println!("{}", border('┌', '┬', '┐', &widths));
    println!(
        "{}",
        row(&["Index", "Name", "Position", "Size", "Primary"], &widths)
    );
    println!("{}", border('├', '┼', '┤', &widths));

    for m in monitors {
        println!(
            "{}",
            row(
                &[
                    &m.index().to_string(),
                    m.name(),
                    &format!("{},{}", m.x(), m.y()),
                    &format!("{}x{}", m.width(), m.height()),
                    if m.is_primary() { "Yes" } else { "No" },
                ],
                &widths
            )
        );
    }

    println!("{}", border('└', '┴', '┘', &widths));
}

fn border(left: char, middle: char, right: char, widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(&middle.to_string()), right)
}

fn row(cells: &[&str], widths: &[usize]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {} ", truncate(cell, *width)))
        .collect();
    format!("│{}│", cells.join("│"))
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_pads_short_strings() {
        assert_eq!(truncate("Hub", 6), "Hub   ");
    }

    #[test]
    fn test_truncate_long_strings() {
        assert_eq!(truncate("Unity Hub 3.9.1", 8), "Unity...");
    }

    #[test]
    fn test_truncate_multibyte() {
        let result = truncate("日本語のウィンドウ", 6);
        assert_eq!(result.chars().count(), 6);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_border_and_row_align() {
        let widths = [3, 5];
        let top = border('┌', '┬', '┐', &widths);
        let line = row(&["ab", "cdefgh"], &widths);

        assert_eq!(top, "┌─────┬───────┐");
        assert_eq!(line, "│ ab  │ cd... │");
        assert_eq!(top.chars().count(), line.chars().count());
    }
}
