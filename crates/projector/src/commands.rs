use std::path::PathBuf;

use clap::ArgMatches;
use clap_complete::Shell;
use tracing::{error, info};

use projector_core::config::loading::merge_configs;
use projector_core::config::{ControlsConfig, DisplayConfig, WindowConfig};
use projector_core::errors::ProjectorError;
use projector_core::events;
use projector_core::window::{WindowInfo, list_monitors, list_windows};
use projector_core::{ProjectionSummary, ProjectorConfig, StopReason, projector_ops};

use crate::app::build_cli;
use crate::table;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("run", sub_matches)) => handle_run_command(sub_matches),
        Some(("list", sub_matches)) => handle_list_command(sub_matches),
        Some(("completions", sub_matches)) => handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let config_path = matches.get_one::<PathBuf>("config");

    info!(
        event = "cli.run_started",
        json_output = json_output,
        config_path = ?config_path
    );

    let file_config = match ProjectorConfig::load_hierarchy(config_path.map(PathBuf::as_path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            error!(event = "cli.run_failed", error = %e, error_code = e.error_code());
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let config = merge_configs(file_config, cli_overrides(matches));

    let request = match config.to_request() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            error!(event = "cli.run_failed", error = %e, error_code = e.error_code());
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    match projector_ops::run_system(&request) {
        Ok(summary) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }

            info!(
                event = "cli.run_completed",
                frames_rendered = summary.frames_rendered,
                stop_reason = summary.stop_reason.as_str()
            );
            events::log_app_shutdown();
            Ok(())
        }
        Err(e) => {
            if e.is_user_error() {
                eprintln!("{}", e);
            } else {
                eprintln!("Projection of '{}' failed: {}", request.window_title(), e);
            }
            error!(event = "cli.run_failed", error = %e, error_code = e.error_code());
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Collect the run flags as the highest-priority config layer
fn cli_overrides(matches: &ArgMatches) -> ProjectorConfig {
    ProjectorConfig {
        window: WindowConfig {
            title: matches.get_one::<String>("window").cloned(),
        },
        display: DisplayConfig {
            width: matches.get_one::<u32>("width").copied(),
            height: matches.get_one::<u32>("height").copied(),
            monitor: matches.get_one::<usize>("monitor").copied(),
        },
        controls: ControlsConfig {
            quit_key: matches.get_one::<char>("quit-key").copied(),
            poll_timeout_ms: matches.get_one::<u64>("poll-timeout").copied(),
            frames: matches.get_one::<u64>("frames").copied(),
        },
    }
}

fn print_summary(summary: &ProjectionSummary) {
    let reason = match summary.stop_reason {
        StopReason::QuitKey => "quit key pressed",
        StopReason::FrameLimit => "frame limit reached",
    };

    println!("Projection of '{}' stopped.", summary.window_title);
    println!("  Frames rendered: {}", summary.frames_rendered);
    println!("  Reason:          {}", reason);
    if summary.activation_failures > 0 {
        println!(
            "  Activation failures: {} (window could not be brought to front)",
            summary.activation_failures
        );
    }
}

fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("windows", sub_matches)) => handle_list_windows(sub_matches),
        Some(("monitors", sub_matches)) => handle_list_monitors(sub_matches),
        _ => {
            error!(event = "cli.list_subcommand_unknown");
            Err("Unknown list subcommand".into())
        }
    }
}

fn handle_list_windows(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let title_filter = matches.get_one::<String>("title");

    info!(
        event = "cli.list_windows_started",
        json_output = json_output,
        title_filter = ?title_filter
    );

    match list_windows() {
        Ok(windows) => {
            let filtered = apply_title_filter(windows, title_filter);

            if json_output {
                println!("{}", serde_json::to_string_pretty(&filtered)?);
            } else if filtered.is_empty() {
                print_no_windows_message(title_filter);
            } else {
                println!("Visible windows:");
                table::print_windows_table(&filtered);
            }

            info!(event = "cli.list_windows_completed", count = filtered.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to list windows: {}", e);
            error!(event = "cli.list_windows_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Keep windows whose title contains the filter, ignoring case
fn apply_title_filter(windows: Vec<WindowInfo>, title_filter: Option<&String>) -> Vec<WindowInfo> {
    let Some(filter) = title_filter else {
        return windows;
    };

    let filter_lower = filter.to_lowercase();
    windows
        .into_iter()
        .filter(|w| w.title().to_lowercase().contains(&filter_lower))
        .collect()
}

fn print_no_windows_message(title_filter: Option<&String>) {
    if let Some(filter) = title_filter {
        info!(event = "cli.list_windows_title_filter_empty", title = filter);
        println!("No windows found matching '{}'.", filter);
    } else {
        println!("No visible windows found.");
    }
}

fn handle_list_monitors(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(
        event = "cli.list_monitors_started",
        json_output = json_output
    );

    match list_monitors() {
        Ok(monitors) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&monitors)?);
            } else if monitors.is_empty() {
                println!("No monitors found.");
            } else {
                println!("Monitors:");
                table::print_monitors_table(&monitors);
            }

            info!(
                event = "cli.list_monitors_completed",
                count = monitors.len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to list monitors: {}", e);
            error!(event = "cli.list_monitors_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_completions_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let shell = matches
        .get_one::<Shell>("shell")
        .ok_or("Shell argument is required")?;

    let mut cmd = build_cli();
    clap_complete::generate(*shell, &mut cmd, "projector", &mut std::io::stdout());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(id: u32, title: &str) -> WindowInfo {
        WindowInfo::new(
            id,
            title.to_string(),
            "App".to_string(),
            0,
            0,
            800,
            600,
            false,
            None,
        )
    }

    #[test]
    fn test_apply_title_filter_case_insensitive() {
        let windows = vec![window(1, "Unity Hub 3.9.1"), window(2, "Terminal")];
        let filter = "unity".to_string();

        let filtered = apply_title_filter(windows, Some(&filter));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), 1);
    }

    #[test]
    fn test_apply_title_filter_none_keeps_all() {
        let windows = vec![window(1, "Unity Hub 3.9.1"), window(2, "Terminal")];
        assert_eq!(apply_title_filter(windows, None).len(), 2);
    }

    #[test]
    fn test_cli_overrides_only_set_flags() {
        let matches = build_cli()
            .try_get_matches_from(vec!["projector", "run", "--window", "Game", "--width", "1280"])
            .unwrap();
        let run = matches.subcommand_matches("run").unwrap();

        let overrides = cli_overrides(run);
        assert_eq!(overrides.window.title.as_deref(), Some("Game"));
        assert_eq!(overrides.display.width, Some(1280));
        assert_eq!(overrides.display.height, None);
        assert_eq!(overrides.controls, ControlsConfig::default());
    }

    #[test]
    fn test_cli_overrides_win_over_file_config() {
        let file_config = ProjectorConfig {
            window: WindowConfig {
                title: Some("From File".to_string()),
            },
            display: DisplayConfig {
                width: Some(2560),
                height: Some(1440),
                monitor: None,
            },
            controls: ControlsConfig::default(),
        };
        let matches = build_cli()
            .try_get_matches_from(vec!["projector", "run", "--window", "From Flag"])
            .unwrap();
        let run = matches.subcommand_matches("run").unwrap();

        let request = merge_configs(file_config, cli_overrides(run))
            .to_request()
            .unwrap();
        assert_eq!(request.window_title(), "From Flag");
        assert_eq!(request.target().to_string(), "2560x1440");
    }
}
