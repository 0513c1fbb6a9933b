use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::display::TargetMonitor;
use crate::frame::TargetResolution;

/// Key that stops the projection unless configured otherwise
pub const DEFAULT_QUIT_KEY: char = 'q';

/// Bounded keypress wait per iteration, in milliseconds
pub const DEFAULT_POLL_TIMEOUT_MS: u64 = 1;

/// Everything the projection loop needs, fixed for the whole run
#[derive(Debug, Clone)]
pub struct ProjectionRequest {
    window_title: String,
    target: TargetResolution,
    quit_key: char,
    poll_timeout: Duration,
    monitor: TargetMonitor,
    max_frames: Option<u64>,
}

impl ProjectionRequest {
    pub fn new(window_title: impl Into<String>, target: TargetResolution) -> Self {
        Self {
            window_title: window_title.into(),
            target,
            quit_key: DEFAULT_QUIT_KEY,
            poll_timeout: Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS),
            monitor: TargetMonitor::default(),
            max_frames: None,
        }
    }

    pub fn with_quit_key(mut self, quit_key: char) -> Self {
        self.quit_key = quit_key;
        self
    }

    pub fn with_poll_timeout(mut self, poll_timeout: Duration) -> Self {
        self.poll_timeout = poll_timeout;
        self
    }

    pub fn with_monitor(mut self, monitor: TargetMonitor) -> Self {
        self.monitor = monitor;
        self
    }

    /// Stop after rendering this many frames
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }
    pub fn target(&self) -> TargetResolution {
        self.target
    }
    pub fn quit_key(&self) -> char {
        self.quit_key
    }
    pub fn poll_timeout(&self) -> Duration {
        self.poll_timeout
    }
    pub fn monitor(&self) -> TargetMonitor {
        self.monitor
    }
    pub fn max_frames(&self) -> Option<u64> {
        self.max_frames
    }
}

/// Why the projection loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    QuitKey,
    FrameLimit,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::QuitKey => "quit_key",
            StopReason::FrameLimit => "frame_limit",
        }
    }
}

/// Outcome of a projection run that ended without error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub window_title: String,
    pub frames_rendered: u64,
    pub activation_failures: u64,
    pub stop_reason: StopReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let target = TargetResolution::new(1920, 1080).unwrap();
        let request = ProjectionRequest::new("Unity Hub 3.9.1", target);

        assert_eq!(request.window_title(), "Unity Hub 3.9.1");
        assert_eq!(request.target(), target);
        assert_eq!(request.quit_key(), 'q');
        assert_eq!(request.poll_timeout(), Duration::from_millis(1));
        assert_eq!(request.monitor(), TargetMonitor::Secondary);
        assert_eq!(request.max_frames(), None);
    }

    #[test]
    fn test_request_builders() {
        let target = TargetResolution::new(1280, 720).unwrap();
        let request = ProjectionRequest::new("Game", target)
            .with_quit_key('x')
            .with_poll_timeout(Duration::from_millis(5))
            .with_monitor(TargetMonitor::Index {
                index: 1,
                position: None,
            })
            .with_max_frames(10);

        assert_eq!(request.quit_key(), 'x');
        assert_eq!(request.poll_timeout(), Duration::from_millis(5));
        assert_eq!(request.max_frames(), Some(10));
        assert!(matches!(
            request.monitor(),
            TargetMonitor::Index { index: 1, .. }
        ));
    }

    #[test]
    fn test_summary_serializes_stop_reason() {
        let summary = ProjectionSummary {
            window_title: "Game".to_string(),
            frames_rendered: 3,
            activation_failures: 0,
            stop_reason: StopReason::QuitKey,
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains(r#""stop_reason":"quit_key""#));
        assert_eq!(StopReason::FrameLimit.as_str(), "frame_limit");
    }
}
