//! Loading indicator visibility window

use std::time::{Duration, Instant};

/// Tracks when loading started and caps how long the indicator stays visible.
/// Purely cosmetic: the request itself is never timed out.
#[derive(Debug, Default)]
pub struct LoadingWindow {
    started_at: Option<Instant>,
}

impl LoadingWindow {
    /// How long the indicator may stay up for one loading period
    pub const MAX_VISIBLE: Duration = Duration::from_millis(5555);

    /// Feed the current loading flag. A rising edge restarts the window,
    /// a falling edge closes it.
    pub fn update(&mut self, loading: bool, now: Instant) {
        match (loading, self.started_at) {
            (true, None) => self.started_at = Some(now),
            (false, Some(_)) => self.started_at = None,
            _ => {}
        }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_duration_since(start) < Self::MAX_VISIBLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_when_idle() {
        let window = LoadingWindow::default();
        assert!(!window.is_visible(Instant::now()));
    }

    #[test]
    fn test_visible_while_loading() {
        let mut window = LoadingWindow::default();
        let start = Instant::now();
        window.update(true, start);
        assert!(window.is_visible(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_hidden_after_max_visible() {
        let mut window = LoadingWindow::default();
        let start = Instant::now();
        window.update(true, start);
        window.update(true, start + Duration::from_secs(3));
        assert!(!window.is_visible(start + Duration::from_millis(5555)));
    }

    #[test]
    fn test_stop_then_start_restarts_window() {
        let mut window = LoadingWindow::default();
        let start = Instant::now();
        window.update(true, start);
        window.update(false, start + Duration::from_secs(6));
        assert!(!window.is_visible(start + Duration::from_secs(6)));

        let restart = start + Duration::from_secs(7);
        window.update(true, restart);
        assert!(window.is_visible(restart + Duration::from_secs(1)));
    }
}
