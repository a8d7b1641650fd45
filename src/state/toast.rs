//! Transient toast notifications

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Default time a toast stays on screen
pub const DEFAULT_AUTO_CLOSE: Duration = Duration::from_millis(1000);

/// Screen corner a toast is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    BottomRight,
}

/// Colour scheme for toasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastTheme {
    #[default]
    Dark,
    Light,
}

/// Display options passed along with a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastOptions {
    pub position: ToastPosition,
    pub auto_close: Duration,
    pub theme: ToastTheme,
    pub show_progress: bool,
    /// Whether the dismiss key clears this toast
    pub close_on_click: bool,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: ToastPosition::TopRight,
            auto_close: DEFAULT_AUTO_CLOSE,
            theme: ToastTheme::Dark,
            show_progress: true,
            close_on_click: true,
        }
    }
}

/// Anything that can show a user-facing alert. Fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink {
    fn notify(&mut self, message: &str, options: ToastOptions);
}

/// A toast currently on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub options: ToastOptions,
    pub created_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.options.auto_close
    }

    /// Fraction of the progress bar still filled (1.0 when fresh, 0.0 when due)
    pub fn remaining(&self, now: Instant) -> f32 {
        let total = self.options.auto_close.as_secs_f32();
        if total <= f32::EPSILON {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.created_at).as_secs_f32();
        let progress = (elapsed / total).clamp(0.0, 1.0);
        1.0 - simple_easing::cubic_out(progress)
    }
}

/// Stack of visible toasts, newest last
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push_at(&mut self, message: &str, options: ToastOptions, now: Instant) {
        self.toasts.push(Toast {
            message: message.to_string(),
            options,
            created_at: now,
        });
    }

    /// Drop toasts whose auto-close time has passed. Returns how many were removed.
    pub fn prune_expired(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now));
        before - self.toasts.len()
    }

    /// Dismiss every toast that allows manual closing
    pub fn dismiss_all(&mut self) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.options.close_on_click);
        before - self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&mut self, message: &str, options: ToastOptions) {
        self.push_at(message, options, Instant::now());
    }
}
