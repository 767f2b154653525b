//! Focus Timer
//!
//! Pomodoro-style countdown. Pure state machine: the caller drives it with
//! [`FocusTimer::tick`] once per second, typically from a `tokio::time`
//! interval.

/// Countdown presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusMode {
    /// 25-minute work session.
    #[default]
    Pomodoro,
    /// 5-minute break.
    ShortBreak,
    /// 15-minute break.
    LongBreak,
}

impl FocusMode {
    /// Session length in seconds.
    #[must_use]
    pub const fn duration_secs(self) -> u32 {
        match self {
            Self::Pomodoro => 25 * 60,
            Self::ShortBreak => 5 * 60,
            Self::LongBreak => 15 * 60,
        }
    }
}

/// A single countdown session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTimer {
    mode: FocusMode,
    remaining_secs: u32,
    active: bool,
}

impl FocusTimer {
    /// A paused Pomodoro at full duration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(FocusMode::default())
    }

    /// A paused timer at the given mode's full duration.
    #[must_use]
    pub const fn with_mode(mode: FocusMode) -> Self {
        Self {
            mode,
            remaining_secs: mode.duration_secs(),
            active: false,
        }
    }

    /// Begin or resume the countdown. A finished timer stays stopped.
    pub fn start(&mut self) {
        if self.remaining_secs > 0 {
            self.active = true;
        }
    }

    /// Halt the countdown without losing the remaining time.
    pub fn pause(&mut self) {
        self.active = false;
    }

    /// Stop and restore the full duration, switching to `mode`.
    pub fn reset(&mut self, mode: FocusMode) {
        *self = Self::with_mode(mode);
    }

    /// Advance one second. Does nothing while paused; stops at zero.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.active = false;
        }
    }

    /// Whether the countdown is running.
    #[must_use]
    pub const fn is_active(self) -> bool {
        self.active
    }

    /// Whether the countdown has reached zero.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        self.remaining_secs == 0
    }

    /// The current preset.
    #[must_use]
    pub const fn mode(self) -> FocusMode {
        self.mode
    }

    /// Seconds left on the clock.
    #[must_use]
    pub const fn remaining_secs(self) -> u32 {
        self.remaining_secs
    }

    /// The remaining time as zero-padded `MM:SS`.
    #[must_use]
    pub fn remaining_display(self) -> String {
        let minutes = self.remaining_secs / 60;
        let seconds = self.remaining_secs % 60;
        format!("{minutes:02}:{seconds:02}")
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}
