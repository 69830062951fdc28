//! Tick-driven UI state machines.
//!
//! Pure data advanced by an external `tick(dt)`; every suspension point is
//! a named state, not implicit control flow. The host decides the frame
//! pacing and reads `alpha`/`visible`/`progress` back out for rendering.

use serde::{Deserialize, Serialize};

/// Where a fade is in its life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FadePhase {
    FadingIn,
    Holding,
    FadingOut,
    Done,
}

/// Fade-in, hold, fade-out alpha envelope
#[derive(Debug, Clone, PartialEq)]
pub struct Fade {
    phase: FadePhase,
    elapsed: f32,
    fade_in: f32,
    hold: f32,
    fade_out: f32,
}

impl Fade {
    pub fn new(fade_in: f32, hold: f32, fade_out: f32) -> Self {
        let mut fade = Self {
            phase: FadePhase::FadingIn,
            elapsed: 0.0,
            fade_in: fade_in.max(0.0),
            hold: hold.max(0.0),
            fade_out: fade_out.max(0.0),
        };
        // skip zero-duration leading phases
        fade.tick(0.0);
        fade
    }

    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == FadePhase::Done
    }

    pub fn tick(&mut self, dt: f32) {
        if self.is_done() {
            return;
        }
        self.elapsed += dt.max(0.0);
        while self.phase != FadePhase::Done && self.elapsed >= self.duration() {
            self.elapsed -= self.duration();
            self.phase = match self.phase {
                FadePhase::FadingIn => FadePhase::Holding,
                FadePhase::Holding => FadePhase::FadingOut,
                FadePhase::FadingOut | FadePhase::Done => FadePhase::Done,
            };
        }
    }

    /// Opacity in `[0, 1]` for the current frame
    pub fn alpha(&self) -> f32 {
        match self.phase {
            FadePhase::FadingIn => (self.elapsed / self.fade_in).clamp(0.0, 1.0),
            FadePhase::Holding => 1.0,
            FadePhase::FadingOut => 1.0 - (self.elapsed / self.fade_out).clamp(0.0, 1.0),
            FadePhase::Done => 0.0,
        }
    }

    fn duration(&self) -> f32 {
        match self.phase {
            FadePhase::FadingIn => self.fade_in,
            FadePhase::Holding => self.hold,
            FadePhase::FadingOut => self.fade_out,
            FadePhase::Done => 0.0,
        }
    }
}

/// Reveals a string at a chars-per-second rate
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    text: String,
    chars_per_sec: f32,
    revealed: f32,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, chars_per_sec: f32) -> Self {
        let mut writer = Self {
            text: text.into(),
            chars_per_sec,
            revealed: 0.0,
        };
        // a non-positive rate means instant reveal
        if writer.chars_per_sec <= 0.0 {
            writer.skip();
        }
        writer
    }

    pub fn tick(&mut self, dt: f32) {
        let total = self.text.chars().count() as f32;
        self.revealed = (self.revealed + self.chars_per_sec * dt.max(0.0)).min(total);
    }

    /// The revealed prefix, always on a char boundary
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.revealed as usize) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    /// Jump to the end
    pub fn skip(&mut self) {
        self.revealed = self.text.chars().count() as f32;
    }

    pub fn is_done(&self) -> bool {
        self.revealed as usize >= self.text.chars().count()
    }
}

/// Where a popup is in its life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PopupPhase {
    Opening,
    Open,
    Closing,
    Closed,
}

/// Open tween, countdown, close tween
#[derive(Debug, Clone, PartialEq)]
pub struct PopupTimer {
    phase: PopupPhase,
    elapsed: f32,
    open_time: f32,
    hold: f32,
    close_time: f32,
}

impl PopupTimer {
    pub fn new(open_time: f32, hold: f32, close_time: f32) -> Self {
        let mut timer = Self {
            phase: PopupPhase::Opening,
            elapsed: 0.0,
            open_time: open_time.max(0.0),
            hold: hold.max(0.0),
            close_time: close_time.max(0.0),
        };
        timer.tick(0.0);
        timer
    }

    pub fn phase(&self) -> PopupPhase {
        self.phase
    }

    pub fn is_closed(&self) -> bool {
        self.phase == PopupPhase::Closed
    }

    pub fn tick(&mut self, dt: f32) {
        if self.is_closed() {
            return;
        }
        self.elapsed += dt.max(0.0);
        while self.phase != PopupPhase::Closed && self.elapsed >= self.duration() {
            self.elapsed -= self.duration();
            self.phase = match self.phase {
                PopupPhase::Opening => PopupPhase::Open,
                PopupPhase::Open => PopupPhase::Closing,
                PopupPhase::Closing | PopupPhase::Closed => PopupPhase::Closed,
            };
        }
    }

    /// Close early, skipping whatever remains of the countdown
    pub fn dismiss(&mut self) {
        if matches!(self.phase, PopupPhase::Opening | PopupPhase::Open) {
            self.phase = PopupPhase::Closing;
            self.elapsed = 0.0;
            if self.close_time <= 0.0 {
                self.phase = PopupPhase::Closed;
            }
        }
    }

    /// Scalar for the open/close tween: 0 fully closed, 1 fully open
    pub fn progress(&self) -> f32 {
        match self.phase {
            PopupPhase::Opening => (self.elapsed / self.open_time).clamp(0.0, 1.0),
            PopupPhase::Open => 1.0,
            PopupPhase::Closing => 1.0 - (self.elapsed / self.close_time).clamp(0.0, 1.0),
            PopupPhase::Closed => 0.0,
        }
    }

    fn duration(&self) -> f32 {
        match self.phase {
            PopupPhase::Opening => self.open_time,
            PopupPhase::Open => self.hold,
            PopupPhase::Closing => self.close_time,
            PopupPhase::Closed => 0.0,
        }
    }
}
