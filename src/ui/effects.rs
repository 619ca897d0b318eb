//! Terminal stand-in for the watch vibration motor.
//!
//! A haptic pattern becomes a colored border flash:
//! - Short: one quick pulse when the player is hit
//! - Double: two pulses when a monster appears
//! - Long: one sustained pulse on death

use crate::core::constants::{HAPTIC_DOUBLE_MS, HAPTIC_LONG_MS, HAPTIC_SHORT_MS};
use crate::core::events::HapticPattern;
use ratatui::style::Color;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct HapticFlash {
    active: Option<(HapticPattern, Instant)>,
}

impl HapticFlash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a pattern, replacing whatever was playing.
    pub fn trigger(&mut self, pattern: HapticPattern, now: Instant) {
        self.active = Some((pattern, now));
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.border_color(now).is_some()
    }

    /// Border color for this frame, or None when nothing is vibrating.
    pub fn border_color(&self, now: Instant) -> Option<Color> {
        let (pattern, started) = self.active?;
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= pattern_length(pattern) {
            return None;
        }

        match pattern {
            HapticPattern::Short => Some(Color::Red),
            HapticPattern::Long => Some(Color::Magenta),
            HapticPattern::Double => {
                // on, off, on in equal thirds
                let third = pattern_length(pattern) / 3;
                if elapsed >= third && elapsed < third * 2 {
                    None
                } else {
                    Some(Color::Yellow)
                }
            }
        }
    }
}

fn pattern_length(pattern: HapticPattern) -> Duration {
    Duration::from_millis(match pattern {
        HapticPattern::Short => HAPTIC_SHORT_MS,
        HapticPattern::Double => HAPTIC_DOUBLE_MS,
        HapticPattern::Long => HAPTIC_LONG_MS,
    })
}
