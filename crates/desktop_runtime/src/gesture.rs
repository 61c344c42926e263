//! Tap-count touch gesture protocol.
//!
//! One tracker per touch target. A lone tap opens the target once the tap window elapses, a
//! second tap inside the window asks for the context menu, and moving past the tolerance
//! cancels the sequence. Every sequence yields at most one outcome.

use std::time::Duration;

use crate::{config::GestureConfig, model::PointerPosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the host should do after feeding a touch event to the tracker.
pub enum TapOutcome {
    /// Nothing to do.
    Idle,
    /// Start a timer that reports `token` back through [`TapGestureTracker::timer_elapsed`].
    ArmTimer { token: u64, delay: Duration },
    /// Double tap: show the context menu at `at`.
    ShowMenu { at: PointerPosition },
    /// Single tap confirmed: open the target's window.
    Open,
    /// Movement cancelled the pending tap.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TapPhase {
    Idle,
    Armed { token: u64, start: PointerPosition },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapGestureTracker {
    config: GestureConfig,
    phase: TapPhase,
    next_token: u64,
}

impl TapGestureTracker {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: TapPhase::Idle,
            next_token: 0,
        }
    }

    pub fn touch_start(&mut self, point: PointerPosition) -> TapOutcome {
        match self.phase {
            TapPhase::Idle => {
                self.next_token += 1;
                let token = self.next_token;
                self.phase = TapPhase::Armed {
                    token,
                    start: point,
                };
                TapOutcome::ArmTimer {
                    token,
                    delay: self.config.tap_window,
                }
            }
            TapPhase::Armed { .. } => {
                self.phase = TapPhase::Idle;
                TapOutcome::ShowMenu { at: point }
            }
        }
    }

    pub fn touch_move(&mut self, point: PointerPosition) -> TapOutcome {
        let TapPhase::Armed { start, .. } = self.phase else {
            return TapOutcome::Idle;
        };
        let tolerance = self.config.move_tolerance_px;
        if (point.x - start.x).abs() > tolerance || (point.y - start.y).abs() > tolerance {
            self.phase = TapPhase::Idle;
            TapOutcome::Cancelled
        } else {
            TapOutcome::Idle
        }
    }

    /// Timer callback. Tokens from disarmed sequences are ignored.
    pub fn timer_elapsed(&mut self, token: u64) -> TapOutcome {
        match self.phase {
            TapPhase::Armed { token: armed, .. } if armed == token => {
                self.phase = TapPhase::Idle;
                TapOutcome::Open
            }
            _ => TapOutcome::Idle,
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.phase, TapPhase::Armed { .. })
    }
}

impl Default for TapGestureTracker {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

const SELF_HANDLED_TAGS: [&str; 5] = ["BUTTON", "INPUT", "TEXTAREA", "SELECT", "A"];

/// Whether a touch belongs to the trigger's tracker.
///
/// `path_tags` lists the element tags from the touched node up to, but excluding, the trigger.
/// Touches that land inside a nested button, link or form field are left to that control.
pub fn touch_feeds_tracker<'a>(path_tags: impl IntoIterator<Item = &'a str>) -> bool {
    !path_tags.into_iter().any(|tag| {
        SELF_HANDLED_TAGS
            .iter()
            .any(|handled| handled.eq_ignore_ascii_case(tag))
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn armed_token(outcome: TapOutcome) -> u64 {
        match outcome {
            TapOutcome::ArmTimer { token, delay } => {
                assert_eq!(delay, Duration::from_millis(500));
                token
            }
            other => panic!("expected timer, got {other:?}"),
        }
    }

    #[test]
    fn single_tap_opens_after_timer() {
        let mut tracker = TapGestureTracker::default();
        let token = armed_token(tracker.touch_start(PointerPosition::new(20, 20)));
        assert_eq!(tracker.touch_move(PointerPosition::new(30, 28)), TapOutcome::Idle);
        assert_eq!(tracker.timer_elapsed(token), TapOutcome::Open);
        assert!(!tracker.is_armed());
    }

    #[test]
    fn double_tap_shows_menu_and_disarms_timer() {
        let mut tracker = TapGestureTracker::default();
        let token = armed_token(tracker.touch_start(PointerPosition::new(20, 20)));
        assert_eq!(
            tracker.touch_start(PointerPosition::new(22, 21)),
            TapOutcome::ShowMenu {
                at: PointerPosition::new(22, 21)
            }
        );
        assert_eq!(tracker.timer_elapsed(token), TapOutcome::Idle);
    }

    #[test]
    fn movement_beyond_tolerance_cancels() {
        let mut tracker = TapGestureTracker::default();
        let token = armed_token(tracker.touch_start(PointerPosition::new(20, 20)));
        assert_eq!(tracker.touch_move(PointerPosition::new(20, 36)), TapOutcome::Cancelled);
        assert_eq!(tracker.timer_elapsed(token), TapOutcome::Idle);
    }

    #[test]
    fn stale_token_from_earlier_sequence_is_ignored() {
        let mut tracker = TapGestureTracker::default();
        let first = armed_token(tracker.touch_start(PointerPosition::new(0, 0)));
        tracker.touch_move(PointerPosition::new(100, 0));
        let second = armed_token(tracker.touch_start(PointerPosition::new(0, 0)));
        assert_ne!(first, second);
        assert_eq!(tracker.timer_elapsed(first), TapOutcome::Idle);
        assert_eq!(tracker.timer_elapsed(second), TapOutcome::Open);
    }

    #[test]
    fn touches_on_nested_controls_skip_the_tracker() {
        assert!(touch_feeds_tracker(std::iter::empty()));
        assert!(touch_feeds_tracker(["SPAN", "DIV"]));
        assert!(!touch_feeds_tracker(["BUTTON"]));
        assert!(!touch_feeds_tracker(["span", "button"]));
        assert!(!touch_feeds_tracker(["INPUT"]));
    }

    #[test]
    fn move_without_touch_is_idle() {
        let mut tracker = TapGestureTracker::default();
        assert_eq!(tracker.touch_move(PointerPosition::new(90, 90)), TapOutcome::Idle);
    }
}
