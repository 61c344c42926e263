//! Table-driven power state machine (boot splash, standby, reboot).
//!
//! Timed transitions are not run here: a step hands back a [`ScheduledTransition`] and the host
//! reports the elapsed timer with its token. Only the single pending item's token is accepted.

use std::{fmt, time::Duration};

use thiserror::Error;

use crate::config::PowerTimings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    Booting,
    Active,
    EnteringStandby,
    Standby,
    WakingUp,
    Rebooting,
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerEvent {
    PowerOn,
    SplashFinished,
    StandbyRequested,
    PauseFinished,
    WakeRequested,
    RebootRequested,
    RebootFinished,
}

impl fmt::Display for PowerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Full-screen layer drawn over the desktop.
pub enum PowerOverlay {
    None,
    Splash,
    Paused,
    Standby,
    Rebooting,
}

impl PowerOverlay {
    /// Glyph for the black transition screens.
    pub const fn glyph(self) -> Option<&'static str> {
        match self {
            Self::Paused => Some("⏸"),
            Self::Rebooting => Some("🔄"),
            Self::None | Self::Splash | Self::Standby => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Session-wide command a transition applies to the window manager.
pub enum PowerCommand {
    HideAllWindows,
    ResetSession,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTransition {
    pub token: u64,
    pub event: PowerEvent,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One row of the transition table.
pub struct TransitionRow {
    pub next: PowerState,
    pub overlay: PowerOverlay,
    pub command: Option<PowerCommand>,
    pub schedule: Option<(PowerEvent, Duration)>,
}

/// Looks up `(state, event)` in the transition table.
pub fn transition(
    state: PowerState,
    event: PowerEvent,
    timings: &PowerTimings,
) -> Option<TransitionRow> {
    use PowerEvent as E;
    use PowerState as S;

    let row = |next, overlay, command, schedule| TransitionRow {
        next,
        overlay,
        command,
        schedule,
    };
    let splash = Some((E::SplashFinished, timings.splash));
    let pause = Some((E::PauseFinished, timings.pause));

    match (state, event) {
        (S::Booting, E::PowerOn) => Some(row(S::Booting, PowerOverlay::Splash, None, splash)),
        (S::Booting, E::SplashFinished) => Some(row(S::Active, PowerOverlay::None, None, None)),
        (S::Active, E::StandbyRequested) => Some(row(
            S::EnteringStandby,
            PowerOverlay::Paused,
            Some(PowerCommand::HideAllWindows),
            pause,
        )),
        (S::EnteringStandby, E::PauseFinished) => {
            Some(row(S::Standby, PowerOverlay::Standby, None, None))
        }
        (S::Standby, E::WakeRequested) => Some(row(S::WakingUp, PowerOverlay::Paused, None, pause)),
        (S::WakingUp, E::PauseFinished) => {
            Some(row(S::Booting, PowerOverlay::Splash, None, splash))
        }
        (S::Active, E::RebootRequested) => Some(row(
            S::Rebooting,
            PowerOverlay::Rebooting,
            Some(PowerCommand::ResetSession),
            Some((E::RebootFinished, timings.reboot)),
        )),
        (S::Rebooting, E::RebootFinished) => {
            Some(row(S::Booting, PowerOverlay::Splash, None, splash))
        }
        _ => None,
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PowerError {
    #[error("no power transition for {event} in state {state}")]
    InvalidTransition { state: PowerState, event: PowerEvent },
    #[error("power timer {token} is not pending")]
    StaleTimer { token: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// What the caller must apply after a successful transition.
pub struct PowerStep {
    pub command: Option<PowerCommand>,
    pub scheduled: Option<ScheduledTransition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerStateMachine {
    state: PowerState,
    overlay: PowerOverlay,
    pending: Option<ScheduledTransition>,
    next_token: u64,
    timings: PowerTimings,
}

impl PowerStateMachine {
    /// Starts in [`PowerState::Booting`] behind the splash, waiting for `PowerOn`.
    pub fn new(timings: PowerTimings) -> Self {
        Self {
            state: PowerState::Booting,
            overlay: PowerOverlay::Splash,
            pending: None,
            next_token: 0,
            timings,
        }
    }

    /// Applies `event`.
    ///
    /// # Errors
    ///
    /// Returns [`PowerError::InvalidTransition`] and leaves the machine untouched when the table
    /// has no row for the current state and `event`.
    pub fn fire(&mut self, event: PowerEvent) -> Result<PowerStep, PowerError> {
        let row = transition(self.state, event, &self.timings).ok_or(
            PowerError::InvalidTransition {
                state: self.state,
                event,
            },
        )?;
        self.state = row.next;
        self.overlay = row.overlay;
        self.pending = row.schedule.map(|(event, delay)| {
            self.next_token += 1;
            ScheduledTransition {
                token: self.next_token,
                event,
                delay,
            }
        });
        Ok(PowerStep {
            command: row.command,
            scheduled: self.pending,
        })
    }

    /// Fires the pending event when `token` matches it.
    ///
    /// # Errors
    ///
    /// Returns [`PowerError::StaleTimer`] for any token other than the pending one.
    pub fn timer_elapsed(&mut self, token: u64) -> Result<PowerStep, PowerError> {
        match self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                self.fire(pending.event)
            }
            _ => Err(PowerError::StaleTimer { token }),
        }
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    pub fn overlay(&self) -> PowerOverlay {
        self.overlay
    }

    pub fn pending(&self) -> Option<ScheduledTransition> {
        self.pending
    }
}

impl Default for PowerStateMachine {
    fn default() -> Self {
        Self::new(PowerTimings::default())
    }
}
