//! Shell thresholds and timings.
//!
//! Every constant has a matching field on [`ShellConfig`] so headless tests can run the state
//! machines with shortened or reshaped settings.

use std::time::Duration;

/// Viewport width at or below which windows open fullscreen and single taps open icons.
pub const MOBILE_BREAKPOINT_PX: i32 = 700;
/// Minimum gap kept between a context menu and the viewport edges.
pub const MENU_MARGIN_PX: i32 = 5;
/// Number of apps tracked by the dock recent list.
pub const RECENT_CAPACITY: usize = 2;
/// First z-index handed out by the focus counter.
pub const Z_INDEX_BASE: u32 = 500;
/// Window for a second tap, and delay before a lone tap opens its window.
pub const TAP_WINDOW_MS: u64 = 500;
/// Movement on either axis that cancels a pending tap.
pub const TAP_MOVE_TOLERANCE_PX: i32 = 15;
/// Vibration pulse emitted when a context menu opens.
pub const HAPTIC_PULSE_MS: u32 = 10;
/// Splash screen duration.
pub const SPLASH_MS: u64 = 2500;
/// Black "paused" screen duration when entering or leaving standby.
pub const PAUSE_MS: u64 = 1500;
/// Black reboot screen duration.
pub const REBOOT_MS: u64 = 3000;
/// Rendered context menu width used for clamping.
pub const CONTEXT_MENU_WIDTH_PX: i32 = 160;
/// Rendered context menu height used for clamping.
pub const CONTEXT_MENU_HEIGHT_PX: i32 = 112;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Tap-count gesture thresholds.
pub struct GestureConfig {
    pub tap_window: Duration,
    pub move_tolerance_px: i32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_window: Duration::from_millis(TAP_WINDOW_MS),
            move_tolerance_px: TAP_MOVE_TOLERANCE_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Durations of the timed power transitions.
pub struct PowerTimings {
    pub splash: Duration,
    pub pause: Duration,
    pub reboot: Duration,
}

impl Default for PowerTimings {
    fn default() -> Self {
        Self {
            splash: Duration::from_millis(SPLASH_MS),
            pause: Duration::from_millis(PAUSE_MS),
            reboot: Duration::from_millis(REBOOT_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Context menu footprint in CSS pixels.
pub struct MenuSize {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Complete shell configuration.
pub struct ShellConfig {
    pub gestures: GestureConfig,
    pub power: PowerTimings,
    pub recent_capacity: usize,
    pub mobile_breakpoint_px: i32,
    pub menu_margin_px: i32,
    pub context_menu_size: MenuSize,
    pub z_index_base: u32,
    pub haptic_pulse_ms: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            gestures: GestureConfig::default(),
            power: PowerTimings::default(),
            recent_capacity: RECENT_CAPACITY,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            menu_margin_px: MENU_MARGIN_PX,
            context_menu_size: MenuSize {
                width: CONTEXT_MENU_WIDTH_PX,
                height: CONTEXT_MENU_HEIGHT_PX,
            },
            z_index_base: Z_INDEX_BASE,
            haptic_pulse_ms: HAPTIC_PULSE_MS,
        }
    }
}

impl ShellConfig {
    /// Returns whether `viewport_width` is in the mobile layout range.
    pub const fn is_mobile_width(&self, viewport_width: i32) -> bool {
        viewport_width <= self.mobile_breakpoint_px
    }
}
