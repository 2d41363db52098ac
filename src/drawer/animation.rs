//! Entrance animation timing. Purely cosmetic; rendered as inline styles.

use crate::config::EntranceStagger;

pub const EASE_STANDARD: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
pub const HEADER_DELAY_MS: u32 = 100;
pub const OVERLAY_FADE_MS: u32 = 300;

impl EntranceStagger {
    pub fn delay_ms(&self, index: usize) -> u32 {
        self.step_ms.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Inline style for the entry at `index`
    pub fn entry_style(&self, index: usize) -> String {
        format!(
            "animation: drawer-entry-in {}ms {} {}ms both;",
            self.duration_ms,
            EASE_STANDARD,
            self.delay_ms(index)
        )
    }
}

/// Left offset of the desktop toggle button so it rides the drawer edge
pub fn toggle_button_style(desktop_open: bool) -> String {
    let left = if desktop_open { "200px" } else { "16px" };
    format!("left: {left}; transition: left 0.3s {EASE_STANDARD};")
}

pub fn header_style(duration_ms: u32) -> String {
    format!("animation: drawer-header-in {duration_ms}ms ease-out {HEADER_DELAY_MS}ms both;")
}

pub fn overlay_style() -> String {
    format!("animation: drawer-fade-in {OVERLAY_FADE_MS}ms ease-out both;")
}
