//! Colors bound to the traffic light slots

use super::slot::SLOT_COUNT;
use super::{ColorSlot, Rgb, rgb_from_u32};

pub const DEFAULT_RED: Rgb = rgb_from_u32(0xFF_0000);
pub const DEFAULT_YELLOW: Rgb = rgb_from_u32(0xFF_FF00);
pub const DEFAULT_GREEN: Rgb = rgb_from_u32(0x00_FF00);

/// Slot to color mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; SLOT_COUNT],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [DEFAULT_RED, DEFAULT_YELLOW, DEFAULT_GREEN],
        }
    }
}

impl Palette {
    /// Build a palette from user colors.
    ///
    /// The first colors override red, yellow and green in order. Missing
    /// entries keep their defaults, extra entries are ignored.
    pub fn from_user_colors(user_colors: &[Rgb]) -> Self {
        let mut palette = Self::default();
        for (slot, color) in palette.colors.iter_mut().zip(user_colors) {
            *slot = *color;
        }
        palette
    }

    /// Color bound to the slot
    pub const fn color(&self, slot: ColorSlot) -> Rgb {
        self.colors[slot.index()]
    }
}
