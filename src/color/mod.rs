mod palette;
mod slot;

pub use palette::{DEFAULT_GREEN, DEFAULT_RED, DEFAULT_YELLOW, Palette};
pub use slot::ColorSlot;
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Fully dark panel color
pub const BLACK: Rgb = rgb_from_u32(0x00_0000);

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
