use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off
pub const DARK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Returns true if every channel of the color is non-zero
///
/// Only lit pixels are marked active by [`crate::PixoDisplay::show_pxl`].
#[inline]
pub const fn is_lit(color: Rgb) -> bool {
    color.r != 0 && color.g != 0 && color.b != 0
}

/// Create an RGB color from a `[r, g, b]` triple
#[inline]
pub const fn rgb_from_triple(triple: [u8; 3]) -> Rgb {
    Rgb {
        r: triple[0],
        g: triple[1],
        b: triple[2],
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
