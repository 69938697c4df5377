//! 8-bit RGB color helpers.
//!
//! Colors are `palette::Srgb<u8>` values. Everything here is integer math so
//! that the same inputs produce the same LED output on every target: linear
//! brightness scaling, gamma correction, `#RRGGBB` strings and the 24-bit and
//! RGB565 packed formats used by display transports.

use heapless::String;
use palette::Srgb;

/// An 8-bit per channel RGB color.
pub type Rgb = Srgb<u8>;

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);

/// Length of a `#RRGGBB` string.
pub const HEX_STRING_LEN: usize = 7;

/// `#RRGGBB` formatted color.
pub type HexString = String<HEX_STRING_LEN>;

/// Gamma 2.6 lookup, `round((i / 255) ^ 2.6 * 255)`.
const GAMMA8: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5, 6, 6, 6, 6, 7,
    7, 7, 8, 8, 8, 9, 9, 9, 10, 10, 10, 11, 11, 11, 12, 12, 13, 13, 13, 14, 14, 15, 15, 16, 16, 17,
    17, 18, 18, 19, 19, 20, 20, 21, 21, 22, 22, 23, 24, 24, 25, 25, 26, 27, 27, 28, 29, 29, 30, 31,
    31, 32, 33, 34, 34, 35, 36, 37, 38, 38, 39, 40, 41, 42, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51,
    52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 68, 69, 70, 71, 72, 73, 75, 76, 77,
    78, 80, 81, 82, 84, 85, 86, 88, 89, 90, 92, 93, 94, 96, 97, 99, 100, 102, 103, 105, 106, 108,
    109, 111, 112, 114, 115, 117, 119, 120, 122, 124, 125, 127, 129, 130, 132, 134, 136, 137, 139,
    141, 143, 145, 146, 148, 150, 152, 154, 156, 158, 160, 162, 164, 166, 168, 170, 172, 174, 176,
    178, 180, 182, 184, 186, 188, 191, 193, 195, 197, 199, 202, 204, 206, 209, 211, 213, 215, 218,
    220, 223, 225, 227, 230, 232, 235, 237, 240, 242, 245, 247, 250, 252, 255,
];

/// Scales a channel linearly: `value * brightness / 255`, rounded down.
#[inline]
pub const fn scale8(value: u8, brightness: u8) -> u8 {
    ((value as u16 * brightness as u16) / 255) as u8
}

/// Perceptual gamma correction for a single channel.
#[inline]
pub const fn gamma8(value: u8) -> u8 {
    GAMMA8[value as usize]
}

/// Gray with all three channels at `level`.
#[inline]
pub const fn gray(level: u8) -> Rgb {
    Rgb::new(level, level, level)
}

/// Returns true if all channels are zero.
#[inline]
pub fn is_black(color: Rgb) -> bool {
    color.red == 0 && color.green == 0 && color.blue == 0
}

/// Scales every channel with [`scale8`].
#[inline]
pub fn scaled(color: Rgb, brightness: u8) -> Rgb {
    Rgb::new(
        scale8(color.red, brightness),
        scale8(color.green, brightness),
        scale8(color.blue, brightness),
    )
}

/// Applies [`gamma8`] to every channel.
#[inline]
pub fn gamma_applied(color: Rgb) -> Rgb {
    Rgb::new(
        gamma8(color.red),
        gamma8(color.green),
        gamma8(color.blue),
    )
}

/// Packs into 16-bit RGB565. Low bits of each channel are dropped.
#[inline]
pub fn pack565(color: Rgb) -> u16 {
    ((color.red as u16 & 0xF8) << 8) | ((color.green as u16 & 0xFC) << 3) | (color.blue as u16 >> 3)
}

/// Packs into `0xRRGGBB`.
#[inline]
pub fn to_packed(color: Rgb) -> u32 {
    ((color.red as u32) << 16) | ((color.green as u32) << 8) | color.blue as u32
}

/// Unpacks `0xRRGGBB`. The top byte is ignored.
#[inline]
pub fn from_packed(packed: u32) -> Rgb {
    Rgb::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
}

/// Converts to a normalized `Srgb<f32>` (0.0-1.0) for sinks that drive PWM directly.
#[inline]
pub fn to_normalized(color: Rgb) -> Srgb<f32> {
    color.into_format()
}

/// Formats as `#RRGGBB` with uppercase hex digits.
pub fn to_hex_string(color: Rgb) -> HexString {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = HexString::new();
    // Capacity is exactly seven bytes, every push below fits.
    let _ = out.push('#');
    for channel in [color.red, color.green, color.blue] {
        let _ = out.push(DIGITS[(channel >> 4) as usize] as char);
        let _ = out.push(DIGITS[(channel & 0x0F) as usize] as char);
    }
    out
}

/// Parses a `#RRGGBB` string.
///
/// Returns [`BLACK`] for `None` or anything shorter than seven bytes. The
/// leading byte is skipped without being checked and each channel is read
/// from its fixed two-byte slot. Digits are not validated: a slot is parsed
/// the way C's `strtol(slot, NULL, 16)` would, so `"0G"` reads as `0`, `"1G"`
/// as `1` and a slot with no leading hex digit as `0`.
pub fn from_hex_string(text: Option<&str>) -> Rgb {
    let bytes = match text {
        Some(text) if text.len() >= HEX_STRING_LEN => text.as_bytes(),
        _ => return BLACK,
    };

    Rgb::new(
        parse_hex_slot([bytes[1], bytes[2]]),
        parse_hex_slot([bytes[3], bytes[4]]),
        parse_hex_slot([bytes[5], bytes[6]]),
    )
}

/// `strtol` over a two byte slot, truncated to 8 bits.
fn parse_hex_slot(slot: [u8; 2]) -> u8 {
    let mut digits = slot.iter().copied().skip_while(|b| b.is_ascii_whitespace()).peekable();

    let negative = match digits.peek() {
        Some(b'-') => {
            digits.next();
            true
        }
        Some(b'+') => {
            digits.next();
            false
        }
        _ => false,
    };

    let mut value: u8 = 0;
    for digit in digits {
        match (digit as char).to_digit(16) {
            Some(d) => value = value.wrapping_mul(16).wrapping_add(d as u8),
            None => break,
        }
    }

    if negative { value.wrapping_neg() } else { value }
}
