//! Integer HSV color with a 16-bit hue.
//!
//! The hue covers the whole `u16` range so it can roll over freely in either
//! direction. The 8-bit RGB hexcone only has 1530 distinct hues, so converting
//! RGB -> HSV -> RGB is lossy.

use crate::colors::Rgb;

/// Start of the green-dominant hue band.
const GREEN_BAND: i32 = 21760;
/// Start of the blue-dominant hue band.
const BLUE_BAND: i32 = 43776;
/// Hue distance covered by one full channel swing within a band.
const BAND_HALF: i32 = 11008;

/// Number of distinct hues in the 8-bit hexcone.
const HEXCONE_HUES: u32 = 1530;

/// HSV color: 16-bit hue, 8-bit saturation and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub hue: u16,
    pub saturation: u8,
    pub value: u8,
}

impl Hsv {
    #[inline]
    pub const fn new(hue: u16, saturation: u8, value: u8) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Fully saturated, full value color at `hue`.
    #[inline]
    pub const fn from_hue(hue: u16) -> Self {
        Self::new(hue, 255, 255)
    }

    /// Same hue and saturation with a different value.
    #[inline]
    pub const fn with_value(self, value: u8) -> Self {
        Self::new(self.hue, self.saturation, value)
    }

    /// Hexcone decomposition of an RGB color.
    ///
    /// Black maps to `(0, 0, 0)` and grays to `(0, 0, v)`. Otherwise the hue
    /// lands in the band of the dominant channel (red at 0, green at 21760,
    /// blue at 43776) and is offset by the difference of the other two
    /// channels relative to the chroma.
    pub fn from_rgb(color: Rgb) -> Self {
        let (r, g, b) = (color.red as i32, color.green as i32, color.blue as i32);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        if max == 0 {
            return Self::new(0, 0, 0);
        }

        let chroma = max - min;
        let saturation = (255 * chroma / max) as u8;
        if saturation == 0 {
            return Self::new(0, 0, max as u8);
        }

        let hue = if max == r {
            BAND_HALF * (g - b) / chroma
        } else if max == g {
            GREEN_BAND + BAND_HALF * (b - r) / chroma
        } else {
            BLUE_BAND + BAND_HALF * (r - g) / chroma
        };

        // Negative offsets in the red band wrap to the top of the wheel.
        Self::new(hue as u16, saturation, max as u8)
    }

    /// Inverse hexcone conversion.
    pub fn to_rgb(self) -> Rgb {
        // Pure red is centered on the rollover, so this yields 0..=1530
        // where 1530 is red again.
        let hue = (self.hue as u32 * HEXCONE_HUES + 32768) / 65536;

        // Segments are 255 wide; the last value of each one is the first of
        // the next.
        let (r, g, b): (u32, u32, u32) = match hue {
            0..=254 => (255, hue, 0),
            255..=509 => (510 - hue, 255, 0),
            510..=764 => (0, 255, hue - 510),
            765..=1019 => (0, 1020 - hue, 255),
            1020..=1274 => (hue - 1020, 0, 255),
            1275..=1529 => (255, 0, 1530 - hue),
            _ => (255, 0, 0),
        };

        let v1 = self.value as u32 + 1;
        let s1 = self.saturation as u32 + 1;
        let s2 = 255 - self.saturation as u32;
        let apply = |c: u32| (((((c * s1) >> 8) + s2) * v1) >> 8) as u8;

        Rgb::new(apply(r), apply(g), apply(b))
    }
}

impl From<Rgb> for Hsv {
    fn from(color: Rgb) -> Self {
        Hsv::from_rgb(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_land_on_band_starts() {
        assert_eq!(Hsv::from_rgb(Rgb::new(255, 0, 0)), Hsv::new(0, 255, 255));
        assert_eq!(Hsv::from_rgb(Rgb::new(0, 255, 0)), Hsv::new(21760, 255, 255));
        assert_eq!(Hsv::from_rgb(Rgb::new(0, 0, 255)), Hsv::new(43776, 255, 255));
    }

    #[test]
    fn red_band_wraps_below_zero() {
        // Red dominant with blue above green lands just below the rollover.
        assert_eq!(Hsv::from_rgb(Rgb::new(255, 0, 1)).hue, 65493);
    }

    #[test]
    fn hue_rollover_is_red_on_both_sides() {
        assert_eq!(Hsv::from_hue(0).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsv::from_hue(65535).to_rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn segment_boundaries() {
        assert_eq!(Hsv::from_hue(5461).to_rgb(), Rgb::new(255, 127, 0));
        assert_eq!(Hsv::from_hue(10922).to_rgb(), Rgb::new(255, 255, 0));
        assert_eq!(Hsv::from_hue(21845).to_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(Hsv::from_hue(43690).to_rgb(), Rgb::new(0, 0, 255));
    }
}
