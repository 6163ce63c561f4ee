use crate::models::{Colormap, HexColor};

impl Colormap {
    /// Evenly spaced anchor colors from the low end to the high end of the map.
    fn stops(self) -> [HexColor; 5] {
        match self {
            Colormap::Viridis => [
                HexColor::new(0x44, 0x01, 0x54),
                HexColor::new(0x3b, 0x52, 0x8b),
                HexColor::new(0x21, 0x91, 0x8c),
                HexColor::new(0x5e, 0xc9, 0x62),
                HexColor::new(0xfd, 0xe7, 0x25),
            ],
            Colormap::Plasma => [
                HexColor::new(0x0d, 0x08, 0x87),
                HexColor::new(0x7e, 0x03, 0xa8),
                HexColor::new(0xcc, 0x47, 0x78),
                HexColor::new(0xf8, 0x95, 0x40),
                HexColor::new(0xf0, 0xf9, 0x21),
            ],
            Colormap::Inferno => [
                HexColor::new(0x00, 0x00, 0x04),
                HexColor::new(0x57, 0x10, 0x6e),
                HexColor::new(0xbc, 0x37, 0x54),
                HexColor::new(0xf9, 0x8e, 0x09),
                HexColor::new(0xfc, 0xff, 0xa4),
            ],
            Colormap::Magma => [
                HexColor::new(0x00, 0x00, 0x04),
                HexColor::new(0x51, 0x12, 0x7c),
                HexColor::new(0xb7, 0x37, 0x79),
                HexColor::new(0xfc, 0x89, 0x61),
                HexColor::new(0xfc, 0xfd, 0xbf),
            ],
            Colormap::Cividis => [
                HexColor::new(0x00, 0x22, 0x4e),
                HexColor::new(0x35, 0x45, 0x6c),
                HexColor::new(0x66, 0x69, 0x70),
                HexColor::new(0x94, 0x8e, 0x77),
                HexColor::new(0xfe, 0xe8, 0x38),
            ],
            Colormap::Blues => [
                HexColor::new(0xf7, 0xfb, 0xff),
                HexColor::new(0xc6, 0xdb, 0xef),
                HexColor::new(0x6b, 0xae, 0xd6),
                HexColor::new(0x21, 0x71, 0xb5),
                HexColor::new(0x08, 0x30, 0x6b),
            ],
            Colormap::Reds => [
                HexColor::new(0xff, 0xf5, 0xf0),
                HexColor::new(0xfc, 0xbb, 0xa1),
                HexColor::new(0xfb, 0x6a, 0x4a),
                HexColor::new(0xcb, 0x18, 0x1d),
                HexColor::new(0x67, 0x00, 0x0d),
            ],
        }
    }

    /// Color at position `t` in `0.0..=1.0` (clamped), linearly interpolated.
    pub fn sample(self, t: f64) -> HexColor {
        let stops = self.stops();
        let scaled = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
        let lo = (scaled.floor() as usize).min(stops.len() - 2);
        let frac = scaled - lo as f64;
        let (a, b) = (stops[lo], stops[lo + 1]);
        let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
        HexColor::new(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
    }

    /// Whether the map runs light-to-dark (so high values are the dark end).
    pub fn is_sequential_light(self) -> bool {
        matches!(self, Colormap::Blues | Colormap::Reds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_endpoints() {
        assert_eq!(Colormap::Viridis.sample(0.0), HexColor::new(0x44, 0x01, 0x54));
        assert_eq!(Colormap::Viridis.sample(1.0), HexColor::new(0xfd, 0xe7, 0x25));
        assert_eq!(Colormap::Reds.sample(2.0), Colormap::Reds.sample(1.0));
    }

    #[test]
    fn test_sample_midpoint_interpolates() {
        let mid = Colormap::Blues.sample(0.125);
        // halfway between the first two stops
        assert_eq!(mid, HexColor::new(0xdf, 0xeb, 0xf7));
    }
}
