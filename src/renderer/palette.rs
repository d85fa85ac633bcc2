//! Car colors

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rrggbb` (the `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        Some(Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        })
    }

    /// Lighten (positive) or darken (negative) by a percentage of full scale,
    /// clamping each channel
    pub fn shade(self, percent: f32) -> Self {
        let amount = (2.55 * percent).round() as i32;
        let channel = |c: u8| (c as i32 + amount).clamp(0, 255) as u8;
        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Cabin color for a car body color; unparseable colors come back unchanged
pub fn cabin_color(body: &str) -> String {
    Rgb::from_hex(body)
        .map(|c| c.shade(-25.0).to_hex())
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            Rgb::from_hex("#e74c3c"),
            Some(Rgb {
                r: 0xe7,
                g: 0x4c,
                b: 0x3c
            })
        );
        assert_eq!(Rgb::from_hex("27ae60").map(Rgb::to_hex), Some("#27ae60".into()));
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_shade_darkens_and_clamps() {
        // -25% is -64 per channel
        assert_eq!(cabin_color("#e74c3c"), "#a70c00");
        assert_eq!(Rgb::from_hex("#102030").unwrap().shade(-25.0).to_hex(), "#000000");
        assert_eq!(Rgb::from_hex("#f0f0f0").unwrap().shade(10.0).to_hex(), "#ffffff");
    }

    #[test]
    fn test_cabin_color_passthrough() {
        assert_eq!(cabin_color("red"), "red");
    }
}
