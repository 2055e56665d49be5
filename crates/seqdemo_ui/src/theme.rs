use gpui::{Hsla, Pixels, SharedString, hsla, px};

use seqdemo_core::ThemeMode;

/// Color tokens, typography, spacing and radii for the demo page.
pub struct DemoTheme {
    pub mode: ThemeMode,

    // Surfaces
    pub bg_primary: Hsla,
    pub bg_secondary: Hsla,
    pub bg_tertiary: Hsla,
    pub bg_surface: Hsla,
    pub overlay: Hsla,

    // Accents
    pub accent: Hsla,
    pub accent_green: Hsla,
    pub accent_red: Hsla,
    pub accent_yellow: Hsla,

    // Text
    pub text_primary: Hsla,
    pub text_secondary: Hsla,
    pub text_muted: Hsla,
    pub text_on_accent: Hsla,

    pub border: Hsla,

    // Typography
    pub font_ui: SharedString,
    pub font_mono: SharedString,
    pub font_size_xs: Pixels,
    pub font_size_sm: Pixels,
    pub font_size_base: Pixels,
    pub font_size_lg: Pixels,
    pub font_size_xl: Pixels,
    pub font_size_2xl: Pixels,

    // Spacing (4px grid)
    pub space_1: Pixels,
    pub space_2: Pixels,
    pub space_3: Pixels,
    pub space_4: Pixels,
    pub space_6: Pixels,
    pub space_8: Pixels,

    // Radii
    pub radius_sm: Pixels,
    pub radius_md: Pixels,
    pub radius_lg: Pixels,
    pub radius_full: Pixels,
}

impl DemoTheme {
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            bg_primary: rgb_to_hsla(0xF4, 0xF5, 0xF7),
            bg_secondary: rgb_to_hsla(0xFF, 0xFF, 0xFF),
            bg_tertiary: rgb_to_hsla(0xE9, 0xEB, 0xF0),
            bg_surface: rgb_to_hsla(0xFF, 0xFF, 0xFF),
            overlay: hsla(0.0, 0.0, 0.0, 0.35),

            accent: rgb_to_hsla(0x4F, 0x46, 0xE5),
            accent_green: rgb_to_hsla(0x16, 0xA3, 0x4A),
            accent_red: rgb_to_hsla(0xDC, 0x26, 0x26),
            accent_yellow: rgb_to_hsla(0xB4, 0x53, 0x09),

            text_primary: rgb_to_hsla(0x11, 0x18, 0x27),
            text_secondary: rgb_to_hsla(0x37, 0x41, 0x51),
            text_muted: rgb_to_hsla(0x6B, 0x72, 0x80),
            text_on_accent: rgb_to_hsla(0xFF, 0xFF, 0xFF),

            border: rgb_to_hsla(0xD1, 0xD5, 0xDB),

            ..Self::metrics()
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            bg_primary: rgb_to_hsla(0x0B, 0x0D, 0x12),
            bg_secondary: rgb_to_hsla(0x14, 0x17, 0x1F),
            bg_tertiary: rgb_to_hsla(0x20, 0x24, 0x30),
            bg_surface: rgb_to_hsla(0x17, 0x1A, 0x24),
            overlay: hsla(0.0, 0.0, 0.0, 0.6),

            accent: rgb_to_hsla(0x81, 0x8C, 0xF8),
            accent_green: rgb_to_hsla(0x4A, 0xDE, 0x80),
            accent_red: rgb_to_hsla(0xF8, 0x71, 0x71),
            accent_yellow: rgb_to_hsla(0xFB, 0xBF, 0x24),

            text_primary: rgb_to_hsla(0xF3, 0xF4, 0xF6),
            text_secondary: rgb_to_hsla(0xD1, 0xD5, 0xDB),
            text_muted: rgb_to_hsla(0x9C, 0xA3, 0xAF),
            text_on_accent: rgb_to_hsla(0x0B, 0x0D, 0x12),

            border: rgb_to_hsla(0x2A, 0x2F, 0x3D),

            ..Self::metrics()
        }
    }

    /// Mode-independent typography, spacing and radii. Colors are placeholders
    /// overwritten by [`Self::light`] and [`Self::dark`].
    fn metrics() -> Self {
        let none = hsla(0.0, 0.0, 0.0, 0.0);
        Self {
            mode: ThemeMode::Light,
            bg_primary: none,
            bg_secondary: none,
            bg_tertiary: none,
            bg_surface: none,
            overlay: none,
            accent: none,
            accent_green: none,
            accent_red: none,
            accent_yellow: none,
            text_primary: none,
            text_secondary: none,
            text_muted: none,
            text_on_accent: none,
            border: none,

            font_ui: SharedString::from("Inter"),
            font_mono: SharedString::from("JetBrains Mono"),
            font_size_xs: px(11.0),
            font_size_sm: px(12.0),
            font_size_base: px(14.0),
            font_size_lg: px(16.0),
            font_size_xl: px(20.0),
            font_size_2xl: px(28.0),

            space_1: px(4.0),
            space_2: px(8.0),
            space_3: px(12.0),
            space_4: px(16.0),
            space_6: px(24.0),
            space_8: px(32.0),

            radius_sm: px(4.0),
            radius_md: px(8.0),
            radius_lg: px(12.0),
            radius_full: px(9999.0),
        }
    }
}

/// Convert RGB bytes to GPUI Hsla color.
fn rgb_to_hsla(r: u8, g: u8, b: u8) -> Hsla {
    let [rf, gf, bf] = [r, g, b].map(|c| c as f32 / 255.0);

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return hsla(0.0, 0.0, l, 1.0);
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    let sector = if max == rf {
        ((gf - bf) / delta).rem_euclid(6.0)
    } else if max == gf {
        (bf - rf) / delta + 2.0
    } else {
        (rf - gf) / delta + 4.0
    };

    hsla(sector / 6.0, s, l, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn grey_has_no_saturation() {
        let c = rgb_to_hsla(0x80, 0x80, 0x80);
        assert!(close(c.s, 0.0));
        assert!(close(c.l, 128.0 / 255.0));
    }

    #[test]
    fn primaries_map_to_expected_hues() {
        assert!(close(rgb_to_hsla(0xFF, 0, 0).h, 0.0));
        assert!(close(rgb_to_hsla(0, 0xFF, 0).h, 1.0 / 3.0));
        assert!(close(rgb_to_hsla(0, 0, 0xFF).h, 2.0 / 3.0));
        assert!(close(rgb_to_hsla(0xFF, 0, 0).s, 1.0));
    }

    #[test]
    fn theme_follows_configured_mode() {
        assert_eq!(DemoTheme::from_mode(ThemeMode::Dark).mode, ThemeMode::Dark);
        let light = DemoTheme::from_mode(ThemeMode::Light);
        assert_eq!(light.mode, ThemeMode::Light);
        assert!(light.bg_primary.l > 0.9);
    }
}
