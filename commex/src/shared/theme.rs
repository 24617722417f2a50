use iced::theme::Palette;
use iced::{Color, Theme};

/// Dashboard colors as hex strings.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) primary: String,
    pub(crate) primary_hover: String,
    pub(crate) accent: String,
    pub(crate) text: String,
    pub(crate) text_muted: String,
    pub(crate) border_neutral: String,
    pub(crate) layout_background: String,
    pub(crate) surface: String,
    pub(crate) success: String,
    pub(crate) warning: String,
    pub(crate) overlay: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: String::from("#1985C3"),
            primary_hover: String::from("#1C8FD1"),
            accent: String::from("#FD0039"),
            text: String::from("#4A4A4A"),
            text_muted: String::from("#ACABAB"),
            border_neutral: String::from("#D5D4D4"),
            layout_background: String::from("#EEEEEE"),
            surface: String::from("#FFFFFF"),
            success: String::from("#2EAD5B"),
            warning: String::from("#F2A900"),
            overlay: String::from("#00000066"),
        }
    }
}

/// Parsed palette ready for iced styling closures.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IcedColorPalette {
    pub(crate) primary: Color,
    pub(crate) primary_hover: Color,
    pub(crate) accent: Color,
    pub(crate) text: Color,
    pub(crate) text_muted: Color,
    pub(crate) border_neutral: Color,
    pub(crate) layout_background: Color,
    pub(crate) surface: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) overlay: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            primary: parse_hex_color(&p.primary),
            primary_hover: parse_hex_color(&p.primary_hover),
            accent: parse_hex_color(&p.accent),
            text: parse_hex_color(&p.text),
            text_muted: parse_hex_color(&p.text_muted),
            border_neutral: parse_hex_color(&p.border_neutral),
            layout_background: parse_hex_color(&p.layout_background),
            surface: parse_hex_color(&p.surface),
            success: parse_hex_color(&p.success),
            warning: parse_hex_color(&p.warning),
            overlay: parse_hex_color(&p.overlay),
        }
    }
}

fn parse_hex_color(value: &str) -> Color {
    value.parse::<Color>().unwrap_or_else(|_| {
        log::warn!("invalid palette color {value:?}, using black");
        Color::BLACK
    })
}

/// Application theme shared by every widget view.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palette(String::from("commex"), &ColorPalette::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.layout_background,
            text: palette.text,
            primary: palette.primary,
            success: palette.success,
            danger: palette.accent,
            warning: palette.warning,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn from_palette(id: String, raw_palette: &ColorPalette) -> Self {
        Self {
            id,
            iced_palette: IcedColorPalette::from(raw_palette),
        }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget view -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Owns the current global theme.
#[derive(Debug, Clone, Default)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}
