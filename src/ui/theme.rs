use iced::Color;

/// Colors for every themed widget slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub header_background: Color,
    pub header_foreground: Color,
    pub entry_background: Color,
    pub entry_foreground: Color,
    pub button_background: Color,
    pub button_foreground: Color,
    pub button_hover: Color,
    pub secondary_button_background: Color,
    pub secondary_button_foreground: Color,
    pub status_background: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::from_rgb8(0xFF, 0xFF, 0xFF),
    foreground: Color::from_rgb8(0x0F, 0x0F, 0x0F),
    header_background: Color::from_rgb8(0xFF, 0xFF, 0xFF),
    header_foreground: Color::from_rgb8(0xFF, 0x00, 0x00),
    entry_background: Color::from_rgb8(0xF1, 0xF1, 0xF1),
    entry_foreground: Color::from_rgb8(0x0F, 0x0F, 0x0F),
    button_background: Color::from_rgb8(0xFF, 0x00, 0x00),
    button_foreground: Color::from_rgb8(0xFF, 0xFF, 0xFF),
    button_hover: Color::from_rgb8(0xCC, 0x00, 0x00),
    secondary_button_background: Color::from_rgb8(0xE5, 0xE5, 0xE5),
    secondary_button_foreground: Color::from_rgb8(0x0F, 0x0F, 0x0F),
    status_background: Color::from_rgb8(0xFF, 0xFF, 0xFF),
};

pub const DARK: Palette = Palette {
    background: Color::from_rgb8(0x0F, 0x0F, 0x0F),
    foreground: Color::from_rgb8(0xF1, 0xF1, 0xF1),
    header_background: Color::from_rgb8(0x0F, 0x0F, 0x0F),
    header_foreground: Color::from_rgb8(0xFF, 0x00, 0x00),
    entry_background: Color::from_rgb8(0x21, 0x21, 0x21),
    entry_foreground: Color::from_rgb8(0xF1, 0xF1, 0xF1),
    button_background: Color::from_rgb8(0xFF, 0x00, 0x00),
    button_foreground: Color::from_rgb8(0xFF, 0xFF, 0xFF),
    button_hover: Color::from_rgb8(0xCC, 0x00, 0x00),
    secondary_button_background: Color::from_rgb8(0x3F, 0x3F, 0x3F),
    secondary_button_foreground: Color::from_rgb8(0xF1, 0xF1, 0xF1),
    status_background: Color::from_rgb8(0x0F, 0x0F, 0x0F),
};

/// Active palette selection. Starts dark.
#[derive(Debug, Clone, Copy)]
pub struct ThemeStore {
    dark: bool,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self { dark: true }
    }
}

impl ThemeStore {
    pub fn current(&self) -> Palette {
        if self.dark {
            DARK
        } else {
            LIGHT
        }
    }

    pub fn toggle(&mut self) -> Palette {
        self.dark = !self.dark;
        self.current()
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Glyph on the toggle button: the sun switches to light, the moon back to dark.
    pub fn toggle_icon(&self) -> &'static str {
        if self.dark {
            "☀️"
        } else {
            "🌙"
        }
    }

    /// Base iced theme underneath the custom widget styles
    pub fn iced_theme(&self) -> iced::Theme {
        if self.dark {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}
