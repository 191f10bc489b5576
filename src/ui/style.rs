use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Font};

use super::theme::Palette;

pub const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

pub const ITALIC: Font = Font {
    style: iced::font::Style::Italic,
    ..Font::DEFAULT
};

pub fn surface(background: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

pub fn entry(palette: Palette, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused { .. } => palette.button_background,
        _ => palette.entry_background,
    };

    text_input::Style {
        background: Background::Color(palette.entry_background),
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 4.0.into(),
        },
        icon: palette.entry_foreground,
        placeholder: Color {
            a: 0.5,
            ..palette.entry_foreground
        },
        value: palette.entry_foreground,
        selection: Color {
            a: 0.3,
            ..palette.button_background
        },
    }
}

/// The flat toggle in the header blends into the background.
pub fn flat(palette: Palette, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.foreground,
        ..Default::default()
    }
}

pub fn secondary(palette: Palette, status: button::Status) -> button::Style {
    // pressed inverts, like a classic active state
    let (background, text_color) = match status {
        button::Status::Pressed => (
            palette.secondary_button_foreground,
            palette.secondary_button_background,
        ),
        _ => (
            palette.secondary_button_background,
            palette.secondary_button_foreground,
        ),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn primary(palette: Palette, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.button_hover,
        button::Status::Active => palette.button_background,
        button::Status::Disabled => Color {
            a: 0.5,
            ..palette.button_background
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.button_foreground,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{DARK, LIGHT};

    #[test]
    fn test_primary_hover_swaps_background() {
        for palette in [LIGHT, DARK] {
            let idle = primary(palette, button::Status::Active);
            let hovered = primary(palette, button::Status::Hovered);
            assert_eq!(
                idle.background,
                Some(Background::Color(palette.button_background))
            );
            assert_eq!(
                hovered.background,
                Some(Background::Color(palette.button_hover))
            );
        }
    }

    #[test]
    fn test_entry_follows_palette() {
        let style = entry(LIGHT, text_input::Status::Active);
        assert_eq!(style.background, Background::Color(LIGHT.entry_background));
        assert_eq!(style.value, LIGHT.entry_foreground);
    }
}
