/// Brand palette and widget styles
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

pub const GOLD: Color = Color { r: 0.831, g: 0.686, b: 0.216, a: 1.0 };
pub const GOLD_LIGHT: Color = Color { r: 0.898, g: 0.757, b: 0.345, a: 1.0 };
pub const PANEL: Color = Color { r: 0.067, g: 0.067, b: 0.067, a: 1.0 };
pub const MUTED: Color = Color { r: 0.62, g: 0.62, b: 0.65, a: 1.0 };
pub const SUCCESS: Color = Color { r: 0.29, g: 0.78, b: 0.42, a: 1.0 };
pub const DANGER: Color = Color { r: 0.90, g: 0.30, b: 0.30, a: 1.0 };

/// Dimmed layer behind modal overlays
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.92, ..Color::BLACK })),
        ..container::Style::default()
    }
}

/// Dark card with a thin border
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PANEL)),
        border: Border {
            color: Color { a: 0.25, ..MUTED },
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Gold band used for page titles and the success popup
pub fn banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(GOLD)),
        text_color: Some(Color::BLACK),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Red popup for failed submissions
pub fn alert(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DANGER)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Inline notice with a colored border
pub fn notice(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(Color { a: 0.15, ..accent })),
        border: Border {
            color: accent,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Gold call-to-action button
pub fn gold_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::primary(theme, status);
    let fill = match status {
        button::Status::Hovered | button::Status::Pressed => GOLD_LIGHT,
        button::Status::Disabled => Color { a: 0.5, ..GOLD },
        button::Status::Active => GOLD,
    };
    button::Style {
        background: Some(Background::Color(fill)),
        text_color: Color::BLACK,
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..base
    }
}

/// Borderless text button for navigation links
pub fn link_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::text(theme, status);
    let color = match status {
        button::Status::Hovered | button::Status::Pressed => GOLD_LIGHT,
        _ => Color::WHITE,
    };
    button::Style {
        text_color: color,
        ..base
    }
}
