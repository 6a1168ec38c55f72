/// Gallery grid and lightbox overlay
use iced::keyboard::{self, key, Key};
use iced::widget::{button, column, container, image, mouse_area, opaque, row, text, Column};
use iced::{Alignment, ContentFit, Element, Length};

use crate::config::SiteConfig;
use crate::state::carousel::{CarouselKey, MediaCarousel, PointerTarget};
use crate::ui::style;
use crate::Message;

const TILE_WIDTH: f32 = 340.0;

#[derive(Debug, Clone)]
pub enum LightboxMessage {
    Open(usize),
    Close,
    Next,
    Previous,
    Key(CarouselKey),
    Pointer(PointerTarget),
}

/// Translate a key press into a lightbox message.
///
/// Only subscribed while the lightbox is open.
pub fn key_binding(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    let key = match key {
        Key::Named(key::Named::ArrowRight) => CarouselKey::ArrowRight,
        Key::Named(key::Named::ArrowLeft) => CarouselKey::ArrowLeft,
        Key::Named(key::Named::Escape) => CarouselKey::Escape,
        _ => return None,
    };
    Some(Message::Gallery(LightboxMessage::Key(key)))
}

/// Project cards in a wrapping grid
pub fn grid<'a>(carousel: &'a MediaCarousel, config: &SiteConfig) -> Element<'a, Message> {
    let tiles: Vec<Element<'a, Message>> = carousel
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let card = column![
                image(image::Handle::from_path(config.asset(&item.image)))
                    .width(Length::Fill)
                    .height(220)
                    .content_fit(ContentFit::Cover),
                column![
                    text(&item.category).size(13).color(style::GOLD),
                    text(&item.title).size(18),
                    text(&item.description).size(14).color(style::MUTED),
                ]
                .spacing(6)
                .padding(16),
            ];

            button(container(card).style(style::card))
                .width(TILE_WIDTH)
                .padding(0)
                .style(button::text)
                .on_press(Message::Gallery(LightboxMessage::Open(index)))
                .into()
        })
        .collect();

    column![
        text(format!("Showing {} projects", carousel.len()))
            .size(15)
            .color(style::MUTED),
        iced_aw::Wrap::with_elements(tiles).spacing(24.0).line_spacing(24.0),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}

/// Full-screen overlay for the selected item, if any.
///
/// The photo and caption sit in an opaque layer so clicks on them never
/// reach the backdrop's close handler.
pub fn overlay<'a>(carousel: &'a MediaCarousel, config: &SiteConfig) -> Option<Element<'a, Message>> {
    let item = carousel.selected_item()?;
    let position = carousel.position_label().unwrap_or_default();

    let nav = |label: &'a str, message: LightboxMessage| {
        button(text(label).size(28))
            .padding([8, 16])
            .style(style::link_button)
            .on_press(Message::Gallery(message))
    };

    let caption = container(
        column![
            text(&item.category).size(13).color(style::GOLD),
            text(&item.title).size(24),
            text(&item.description).size(15),
            text(format!("{position} • Use arrow keys or click arrows to navigate"))
                .size(13)
                .color(style::MUTED),
        ]
        .spacing(8),
    )
    .padding(20)
    .width(Length::Fill)
    .style(style::card);

    let content: Column<'a, Message> = column![
        image(image::Handle::from_path(config.asset(&item.image)))
            .width(Length::Fill)
            .height(Length::FillPortion(3))
            .content_fit(ContentFit::Contain),
        caption,
    ]
    .spacing(16)
    .max_width(1100);

    let content = mouse_area(content).on_press(Message::Gallery(LightboxMessage::Pointer(PointerTarget::Content)));

    let layout = column![
        row![
            iced::widget::horizontal_space(),
            nav("×", LightboxMessage::Close),
        ],
        row![
            nav("‹", LightboxMessage::Previous),
            container(opaque(content)).width(Length::Fill).center_x(Length::Fill),
            nav("›", LightboxMessage::Next),
        ]
        .align_y(Alignment::Center)
        .height(Length::Fill),
    ]
    .padding(16);

    let backdrop = mouse_area(
        container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::backdrop),
    )
    .on_press(Message::Gallery(LightboxMessage::Pointer(PointerTarget::Backdrop)));

    Some(opaque(backdrop))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(key: Key) -> Option<CarouselKey> {
        match key_binding(key, keyboard::Modifiers::default()) {
            Some(Message::Gallery(LightboxMessage::Key(k))) => Some(k),
            _ => None,
        }
    }

    #[test]
    fn test_navigation_keys_are_bound() {
        assert_eq!(bound(Key::Named(key::Named::ArrowRight)), Some(CarouselKey::ArrowRight));
        assert_eq!(bound(Key::Named(key::Named::ArrowLeft)), Some(CarouselKey::ArrowLeft));
        assert_eq!(bound(Key::Named(key::Named::Escape)), Some(CarouselKey::Escape));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(bound(Key::Named(key::Named::Enter)), None);
        assert_eq!(bound(Key::Character("l".into())), None);
    }
}
