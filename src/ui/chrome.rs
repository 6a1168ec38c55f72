/// Header and footer shared by every page
use iced::widget::{button, column, container, horizontal_space, row, text, Column};
use iced::{Alignment, Element, Length};

use crate::content::Content;
use crate::state::route::{Route, Section};
use crate::ui::style;
use crate::Message;

/// Fixed height of the header bar
pub const HEADER_HEIGHT: f32 = 72.0;

/// Footer links: (label, service slug)
const ELECTRICAL_LINKS: &[(&str, &str)] = &[
    ("Electrical Repair", "electrical-installation-repair"),
    ("Remodeling", "remodeling-renovations"),
    ("EV Chargers", "ev-charger-installation"),
    ("Residential", "residential-services"),
    ("Commercial", "commercial-services"),
    ("ADU Services", "adu-electrical-services"),
    ("Insurance Work", "insurance-electrical-work"),
];

const LOW_VOLTAGE_LINKS: &[(&str, &str)] = &[
    ("Security Systems", "security-systems"),
    ("Network Cabling", "network-data-cabling"),
    ("Audio/Video", "audio-video-installation"),
];

fn link<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(text(label).size(15))
        .padding([4, 8])
        .style(style::link_button)
        .on_press(message)
        .into()
}

pub fn header(content: &Content) -> Element<'_, Message> {
    let brand = button(text(&content.business.name).size(24).color(style::GOLD))
        .style(style::link_button)
        .on_press(Message::Navigate(Route::Home));

    let nav = row![
        link("Home", Message::Navigate(Route::Home)),
        link("Services", Message::ScrollTo(Section::Services)),
        link("Gallery", Message::Navigate(Route::Gallery)),
        link("Contact", Message::ScrollTo(Section::Contact)),
        button(text("Get a Quote").size(15))
            .padding([8, 16])
            .style(style::gold_button)
            .on_press(Message::ScrollTo(Section::Contact)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    container(row![brand, horizontal_space(), nav].align_y(Alignment::Center))
        .padding([0, 32])
        .width(Length::Fill)
        .center_y(HEADER_HEIGHT)
        .style(style::card)
        .into()
}

pub fn footer(content: &Content) -> Element<'_, Message> {
    let business = &content.business;

    let links = |heading: &'static str, entries: &'static [(&'static str, &'static str)]| {
        entries.iter().fold(
            Column::new().spacing(2).push(text(heading).size(15).color(style::GOLD_LIGHT)),
            |col, (label, slug)| col.push(link(*label, Message::Navigate(Route::Service((*slug).to_string())))),
        )
    };

    let contact = column![
        text(&business.name).size(20).color(style::GOLD),
        text(&business.phone).size(15),
        text(&business.email).size(15),
        text(&business.hours).size(15).color(style::MUTED),
    ]
    .spacing(6)
    .width(Length::FillPortion(2));

    let columns = row![
        contact,
        links("Electrical Services", ELECTRICAL_LINKS).width(Length::FillPortion(1)),
        links("Low Voltage Services", LOW_VOLTAGE_LINKS).width(Length::FillPortion(1)),
    ]
    .spacing(32);

    container(
        column![
            columns,
            text("Licensed & Insured • Open 24 Hours").size(13).color(style::MUTED),
        ]
        .spacing(24),
    )
    .padding(32)
    .width(Length::Fill)
    .style(style::card)
    .into()
}
