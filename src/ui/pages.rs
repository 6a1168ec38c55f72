/// Page bodies rendered between the header and the footer
use iced::widget::{button, column, container, image, row, text, Column};
use iced::{Alignment, ContentFit, Element, Length};

use crate::config::SiteConfig;
use crate::content::Content;
use crate::state::accordion::Accordion;
use crate::state::carousel::MediaCarousel;
use crate::state::data::{Business, ServiceDetail};
use crate::state::route::{Route, Section};
use crate::ui::lead_form::{self, LeadPanel};
use crate::ui::{lightbox, style};
use crate::Message;

const PAGE_WIDTH: f32 = 1200.0;
/// Height of the photo band at the top of the home and gallery pages
pub const HERO_HEIGHT: f32 = 420.0;

fn section<'a>(body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(container(body).max_width(PAGE_WIDTH))
        .padding([48, 32])
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn hero<'a>(config: &SiteConfig, picture: &str, overlay: Column<'a, Message>) -> Element<'a, Message> {
    iced::widget::stack![
        image(image::Handle::from_path(config.asset(picture)))
            .width(Length::Fill)
            .height(HERO_HEIGHT)
            .content_fit(ContentFit::Cover),
        container(overlay.max_width(PAGE_WIDTH))
            .width(Length::Fill)
            .height(HERO_HEIGHT)
            .padding(48)
            .center_y(HERO_HEIGHT)
            .style(|_| container::Style {
                background: Some(iced::Background::Color(iced::Color { a: 0.55, ..iced::Color::BLACK })),
                ..container::Style::default()
            }),
    ]
    .into()
}

pub fn home<'a>(content: &'a Content, config: &SiteConfig, contact: &'a LeadPanel, mount: u64) -> Element<'a, Message> {
    let business = &content.business;

    let intro = column![
        text(&business.tagline).size(16).color(style::GOLD),
        text(&business.headline).size(48),
        text(&business.specialties).size(18),
        row![
            button(text("Get a Free Quote").size(16))
                .padding([12, 24])
                .style(style::gold_button)
                .on_press(Message::ScrollTo(Section::Contact)),
            button(text("Our Services").size(16))
                .padding([12, 24])
                .style(style::link_button)
                .on_press(Message::ScrollTo(Section::Services)),
        ]
        .spacing(16),
    ]
    .spacing(16);

    let cards: Vec<Element<'a, Message>> = content
        .services
        .iter()
        .map(|service| {
            button(
                container(
                    column![
                        image(image::Handle::from_path(config.asset(&service.image)))
                            .width(Length::Fill)
                            .height(180)
                            .content_fit(ContentFit::Cover),
                        text(&service.title).size(20).color(style::GOLD),
                        text(&service.summary).size(14).color(style::MUTED),
                        text("Learn More →").size(14),
                    ]
                    .spacing(10)
                    .padding(16),
                )
                .style(style::card),
            )
            .width(360)
            .padding(0)
            .style(button::text)
            .on_press(Message::Navigate(Route::Service(service.slug.clone())))
            .into()
        })
        .collect();

    let services = column![
        text("Our Services").size(36),
        iced_aw::Wrap::with_elements(cards).spacing(24.0).line_spacing(24.0),
    ]
    .spacing(24)
    .align_x(Alignment::Center);

    let contact_info = column![
        text("Contact Us").size(36),
        text("Reach out for a free estimate. We answer day and night.").size(16),
        text(format!("Phone: {}", business.phone)).size(18),
        text(format!("Email: {}", business.email)).size(18),
        text(format!("Hours: {}", business.hours)).size(18),
    ]
    .spacing(12)
    .width(Length::FillPortion(1));

    let contact_row = row![
        contact_info,
        container(lead_form::view(contact, mount, business)).width(Length::FillPortion(1)),
    ]
    .spacing(32);

    column![
        hero(config, &business.hero_image, intro),
        section(services),
        section(contact_row),
    ]
    .into()
}

pub fn gallery<'a>(content: &'a Content, config: &SiteConfig, carousel: &'a MediaCarousel) -> Element<'a, Message> {
    let intro = column![
        text("Project Gallery").size(48),
        text("A look at recent electrical and low voltage work across the Inland Empire.").size(18),
    ]
    .spacing(12);

    column![
        hero(config, &content.business.gallery_hero_image, intro),
        section(lightbox::grid(carousel, config)),
    ]
    .into()
}

pub fn service<'a>(
    detail: &'a ServiceDetail,
    business: &'a Business,
    config: &SiteConfig,
    accordion: &Accordion,
    estimate: &'a LeadPanel,
    mount: u64,
) -> Element<'a, Message> {
    let banner = container(text(&detail.title).size(40))
        .padding([32, 48])
        .width(Length::Fill)
        .style(style::banner);

    let bullets = detail
        .bullets
        .iter()
        .fold(Column::new().spacing(6), |col, bullet| col.push(text(format!("• {bullet}")).size(16)));

    let panels = detail.accordion.iter().enumerate().fold(
        Column::new()
            .spacing(8)
            .push(text(&detail.accordion_heading).size(26)),
        |col, (index, item)| {
            let open = accordion.is_expanded(index);
            let marker = if open { "−" } else { "+" };
            let header = button(
                row![text(&item.title).size(18).width(Length::Fill), text(marker).size(18)]
                    .align_y(Alignment::Center),
            )
            .width(Length::Fill)
            .padding(14)
            .style(style::link_button)
            .on_press(Message::ToggleAccordion(index));

            let mut panel = Column::new().push(header);
            if open {
                panel = panel.push(container(text(&item.content).size(15)).padding([0, 14]));
            }
            col.push(container(panel.spacing(4).padding(iced::Padding {
                bottom: 12.0,
                ..iced::Padding::ZERO
            })).style(style::card))
        },
    );

    let areas = text(business.service_areas.join(" • ")).size(14).color(style::MUTED);

    let body = column![
        text(&detail.heading).size(30).color(style::GOLD),
        image(image::Handle::from_path(config.asset(&detail.image)))
            .width(Length::Fill)
            .height(360)
            .content_fit(ContentFit::Cover),
        text(&detail.description).size(16),
        text(&detail.intro).size(16),
        text(&detail.bullet_heading).size(20),
        bullets,
        text(&detail.closing).size(16),
        text(&detail.additional).size(16),
        panels,
        text("Service Areas").size(20),
        areas,
    ]
    .spacing(18)
    .width(Length::FillPortion(2));

    let aside = container(lead_form::view(estimate, mount, business)).width(Length::FillPortion(1));

    column![banner, section(row![body, aside].spacing(32))].into()
}

pub fn not_found<'a>() -> Element<'a, Message> {
    section(
        column![
            text("Service Not Found").size(40),
            text("The service you're looking for doesn't exist.").size(16),
            button(text("Return to Home").size(16))
                .padding([12, 24])
                .style(style::gold_button)
                .on_press(Message::Navigate(Route::Home)),
        ]
        .spacing(20)
        .align_x(Alignment::Center),
    )
}
