use env_logger::{Builder, Target};
use iced::widget::{column, scrollable, stack};
use iced::{keyboard, Element, Subscription, Task, Theme};
use log::LevelFilter;
use std::sync::Arc;
use std::time::{Duration, Instant};

mod config;
mod content;
mod error;
mod state;
mod submit;
mod ui;

use config::SiteConfig;
use content::Content;
use state::accordion::Accordion;
use state::carousel::MediaCarousel;
use state::lead::{FormKind, LeadForm};
use state::route::{Anchor, Route, Section};
use submit::{FormBackend, HttpFormBackend};
use ui::lead_form::{LeadMessage, LeadPanel};
use ui::lightbox::LightboxMessage;

/// How often pending notice deadlines are checked
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Component state for the page currently on screen.
///
/// Rebuilt from scratch on every navigation, so forms and the lightbox
/// never carry state across page entries.
enum Page {
    Home { contact: LeadPanel },
    Gallery { carousel: MediaCarousel },
    Service { slug: String, accordion: Accordion, estimate: LeadPanel },
    NotFound,
}

/// Main application state
struct RadElectric {
    config: SiteConfig,
    content: Content,
    backend: Arc<dyn FormBackend>,
    route: Route,
    page: Page,
    /// Identifies the current page entry; bumped on every navigation
    mount: u64,
    scroll: scrollable::Id,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    /// Scroll to an anchor on the home page, navigating there first if needed
    ScrollTo(Section),
    /// Lead form event tagged with the mount id of the form it targets
    Lead(u64, LeadMessage),
    Gallery(LightboxMessage),
    ToggleAccordion(usize),
    Tick(Instant),
}

impl RadElectric {
    fn new(config: SiteConfig, content: Content, backend: Arc<dyn FormBackend>, route: Route) -> (Self, Task<Message>) {
        log::info!(
            "Rad Electric starting at {} ({} services, {} gallery items)",
            route,
            content.services.len(),
            content.gallery.len()
        );

        let mut app = Self {
            config,
            content,
            backend,
            route,
            page: Page::NotFound,
            mount: 0,
            scroll: scrollable::Id::unique(),
        };
        app.mount_page();

        (app, Task::none())
    }

    fn title(&self) -> String {
        let name = &self.content.business.name;
        match &self.page {
            Page::Home { .. } => name.clone(),
            Page::Gallery { .. } => format!("Gallery | {name}"),
            Page::Service { slug, .. } => match self.content.service(slug) {
                Some(detail) => format!("{} | {name}", detail.title),
                None => name.clone(),
            },
            Page::NotFound => format!("Service Not Found | {name}"),
        }
    }

    /// Build fresh component state for `self.route`
    fn mount_page(&mut self) {
        self.mount += 1;
        let delays = self.config.reset_delays();

        self.page = match &self.route {
            Route::Home => Page::Home {
                contact: LeadPanel::new(FormKind::Contact, delays),
            },
            Route::Gallery => Page::Gallery {
                carousel: MediaCarousel::new(Arc::clone(&self.content.gallery)),
            },
            Route::Service(slug) if self.content.service(slug).is_some() => Page::Service {
                slug: slug.clone(),
                accordion: Accordion::default(),
                estimate: LeadPanel::new(FormKind::Estimate, delays),
            },
            Route::Service(slug) => {
                log::warn!("No service page for slug {slug:?}");
                Page::NotFound
            }
        };

        log::debug!("Mounted {} (mount {})", self.route, self.mount);
    }

    /// The lead form on the current page, if it is still the one `mount` refers to
    fn lead_panel(&mut self, mount: u64) -> Option<&mut LeadPanel> {
        if mount != self.mount {
            return None;
        }
        match &mut self.page {
            Page::Home { contact } => Some(contact),
            Page::Service { estimate, .. } => Some(estimate),
            Page::Gallery { .. } | Page::NotFound => None,
        }
    }

    fn current_form(&self) -> Option<&LeadForm> {
        match &self.page {
            Page::Home { contact } => Some(&contact.form),
            Page::Service { estimate, .. } => Some(&estimate.form),
            Page::Gallery { .. } | Page::NotFound => None,
        }
    }

    fn scroll_to(&self, section: Section) -> Task<Message> {
        let services_top = ui::chrome::HEADER_HEIGHT + ui::pages::HERO_HEIGHT;
        match section.anchor(services_top) {
            Anchor::Offset(y) => scrollable::scroll_to(self.scroll.clone(), scrollable::AbsoluteOffset { x: 0.0, y }),
            Anchor::End => scrollable::snap_to(self.scroll.clone(), scrollable::RelativeOffset::END),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => {
                self.route = route;
                self.mount_page();
                self.scroll_to(Section::Top)
            }
            Message::ScrollTo(section) => {
                if self.route != Route::Home {
                    self.route = Route::Home;
                    self.mount_page();
                }
                self.scroll_to(section)
            }
            Message::Lead(mount, message) => self.update_lead(mount, message),
            Message::Gallery(message) => {
                let Page::Gallery { carousel } = &mut self.page else {
                    log::debug!("Ignoring {message:?}: gallery not mounted");
                    return Task::none();
                };
                match message {
                    LightboxMessage::Open(index) if index < carousel.len() => carousel.open(index),
                    LightboxMessage::Open(index) => log::warn!("No gallery item at index {index}"),
                    LightboxMessage::Close => carousel.close(),
                    LightboxMessage::Next => carousel.next(),
                    LightboxMessage::Previous => carousel.previous(),
                    LightboxMessage::Key(key) => {
                        carousel.handle_key(key);
                    }
                    LightboxMessage::Pointer(target) => carousel.click(target),
                }
                Task::none()
            }
            Message::ToggleAccordion(index) => {
                if let Page::Service { accordion, .. } = &mut self.page {
                    accordion.toggle(index);
                }
                Task::none()
            }
            Message::Tick(now) => {
                let mount = self.mount;
                if let Some(panel) = self.lead_panel(mount) {
                    if panel.form.tick(now) {
                        log::debug!("{} form notice expired", panel.form.kind().form_name());
                    }
                }
                Task::none()
            }
        }
    }

    fn update_lead(&mut self, mount: u64, message: LeadMessage) -> Task<Message> {
        let backend = Arc::clone(&self.backend);
        let Some(panel) = self.lead_panel(mount) else {
            log::debug!("Dropping {message:?} for unmounted form (mount {mount})");
            return Task::none();
        };

        match message {
            LeadMessage::FieldChanged(name, value) => panel.form.update_field(name, value),
            LeadMessage::DetailsEdited(action) => panel.edit_details(action),
            LeadMessage::Submit => {
                if !panel.form.can_submit() {
                    return Task::none();
                }
                if let Some(request) = panel.form.submit(backend) {
                    return Task::perform(request, move |outcome| {
                        Message::Lead(mount, LeadMessage::Submitted(outcome))
                    });
                }
            }
            LeadMessage::Submitted(outcome) => {
                panel.form.complete_submit(outcome, Instant::now());
                panel.sync_details();
            }
            LeadMessage::Dismiss => panel.form.dismiss(),
        }
        Task::none()
    }

    /// Keyboard only while the lightbox is open; ticks only while a notice deadline is pending
    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        if let Page::Gallery { carousel } = &self.page {
            if carousel.wants_keyboard() {
                subscriptions.push(keyboard::on_key_press(ui::lightbox::key_binding));
            }
        }

        if self.current_form().and_then(LeadForm::reset_deadline).is_some() {
            subscriptions.push(iced::time::every(TICK_INTERVAL).map(Message::Tick));
        }

        Subscription::batch(subscriptions)
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let business = &self.content.business;

        let body = match &self.page {
            Page::Home { contact } => ui::pages::home(&self.content, &self.config, contact, self.mount),
            Page::Gallery { carousel } => ui::pages::gallery(&self.content, &self.config, carousel),
            Page::Service { slug, accordion, estimate } => match self.content.service(slug) {
                Some(detail) => ui::pages::service(detail, business, &self.config, accordion, estimate, self.mount),
                None => ui::pages::not_found(),
            },
            Page::NotFound => ui::pages::not_found(),
        };

        let page = scrollable(column![
            ui::chrome::header(&self.content),
            body,
            ui::chrome::footer(&self.content),
        ])
        .id(self.scroll.clone());

        let overlay = match &self.page {
            Page::Gallery { carousel } => ui::lightbox::overlay(carousel, &self.config),
            Page::Service { estimate, .. } => ui::lead_form::popup(&estimate.form, self.mount, business),
            Page::Home { .. } | Page::NotFound => None,
        };

        match overlay {
            Some(overlay) => stack![page, overlay].into(),
            None => page.into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("rad_electric", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = SiteConfig::load();

    let content = match Content::embedded() {
        Ok(content) => content,
        Err(e) => {
            log::error!("Failed to load site content: {e}");
            std::process::exit(1);
        }
    };

    let backend: Arc<dyn FormBackend> = match HttpFormBackend::new(&config) {
        Ok(backend) => {
            log::info!("Submitting forms to {}", backend.endpoint());
            Arc::new(backend)
        }
        Err(e) => {
            log::error!("Failed to create HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let route = match std::env::args().nth(1) {
        Some(path) => Route::parse(&path).unwrap_or_else(|| {
            log::warn!("Unknown start path {path:?}, opening home page");
            Route::Home
        }),
        None => Route::Home,
    };

    iced::application(RadElectric::title, RadElectric::update, RadElectric::view)
        .subscription(RadElectric::subscription)
        .theme(RadElectric::theme)
        .centered()
        .run_with(move || RadElectric::new(config, content, backend, route))
}
