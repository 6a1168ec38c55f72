/// State management module
///
/// This module holds all UI-independent application state:
/// - Shared content records (data.rs)
/// - Lead-capture form submission state machine (lead.rs)
/// - Gallery lightbox navigation (carousel.rs)
/// - Page routing (route.rs)
/// - Service page accordion (accordion.rs)

pub mod accordion;
pub mod carousel;
pub mod data;
pub mod lead;
pub mod route;
