/// View layer
///
/// Pure functions from component state to iced elements. Nothing here
/// mutates state; every interaction is returned as a `Message`.
pub mod chrome;
pub mod lead_form;
pub mod lightbox;
pub mod pages;
pub mod style;
