/// Shared data structures for the site content
///
/// These records are read once from the embedded content table and
/// never mutated afterwards.
use serde::{Deserialize, Serialize};

/// A single project photo shown in the gallery
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MediaItem {
    /// Stable identifier (e.g., "placeholder-7")
    pub id: String,
    /// Image path relative to the assets directory
    pub image: String,
    pub title: String,
    /// Service category the project belongs to
    pub category: String,
    pub description: String,
}

/// Contact details and hero copy for the business
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Business {
    pub name: String,
    pub tagline: String,
    pub headline: String,
    /// One-line list of specialties shown under the headline
    pub specialties: String,
    pub hero_image: String,
    pub gallery_hero_image: String,
    pub phone: String,
    pub email: String,
    pub hours: String,
    pub service_areas: Vec<String>,
}

/// One collapsible panel on a service page
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccordionItem {
    pub title: String,
    pub content: String,
}

/// Everything rendered on a service detail page
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceDetail {
    /// URL segment under /services/
    pub slug: String,
    pub title: String,
    /// Short blurb for the home page service card
    pub summary: String,
    pub image: String,
    pub heading: String,
    pub description: String,
    pub intro: String,
    pub bullet_heading: String,
    pub bullets: Vec<String>,
    pub closing: String,
    pub additional: String,
    pub accordion_heading: String,
    pub accordion: Vec<AccordionItem>,
}
