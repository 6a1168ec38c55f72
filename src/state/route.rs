/// Page routing
///
/// Paths follow the public site layout: `/`, `/gallery` and
/// `/services/<slug>`.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Gallery,
    /// Service detail page; the slug may not exist in the content table
    Service(String),
}

/// Anchors on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Top,
    Services,
    Contact,
}

/// Scroll target for a section
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Distance from the top of the page in logical pixels
    Offset(f32),
    /// Bottom of the page
    End,
}

impl Section {
    /// Where the section starts.
    ///
    /// `services_top` is the fixed-height chrome above the services grid
    /// (header bar plus hero band), so it does not depend on the content.
    /// The contact block is the last section before the footer.
    pub fn anchor(self, services_top: f32) -> Anchor {
        match self {
            Self::Top => Anchor::Offset(0.0),
            Self::Services => Anchor::Offset(services_top),
            Self::Contact => Anchor::End,
        }
    }
}

impl Route {
    /// Parse a path. Trailing slashes and a leading `#fragment` are ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split('#').next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Self::Home),
            ["gallery"] => Some(Self::Gallery),
            ["services", slug] => Some(Self::Service((*slug).to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Gallery => f.write_str("/gallery"),
            Self::Service(slug) => write!(f, "/services/{slug}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/#contact"), Some(Route::Home));
        assert_eq!(Route::parse("/gallery/"), Some(Route::Gallery));
        assert_eq!(
            Route::parse("/services/ev-charger-installation"),
            Some(Route::Service("ev-charger-installation".into()))
        );
    }

    #[test]
    fn test_parse_unknown_paths() {
        assert_eq!(Route::parse("/about"), None);
        assert_eq!(Route::parse("/services"), None);
        assert_eq!(Route::parse("/services/a/b"), None);
    }

    #[test]
    fn test_section_anchors() {
        assert_eq!(Section::Top.anchor(492.0), Anchor::Offset(0.0));
        assert_eq!(Section::Services.anchor(492.0), Anchor::Offset(492.0));
        assert_eq!(Section::Contact.anchor(492.0), Anchor::End);
    }

    #[test]
    fn test_display_matches_parse() {
        for route in [Route::Home, Route::Gallery, Route::Service("security-systems".into())] {
            assert_eq!(Route::parse(&route.to_string()), Some(route));
        }
    }
}
