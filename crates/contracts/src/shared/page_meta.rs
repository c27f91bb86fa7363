use serde::Serialize;

/// Document head metadata declared once per route group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub robots: Option<Robots>,
}

/// Crawler directives rendered into `<meta name="robots">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

impl Robots {
    pub const NONE: Robots = Robots {
        index: false,
        follow: false,
    };

    /// Value of the `content` attribute, e.g. `"noindex, follow"`.
    pub fn content(&self) -> String {
        let index = if self.index { "index" } else { "noindex" };
        let follow = if self.follow { "follow" } else { "nofollow" };
        format!("{}, {}", index, follow)
    }
}

impl PageMeta {
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            robots: None,
        }
    }

    pub const fn with_robots(self, robots: Robots) -> Self {
        Self {
            robots: Some(robots),
            ..self
        }
    }

    /// Full document title, branded with the application name.
    pub fn document_title(&self) -> String {
        if self.title.is_empty() {
            APP_NAME.to_string()
        } else {
            format!("{} | {}", self.title, APP_NAME)
        }
    }
}

pub const APP_NAME: &str = "Clinic Manager";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robots_content() {
        assert_eq!(Robots::NONE.content(), "noindex, nofollow");
        assert_eq!(
            Robots {
                index: true,
                follow: false
            }
            .content(),
            "index, nofollow"
        );
    }

    #[test]
    fn test_document_title() {
        let meta = PageMeta::new("Patients", "Patient records");
        assert_eq!(meta.document_title(), "Patients | Clinic Manager");
        assert_eq!(PageMeta::new("", "").document_title(), "Clinic Manager");
    }

    #[test]
    fn test_with_robots_keeps_text() {
        let meta = PageMeta::new("Sign in", "Access your account").with_robots(Robots::NONE);
        assert_eq!(meta.title, "Sign in");
        assert_eq!(meta.robots, Some(Robots::NONE));

        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(json["robots"]["index"], false);
        assert_eq!(json["description"], "Access your account");
    }
}
