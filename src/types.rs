//! Domain types for regis-portfolio.
//!
//! Content records are static data compiled into the binary; runtime
//! types (form data, preferences) are small and document-lifetime.

use serde::{Deserialize, Serialize};

// ============================================================================
// THEME
// ============================================================================

/// Color theme applied to the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stable name used in preferences and CLI output.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a theme name. Unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Theme> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

// ============================================================================
// SECTIONS
// ============================================================================

/// The five document sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Label shown in the nav bar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

// ============================================================================
// CONTENT RECORDS
// ============================================================================

/// One entry in the project catalog.
///
/// `id` is a stable small integer referenced by the project cards.
/// `long_description` holds paragraphs separated by blank lines; the
/// modal view splits them at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub short_description: &'static str,
    pub long_description: &'static str,
    pub tags: &'static [&'static str],
    pub source_url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<&'static str>,
    pub image_url: &'static str,
}

impl ProjectRecord {
    /// Demo link to show, if any.
    ///
    /// A demo identical to the source link is suppressed — showing the
    /// same URL twice helps nobody.
    pub fn demo_link(&self) -> Option<&'static str> {
        self.demo_url.filter(|demo| *demo != self.source_url)
    }
}

/// A labelled external link (GitHub, LinkedIn, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// One position within an experience tab panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

/// A (tab button, tab panel) pair. `id` is the shared token linking the
/// button to its panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceTab {
    pub id: &'static str,
    pub label: &'static str,
    pub entries: &'static [ExperienceEntry],
}

/// Everything the portfolio says about its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    /// Bio paragraphs, rendered in order.
    pub bio: &'static [&'static str],
    /// Form-relay endpoint receiving contact submissions.
    pub form_endpoint: &'static str,
    /// Hosted resume; empty string disables the resume shortcut.
    pub resume_url: &'static str,
    pub social: &'static [SocialLink],
}

// ============================================================================
// CONTACT FORM
// ============================================================================

/// The four contact form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldId {
    /// All fields in form order.
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Subject,
        FieldId::Message,
    ];

    /// Field name, as posted to the form endpoint.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Subject => "subject",
            FieldId::Message => "message",
        }
    }

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Subject => "Subject",
            FieldId::Message => "Message",
        }
    }
}

/// Current text of the four contact fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Subject => &self.subject,
            FieldId::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Subject => &mut self.subject,
            FieldId::Message => &mut self.message,
        }
    }

    /// Field set as (name, value) pairs, ready to be form-encoded.
    pub fn as_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
    }
}

/// Per-field validation messages. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Name => self.name.as_deref(),
            FieldId::Email => self.email.as_deref(),
            FieldId::Subject => self.subject.as_deref(),
            FieldId::Message => self.message.as_deref(),
        }
    }

    /// True when every field validated.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

/// Terminal states of one submission attempt.
///
/// The response body is never parsed for detail; a not-ok status and a
/// transport error both collapse to `Failed` with a diagnostic string
/// that is kept out of the rendered UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed(String),
}

// ============================================================================
// PREFERENCES
// ============================================================================

/// Persisted user preferences.
///
/// One key today (theme). Unknown fields in the file are ignored so old
/// binaries tolerate newer files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

// ============================================================================
// CLI OUTPUT
// ============================================================================

/// Output format for the non-interactive subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_flips_both_ways() {
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Dark.flipped(), Theme::Light);
        assert_eq!(Theme::Dark.flipped().flipped(), Theme::Dark);
    }

    #[test]
    fn theme_name_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_name(theme.name()), Some(theme));
        }
        assert_eq!(Theme::from_name("solarized"), None);
    }

    #[test]
    fn sections_are_in_document_order() {
        assert_eq!(SectionId::ALL[0], SectionId::Home);
        assert_eq!(SectionId::ALL[4], SectionId::Contact);
    }

    #[test]
    fn demo_link_suppressed_when_same_as_source() {
        let record = ProjectRecord {
            id: 1,
            title: "t",
            short_description: "s",
            long_description: "l",
            tags: &[],
            source_url: "https://github.com/x/y",
            demo_url: Some("https://github.com/x/y"),
            image_url: "",
        };
        assert_eq!(record.demo_link(), None);
    }

    #[test]
    fn demo_link_shown_when_distinct() {
        let record = ProjectRecord {
            id: 1,
            title: "t",
            short_description: "s",
            long_description: "l",
            tags: &[],
            source_url: "https://github.com/x/y",
            demo_url: Some("https://demo.example.com"),
            image_url: "",
        };
        assert_eq!(record.demo_link(), Some("https://demo.example.com"));
    }

    #[test]
    fn form_data_fields_in_post_order() {
        let data = FormData {
            name: "Jo".into(),
            email: "a@b.co".into(),
            subject: "Hello".into(),
            message: "A long enough message.".into(),
        };
        let fields = data.as_fields();
        assert_eq!(fields[0], ("name", "Jo"));
        assert_eq!(fields[3].0, "message");
    }

    #[test]
    fn field_errors_empty_by_default() {
        assert!(FieldErrors::default().is_empty());
        let errors = FieldErrors {
            email: Some("bad".into()),
            ..Default::default()
        };
        assert!(!errors.is_empty());
        assert_eq!(errors.get(FieldId::Email), Some("bad"));
        assert_eq!(errors.get(FieldId::Name), None);
    }

    #[test]
    fn preferences_serialize_theme_by_name() {
        let prefs = Preferences {
            theme: Some(Theme::Light),
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"theme":"light"}"#);

        let parsed: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, prefs);
    }

    #[test]
    fn empty_preferences_parse_as_no_theme() {
        let parsed: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.theme, None);
    }
}
