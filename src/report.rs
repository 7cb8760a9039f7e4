//! CLI output formatting for the non-interactive subcommands.
//!
//! Pure functions — (content, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::types::{OutputFormat, Profile, ProjectRecord};

/// Format the profile for `regis about`.
pub fn format_profile(profile: &Profile, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_profile_human(profile),
        OutputFormat::Json => format_json(profile),
    }
}

/// Format the project catalog for `regis projects`.
pub fn format_projects(projects: &[ProjectRecord], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_projects_human(projects),
        OutputFormat::Json => format_json(&projects),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_profile_human(profile: &Profile) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", profile.name));
    out.push_str(&format!("{}\n\n", profile.tagline));

    for paragraph in profile.bio {
        out.push_str(paragraph);
        out.push_str("\n\n");
    }

    out.push_str(&format!("Email:  {}\n", profile.email));
    if !profile.resume_url.is_empty() {
        out.push_str(&format!("Resume: {}\n", profile.resume_url));
    }
    for link in profile.social {
        out.push_str(&format!("{}: {}\n", link.label, link.url));
    }

    out
}

fn format_projects_human(projects: &[ProjectRecord]) -> String {
    let mut out = String::new();

    for record in projects {
        out.push_str(&format!("=== {} ===\n", record.title));
        out.push_str(&format!("{}\n", record.short_description));
        out.push_str(&format!("Tags:   {}\n", record.tags.join(", ")));
        out.push_str(&format!("Source: {}\n", record.source_url));
        if let Some(demo) = record.demo_link() {
            out.push_str(&format!("Demo:   {}\n", demo));
        }
        out.push('\n');
    }

    out.push_str(&format!("{} projects\n", projects.len()));
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json<T: Serialize>(value: &T) -> String {
    // serde_json::to_string_pretty for readable output
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PROFILE, PROJECTS};

    #[test]
    fn human_profile_includes_name_and_contact() {
        let out = format_profile(&PROFILE, OutputFormat::Human);
        assert!(out.contains(PROFILE.name));
        assert!(out.contains(PROFILE.email));
        assert!(out.contains("Resume:"));
    }

    #[test]
    fn human_projects_suppress_identical_demo_links() {
        let out = format_projects(PROJECTS, OutputFormat::Human);
        // The weather dashboard has a real demo; the flashcards entry's
        // demo is its source link and stays hidden.
        assert!(out.contains("Demo:   https://weather.regiskayumba.dev"));
        let flashcards_block: Vec<&str> = out
            .split("=== ")
            .filter(|block| block.starts_with("Kinyarwanda"))
            .collect();
        assert_eq!(flashcards_block.len(), 1);
        assert!(!flashcards_block[0].contains("Demo:"));
    }

    #[test]
    fn human_projects_count_trailer() {
        let out = format_projects(PROJECTS, OutputFormat::Human);
        assert!(out.trim_end().ends_with(&format!("{} projects", PROJECTS.len())));
    }

    #[test]
    fn json_projects_parse_back() {
        let out = format_projects(PROJECTS, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), PROJECTS.len());
        assert_eq!(array[0]["id"], 1);
        // demo_url is omitted, not null, when absent.
        assert!(array.iter().any(|p| p.get("demo_url").is_none()));
    }

    #[test]
    fn json_profile_carries_social_links() {
        let out = format_profile(&PROFILE, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value["social"].as_array().unwrap().len(),
            PROFILE.social.len()
        );
    }
}
