//! Static portfolio content.
//!
//! Pure data, defined once and never mutated. Rendering code takes
//! these records as input; nothing here knows about the terminal.

use crate::types::{
    ExperienceEntry, ExperienceTab, Profile, ProjectRecord, SocialLink,
};

// ============================================================================
// PROFILE
// ============================================================================

/// The portfolio owner.
pub const PROFILE: Profile = Profile {
    name: "Igirimbabazi Kayumba Regis",
    tagline: "Software developer building useful things for the web and the terminal",
    email: "regis.kayumba@outlook.com",
    bio: &[
        "I am a software developer based in Kigali with a focus on \
         approachable, reliable tools. I care about interfaces that stay \
         fast and legible, whether they live in a browser tab or a \
         terminal window.",
        "Away from the keyboard I mentor students learning to code, \
         contribute to community tech meetups, and photograph the hills \
         around the city.",
    ],
    form_endpoint: "https://formspree.io/f/mqkvjzrd",
    resume_url: "https://regiskayumba.dev/resume.pdf",
    social: &[
        SocialLink {
            label: "GitHub",
            url: "https://github.com/regis-kayumba",
        },
        SocialLink {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/regis-kayumba",
        },
        SocialLink {
            label: "Twitter",
            url: "https://twitter.com/regis_kayumba",
        },
    ],
};

// ============================================================================
// EXPERIENCE TABS
// ============================================================================

/// Experience section tabs. The first tab is active before any
/// interaction.
pub const EXPERIENCE_TABS: &[ExperienceTab] = &[
    ExperienceTab {
        id: "work",
        label: "Work",
        entries: &[
            ExperienceEntry {
                role: "Software Developer",
                organization: "Irembo",
                period: "2023 — present",
                summary: "Building citizen-facing government service \
                          portals; owns the notification delivery \
                          pipeline and its monitoring.",
            },
            ExperienceEntry {
                role: "Junior Developer",
                organization: "Andela Apprenticeship",
                period: "2021 — 2023",
                summary: "Full-stack product work across three client \
                          teams; introduced end-to-end tests that cut \
                          regression reports by half.",
            },
        ],
    },
    ExperienceTab {
        id: "education",
        label: "Education",
        entries: &[
            ExperienceEntry {
                role: "BSc Computer Science",
                organization: "University of Rwanda",
                period: "2017 — 2021",
                summary: "Graduated with honours; final-year project on \
                          offline-first mobile data collection for rural \
                          health workers.",
            },
            ExperienceEntry {
                role: "Software Engineering Certificate",
                organization: "ALX Africa",
                period: "2020 — 2021",
                summary: "Intensive systems programming track: C, shell \
                          tooling, and network fundamentals.",
            },
        ],
    },
    ExperienceTab {
        id: "community",
        label: "Community",
        entries: &[
            ExperienceEntry {
                role: "Mentor",
                organization: "Kigali Code Club",
                period: "2022 — present",
                summary: "Weekly sessions walking secondary-school \
                          students through their first programs.",
            },
        ],
    },
];

/// Tab id that is active before any interaction.
pub const INITIAL_TAB: &str = "work";

/// Intro copy above the contact form.
pub const CONTACT_INTRO: &str =
    "Have a project in mind, or just want to say hello? Send a message \
     below or reach me directly at regis.kayumba@outlook.com.";

// ============================================================================
// PROJECT CATALOG
// ============================================================================

/// The project catalog, ordered as displayed. Ids are stable and
/// referenced by the project cards; lookups go through
/// [`project_by_id`].
pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "Umuganda Tracker",
        short_description: "Community work-day coordination app for neighbourhood leaders.",
        long_description: "Umuganda Tracker helps cell leaders plan monthly community \
             work days: announcing locations, tracking attendance, and \
             summarising completed work for district reports.\n\n\
             The backend is a small REST service with offline-tolerant \
             sync; attendance capture keeps working without a connection \
             and reconciles when one returns.",
        tags: &["TypeScript", "React", "Node.js", "PostgreSQL"],
        source_url: "https://github.com/regis-kayumba/umuganda-tracker",
        demo_url: Some("https://umuganda-tracker.vercel.app"),
        image_url: "https://regiskayumba.dev/images/projects/umuganda.png",
    },
    ProjectRecord {
        id: 2,
        title: "Kinyarwanda Flashcards",
        short_description: "Spaced-repetition vocabulary trainer for Kinyarwanda learners.",
        long_description: "A flashcard trainer seeded with a 2,000-word frequency list and \
             audio recorded by native speakers.\n\n\
             Review scheduling follows a simplified SM-2 curve tuned for \
             short daily sessions on low-end phones.",
        tags: &["Flutter", "Dart", "SQLite"],
        source_url: "https://github.com/regis-kayumba/kinyarwanda-flashcards",
        demo_url: Some("https://github.com/regis-kayumba/kinyarwanda-flashcards"),
        image_url: "https://regiskayumba.dev/images/projects/flashcards.png",
    },
    ProjectRecord {
        id: 3,
        title: "Kigali Weather Dashboard",
        short_description: "Hyper-local weather dashboard with sector-level forecasts.",
        long_description: "Aggregates three public forecast APIs and a handful of community \
             weather stations into one sector-level view of Kigali's \
             microclimates.\n\n\
             Disagreement between sources is shown honestly as a range \
             rather than averaged away, which turned out to be the \
             feature users mention most.",
        tags: &["Vue", "D3.js", "FastAPI", "Redis"],
        source_url: "https://github.com/regis-kayumba/kigali-weather",
        demo_url: Some("https://weather.regiskayumba.dev"),
        image_url: "https://regiskayumba.dev/images/projects/weather.png",
    },
    ProjectRecord {
        id: 4,
        title: "Invoice Forge",
        short_description: "CLI invoice generator for freelancers, from TOML to print-ready PDF.",
        long_description: "Reads client and line-item records from a TOML file and renders \
             numbered, print-ready PDF invoices with a single command.\n\n\
             Built after one too many spreadsheet invoices; now used by a \
             dozen freelancers in my network.",
        tags: &["Rust", "clap", "Typst"],
        source_url: "https://github.com/regis-kayumba/invoice-forge",
        demo_url: None,
        image_url: "https://regiskayumba.dev/images/projects/invoice-forge.png",
    },
];

/// Look up a project by its stable id. Unknown ids return `None`;
/// callers treat that as a no-op rather than an error.
pub fn project_by_id(id: u32) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|record| record.id == id)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_unique_and_stable() {
        let mut seen = std::collections::BTreeSet::new();
        for record in PROJECTS {
            assert!(seen.insert(record.id), "duplicate project id {}", record.id);
        }
    }

    #[test]
    fn project_lookup_hits_and_misses() {
        assert_eq!(project_by_id(3).map(|r| r.title), Some("Kigali Weather Dashboard"));
        assert_eq!(project_by_id(999), None);
    }

    #[test]
    fn every_project_has_a_source_link() {
        for record in PROJECTS {
            assert!(
                record.source_url.starts_with("https://"),
                "{} has no usable source link",
                record.title
            );
        }
    }

    #[test]
    fn catalog_covers_both_demo_shapes() {
        // At least one project shows a demo link, and at least one
        // suppresses it (absent, or identical to the source link).
        assert!(PROJECTS.iter().any(|r| r.demo_link().is_some()));
        assert!(PROJECTS.iter().any(|r| r.demo_link().is_none()));
    }

    #[test]
    fn project_three_has_distinct_demo() {
        let record = project_by_id(3).unwrap();
        assert_eq!(record.demo_link(), Some("https://weather.regiskayumba.dev"));
    }

    #[test]
    fn identical_demo_is_suppressed_in_catalog() {
        let record = project_by_id(2).unwrap();
        assert!(record.demo_url.is_some());
        assert_eq!(record.demo_link(), None);
    }

    #[test]
    fn initial_tab_exists() {
        assert!(EXPERIENCE_TABS.iter().any(|tab| tab.id == INITIAL_TAB));
    }

    #[test]
    fn long_descriptions_split_into_paragraphs() {
        for record in PROJECTS {
            assert!(!record.long_description.is_empty());
        }
        let paragraphs: Vec<&str> = project_by_id(1)
            .unwrap()
            .long_description
            .split("\n\n")
            .collect();
        assert_eq!(paragraphs.len(), 2);
    }
}
