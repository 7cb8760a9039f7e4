//! Document geometry: section layout and scroll math.
//!
//! Pure functions — the document is measured, never drawn, here. The
//! rendering layer builds the same structure row for row; the event
//! layer uses these extents to answer "which section is active",
//! "where does this nav link scroll to", and "has this block entered
//! the viewport".
//!
//! All coordinates are rows in document space. Row 0 is the top of the
//! hero section; the sticky header bar lives outside this space.

use crate::content::{self, EXPERIENCE_TABS, PROFILE, PROJECTS};
use crate::types::SectionId;

// ============================================================================
// CONSTANTS (Tuning)
// ============================================================================

/// Rows taken by the sticky header bar above the content viewport.
pub const HEADER_ROWS: u16 = 3;

/// Scroll offset beyond which the header switches to its compact
/// "scrolled" treatment.
pub const NAV_SCROLLED_THRESHOLD: u16 = 6;

/// Scroll offset beyond which the back-to-top affordance shows.
pub const BACK_TO_TOP_THRESHOLD: u16 = 40;

/// Extra rows added to the scroll offset when probing for the active
/// section, biasing the match toward the section the reader is looking
/// at rather than the one leaving the viewport.
pub const SECTION_PROBE_EXTRA: u16 = 2;

/// Rows short of the viewport bottom at which reveals trigger, so
/// blocks start appearing slightly before they would naturally enter.
pub const REVEAL_LEAD_MARGIN: u16 = 3;

/// Fraction of a block that must clear the trigger line to reveal.
pub const REVEAL_VISIBLE_FRACTION: f32 = 0.08;

/// Hero parallax: rows of offset per row of scroll.
pub const PARALLAX_COEFFICIENT: f32 = -0.3;

/// Rows used by a section heading (title, rule, spacer).
pub const SECTION_HEADER_ROWS: u16 = 3;

/// Rows given to the message input (the other fields get one).
pub const MESSAGE_INPUT_ROWS: u16 = 3;

// ============================================================================
// TEXT MEASUREMENT
// ============================================================================

/// Usable text width inside the content margins.
pub fn content_width(width: u16) -> u16 {
    width.saturating_sub(4).clamp(20, 80)
}

/// Wrap a paragraph to the given width.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    textwrap::wrap(text, width.max(1) as usize)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Rows a wrapped paragraph occupies.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    wrap_text(text, width).len() as u16
}

// ============================================================================
// SECTION HEIGHTS
// ============================================================================

fn hero_height(w: u16) -> u16 {
    // pad, name, gap, tagline, gap, social row, pad
    2 + 1 + 1 + wrapped_height(PROFILE.tagline, w) + 1 + 1 + 2
}

fn about_height(w: u16) -> u16 {
    let body: u16 = PROFILE
        .bio
        .iter()
        .map(|paragraph| wrapped_height(paragraph, w) + 1)
        .sum();
    SECTION_HEADER_ROWS + body + 1
}

fn experience_height(w: u16, active_tab: &str) -> u16 {
    let tab = content::EXPERIENCE_TABS
        .iter()
        .find(|tab| tab.id == active_tab)
        .unwrap_or(&EXPERIENCE_TABS[0]);

    let panel: u16 = tab
        .entries
        .iter()
        .map(|entry| 2 + wrapped_height(entry.summary, w) + 1)
        .sum();

    // header, tab bar, spacer, panel, pad
    SECTION_HEADER_ROWS + 1 + 1 + panel + 1
}

fn projects_height(w: u16) -> u16 {
    let cards: u16 = PROJECTS
        .iter()
        .map(|record| 2 + wrapped_height(record.short_description, w.saturating_sub(2)) + 1)
        .sum();
    SECTION_HEADER_ROWS + cards + 1
}

fn contact_height(w: u16) -> u16 {
    // Three one-row inputs and one taller message input, each with a
    // label row and an error row.
    let fields = 3 * 3 + (2 + MESSAGE_INPUT_ROWS);
    let intro = wrapped_height(content::CONTACT_INTRO, w);
    // header, intro, gap, fields, gap, submit, status, gap, footer, pad
    SECTION_HEADER_ROWS + intro + 1 + fields + 1 + 1 + 1 + 1 + 1 + 1
}

// ============================================================================
// DOCUMENT MAP
// ============================================================================

/// Vertical extent of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionExtent {
    pub id: SectionId,
    pub top: u16,
    pub height: u16,
}

impl SectionExtent {
    pub fn bottom(&self) -> u16 {
        self.top + self.height
    }

    /// Containment test, half-open: `[top, bottom)`.
    pub fn contains(&self, row: u16) -> bool {
        row >= self.top && row < self.bottom()
    }
}

/// Measured layout of the whole document at one width.
///
/// Recomputed on resize and on tab switches (the active panel's height
/// feeds the extents); cheap enough that nothing is cached beyond it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMap {
    pub content_width: u16,
    pub extents: [SectionExtent; 5],
    pub total_rows: u16,
}

impl DocumentMap {
    /// Measure all sections at the given terminal width.
    pub fn compute(width: u16, active_tab: &str) -> DocumentMap {
        let w = content_width(width);

        let heights = [
            hero_height(w),
            about_height(w),
            experience_height(w, active_tab),
            projects_height(w),
            contact_height(w),
        ];

        let mut top = 0u16;
        let mut extents = [SectionExtent {
            id: SectionId::Home,
            top: 0,
            height: 0,
        }; 5];

        for (i, id) in SectionId::ALL.into_iter().enumerate() {
            extents[i] = SectionExtent {
                id,
                top,
                height: heights[i],
            };
            top = top.saturating_add(heights[i]);
        }

        DocumentMap {
            content_width: w,
            extents,
            total_rows: top,
        }
    }

    pub fn extent(&self, id: SectionId) -> SectionExtent {
        self.extents[id as usize]
    }

    /// The section containing the probe row, if any.
    ///
    /// Extents are contiguous and non-overlapping, so at most one
    /// matches; first enclosing match wins.
    pub fn active_section(&self, scroll: u16) -> Option<SectionId> {
        let probe = scroll.saturating_add(SECTION_PROBE_EXTRA);
        self.extents
            .iter()
            .find(|extent| extent.contains(probe))
            .map(|extent| extent.id)
    }

    /// Scroll offset that puts a section's top at the top of the
    /// content viewport.
    pub fn target_scroll(&self, id: SectionId) -> u16 {
        self.extent(id).top
    }

    /// Largest useful scroll offset for a given viewport height.
    pub fn max_scroll(&self, viewport_rows: u16) -> u16 {
        self.total_rows.saturating_sub(viewport_rows)
    }

    /// Content area of a section (below its heading) — the block the
    /// reveal controller watches.
    pub fn reveal_target(&self, id: SectionId) -> SectionExtent {
        let extent = self.extent(id);
        SectionExtent {
            id,
            top: extent.top + SECTION_HEADER_ROWS.min(extent.height),
            height: extent.height.saturating_sub(SECTION_HEADER_ROWS),
        }
    }
}

// ============================================================================
// INTERIOR GEOMETRY
// ============================================================================

/// Rows of one contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRows {
    pub label: u16,
    pub input_top: u16,
    pub input_rows: u16,
    pub error: u16,
}

/// Row positions inside the contact section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRows {
    pub intro_top: u16,
    pub fields: [(crate::types::FieldId, FieldRows); 4],
    pub submit: u16,
    pub status: u16,
    pub footer: u16,
}

impl ContactRows {
    pub fn field(&self, id: crate::types::FieldId) -> FieldRows {
        self.fields
            .iter()
            .find(|(field, _)| *field == id)
            .map(|(_, rows)| *rows)
            .expect("all four fields are present")
    }
}

impl DocumentMap {
    /// Row positions of the contact form's interior. Mirrors the
    /// contact height formula row for row.
    pub fn contact_rows(&self) -> ContactRows {
        use crate::types::FieldId;

        let extent = self.extent(SectionId::Contact);
        let w = self.content_width;

        let intro_top = extent.top + SECTION_HEADER_ROWS;
        let mut row = intro_top + wrapped_height(content::CONTACT_INTRO, w) + 1;

        let mut fields = [(FieldId::Name, FieldRows { label: 0, input_top: 0, input_rows: 0, error: 0 }); 4];
        for (i, field) in FieldId::ALL.into_iter().enumerate() {
            let input_rows = if field == FieldId::Message {
                MESSAGE_INPUT_ROWS
            } else {
                1
            };
            let rows = FieldRows {
                label: row,
                input_top: row + 1,
                input_rows,
                error: row + 1 + input_rows,
            };
            fields[i] = (field, rows);
            row = rows.error + 1;
        }

        let submit = row + 1;
        let status = submit + 1;
        let footer = status + 2;

        ContactRows {
            intro_top,
            fields,
            submit,
            status,
            footer,
        }
    }

    /// Project cards as (id, top, clickable height), in catalog order.
    pub fn project_cards(&self) -> Vec<(u32, u16, u16)> {
        let extent = self.extent(SectionId::Projects);
        let w = self.content_width;

        let mut cards = Vec::with_capacity(PROJECTS.len());
        let mut top = extent.top + SECTION_HEADER_ROWS;
        for record in PROJECTS {
            let body = wrapped_height(record.short_description, w.saturating_sub(2));
            cards.push((record.id, top, 2 + body));
            top += 3 + body;
        }
        cards
    }

    /// Document row of the experience tab bar.
    pub fn tab_bar_row(&self) -> u16 {
        self.extent(SectionId::Experience).top + SECTION_HEADER_ROWS
    }

    /// Column spans of the tab labels, as (id, start, end) with `end`
    /// exclusive. Matches the rendering: labels start at the content
    /// margin, separated by three columns.
    pub fn tab_spans(&self) -> Vec<(&'static str, u16, u16)> {
        let mut spans = Vec::with_capacity(EXPERIENCE_TABS.len());
        let mut col = 2u16;
        for tab in EXPERIENCE_TABS {
            let len = tab.label.chars().count() as u16;
            spans.push((tab.id, col, col + len));
            col += len + 3;
        }
        spans
    }

    /// Document row a focusable element should be scrolled to, if it
    /// lives in the document at all (header elements don't).
    pub fn focus_row(&self, item: crate::tui::state::Focusable) -> Option<u16> {
        use crate::tui::state::Focusable;

        match item {
            Focusable::NavLink(_) | Focusable::ThemeToggle => None,
            Focusable::ProjectCard(id) => self
                .project_cards()
                .into_iter()
                .find(|(card_id, _, _)| *card_id == id)
                .map(|(_, top, _)| top),
            Focusable::Field(field) => Some(self.contact_rows().field(field).input_top),
            Focusable::SubmitButton => Some(self.contact_rows().submit),
        }
    }
}

// ============================================================================
// SCROLL PREDICATES
// ============================================================================

/// Header compact-mode flag.
pub fn is_scrolled(scroll: u16, threshold: u16) -> bool {
    scroll > threshold
}

/// Back-to-top affordance visibility.
pub fn back_to_top_visible(scroll: u16) -> bool {
    scroll > BACK_TO_TOP_THRESHOLD
}

/// Hero parallax offset in rows (negative = upward) for a scroll
/// position. Truncates toward zero.
pub fn parallax_offset(scroll: u16) -> i16 {
    (scroll as f32 * PARALLAX_COEFFICIENT) as i16
}

/// Whether a block's reveal should fire at the current viewport.
///
/// The trigger point is the block top plus the minimum visible
/// fraction of its height; it fires once that point rises above the
/// viewport bottom minus the lead margin.
pub fn reveal_fires(block: SectionExtent, scroll: u16, viewport_rows: u16) -> bool {
    let trigger = block.top + (block.height as f32 * REVEAL_VISIBLE_FRACTION).ceil() as u16;
    let visible_bottom = scroll
        .saturating_add(viewport_rows)
        .saturating_sub(REVEAL_LEAD_MARGIN);
    trigger < visible_bottom
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> DocumentMap {
        DocumentMap::compute(100, content::INITIAL_TAB)
    }

    #[test]
    fn extents_are_contiguous_from_zero() {
        let map = map();
        assert_eq!(map.extents[0].top, 0);
        for pair in map.extents.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].top);
        }
        assert_eq!(map.extents[4].bottom(), map.total_rows);
    }

    #[test]
    fn scrolled_flag_follows_threshold() {
        assert!(is_scrolled(150, 100));
        assert!(!is_scrolled(50, 100));
        assert!(!is_scrolled(100, 100));
    }

    #[test]
    fn exactly_one_section_is_active() {
        let map = map();
        for scroll in 0..map.total_rows.saturating_sub(SECTION_PROBE_EXTRA) {
            let matches = map
                .extents
                .iter()
                .filter(|e| e.contains(scroll + SECTION_PROBE_EXTRA))
                .count();
            assert_eq!(matches, 1, "scroll {}", scroll);
        }
    }

    #[test]
    fn active_section_none_past_document_end() {
        let map = map();
        assert_eq!(map.active_section(map.total_rows + 10), None);
    }

    #[test]
    fn active_section_tracks_extent_tops() {
        let map = map();
        let about = map.extent(SectionId::About);
        assert_eq!(map.active_section(about.top), Some(SectionId::About));
        // Just before a section top (minus the probe bias) the previous
        // section is still active.
        assert_eq!(
            map.active_section(about.top.saturating_sub(SECTION_PROBE_EXTRA + 1)),
            Some(SectionId::Home)
        );
    }

    #[test]
    fn target_scroll_lands_on_section_top() {
        let map = map();
        let projects = map.extent(SectionId::Projects);
        assert_eq!(map.target_scroll(SectionId::Projects), projects.top);
        assert_eq!(map.target_scroll(SectionId::Home), 0);
    }

    #[test]
    fn max_scroll_clamps_to_zero_for_tall_viewports() {
        let map = map();
        assert_eq!(map.max_scroll(map.total_rows + 50), 0);
        assert_eq!(map.max_scroll(10), map.total_rows - 10);
    }

    #[test]
    fn tab_switch_changes_experience_extent_only_downstream() {
        let work = DocumentMap::compute(100, "work");
        let education = DocumentMap::compute(100, "education");
        assert_eq!(
            work.extent(SectionId::About),
            education.extent(SectionId::About)
        );
        // Downstream sections shift with the panel height.
        assert_eq!(
            work.extent(SectionId::Projects).height,
            education.extent(SectionId::Projects).height
        );
    }

    #[test]
    fn parallax_follows_scroll() {
        assert_eq!(parallax_offset(0), 0);
        assert_eq!(parallax_offset(10), -3);
        assert_eq!(parallax_offset(100), -30);
    }

    #[test]
    fn back_to_top_threshold() {
        assert!(!back_to_top_visible(40));
        assert!(back_to_top_visible(41));
    }

    #[test]
    fn reveal_fires_once_trigger_enters_viewport() {
        let block = SectionExtent {
            id: SectionId::About,
            top: 50,
            height: 20,
        };
        // trigger = 50 + ceil(20 * 0.08) = 52
        // Viewport bottom (minus lead margin) must pass row 52.
        assert!(!reveal_fires(block, 0, 40)); // bottom = 37
        assert!(!reveal_fires(block, 15, 40)); // bottom = 52, not strictly past
        assert!(reveal_fires(block, 16, 40)); // bottom = 53
        // Far past the block: still fires (one-shot latching is the
        // caller's job).
        assert!(reveal_fires(block, 200, 40));
    }

    #[test]
    fn narrow_terminals_still_measure() {
        let map = DocumentMap::compute(10, content::INITIAL_TAB);
        assert_eq!(map.content_width, 20);
        assert!(map.total_rows > 0);
    }

    #[test]
    fn contact_rows_stay_inside_the_section() {
        let map = map();
        let extent = map.extent(SectionId::Contact);
        let rows = map.contact_rows();

        assert!(rows.intro_top >= extent.top + SECTION_HEADER_ROWS);
        for (_, field) in rows.fields {
            assert_eq!(field.input_top, field.label + 1);
            assert_eq!(field.error, field.input_top + field.input_rows);
        }
        assert!(rows.submit > rows.fields[3].1.error);
        assert_eq!(rows.status, rows.submit + 1);
        // Footer and trailing pad close out the measured height.
        assert_eq!(rows.footer + 2, extent.bottom());
    }

    #[test]
    fn message_field_is_taller() {
        let rows = map().contact_rows();
        use crate::types::FieldId;
        assert_eq!(rows.field(FieldId::Name).input_rows, 1);
        assert_eq!(rows.field(FieldId::Message).input_rows, MESSAGE_INPUT_ROWS);
    }

    #[test]
    fn project_cards_tile_the_section() {
        let map = map();
        let extent = map.extent(SectionId::Projects);
        let cards = map.project_cards();

        assert_eq!(cards.len(), PROJECTS.len());
        assert_eq!(cards[0].1, extent.top + SECTION_HEADER_ROWS);
        for pair in cards.windows(2) {
            let (_, top, height) = pair[0];
            // One gap row between cards.
            assert_eq!(top + height + 1, pair[1].1);
        }
        let (_, last_top, last_height) = cards[cards.len() - 1];
        // Last card, its gap row, and the section pad end the extent.
        assert_eq!(last_top + last_height + 2, extent.bottom());
    }

    #[test]
    fn tab_spans_do_not_overlap() {
        let spans = map().tab_spans();
        assert_eq!(spans.len(), EXPERIENCE_TABS.len());
        for pair in spans.windows(2) {
            assert!(pair[0].2 < pair[1].1);
        }
    }

    #[test]
    fn focus_rows_exist_only_for_document_elements() {
        use crate::tui::state::Focusable;
        use crate::types::FieldId;

        let map = map();
        assert_eq!(map.focus_row(Focusable::NavLink(SectionId::About)), None);
        assert_eq!(map.focus_row(Focusable::ThemeToggle), None);
        assert!(map.focus_row(Focusable::ProjectCard(1)).is_some());
        assert_eq!(map.focus_row(Focusable::ProjectCard(999)), None);
        assert!(map.focus_row(Focusable::Field(FieldId::Email)).is_some());
        assert!(map.focus_row(Focusable::SubmitButton).is_some());
    }
}
