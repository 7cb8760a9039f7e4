//! Pure rendering: map App state to ratatui widget trees.
//!
//! The document is built as one list of lines whose length always
//! equals the measured map's `total_rows` — the geometry module and
//! this one describe the same structure, and the tests hold them to
//! it. The only effects are `Frame::render_widget` calls.
//!
//! Mouse hit-testing lives here too: it is the inverse of rendering
//! and shares the same layout helpers.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::content::{self, EXPERIENCE_TABS, PROFILE, PROJECTS};
use crate::document;
use crate::types::{FieldId, ProjectRecord, SectionId};

use super::state::{
    page_focusables, Action, App, DrawerState, Focusable, InputModality, ModalItem, ModalState,
    SubmitPhase,
};
use super::theme::Palette;

/// Success banner under the form.
const STATUS_SUCCESS: &str = "Thank you! I'll get back to you soon.";

/// Generic failure banner; transport detail never reaches the UI.
const STATUS_FAILURE: &str = "Sorry, something went wrong. Please try again.";

/// Drawer panel width including its border.
const DRAWER_WIDTH: u16 = 26;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole UI for the current state.
pub fn render(app: &App, frame: &mut Frame) {
    let palette = Palette::of(app.theme);
    let area = frame.area();

    // Theme background under everything.
    frame.render_widget(Block::new().style(palette.base()), area);

    // Sticky header.
    let header_area = Rect {
        x: 0,
        y: 0,
        width: area.width,
        height: document::HEADER_ROWS.min(area.height),
    };
    frame.render_widget(Paragraph::new(header_lines(app, palette)), header_area);

    // Scrolled document below it.
    if area.height > document::HEADER_ROWS {
        let content_area = Rect {
            x: 0,
            y: document::HEADER_ROWS,
            width: area.width,
            height: area.height - document::HEADER_ROWS,
        };
        let doc = Paragraph::new(document_lines(app, palette)).scroll((app.scroll.offset, 0));
        frame.render_widget(doc, content_area);

        // Back-to-top affordance, suppressed under overlays.
        if document::back_to_top_visible(app.scroll.offset) && !app.scroll_locked() {
            let hint = Rect {
                x: area.width.saturating_sub(10),
                y: area.height - 1,
                width: 9u16.min(area.width),
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Span::styled("[h] top ↑", palette.accent())),
                hint,
            );
        }
    }

    if app.drawer.is_open() {
        render_drawer(app, palette, frame);
    }

    if app.modal.is_open() {
        render_modal(app, palette, frame);
    }
}

// ============================================================================
// FOCUS HELPERS
// ============================================================================

fn focused_item(app: &App) -> Option<Focusable> {
    app.focus
        .cursor
        .and_then(|cursor| page_focusables().get(cursor).copied())
}

/// Focus rings are drawn only while navigating by keyboard.
fn is_focused(app: &App, item: Focusable) -> bool {
    app.modality == InputModality::Keyboard && focused_item(app) == Some(item)
}

fn dim(style: Style, dimmed: bool, palette: &Palette) -> Style {
    if dimmed {
        palette.muted()
    } else {
        style
    }
}

// ============================================================================
// HEADER
// ============================================================================

/// Column spans of the header's interactive zones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Nav link spans (wide terminals only), `end` exclusive.
    pub nav: Vec<(SectionId, u16, u16)>,
    /// Menu affordance span (narrow terminals only).
    pub menu: Option<(u16, u16)>,
    /// Theme toggle span.
    pub theme: (u16, u16),
}

/// Where the header's interactive pieces sit at the current width.
/// Rendering and hit-testing both use this.
pub fn header_layout(app: &App) -> HeaderLayout {
    let theme_start = app.width.saturating_sub(10);
    let theme = (theme_start, app.width.saturating_sub(1));

    if app.is_narrow() {
        HeaderLayout {
            nav: Vec::new(),
            menu: Some((2, 10)),
            theme,
        }
    } else {
        let mut nav = Vec::with_capacity(SectionId::ALL.len());
        let mut col = 2u16;
        for id in SectionId::ALL {
            let len = id.label().chars().count() as u16;
            nav.push((id, col, col + len));
            col += len + 2;
        }
        HeaderLayout {
            nav,
            menu: None,
            theme,
        }
    }
}

fn header_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let layout = header_layout(app);
    let width = app.width as usize;

    // Brand row: name left, active section right.
    let brand = "  ◆ Regis Kayumba";
    let section = app
        .active_section
        .map(|id| id.label())
        .unwrap_or_default();
    let pad = width
        .saturating_sub(brand.chars().count())
        .saturating_sub(section.chars().count() + 2);
    let brand_row = Line::from(vec![
        Span::styled(brand.to_string(), palette.heading()),
        Span::raw(" ".repeat(pad)),
        Span::styled(format!("{}  ", section), palette.muted()),
    ]);

    // Nav row: links (or the menu affordance) left, theme toggle right.
    let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];
    let mut col = 2u16;
    if let Some((start, _)) = layout.menu {
        debug_assert_eq!(start, 2);
        let style = if app.drawer.is_open() {
            palette.active()
        } else {
            palette.accent()
        };
        spans.push(Span::styled("[m] menu", style));
        col += 8;
    } else {
        for (i, (id, start, end)) in layout.nav.iter().enumerate() {
            debug_assert_eq!(*start, col);
            let style = if is_focused(app, Focusable::NavLink(*id)) {
                palette.focus()
            } else if app.active_section == Some(*id) {
                palette.active()
            } else {
                palette.accent()
            };
            spans.push(Span::styled(id.label().to_string(), style));
            col = *end;
            if i + 1 < layout.nav.len() {
                spans.push(Span::raw("  "));
                col += 2;
            }
        }
    }

    // Pulse briefly collapses the toggle label — the shrink affordance.
    let theme_text = if app.pulse_until.is_some() {
        "[t] ·    ".to_string()
    } else {
        format!("[t] {:<5}", app.theme.name())
    };
    let theme_style = if is_focused(app, Focusable::ThemeToggle) {
        palette.focus()
    } else {
        palette.accent()
    };
    let pad = (layout.theme.0 as usize).saturating_sub(col as usize);
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(theme_text, theme_style));
    let nav_row = Line::from(spans);

    // Rule row, heavier once scrolled, with the shortcut hints tucked
    // into its right end.
    let scrolled = document::is_scrolled(app.scroll.offset, document::NAV_SCROLLED_THRESHOLD);
    let rule_char = if scrolled { "━" } else { "─" };
    let hints = " [r]esume · [h]ome · [c]ontact · [q]uit ";
    let rule_len = width.saturating_sub(hints.chars().count());
    let rule_row = Line::from(vec![
        Span::styled(rule_char.repeat(rule_len), palette.muted()),
        Span::styled(hints.to_string(), palette.muted()),
    ]);

    vec![brand_row, nav_row, rule_row]
}

// ============================================================================
// DOCUMENT
// ============================================================================

/// The whole document as lines; index = document row.
pub fn document_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let mut hero = hero_lines(app, palette);

    // Parallax: the hero climbs faster than the page scrolls. Clip at
    // the top, keep the extent height stable.
    let shift = (document::parallax_offset(app.scroll.offset).unsigned_abs() as usize)
        .min(hero.len());
    hero.drain(..shift);
    hero.extend(std::iter::repeat_with(Line::default).take(shift));

    let mut lines = hero;
    lines.extend(about_lines(app, palette));
    lines.extend(experience_lines(app, palette));
    lines.extend(projects_lines(app, palette));
    lines.extend(contact_lines(app, palette));
    lines
}

fn section_header(title: &str, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(format!("  ❯ {}", title), palette.heading())),
        Line::from(Span::styled(
            format!("  {}", "─".repeat((title.chars().count() + 2).min(width as usize))),
            palette.muted(),
        )),
        Line::default(),
    ]
}

fn hero_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let w = app.map.content_width;
    let mut lines = vec![Line::default(), Line::default()];

    let name_len = PROFILE.name.chars().count();
    let shown: String = PROFILE
        .name
        .chars()
        .take(app.typing.shown_chars(name_len))
        .collect();
    let mut name_spans = vec![Span::styled(format!("  {}", shown), palette.heading())];
    if app.typing.cursor_visible() {
        name_spans.push(Span::styled("▌".to_string(), palette.accent()));
    }
    lines.push(Line::from(name_spans));
    lines.push(Line::default());

    for row in document::wrap_text(PROFILE.tagline, w) {
        lines.push(Line::from(Span::styled(
            format!("  {}", row),
            palette.muted(),
        )));
    }
    lines.push(Line::default());

    let social = PROFILE
        .social
        .iter()
        .map(|link| link.label)
        .collect::<Vec<_>>()
        .join("  ·  ");
    lines.push(Line::from(Span::styled(
        format!("  {}", social),
        palette.accent(),
    )));

    lines.push(Line::default());
    lines.push(Line::default());
    lines
}

fn about_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let w = app.map.content_width;
    let d = !app.revealed.contains(&SectionId::About);

    let mut lines = section_header("About", w, palette);
    for paragraph in PROFILE.bio {
        for row in document::wrap_text(paragraph, w) {
            lines.push(Line::from(Span::styled(
                format!("  {}", row),
                dim(palette.base(), d, palette),
            )));
        }
        lines.push(Line::default());
    }
    lines.push(Line::default());
    lines
}

fn experience_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let w = app.map.content_width;
    let d = !app.revealed.contains(&SectionId::Experience);

    let mut lines = section_header("Experience", w, palette);

    // Tab bar: spans must line up with the measured tab spans.
    let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];
    for (i, tab) in EXPERIENCE_TABS.iter().enumerate() {
        let style = if tab.id == app.active_tab {
            dim(palette.active(), d, palette)
        } else {
            palette.muted()
        };
        spans.push(Span::styled(tab.label.to_string(), style));
        if i + 1 < EXPERIENCE_TABS.len() {
            spans.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(spans));
    lines.push(Line::default());

    let tab = EXPERIENCE_TABS
        .iter()
        .find(|tab| tab.id == app.active_tab)
        .unwrap_or(&EXPERIENCE_TABS[0]);
    for entry in tab.entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", entry.role), dim(palette.heading(), d, palette)),
            Span::styled(format!(" · {}", entry.organization), dim(palette.accent(), d, palette)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.period),
            palette.muted(),
        )));
        for row in document::wrap_text(entry.summary, w) {
            lines.push(Line::from(Span::styled(
                format!("  {}", row),
                dim(palette.base(), d, palette),
            )));
        }
        lines.push(Line::default());
    }

    lines.push(Line::default());
    lines
}

fn projects_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let w = app.map.content_width;
    let d = !app.revealed.contains(&SectionId::Projects);

    let mut lines = section_header("Projects", w, palette);
    for record in PROJECTS {
        let title_style = if is_focused(app, Focusable::ProjectCard(record.id)) {
            palette.focus()
        } else {
            dim(palette.heading(), d, palette)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  ▸ {}", record.title), title_style),
            Span::styled("  ⏎".to_string(), palette.muted()),
        ]));
        for row in document::wrap_text(record.short_description, w.saturating_sub(2)) {
            lines.push(Line::from(Span::styled(
                format!("    {}", row),
                dim(palette.base(), d, palette),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("    {}", record.tags.join(" · ")),
            dim(palette.accent(), d, palette),
        )));
        lines.push(Line::default());
    }
    lines.push(Line::default());
    lines
}

fn contact_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let w = app.map.content_width;
    let d = !app.revealed.contains(&SectionId::Contact);
    let field_w = w.saturating_sub(2) as usize;

    let mut lines = section_header("Contact", w, palette);

    for row in document::wrap_text(content::CONTACT_INTRO, w) {
        lines.push(Line::from(Span::styled(
            format!("  {}", row),
            dim(palette.base(), d, palette),
        )));
    }
    lines.push(Line::default());

    for field in FieldId::ALL {
        lines.push(Line::from(Span::styled(
            format!("  {}", field.label()),
            palette.muted(),
        )));

        let editing = app.focus.editing == Some(field);
        let input_style = if editing || is_focused(app, Focusable::Field(field)) {
            palette.surface().patch(palette.accent())
        } else {
            dim(palette.surface(), d, palette)
        };

        if field == FieldId::Message {
            for row in message_rows(app, field_w, editing) {
                lines.push(Line::from(Span::styled(
                    format!("  {:<width$}", row, width = field_w),
                    input_style,
                )));
            }
        } else {
            let row = input_row(app.form.data.get(field), app.form.cursor, field_w, editing);
            lines.push(Line::from(Span::styled(
                format!("  {:<width$}", row, width = field_w),
                input_style,
            )));
        }

        match app.form.errors.get(field) {
            Some(message) => lines.push(Line::from(Span::styled(
                format!("  ✱ {}", message),
                palette.danger(),
            ))),
            None => lines.push(Line::default()),
        }
    }

    lines.push(Line::default());

    // Submit control: disabled label while the POST is in flight.
    let submit_label = if app.form.submit_enabled() {
        "[ Send Message ]"
    } else {
        "[ Sending… ]"
    };
    let submit_style = if !app.form.submit_enabled() {
        palette.muted()
    } else if is_focused(app, Focusable::SubmitButton) {
        palette.focus()
    } else {
        palette.active()
    };
    lines.push(Line::from(Span::styled(
        format!("  {}", submit_label),
        submit_style,
    )));

    // Status banner for its fixed lifetime.
    let status = match app.form.phase {
        SubmitPhase::Succeeded if app.form.status_expires_at.is_some() => {
            Some((STATUS_SUCCESS, palette.success()))
        }
        SubmitPhase::Failed if app.form.status_expires_at.is_some() => {
            Some((STATUS_FAILURE, palette.danger()))
        }
        _ => None,
    };
    match status {
        Some((text, style)) => lines.push(Line::from(Span::styled(format!("  {}", text), style))),
        None => lines.push(Line::default()),
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("  © {} {}", app.year, PROFILE.name),
        palette.muted(),
    )));
    lines.push(Line::default());
    lines
}

/// Single-line input: end-anchored window with a cursor glyph while
/// editing.
fn input_row(value: &str, cursor: usize, field_w: usize, editing: bool) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    if editing {
        chars.insert(cursor.min(chars.len()), '▌');
    }
    let skip = chars.len().saturating_sub(field_w);
    chars.into_iter().skip(skip).collect()
}

/// Message input: the last rows of the wrapped text, padded to the
/// fixed row count.
fn message_rows(app: &App, field_w: usize, editing: bool) -> Vec<String> {
    let mut rows: Vec<String> = app
        .form
        .data
        .message
        .split('\n')
        .flat_map(|part| {
            if part.is_empty() {
                vec![String::new()]
            } else {
                document::wrap_text(part, field_w as u16)
            }
        })
        .collect();

    if editing {
        match rows.last_mut() {
            Some(last) if last.chars().count() < field_w => last.push('▌'),
            _ => rows.push("▌".to_string()),
        }
    }

    let rows_wanted = document::MESSAGE_INPUT_ROWS as usize;
    let skip = rows.len().saturating_sub(rows_wanted);
    let mut rows: Vec<String> = rows.into_iter().skip(skip).collect();
    while rows.len() < rows_wanted {
        rows.push(String::new());
    }
    rows
}

// ============================================================================
// PROJECT MODAL
// ============================================================================

/// View-model for the project dialog: pure data derived fresh from a
/// catalog record on every open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectView {
    pub title: String,
    pub short: String,
    pub paragraphs: Vec<String>,
    pub tags: Vec<&'static str>,
    pub source: &'static str,
    pub demo: Option<&'static str>,
}

/// Derive the dialog's view-model from a catalog record.
pub fn project_view(record: &ProjectRecord) -> ProjectView {
    ProjectView {
        title: record.title.to_string(),
        short: record.short_description.to_string(),
        paragraphs: record
            .long_description
            .split("\n\n")
            .map(str::to_string)
            .collect(),
        tags: record.tags.to_vec(),
        source: record.source_url,
        demo: record.demo_link(),
    }
}

/// Dialog body plus the rows (relative to the body top) of its link
/// items, for focus styling and hit-testing.
pub struct ModalBody {
    pub lines: Vec<Line<'static>>,
    pub source_row: usize,
    pub demo_row: Option<usize>,
}

fn modal_body(
    view: &ProjectView,
    inner_w: u16,
    focus: usize,
    keyboard: bool,
    palette: &Palette,
) -> ModalBody {
    let items = [ModalItem::Close, ModalItem::SourceLink, ModalItem::DemoLink];
    let ring_style = |item: ModalItem, base: Style| -> Style {
        let index = items.iter().position(|i| *i == item).unwrap();
        if keyboard && focus == index {
            palette.focus()
        } else {
            base
        }
    };

    let mut lines = Vec::new();
    for row in document::wrap_text(&view.short, inner_w) {
        lines.push(Line::from(Span::styled(row, palette.muted())));
    }
    lines.push(Line::default());

    for paragraph in &view.paragraphs {
        for row in document::wrap_text(paragraph, inner_w) {
            lines.push(Line::from(Span::raw(row)));
        }
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        view.tags.join(" · "),
        palette.accent(),
    )));
    lines.push(Line::default());

    let source_row = lines.len();
    lines.push(Line::from(vec![
        Span::styled("Source ".to_string(), palette.muted()),
        Span::styled(
            view.source.to_string(),
            ring_style(ModalItem::SourceLink, palette.link()),
        ),
    ]));

    let demo_row = view.demo.map(|demo| {
        let row = lines.len();
        lines.push(Line::from(vec![
            Span::styled("Demo   ".to_string(), palette.muted()),
            Span::styled(
                demo.to_string(),
                ring_style(ModalItem::DemoLink, palette.link()),
            ),
        ]));
        row
    });

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Esc close · Tab cycle · Enter open".to_string(),
        palette.muted(),
    )));

    ModalBody {
        lines,
        source_row,
        demo_row,
    }
}

/// Dialog rectangle, centered, clamped to the terminal.
pub fn modal_rect(app: &App) -> Rect {
    let width = app.width.saturating_sub(6).min(72).max(20);
    let inner_w = width.saturating_sub(4);

    let height = match app.modal {
        ModalState::Open { project_id, .. } => content::project_by_id(project_id)
            .map(|record| {
                let view = project_view(record);
                let palette = Palette::of(crate::types::Theme::Dark);
                modal_body(&view, inner_w, 0, false, palette).lines.len() as u16 + 2
            })
            .unwrap_or(10),
        ModalState::Closed => 10,
    }
    .min(app.height.saturating_sub(2));

    Rect {
        x: app.width.saturating_sub(width) / 2,
        y: app.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

fn render_modal(app: &App, palette: &Palette, frame: &mut Frame) {
    let ModalState::Open { project_id, focus } = app.modal else {
        return;
    };
    let Some(record) = content::project_by_id(project_id) else {
        return;
    };

    let rect = modal_rect(app);
    let keyboard = app.modality == InputModality::Keyboard;
    let view = project_view(record);
    let body = modal_body(&view, rect.width.saturating_sub(4), focus, keyboard, palette);

    let close_style = if keyboard && focus == 0 {
        palette.focus()
    } else {
        palette.accent()
    };
    let block = Block::new()
        .borders(Borders::ALL)
        .border_style(palette.muted())
        .style(palette.base())
        .title(Line::from(Span::styled(
            format!(" {} ", view.title),
            palette.heading(),
        )))
        .title(Line::from(Span::styled("[✕]".to_string(), close_style)).right_aligned());

    frame.render_widget(Clear, rect);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    frame.render_widget(Paragraph::new(body.lines), inner);
}

// ============================================================================
// DRAWER
// ============================================================================

/// Drawer panel rectangle: right edge, under the header.
pub fn drawer_rect(app: &App) -> Rect {
    let width = DRAWER_WIDTH.min(app.width.saturating_sub(2));
    let height = (SectionId::ALL.len() as u16 + 2).min(app.height.saturating_sub(document::HEADER_ROWS));
    Rect {
        x: app.width.saturating_sub(width + 1),
        y: document::HEADER_ROWS,
        width,
        height,
    }
}

fn render_drawer(app: &App, palette: &Palette, frame: &mut Frame) {
    let DrawerState::Open { cursor } = app.drawer else {
        return;
    };

    let rect = drawer_rect(app);
    let block = Block::new()
        .borders(Borders::ALL)
        .border_style(palette.accent())
        .style(palette.base())
        .title(Line::from(Span::styled(" Menu ", palette.heading())));

    frame.render_widget(Clear, rect);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let mut lines = Vec::with_capacity(SectionId::ALL.len());
    for (i, id) in SectionId::ALL.into_iter().enumerate() {
        let style = if i == cursor {
            palette.focus()
        } else if app.active_section == Some(id) {
            palette.active()
        } else {
            palette.accent()
        };
        lines.push(Line::from(Span::styled(format!("  {}", id.label()), style)));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// HIT TESTING
// ============================================================================

/// Map a pointer press at screen (column, row) to an action.
///
/// The inverse of rendering: overlays first, then the header, then
/// document coordinates. `None` falls through to nothing.
pub fn hit_test(app: &App, column: u16, row: u16) -> Option<Action> {
    // Modal traps the pointer: outside closes, items activate.
    if let ModalState::Open { project_id, .. } = app.modal {
        let rect = modal_rect(app);
        if !rect_contains(rect, column, row) {
            return Some(Action::Back);
        }
        if row == rect.y && column >= rect.right().saturating_sub(5) {
            return Some(Action::ModalActivate(ModalItem::Close));
        }
        if let Some(record) = content::project_by_id(project_id) {
            let view = project_view(record);
            let palette = Palette::of(app.theme);
            let body = modal_body(&view, rect.width.saturating_sub(4), 0, false, palette);
            let body_row = (row as i32) - (rect.y as i32 + 1);
            if body_row == body.source_row as i32 {
                return Some(Action::ModalActivate(ModalItem::SourceLink));
            }
            if body.demo_row.is_some_and(|r| body_row == r as i32) {
                return Some(Action::ModalActivate(ModalItem::DemoLink));
            }
        }
        return None;
    }

    // Drawer overlay: links activate, anywhere else closes.
    if app.drawer.is_open() {
        let rect = drawer_rect(app);
        if !rect_contains(rect, column, row) {
            return Some(Action::Back);
        }
        let link = (row as i32) - (rect.y as i32 + 1);
        if (0..SectionId::ALL.len() as i32).contains(&link) {
            return Some(Action::GoToSection(SectionId::ALL[link as usize]));
        }
        return None;
    }

    // Header zones.
    if row < document::HEADER_ROWS {
        if row == 1 {
            let layout = header_layout(app);
            if layout.theme.0 <= column && column <= layout.theme.1 {
                return Some(Action::ToggleTheme);
            }
            if let Some((start, end)) = layout.menu {
                if (start..end).contains(&column) {
                    return Some(Action::ToggleDrawer);
                }
            }
            for (id, start, end) in layout.nav {
                if (start..end).contains(&column) {
                    return Some(Action::GoToSection(id));
                }
            }
        }
        return None;
    }

    // Back-to-top affordance in the bottom-right corner.
    if document::back_to_top_visible(app.scroll.offset)
        && row == app.height - 1
        && column >= app.width.saturating_sub(10)
    {
        return Some(Action::GoToTop);
    }

    // Document coordinates.
    let doc_row = app.scroll.offset.checked_add(row - document::HEADER_ROWS)?;

    // Experience tab bar.
    if doc_row == app.map.tab_bar_row() {
        for (id, start, end) in app.map.tab_spans() {
            if (start..end).contains(&column) {
                return Some(Action::SelectTab(id));
            }
        }
        return None;
    }

    // Project cards.
    for (id, top, height) in app.map.project_cards() {
        if doc_row >= top && doc_row < top + height {
            return Some(Action::OpenProject(id));
        }
    }

    // Contact form.
    let rows = app.map.contact_rows();
    for (field, field_rows) in rows.fields {
        if doc_row >= field_rows.label && doc_row < field_rows.error {
            return Some(Action::StartEdit(field));
        }
    }
    if doc_row == rows.submit {
        return Some(Action::SubmitForm);
    }

    None
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Theme;
    use std::time::Instant;

    fn app() -> App {
        App::new(100, 30, Theme::Dark, None, 2026, Instant::now())
    }

    fn app_at(width: u16) -> App {
        App::new(width, 30, Theme::Dark, None, 2026, Instant::now())
    }

    // -- Geometry parity --

    #[test]
    fn document_lines_match_measured_extents() {
        for width in [48u16, 72, 100, 140] {
            let app = app_at(width);
            let palette = Palette::of(app.theme);

            let lines = document_lines(&app, palette);
            assert_eq!(
                lines.len() as u16,
                app.map.total_rows,
                "width {}",
                width
            );

            // Per-section parity.
            assert_eq!(
                hero_lines(&app, palette).len() as u16,
                app.map.extent(SectionId::Home).height
            );
            assert_eq!(
                about_lines(&app, palette).len() as u16,
                app.map.extent(SectionId::About).height
            );
            assert_eq!(
                experience_lines(&app, palette).len() as u16,
                app.map.extent(SectionId::Experience).height
            );
            assert_eq!(
                projects_lines(&app, palette).len() as u16,
                app.map.extent(SectionId::Projects).height
            );
            assert_eq!(
                contact_lines(&app, palette).len() as u16,
                app.map.extent(SectionId::Contact).height
            );
        }
    }

    #[test]
    fn tab_switch_keeps_parity() {
        let mut app = app();
        app.active_tab = "education";
        app.relayout();
        let palette = Palette::of(app.theme);
        assert_eq!(
            document_lines(&app, palette).len() as u16,
            app.map.total_rows
        );
    }

    #[test]
    fn parallax_preserves_hero_height() {
        let mut app = app();
        app.scroll.offset = 20;
        let palette = Palette::of(app.theme);
        assert_eq!(
            document_lines(&app, palette).len() as u16,
            app.map.total_rows
        );
    }

    // -- View-model --

    #[test]
    fn project_view_splits_paragraphs() {
        let record = content::project_by_id(1).unwrap();
        let view = project_view(record);
        assert_eq!(view.paragraphs.len(), 2);
        assert_eq!(view.title, "Umuganda Tracker");
        assert!(!view.tags.is_empty());
    }

    #[test]
    fn project_view_demo_shapes() {
        // Distinct demo shows; identical demo is suppressed.
        assert!(project_view(content::project_by_id(3).unwrap()).demo.is_some());
        assert!(project_view(content::project_by_id(2).unwrap()).demo.is_none());
        assert!(project_view(content::project_by_id(4).unwrap()).demo.is_none());
    }

    #[test]
    fn modal_body_rows_track_demo_presence() {
        let palette = Palette::of(Theme::Dark);

        let with_demo = project_view(content::project_by_id(3).unwrap());
        let body = modal_body(&with_demo, 60, 0, false, palette);
        assert_eq!(body.demo_row, Some(body.source_row + 1));

        let without = project_view(content::project_by_id(4).unwrap());
        let body = modal_body(&without, 60, 0, false, palette);
        assert_eq!(body.demo_row, None);
    }

    // -- Header layout --

    #[test]
    fn wide_header_shows_nav_links() {
        let layout = header_layout(&app());
        assert_eq!(layout.nav.len(), SectionId::ALL.len());
        assert_eq!(layout.menu, None);
        assert_eq!(layout.nav[0].1, 2);
    }

    #[test]
    fn narrow_header_collapses_to_menu() {
        let layout = header_layout(&app_at(60));
        assert!(layout.nav.is_empty());
        assert!(layout.menu.is_some());
    }

    // -- Hit testing --

    #[test]
    fn clicking_a_nav_link_navigates() {
        let app = app();
        let layout = header_layout(&app);
        let (id, start, _) = layout.nav[2];
        assert_eq!(hit_test(&app, start, 1), Some(Action::GoToSection(id)));
    }

    #[test]
    fn clicking_the_theme_toggle() {
        let app = app();
        let layout = header_layout(&app);
        assert_eq!(
            hit_test(&app, layout.theme.0 + 1, 1),
            Some(Action::ToggleTheme)
        );
    }

    #[test]
    fn clicking_the_menu_when_narrow() {
        let app = app_at(60);
        assert_eq!(hit_test(&app, 3, 1), Some(Action::ToggleDrawer));
    }

    #[test]
    fn clicking_a_project_card_opens_it() {
        let mut app = app();
        let (id, top, _) = app.map.project_cards()[1];
        // Scroll the card's top row to the first content row.
        app.scroll.offset = top;
        assert_eq!(
            hit_test(&app, 10, document::HEADER_ROWS),
            Some(Action::OpenProject(id))
        );
    }

    #[test]
    fn clicking_a_form_field_starts_editing() {
        let mut app = app();
        let rows = app.map.contact_rows();
        let email = rows.field(FieldId::Email);
        app.scroll.offset = email.input_top;
        assert_eq!(
            hit_test(&app, 10, document::HEADER_ROWS),
            Some(Action::StartEdit(FieldId::Email))
        );
    }

    #[test]
    fn clicking_submit_submits() {
        let mut app = app();
        let rows = app.map.contact_rows();
        app.scroll.offset = rows.submit;
        assert_eq!(
            hit_test(&app, 10, document::HEADER_ROWS),
            Some(Action::SubmitForm)
        );
    }

    #[test]
    fn clicking_a_tab_selects_it() {
        let mut app = app();
        app.scroll.offset = app.map.tab_bar_row();
        let spans = app.map.tab_spans();
        let (id, start, _) = spans[1];
        assert_eq!(
            hit_test(&app, start, document::HEADER_ROWS),
            Some(Action::SelectTab(id))
        );
    }

    #[test]
    fn clicking_outside_the_modal_closes_it() {
        let mut app = app();
        app.modal = ModalState::Open { project_id: 1, focus: 0 };
        assert_eq!(hit_test(&app, 0, app.height - 1), Some(Action::Back));
    }

    #[test]
    fn clicking_modal_links_opens_them() {
        let mut app = app();
        app.modal = ModalState::Open { project_id: 3, focus: 0 };
        let rect = modal_rect(&app);
        let palette = Palette::of(app.theme);
        let view = project_view(content::project_by_id(3).unwrap());
        let body = modal_body(&view, rect.width.saturating_sub(4), 0, false, palette);

        let source_screen_row = rect.y + 1 + body.source_row as u16;
        assert_eq!(
            hit_test(&app, rect.x + 2, source_screen_row),
            Some(Action::ModalActivate(ModalItem::SourceLink))
        );

        let demo_screen_row = rect.y + 1 + body.demo_row.unwrap() as u16;
        assert_eq!(
            hit_test(&app, rect.x + 2, demo_screen_row),
            Some(Action::ModalActivate(ModalItem::DemoLink))
        );
    }

    #[test]
    fn clicking_the_modal_close_control() {
        let mut app = app();
        app.modal = ModalState::Open { project_id: 1, focus: 0 };
        let rect = modal_rect(&app);
        assert_eq!(
            hit_test(&app, rect.right() - 2, rect.y),
            Some(Action::ModalActivate(ModalItem::Close))
        );
    }

    #[test]
    fn drawer_click_navigates_or_closes() {
        let mut app = app_at(60);
        app.drawer = DrawerState::Open { cursor: 0 };
        let rect = drawer_rect(&app);

        assert_eq!(
            hit_test(&app, rect.x + 2, rect.y + 1),
            Some(Action::GoToSection(SectionId::Home))
        );
        assert_eq!(hit_test(&app, 0, app.height - 1), Some(Action::Back));
    }

    #[test]
    fn back_to_top_zone_only_when_visible() {
        let mut app = app();
        assert_eq!(hit_test(&app, app.width - 2, app.height - 1), None);

        app.scroll.offset = document::BACK_TO_TOP_THRESHOLD + 5;
        app.refresh_scroll_derived();
        assert_eq!(
            hit_test(&app, app.width - 2, app.height - 1),
            Some(Action::GoToTop)
        );
    }

    #[test]
    fn empty_regions_hit_nothing() {
        let app = app();
        // Hero body: no interactive elements.
        assert_eq!(hit_test(&app, 10, document::HEADER_ROWS + 1), None);
    }

    // -- Input rows --

    #[test]
    fn input_row_shows_cursor_while_editing() {
        assert_eq!(input_row("abc", 3, 20, true), "abc▌");
        assert_eq!(input_row("abc", 1, 20, true), "a▌bc");
        assert_eq!(input_row("abc", 3, 20, false), "abc");
    }

    #[test]
    fn input_row_windows_long_values_from_the_end() {
        let value = "abcdefghij";
        assert_eq!(input_row(value, 10, 5, false), "fghij");
        // Cursor glyph stays visible at the end.
        assert!(input_row(value, 10, 5, true).ends_with('▌'));
    }

    #[test]
    fn message_rows_fixed_height() {
        let mut app = app();
        app.form.data.message = "one\ntwo\nthree\nfour".into();
        let rows = message_rows(&app, 40, false);
        assert_eq!(rows.len(), document::MESSAGE_INPUT_ROWS as usize);
        assert_eq!(rows, vec!["two", "three", "four"]);

        app.form.data.message.clear();
        let rows = message_rows(&app, 40, true);
        assert_eq!(rows.len(), document::MESSAGE_INPUT_ROWS as usize);
        assert_eq!(rows[0], "▌");
    }
}
