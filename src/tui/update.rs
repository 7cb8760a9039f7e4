//! Pure state transitions: (App, Action) → effects.
//!
//! The core logic of the UI, fully testable without a terminal. The
//! dispatcher routes each action to the controller that owns the
//! current interaction context: the modal traps everything while open,
//! then the drawer, then field editing, then the page itself.
//! Unhandled actions are no-ops.

use std::time::Instant;

use crate::content::{self, EXPERIENCE_TABS, PROFILE};
use crate::types::{FieldErrors, FieldId, SectionId, SubmitOutcome, Theme};
use crate::validate;

use super::input;
use super::state::{
    modal_focusables, page_focusables, Action, App, DrawerState, EditOp, Effect, FocusState,
    Focusable, InputModality, ModalItem, ModalState, SubmitPhase, STATUS_LIFETIME,
    THEME_PULSE_DURATION,
};

/// Pure transition function.
///
/// Mutates `app` to the next state and returns the side effects the
/// boundary should execute. `now` anchors every timer this transition
/// starts.
pub fn update(app: &mut App, action: Action, now: Instant) -> Vec<Effect> {
    // Context-free actions first.
    match action {
        Action::Quit => {
            app.should_quit = true;
            return Vec::new();
        }
        Action::AmbientTheme(ambient) => {
            return ambient_theme_changed(app, ambient, now);
        }
        _ => {}
    }

    if app.modal.is_open() {
        update_modal(app, action, now)
    } else if app.drawer.is_open() {
        update_drawer(app, action)
    } else if let Some(field) = app.focus.editing {
        update_editing(app, field, action, now)
    } else {
        update_page(app, action, now)
    }
}

// ============================================================================
// THEME
// ============================================================================

/// Apply a theme. `animate` starts the transient toggle pulse.
fn apply_theme(app: &mut App, theme: Theme, animate: bool, now: Instant) {
    app.theme = theme;
    if animate {
        app.pulse_until = Some(now + THEME_PULSE_DURATION);
    }
}

/// Flip, persist, pulse.
fn toggle_theme(app: &mut App, now: Instant) -> Vec<Effect> {
    let next = app.theme.flipped();
    app.stored_theme = Some(next);
    apply_theme(app, next, true, now);
    vec![Effect::PersistTheme(next)]
}

/// Ambient preference changed. The stored preference always wins once
/// set; without one, follow the terminal.
fn ambient_theme_changed(app: &mut App, ambient: Theme, now: Instant) -> Vec<Effect> {
    if app.stored_theme.is_none() && app.theme != ambient {
        apply_theme(app, ambient, true, now);
    }
    Vec::new()
}

// ============================================================================
// MODAL
// ============================================================================

/// Open the project dialog. Unknown ids are a silent no-op.
fn open_modal(app: &mut App, project_id: u32) {
    if content::project_by_id(project_id).is_none() {
        return;
    }
    // Content is derived fresh at render time from the id; opening
    // only records the id and resets the focus trap.
    app.modal = ModalState::Open {
        project_id,
        focus: 0,
    };
}

/// Close the dialog. Idempotent: closing a closed modal changes
/// nothing.
fn close_modal(app: &mut App) {
    app.modal = ModalState::Closed;
}

/// While open the modal owns the keyboard: focus cycles inside it and
/// nothing reaches the page behind.
fn update_modal(app: &mut App, action: Action, _now: Instant) -> Vec<Effect> {
    let ModalState::Open { project_id, focus } = app.modal else {
        return Vec::new();
    };
    let items = modal_focusables(project_id);

    match action {
        Action::Back => {
            close_modal(app);
            Vec::new()
        }
        Action::FocusNext => {
            app.modality = InputModality::Keyboard;
            app.modal = ModalState::Open {
                project_id,
                focus: (focus + 1) % items.len(),
            };
            Vec::new()
        }
        Action::FocusPrev => {
            app.modality = InputModality::Keyboard;
            app.modal = ModalState::Open {
                project_id,
                focus: (focus + items.len() - 1) % items.len(),
            };
            Vec::new()
        }
        Action::Activate => match items.get(focus) {
            Some(ModalItem::Close) => {
                close_modal(app);
                Vec::new()
            }
            Some(ModalItem::SourceLink) => open_record_link(project_id, false),
            Some(ModalItem::DemoLink) => open_record_link(project_id, true),
            None => Vec::new(),
        },
        // Re-open on another card while already open: fresh render.
        Action::OpenProject(id) => {
            open_modal(app, id);
            Vec::new()
        }
        Action::ModalActivate(item) => match item {
            ModalItem::Close => {
                close_modal(app);
                Vec::new()
            }
            ModalItem::SourceLink => open_record_link(project_id, false),
            ModalItem::DemoLink => open_record_link(project_id, true),
        },
        // Scroll is locked; navigation actions are inert here.
        _ => Vec::new(),
    }
}

fn open_record_link(project_id: u32, demo: bool) -> Vec<Effect> {
    let Some(record) = content::project_by_id(project_id) else {
        return Vec::new();
    };
    let url = if demo {
        match record.demo_link() {
            Some(url) => url,
            None => return Vec::new(),
        }
    } else {
        record.source_url
    };
    vec![Effect::OpenLink(url.to_string())]
}

// ============================================================================
// DRAWER
// ============================================================================

/// Open the drawer with the cursor on the active section's link.
fn open_drawer(app: &mut App) {
    let cursor = app
        .active_section
        .and_then(|id| SectionId::ALL.iter().position(|s| *s == id))
        .unwrap_or(0);
    app.drawer = DrawerState::Open { cursor };
}

fn close_drawer(app: &mut App) {
    app.drawer = DrawerState::Closed;
}

fn update_drawer(app: &mut App, action: Action) -> Vec<Effect> {
    let DrawerState::Open { cursor } = app.drawer else {
        return Vec::new();
    };
    let len = SectionId::ALL.len();

    match action {
        Action::Back | Action::ToggleDrawer => {
            close_drawer(app);
            Vec::new()
        }
        Action::MoveUp => {
            app.drawer = DrawerState::Open {
                cursor: cursor.saturating_sub(1),
            };
            Vec::new()
        }
        Action::MoveDown => {
            app.drawer = DrawerState::Open {
                cursor: (cursor + 1).min(len - 1),
            };
            Vec::new()
        }
        Action::Activate => {
            // Link activation scrolls and closes the drawer as one
            // user action.
            let id = SectionId::ALL[cursor.min(len - 1)];
            close_drawer(app);
            scroll_to_section(app, id);
            Vec::new()
        }
        Action::GoToSection(id) => {
            close_drawer(app);
            scroll_to_section(app, id);
            Vec::new()
        }
        _ => Vec::new(),
    }
}

// ============================================================================
// FIELD EDITING
// ============================================================================

/// Begin editing a field: page focus follows, cursor lands at the end.
fn start_edit(app: &mut App, field: FieldId) {
    let items = page_focusables();
    let cursor = items.iter().position(|f| *f == Focusable::Field(field));
    app.focus = FocusState {
        cursor,
        editing: Some(field),
    };
    app.form.cursor = input::move_end(app.form.data.get(field));
    scroll_focus_into_view(app);
}

fn stop_edit(app: &mut App) {
    app.focus.editing = None;
}

/// Keystrokes while a field has focus. Global shortcuts do not reach
/// this handler — the key mapper already routed chars here; pointer
/// actions blur the field first.
fn update_editing(app: &mut App, field: FieldId, action: Action, now: Instant) -> Vec<Effect> {
    match action {
        Action::Edit(op) => {
            let cursor = app.form.cursor;
            let text = app.form.data.get_mut(field);
            app.form.cursor = match op {
                EditOp::Insert(c) => input::insert_char(text, cursor, c),
                EditOp::Backspace => input::backspace(text, cursor),
                EditOp::DeleteForward => input::delete_forward(text, cursor),
                EditOp::Left => input::move_left(cursor),
                EditOp::Right => input::move_right(text, cursor),
                EditOp::Home => input::move_home(),
                EditOp::End => input::move_end(text),
                EditOp::Newline => {
                    if field == FieldId::Message {
                        input::insert_char(text, cursor, '\n')
                    } else {
                        // Enter advances through the single-line
                        // fields.
                        return move_focus(app, 1);
                    }
                }
            };
            Vec::new()
        }
        Action::FocusNext => move_focus(app, 1),
        Action::FocusPrev => move_focus(app, -1),
        Action::Back => {
            stop_edit(app);
            Vec::new()
        }
        Action::StartEdit(next) => {
            start_edit(app, next);
            Vec::new()
        }
        Action::SubmitForm => try_submit(app),
        // Mouse can still reach the rest of the page.
        Action::OpenProject(id) => {
            stop_edit(app);
            open_modal(app, id);
            Vec::new()
        }
        Action::GoToSection(id) => {
            stop_edit(app);
            scroll_to_section(app, id);
            Vec::new()
        }
        Action::ToggleTheme => {
            stop_edit(app);
            toggle_theme(app, now)
        }
        Action::ScrollBy(delta) => {
            scroll_page_by(app, delta);
            Vec::new()
        }
        _ => Vec::new(),
    }
}

// ============================================================================
// PAGE
// ============================================================================

fn update_page(app: &mut App, action: Action, now: Instant) -> Vec<Effect> {
    match action {
        Action::MoveUp => {
            scroll_page_by(app, -1);
            Vec::new()
        }
        Action::MoveDown => {
            scroll_page_by(app, 1);
            Vec::new()
        }
        Action::PageUp => {
            let page = app.viewport_rows().saturating_sub(2) as i16;
            scroll_page_by(app, -page);
            Vec::new()
        }
        Action::PageDown => {
            let page = app.viewport_rows().saturating_sub(2) as i16;
            scroll_page_by(app, page);
            Vec::new()
        }
        Action::ScrollBy(delta) => {
            scroll_page_by(app, delta);
            Vec::new()
        }
        Action::FocusNext => move_focus(app, 1),
        Action::FocusPrev => move_focus(app, -1),
        Action::Activate => activate_focused(app, now),
        Action::Back => {
            if app.focus.cursor.is_some() {
                app.focus = FocusState::default();
            }
            Vec::new()
        }
        Action::ToggleDrawer => {
            open_drawer(app);
            Vec::new()
        }
        Action::ToggleTheme => toggle_theme(app, now),
        Action::TabLeft => {
            cycle_tab(app, -1);
            Vec::new()
        }
        Action::TabRight => {
            cycle_tab(app, 1);
            Vec::new()
        }
        Action::SelectTab(id) => {
            select_tab(app, id);
            Vec::new()
        }
        Action::GoToSection(id) => {
            scroll_to_section(app, id);
            Vec::new()
        }
        Action::GoToTop => {
            app.scroll.animate_to(0);
            Vec::new()
        }
        Action::GoToContact => {
            scroll_to_section(app, SectionId::Contact);
            Vec::new()
        }
        Action::OpenResume => {
            if PROFILE.resume_url.is_empty() {
                Vec::new()
            } else {
                vec![Effect::OpenLink(PROFILE.resume_url.to_string())]
            }
        }
        Action::OpenProject(id) => {
            open_modal(app, id);
            Vec::new()
        }
        Action::StartEdit(field) => {
            start_edit(app, field);
            Vec::new()
        }
        Action::SubmitForm => try_submit(app),
        // Editing ops without an edited field and modal items without
        // a modal are inert; Quit and AmbientTheme never reach this
        // far.
        Action::Edit(_) | Action::ModalActivate(_) | Action::Quit | Action::AmbientTheme(_) => {
            Vec::new()
        }
    }
}

fn scroll_page_by(app: &mut App, delta: i16) {
    if app.scroll_locked() {
        return;
    }
    let max = app.map.max_scroll(app.viewport_rows());
    app.scroll.scroll_by(delta, max);
    app.refresh_scroll_derived();
}

fn scroll_to_section(app: &mut App, id: SectionId) {
    let target = app
        .map
        .target_scroll(id)
        .min(app.map.max_scroll(app.viewport_rows()));
    app.scroll.animate_to(target);
}

/// Move the page focus ring. Focusing a form field enters editing;
/// leaving one exits it.
fn move_focus(app: &mut App, step: i32) -> Vec<Effect> {
    app.modality = InputModality::Keyboard;

    let items = page_focusables();
    let len = items.len() as i32;
    let next = match app.focus.cursor {
        None => {
            if step > 0 {
                0
            } else {
                len - 1
            }
        }
        Some(cursor) => (cursor as i32 + step).rem_euclid(len),
    } as usize;

    match items[next] {
        Focusable::Field(field) => {
            start_edit(app, field);
        }
        _ => {
            app.focus = FocusState {
                cursor: Some(next),
                editing: None,
            };
            scroll_focus_into_view(app);
        }
    }
    Vec::new()
}

/// Bring the focused element into the viewport, animated.
fn scroll_focus_into_view(app: &mut App) {
    let Some(cursor) = app.focus.cursor else { return };
    let Some(row) = page_focusables()
        .get(cursor)
        .and_then(|item| app.map.focus_row(*item))
    else {
        return;
    };

    let viewport = app.viewport_rows();
    let offset = app.scroll.offset;
    if row < offset || row + 1 >= offset + viewport {
        let target = row
            .saturating_sub(viewport / 3)
            .min(app.map.max_scroll(viewport));
        app.scroll.animate_to(target);
    }
}

fn activate_focused(app: &mut App, now: Instant) -> Vec<Effect> {
    let items = page_focusables();
    let Some(item) = app.focus.cursor.and_then(|c| items.get(c).copied()) else {
        return Vec::new();
    };

    match item {
        Focusable::NavLink(id) => {
            scroll_to_section(app, id);
            Vec::new()
        }
        Focusable::ThemeToggle => toggle_theme(app, now),
        Focusable::ProjectCard(id) => {
            open_modal(app, id);
            Vec::new()
        }
        Focusable::Field(field) => {
            start_edit(app, field);
            Vec::new()
        }
        Focusable::SubmitButton => try_submit(app),
    }
}

fn cycle_tab(app: &mut App, step: i32) {
    let len = EXPERIENCE_TABS.len() as i32;
    let current = EXPERIENCE_TABS
        .iter()
        .position(|tab| tab.id == app.active_tab)
        .unwrap_or(0) as i32;
    let next = (current + step).rem_euclid(len) as usize;
    select_tab(app, EXPERIENCE_TABS[next].id);
}

/// Single-selection invariant: setting the active tab deactivates
/// every sibling by construction. Unknown ids are a silent no-op.
fn select_tab(app: &mut App, id: &str) {
    let Some(tab) = EXPERIENCE_TABS.iter().find(|tab| tab.id == id) else {
        return;
    };
    if app.active_tab != tab.id {
        app.active_tab = tab.id;
        // Panel height changed under the sections below.
        app.relayout();
    }
}

// ============================================================================
// CONTACT FORM
// ============================================================================

/// Submit attempt: clear old messages, validate everything, and only
/// a fully valid form starts the network effect.
fn try_submit(app: &mut App) -> Vec<Effect> {
    if !app.form.submit_enabled() {
        return Vec::new();
    }

    app.form.errors = FieldErrors::default();
    let errors = validate::validate(&app.form.data);

    if !errors.is_empty() {
        app.form.errors = errors;
        return Vec::new();
    }

    app.form.phase = SubmitPhase::Submitting;
    stop_edit(app);
    vec![Effect::SubmitForm(app.form.data.clone())]
}

/// Completion of the worker's POST. Both branches re-enable the
/// submit control by leaving `Submitting`; the status banner starts
/// its fixed lifetime.
pub fn handle_submit_finished(app: &mut App, outcome: SubmitOutcome, now: Instant) {
    if app.form.phase != SubmitPhase::Submitting {
        return;
    }

    match outcome {
        SubmitOutcome::Delivered => {
            app.form.phase = SubmitPhase::Succeeded;
            app.form.data = Default::default();
            app.form.cursor = 0;
        }
        SubmitOutcome::Failed(_) => {
            // Fields are preserved so the user can retry.
            app.form.phase = SubmitPhase::Failed;
        }
    }
    app.form.status_expires_at = Some(now + STATUS_LIFETIME);
}

// ============================================================================
// TICKS
// ============================================================================

/// Advance every timer to `now`. Deterministic: replaying the same
/// instants yields the same states.
pub fn handle_tick(app: &mut App, now: Instant) {
    // Typing effect.
    let name_len = PROFILE.name.chars().count();
    app.typing = app.typing.advance(now, name_len);

    // Animated scroll.
    if app.scroll.target.is_some() {
        app.scroll.tick();
        app.refresh_scroll_derived();
    }

    // Theme toggle pulse.
    if app.pulse_until.is_some_and(|until| now >= until) {
        app.pulse_until = None;
    }

    // Status banner expiry: back to the un-announced idle display.
    // Field-level errors are untouched.
    if app.form.status_expires_at.is_some_and(|at| now >= at) {
        app.form.status_expires_at = None;
        app.form.phase = SubmitPhase::Idle;
    }
}

// ============================================================================
// INPUT MODALITY
// ============================================================================

/// Any key press flips to keyboard navigation.
pub fn note_key_input(app: &mut App) {
    app.modality = InputModality::Keyboard;
}

/// Any pointer press flips back.
pub fn note_pointer_input(app: &mut App) {
    app.modality = InputModality::Pointer;
}

// ============================================================================
// TESTS
// ============================================================================
