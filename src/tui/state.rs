//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire state space of the portfolio UI. Each
//! interaction controller (theme, navigation drawer, typing effect,
//! reveal, tabs, project modal, contact form, input modality) owns an
//! explicit typed state; the transition layer maps (state, action) to
//! the next state plus a list of requested side effects, and the
//! rendering layer programs against these types only.
//!
//! Shared data (content, document geometry) lives in [`App`]; the
//! controllers carry only their own transient state.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, MouseEvent};

use crate::content::{self, PROJECTS};
use crate::document::{self, DocumentMap};
use crate::types::{FieldErrors, FieldId, FormData, SectionId, SubmitOutcome, Theme};

// ============================================================================
// TIMING CONSTANTS
// ============================================================================

/// Fixed tick cadence driving every animation deadline.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Delay before the hero name starts typing.
pub const TYPING_START_DELAY: Duration = Duration::from_millis(600);

/// One character per interval.
pub const TYPING_INTERVAL: Duration = Duration::from_millis(95);

/// How long the cursor block stays after the name completes.
pub const TYPING_CURSOR_HOLD: Duration = Duration::from_millis(2000);

/// Transient shrink affordance on the theme toggle.
pub const THEME_PULSE_DURATION: Duration = Duration::from_millis(200);

/// Lifetime of the form status banner.
pub const STATUS_LIFETIME: Duration = Duration::from_millis(5000);

/// Fraction of the remaining distance covered per animated-scroll tick.
pub const SCROLL_EASING: f32 = 0.35;

/// Terminal widths below this collapse the nav links into the drawer.
pub const NARROW_WIDTH: u16 = 70;

/// Rows per mouse wheel notch.
pub const WHEEL_STEP: i16 = 3;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Three producers feed a single mpsc channel:
/// - A crossterm reader thread sends `Key`, `Mouse`, and `Resize`
/// - A ticker thread sends `Tick` at a fixed cadence
/// - A submission worker sends `SubmitFinished` when its POST resolves
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick(Instant),
    SubmitFinished(SubmitOutcome),
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Editing operation on the field being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    Backspace,
    DeleteForward,
    Left,
    Right,
    Home,
    End,
    Newline,
}

/// Semantic user action, decoupled from raw input events.
///
/// The effects layer maps key presses and mouse hits to Actions; the
/// transition function decides what each Action means in the current
/// state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Move up/down: drawer cursor when the drawer is open, otherwise
    /// a one-row manual scroll.
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    /// Manual scroll by a signed number of rows (mouse wheel).
    ScrollBy(i16),
    /// Cycle focus among interactive elements (Tab / Shift+Tab).
    FocusNext,
    FocusPrev,
    /// Activate whatever has focus (Enter / Space).
    Activate,
    /// Dismiss: modal first, then drawer, then editing, then focus.
    Back,
    ToggleDrawer,
    ToggleTheme,
    /// Ambient terminal preference re-detected (no user gesture).
    AmbientTheme(Theme),
    TabLeft,
    TabRight,
    SelectTab(&'static str),
    GoToSection(SectionId),
    GoToTop,
    GoToContact,
    OpenResume,
    OpenProject(u32),
    /// Pointer activation of one modal item (keyboard goes through
    /// the focus ring instead).
    ModalActivate(ModalItem),
    StartEdit(FieldId),
    Edit(EditOp),
    SubmitForm,
    Quit,
}

// ============================================================================
// EFFECTS
// ============================================================================

/// Side effect requested by a pure transition.
///
/// Pure code never executes these — it only describes them. The
/// effects boundary interprets them.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write the chosen theme to the preferences file.
    PersistTheme(Theme),
    /// POST the form's field set to the configured endpoint.
    SubmitForm(FormData),
    /// Open a URL with the platform handler.
    OpenLink(String),
}

// ============================================================================
// CONTROLLER STATES
// ============================================================================

/// Mobile-style navigation drawer.
///
/// The overlay dimming and the content scroll lock are renditions of
/// this one value; they cannot disagree with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerState {
    Closed,
    Open {
        /// Highlighted link index into [`SectionId::ALL`].
        cursor: usize,
    },
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        matches!(self, DrawerState::Open { .. })
    }
}

/// Project detail dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open {
        project_id: u32,
        /// Focus cursor into [`modal_focusables`].
        focus: usize,
    },
}

impl ModalState {
    pub fn is_open(self) -> bool {
        matches!(self, ModalState::Open { .. })
    }
}

/// Focusable items inside the open modal, in trap order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalItem {
    Close,
    SourceLink,
    DemoLink,
}

/// The modal's focus ring for a given project. Two or three items,
/// depending on whether the record shows a demo link.
pub fn modal_focusables(project_id: u32) -> Vec<ModalItem> {
    let mut items = vec![ModalItem::Close, ModalItem::SourceLink];
    if let Some(record) = content::project_by_id(project_id) {
        if record.demo_link().is_some() {
            items.push(ModalItem::DemoLink);
        }
    }
    items
}

/// Hero name typing animation.
///
/// A deterministic timer loop: every state change is a pure function
/// of the current instant, so ticks can be replayed in tests. The
/// explicit `cancel` transition is the teardown handle — a cancelled
/// animation jumps straight to its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingState {
    /// Waiting out the initial delay.
    Scheduled { start_at: Instant },
    /// Revealing one char per interval.
    Running { shown: usize, next_at: Instant },
    /// Full name shown, cursor still blinking out its hold time.
    Holding { until: Instant },
    /// Cursor removed; nothing left to do.
    Done,
}

impl TypingState {
    /// Schedule the animation relative to `now`.
    pub fn start(now: Instant) -> TypingState {
        TypingState::Scheduled {
            start_at: now + TYPING_START_DELAY,
        }
    }

    /// Advance to the state valid at `now`.
    pub fn advance(self, now: Instant, text_len: usize) -> TypingState {
        match self {
            TypingState::Scheduled { start_at } => {
                if now < start_at {
                    self
                } else if text_len == 0 {
                    TypingState::Holding {
                        until: start_at + TYPING_CURSOR_HOLD,
                    }
                } else {
                    TypingState::Running {
                        shown: 1,
                        next_at: start_at + TYPING_INTERVAL,
                    }
                    .advance(now, text_len)
                }
            }
            TypingState::Running { mut shown, mut next_at } => {
                while now >= next_at && shown < text_len {
                    shown += 1;
                    next_at += TYPING_INTERVAL;
                }
                if shown >= text_len {
                    TypingState::Holding {
                        until: next_at + TYPING_CURSOR_HOLD,
                    }
                    .advance(now, text_len)
                } else {
                    TypingState::Running { shown, next_at }
                }
            }
            TypingState::Holding { until } => {
                if now >= until {
                    TypingState::Done
                } else {
                    self
                }
            }
            TypingState::Done => TypingState::Done,
        }
    }

    /// Cancel outstanding timers; the animation is over.
    pub fn cancel(self) -> TypingState {
        TypingState::Done
    }

    /// Chars of the name currently visible.
    pub fn shown_chars(&self, text_len: usize) -> usize {
        match self {
            TypingState::Scheduled { .. } => 0,
            TypingState::Running { shown, .. } => (*shown).min(text_len),
            TypingState::Holding { .. } | TypingState::Done => text_len,
        }
    }

    /// The trailing cursor block is drawn until the hold expires.
    pub fn cursor_visible(&self) -> bool {
        !matches!(self, TypingState::Done)
    }
}

/// Viewport scroll, with an optional eased animation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    pub target: Option<u16>,
}

impl ScrollState {
    /// Begin an animated scroll toward `target`.
    pub fn animate_to(&mut self, target: u16) {
        if self.offset == target {
            self.target = None;
        } else {
            self.target = Some(target);
        }
    }

    /// Manual scroll cancels any animation in flight.
    pub fn scroll_by(&mut self, delta: i16, max: u16) {
        self.target = None;
        self.offset = self.offset.saturating_add_signed(delta).min(max);
    }

    /// One animation step: cover a fixed fraction of the remaining
    /// distance, at least one row, landing exactly on the target.
    pub fn tick(&mut self) {
        let Some(target) = self.target else { return };
        let diff = target as i32 - self.offset as i32;
        let step = ((diff.abs() as f32 * SCROLL_EASING).round() as i32).max(1);
        if diff.abs() <= step {
            self.offset = target;
            self.target = None;
        } else if diff > 0 {
            self.offset += step as u16;
        } else {
            self.offset -= step as u16;
        }
    }

    /// Keep offset (and target) inside the document.
    pub fn clamp(&mut self, max: u16) {
        self.offset = self.offset.min(max);
        if let Some(t) = self.target {
            self.target = Some(t.min(max));
        }
    }
}

/// Submission lifecycle of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Contact form: field text, per-field errors, submission phase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub data: FormData,
    /// Char cursor within the field being edited.
    pub cursor: usize,
    pub errors: FieldErrors,
    pub phase: SubmitPhase,
    /// When the status banner disappears. Set exactly while phase is
    /// Succeeded or Failed.
    pub status_expires_at: Option<Instant>,
}

impl FormState {
    /// The submit control is disabled while a POST is in flight.
    pub fn submit_enabled(&self) -> bool {
        self.phase != SubmitPhase::Submitting
    }
}

/// How the user is driving the UI right now. Focus rings are drawn
/// only in keyboard mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputModality {
    Keyboard,
    #[default]
    Pointer,
}

// ============================================================================
// PAGE FOCUS
// ============================================================================

/// Interactive elements of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focusable {
    NavLink(SectionId),
    ThemeToggle,
    ProjectCard(u32),
    Field(FieldId),
    SubmitButton,
}

/// The page's focus ring. Fixed for the life of the document.
pub fn page_focusables() -> Vec<Focusable> {
    let mut items = Vec::new();
    for id in SectionId::ALL {
        items.push(Focusable::NavLink(id));
    }
    items.push(Focusable::ThemeToggle);
    for record in PROJECTS {
        items.push(Focusable::ProjectCard(record.id));
    }
    for field in FieldId::ALL {
        items.push(Focusable::Field(field));
    }
    items.push(Focusable::SubmitButton);
    items
}

/// Page focus cursor plus the field being edited, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusState {
    /// Index into [`page_focusables`]; `None` before any Tab press.
    pub cursor: Option<usize>,
    /// Set while a form field consumes keystrokes.
    pub editing: Option<FieldId>,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level model. Owns each controller's state and the measured
/// document geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub theme: Theme,
    /// Explicitly stored preference, if any. While this is `None`, an
    /// ambient preference change re-themes the document.
    pub stored_theme: Option<Theme>,
    /// Theme toggle pulse deadline.
    pub pulse_until: Option<Instant>,

    pub drawer: DrawerState,
    pub scroll: ScrollState,
    pub active_section: Option<SectionId>,

    pub typing: TypingState,
    /// Blocks already revealed — one-shot, never removed.
    pub revealed: BTreeSet<SectionId>,

    pub active_tab: &'static str,
    pub modal: ModalState,
    pub form: FormState,
    pub focus: FocusState,
    pub modality: InputModality,

    pub map: DocumentMap,
    pub width: u16,
    pub height: u16,
    /// Calendar year shown in the footer, computed once at startup.
    pub year: u16,

    pub should_quit: bool,
}

impl App {
    /// Build the startup state: theme resolved, geometry measured,
    /// typing scheduled, in-view blocks revealed, active section
    /// computed.
    pub fn new(
        width: u16,
        height: u16,
        theme: Theme,
        stored: Option<Theme>,
        year: u16,
        now: Instant,
    ) -> App {
        let map = DocumentMap::compute(width, content::INITIAL_TAB);

        let mut app = App {
            theme,
            stored_theme: stored,
            pulse_until: None,
            drawer: DrawerState::Closed,
            scroll: ScrollState::default(),
            active_section: None,
            typing: TypingState::start(now),
            revealed: BTreeSet::new(),
            active_tab: content::INITIAL_TAB,
            modal: ModalState::Closed,
            form: FormState::default(),
            focus: FocusState::default(),
            modality: InputModality::default(),
            map,
            width,
            height,
            year,
            should_quit: false,
        };

        app.refresh_scroll_derived();
        app
    }

    /// Rows available to the content viewport (below the header bar).
    pub fn viewport_rows(&self) -> u16 {
        self.height.saturating_sub(document::HEADER_ROWS)
    }

    /// Nav links collapse into the drawer on narrow terminals.
    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_WIDTH
    }

    /// Content scrolling is locked while the drawer or modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.drawer.is_open() || self.modal.is_open()
    }

    /// Re-measure the document (resize, tab switch) and re-derive
    /// everything that hangs off the scroll position.
    pub fn relayout(&mut self) {
        self.map = DocumentMap::compute(self.width, self.active_tab);
        self.scroll.clamp(self.map.max_scroll(self.viewport_rows()));
        self.refresh_scroll_derived();
    }

    /// Recompute the active section and fire any pending reveals for
    /// the current scroll position.
    pub fn refresh_scroll_derived(&mut self) {
        self.active_section = self.map.active_section(self.scroll.offset);

        let viewport = self.viewport_rows();
        for id in [
            SectionId::About,
            SectionId::Experience,
            SectionId::Projects,
            SectionId::Contact,
        ] {
            if self.revealed.contains(&id) {
                continue;
            }
            let block = self.map.reveal_target(id);
            if document::reveal_fires(block, self.scroll.offset, viewport) {
                self.revealed.insert(id);
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Instant {
        Instant::now()
    }

    #[test]
    fn new_app_schedules_typing_and_reveals_hero_viewport() {
        let app = App::new(100, 30, Theme::Dark, None, 2026, now());
        assert!(matches!(app.typing, TypingState::Scheduled { .. }));
        assert_eq!(app.drawer, DrawerState::Closed);
        assert_eq!(app.modal, ModalState::Closed);
        assert_eq!(app.active_section, Some(SectionId::Home));
        // The about block sits just below the hero on a 30-row
        // terminal and reveals immediately.
        assert!(app.revealed.contains(&SectionId::About));
        assert!(!app.revealed.contains(&SectionId::Contact));
    }

    #[test]
    fn typing_advances_one_char_per_interval() {
        let t0 = now();
        let state = TypingState::start(t0);
        let len = 10;

        assert_eq!(state.shown_chars(len), 0);

        let state = state.advance(t0 + TYPING_START_DELAY, len);
        assert_eq!(state.shown_chars(len), 1);

        let state = state.advance(t0 + TYPING_START_DELAY + TYPING_INTERVAL * 3, len);
        assert_eq!(state.shown_chars(len), 4);
        assert!(state.cursor_visible());
    }

    #[test]
    fn typing_holds_then_removes_cursor() {
        let t0 = now();
        let len = 3;
        let state = TypingState::start(t0);

        let after_text = t0 + TYPING_START_DELAY + TYPING_INTERVAL * 2;
        let state = state.advance(after_text, len);
        assert_eq!(state.shown_chars(len), 3);
        assert!(state.cursor_visible());

        let state = state.advance(after_text + TYPING_INTERVAL + TYPING_CURSOR_HOLD, len);
        assert_eq!(state, TypingState::Done);
        assert!(!state.cursor_visible());
    }

    #[test]
    fn typing_cancel_is_terminal() {
        let state = TypingState::start(now()).cancel();
        assert_eq!(state, TypingState::Done);
        assert_eq!(state.advance(now(), 5), TypingState::Done);
    }

    #[test]
    fn scroll_animation_eases_and_lands_exactly() {
        let mut scroll = ScrollState::default();
        scroll.animate_to(20);

        let mut steps = 0;
        while scroll.target.is_some() {
            scroll.tick();
            steps += 1;
            assert!(steps < 50, "animation must terminate");
        }
        assert_eq!(scroll.offset, 20);
        // Eased: more than one tick, fewer than one per row.
        assert!(steps > 1 && steps < 20, "{} steps", steps);
    }

    #[test]
    fn manual_scroll_cancels_animation() {
        let mut scroll = ScrollState::default();
        scroll.animate_to(40);
        scroll.scroll_by(2, 100);
        assert_eq!(scroll.target, None);
        assert_eq!(scroll.offset, 2);
    }

    #[test]
    fn scroll_by_clamps_at_both_ends() {
        let mut scroll = ScrollState::default();
        scroll.scroll_by(-5, 100);
        assert_eq!(scroll.offset, 0);
        scroll.scroll_by(500, 100);
        assert_eq!(scroll.offset, 100);
    }

    #[test]
    fn animate_to_current_position_is_a_noop() {
        let mut scroll = ScrollState { offset: 7, target: None };
        scroll.animate_to(7);
        assert_eq!(scroll.target, None);
    }

    #[test]
    fn modal_focusables_follow_demo_presence() {
        // Project 3 shows a demo link; project 4 has none.
        assert_eq!(
            modal_focusables(3),
            vec![ModalItem::Close, ModalItem::SourceLink, ModalItem::DemoLink]
        );
        assert_eq!(
            modal_focusables(4),
            vec![ModalItem::Close, ModalItem::SourceLink]
        );
        // Unknown project: minimal ring (the modal won't open anyway).
        assert_eq!(
            modal_focusables(999),
            vec![ModalItem::Close, ModalItem::SourceLink]
        );
    }

    #[test]
    fn page_focus_ring_is_in_document_order() {
        let items = page_focusables();
        assert_eq!(items[0], Focusable::NavLink(SectionId::Home));
        assert_eq!(items[5], Focusable::ThemeToggle);
        assert_eq!(items[6], Focusable::ProjectCard(1));
        assert_eq!(*items.last().unwrap(), Focusable::SubmitButton);
        assert_eq!(items.len(), 5 + 1 + PROJECTS.len() + 4 + 1);
    }

    #[test]
    fn submit_disabled_only_while_submitting() {
        let mut form = FormState::default();
        assert!(form.submit_enabled());
        form.phase = SubmitPhase::Submitting;
        assert!(!form.submit_enabled());
        form.phase = SubmitPhase::Failed;
        assert!(form.submit_enabled());
    }

    #[test]
    fn scroll_lock_mirrors_drawer_and_modal() {
        let mut app = App::new(100, 30, Theme::Dark, None, 2026, now());
        assert!(!app.scroll_locked());
        app.drawer = DrawerState::Open { cursor: 0 };
        assert!(app.scroll_locked());
        app.drawer = DrawerState::Closed;
        app.modal = ModalState::Open { project_id: 1, focus: 0 };
        assert!(app.scroll_locked());
    }
}
