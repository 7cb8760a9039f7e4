//! Platform probes: ambient terminal theme and the system link opener.
//!
//! Structure:
//! - Constants: environment conventions (documented invariants)
//! - Pure functions: environment value parsing
//! - Effect functions: environment reads, process spawning

use std::io;
use std::process::Command;

use crate::types::Theme;

// ============================================================================
// CONSTANTS (Documented Invariants)
// ============================================================================

/// Environment variable carrying the terminal's foreground/background
/// color pair, e.g. `"15;0"` (white on black).
///
/// Set by rxvt, konsole, and several other emulators; absent elsewhere.
/// The value after the last `;` is the background color index.
pub const COLORFGBG_VAR: &str = "COLORFGBG";

/// Background color indices considered light.
///
/// In the 16-color palette, 7 (white) and 15 (bright white) are the
/// conventional light backgrounds; everything else reads as dark.
const LIGHT_BACKGROUND_INDICES: [u32; 2] = [7, 15];

// ============================================================================
// PURE FUNCTIONS (Parsing)
// ============================================================================

/// Parse a `COLORFGBG` value into an ambient theme.
///
/// Returns `None` when the value doesn't follow the `fg;bg` convention.
pub fn parse_colorfgbg(value: &str) -> Option<Theme> {
    let background = value.rsplit(';').next()?.trim();
    let index: u32 = background.parse().ok()?;

    if LIGHT_BACKGROUND_INDICES.contains(&index) {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}

// ============================================================================
// EFFECT FUNCTIONS (Detection, Opening)
// ============================================================================

/// Detect the terminal's ambient theme, if it advertises one.
///
/// `None` means the terminal gave no signal; callers fall through to
/// their own default.
pub fn detect_ambient_theme() -> Option<Theme> {
    let value = std::env::var(COLORFGBG_VAR).ok()?;
    parse_colorfgbg(&value)
}

/// Current calendar year, for the footer.
///
/// Gregorian day counting from the Unix epoch; no time crate needed
/// for a single year figure.
pub fn current_year() -> u16 {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut days = secs / 86400;

    let mut year: u16 = 1970;
    loop {
        let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
        let len = if leap { 366 } else { 365 };
        if days < len {
            return year;
        }
        days -= len;
        year += 1;
    }
}

/// Open a URL with the platform's default handler.
///
/// Fire-and-forget: the child is spawned and not awaited. Spawn errors
/// surface to the caller; what the browser does after that is its
/// business.
pub fn open_link(url: &str) -> io::Result<()> {
    opener_command(url).spawn().map(|_| ())
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

// ============================================================================
// TESTS
// ============================================================================
