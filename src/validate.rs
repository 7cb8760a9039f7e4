//! Contact form validation.
//!
//! Pure functions — no I/O, easily testable. All four fields are
//! checked independently and every failure is reported; validation
//! never stops at the first bad field.

use crate::types::{FieldErrors, FormData};

/// Minimum trimmed length for the name field.
const NAME_MIN_LEN: usize = 2;

/// Minimum trimmed length for the subject field.
const SUBJECT_MIN_LEN: usize = 3;

/// Minimum trimmed length for the message field.
const MESSAGE_MIN_LEN: usize = 10;

// ============================================================================
// FIELD RULES
// ============================================================================

/// Check the mailbox shape: non-whitespace local part, `@`, and a
/// domain with an interior dot. No whitespace anywhere.
///
/// This is deliberately a shape check, not RFC 5322 — the form relay
/// does its own verification downstream.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // At least one dot strictly inside the domain.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn check_name(name: &str) -> Option<String> {
    if name.trim().chars().count() < NAME_MIN_LEN {
        Some("Please enter a valid name (at least 2 characters)".into())
    } else {
        None
    }
}

fn check_email(email: &str) -> Option<String> {
    if is_valid_email(email) {
        None
    } else {
        Some("Please enter a valid email address".into())
    }
}

fn check_subject(subject: &str) -> Option<String> {
    if subject.trim().chars().count() < SUBJECT_MIN_LEN {
        Some("Please enter a subject (at least 3 characters)".into())
    } else {
        None
    }
}

fn check_message(message: &str) -> Option<String> {
    if message.trim().chars().count() < MESSAGE_MIN_LEN {
        Some("Please enter a message (at least 10 characters)".into())
    } else {
        None
    }
}

// ============================================================================
// FORM VALIDATION
// ============================================================================

/// Validate the whole form. Every field is evaluated; the result
/// carries one message per failing field and none for passing fields.
pub fn validate(data: &FormData) -> FieldErrors {
    FieldErrors {
        name: check_name(&data.name),
        email: check_email(&data.email),
        subject: check_subject(&data.subject),
        message: check_message(&data.message),
    }
}

// ============================================================================
// TESTS
// ============================================================================
