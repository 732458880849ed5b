use std::collections::HashSet;

use crate::validation::{check_text, ValidationError};

use super::error::BugError;
use super::requests::{BugForm, NewBug, UserForm};

pub const MAX_USERNAME_LEN: usize = 150;
pub const MAX_BUG_ID_LEN: usize = 255;

/// Validates a bug reported by ingestion.
pub fn validate_new_bug(bug: &NewBug) -> Result<(), ValidationError> {
    check_text("bug_id", &bug.bug_id, MAX_BUG_ID_LEN)
}

/// Validates the user form. Usernames allow letters, digits and `@.+-_`.
pub fn validate_user_form(form: &UserForm) -> Result<(), ValidationError> {
    check_text("username", &form.username, MAX_USERNAME_LEN)?;
    let valid = form
        .username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'));
    if !valid {
        return Err(BugError::InvalidUsername.into());
    }
    Ok(())
}

/// Validates the bug change form. A developer may own a bug only once.
pub fn validate_bug_form(form: &BugForm) -> Result<(), ValidationError> {
    let Some(owners) = &form.owners else {
        return Ok(());
    };
    let mut seen = HashSet::new();
    for owner in owners {
        if !seen.insert(owner.developer_id) {
            return Err(BugError::DuplicateOwner(owner.developer_id).into());
        }
    }
    Ok(())
}
