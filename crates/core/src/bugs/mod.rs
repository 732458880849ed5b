mod error;
mod operations;
mod requests;
mod types;

pub use error::BugError;
pub use operations::{
    validate_bug_form, validate_new_bug, validate_user_form, MAX_BUG_ID_LEN, MAX_USERNAME_LEN,
};
pub use requests::{BugForm, DeveloperForm, NewBug, OwnerInput, UserForm};
pub use types::{Bug, BugDetail, BugOwner, BugSummary, Developer, User};
