//! Form payloads for the bug tracking models.

use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_trimmed_string, trimmed};

fn default_true() -> bool {
    true
}

/// User creation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserForm {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub username: String,
}

impl UserForm {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: trimmed(username),
        }
    }
}

/// Developer form. Links an existing user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperForm {
    pub user_id: i64,
    #[serde(default = "default_true")]
    pub is_developer: bool,
}

impl DeveloperForm {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            is_developer: true,
        }
    }
}

/// A bug reported by ingestion. Not exposed through the admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBug {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub bug_id: String,
    pub dimension_id: i64,
}

impl NewBug {
    pub fn new(bug_id: impl Into<String>, dimension_id: i64) -> Self {
        Self {
            bug_id: trimmed(bug_id),
            dimension_id,
        }
    }
}

/// Bug change form.
///
/// `bug_id` and the dimension are read-only. Omitted fields are left as
/// they are; a present `owners` list replaces the owner inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<OwnerInput>>,
}

impl BugForm {
    pub fn with_resolved(mut self, resolved: bool) -> Self {
        self.resolved = Some(resolved);
        self
    }

    pub fn with_owners(mut self, developer_ids: impl IntoIterator<Item = i64>) -> Self {
        self.owners = Some(
            developer_ids
                .into_iter()
                .map(|developer_id| OwnerInput { developer_id })
                .collect(),
        );
        self
    }
}

/// One row of the bug owner inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerInput {
    pub developer_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_developer_form_defaults_to_developer() {
        let form: DeveloperForm = serde_json::from_str(r#"{"user_id": 3}"#).unwrap();
        assert_eq!(form, DeveloperForm::new(3));
    }

    #[test]
    fn test_empty_bug_form_changes_nothing() {
        let form: BugForm = serde_json::from_str("{}").unwrap();
        assert_eq!(form, BugForm::default());
        assert_eq!(serde_json::to_string(&form).unwrap(), "{}");
    }

    #[test]
    fn test_bug_form_builder() {
        let form = BugForm::default().with_resolved(true).with_owners([4, 7]);

        assert_eq!(form.resolved, Some(true));
        assert_eq!(
            form.owners,
            Some(vec![
                OwnerInput { developer_id: 4 },
                OwnerInput { developer_id: 7 }
            ])
        );
    }
}
