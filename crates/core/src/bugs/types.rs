use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cloudwatch::Dimension;

/// An account that can be promoted to developer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

/// A user that can own bugs. One developer per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub is_developer: bool,
}

impl fmt::Display for Developer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

/// A bug raised against a monitored resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bug {
    pub bug_id: String,
    pub dimension_id: i64,
    pub resolved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Display for Bug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bug_id)
    }
}

/// Assignment of a developer to a bug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugOwner {
    pub id: i64,
    pub bug_id: String,
    pub developer: Developer,
    pub created_at: DateTime<Utc>,
}

/// Row shown in the bug admin list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugSummary {
    pub bug_id: String,
    pub resolved: bool,
    pub created_at: DateTime<Utc>,
    /// Number of owners.
    pub developers: u32,
    /// Display value of the bug's dimension.
    pub lambda_name: String,
}

/// A bug with its dimension and owners, as shown on the change page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugDetail {
    #[serde(flatten)]
    pub bug: Bug,
    pub dimension: Dimension,
    pub owners: Vec<BugOwner>,
}

impl BugDetail {
    pub fn summary(&self) -> BugSummary {
        BugSummary {
            bug_id: self.bug.bug_id.clone(),
            resolved: self.bug.resolved,
            created_at: self.bug.created_at,
            developers: self.owners.len() as u32,
            lambda_name: self.dimension.to_string(),
        }
    }
}
