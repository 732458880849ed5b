//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. List queries take the `LIKE` pattern (or NULL) as
//! `?1`, the page size as `?2` and the offset as `?3`.

/// Connection settings applied before the schema is created.
pub const PRAGMAS: &str = r#"
PRAGMA foreign_keys = ON;
"#;

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL
);

-- Developers table (one per user)
CREATE TABLE IF NOT EXISTS developers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL UNIQUE,
    is_developer INTEGER NOT NULL DEFAULT 1,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
);

-- CloudWatch dimensions table
CREATE TABLE IF NOT EXISTS dimensions (
    dimension_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    value TEXT NOT NULL UNIQUE
);

-- Bugs table
CREATE TABLE IF NOT EXISTS bugs (
    bug_id TEXT PRIMARY KEY,
    dimension_id INTEGER NOT NULL,
    resolved INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (dimension_id) REFERENCES dimensions(dimension_id) ON DELETE CASCADE
);

-- Bug owners table
CREATE TABLE IF NOT EXISTS bug_owners (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    developer_id INTEGER NOT NULL,
    bug_id TEXT NOT NULL,
    created_at TEXT NOT NULL,
    FOREIGN KEY (developer_id) REFERENCES developers(id) ON DELETE RESTRICT,
    FOREIGN KEY (bug_id) REFERENCES bugs(bug_id) ON DELETE CASCADE
);

-- Alarms table
CREATE TABLE IF NOT EXISTS alarms (
    alarm_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    statistic TEXT NOT NULL,
    threshold INTEGER NOT NULL,
    comparison_operator TEXT NOT NULL,
    period INTEGER NOT NULL,
    is_active INTEGER NOT NULL DEFAULT 1,
    metric_name TEXT NOT NULL,
    namespace TEXT NOT NULL,
    treat_missing_data TEXT NOT NULL,
    evaluation_periods INTEGER NOT NULL DEFAULT 1
);

-- Alert sources table
CREATE TABLE IF NOT EXISTS alert_sources (
    arn_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    value TEXT NOT NULL
);

-- Alarm action inline
CREATE TABLE IF NOT EXISTS cloudwatch_alarm_action (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    alarm_id INTEGER NOT NULL,
    action TEXT NOT NULL DEFAULT 'OK',
    arn_id INTEGER NOT NULL,
    UNIQUE (alarm_id, action, arn_id),
    FOREIGN KEY (alarm_id) REFERENCES alarms(alarm_id) ON DELETE CASCADE,
    FOREIGN KEY (arn_id) REFERENCES alert_sources(arn_id) ON DELETE RESTRICT
);

-- Alarm dimension inline
CREATE TABLE IF NOT EXISTS cloudwatch_alarm_dimension (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    alarm_id INTEGER NOT NULL,
    dimension_id INTEGER NOT NULL,
    FOREIGN KEY (alarm_id) REFERENCES alarms(alarm_id) ON DELETE CASCADE,
    FOREIGN KEY (dimension_id) REFERENCES dimensions(dimension_id) ON DELETE RESTRICT
);

-- Indexes for foreign key lookups
CREATE INDEX IF NOT EXISTS idx_bugs_dimension_id ON bugs(dimension_id);
CREATE INDEX IF NOT EXISTS idx_bug_owners_bug_id ON bug_owners(bug_id);
CREATE INDEX IF NOT EXISTS idx_bug_owners_developer_id ON bug_owners(developer_id);
CREATE INDEX IF NOT EXISTS idx_alarm_action_alarm_id ON cloudwatch_alarm_action(alarm_id);
CREATE INDEX IF NOT EXISTS idx_alarm_action_arn_id ON cloudwatch_alarm_action(arn_id);
CREATE INDEX IF NOT EXISTS idx_alarm_dimension_alarm_id ON cloudwatch_alarm_dimension(alarm_id);
CREATE INDEX IF NOT EXISTS idx_alarm_dimension_dimension_id ON cloudwatch_alarm_dimension(dimension_id);
"#;

pub const PING: &str = "SELECT 1";

// User queries
pub const INSERT_USER: &str = r#"
INSERT INTO users (username, created_at)
VALUES (?1, ?2)
"#;

pub const SELECT_USER_BY_ID: &str = r#"
SELECT id, username, created_at
FROM users
WHERE id = ?1
"#;

pub const SELECT_USERS: &str = r#"
SELECT id, username, created_at
FROM users
WHERE (?1 IS NULL OR username LIKE ?1 ESCAPE '\')
ORDER BY id
LIMIT ?2 OFFSET ?3
"#;

pub const COUNT_USERS: &str = r#"
SELECT COUNT(*)
FROM users
WHERE (?1 IS NULL OR username LIKE ?1 ESCAPE '\')
"#;

pub const DELETE_USER: &str = r#"
DELETE FROM users
WHERE id = ?1
"#;

// Developer queries
pub const INSERT_DEVELOPER: &str = r#"
INSERT INTO developers (user_id, is_developer)
VALUES (?1, ?2)
"#;

pub const SELECT_DEVELOPER_BY_ID: &str = r#"
SELECT d.id, d.user_id, u.username, d.is_developer
FROM developers d
INNER JOIN users u ON u.id = d.user_id
WHERE d.id = ?1
"#;

pub const SELECT_DEVELOPERS: &str = r#"
SELECT d.id, d.user_id, u.username, d.is_developer
FROM developers d
INNER JOIN users u ON u.id = d.user_id
WHERE (?1 IS NULL OR u.username LIKE ?1 ESCAPE '\')
ORDER BY d.id
LIMIT ?2 OFFSET ?3
"#;

pub const COUNT_DEVELOPERS: &str = r#"
SELECT COUNT(*)
FROM developers d
INNER JOIN users u ON u.id = d.user_id
WHERE (?1 IS NULL OR u.username LIKE ?1 ESCAPE '\')
"#;

pub const UPDATE_DEVELOPER: &str = r#"
UPDATE developers
SET user_id = ?2, is_developer = ?3
WHERE id = ?1
"#;

pub const DELETE_DEVELOPER: &str = r#"
DELETE FROM developers
WHERE id = ?1
"#;

// Dimension queries
pub const INSERT_DIMENSION: &str = r#"
INSERT INTO dimensions (name, value)
VALUES (?1, ?2)
"#;

pub const SELECT_DIMENSION_BY_ID: &str = r#"
SELECT dimension_id, name, value
FROM dimensions
WHERE dimension_id = ?1
"#;

pub const SELECT_DIMENSIONS: &str = r#"
SELECT dimension_id, name, value
FROM dimensions
WHERE (?1 IS NULL OR value LIKE ?1 ESCAPE '\')
ORDER BY dimension_id
LIMIT ?2 OFFSET ?3
"#;

pub const COUNT_DIMENSIONS: &str = r#"
SELECT COUNT(*)
FROM dimensions
WHERE (?1 IS NULL OR value LIKE ?1 ESCAPE '\')
"#;

pub const UPDATE_DIMENSION: &str = r#"
UPDATE dimensions
SET name = ?2, value = ?3
WHERE dimension_id = ?1
"#;

pub const DELETE_DIMENSION: &str = r#"
DELETE FROM dimensions
WHERE dimension_id = ?1
"#;

// Alert source queries
pub const INSERT_ALERT_SOURCE: &str = r#"
INSERT INTO alert_sources (name, value)
VALUES (?1, ?2)
"#;

pub const SELECT_ALERT_SOURCE_BY_ID: &str = r#"
SELECT arn_id, name, value
FROM alert_sources
WHERE arn_id = ?1
"#;

pub const SELECT_ALERT_SOURCES: &str = r#"
SELECT arn_id, name, value
FROM alert_sources
WHERE (?1 IS NULL OR value LIKE ?1 ESCAPE '\')
ORDER BY arn_id
LIMIT ?2 OFFSET ?3
"#;

pub const COUNT_ALERT_SOURCES: &str = r#"
SELECT COUNT(*)
FROM alert_sources
WHERE (?1 IS NULL OR value LIKE ?1 ESCAPE '\')
"#;

pub const UPDATE_ALERT_SOURCE: &str = r#"
UPDATE alert_sources
SET name = ?2, value = ?3
WHERE arn_id = ?1
"#;

pub const DELETE_ALERT_SOURCE: &str = r#"
DELETE FROM alert_sources
WHERE arn_id = ?1
"#;

// Alarm queries
pub const INSERT_ALARM: &str = r#"
INSERT INTO alarms (name, description, statistic, threshold, comparison_operator, period,
                    is_active, metric_name, namespace, treat_missing_data, evaluation_periods)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
"#;

pub const SELECT_ALARM_BY_ID: &str = r#"
SELECT alarm_id, name, description, statistic, threshold, comparison_operator, period,
       is_active, metric_name, namespace, treat_missing_data, evaluation_periods
FROM alarms
WHERE alarm_id = ?1
"#;

pub const SELECT_ALARM_SUMMARIES: &str = r#"
SELECT alarm_id, name
FROM alarms
ORDER BY alarm_id
LIMIT ?1 OFFSET ?2
"#;

pub const COUNT_ALARMS: &str = r#"
SELECT COUNT(*)
FROM alarms
"#;

pub const UPDATE_ALARM: &str = r#"
UPDATE alarms
SET name = ?2, description = ?3, statistic = ?4, threshold = ?5, comparison_operator = ?6,
    period = ?7, is_active = ?8, metric_name = ?9, namespace = ?10, treat_missing_data = ?11,
    evaluation_periods = ?12
WHERE alarm_id = ?1
"#;

pub const DELETE_ALARM: &str = r#"
DELETE FROM alarms
WHERE alarm_id = ?1
"#;

pub const INSERT_ALARM_ACTION: &str = r#"
INSERT INTO cloudwatch_alarm_action (alarm_id, action, arn_id)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_ALARM_ACTIONS: &str = r#"
SELECT a.id, a.alarm_id, a.action, s.arn_id, s.name, s.value
FROM cloudwatch_alarm_action a
INNER JOIN alert_sources s ON s.arn_id = a.arn_id
WHERE a.alarm_id = ?1
ORDER BY a.id
"#;

pub const DELETE_ALARM_ACTIONS: &str = r#"
DELETE FROM cloudwatch_alarm_action
WHERE alarm_id = ?1
"#;

pub const INSERT_ALARM_DIMENSION: &str = r#"
INSERT INTO cloudwatch_alarm_dimension (alarm_id, dimension_id)
VALUES (?1, ?2)
"#;

pub const SELECT_ALARM_DIMENSIONS: &str = r#"
SELECT ad.id, ad.alarm_id, d.dimension_id, d.name, d.value
FROM cloudwatch_alarm_dimension ad
INNER JOIN dimensions d ON d.dimension_id = ad.dimension_id
WHERE ad.alarm_id = ?1
ORDER BY ad.id
"#;

pub const DELETE_ALARM_DIMENSIONS: &str = r#"
DELETE FROM cloudwatch_alarm_dimension
WHERE alarm_id = ?1
"#;

// Bug queries
pub const INSERT_BUG: &str = r#"
INSERT INTO bugs (bug_id, dimension_id, resolved, created_at, updated_at)
VALUES (?1, ?2, 0, ?3, ?3)
"#;

pub const SELECT_BUG_BY_ID: &str = r#"
SELECT bug_id, dimension_id, resolved, created_at, updated_at
FROM bugs
WHERE bug_id = ?1
"#;

pub const SELECT_BUG_SUMMARIES: &str = r#"
SELECT b.bug_id, b.resolved, b.created_at, COUNT(o.id), d.value
FROM bugs b
INNER JOIN dimensions d ON d.dimension_id = b.dimension_id
LEFT JOIN bug_owners o ON o.bug_id = b.bug_id
GROUP BY b.bug_id
ORDER BY b.created_at DESC, b.bug_id
LIMIT ?1 OFFSET ?2
"#;

pub const COUNT_BUGS: &str = r#"
SELECT COUNT(*)
FROM bugs
"#;

pub const UPDATE_BUG_RESOLVED: &str = r#"
UPDATE bugs
SET resolved = COALESCE(?2, resolved), updated_at = ?3
WHERE bug_id = ?1
"#;

pub const DELETE_BUG: &str = r#"
DELETE FROM bugs
WHERE bug_id = ?1
"#;

pub const INSERT_BUG_OWNER: &str = r#"
INSERT INTO bug_owners (developer_id, bug_id, created_at)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_BUG_OWNERS: &str = r#"
SELECT o.id, o.bug_id, d.id, d.user_id, u.username, d.is_developer, o.created_at
FROM bug_owners o
INNER JOIN developers d ON d.id = o.developer_id
INNER JOIN users u ON u.id = d.user_id
WHERE o.bug_id = ?1
ORDER BY o.id
"#;

pub const SELECT_BUG_OWNER_DEVELOPER_IDS: &str = r#"
SELECT developer_id
FROM bug_owners
WHERE bug_id = ?1
"#;

pub const DELETE_BUG_OWNER: &str = r#"
DELETE FROM bug_owners
WHERE bug_id = ?1 AND developer_id = ?2
"#;
