pub mod admin;
pub mod alarms;
pub mod alert_sources;
pub mod bugs;
pub mod developers;
pub mod dimensions;
pub mod error;
pub mod health;
pub mod users;
