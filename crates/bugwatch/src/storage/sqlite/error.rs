//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from
//! `bugwatch_core::storage`. Constraint violations map to semantic variants.

use bugwatch_core::storage::RepositoryError;
use rusqlite::ffi;

fn extended_code(err: &rusqlite::Error) -> Option<i32> {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _) => Some(sqlite_err.extended_code),
        _ => None,
    }
}

/// Maps a rusqlite error with a known ID to a RepositoryError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_UNIQUE` / `SQLITE_CONSTRAINT_PRIMARYKEY` → `AlreadyExists`
/// - `SQLITE_CONSTRAINT_FOREIGNKEY` → `InvalidData`
/// - `CannotOpen` → `ConnectionFailed`
/// - `QueryReturnedNoRows` → `NotFound`
/// - All other errors → `QueryFailed`
fn map_rusqlite_error(
    err: &rusqlite::Error,
    entity_type: &'static str,
    id: &str,
) -> RepositoryError {
    match extended_code(err) {
        Some(ffi::SQLITE_CONSTRAINT_UNIQUE) | Some(ffi::SQLITE_CONSTRAINT_PRIMARYKEY) => {
            return RepositoryError::AlreadyExists {
                entity_type,
                id: id.to_string(),
            };
        }
        Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => {
            return RepositoryError::InvalidData(format!(
                "{entity_type} {id} references a row that does not exist"
            ));
        }
        _ => {}
    }

    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }
        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type,
            id: id.to_string(),
        },
        rusqlite::Error::FromSqlConversionFailure(..) => {
            RepositoryError::Serialization(err.to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error with a known ID to a RepositoryError.
pub fn map_tokio_rusqlite_error_with_id(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    let id_str = id.into();
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type, &id_str)
        }
        tokio_rusqlite::Error::Close(_) | tokio_rusqlite::Error::ConnectionClosed => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error raised by a list or count query.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
) -> RepositoryError {
    map_tokio_rusqlite_error_with_id(err, entity_type, "*")
}

/// Maps an error raised by a DELETE.
///
/// A foreign key violation here means a RESTRICT rule blocked the delete,
/// so it becomes `InUse` instead of `InvalidData`.
pub fn map_delete_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: impl Into<String>,
    referenced_by: &'static str,
) -> RepositoryError {
    let id_str = id.into();
    if let tokio_rusqlite::Error::Rusqlite(rusqlite_err) = &err {
        if extended_code(rusqlite_err) == Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY) {
            return RepositoryError::InUse {
                entity_type,
                id: id_str,
                referenced_by,
            };
        }
    }
    map_tokio_rusqlite_error_with_id(err, entity_type, id_str)
}
