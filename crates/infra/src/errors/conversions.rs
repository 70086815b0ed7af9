//! Conversions from external infrastructure errors into domain errors.

use meetline_domain::MeetlineError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub MeetlineError);

impl From<InfraError> for MeetlineError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<MeetlineError> for InfraError {
    fn from(value: MeetlineError) -> Self {
        InfraError(value)
    }
}

trait IntoMeetlineError {
    fn into_meetline(self) -> MeetlineError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → MeetlineError */
/* -------------------------------------------------------------------------- */

impl IntoMeetlineError for SqlError {
    fn into_meetline(self) -> MeetlineError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        MeetlineError::Storage("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        MeetlineError::Storage("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 2067) => {
                        MeetlineError::Storage("unique constraint violation".into())
                    }
                    (ErrorCode::CannotOpen, _) => {
                        MeetlineError::Storage(format!("unable to open database: {message}"))
                    }
                    _ => MeetlineError::Storage(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => MeetlineError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                MeetlineError::Storage(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                MeetlineError::Storage(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => MeetlineError::Storage(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => MeetlineError::Storage(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_meetline())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → MeetlineError */
/* -------------------------------------------------------------------------- */

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(MeetlineError::Storage(format!("connection pool error: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → MeetlineError */
/* -------------------------------------------------------------------------- */

impl IntoMeetlineError for HttpError {
    fn into_meetline(self) -> MeetlineError {
        if self.is_timeout() {
            return MeetlineError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return MeetlineError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => MeetlineError::Auth(message),
                404 => MeetlineError::NotFound(message),
                429 => MeetlineError::Network(message),
                400..=499 => MeetlineError::InvalidInput(message),
                _ => MeetlineError::Network(message),
            };
        }

        if self.is_decode() {
            return MeetlineError::InvalidInput(format!("failed to decode HTTP body: {self}"));
        }

        MeetlineError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_meetline())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → MeetlineError */
/* -------------------------------------------------------------------------- */

impl IntoMeetlineError for JsonError {
    fn into_meetline(self) -> MeetlineError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Io => MeetlineError::Internal(format!("JSON I/O failure: {self}")),
            Category::Syntax | Category::Data | Category::Eof => {
                MeetlineError::InvalidInput(format!("invalid JSON: {self}"))
            }
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_meetline())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → MeetlineError */
/* -------------------------------------------------------------------------- */

impl IntoMeetlineError for std::io::Error {
    fn into_meetline(self) -> MeetlineError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => MeetlineError::NotFound(self.to_string()),
            ErrorKind::InvalidData => MeetlineError::InvalidInput(self.to_string()),
            _ => MeetlineError::Storage(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_meetline())
    }
}

/// Map a blocking task join failure.
pub(crate) fn map_join_error(err: tokio::task::JoinError) -> MeetlineError {
    if err.is_cancelled() {
        MeetlineError::Internal("blocking task cancelled".into())
    } else {
        MeetlineError::Internal(format!("blocking task failed: {err}"))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
