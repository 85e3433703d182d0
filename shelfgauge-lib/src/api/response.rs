use crate::serializer::Json;
use serde_json::json;
use strum::Display;

/// Outcome of a request, named after the HTTP status it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Status {
    Ok,
    Created,
    Forbidden,
    NotFound,
    UnprocessableEntity,
}

impl Status {
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::UnprocessableEntity => 422,
        }
    }

    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Created => "Created",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::UnprocessableEntity => "Unprocessable Entity",
        }
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        self.code() < 300
    }
}

/// A rendered response: `{"status", "data"}` on success, `{"status", "error"}` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: Status,
    pub body: Json,
}

impl Response {
    #[must_use]
    pub fn success(status: Status, data: Json) -> Self {
        Self {
            status,
            body: json!({ "status": status.to_string(), "data": data }),
        }
    }

    #[must_use]
    pub fn error(status: Status) -> Self {
        Self {
            status,
            body: json!({ "status": status.to_string(), "error": status.reason() }),
        }
    }

    /// The payload of a successful response.
    #[must_use]
    pub fn data(&self) -> Option<&Json> {
        self.body.get("data")
    }
}

/// A response together with the record the handler created, if any.
///
/// The record is returned so that the caller can persist it.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub response: Response,
    pub created: Option<T>,
}

impl<T> Outcome<T> {
    #[must_use]
    pub const fn created(response: Response, record: T) -> Self {
        Self {
            response,
            created: Some(record),
        }
    }

    #[must_use]
    pub const fn rejected(response: Response) -> Self {
        Self { response, created: None }
    }
}
