use crate::ClientResult;

use std::borrow::Cow;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";

/// Whether the current bearer token may be attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// Never carries a token (login, registration)
    Anonymous,
    /// Carries the session token when there is one
    Session,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    /// `application/x-www-form-urlencoded`
    Form(Vec<(String, String)>),
    /// Single-file multipart form; the transport picks the content type and boundary.
    Multipart {
        field: &'static str,
        file_name: String,
        mime: &'static str,
        bytes: Vec<u8>,
    },
}

/// Transport-neutral description of one backend call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the API root, starting with '/'
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    pub auth: AuthPolicy,
    /// Shown when the backend gives no detail
    pub failure_message: Cow<'static, str>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            auth: AuthPolicy::Session,
            failure_message: Cow::Borrowed(DEFAULT_FAILURE_MESSAGE),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn anonymous(mut self) -> Self {
        self.auth = AuthPolicy::Anonymous;
        self
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    #[track_caller]
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> ClientResult<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn form<'a, I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.body = RequestBody::Form(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    pub fn multipart(
        mut self,
        field: &'static str,
        file_name: impl Into<String>,
        mime: &'static str,
        bytes: Vec<u8>,
    ) -> Self {
        self.body = RequestBody::Multipart {
            field,
            file_name: file_name.into(),
            mime,
            bytes,
        };
        self
    }

    pub fn failure_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.failure_message = message.into();
        self
    }

    /// Safe to send twice; only these are retried on transport failure.
    pub fn is_idempotent(&self) -> bool {
        self.method == Method::GET
    }

    pub fn carries_token(&self) -> bool {
        self.auth == AuthPolicy::Session
    }
}
