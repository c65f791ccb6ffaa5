use crate::client::{ApiRequest, RequestBody, classify_failure};
use crate::retry::with_retry;
use crate::ClientResult;

use jp_config::{ApiConfig, RetryConfig};
use log::{debug, warn};
use reqwest::Client as ReqwestClient;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP adapter for the job-portal REST API.
///
/// Applies the cross-cutting rules once for every call: bearer token for
/// session requests only, no fixed content type, timeouts, retry of
/// idempotent reads. It never touches session state; a 401 is only reported.
#[derive(Debug, Clone)]
pub struct ApiClient {
    api_root: String,
    retry: RetryConfig,
    http: ReqwestClient,
}

impl ApiClient {
    /// Create a client for `api.api_root()`
    ///
    /// No default headers are installed, so multipart bodies keep the
    /// boundary the transport computes.
    #[track_caller]
    pub fn new(api: &ApiConfig, retry: RetryConfig) -> ClientResult<Self> {
        let http = ReqwestClient::builder()
            .timeout(api.request_timeout())
            .connect_timeout(api.connect_timeout())
            .build()?;

        Ok(Self {
            api_root: api.api_root(),
            retry,
            http,
        })
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Send a request and return the decoded JSON body (`Null` when empty).
    ///
    /// `token` is attached only when the request's auth policy allows it.
    pub async fn execute(&self, request: &ApiRequest, token: Option<&str>) -> ClientResult<Value> {
        if request.is_idempotent() {
            let label = format!("{} {}", request.method, request.path);
            with_retry(&self.retry, &label, move || self.execute_once(request, token)).await
        } else {
            self.execute_once(request, token).await
        }
    }

    /// Like [`execute`](Self::execute), decoding into `T`
    pub async fn execute_as<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
    ) -> ClientResult<T> {
        let value = self.execute(request, token).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn execute_once(&self, request: &ApiRequest, token: Option<&str>) -> ClientResult<Value> {
        let url = format!("{}{}", self.api_root, request.path);
        let mut builder = self.http.request(request.method.clone(), &url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if request.carries_token()
            && let Some(token) = token
        {
            builder = builder.bearer_auth(token);
        }

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Form(fields) => builder.form(fields),
            RequestBody::Multipart {
                field,
                file_name,
                mime,
                bytes,
            } => {
                let part = Part::bytes(bytes.clone())
                    .file_name(file_name.clone())
                    .mime_str(mime)?;
                builder.multipart(Form::new().part(*field, part))
            }
        };

        debug!("{} {}", request.method, request.path);

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            warn!("{} {} returned {}", request.method, request.path, status);
            return Err(classify_failure(
                status.as_u16(),
                &body,
                &request.failure_message,
            ));
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
