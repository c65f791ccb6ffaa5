mod api_client;
mod api_request;
mod failure;

pub use api_client::ApiClient;
pub use api_request::{ApiRequest, AuthPolicy, RequestBody};
pub use failure::classify_failure;
