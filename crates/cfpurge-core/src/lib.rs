pub mod config;
pub mod error;
pub mod logging;
pub mod purge;

pub use config::{is_truthy, PurgeOptions};
pub use error::{format_error_chain, CoreError, CoreResult};
pub use purge::{PurgeClient, PurgeRequest, PurgeResponse, PurgeResponseBody, DEFAULT_API_BASE};
