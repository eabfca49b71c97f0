//! REST API endpoint implementations.

mod notebooks;
mod request;

pub use notebooks::{create_notebook, delete_notebook, get_notebook, update_notebook};
pub use request::send_request_with_retry;
