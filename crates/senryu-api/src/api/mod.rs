//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{health_check, list_examples, post_detect, post_detect_batch, root};
pub use routes::{create_router, run_server};
pub use state::AppState;
