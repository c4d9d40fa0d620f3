pub mod api_client;
pub mod feedback;

pub use api_client::ApiClient;
pub use feedback::{pulse, FeedbackMode};
