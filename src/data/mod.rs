// Backend access and series reshaping
pub mod align;
pub mod error;
pub mod rest_client;
pub mod source;

// Re-export commonly used types
pub use align::{AlignStrategy, AlignmentReport, align_series, alignment_report};
pub use error::ApiError;
pub use rest_client::RestApiClient;
pub use source::MarketDataSource;
