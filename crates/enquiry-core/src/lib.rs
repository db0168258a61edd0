pub mod config;
pub mod dataset;
pub mod error;
pub mod types;

pub use config::EnquiryConfig;
pub use error::{EnquiryError, Result};
pub use types::*;
