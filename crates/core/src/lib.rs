pub mod config;
pub mod dataset;
pub mod error;

pub use config::AppConfig;
pub use dataset::CampaignDataset;
pub use error::{PulseError, PulseResult};
