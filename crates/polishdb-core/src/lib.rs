pub mod app_config;
pub mod config;
pub mod dataset;
pub mod error;
pub mod normalize;
pub mod payload;

pub use app_config::AppConfig;
pub use config::{load_config, load_config_from_env};
pub use dataset::{load_dataset, RawRecord, REQUIRED_COLUMNS};
pub use error::{ConfigError, DatasetError};
pub use normalize::{normalize, strip_brand_metadata, Normalized, Row};
pub use payload::{split_multi_value, PolishPayload, POLISH_TYPE};
