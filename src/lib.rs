// src/lib.rs

// --- Declare modules ---
pub mod api;
pub mod app;
pub mod config;
pub mod draft;
pub mod ui;

// --- Expose public types ---
pub use api::{Activity, ApiClient, ApiError, NewActivityPayload};
pub use config::{
    get_config_path as get_config_path_util, load as load_config_util, Config, ConfigError,
};
pub use draft::{ActivityDraft, ActivityType, DistanceUnit, DraftError, DurationUnit};
