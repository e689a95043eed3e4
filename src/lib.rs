//! Store DevTools: option normalization for store instrumentation
//!
//! Turns partial, possibly deferred devtools options into a complete configuration
//! consumed by the action/state recorder and the inspector, and loads those options
//! from layered settings files.

pub mod error;
pub mod logging;
pub mod options;

pub use error::DevtoolsError;
pub use options::{
    create_config, try_create_config, OptionsInput, PartialOptions, StoreDevtoolsConfig,
    DEFAULT_NAME,
};
