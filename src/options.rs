//! Devtools Options
//!
//! Normalizes user-supplied devtools options into a fully-populated configuration.
//! Input may be a partial value or a closure producing one; every field left out
//! receives its default, and the feature set is resolved from `log_only` and the
//! user's overrides.

use crate::error::DevtoolsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

mod features;
mod hooks;
mod loader;
mod max_age;
mod sources;

pub use features::{DevtoolsFeatures, ImportFeature};
pub use hooks::{ActionSanitizer, Monitor, StateSanitizer};
pub use loader::{DevtoolsSettings, OptionsLoader};
pub use max_age::MaxAge;

/// Instance name shown by the inspector when none is given.
pub const DEFAULT_NAME: &str = "NgRx Store DevTools";

/// Number of stack frames kept per action when tracing is on.
pub const DEFAULT_TRACE_LIMIT: u32 = 75;

/// User-supplied options; any subset of fields may be present.
///
/// Hooks are never read from settings files and must be attached in code.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PartialOptions {
    #[serde(default)]
    pub max_age: Option<MaxAge>,

    #[serde(skip)]
    pub monitor: Option<Monitor>,

    #[serde(skip)]
    pub action_sanitizer: Option<ActionSanitizer>,

    #[serde(skip)]
    pub state_sanitizer: Option<StateSanitizer>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub serialize: Option<bool>,

    #[serde(default)]
    pub log_only: Option<bool>,

    #[serde(default)]
    pub auto_pause: Option<bool>,

    #[serde(default)]
    pub trace: Option<bool>,

    #[serde(default)]
    pub trace_limit: Option<u32>,

    #[serde(default)]
    pub connect_outside_zone: Option<bool>,

    #[serde(default)]
    pub features: Option<DevtoolsFeatures>,
}

impl PartialOptions {
    pub fn with_monitor(mut self, monitor: Monitor) -> Self {
        self.monitor = Some(monitor);
        self
    }

    pub fn with_action_sanitizer(mut self, sanitizer: ActionSanitizer) -> Self {
        self.action_sanitizer = Some(sanitizer);
        self
    }

    pub fn with_state_sanitizer(mut self, sanitizer: StateSanitizer) -> Self {
        self.state_sanitizer = Some(sanitizer);
        self
    }

    /// Overlay `overrides` on top of `self`, field by field.
    ///
    /// `features` is replaced wholesale when the overlay carries one; merging
    /// individual flags is left to normalization.
    pub fn overlay(self, overrides: PartialOptions) -> Self {
        Self {
            max_age: overrides.max_age.or(self.max_age),
            monitor: overrides.monitor.or(self.monitor),
            action_sanitizer: overrides.action_sanitizer.or(self.action_sanitizer),
            state_sanitizer: overrides.state_sanitizer.or(self.state_sanitizer),
            name: overrides.name.or(self.name),
            serialize: overrides.serialize.or(self.serialize),
            log_only: overrides.log_only.or(self.log_only),
            auto_pause: overrides.auto_pause.or(self.auto_pause),
            trace: overrides.trace.or(self.trace),
            trace_limit: overrides.trace_limit.or(self.trace_limit),
            connect_outside_zone: overrides.connect_outside_zone.or(self.connect_outside_zone),
            features: overrides.features.or(self.features),
        }
    }
}

/// Options as given to [`create_config`]: a value, or a closure evaluated on the spot.
///
/// The closure runs inside `create_config`, so it may borrow from the caller.
pub enum OptionsInput<'a> {
    Value(PartialOptions),
    Deferred(Box<dyn FnOnce() -> PartialOptions + 'a>),
}

impl<'a> OptionsInput<'a> {
    pub fn deferred<F>(produce: F) -> Self
    where
        F: FnOnce() -> PartialOptions + 'a,
    {
        OptionsInput::Deferred(Box::new(produce))
    }

    fn resolve(self) -> PartialOptions {
        match self {
            OptionsInput::Value(options) => options,
            OptionsInput::Deferred(produce) => produce(),
        }
    }
}

impl From<PartialOptions> for OptionsInput<'_> {
    fn from(options: PartialOptions) -> Self {
        OptionsInput::Value(options)
    }
}

impl fmt::Debug for OptionsInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsInput::Value(options) => f.debug_tuple("Value").field(options).finish(),
            OptionsInput::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Fully-populated devtools configuration.
///
/// Built once when instrumentation starts and read-only afterwards. Serializes to
/// the camelCase shape the inspector expects; hooks are not serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDevtoolsConfig {
    pub max_age: MaxAge,

    #[serde(skip)]
    pub monitor: Monitor,

    #[serde(skip)]
    pub action_sanitizer: Option<ActionSanitizer>,

    #[serde(skip)]
    pub state_sanitizer: Option<StateSanitizer>,

    pub name: String,
    pub serialize: bool,
    pub log_only: bool,
    pub auto_pause: bool,
    pub trace: bool,
    pub trace_limit: u32,
    pub connect_outside_zone: bool,

    // Kept last so table-based formats emit it after the scalars.
    pub features: DevtoolsFeatures,
}

impl Default for StoreDevtoolsConfig {
    fn default() -> Self {
        create_config(PartialOptions::default())
    }
}

/// Build a normalized configuration from `input`.
///
/// A deferred input is invoked first. Absent scalars take their defaults. With
/// `log_only` the feature set is the fixed restricted set and any user features are
/// discarded; otherwise the user's features are merged over the full default set.
/// `import: true` is rewritten to `"custom"`. No validation happens here; see
/// [`StoreDevtoolsConfig::validate`].
pub fn create_config<'a>(input: impl Into<OptionsInput<'a>>) -> StoreDevtoolsConfig {
    let options = input.into().resolve();

    let log_only = options.log_only.unwrap_or(false);
    let features = if log_only {
        DevtoolsFeatures::log_only()
    } else {
        match &options.features {
            Some(overrides) => DevtoolsFeatures::full().merged_with(overrides),
            None => DevtoolsFeatures::full(),
        }
    };
    let features = features.with_import_coerced();

    let config = StoreDevtoolsConfig {
        max_age: options.max_age.unwrap_or_default(),
        monitor: options.monitor.unwrap_or_default(),
        action_sanitizer: options.action_sanitizer,
        state_sanitizer: options.state_sanitizer,
        name: options.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
        serialize: options.serialize.unwrap_or(false),
        log_only,
        auto_pause: options.auto_pause.unwrap_or(false),
        trace: options.trace.unwrap_or(false),
        trace_limit: options.trace_limit.unwrap_or(DEFAULT_TRACE_LIMIT),
        connect_outside_zone: options.connect_outside_zone.unwrap_or(false),
        features,
    };

    debug!(
        name = %config.name,
        log_only = config.log_only,
        features = ?config.features.enabled(),
        "Devtools options normalized"
    );

    config
}

/// Like [`create_config`], for producers that can fail.
///
/// The producer's error is returned unchanged.
pub fn try_create_config<F, E>(produce: F) -> Result<StoreDevtoolsConfig, E>
where
    F: FnOnce() -> Result<PartialOptions, E>,
{
    let options = produce()?;
    Ok(create_config(options))
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MaxAge(u64),
    TraceLimit,
    Name,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MaxAge(n) => {
                write!(f, "maxAge must be greater than 1 (got {})", n)
            }
            ValidationError::TraceLimit => {
                write!(f, "traceLimit must be positive when trace is enabled")
            }
            ValidationError::Name => write!(f, "name cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl StoreDevtoolsConfig {
    /// Render as inspector JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, DevtoolsError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Render as TOML, with the same keys as the JSON form.
    pub fn to_toml(&self) -> Result<String, DevtoolsError> {
        Ok(toml::to_string(self)?)
    }

    /// Validate the configuration, collecting every violation.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        // The inspector needs the committed state plus at least one action.
        if let Some(n) = self.max_age.entries().filter(|n| *n < 2) {
            errors.push(ValidationError::MaxAge(n));
        }

        if self.trace && self.trace_limit == 0 {
            errors.push(ValidationError::TraceLimit);
        }

        if self.name.trim().is_empty() {
            errors.push(ValidationError::Name);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
