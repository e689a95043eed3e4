//! Feature flags exposed to the devtools inspector.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Value of the `import` feature.
///
/// `Enabled` is accepted as input but never survives normalization: importing a
/// persisted state with it drops the recorded actions, so it is rewritten to `Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFeature {
    Disabled,
    Enabled,
    Custom,
}

impl ImportFeature {
    /// Rewrite `Enabled` to `Custom`, leaving the other variants alone.
    pub fn coerce(self) -> Self {
        match self {
            ImportFeature::Enabled => ImportFeature::Custom,
            other => other,
        }
    }
}

impl From<bool> for ImportFeature {
    fn from(enabled: bool) -> Self {
        if enabled {
            ImportFeature::Enabled
        } else {
            ImportFeature::Disabled
        }
    }
}

impl Serialize for ImportFeature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ImportFeature::Disabled => serializer.serialize_bool(false),
            ImportFeature::Enabled => serializer.serialize_bool(true),
            ImportFeature::Custom => serializer.serialize_str("custom"),
        }
    }
}

struct ImportFeatureVisitor;

impl<'de> Visitor<'de> for ImportFeatureVisitor {
    type Value = ImportFeature;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean or the string \"custom\"")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(ImportFeature::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        // Environment sources hand booleans over as strings.
        match v {
            "custom" => Ok(ImportFeature::Custom),
            "true" => Ok(ImportFeature::Enabled),
            "false" => Ok(ImportFeature::Disabled),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for ImportFeature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ImportFeatureVisitor)
    }
}

/// Capability toggles for the inspector.
///
/// The same shape serves as user input and as normalized output: an absent key in
/// the input means "keep the default", an absent key in the output means the
/// feature is not offered (log-only mode leaves most keys out).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevtoolsFeatures {
    /// Start/pause recording of dispatched actions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause: Option<bool>,

    /// Lock/unlock dispatching actions and side effects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock: Option<bool>,

    /// Persist states on page reloading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persist: Option<bool>,

    /// Export history of actions in a file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export: Option<bool>,

    /// Import history of actions from a file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<ImportFeature>,

    /// Jump back and forth (time travelling)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jump: Option<bool>,

    /// Skip (cancel) actions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<bool>,

    /// Drag and drop actions in the history list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reorder: Option<bool>,

    /// Dispatch custom actions or action creators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatch: Option<bool>,

    /// Generate tests for the selected actions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
}

impl DevtoolsFeatures {
    /// Every feature enabled, with `import` in custom mode.
    pub fn full() -> Self {
        Self {
            pause: Some(true),
            lock: Some(true),
            persist: Some(true),
            export: Some(true),
            import: Some(ImportFeature::Custom),
            jump: Some(true),
            skip: Some(true),
            reorder: Some(true),
            dispatch: Some(true),
            test: Some(true),
        }
    }

    /// The restricted set used in log-only mode.
    pub fn log_only() -> Self {
        Self {
            pause: Some(true),
            export: Some(true),
            test: Some(true),
            ..Self::default()
        }
    }

    /// Shallow merge: keys present in `overrides` win, the rest keep `self`.
    pub fn merged_with(self, overrides: &DevtoolsFeatures) -> Self {
        Self {
            pause: overrides.pause.or(self.pause),
            lock: overrides.lock.or(self.lock),
            persist: overrides.persist.or(self.persist),
            export: overrides.export.or(self.export),
            import: overrides.import.or(self.import),
            jump: overrides.jump.or(self.jump),
            skip: overrides.skip.or(self.skip),
            reorder: overrides.reorder.or(self.reorder),
            dispatch: overrides.dispatch.or(self.dispatch),
            test: overrides.test.or(self.test),
        }
    }

    /// Apply the `import: true -> "custom"` rewrite.
    pub fn with_import_coerced(mut self) -> Self {
        self.import = self.import.map(ImportFeature::coerce);
        self
    }

    /// Features that are present and switched on, in inspector order.
    pub fn enabled(&self) -> Vec<&'static str> {
        let flags = [
            ("pause", self.pause),
            ("lock", self.lock),
            ("persist", self.persist),
            ("export", self.export),
            (
                "import",
                self.import.map(|i| i != ImportFeature::Disabled),
            ),
            ("jump", self.jump),
            ("skip", self.skip),
            ("reorder", self.reorder),
            ("dispatch", self.dispatch),
            ("test", self.test),
        ];
        flags
            .into_iter()
            .filter(|(_, on)| *on == Some(true))
            .map(|(name, _)| name)
            .collect()
    }
}
