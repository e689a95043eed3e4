//! Callable hooks carried by the options: the monitor and the sanitizers.
//!
//! Hooks are shared `Arc` closures over opaque JSON values. Equality is identity:
//! two hooks are equal when they wrap the same closure allocation.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type MonitorFn = dyn Fn(&Value, &Value) -> Value + Send + Sync;
type ActionSanitizerFn = dyn Fn(Value, u64) -> Value + Send + Sync;
type StateSanitizerFn = dyn Fn(Value, usize) -> Value + Send + Sync;

/// Reducer used to render the inspector view.
#[derive(Clone, Default)]
pub enum Monitor {
    /// Placeholder used when no monitor is supplied; always reduces to `null`.
    #[default]
    NoMonitor,
    Reducer(Arc<MonitorFn>),
}

impl Monitor {
    pub fn new<F>(reducer: F) -> Self
    where
        F: Fn(&Value, &Value) -> Value + Send + Sync + 'static,
    {
        Monitor::Reducer(Arc::new(reducer))
    }

    pub fn is_no_monitor(&self) -> bool {
        matches!(self, Monitor::NoMonitor)
    }

    /// Reduce `(state, action)` into the next monitor state.
    pub fn reduce(&self, state: &Value, action: &Value) -> Value {
        match self {
            Monitor::NoMonitor => Value::Null,
            Monitor::Reducer(reducer) => reducer(state, action),
        }
    }
}

impl PartialEq for Monitor {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Monitor::NoMonitor, Monitor::NoMonitor) => true,
            (Monitor::Reducer(a), Monitor::Reducer(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Monitor::NoMonitor => f.write_str("NoMonitor"),
            Monitor::Reducer(_) => f.write_str("Reducer(..)"),
        }
    }
}

/// Transforms each action before it is sent to the inspector.
#[derive(Clone)]
pub struct ActionSanitizer(Arc<ActionSanitizerFn>);

impl ActionSanitizer {
    pub fn new<F>(sanitize: F) -> Self
    where
        F: Fn(Value, u64) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(sanitize))
    }

    /// Sanitize `action`, recorded under `id`.
    pub fn sanitize(&self, action: Value, id: u64) -> Value {
        (self.0)(action, id)
    }
}

impl PartialEq for ActionSanitizer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ActionSanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ActionSanitizer(..)")
    }
}

/// Transforms each computed state before it is sent to the inspector.
#[derive(Clone)]
pub struct StateSanitizer(Arc<StateSanitizerFn>);

impl StateSanitizer {
    pub fn new<F>(sanitize: F) -> Self
    where
        F: Fn(Value, usize) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(sanitize))
    }

    /// Sanitize `state`, found at `index` in the history.
    pub fn sanitize(&self, state: Value, index: usize) -> Value {
        (self.0)(state, index)
    }
}

impl PartialEq for StateSanitizer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for StateSanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StateSanitizer(..)")
    }
}
