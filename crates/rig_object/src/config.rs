//! Scene configuration.

use rig_math::Vec3;

/// Configuration for a [`Scene`](crate::Scene).
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Human-readable scene name (e.g. `"arena_props"`), used in logs.
    pub name: String,
    /// Scale given to spawns that do not set one.
    pub default_scale: Vec3,
    /// Forward degenerate-input errors to [`Host::report_error`](rig_host::Host::report_error).
    pub report_errors: bool,
}

impl SceneConfig {
    /// Create a config with unit default scale and error reporting on.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_scale: Vec3::ONE,
            report_errors: true,
        }
    }

    /// Override the default spawn scale.
    #[must_use]
    pub fn with_default_scale(mut self, scale: Vec3) -> Self {
        self.default_scale = scale;
        self
    }

    /// Enable or disable forwarding errors to the host.
    #[must_use]
    pub fn with_error_reports(mut self, enabled: bool) -> Self {
        self.report_errors = enabled;
        self
    }
}
