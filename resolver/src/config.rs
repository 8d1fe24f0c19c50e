//! Resolver configuration.

use aspect_meta_model::MetaModelVersion;
use serde::Deserialize;

/// Default recursion ceiling for element construction.
///
/// Each nested construction costs several stack frames; 64 levels fit the
/// 2 MiB stack of a spawned thread.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings for one [`Resolver`](crate::Resolver).
///
/// Deserializable from TOML; absent keys take their defaults:
///
/// ```toml
/// max_depth = 64
/// meta_model_version = "2.1.0"
/// predefined_characteristics = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Hard limit on nested element construction.
    pub max_depth: usize,
    /// Forces a meta-model version instead of detecting it from the graph.
    pub meta_model_version: Option<MetaModelVersion>,
    /// Resolve the meta model's predefined characteristics (`samm-c:Text`,
    /// ...) and shared entities (`samm-e:TimeSeriesEntity`) when the graph
    /// does not define them.
    pub predefined_characteristics: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            meta_model_version: None,
            predefined_characteristics: true,
        }
    }
}

impl ResolverConfig {
    /// Sets the recursion ceiling.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Forces a meta-model version.
    #[must_use]
    pub fn with_meta_model_version(mut self, version: MetaModelVersion) -> Self {
        self.meta_model_version = Some(version);
        self
    }

    /// Enables or disables the predefined elements.
    #[must_use]
    pub fn with_predefined_characteristics(mut self, enabled: bool) -> Self {
        self.predefined_characteristics = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config: Result<ResolverConfig, _> = toml::from_str("");
        assert_eq!(config.ok(), Some(ResolverConfig::default()));
    }

    #[test]
    fn toml_overrides_fields() {
        let config: Result<ResolverConfig, _> = toml::from_str(
            "max_depth = 8\nmeta_model_version = \"2.1.0\"\npredefined_characteristics = false\n",
        );
        assert_eq!(
            config.ok(),
            Some(ResolverConfig::default()
                .with_max_depth(8)
                .with_meta_model_version(MetaModelVersion::V2_1_0)
                .with_predefined_characteristics(false))
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let config: Result<ResolverConfig, toml::de::Error> = toml::from_str("depth = 3");
        assert!(config.is_err());
    }
}
