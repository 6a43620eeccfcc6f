//! Generator configuration.

use crate::error::CodegenError;

/// Cargo feature gating location checks by default.
pub const DEFAULT_CHECK_FEATURE: &str = "checks";

/// Settings that shape the emitted module without changing its semantics.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CodegenConfig {
    /// Path the generated code imports runtime items from.
    pub runtime_path: String,
    /// Cargo feature gating location checks; `None` compiles them in always.
    pub check_feature: Option<String>,
    /// Emit the "autogenerated" banner at the top of the module.
    pub banner: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            runtime_path: "crate".to_owned(),
            check_feature: Some(DEFAULT_CHECK_FEATURE.to_owned()),
            banner: true,
        }
    }
}

impl CodegenConfig {
    #[must_use]
    pub fn with_runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    #[must_use]
    pub fn with_check_feature(mut self, feature: Option<String>) -> Self {
        self.check_feature = feature;
        self
    }

    #[must_use]
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Reject settings that would produce code that does not parse.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if !is_rust_path(&self.runtime_path) {
            return Err(CodegenError::InvalidRuntimePath {
                path: self.runtime_path.clone(),
            });
        }
        if let Some(feature) = &self.check_feature {
            if !is_feature_name(feature) {
                return Err(CodegenError::InvalidFeatureName {
                    name: feature.clone(),
                });
            }
        }
        Ok(())
    }

    /// Attribute line gating a check, if checks are gated at all.
    pub(crate) fn check_gate(&self) -> Option<String> {
        self.check_feature
            .as_ref()
            .map(|feature| format!("#[cfg(feature = \"{feature}\")]"))
    }
}

/// Cargo feature names: a leading alphanumeric or `_`, then alphanumerics, `_`, `-` or `+`.
fn is_feature_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphanumeric() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+'))
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_rust_path(path: &str) -> bool {
    path.split("::").all(is_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(CodegenConfig::default().validate().is_ok());
    }

    #[test]
    fn feature_names() {
        assert!(is_feature_name("checks"));
        assert!(is_feature_name("check-level_2"));
        assert!(!is_feature_name(""));
        assert!(!is_feature_name("-checks"));
        assert!(!is_feature_name("checks\""));
    }

    #[test]
    fn runtime_paths() {
        assert!(is_rust_path("crate"));
        assert!(is_rust_path("fieldops_rt::field"));
        assert!(!is_rust_path("fieldops_rt::"));
        assert!(!is_rust_path("1field"));
    }

    #[test]
    fn invalid_feature_is_rejected() {
        let config = CodegenConfig::default().with_check_feature(Some("a b".to_owned()));
        assert_eq!(
            config.validate(),
            Err(CodegenError::InvalidFeatureName {
                name: "a b".to_owned()
            })
        );
    }

    #[test]
    fn check_gate_follows_feature() {
        let config = CodegenConfig::default();
        assert_eq!(
            config.check_gate().as_deref(),
            Some("#[cfg(feature = \"checks\")]")
        );
        assert_eq!(config.with_check_feature(None).check_gate(), None);
    }
}
