//! Generation run configuration.

/// Configuration for one extraction/resolution run.
///
/// One `GenConfig` covers one self-consistent set of schema documents;
/// resolving across schema-standard versions in a single run is not
/// supported.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Root namespace segments for generated classes.
    pub namespace: Vec<String>,
    /// Free-form label of the schema-standard revision being processed.
    pub version_label: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            namespace: vec!["HL7".to_string(), "FHIR".to_string()],
            version_label: String::new(),
        }
    }
}

impl GenConfig {
    /// Creates a config with the default namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root namespace segments.
    #[must_use]
    pub fn with_namespace(mut self, segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.namespace = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the schema-standard revision label.
    #[must_use]
    pub fn with_version_label(mut self, label: impl Into<String>) -> Self {
        self.version_label = label.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_namespace() {
        let config = GenConfig::new();
        assert_eq!(config.namespace, ["HL7", "FHIR"]);
    }

    #[test]
    fn test_with_setters() {
        let config = GenConfig::new()
            .with_namespace(["Acme", "Models"])
            .with_version_label("R4");
        assert_eq!(config.namespace, ["Acme", "Models"]);
        assert_eq!(config.version_label, "R4");
    }
}
