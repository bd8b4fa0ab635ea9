//! Config loader - YAML file loading and parsing

use super::types::PipelineConfig;
use crate::error::FilterError;
use std::fs;
use std::path::Path;

/// Loads pipeline filter configuration from YAML files
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a pipeline configuration from a YAML file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<PipelineConfig, FilterError> {
        let path = path.as_ref();
        log::debug!("Loading filter configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse a pipeline configuration from a YAML string.
    ///
    /// Every filter entry must name both ends of its edge.
    pub fn parse_yaml(content: &str) -> Result<PipelineConfig, FilterError> {
        let config: PipelineConfig = serde_yaml::from_str(content)?;
        for (index, spec) in config.filters.iter().enumerate() {
            if spec.input.trim().is_empty() {
                return Err(FilterError::config(format!(
                    "filter entry {} has an empty input",
                    index
                )));
            }
            if spec.output.trim().is_empty() {
                return Err(FilterError::config(format!(
                    "filter entry {} has an empty output",
                    index
                )));
            }
        }
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters() {
        let yaml = r#"
name: people_detection
reuse_solvers_by_type: true
filters:
  - input: StandardCamera
    output: ObjectDetection
    filters: "Label=person,Label=car"
  - input: ObjectDetection
    output: RViz
    filters: "Label=person"
"#;
        let config = ConfigLoader::parse_yaml(yaml).unwrap();
        assert_eq!(config.name, "people_detection");
        assert!(config.reuse_solvers_by_type);
        assert_eq!(config.filters.len(), 2);
        assert_eq!(config.filters[0].input, "StandardCamera");
        assert_eq!(config.filters[0].output, "ObjectDetection");
        assert_eq!(config.filters[0].filters, "Label=person,Label=car");
        assert_eq!(config.filters[1].output, "RViz");
    }

    #[test]
    fn test_parse_without_filters() {
        let config = ConfigLoader::parse_yaml("name: bare\n").unwrap();
        assert!(config.filters.is_empty());
    }

    #[test]
    fn test_invalid_yaml_returns_error() {
        let yaml = r#"
filters:
  - input: [not, a, string]
"#;
        let result = ConfigLoader::parse_yaml(yaml);
        assert!(matches!(result, Err(FilterError::Yaml(_))));
    }

    #[test]
    fn test_empty_edge_name_is_config_error() {
        let yaml = r#"
filters:
  - input: StandardCamera
    output: ObjectDetection
    filters: "Label=person"
  - input: ObjectDetection
    output: ""
    filters: "Label=car"
"#;
        match ConfigLoader::parse_yaml(yaml) {
            Err(FilterError::Config(message)) => {
                assert_eq!(message, "filter entry 1 has an empty output")
            }
            other => panic!("Expected a config error, got {:?}", other),
        }

        let yaml = r#"
filters:
  - input: "  "
    output: ObjectDetection
    filters: "Label=person"
"#;
        assert!(matches!(
            ConfigLoader::parse_yaml(yaml),
            Err(FilterError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_returns_io_error() {
        let result = ConfigLoader::new().load("/nonexistent/pipeline-filters.yaml");
        assert!(matches!(result, Err(FilterError::Io(_))));
    }
}
