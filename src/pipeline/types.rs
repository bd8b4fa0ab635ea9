// SPDX-License-Identifier: MIT

//! YAML schema types for pipeline filter configuration

use serde::Deserialize;

/// Pipeline configuration as far as filtering is concerned
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PipelineConfig {
    #[serde(default)]
    pub name: String,
    /// Merge conditions of the same type on an edge into one solver
    #[serde(default)]
    pub reuse_solvers_by_type: bool,
    /// Raw filter specifications, one per configured edge
    #[serde(default)]
    pub filters: Vec<RawFilterSpec>,
}

/// One configured edge and its unparsed filter expression
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RawFilterSpec {
    pub input: String,
    pub output: String,
    /// Condition string, e.g. `Label=person,Label=car`
    #[serde(alias = "filter_expression")]
    pub filters: String,
}

impl RawFilterSpec {
    pub fn new(
        input: impl Into<String>,
        output: impl Into<String>,
        filters: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            filters: filters.into(),
        }
    }
}

/// Runtime options for building a filter table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub reuse_solvers_by_type: bool,
}

impl From<&PipelineConfig> for FilterOptions {
    fn from(config: &PipelineConfig) -> Self {
        Self {
            reuse_solvers_by_type: config.reuse_solvers_by_type,
        }
    }
}
