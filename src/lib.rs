// SPDX-License-Identifier: MIT

//! Declarative filter conditions for the edges of a multi-stage pipeline.

pub mod error;
pub mod pipeline;

pub use error::FilterError;
pub use pipeline::filter::{FilterItem, FilterSolver, LabelFilterSolver};
pub use pipeline::registry::SolverRegistry;
pub use pipeline::types::{FilterOptions, PipelineConfig, RawFilterSpec};
pub use pipeline::PipelineFilters;
