// SPDX-License-Identifier: MIT

pub mod filter;
pub mod filters;
pub mod loader;
pub mod registry;
pub mod types;

pub use filters::PipelineFilters;
