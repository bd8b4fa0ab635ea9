// SPDX-License-Identifier: MIT

//! Pipeline filters - per-edge filter table
//!
//! Filter expressions are parsed into solvers and bound to the
//! `(input, output)` edge they were configured on. Lookups return the
//! solvers of an edge in the order they were bound.
//!
//! The table is built once with `&mut self` and read afterwards through
//! `&self`; wrap a finished table in an `Arc` to share it across stages.

use crate::error::FilterError;
use crate::pipeline::filter::{parse_condition, split_conditions, FilterItem, FilterSolver};
use crate::pipeline::registry::{ResolvedSolver, SolverId, SolverRegistry};
use crate::pipeline::types::{FilterOptions, PipelineConfig, RawFilterSpec};

/// A solver bound to one pipeline edge
#[derive(Debug, Clone, PartialEq, Eq)]
struct EdgeBinding {
    input: String,
    output: String,
    solver: SolverId,
}

impl EdgeBinding {
    fn is_edge(&self, input: &str, output: &str) -> bool {
        self.input == input && self.output == output
    }
}

pub struct PipelineFilters {
    registry: SolverRegistry,
    solvers: Vec<Box<dyn FilterSolver>>,
    bindings: Vec<EdgeBinding>,
}

impl PipelineFilters {
    pub fn new() -> Self {
        Self::with_options(FilterOptions::default())
    }

    pub fn with_options(options: FilterOptions) -> Self {
        Self::with_registry(SolverRegistry::new(options.reuse_solvers_by_type))
    }

    /// Build a table around a registry that may carry custom solver types
    pub fn with_registry(registry: SolverRegistry) -> Self {
        Self {
            registry,
            solvers: Vec::new(),
            bindings: Vec::new(),
        }
    }

    /// Build a table from a loaded configuration
    pub fn from_config(config: &PipelineConfig) -> Self {
        let mut filters = Self::with_options(FilterOptions::from(config));
        filters.ingest(&config.filters);
        filters
    }

    pub fn registry(&self) -> &SolverRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SolverRegistry {
        &mut self.registry
    }

    /// Add every raw filter specification, in order
    pub fn ingest(&mut self, specs: &[RawFilterSpec]) {
        for spec in specs {
            self.add_filter(&spec.input, &spec.output, &spec.filters);
        }
    }

    /// Parse `expression` and bind its conditions to the edge.
    ///
    /// Malformed conditions and unknown filter types are logged and skipped;
    /// the remaining conditions are still bound.
    pub fn add_filter(&mut self, input: &str, output: &str, expression: &str) {
        for condition in split_conditions(expression) {
            if let Err(e) = self.add_condition(input, output, &condition) {
                match e {
                    FilterError::UnknownPredicateType { .. } => log::warn!("{}", e),
                    _ => log::error!("{}", e),
                }
            }
        }
    }

    fn add_condition(
        &mut self,
        input: &str,
        output: &str,
        condition: &str,
    ) -> Result<(), FilterError> {
        let parsed = parse_condition(condition)?;

        let bound = self
            .bindings
            .iter()
            .filter(|b| b.is_edge(input, output))
            .map(|b| (b.solver, &*self.solvers[b.solver]));

        let resolved = self
            .registry
            .resolve(&parsed.type_tag, bound)
            .ok_or_else(|| FilterError::unknown_type(&parsed.type_tag))?;

        match resolved {
            ResolvedSolver::Existing(id) => {
                log::debug!(
                    "Reusing '{}' filter on {} -> {} for '{}'",
                    parsed.type_tag,
                    input,
                    output,
                    parsed.operand
                );
                self.solvers[id].add_condition(&parsed.operand);
            }
            ResolvedSolver::Created(mut solver) => {
                log::debug!(
                    "Binding '{}' filter on {} -> {} for '{}'",
                    parsed.type_tag,
                    input,
                    output,
                    parsed.operand
                );
                solver.add_condition(&parsed.operand);
                self.solvers.push(solver);
                self.bindings.push(EdgeBinding {
                    input: input.to_string(),
                    output: output.to_string(),
                    solver: self.solvers.len() - 1,
                });
            }
        }

        Ok(())
    }

    /// Solvers bound to the edge, in binding order. Empty means the edge is
    /// unfiltered.
    pub fn find_filters(&self, input: &str, output: &str) -> Vec<&dyn FilterSolver> {
        self.bindings
            .iter()
            .filter(|b| b.is_edge(input, output))
            .map(|b| self.solvers[b.solver].as_ref())
            .collect()
    }

    /// Items that pass every solver bound to the edge
    pub fn filter_items<'a, T: FilterItem>(
        &self,
        input: &str,
        output: &str,
        items: &'a [T],
    ) -> Vec<&'a T> {
        let solvers = self.find_filters(input, output);
        items
            .iter()
            .filter(|item| solvers.iter().all(|s| s.matches(*item)))
            .collect()
    }

    /// Every binding as `(input, output, solver)`, in binding order
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &str, &dyn FilterSolver)> {
        self.bindings.iter().map(|b| {
            (
                b.input.as_str(),
                b.output.as_str(),
                self.solvers[b.solver].as_ref(),
            )
        })
    }

    /// Distinct edges with at least one binding, in first-bound order
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut edges: Vec<(&str, &str)> = Vec::new();
        for b in &self.bindings {
            let edge = (b.input.as_str(), b.output.as_str());
            if !edges.contains(&edge) {
                edges.push(edge);
            }
        }
        edges
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for PipelineFilters {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PipelineFilters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineFilters")
            .field("reuse_by_type", &self.registry.reuse_by_type())
            .field("bindings", &self.bindings().collect::<Vec<_>>())
            .finish()
    }
}
