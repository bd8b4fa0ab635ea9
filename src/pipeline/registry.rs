// SPDX-License-Identifier: MIT

//! Solver registry - maps filter type tags to solver constructors

use crate::pipeline::filter::{FilterSolver, LabelFilterSolver, LABEL_TYPE};
use std::collections::HashMap;
use std::sync::Arc;

/// Builds a fresh, empty solver
pub type SolverConstructor = Arc<dyn Fn() -> Box<dyn FilterSolver> + Send + Sync>;

/// Index of a solver owned by a filter table
pub type SolverId = usize;

/// Outcome of resolving a type tag
#[derive(Debug)]
pub enum ResolvedSolver {
    /// An already bound solver of the same type should be reused
    Existing(SolverId),
    /// A newly constructed solver
    Created(Box<dyn FilterSolver>),
}

#[derive(Clone)]
pub struct SolverRegistry {
    constructors: HashMap<String, SolverConstructor>,
    reuse_by_type: bool,
}

impl SolverRegistry {
    /// Registry with the built-in solvers
    pub fn new(reuse_by_type: bool) -> Self {
        let mut registry = Self {
            constructors: HashMap::new(),
            reuse_by_type,
        };
        registry.register(
            LABEL_TYPE,
            Arc::new(|| Box::new(LabelFilterSolver::new()) as Box<dyn FilterSolver>),
        );
        registry
    }

    /// Register a constructor for `type_tag`, replacing any previous one
    pub fn register(&mut self, type_tag: impl Into<String>, constructor: SolverConstructor) {
        self.constructors.insert(type_tag.into(), constructor);
    }

    pub fn reuse_by_type(&self) -> bool {
        self.reuse_by_type
    }

    pub fn is_registered(&self, type_tag: &str) -> bool {
        self.constructors.contains_key(type_tag)
    }

    /// Construct a new solver for `type_tag`
    pub fn create(&self, type_tag: &str) -> Option<Box<dyn FilterSolver>> {
        self.constructors.get(type_tag).map(|ctor| ctor())
    }

    /// Resolve a solver for `type_tag`.
    ///
    /// With reuse enabled, the first of `bound` whose type matches is
    /// returned. Otherwise a new solver is built. `None` means the type is
    /// unknown.
    pub fn resolve<'a, I, S>(&self, type_tag: &str, bound: I) -> Option<ResolvedSolver>
    where
        I: IntoIterator<Item = (SolverId, &'a S)>,
        S: FilterSolver + ?Sized + 'a,
    {
        if self.reuse_by_type {
            if let Some((id, _)) = bound
                .into_iter()
                .find(|(_, solver)| solver.type_tag() == type_tag)
            {
                return Some(ResolvedSolver::Existing(id));
            }
        }

        self.create(type_tag).map(ResolvedSolver::Created)
    }
}

impl Default for SolverRegistry {
    fn default() -> Self {
        Self::new(false)
    }
}
