// SPDX-License-Identifier: MIT

//! Filter solvers
//!
//! A solver is one filter rule bound to a pipeline edge. It accumulates
//! operand values from conditions and tests stage items against them.

/// What a pipeline item exposes to filter solvers
pub trait FilterItem {
    /// Class label of the item, if it carries one
    fn label(&self) -> Option<&str>;
}

/// A filter rule keyed by its type tag
pub trait FilterSolver: Send + Sync {
    /// Type tag this solver was created for, e.g. `Label`
    fn type_tag(&self) -> &str;

    /// Accumulate one operand value
    fn add_condition(&mut self, operand: &str);

    /// Operands accumulated so far, in insertion order
    fn conditions(&self) -> &[String];

    /// Whether `item` passes this rule
    fn matches(&self, item: &dyn FilterItem) -> bool;
}

impl std::fmt::Debug for dyn FilterSolver + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterSolver")
            .field("type_tag", &self.type_tag())
            .field("conditions", &self.conditions())
            .finish()
    }
}

pub const LABEL_TYPE: &str = "Label";

/// Passes items whose label equals any of the accumulated operands
#[derive(Debug, Default, Clone)]
pub struct LabelFilterSolver {
    labels: Vec<String>,
}

impl LabelFilterSolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FilterSolver for LabelFilterSolver {
    fn type_tag(&self) -> &str {
        LABEL_TYPE
    }

    fn add_condition(&mut self, operand: &str) {
        if !self.labels.iter().any(|l| l == operand) {
            self.labels.push(operand.to_string());
        }
    }

    fn conditions(&self) -> &[String] {
        &self.labels
    }

    fn matches(&self, item: &dyn FilterItem) -> bool {
        match item.label() {
            Some(label) => self.labels.iter().any(|l| l == label),
            None => false,
        }
    }
}
