// SPDX-License-Identifier: MIT

//! Filter conditions for pipeline edges
//!
//! Conditions are simple `Type=Value` pairs, comma separated:
//! - `Label=person`
//! - `Label=person,Label=car`

mod condition;
mod solver;
mod tokenizer;

pub use condition::{
    parse_condition, split_conditions, ParsedCondition, CONDITION_DELIMITERS,
    OPERATOR_DELIMITERS,
};
pub use solver::{FilterItem, FilterSolver, LabelFilterSolver, LABEL_TYPE};
pub use tokenizer::split;
