//! Condition expression parsing
//!
//! A filter expression has the form `Type<op>Value[,Type<op>Value...]` where
//! `<op>` is one of `=`, `>` or `<`.

use super::tokenizer::split;
use crate::error::FilterError;

/// Separates individual conditions within one expression
pub const CONDITION_DELIMITERS: &str = ",";

/// Separates a condition's type tag from its operand
pub const OPERATOR_DELIMITERS: &str = "=><";

/// A single condition split into its type tag and operand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCondition {
    pub type_tag: String,
    pub operand: String,
}

/// Split an expression into its individual condition strings
pub fn split_conditions(expression: &str) -> Vec<String> {
    split(expression, CONDITION_DELIMITERS)
}

/// Parse one condition into a type tag and operand.
///
/// Surrounding whitespace is trimmed from both halves. Anything other than
/// exactly two non-blank tokens is a malformed condition.
pub fn parse_condition(condition: &str) -> Result<ParsedCondition, FilterError> {
    let tokens = split(condition, OPERATOR_DELIMITERS);
    match tokens.as_slice() {
        [type_tag, operand] => {
            let type_tag = type_tag.trim();
            let operand = operand.trim();
            if type_tag.is_empty() || operand.is_empty() {
                return Err(FilterError::malformed(condition));
            }
            Ok(ParsedCondition {
                type_tag: type_tag.to_string(),
                operand: operand.to_string(),
            })
        }
        _ => Err(FilterError::malformed(condition)),
    }
}
