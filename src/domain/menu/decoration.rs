//! Decoration nodes and the description join rules.
//!
//! A decoration never looks at anything except the description handed to it,
//! so the whole chain is a left fold over these nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

const WITH: &str = " with ";
const AND: &str = " and ";

/// How a decoration rewrites the description of the item it wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinStrategy {
    /// Append the label using the with / and / comma grammar.
    AdditiveNamed,
    /// Replace the description with `qualifier + " " + lowercase(description)`.
    PrefixTransform,
}

impl fmt::Display for JoinStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JoinStrategy::AdditiveNamed => "additive_named",
            JoinStrategy::PrefixTransform => "prefix_transform",
        };
        write!(f, "{}", s)
    }
}

/// One layer of the decoration chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Decoration {
    AdditiveNamed { label: String, price_delta: f64 },
    PrefixTransform { qualifier: String, price_delta: f64 },
}

impl Decoration {
    pub fn additive(label: impl Into<String>, price_delta: f64) -> Self {
        Decoration::AdditiveNamed {
            label: label.into(),
            price_delta,
        }
    }

    pub fn prefix(qualifier: impl Into<String>, price_delta: f64) -> Self {
        Decoration::PrefixTransform {
            qualifier: qualifier.into(),
            price_delta,
        }
    }

    pub fn join_strategy(&self) -> JoinStrategy {
        match self {
            Decoration::AdditiveNamed { .. } => JoinStrategy::AdditiveNamed,
            Decoration::PrefixTransform { .. } => JoinStrategy::PrefixTransform,
        }
    }

    /// The add-on's display name (the qualifier for prefix transforms).
    pub fn label(&self) -> &str {
        match self {
            Decoration::AdditiveNamed { label, .. } => label,
            Decoration::PrefixTransform { qualifier, .. } => qualifier,
        }
    }

    pub fn price_delta(&self) -> f64 {
        match self {
            Decoration::AdditiveNamed { price_delta, .. }
            | Decoration::PrefixTransform { price_delta, .. } => *price_delta,
        }
    }

    /// Rewrites the inner description for this layer.
    pub fn apply(&self, description: &str) -> String {
        match self {
            Decoration::AdditiveNamed { label, .. } => join_additive(description, label),
            Decoration::PrefixTransform { qualifier, .. } => {
                prefix_transform(qualifier, description)
            }
        }
    }
}

/// Appends `label` to `description`.
///
/// - no add-on yet: `"Coffee"` -> `"Coffee with milk"`
/// - one add-on: `"Coffee with milk"` -> `"Coffee with milk and cream"`
/// - two or more: the last `" and"` becomes `","` and a new `" and "` clause
///   is appended, so `"Coffee with milk and cream"` ->
///   `"Coffee with milk, cream and cinnamon"`
///
/// The rule is purely textual. A label that itself contains `" and "`
/// (e.g. "ham and cheese filling") is split by the next additive join.
pub fn join_additive(description: &str, label: &str) -> String {
    if let Some(idx) = description.rfind(AND) {
        let mut joined = String::with_capacity(description.len() + AND.len() + label.len());
        joined.push_str(&description[..idx]);
        joined.push(',');
        // keep the space that followed "and"
        joined.push_str(&description[idx + AND.len() - 1..]);
        joined.push_str(AND);
        joined.push_str(label);
        joined
    } else if description.contains(WITH) {
        format!("{}{}{}", description, AND, label)
    } else {
        format!("{}{}{}", description, WITH, label)
    }
}

/// Rewrites `description` as `qualifier + " " + lowercase(description)`.
pub fn prefix_transform(qualifier: &str, description: &str) -> String {
    format!("{} {}", qualifier, description.to_lowercase())
}
