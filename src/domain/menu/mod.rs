//! Menu module - base items and the decoration chain.
//!
//! A [`MenuItem`] is a [`BaseItem`] plus an ordered list of [`Decoration`]s.
//! Its description and price are computed by folding the decorations over
//! the base item's values, innermost first.
//!
//! # Join strategies
//!
//! - `AdditiveNamed` - appends a label: "with", then "and", then commas
//! - `PrefixTransform` - rewrites the whole description as a prefixed,
//!   lower-cased phrase ("Double espresso coffee")

mod add_on;
mod base_item;
mod category;
mod component;
mod decoration;
mod menu_item;

pub use add_on::AddOn;
pub use base_item::BaseItem;
pub use category::ItemCategory;
pub use component::MenuComponent;
pub use decoration::{join_additive, prefix_transform, Decoration, JoinStrategy};
pub use menu_item::MenuItem;
