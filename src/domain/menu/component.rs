//! MenuComponent trait - the two queries every menu item answers.

/// Anything that can be put on an order.
///
/// Base items and decorated composites answer the same two queries, which
/// is all the ordering and notification layers ever ask of them.
pub trait MenuComponent {
    /// Human-readable description, e.g. "Coffee with milk and cream".
    fn description(&self) -> String;

    /// Total price. No rounding is applied.
    fn price(&self) -> f64;
}
