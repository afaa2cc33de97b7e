//! Command trait for encapsulated order actions.

/// An order or preparation action, captured so it can be queued and
/// executed later.
pub trait Command {
    /// Performs the action. Returns the rendered ticket line.
    fn execute(&self) -> String;

    /// Description of the item the command acts on.
    fn description(&self) -> String;
}
