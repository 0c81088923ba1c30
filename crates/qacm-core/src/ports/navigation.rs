/// Navigation capability handed to controllers.
///
/// The browser-history equivalent: controllers only ever go back.
pub trait Navigator: Send + Sync {
    /// Return to the previous view.
    fn previous_state(&self);
}
