use crate::form::Route;

/// Moves the shell to another screen. Fire-and-forget.
pub trait NavigationPort: Send + Sync {
    fn go_to(&self, route: Route);
}
