pub mod console;
pub mod navigator;
pub mod notifier;

pub use console::Console;
pub use navigator::TerminalNavigator;
pub use notifier::TerminalNotifier;
