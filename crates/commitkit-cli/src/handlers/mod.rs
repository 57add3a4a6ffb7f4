pub mod help;
pub mod setup;

pub use help::HelpHandler;
pub use setup::SetupHandler;
