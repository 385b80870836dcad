pub mod cli;
pub mod display;
pub mod settings;

pub use cli::{Cli, Invocation};
pub use settings::{OptionValue, Settings};
