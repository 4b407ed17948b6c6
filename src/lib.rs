//! Alternate modes for a quick-open palette: commands, starred files,
//! workspaces and vaults, all searched and ranked the same way.

pub use error::Error;
pub use handlers::*;
pub use input::*;
pub use matchers::*;
pub use search::*;
pub use settings::Settings;
pub use suggestion::*;

pub mod handlers;
pub mod host;
pub mod render;

mod error;
mod input;
mod matchers;
mod search;
mod settings;
mod suggestion;
