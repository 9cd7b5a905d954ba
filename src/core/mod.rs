pub mod config;
pub mod deploy;
pub mod error;
pub mod library;
pub mod navigation;
pub mod preferences;
pub mod prompt;
pub mod state;
pub mod target;


pub use config::*;
pub use deploy::*;
pub use error::*;
pub use library::*;
pub use navigation::*;
pub use preferences::*;
pub use prompt::*;
pub use state::*;
pub use target::*;
