pub mod app;
pub mod dialogs;


pub use app::*;
pub use dialogs::*;
