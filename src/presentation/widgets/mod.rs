mod form;
mod header_bar;
mod input;
mod status_bar;
mod success_banner;

pub use form::Form;
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use status_bar::{StatusBar, StatusLevel};
pub use success_banner::SuccessBanner;
