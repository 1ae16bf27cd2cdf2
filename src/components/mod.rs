//! The components module contains all shared components for our app.

mod app;
mod audio_manager;
mod icons;
mod nasheed_player;
mod search_form;
mod toasts;
mod verse_list;

pub use app::*;
pub use audio_manager::*;
pub use icons::*;
pub use nasheed_player::*;
pub use search_form::*;
pub use toasts::*;
pub use verse_list::*;
