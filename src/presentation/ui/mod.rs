//! UI screens.

mod app;
mod confirm_dialog;
mod conversation_screen;
mod create_post_screen;
mod direct_message_screen;
mod edit_profile_screen;
mod home_screen;
mod login_screen;
mod notice_dialog;
mod profile_screen;
pub mod utils;

pub use app::App;
pub use confirm_dialog::{ConfirmDialog, ConfirmOutcome};
pub use conversation_screen::{ConversationAction, ConversationScreen};
pub use create_post_screen::{CreatePostAction, CreatePostScreen};
pub use direct_message_screen::{DirectMessageAction, DirectMessageScreen};
pub use edit_profile_screen::{EditProfileAction, EditProfileScreen};
pub use home_screen::{HomeAction, HomeScreen};
pub use login_screen::{AuthMode, LoginAction, LoginScreen};
pub use notice_dialog::NoticeDialog;
pub use profile_screen::{ProfileAction, ProfileScreen};
