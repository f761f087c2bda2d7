pub mod app;
pub mod game_screen;
pub mod landing;
pub mod tile;
pub mod upload_button;
pub mod win_popup;

pub use app::App;
