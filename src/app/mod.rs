pub mod menu;
pub mod session;

pub use menu::MenuChoice;
pub use session::MenuSession;
