pub mod display;
pub mod mouse;
pub mod window;

pub use window::WindowError;
