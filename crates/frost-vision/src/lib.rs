pub mod capture;
pub mod coords;
pub mod debug;
pub mod matcher;

pub use capture::{Frame, capture_window};
pub use coords::translate_to_screen;
pub use debug::save_annotated;
pub use matcher::{MatchHit, Template, TemplateSet, threshold_for_scale};
