pub mod dom;
pub mod gesture;

pub use dom::DomGhost;
pub use gesture::{Gesture, InputKind};
