pub mod instance;

pub use instance::{TransformInstance, FrameBuffer};
