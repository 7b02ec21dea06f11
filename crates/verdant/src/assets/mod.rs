pub mod manifest;

pub use manifest::{AnimationManifest, AnimationDefaults, AnimationDescriptor, StateDescriptor};
