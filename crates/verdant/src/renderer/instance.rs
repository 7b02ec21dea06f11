use bytemuck::{Pod, Zeroable};
use crate::api::types::EntityId;
use crate::extensions::transform::TransformState;

/// One resolved transform, laid out for upload to an external renderer.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct TransformInstance {
    /// Entity the transform belongs to (as f32, exact below 2^24).
    pub entity: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Rotation in radians.
    pub angle: f32,
    /// 1.0 = multiplicative, 0.0 = absolute.
    pub multiply: f32,
    _pad: f32,
}

impl TransformInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_state(entity: EntityId, state: &TransformState) -> Self {
        Self {
            entity: entity.0 as f32,
            x: state.position.x,
            y: state.position.y,
            width: state.width,
            height: state.height,
            angle: state.angle,
            multiply: if state.is_multiplicative() { 1.0 } else { 0.0 },
            _pad: 0.0,
        }
    }
}

/// Per-frame list of resolved transforms.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    pub instances: Vec<TransformInstance>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(256),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: TransformInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Flat float view of all instances, `FLOATS` per instance.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
