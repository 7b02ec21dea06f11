/// Unique identifier for an entity owned by the host engine.
/// Animations are tagged with it so frames can be routed back to the right sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);
