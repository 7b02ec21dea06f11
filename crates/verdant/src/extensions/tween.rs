// extensions/tween.rs
//
// AnimationSet — owns TransformAnimations keyed by handle, each tagged with
// the EntityId it drives. The entity layer reads frames back out; nothing here
// touches entities directly.
//
// Usage:
//   let mut set = AnimationSet::new();
//   let id = set.play(entity_id, TransformAnimation::new(from, to, 300.0));
//   set.tick(dt_ms);                 // once per frame
//   set.write_frames(&mut frames);   // hand resolved states to the renderer

use std::collections::HashMap;
use crate::api::types::EntityId;
use crate::renderer::instance::{FrameBuffer, TransformInstance};
use super::animation::TransformAnimation;
use super::transform::TransformState;

/// Handle to an animation for later reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(pub u32);

/// Manages a group of transform animations.
///
/// Completed animations stay in the set (so fill-forwards keeps reporting the
/// final state) until removed explicitly or via [`remove_complete`](Self::remove_complete).
#[derive(Debug, Default)]
pub struct AnimationSet {
    animations: HashMap<AnimationId, (EntityId, TransformAnimation)>,
    next_id: u32,
    /// Animations that completed since the last drain.
    completed: Vec<(AnimationId, EntityId)>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an animation for an entity without starting it.
    pub fn add(&mut self, entity: EntityId, animation: TransformAnimation) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        self.animations.insert(id, (entity, animation));
        id
    }

    /// Add an animation and start it immediately.
    pub fn play(&mut self, entity: EntityId, mut animation: TransformAnimation) -> AnimationId {
        animation.start();
        self.add(entity, animation)
    }

    /// (Re)start an animation. Returns false for an unknown handle.
    pub fn start(&mut self, id: AnimationId) -> bool {
        match self.animations.get_mut(&id) {
            Some((_, animation)) => {
                animation.start();
                true
            }
            None => false,
        }
    }

    /// Remove an animation by handle, along with any undrained completion notice.
    pub fn remove(&mut self, id: AnimationId) -> Option<TransformAnimation> {
        self.completed.retain(|(c, _)| *c != id);
        self.animations.remove(&id).map(|(_, a)| a)
    }

    /// Remove all animations for an entity.
    pub fn remove_entity(&mut self, entity: EntityId) {
        self.completed.retain(|(_, e)| *e != entity);
        self.animations.retain(|_, (e, _)| *e != entity);
    }

    /// Drop every completed animation and its undrained notice.
    /// Returns how many were removed.
    pub fn remove_complete(&mut self) -> usize {
        let before = self.animations.len();
        self.animations.retain(|_, (_, a)| !a.is_complete());
        let animations = &self.animations;
        self.completed.retain(|(id, _)| animations.contains_key(id));
        before - self.animations.len()
    }

    pub fn get(&self, id: AnimationId) -> Option<&TransformAnimation> {
        self.animations.get(&id).map(|(_, a)| a)
    }

    pub fn get_mut(&mut self, id: AnimationId) -> Option<&mut TransformAnimation> {
        self.animations.get_mut(&id).map(|(_, a)| a)
    }

    /// Entity an animation drives.
    pub fn entity_of(&self, id: AnimationId) -> Option<EntityId> {
        self.animations.get(&id).map(|(e, _)| *e)
    }

    /// Current frame of one animation.
    pub fn frame(&mut self, id: AnimationId) -> Option<&TransformState> {
        self.animations.get_mut(&id).map(|(_, a)| a.get_frame())
    }

    /// Advance every running animation by `dt` milliseconds.
    /// Returns the number that completed this tick.
    pub fn tick(&mut self, dt: f32) -> usize {
        let mut count = 0;
        for (&id, (entity, animation)) in self.animations.iter_mut() {
            if animation.tick(dt) {
                self.completed.push((id, *entity));
                count += 1;
            }
        }
        if count > 0 {
            log::trace!("AnimationSet: {} of {} animations completed", count, self.animations.len());
        }
        count
    }

    /// Drain completion notices queued by `tick`.
    pub fn drain_completed(&mut self) -> impl Iterator<Item = (AnimationId, EntityId)> + '_ {
        self.completed.drain(..)
    }

    /// Write the current frame of every animation into `buffer`, ordered by handle.
    pub fn write_frames(&mut self, buffer: &mut FrameBuffer) {
        buffer.clear();
        let mut ids: Vec<AnimationId> = self.animations.keys().copied().collect();
        ids.sort_unstable_by_key(|id| id.0);
        for id in ids {
            if let Some((entity, animation)) = self.animations.get_mut(&id) {
                let entity = *entity;
                buffer.push(TransformInstance::from_state(entity, animation.get_frame()));
            }
        }
    }

    /// Number of animations in the set.
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn clear(&mut self) {
        self.animations.clear();
        self.completed.clear();
    }
}
