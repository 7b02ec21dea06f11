use std::collections::HashMap;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use crate::error::AnimationError;
use crate::extensions::animation::TransformAnimation;
use crate::extensions::easing::Easing;
use crate::extensions::transform::TransformState;

/// Named transform animations for a game.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimationManifest {
    /// Fallbacks for fields an animation leaves out.
    #[serde(default)]
    pub defaults: AnimationDefaults,
    /// Named animation lookup.
    #[serde(default)]
    pub animations: HashMap<String, AnimationDescriptor>,
}

/// Manifest-wide defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDefaults {
    #[serde(default)]
    pub easing: Easing,
    #[serde(default = "default_fill_forwards")]
    pub fill_forwards: bool,
}

impl Default for AnimationDefaults {
    fn default() -> Self {
        Self {
            easing: Easing::Linear,
            fill_forwards: default_fill_forwards(),
        }
    }
}

/// Describes one animation between two states.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    pub from: StateDescriptor,
    pub to: StateDescriptor,
    /// Duration in milliseconds.
    pub duration: f32,
    #[serde(default)]
    pub easing: Option<Easing>,
    #[serde(default)]
    pub fill_forwards: Option<bool>,
}

/// A transform state with every field optional.
/// Missing fields take the identity value for the state's mode.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StateDescriptor {
    #[serde(default)]
    pub position: Option<Vec2>,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub angle: Option<f32>,
    /// Multiplicative unless stated otherwise.
    #[serde(default)]
    pub multiply: Option<bool>,
}

fn default_fill_forwards() -> bool {
    true
}

impl StateDescriptor {
    pub fn build_state(&self) -> TransformState {
        let identity = TransformState::identity(self.multiply.unwrap_or(true));
        TransformState::new(
            self.position.unwrap_or(identity.position),
            self.width.unwrap_or(identity.width),
            self.height.unwrap_or(identity.height),
            self.angle.unwrap_or(identity.angle),
            identity.is_multiplicative(),
        )
    }
}

impl AnimationManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, AnimationError> {
        let manifest: Self = serde_json::from_str(json)?;
        log::debug!("AnimationManifest: loaded {} animations", manifest.animations.len());
        Ok(manifest)
    }

    /// Build a fresh, idle animation by name.
    ///
    /// Endpoints must agree on mode; data-defined animations never mix them.
    pub fn build(&self, name: &str) -> Result<TransformAnimation, AnimationError> {
        let desc = self
            .animations
            .get(name)
            .ok_or_else(|| AnimationError::UnknownAnimation(name.to_string()))?;

        let animation = TransformAnimation::try_new(desc.from.build_state(), desc.to.build_state(), desc.duration)?
            .with_easing(desc.easing.unwrap_or(self.defaults.easing))
            .with_fill_forwards(desc.fill_forwards.unwrap_or(self.defaults.fill_forwards));
        Ok(animation)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POP: &str = r#"{
        "defaults": { "easing": "QuadOut" },
        "animations": {
            "pop": {
                "from": { "width": 0.5, "height": 0.5 },
                "to": {},
                "duration": 200.0,
                "easing": "BackOut"
            },
            "slide_in": {
                "from": { "position": [-100.0, 0.0], "multiply": false },
                "to": { "multiply": false },
                "duration": 400.0,
                "fill_forwards": false
            }
        }
    }"#;

    #[test]
    fn parse_and_build() {
        let manifest = AnimationManifest::from_json(POP).unwrap();
        assert_eq!(manifest.animations.len(), 2);
        assert!(manifest.contains("pop"));

        let mut pop = manifest.build("pop").unwrap();
        assert!(pop.is_multiplicative());
        assert!(pop.fill_forwards());
        let from = pop.get_frame();
        assert!((from.width - 0.5).abs() < 1e-5);
        assert!((from.height - 0.5).abs() < 1e-5);
        assert_eq!(from.position, Vec2::ONE);
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let manifest = AnimationManifest::from_json(POP).unwrap();
        let mut slide = manifest.build("slide_in").unwrap();
        assert!(!slide.is_multiplicative());
        assert!(!slide.fill_forwards());

        slide.start();
        slide.tick(200.0);
        // QuadOut from the manifest defaults: 0.75 of the way at the halfway mark
        assert!((slide.get_frame().position.x + 25.0).abs() < 0.01);
    }

    #[test]
    fn absolute_state_defaults_to_zero() {
        let state = StateDescriptor { multiply: Some(false), ..Default::default() }.build_state();
        assert_eq!(state, TransformState::absolute());
    }

    #[test]
    fn unknown_name_is_an_error() {
        let manifest = AnimationManifest::from_json(POP).unwrap();
        let err = manifest.build("missing").unwrap_err();
        assert!(matches!(err, AnimationError::UnknownAnimation(ref n) if n == "missing"));
    }

    #[test]
    fn mixed_modes_are_rejected() {
        let json = r#"{ "animations": { "bad": {
            "from": { "multiply": true },
            "to": { "multiply": false },
            "duration": 100.0
        } } }"#;
        let manifest = AnimationManifest::from_json(json).unwrap();
        assert!(matches!(manifest.build("bad"), Err(AnimationError::MixedModes)));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = AnimationManifest::from_json("{ \"animations\": [").unwrap_err();
        assert!(matches!(err, AnimationError::Manifest(_)));
    }
}
