use serde::{Deserialize, Serialize};

use super::model::ModelSpec;

/// The set of interactive models placed in the scene, in spawn order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalogue {
    pub models: Vec<ModelSpec>,
}

impl Catalogue {
    /// The home-page models: two blog entry points and one external project.
    ///
    /// Their clips use hyphenated names, so pair this catalogue with
    /// [`CueTable::hyphenated`](crate::hover::CueTable::hyphenated).
    pub fn builtin() -> Self {
        Self {
            models: vec![
                ModelSpec::new("models/model4-pc-kirbyscreen1.glb", "/blogposts")
                    .with_scale(0.2)
                    .with_position(-10.0, 0.0, -10.0),
                ModelSpec::new("models/travel-model3-conversion-test-anim5.glb", "/blogposts")
                    .with_scale(0.6)
                    .with_position(-12.0, 0.0, 2.0),
                ModelSpec::new("models/glass-model5-out2.glb", "https://clinkclank.netlify.app/")
                    .with_scale(0.6)
                    .with_position(0.0, 0.0, -10.0),
            ],
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DEFAULT_GLASS_MATERIAL;

    #[test]
    fn json_fills_defaults() {
        let catalogue = Catalogue::from_json(
            r#"[{ "src": "models/a.glb", "link": "/a", "label": "A" }]"#,
        )
        .unwrap();

        let model = &catalogue.models[0];
        assert_eq!(model.scale, [1.0; 3]);
        assert_eq!(model.position, [0.0; 3]);
        assert!(model.cast_shadow && model.receive_shadow);
        assert_eq!(model.glass_material.as_deref(), Some(DEFAULT_GLASS_MATERIAL));
        assert_eq!(model.label.as_deref(), Some("A"));
    }

    #[test]
    fn glass_substitution_can_be_disabled() {
        let catalogue = Catalogue::from_json(
            r#"[{ "src": "b.glb", "link": "/b", "glass_material": null, "cast_shadow": false }]"#,
        )
        .unwrap();
        assert_eq!(catalogue.models[0].glass_material, None);
        assert!(!catalogue.models[0].cast_shadow);
    }

    #[test]
    fn builtin_catalogue_has_one_external_link() {
        let catalogue = Catalogue::builtin();
        assert_eq!(catalogue.len(), 3);
        let external = catalogue
            .models
            .iter()
            .filter(|m| m.link.starts_with("https://"))
            .count();
        assert_eq!(external, 1);
    }
}
