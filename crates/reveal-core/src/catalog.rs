//! Title list and per-title scene layouts.
//!
//! Both are static for a session. Scene lists are small and ordered: the
//! ordinal of an entry decides its place in the left/center/right arc.

use fnv::{FnvHashMap, FnvHashSet};
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Title {
    pub id: String,
    pub display_name: String,
}

impl Title {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// One preview image and its base layout. `image_ref` is an opaque asset
/// handle passed straight through to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneEntry {
    pub image_ref: String,
    pub base_offset_x: f32,
    pub base_offset_y: f32,
    pub base_rotation_deg: f32,
}

impl SceneEntry {
    pub fn new(image_ref: impl Into<String>, x: f32, y: f32, rotation_deg: f32) -> Self {
        Self {
            image_ref: image_ref.into(),
            base_offset_x: x,
            base_offset_y: y,
            base_rotation_deg: rotation_deg,
        }
    }
}

pub type SceneList = SmallVec<[SceneEntry; 3]>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate title id '{0}'")]
    DuplicateTitle(String),
    #[error("scenes given for unknown title '{0}'")]
    UnknownTitle(String),
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    titles: Vec<Title>,
    scenes: FnvHashMap<String, SceneList>,
}

impl Catalog {
    pub fn new(
        titles: Vec<Title>,
        scenes: impl IntoIterator<Item = (String, SceneList)>,
    ) -> Result<Self, CatalogError> {
        let mut seen = FnvHashSet::default();
        for t in &titles {
            if !seen.insert(t.id.as_str()) {
                return Err(CatalogError::DuplicateTitle(t.id.clone()));
            }
        }
        let mut map = FnvHashMap::default();
        for (id, list) in scenes {
            if !seen.contains(id.as_str()) {
                return Err(CatalogError::UnknownTitle(id));
            }
            map.insert(id, list);
        }
        Ok(Self {
            titles,
            scenes: map,
        })
    }

    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    pub fn contains(&self, title_id: &str) -> bool {
        self.titles.iter().any(|t| t.id == title_id)
    }

    /// Scene entries of a title; empty for unknown ids.
    pub fn scenes(&self, title_id: &str) -> &[SceneEntry] {
        self.scenes
            .get(title_id)
            .map(|s| s.as_slice())
            .unwrap_or(&[])
    }

    /// The seven titles shipped with the page.
    pub fn builtin() -> Self {
        // Three arc shapes reused across titles
        const ARC_A: [(f32, f32, f32); 3] =
            [(-460.0, -190.0, -8.0), (-10.0, -300.0, 2.0), (430.0, -100.0, -4.0)];
        const ARC_B: [(f32, f32, f32); 3] =
            [(-500.0, -100.0, 3.0), (-10.0, -270.0, -4.0), (400.0, -70.0, -2.0)];
        const ARC_C: [(f32, f32, f32); 3] =
            [(-420.0, -110.0, -5.0), (50.0, -200.0, 4.0), (450.0, 20.0, 10.0)];

        let rows: [(&str, &str, &str, [(f32, f32, f32); 3]); 7] = [
            ("onePiece", "one piece", "one-piece", ARC_A),
            ("bleach", "bleach", "bleach", ARC_B),
            ("dragonBall", "dragon ball", "dragon-ball", ARC_A),
            ("soloLeveling", "solo leveling", "solo-leveling", ARC_C),
            ("blackClover", "black clover", "black-clover", ARC_B),
            ("attackOnTitan", "attack on titan", "attack-on-titan", ARC_C),
            ("demonSlayer", "demon slayer", "demon-slayer", ARC_A),
        ];

        let titles = rows
            .iter()
            .map(|(id, name, _, _)| Title::new(*id, *name))
            .collect();
        let scenes = rows.iter().map(|(id, _, asset, arc)| {
            let list = arc
                .iter()
                .enumerate()
                .map(|(i, &(x, y, r))| {
                    SceneEntry::new(format!("/{}-{}.gif", asset, i + 1), x, y, r)
                })
                .collect::<SceneList>();
            (id.to_string(), list)
        });
        match Self::new(titles, scenes) {
            Ok(c) => c,
            Err(e) => {
                log::error!("[catalog] builtin catalog rejected: {}", e);
                Self::default()
            }
        }
    }
}
