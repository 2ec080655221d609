use std::collections::HashMap;
use crate::api::types::TextureId;
use crate::assets::manifest::TextureManifest;

#[derive(Debug, Clone)]
struct TextureSlot {
    name: String,
    path: Option<String>,
    failed: bool,
}

/// Registry of textures referenced by scene materials.
///
/// Names are interned to `TextureId`s on first use, before any manifest is
/// known, so the scene can be built synchronously. Paths arrive later via
/// `apply_manifest`. A texture that failed to load is reported as absent
/// and its meshes render untextured.
pub struct TextureRegistry {
    slots: Vec<TextureSlot>,
    by_name: HashMap<String, TextureId>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Id for `name`, allocating a slot if it is new.
    pub fn intern(&mut self, name: &str) -> TextureId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = TextureId(self.slots.len() as u32);
        self.slots.push(TextureSlot {
            name: name.to_owned(),
            path: None,
            failed: false,
        });
        self.by_name.insert(name.to_owned(), id);
        id
    }

    pub fn id(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, id: TextureId) -> Option<&str> {
        self.slots.get(id.0 as usize).map(|s| s.name.as_str())
    }

    /// Resolve paths for every interned name. Returns how many names the
    /// manifest did not cover; those are logged and render untextured.
    pub fn apply_manifest(&mut self, manifest: &TextureManifest) -> usize {
        let mut missing = 0;
        for slot in &mut self.slots {
            slot.path = manifest.resolve(&slot.name);
            if slot.path.is_none() {
                log::warn!("texture '{}' not listed in manifest", slot.name);
                missing += 1;
            }
        }
        missing
    }

    pub fn path(&self, id: TextureId) -> Option<&str> {
        self.slots.get(id.0 as usize).and_then(|s| s.path.as_deref())
    }

    /// Record that the host could not load a texture.
    pub fn mark_failed(&mut self, id: TextureId) -> crate::Result<()> {
        let slot = self
            .slots
            .get_mut(id.0 as usize)
            .ok_or(crate::OrreryError::UnknownTexture(id.0))?;
        if !slot.failed {
            log::warn!("texture '{}' failed to load, drawing untextured", slot.name);
            slot.failed = true;
        }
        Ok(())
    }

    /// Slot to draw with, or `None` if the texture is unusable.
    pub fn render_slot(&self, id: TextureId) -> Option<u32> {
        let slot = self.slots.get(id.0 as usize)?;
        if slot.failed {
            None
        } else {
            Some(id.0)
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
