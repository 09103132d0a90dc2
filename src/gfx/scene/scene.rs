use cgmath::Vector3;

use crate::config::EditorConfig;
use crate::error::{EditorError, Result};

use super::object::{SceneObject, ShapeKind, TextureHandle, DEFAULT_SPAWN_POSITION};

/// Ordered collection of placed objects plus the current selection.
///
/// An object's identity is its index. Objects are never removed, so indices
/// stay stable for the whole session.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<SceneObject>,
    selected: Option<usize>,
    min_scale: f32,
}

impl Scene {
    /// Creates an empty scene that clamps scales to `min_scale`
    pub fn new(min_scale: f32) -> Self {
        Self {
            objects: Vec::new(),
            selected: None,
            min_scale,
        }
    }

    pub fn min_scale(&self) -> f32 {
        self.min_scale
    }

    /// Appends a default primitive at the spawn position.
    ///
    /// Selection is left untouched.
    pub fn add(&mut self, shape: ShapeKind) -> usize {
        self.push(SceneObject::new(shape, DEFAULT_SPAWN_POSITION))
    }

    /// Appends an object, re-clamping its scale to this scene's minimum
    pub fn push(&mut self, mut object: SceneObject) -> usize {
        object.set_scale(object.scale(), self.min_scale);
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn get(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    /// Display names in storage order ("Object 0", "Object 1", ...)
    pub fn object_names(&self) -> Vec<String> {
        (0..self.objects.len())
            .map(|i| format!("Object {}", i))
            .collect()
    }

    /// The selected index, or `None` when nothing (or a stale index) is selected
    pub fn selected(&self) -> Option<usize> {
        self.selected.filter(|&index| index < self.objects.len())
    }

    pub fn selected_object(&self) -> Option<&SceneObject> {
        self.selected().and_then(|index| self.objects.get(index))
    }

    pub(crate) fn selected_object_mut(&mut self) -> Option<&mut SceneObject> {
        match self.selected() {
            Some(index) => self.objects.get_mut(index),
            None => None,
        }
    }

    /// Selects an object, or clears the selection with `None`.
    ///
    /// Out-of-range indices are stored as no selection.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.objects.len());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn object_mut(&mut self, index: usize) -> Result<&mut SceneObject> {
        let len = self.objects.len();
        self.objects
            .get_mut(index)
            .ok_or(EditorError::ObjectOutOfRange { index, len })
    }

    pub fn set_position(&mut self, index: usize, position: Vector3<f32>) -> Result<()> {
        self.object_mut(index)?.position = position;
        Ok(())
    }

    /// Sets the scale of an object; components below the minimum are clamped
    pub fn set_scale(&mut self, index: usize, scale: Vector3<f32>) -> Result<()> {
        let min_scale = self.min_scale;
        self.object_mut(index)?.set_scale(scale, min_scale);
        Ok(())
    }

    pub fn set_color(&mut self, index: usize, color: [f32; 4]) -> Result<()> {
        self.object_mut(index)?.color = color;
        Ok(())
    }

    /// Binds (or with `None`, unbinds) a renderer texture
    pub fn set_texture(&mut self, index: usize, texture: Option<TextureHandle>) -> Result<()> {
        self.object_mut(index)?.texture = texture;
        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(EditorConfig::default().min_scale)
    }
}
