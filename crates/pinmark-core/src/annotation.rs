//! Committed annotations and the ordered store that owns them.

use crate::error::AnnotationError;
use crate::shapes::{Shape, ShapeKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for annotations.
pub type AnnotationId = Uuid;

/// A labeled shape on the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    id: AnnotationId,
    /// Geometry, tagged by kind.
    pub shape: Shape,
    /// User-facing name. Any string is accepted, including empty.
    pub label: String,
}

impl Annotation {
    pub fn id(&self) -> AnnotationId {
        self.id
    }

    /// Kind of the annotation, `None` for shapes of an unrecognized type.
    pub fn kind(&self) -> Option<ShapeKind> {
        self.shape.kind()
    }
}

/// Ordered collection of annotations plus the current selection.
///
/// Insertion order is display order. Ids are never reused, and the label
/// counter keeps increasing even after deletes or [`AnnotationStore::clear`].
#[derive(Debug, Clone)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
    selected: Option<AnnotationId>,
    /// Number of annotations ever created, drives default labels.
    created: u64,
    label_prefix: String,
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationStore {
    /// Create an empty store with the default "Annotation" label prefix.
    pub fn new() -> Self {
        Self::with_label_prefix("Annotation")
    }

    pub fn with_label_prefix(prefix: impl Into<String>) -> Self {
        Self {
            annotations: Vec::new(),
            selected: None,
            created: 0,
            label_prefix: prefix.into(),
        }
    }

    /// Append a new annotation and select it.
    pub fn add(&mut self, shape: Shape) -> &Annotation {
        self.created += 1;
        let annotation = Annotation {
            id: Uuid::new_v4(),
            shape,
            label: format!("{} {}", self.label_prefix, self.created),
        };
        log::debug!(
            "Added {} '{}' ({})",
            annotation.kind().map(ShapeKind::name).unwrap_or("unknown"),
            annotation.label,
            annotation.id
        );
        self.selected = Some(annotation.id);
        self.annotations.push(annotation);
        &self.annotations[self.annotations.len() - 1]
    }

    /// Remove an annotation. Clears the selection if it was selected.
    pub fn remove(&mut self, id: AnnotationId) -> Option<Annotation> {
        let index = self.annotations.iter().position(|a| a.id == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.annotations.remove(index))
    }

    /// Replace an annotation's label. Id, kind and shape are untouched.
    pub fn rename(
        &mut self,
        id: AnnotationId,
        label: impl Into<String>,
    ) -> Result<(), AnnotationError> {
        let annotation = self.get_mut(id).ok_or(AnnotationError::NotFound(id))?;
        annotation.label = label.into();
        Ok(())
    }

    /// Select an annotation, or clear the selection with `None`.
    ///
    /// Selecting an unknown id fails and leaves the selection unchanged.
    pub fn select(&mut self, id: Option<AnnotationId>) -> Result<(), AnnotationError> {
        if let Some(id) = id {
            if self.get(id).is_none() {
                return Err(AnnotationError::NotFound(id));
            }
        }
        self.selected = id;
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<AnnotationId> {
        self.selected
    }

    pub fn is_selected(&self, id: AnnotationId) -> bool {
        self.selected == Some(id)
    }

    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    fn get_mut(&mut self, id: AnnotationId) -> Option<&mut Annotation> {
        self.annotations.iter_mut().find(|a| a.id == id)
    }

    /// Annotations in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }

    pub fn as_slice(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Topmost annotation under a surface point. Later annotations are
    /// drawn on top, so they win.
    pub fn annotation_at(&self, point: Point, tolerance: f64) -> Option<AnnotationId> {
        self.annotations
            .iter()
            .rev()
            .find(|a| a.shape.hit_test(point, tolerance))
            .map(|a| a.id)
    }

    /// Drop every annotation and the selection.
    pub fn clear(&mut self) {
        self.annotations.clear();
        self.selected = None;
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}
