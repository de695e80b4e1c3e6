//! Annotation session: image, tool, gesture and annotations.

use crate::annotation::{Annotation, AnnotationId, AnnotationStore};
use crate::config::AnnotatorConfig;
use crate::error::{AnnotationError, ConfigError, ImageLoadError};
use crate::geometry::to_local_position;
use crate::input::{ClickTracker, InputEvent, KeyAction};
use crate::loader::LoadedImage;
use crate::tools::{DrawingMachine, Outcome, Preview, ToolKind, ToolSelector};

/// What an input event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Nothing changed.
    None,
    /// A gesture started.
    GestureStarted,
    /// The gesture in progress changed (the preview needs a redraw).
    GestureUpdated,
    /// A gesture finished and a new annotation was added and selected.
    Committed(AnnotationId),
    /// A gesture finished below its commit threshold.
    GestureDiscarded,
    /// A gesture was abandoned.
    GestureCancelled,
    /// An annotation was selected by clicking it.
    Selected(AnnotationId),
    /// The selection was cleared by clicking empty space.
    SelectionCleared,
}

/// One annotation session over a single image.
///
/// Everything runs synchronously inside [`Canvas::handle_event`]; the host
/// re-renders from [`Canvas::store`] and [`Canvas::preview`] afterwards.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: Option<LoadedImage>,
    store: AnnotationStore,
    tools: ToolSelector,
    drawing: DrawingMachine,
    clicks: ClickTracker,
    config: AnnotatorConfig,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a session with the default configuration and no image.
    pub fn new() -> Self {
        Self::from_valid_config(AnnotatorConfig::default())
    }

    /// Create a session from a caller-supplied configuration.
    pub fn with_config(config: AnnotatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: AnnotatorConfig) -> Self {
        Self {
            image: None,
            store: AnnotationStore::with_label_prefix(config.label_prefix.clone()),
            tools: ToolSelector::new(config.default_tool),
            drawing: DrawingMachine::new(&config),
            clicks: ClickTracker::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// Replace the image. Annotations, selection and any gesture belong to
    /// the old image and are dropped.
    pub fn load_image(&mut self, image: LoadedImage) {
        log::info!(
            "Loaded {}x{} image, clearing {} annotation(s)",
            image.width(),
            image.height(),
            self.store.len()
        );
        self.store.clear();
        self.drawing.cancel();
        self.clicks.reset();
        self.image = Some(image);
    }

    /// Decode and load an uploaded file. On failure the session is unchanged.
    pub fn load_image_bytes(&mut self, bytes: &[u8]) -> Result<(), ImageLoadError> {
        match LoadedImage::decode(bytes) {
            Ok(image) => {
                self.load_image(image);
                Ok(())
            }
            Err(e) => {
                log::warn!("Failed to load image: {}", e);
                Err(e)
            }
        }
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    /// Drawing is only possible once an image is loaded.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn tool(&self) -> ToolKind {
        self.tools.current()
    }

    /// Set the current tool. Any gesture of the previous tool is cancelled.
    /// Returns false if the tool was already active.
    pub fn set_tool(&mut self, tool: ToolKind) -> bool {
        let Some(change) = self.tools.set(tool) else {
            return false;
        };
        self.drawing.on_tool_changed(change.previous, change.next);
        self.clicks.reset();
        log::debug!("Tool changed: {} -> {}", change.previous.name(), change.next.name());
        true
    }

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    /// Direct access for list-driven edits made outside the event loop.
    pub fn store_mut(&mut self) -> &mut AnnotationStore {
        &mut self.store
    }

    pub fn annotations(&self) -> &[Annotation] {
        self.store.as_slice()
    }

    pub fn selected(&self) -> Option<AnnotationId> {
        self.store.selected()
    }

    pub fn select(&mut self, id: Option<AnnotationId>) -> Result<(), AnnotationError> {
        self.store.select(id)
    }

    pub fn rename(
        &mut self,
        id: AnnotationId,
        label: impl Into<String>,
    ) -> Result<(), AnnotationError> {
        self.store.rename(id, label)
    }

    pub fn remove(&mut self, id: AnnotationId) -> Option<Annotation> {
        self.store.remove(id)
    }

    /// Check if a gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        self.drawing.is_active()
    }

    /// Preview of the gesture in progress, if any.
    pub fn preview(&self) -> Option<Preview> {
        self.drawing.preview()
    }

    /// Feed one input event through the drawing machine.
    pub fn handle_event(&mut self, event: InputEvent) -> EventOutcome {
        if self.image.is_none() {
            return EventOutcome::None;
        }
        let tool = self.tools.current();

        let outcome = match event {
            InputEvent::PointerDown {
                position,
                button,
                surface,
            } => {
                if !button.is_primary() {
                    return EventOutcome::None;
                }
                let Some(local) = to_local_position(position, surface) else {
                    return EventOutcome::None;
                };
                let double_click = self.clicks.register_press(position);
                if double_click && tool == ToolKind::Polygon && self.drawing.is_active() {
                    // The first press of the pair already placed the final vertex.
                    self.drawing.on_secondary_trigger(tool)
                } else {
                    self.drawing.on_primary_down(tool, local)
                }
            }
            InputEvent::PointerMove { position, surface } => {
                let Some(local) = to_local_position(position, surface) else {
                    return EventOutcome::None;
                };
                self.drawing.on_pointer_move(tool, local)
            }
            InputEvent::PointerUp {
                position,
                button,
                surface,
            } => {
                if !button.is_primary() {
                    return EventOutcome::None;
                }
                self.drawing
                    .on_primary_up(tool, to_local_position(position, surface))
            }
            InputEvent::DoubleClick { .. } => self.drawing.on_secondary_trigger(tool),
            InputEvent::Key(key) => match key.action() {
                Some(KeyAction::Confirm) => self.drawing.on_confirm_key(tool),
                Some(KeyAction::Cancel) => self.drawing.on_cancel_key(),
                None => Outcome::None,
            },
        };

        self.apply(outcome)
    }

    fn apply(&mut self, outcome: Outcome) -> EventOutcome {
        match outcome {
            Outcome::None => EventOutcome::None,
            Outcome::Started => EventOutcome::GestureStarted,
            Outcome::Updated => EventOutcome::GestureUpdated,
            Outcome::Discarded => EventOutcome::GestureDiscarded,
            Outcome::Cancelled => EventOutcome::GestureCancelled,
            Outcome::Committed(commit) => {
                let id = self.store.add(commit.shape).id();
                EventOutcome::Committed(id)
            }
            Outcome::SelectAt(point) => {
                match self.store.annotation_at(point, self.config.hit_tolerance) {
                    Some(id) => {
                        self.store.select(Some(id)).ok();
                        EventOutcome::Selected(id)
                    }
                    None => {
                        self.store.clear_selection();
                        EventOutcome::SelectionCleared
                    }
                }
            }
        }
    }
}
