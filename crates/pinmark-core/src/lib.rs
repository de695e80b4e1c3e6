//! Pinmark Core Library
//!
//! Platform-agnostic drawing state machine, geometry and annotation store
//! for the Pinmark image annotator.

pub mod annotation;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod loader;
pub mod shapes;
pub mod tools;

pub use annotation::{Annotation, AnnotationId, AnnotationStore};
pub use canvas::{Canvas, EventOutcome};
pub use config::AnnotatorConfig;
pub use error::{AnnotationError, ConfigError, ImageLoadError};
pub use geometry::{normalize_rectangle, to_local_position, SurfaceBounds};
pub use input::{ClickTracker, InputEvent, KeyAction, KeyEvent, MouseButton};
pub use loader::{ImageId, LoadedImage};
pub use shapes::{Polygon, Rectangle, Shape, ShapeKind};
pub use tools::{Commit, DrawingMachine, GestureState, Outcome, Preview, ToolKind, ToolSelector};
