#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod document;
pub mod element;
pub mod error;
pub mod geometry;
pub mod id_generator;
pub mod panels;
pub mod persistence;

pub use app::FloorPlanApp;
pub use document::FloorPlan;
pub use element::{Element, ElementId, ElementKind, ElementPatch};
pub use error::{LayoutError, LayoutResult};
pub use geometry::{LayoutConfig, snap_and_clamp, snap_to_grid};
pub use persistence::{JsonFileStore, LayoutStore, SavedLayout, StoreError};
