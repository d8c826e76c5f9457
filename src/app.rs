use std::path::PathBuf;

use crate::document::FloorPlan;
use crate::element::{ElementId, ElementKind};
use crate::error::LayoutResult;
use crate::panels;
use crate::persistence::{JsonFileStore, LayoutStore};

/// Which surface the app is showing: the editing canvas or the read-only
/// viewer with floor tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Editor,
    Viewer,
}

/// Form state for the add-element controls in the side panel.
#[derive(Debug, Clone)]
pub struct ElementForm {
    pub name: String,
    pub kind: ElementKind,
    pub width: i32,
    pub height: i32,
}

impl Default for ElementForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: ElementKind::Room,
            width: 100,
            height: 100,
        }
    }
}

/// An in-progress drag. The offset accumulates frame deltas and is only
/// committed (snapped and clamped) on drag end.
#[derive(Debug, Clone)]
pub struct DragState {
    pub id: ElementId,
    pub offset: egui::Vec2,
}

pub struct FloorPlanApp {
    pub(crate) plan: FloorPlan,
    pub(crate) store: JsonFileStore,
    pub(crate) mode: AppMode,
    pub(crate) form: ElementForm,
    pub(crate) drag: Option<DragState>,
    pub(crate) status: Option<String>,
}

impl FloorPlanApp {
    /// Called once before the first frame. Opens the layout file if one
    /// exists; a read failure is logged and treated as "nothing saved
    /// yet", so the editor always starts usable.
    pub fn new(_cc: &eframe::CreationContext<'_>, layout_path: PathBuf) -> Self {
        let store = JsonFileStore::new(layout_path);
        let plan = match store.load() {
            Ok(Some(saved)) => {
                log::info!(
                    "loaded layout '{}' ({} elements) from {}",
                    saved.name,
                    saved.elements.len(),
                    store.path().display()
                );
                FloorPlan::from_saved(saved)
            }
            Ok(None) => {
                log::info!("no saved layout at {}, starting empty", store.path().display());
                FloorPlan::default()
            }
            Err(err) => {
                log::warn!("failed to load layout from {}: {err}", store.path().display());
                FloorPlan::default()
            }
        };

        Self {
            plan,
            store,
            mode: AppMode::Editor,
            form: ElementForm::default(),
            drag: None,
            status: None,
        }
    }

    /// Record the outcome of a mutation. Rejected edits surface on the
    /// status line instead of interrupting the frame.
    pub(crate) fn report<T>(&mut self, result: LayoutResult<T>) {
        match result {
            Ok(_) => self.status = None,
            Err(err) => {
                log::warn!("rejected edit: {err}");
                self.status = Some(err.to_string());
            }
        }
    }

    /// Explicit save: the one place the full collection crosses the
    /// persistence boundary.
    pub(crate) fn save_layout(&mut self) {
        match self.store.save(&self.plan.to_saved()) {
            Ok(()) => {
                self.status = Some(format!("Saved to {}", self.store.path().display()));
            }
            Err(err) => {
                log::error!("failed to save layout: {err}");
                self.status = Some(format!("Save failed: {err}"));
            }
        }
    }

    /// Explicit reload, discarding unsaved edits. Wholesale replace, like
    /// opening the editor fresh.
    pub(crate) fn reload_layout(&mut self) {
        match self.store.load() {
            Ok(Some(saved)) => {
                self.plan = FloorPlan::from_saved(saved);
                self.drag = None;
                self.status = Some("Layout reloaded".to_owned());
            }
            Ok(None) => {
                self.status = Some("No saved layout to reload".to_owned());
            }
            Err(err) => {
                log::warn!("failed to reload layout: {err}");
                self.plan = FloorPlan::default();
                self.drag = None;
                self.status = Some(format!("Reload failed: {err}"));
            }
        }
    }
}

impl eframe::App for FloorPlanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.plan.name().to_owned());
                ui.separator();
                ui.selectable_value(&mut self.mode, AppMode::Editor, "Editor");
                ui.selectable_value(&mut self.mode, AppMode::Viewer, "Viewer");
                ui.separator();
                if self.mode == AppMode::Editor && ui.button("Save layout").clicked() {
                    self.save_layout();
                }
                if ui.button("Reload").clicked() {
                    self.reload_layout();
                }
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status.clone());
                }
            });
        });

        if self.mode == AppMode::Viewer {
            self.drag = None;
        }

        panels::side_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
