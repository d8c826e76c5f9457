use egui::{ComboBox, DragValue, RichText};

use crate::app::{AppMode, FloorPlanApp};
use crate::element::{ElementId, ElementKind, ElementPatch};

/// Editor mode shows a fixed range of floors to build on; the viewer only
/// offers floors that actually have elements.
const EDITOR_FLOORS: std::ops::RangeInclusive<u32> = 1..=5;

pub fn side_panel(app: &mut FloorPlanApp, ctx: &egui::Context) {
    egui::SidePanel::left("side_panel")
        .default_width(280.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match app.mode {
                AppMode::Editor => editor_controls(app, ui),
                AppMode::Viewer => viewer_controls(app, ui),
            });
        });
}

fn editor_controls(app: &mut FloorPlanApp, ui: &mut egui::Ui) {
    ui.label(RichText::new("Floor").strong());
    floor_selector(app, ui, EDITOR_FLOORS.collect());
    ui.separator();

    add_element_form(app, ui);
    ui.separator();

    element_list(app, ui);

    if app.plan.selected().is_some() {
        ui.separator();
        selected_element_editor(app, ui);
    }
}

fn viewer_controls(app: &mut FloorPlanApp, ui: &mut egui::Ui) {
    ui.label(RichText::new("Floors").strong());
    let floors = app.plan.distinct_floors();
    if floors.is_empty() {
        ui.weak("No floors available");
    } else {
        floor_selector(app, ui, floors);
    }
    ui.separator();

    element_list(app, ui);

    if let Some(el) = app.plan.selected_element().cloned() {
        ui.separator();
        ui.label(RichText::new(&el.name).strong());
        ui.label(format!("Type: {}", el.kind));
        ui.label(format!("Size: {}\u{d7}{}", el.width, el.height));
        if let Some(description) = &el.description {
            ui.label(description.clone());
        }
        if ui.button("Clear selection").clicked() {
            app.plan.clear_selection();
        }
    }
}

fn floor_selector(app: &mut FloorPlanApp, ui: &mut egui::Ui, floors: Vec<u32>) {
    ui.horizontal_wrapped(|ui| {
        for floor in floors {
            let active = app.plan.current_floor() == floor;
            if ui.selectable_label(active, format!("Floor {floor}")).clicked() {
                let result = app.plan.set_current_floor(floor);
                app.report(result);
            }
        }
    });
}

fn add_element_form(app: &mut FloorPlanApp, ui: &mut egui::Ui) {
    ui.label(RichText::new("Add element").strong());

    ui.horizontal(|ui| {
        ui.label("Name");
        ui.text_edit_singleline(&mut app.form.name);
    });

    ComboBox::from_id_salt("element_kind")
        .selected_text(app.form.kind.label())
        .show_ui(ui, |ui| {
            for kind in ElementKind::ALL {
                ui.selectable_value(&mut app.form.kind, kind, kind.label());
            }
        });

    ui.horizontal(|ui| {
        ui.label("W");
        ui.add(DragValue::new(&mut app.form.width).range(1..=800));
        ui.label("H");
        ui.add(DragValue::new(&mut app.form.height).range(1..=600));
    });

    if ui.button("Add element").clicked() {
        let result = app.plan.add_element(
            &app.form.name,
            app.form.kind,
            app.form.width,
            app.form.height,
        );
        if result.is_ok() {
            app.form = Default::default();
        }
        app.report(result);
    }
}

fn element_list(app: &mut FloorPlanApp, ui: &mut egui::Ui) {
    let floor = app.plan.current_floor();
    let rows: Vec<(ElementId, String)> = app
        .plan
        .elements_on_floor(floor)
        .map(|el| {
            (
                el.id,
                format!("{} \u{2014} {} {}\u{d7}{}", el.name, el.kind, el.width, el.height),
            )
        })
        .collect();

    ui.label(RichText::new(format!("Elements ({})", rows.len())).strong());
    for (id, label) in rows {
        let selected = app.plan.selected() == Some(id);
        if ui.selectable_label(selected, label).clicked() {
            let result = app.plan.select(id);
            app.report(result);
        }
    }
}

fn selected_element_editor(app: &mut FloorPlanApp, ui: &mut egui::Ui) {
    let Some(el) = app.plan.selected_element().cloned() else {
        return;
    };

    ui.horizontal(|ui| {
        ui.label(RichText::new(&el.name).strong());
        if ui.button("Delete").clicked() {
            let result = app.plan.remove_element(el.id);
            app.report(result);
        }
    });
    // The delete above may have cleared the selection.
    if app.plan.selected() != Some(el.id) {
        return;
    }

    // Numeric edits are free-form (no snapping), matching direct entry.
    let mut x = el.x;
    let mut y = el.y;
    let mut width = el.width;
    let mut height = el.height;
    let mut changed = false;

    egui::Grid::new("element_editor").num_columns(4).show(ui, |ui| {
        ui.label("X");
        changed |= ui.add(DragValue::new(&mut x).range(0..=9999)).changed();
        ui.label("Y");
        changed |= ui.add(DragValue::new(&mut y).range(0..=9999)).changed();
        ui.end_row();
        ui.label("W");
        changed |= ui.add(DragValue::new(&mut width).range(1..=9999)).changed();
        ui.label("H");
        changed |= ui.add(DragValue::new(&mut height).range(1..=9999)).changed();
        ui.end_row();
    });

    let mut description = el.description.clone().unwrap_or_default();
    ui.horizontal(|ui| {
        ui.label("Notes");
        changed |= ui.text_edit_singleline(&mut description).changed();
    });

    if changed {
        let patch = ElementPatch {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            description: (!description.is_empty()).then_some(description),
            ..Default::default()
        };
        let result = app.plan.patch_element(el.id, patch);
        app.report(result);
    }
}
