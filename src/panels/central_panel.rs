use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, vec2};

use crate::app::{AppMode, DragState, FloorPlanApp};
use crate::element::{Element, ElementId, ElementKind};
use crate::geometry::LayoutConfig;

const GRID_LINE: Stroke = Stroke {
    width: 0.5,
    color: Color32::from_gray(220),
};
const SELECTION_COLOR: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);

pub fn central_panel(app: &mut FloorPlanApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let config = *app.plan.config();
        let floor = app.plan.current_floor();
        ui.horizontal(|ui| {
            ui.label(format!("Floor {floor} layout"));
            ui.weak(format!("Grid: {}px", config.grid_size));
        });

        egui::ScrollArea::both().show(ui, |ui| {
            let canvas_size = vec2(config.canvas_width as f32, config.canvas_height as f32);
            let (canvas_rect, background) = ui.allocate_exact_size(canvas_size, Sense::click());
            let painter = ui.painter_at(canvas_rect);

            painter.rect_filled(canvas_rect, 0.0, Color32::WHITE);
            painter.rect_stroke(canvas_rect, 0.0, Stroke::new(1.0, Color32::from_gray(180)));
            draw_grid(&painter, canvas_rect, &config);

            let elements: Vec<Element> = app.plan.elements_on_floor(floor).cloned().collect();
            let selected = app.plan.selected();
            let mut clicked: Option<ElementId> = None;
            let mut drop: Option<(ElementId, i32, i32)> = None;

            for el in &elements {
                let mut min = canvas_rect.min + vec2(el.x as f32, el.y as f32);
                if let Some(drag) = &app.drag {
                    if drag.id == el.id {
                        min += drag.offset;
                    }
                }
                let rect = Rect::from_min_size(min, vec2(el.width as f32, el.height as f32));
                draw_element(&painter, rect, el, selected == Some(el.id));

                let sense = match app.mode {
                    AppMode::Editor => Sense::click_and_drag(),
                    AppMode::Viewer => Sense::click(),
                };
                let response = ui.interact(rect, egui::Id::new(("element", el.id)), sense);
                if response.clicked() {
                    clicked = Some(el.id);
                }
                if app.mode == AppMode::Editor {
                    if response.drag_started() {
                        app.drag = Some(DragState {
                            id: el.id,
                            offset: egui::Vec2::ZERO,
                        });
                        clicked = Some(el.id);
                    }
                    if response.dragged() {
                        if let Some(drag) = &mut app.drag {
                            if drag.id == el.id {
                                drag.offset += response.drag_delta();
                            }
                        }
                    }
                    if response.drag_stopped() && app.drag.as_ref().is_some_and(|d| d.id == el.id) {
                        if let Some(drag) = app.drag.take() {
                            // Raw drop position, relative to the canvas
                            // origin; snapped and clamped on commit.
                            let raw_x = el.x + drag.offset.x.round() as i32;
                            let raw_y = el.y + drag.offset.y.round() as i32;
                            drop = Some((el.id, raw_x, raw_y));
                        }
                    }
                }
            }

            if elements.is_empty() {
                painter.text(
                    canvas_rect.center(),
                    Align2::CENTER_CENTER,
                    "No elements on this floor",
                    FontId::proportional(14.0),
                    Color32::GRAY,
                );
            }

            if let Some((id, raw_x, raw_y)) = drop {
                let result = app.plan.move_element(id, raw_x, raw_y);
                app.report(result);
            }
            if let Some(id) = clicked {
                let result = app.plan.select(id);
                app.report(result);
            } else if background.clicked() {
                app.plan.clear_selection();
            }
        });
    });
}

fn draw_grid(painter: &egui::Painter, canvas: Rect, config: &LayoutConfig) {
    let grid = config.grid_size as f32;
    let mut x = canvas.min.x + grid;
    while x < canvas.max.x {
        painter.line_segment([Pos2::new(x, canvas.min.y), Pos2::new(x, canvas.max.y)], GRID_LINE);
        x += grid;
    }
    let mut y = canvas.min.y + grid;
    while y < canvas.max.y {
        painter.line_segment([Pos2::new(canvas.min.x, y), Pos2::new(canvas.max.x, y)], GRID_LINE);
        y += grid;
    }
}

fn draw_element(painter: &egui::Painter, rect: Rect, el: &Element, selected: bool) {
    painter.rect_filled(rect, 0.0, el.kind.fill_color());

    if el.kind == ElementKind::Stairs {
        draw_stairs(painter, rect);
    } else {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            &el.name,
            FontId::proportional(12.0),
            Color32::from_gray(60),
        );
    }

    painter.rect_stroke(rect, 0.0, Stroke::new(2.0, el.kind.border_color()));
    if selected {
        painter.rect_stroke(rect.expand(2.0), 0.0, Stroke::new(2.0, SELECTION_COLOR));
    }
}

/// Step pattern for stairs: ascending steps drawn from the bottom-left
/// corner, step count bounded by the smaller side.
fn draw_stairs(painter: &egui::Painter, rect: Rect) {
    let steps = ((rect.width() / 10.0).floor()).min((rect.height() / 10.0).floor()) as i32;
    if steps < 1 {
        return;
    }
    let step_w = rect.width() / steps as f32;
    let step_h = rect.height() / steps as f32;
    let stroke = Stroke::new(2.0, ElementKind::Stairs.border_color());

    for i in 0..steps {
        let x0 = rect.min.x + i as f32 * step_w;
        let y_top = rect.max.y - (i + 1) as f32 * step_h;
        painter.line_segment([Pos2::new(x0, rect.max.y), Pos2::new(x0, y_top)], stroke);
        painter.line_segment([Pos2::new(x0, y_top), Pos2::new(x0 + step_w, y_top)], stroke);
    }
}
