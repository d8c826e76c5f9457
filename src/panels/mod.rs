mod central_panel;
mod side_panel;

pub use central_panel::central_panel;
pub use side_panel::side_panel;
