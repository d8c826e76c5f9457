use egui::Color32;
use serde::{Deserialize, Serialize};

/// Unique identifier for a placed element. Uniqueness within the owning
/// [`crate::FloorPlan`] is the only guarantee; see [`crate::id_generator`].
pub type ElementId = usize;

/// The fixed set of element kinds. The kind only affects presentation:
/// fill/border colors, and stairs draw a step pattern instead of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Room,
    Auditorium,
    Stairs,
    Corridor,
    Toilet,
    Utility,
    Office,
}

impl ElementKind {
    pub const ALL: [ElementKind; 7] = [
        ElementKind::Room,
        ElementKind::Auditorium,
        ElementKind::Stairs,
        ElementKind::Corridor,
        ElementKind::Toilet,
        ElementKind::Utility,
        ElementKind::Office,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Room => "Room",
            ElementKind::Auditorium => "Auditorium",
            ElementKind::Stairs => "Stairs",
            ElementKind::Corridor => "Corridor",
            ElementKind::Toilet => "Toilet",
            ElementKind::Utility => "Utility",
            ElementKind::Office => "Office",
        }
    }

    /// Interior fill color for this kind.
    pub fn fill_color(self) -> Color32 {
        match self {
            ElementKind::Room => Color32::from_rgb(0xe0, 0xf2, 0xfe),
            ElementKind::Auditorium => Color32::from_rgb(0xfe, 0xf3, 0xc7),
            ElementKind::Stairs => Color32::from_rgb(0xf3, 0xe8, 0xff),
            ElementKind::Corridor => Color32::from_rgb(0xe0, 0xe7, 0xff),
            ElementKind::Toilet => Color32::from_rgb(0xfc, 0xe7, 0xf3),
            ElementKind::Utility => Color32::from_rgb(0xf0, 0xfd, 0xf4),
            ElementKind::Office => Color32::from_rgb(0xfe, 0xf2, 0xf2),
        }
    }

    /// Border color for this kind.
    pub fn border_color(self) -> Color32 {
        match self {
            ElementKind::Room => Color32::from_rgb(0x02, 0x84, 0xc7),
            ElementKind::Auditorium => Color32::from_rgb(0xd9, 0x77, 0x06),
            ElementKind::Stairs => Color32::from_rgb(0x7c, 0x3a, 0xed),
            ElementKind::Corridor => Color32::from_rgb(0x4f, 0x46, 0xe5),
            ElementKind::Toilet => Color32::from_rgb(0xec, 0x48, 0x99),
            ElementKind::Utility => Color32::from_rgb(0x16, 0xa3, 0x4a),
            ElementKind::Office => Color32::from_rgb(0xdc, 0x26, 0x26),
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A placed floor-plan object: an axis-aligned rectangle on one floor.
///
/// Invariants maintained by [`crate::FloorPlan`]:
/// - `id` is unique within the owning collection,
/// - `x`, `y` are non-negative and grid-aligned after any placement/drag,
/// - `width`, `height` are positive,
/// - `floor` never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub name: String,
    pub kind: ElementKind,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub floor: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial-field update for [`Element`]. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ElementPatch {
    pub name: Option<String>,
    pub kind: Option<ElementKind>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub description: Option<String>,
}
