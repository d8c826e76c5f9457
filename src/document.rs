use crate::element::{Element, ElementId, ElementKind, ElementPatch};
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::{LayoutConfig, snap_and_clamp};
use crate::id_generator;
use crate::persistence::SavedLayout;

/// Raw default position for newly added elements. Passed through the same
/// snap-and-clamp as drags, so new elements are grid-aligned by
/// construction whatever the configured grid size.
pub const DEFAULT_POSITION: (i32, i32) = (40, 40);

const DEFAULT_FLOOR: u32 = 1;

/// The floor plan of one building: an ordered collection of placed
/// elements, the floor currently being edited or viewed, and an optional
/// selection.
///
/// Element order is insertion order and carries no meaning beyond keeping
/// the list panel and the canvas in sync. All mutations go through the
/// methods here so the invariants on [`Element`] hold after every call.
#[derive(Debug, Clone)]
pub struct FloorPlan {
    name: String,
    config: LayoutConfig,
    elements: Vec<Element>,
    current_floor: u32,
    selected: Option<ElementId>,
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self::new("Untitled building")
    }
}

impl FloorPlan {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            config: LayoutConfig::default(),
            elements: Vec::new(),
            current_floor: DEFAULT_FLOOR,
            selected: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Add a new element on the current floor at the snapped default
    /// position. Returns the freshly generated id.
    pub fn add_element(
        &mut self,
        name: &str,
        kind: ElementKind,
        width: i32,
        height: i32,
    ) -> LayoutResult<ElementId> {
        if name.trim().is_empty() {
            return Err(LayoutError::EmptyName);
        }
        if width <= 0 || height <= 0 {
            return Err(LayoutError::InvalidSize { width, height });
        }

        let (raw_x, raw_y) = DEFAULT_POSITION;
        let (x, y) = snap_and_clamp(raw_x, raw_y, width, height, &self.config);
        let id = id_generator::generate_id();
        self.elements.push(Element {
            id,
            name: name.to_owned(),
            kind,
            x,
            y,
            width,
            height,
            floor: self.current_floor,
            description: None,
        });
        log::debug!("added element {id} ({kind}) on floor {}", self.current_floor);
        Ok(id)
    }

    /// Merge a partial update into the element with the given id. Position
    /// fields are taken as-is (the numeric editor path, no snapping);
    /// callers doing drag placement go through [`FloorPlan::move_element`]
    /// instead. All other elements are left untouched.
    pub fn patch_element(&mut self, id: ElementId, patch: ElementPatch) -> LayoutResult<()> {
        let element = self
            .elements
            .iter_mut()
            .find(|el| el.id == id)
            .ok_or(LayoutError::ElementNotFound(id))?;

        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(LayoutError::EmptyName);
            }
        }
        let width = patch.width.unwrap_or(element.width);
        let height = patch.height.unwrap_or(element.height);
        if width <= 0 || height <= 0 {
            return Err(LayoutError::InvalidSize { width, height });
        }
        let x = patch.x.unwrap_or(element.x);
        let y = patch.y.unwrap_or(element.y);
        if x < 0 || y < 0 {
            return Err(LayoutError::InvalidPosition { x, y });
        }

        if let Some(name) = patch.name {
            element.name = name;
        }
        if let Some(kind) = patch.kind {
            element.kind = kind;
        }
        element.x = x;
        element.y = y;
        element.width = width;
        element.height = height;
        if let Some(description) = patch.description {
            element.description = Some(description);
        }
        Ok(())
    }

    /// Drag placement: snap the raw drop position to the grid and clamp it
    /// so the element's own footprint stays inside the canvas.
    pub fn move_element(&mut self, id: ElementId, raw_x: i32, raw_y: i32) -> LayoutResult<()> {
        let element = self
            .elements
            .iter_mut()
            .find(|el| el.id == id)
            .ok_or(LayoutError::ElementNotFound(id))?;

        let (x, y) = snap_and_clamp(raw_x, raw_y, element.width, element.height, &self.config);
        element.x = x;
        element.y = y;
        Ok(())
    }

    /// Remove the element with the given id, clearing the selection if it
    /// pointed at the removed element.
    pub fn remove_element(&mut self, id: ElementId) -> LayoutResult<()> {
        let index = self
            .elements
            .iter()
            .position(|el| el.id == id)
            .ok_or(LayoutError::ElementNotFound(id))?;
        self.elements.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(())
    }

    pub fn select(&mut self, id: ElementId) -> LayoutResult<()> {
        if !self.elements.iter().any(|el| el.id == id) {
            return Err(LayoutError::ElementNotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.element(id))
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn current_floor(&self) -> u32 {
        self.current_floor
    }

    /// Switch the floor being edited/viewed. Floors are numbered from 1.
    pub fn set_current_floor(&mut self, floor: u32) -> LayoutResult<()> {
        if floor == 0 {
            return Err(LayoutError::InvalidFloor(floor));
        }
        if floor != self.current_floor {
            self.current_floor = floor;
            self.selected = None;
        }
        Ok(())
    }

    /// Elements on one floor, in insertion order. The list panel and the
    /// canvas both render from this, so a selection made in either refers
    /// to the same element.
    pub fn elements_on_floor(&self, floor: u32) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |el| el.floor == floor)
    }

    /// Sorted, deduplicated floor numbers present in the collection.
    /// Empty when there are no elements.
    pub fn distinct_floors(&self) -> Vec<u32> {
        let mut floors: Vec<u32> = self.elements.iter().map(|el| el.floor).collect();
        floors.sort_unstable();
        floors.dedup();
        floors
    }

    /// The full ordered collection; this is the save payload (full-replace
    /// semantics, not a diff).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Wholesale replacement of the collection, used when opening a saved
    /// layout. Advances the id generator past every loaded id so fresh
    /// ids stay unique.
    pub fn replace_elements(&mut self, elements: Vec<Element>) {
        if let Some(max_id) = elements.iter().map(|el| el.id).max() {
            id_generator::bump_past(max_id);
        }
        self.elements = elements;
        self.selected = None;
    }

    /// Snapshot for the persistence boundary.
    pub fn to_saved(&self) -> SavedLayout {
        SavedLayout {
            name: self.name.clone(),
            config: self.config,
            elements: self.elements.clone(),
        }
    }

    /// Rebuild a plan from a saved layout. Selection starts cleared and
    /// editing resumes on floor 1.
    pub fn from_saved(saved: SavedLayout) -> Self {
        let mut plan = Self {
            name: saved.name,
            config: saved.config,
            elements: Vec::new(),
            current_floor: DEFAULT_FLOOR,
            selected: None,
        };
        plan.replace_elements(saved.elements);
        plan
    }
}
