use std::fs;
use std::path::PathBuf;

use floorplan_studio::document::FloorPlan;
use floorplan_studio::element::ElementKind;
use floorplan_studio::persistence::{JsonFileStore, LayoutStore};
use pretty_assertions::assert_eq;

/// A scratch file under the system temp dir, removed on drop so parallel
/// test runs never collide.
struct ScratchFile(PathBuf);

impl ScratchFile {
    fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "floorplan_studio_{}_{}.json",
            std::process::id(),
            tag
        ));
        let _ = fs::remove_file(&path);
        Self(path)
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn missing_file_loads_as_none() {
    let scratch = ScratchFile::new("missing");
    let store = JsonFileStore::new(&scratch.0);

    assert!(store.load().unwrap().is_none());
}

#[test]
fn save_then_load_returns_the_same_layout() {
    let scratch = ScratchFile::new("roundtrip");
    let store = JsonFileStore::new(&scratch.0);

    let mut plan = FloorPlan::new("Library");
    plan.add_element("Reading room", ElementKind::Room, 300, 200).unwrap();
    plan.set_current_floor(2).unwrap();
    plan.add_element("Archive stairs", ElementKind::Stairs, 80, 120).unwrap();

    store.save(&plan.to_saved()).unwrap();
    let loaded = store.load().unwrap().expect("layout was just saved");

    assert_eq!(loaded.name, "Library");
    assert_eq!(loaded.config, *plan.config());
    assert_eq!(loaded.elements, plan.elements());
}

#[test]
fn save_replaces_the_previous_layout_wholesale() {
    let scratch = ScratchFile::new("replace");
    let store = JsonFileStore::new(&scratch.0);

    let mut plan = FloorPlan::new("Gym");
    let first = plan.add_element("Hall", ElementKind::Auditorium, 400, 300).unwrap();
    store.save(&plan.to_saved()).unwrap();

    plan.remove_element(first).unwrap();
    plan.add_element("Locker room", ElementKind::Utility, 120, 80).unwrap();
    store.save(&plan.to_saved()).unwrap();

    let loaded = store.load().unwrap().expect("layout was just saved");
    assert_eq!(loaded.elements.len(), 1);
    assert_eq!(loaded.elements[0].name, "Locker room");
}

#[test]
fn corrupt_file_is_a_serialization_error() {
    let scratch = ScratchFile::new("corrupt");
    fs::write(&scratch.0, "not json {").unwrap();

    let store = JsonFileStore::new(&scratch.0);
    assert!(store.load().is_err());
}

#[test]
fn kind_names_serialize_lowercase() {
    let scratch = ScratchFile::new("kinds");
    let store = JsonFileStore::new(&scratch.0);

    let mut plan = FloorPlan::new("Union");
    plan.add_element("Stairwell", ElementKind::Stairs, 80, 120).unwrap();
    store.save(&plan.to_saved()).unwrap();

    let raw = fs::read_to_string(&scratch.0).unwrap();
    assert!(raw.contains("\"stairs\""), "kind should use schema names: {raw}");
}
