use std::sync::atomic::{AtomicUsize, Ordering};

// Single static counter for all elements
static NEXT_ELEMENT_ID: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id() -> usize {
    NEXT_ELEMENT_ID.fetch_add(1, Ordering::SeqCst)
}

/// Advance the counter so that the next generated id is greater than `id`.
/// Called after loading a saved layout, so fresh ids never collide with
/// persisted ones.
pub fn bump_past(id: usize) {
    NEXT_ELEMENT_ID.fetch_max(id + 1, Ordering::SeqCst);
}
