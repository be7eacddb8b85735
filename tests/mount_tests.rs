// Host-side tests for the page slot lifecycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod mount {
    include!("../src/core/mount.rs");
}

use mount::MountSlot;
use std::cell::Cell;
use std::rc::Rc;

/// Counts how many times the owned resource was released.
struct Owned(Rc<Cell<u32>>);

impl Drop for Owned {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

type Slot = MountSlot<Owned, Owned>;

#[test]
fn slot_starts_empty() {
    let slot = Slot::default();
    assert!(!slot.is_pending());
    assert!(!slot.is_mounted());
}

#[test]
fn clearing_a_pending_slot_releases_the_wait() {
    let released = Rc::new(Cell::new(0));
    let mut slot = Slot::Pending(Owned(released.clone()));
    assert!(slot.is_pending());

    drop(slot.take());
    assert_eq!(released.get(), 1);
    // a deferred mount firing later sees nothing to resume
    assert!(!slot.is_pending());
    assert!(!slot.is_mounted());
}

#[test]
fn repeated_deferrals_keep_a_single_wait() {
    let released = Rc::new(Cell::new(0));
    let mut slot = Slot::default();
    for _ in 0..5 {
        drop(slot.take());
        slot = Slot::Pending(Owned(released.clone()));
    }
    // every earlier wait was released when replaced
    assert_eq!(released.get(), 4);
    drop(slot.take());
    assert_eq!(released.get(), 5);
}

#[test]
fn remount_tears_down_the_previous_page() {
    let pages = Rc::new(Cell::new(0));
    let mut slot = Slot::Mounted(Owned(pages.clone()));
    assert!(slot.is_mounted());

    drop(slot.take());
    slot = Slot::Mounted(Owned(pages.clone()));
    assert_eq!(pages.get(), 1);
    assert!(slot.is_mounted());
    assert!(!slot.is_pending());
}

#[test]
fn take_on_empty_is_a_no_op() {
    let mut slot = Slot::default();
    assert!(matches!(slot.take(), MountSlot::Empty));
    assert!(matches!(slot, MountSlot::Empty));
}
