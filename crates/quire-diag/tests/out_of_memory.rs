//! Allocation failure while recording, driven by a failing allocator.
//!
//! While failure is switched on for the current thread every allocation
//! returns null, so fallible reservations report an error instead of
//! aborting.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
};

use quire_diag::{DiagnosticError, DiagnosticList};

struct FailingAllocator;

thread_local! {
    static FAILING: Cell<bool> = const { Cell::new(false) };
}

unsafe impl GlobalAlloc for FailingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if FAILING.try_with(Cell::get).unwrap_or(false) {
            return std::ptr::null_mut();
        }
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static ALLOCATOR: FailingAllocator = FailingAllocator;

/// Run `f` with every allocation on this thread failing.
fn without_memory<T>(f: impl FnOnce() -> T) -> T {
    FAILING.with(|failing| failing.set(true));
    let result = f();
    FAILING.with(|failing| failing.set(false));
    result
}

#[test]
fn test_message_copy_failure_leaves_list_unchanged() {
    let mut list = DiagnosticList::new();
    list.append("a", 0).expect("Failed to record diagnostic");

    // The first append reserved room for more records, so only the message
    // copy needs memory here
    let result = without_memory(|| list.append("b", 7));

    let err = result.expect_err("append must fail without memory");
    assert!(matches!(err, DiagnosticError::OutOfMemory { position: 7, .. }));
    assert_eq!(err.position(), 7);
    assert_eq!(list.len(), 1);
    assert_eq!(list.first().unwrap().message(), b"a");
}

#[test]
fn test_record_slot_failure_leaves_list_unchanged() {
    let mut list = DiagnosticList::new();

    let result = without_memory(|| list.append("unexpected token", 10));

    assert!(matches!(
        result,
        Err(DiagnosticError::OutOfMemory { position: 10, .. })
    ));
    assert!(list.is_empty());
}

#[test]
fn test_terminated_append_failure() {
    let mut list = DiagnosticList::new();
    list.append("a", 0).expect("Failed to record diagnostic");

    let result = without_memory(|| list.append_terminated(b"lost\0tail", 3));

    assert!(matches!(
        result,
        Err(DiagnosticError::OutOfMemory { position: 3, .. })
    ));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_list_usable_after_failure() {
    let mut list = DiagnosticList::new();
    list.append("a", 0).expect("Failed to record diagnostic");

    let result = without_memory(|| list.append("b", 7));
    assert!(result.is_err());

    list.append("c", 9).expect("Failed to record diagnostic");

    let records: Vec<_> = list.iter().map(|d| (d.message(), d.start())).collect();
    assert_eq!(records, [(&b"a"[..], 0), (&b"c"[..], 9)]);
}

#[test]
fn test_empty_message_needs_no_memory() {
    let mut list = DiagnosticList::new();
    list.append("a", 0).expect("Failed to record diagnostic");

    let result = without_memory(|| list.append("", 4));

    assert!(result.is_ok());
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(1).unwrap().message(), b"");
}
