//! A diagnostic that cannot be stored abandons the scan.
//!
//! The allocator refuses allocations of one chosen size on the current
//! thread. Picking the length of a fixed message makes exactly that message's
//! copy fail while the lexer and the list's own buffer are unaffected.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
};

use quire_diag::{DiagnosticError, DiagnosticList};
use quire_parser::{ParseError, ScanConfig, check, scan};

struct FailingAllocator;

thread_local! {
    static FAIL_SIZE: Cell<Option<usize>> = const { Cell::new(None) };
}

unsafe impl GlobalAlloc for FailingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if FAIL_SIZE.try_with(Cell::get).ok().flatten() == Some(layout.size()) {
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

const UNTERMINATED: &str = "unterminated string literal";

/// Run `f` with allocations of `size` bytes failing on this thread.
fn failing_size<T>(size: usize, f: impl FnOnce() -> T) -> T {
    FAIL_SIZE.with(|fail| fail.set(Some(size)));
    let result = f();
    FAIL_SIZE.with(|fail| fail.set(None));
    result
}

#[test]
fn test_scan_propagates_out_of_memory() {
    let config = ScanConfig::default();
    let mut diagnostics = DiagnosticList::new();

    let result = failing_size(UNTERMINATED.len(), || {
        scan("x \"open", &config, &mut diagnostics)
    });

    assert!(matches!(
        result,
        Err(DiagnosticError::OutOfMemory { position: 2, .. })
    ));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_scan_keeps_earlier_records() {
    let config = ScanConfig::default();
    let mut diagnostics = DiagnosticList::new();
    diagnostics
        .append("earlier phase", 0)
        .expect("Failed to record diagnostic");

    let result = failing_size(UNTERMINATED.len(), || {
        scan("x \"open", &config, &mut diagnostics)
    });

    assert!(result.is_err());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.first().unwrap().message(), b"earlier phase");
}

#[test]
fn test_check_reports_diagnostic_error() {
    let config = ScanConfig::default();

    let result = failing_size(UNTERMINATED.len(), || check("x \"open", &config));

    match result {
        Err(err @ ParseError::Diagnostic(_)) => {
            assert!(err.diagnostics().is_none());
            assert!(err.to_string().contains("offset 2"));
        }
        other => panic!("Expected a diagnostic error, got {other:?}"),
    }
}
