//! Allocation tracking for RT safety tests.
//!
//! A test binary installs [`TrackingAllocator`] as its global allocator and
//! wraps the code under test in a [`track`] guard:
//!
//! ```rust,ignore
//! #[global_allocator]
//! static ALLOC: lka_test_helpers::tracking::TrackingAllocator =
//!     lka_test_helpers::tracking::TrackingAllocator;
//!
//! let guard = track();
//! controller.update(&input);
//! assert_rt_safe!(guard, "update");
//! ```

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    static ALLOCATION_COUNT: Cell<usize> = const { Cell::new(0) };
    static ALLOCATION_BYTES: Cell<usize> = const { Cell::new(0) };
    static TRACKING_ENABLED: Cell<bool> = const { Cell::new(false) };
}

fn record(bytes: usize) {
    if TRACKING_ENABLED.with(Cell::get) {
        ALLOCATION_COUNT.with(|c| c.set(c.get().saturating_add(1)));
        ALLOCATION_BYTES.with(|b| b.set(b.get().saturating_add(bytes)));
    }
}

/// System allocator that counts allocations on threads with tracking on.
#[derive(Debug)]
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            record(new_size.saturating_sub(layout.size()));
        }
        new_ptr
    }
}

/// Counts allocations on the current thread while alive.
#[derive(Debug)]
pub struct AllocationGuard {
    start_count: usize,
    start_bytes: usize,
}

impl AllocationGuard {
    pub fn new() -> Self {
        TRACKING_ENABLED.with(|e| e.set(true));
        Self {
            start_count: ALLOCATION_COUNT.with(Cell::get),
            start_bytes: ALLOCATION_BYTES.with(Cell::get),
        }
    }

    pub fn allocations(&self) -> usize {
        ALLOCATION_COUNT
            .with(Cell::get)
            .saturating_sub(self.start_count)
    }

    pub fn bytes(&self) -> usize {
        ALLOCATION_BYTES
            .with(Cell::get)
            .saturating_sub(self.start_bytes)
    }
}

impl Default for AllocationGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AllocationGuard {
    fn drop(&mut self) {
        TRACKING_ENABLED.with(|e| e.set(false));
    }
}

/// Start counting allocations on this thread.
pub fn track() -> AllocationGuard {
    AllocationGuard::new()
}

/// Panic if the guard saw any allocation.
#[macro_export]
macro_rules! assert_rt_safe {
    ($guard:expr, $context:expr $(,)?) => {
        let guard = &$guard;
        let allocs = guard.allocations();
        if allocs > 0 {
            panic!(
                "RT path allocation violation in '{}': {} allocations ({} bytes)",
                $context,
                allocs,
                guard.bytes()
            );
        }
    };
}
