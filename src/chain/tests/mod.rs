use core::ffi::c_void;
use core::ptr;

use std::boxed::Box;
use std::vec::Vec;

use ext_chain_derive::Chained;

use crate::chain::range::ChainRange;

mod cursor;

/// Extension-style record: type tag, erased successor pointer, payload.
#[derive(Chained)]
#[chained(crate_path = "crate")]
#[repr(C)]
pub(crate) struct TestRecord {
    pub(crate) kind: u32,
    pub(crate) next: *const c_void,
    pub(crate) value: i32,
}

// The raw successor field suppresses the auto traits; the tests only ever
// read records while they are shared.
unsafe impl Send for TestRecord {}
unsafe impl Sync for TestRecord {}

impl TestRecord {
    pub(crate) fn new(kind: u32, next: *const c_void, value: i32) -> Self {
        Self { kind, next, value }
    }
}

/// Builds a chain owning its records; the head is the last element pushed.
pub(crate) fn build_chain(values: &[i32]) -> Vec<Box<TestRecord>> {
    let mut records: Vec<Box<TestRecord>> = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate().rev() {
        let next = records.last().map_or(ptr::null(), |record| {
            &**record as *const TestRecord as *const c_void
        });
        records.push(Box::new(TestRecord::new(index as u32, next, *value)));
    }
    records
}

pub(crate) fn chain_over(records: &[Box<TestRecord>]) -> ChainRange<'_, TestRecord> {
    let head = records
        .last()
        .map_or(ptr::null(), |record| &**record as *const TestRecord);
    unsafe { ChainRange::from_head(head) }
}
