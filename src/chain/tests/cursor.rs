use core::ptr;

use super::{TestRecord, build_chain, chain_over};
use crate::chain::range::ChainRange;

#[test]
fn pre_advance_moves_in_place() {
    let records = build_chain(&[100, 200, 300]);
    let chain = chain_over(&records);

    let mut cursor = chain.cursor_front();
    assert_eq!(cursor.get().unwrap().value, 100);
    cursor.advance();
    assert_eq!(cursor.get().unwrap().value, 200);
    cursor.advance();
    assert_eq!(cursor.get().unwrap().value, 300);
    cursor.advance();
    assert_eq!(cursor, chain.cursor_end());
}

#[test]
fn post_advance_yields_record_before_moving() {
    let records = build_chain(&[100, 200]);
    let chain = chain_over(&records);

    let mut cursor = chain.cursor_front();
    let first = cursor.next().unwrap();
    assert_eq!(first.value, 100);
    assert_eq!(cursor.get().unwrap().value, 200);
}

#[test]
fn advancing_past_end_is_a_noop() {
    let record = TestRecord::new(1, ptr::null(), 10);
    let chain = unsafe { ChainRange::from_head(&record as *const TestRecord) };

    let mut cursor = chain.cursor_front();
    cursor.advance();
    assert!(cursor.is_end());

    cursor.advance();
    assert!(cursor.is_end());
    assert_eq!(cursor, chain.cursor_end());
}

#[test]
fn end_cursor_dereferences_to_nothing() {
    let chain = ChainRange::<TestRecord>::empty();
    let cursor = chain.cursor_front();

    assert!(cursor.is_end());
    assert!(cursor.get().is_none());
    assert!(cursor.as_ptr().is_null());
}

#[test]
fn dereference_forms_agree() {
    let records = build_chain(&[11]);
    let chain = chain_over(&records);

    let cursor = chain.cursor_front();
    let record = cursor.get().unwrap();
    assert_eq!(record.value, 11);
    assert!(ptr::eq(record, cursor.as_ptr()));
}

#[test]
fn cursors_advance_independently() {
    let records = build_chain(&[100, 200, 300]);
    let chain = chain_over(&records);

    let mut first = chain.cursor_front();
    let mut second = chain.cursor_front();

    first.advance();
    assert_eq!(first.get().unwrap().value, 200);
    assert_eq!(second.get().unwrap().value, 100);

    second.advance();
    second.advance();
    assert_eq!(first.get().unwrap().value, 200);
    assert_eq!(second.get().unwrap().value, 300);
}

#[test]
fn copies_keep_their_own_position() {
    let records = build_chain(&[100, 200, 300]);
    let chain = chain_over(&records);

    let mut original = chain.cursor_front();
    let copy = original;
    assert_eq!(original, copy);

    original.advance();
    assert_ne!(original, copy);
    assert_eq!(copy.get().unwrap().value, 100);

    let mut assigned = chain.cursor_front();
    assert_eq!(assigned, copy);
    assigned = original;
    assert_eq!(assigned, original);
    assert_ne!(assigned, copy);
}

#[test]
fn equality_is_record_identity() {
    // Two records with equal payloads are still different positions.
    let records = build_chain(&[0, 0]);
    let chain = chain_over(&records);

    let at_first = chain.cursor_front();
    let mut at_second = chain.cursor_front();
    at_second.advance();

    assert_eq!(
        at_first.get().unwrap().value,
        at_second.get().unwrap().value
    );
    assert_ne!(at_first, at_second);

    assert_eq!(chain.cursor_end(), chain.cursor_end());
    assert_ne!(at_first, chain.cursor_end());
}

#[test]
fn exhausted_cursor_stays_fused() {
    let records = build_chain(&[1, 2]);
    let chain = chain_over(&records);

    let mut cursor = chain.cursor_front();
    assert!(cursor.next().is_some());
    assert!(cursor.next().is_some());
    assert!(cursor.next().is_none());
    assert!(cursor.next().is_none());
}
