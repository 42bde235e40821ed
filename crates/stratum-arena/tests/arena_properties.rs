//! Integration tests for the arena's offset discipline.
//!
//! Covers temporary-scope round trips over arbitrary allocation sequences,
//! in-place versus copying resize, and the collaborator pattern of loading
//! a file inside a scratch scope.

use std::io::Write;

use proptest::prelude::*;
use stratum_arena::{load, Arena, ArenaError};
use stratum_test_utils::AlignedBuffer;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

proptest! {
    #[test]
    fn temporary_scope_round_trip(
        prefix in proptest::collection::vec(0usize..64, 0..8),
        inside in proptest::collection::vec((0usize..128, 0u32..7), 0..16),
    ) {
        let mut buf = Box::new(AlignedBuffer::<4096>::new());
        let mut arena = Arena::new(buf.as_mut_slice());
        for size in prefix {
            let _ = arena.alloc(size);
        }
        let before = (arena.previous_offset(), arena.offset());
        {
            let mut scope = arena.begin_temporary();
            for (size, shift) in inside {
                let _ = scope.alloc_aligned(size, 1 << shift);
            }
        }
        prop_assert_eq!((arena.previous_offset(), arena.offset()), before);
    }

    #[test]
    fn in_place_growth_keeps_start(
        first in 1usize..64,
        old in 1usize..64,
        grow_by in 0usize..64,
    ) {
        let mut buf = Box::new(AlignedBuffer::<1024>::new());
        let mut arena = Arena::new(buf.as_mut_slice());
        let _ = arena.alloc(first).unwrap();
        let a = arena.alloc(old).unwrap();
        let grown = arena.resize(Some(a), old + grow_by).unwrap();
        prop_assert_eq!(grown.offset(), a.offset());
        prop_assert_eq!(arena.offset(), a.offset() + old + grow_by);
    }

    #[test]
    fn copying_resize_preserves_prefix(
        contents in proptest::collection::vec(any::<u8>(), 1..64),
        new_size in 1usize..96,
    ) {
        let mut buf = Box::new(AlignedBuffer::<1024>::new());
        let mut arena = Arena::new(buf.as_mut_slice());
        let a = arena.alloc_copy(&contents).unwrap();
        let _ = arena.alloc(1).unwrap();
        let moved = arena.resize(Some(a), new_size).unwrap();
        let keep = contents.len().min(new_size);
        prop_assert!(moved.offset() > a.offset());
        prop_assert_eq!(&arena.bytes(moved)[..keep], &contents[..keep]);
        prop_assert!(arena.bytes(moved)[keep..].iter().all(|&b| b == 0));
    }
}

#[test]
fn dirty_buffer_is_zeroed_on_allocation() {
    let mut buf = Box::new(AlignedBuffer::<256>::filled(0xCD));
    let mut arena = Arena::new(buf.as_mut_slice());
    let a = arena.alloc(100).unwrap();
    assert!(arena.bytes(a).iter().all(|&b| b == 0));
}

#[test]
fn free_all_does_not_zero_but_realloc_does() {
    let mut buf = Box::new(AlignedBuffer::<256>::new());
    let mut arena = Arena::new(buf.as_mut_slice());
    let a = arena.alloc(16).unwrap();
    arena.bytes_mut(a).fill(0x11);
    arena.free_all();
    assert_eq!(arena.offset(), 0);
    assert_eq!(arena.previous_offset(), 0);
    // Stale handle still resolves to the old bytes.
    assert!(arena.bytes(a).iter().all(|&b| b == 0x11));
    let b = arena.alloc(16).unwrap();
    assert!(arena.bytes(b).iter().all(|&b| b == 0));
}

#[test]
fn exhaustion_is_recoverable_with_tracing_enabled() {
    init_tracing();
    let mut buf = Box::new(AlignedBuffer::<64>::new());
    let mut arena = Arena::new(buf.as_mut_slice());
    assert!(arena.alloc(48).is_some());
    let err = arena.try_alloc(48).unwrap_err();
    assert!(matches!(err, ArenaError::CapacityExceeded { requested: 48, .. }));
    arena.free_all();
    assert!(arena.alloc(48).is_some());
}

#[test]
fn file_loaded_inside_scratch_scope_is_released() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"#version 330 core\n").unwrap();
    file.flush().unwrap();

    let mut buf = Box::new(AlignedBuffer::<1024>::new());
    let mut arena = Arena::new(buf.as_mut_slice());
    let keep = arena.alloc_str("persistent").unwrap();
    let mark = arena.offset();
    {
        let mut scratch = arena.begin_temporary();
        let source = load::read_file_string(&mut scratch, file.path()).unwrap();
        assert_eq!(scratch.str(source).unwrap(), "#version 330 core\n");
    }
    assert_eq!(arena.offset(), mark);
    assert_eq!(arena.str(keep).unwrap(), "persistent");
}
