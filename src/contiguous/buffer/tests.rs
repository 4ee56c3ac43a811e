#![cfg(test)]

use super::*;
use crate::util::test::{ZeroSizedType, assert_panics};

#[test]
fn test_empty_buffer_is_dangling() {
    let buf = Buffer::<u64>::new();
    assert_eq!(buf.cap(), 0);
    assert_eq!(
        buf.ptr,
        std::ptr::NonNull::dangling(),
        "An empty Buffer shouldn't allocate."
    );

    let buf = Buffer::<u64>::with_cap(0);
    assert_eq!(buf.ptr, std::ptr::NonNull::dangling());
}

#[test]
fn test_realloc_preserves_prefix() {
    let mut buf = Buffer::<usize>::with_cap(4);
    for i in 0..4 {
        // SAFETY: i < cap.
        unsafe { buf.as_ptr().add(i).write(i * 10) }
    }

    buf.realloc(16);
    assert_eq!(buf.cap(), 16);
    for i in 0..4 {
        // SAFETY: The first 4 slots were initialized and preserved by realloc.
        assert_eq!(
            unsafe { buf.as_ptr().add(i).read() },
            i * 10,
            "Growing should keep existing values in place."
        );
    }

    buf.realloc(2);
    assert_eq!(buf.cap(), 2);
    // SAFETY: Slot 1 was initialized and is within the new capacity.
    assert_eq!(unsafe { buf.as_ptr().add(1).read() }, 10);

    let old_ptr = buf.ptr;
    buf.realloc(2);
    assert_eq!(
        buf.ptr, old_ptr,
        "Reallocating to the same capacity shouldn't move the Buffer."
    );

    buf.realloc(0);
    assert_eq!(buf.cap(), 0);
    assert_eq!(
        buf.ptr,
        std::ptr::NonNull::dangling(),
        "Pointer should be replaced with a dangling one for 0 capacity."
    );
}

#[test]
fn test_zst_never_allocates() {
    let mut buf = Buffer::<ZeroSizedType>::with_cap(5);
    let old_ptr = buf.ptr;

    buf.realloc(1 << 40);
    assert_eq!(buf.cap(), 1 << 40);
    assert_eq!(
        buf.ptr, old_ptr,
        "Pointer shouldn't change when reallocated for a ZST."
    );
}

#[test]
fn test_capacity_overflow() {
    assert_panics!({
        Buffer::<u64>::with_cap(usize::MAX);
    });

    assert_panics!({
        let mut buf = Buffer::<u64>::with_cap(1);
        buf.realloc(isize::MAX as usize);
    });
}
