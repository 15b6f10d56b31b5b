#![cfg(test)]

use std::borrow::Borrow;
use std::hash::{BuildHasher, RandomState};
use std::iter;
use std::mem::MaybeUninit;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_zst_support() {
    let arr = Array::<ZeroSizedType>::repeat_default(5);
    assert_eq!(
        arr[0], ZeroSizedType,
        "Indexing with no offset should work."
    );
    assert_eq!(
        arr[4], ZeroSizedType,
        "Indexing with an in-bounds offset should work."
    );
    assert_eq!(
        arr.iter().len(),
        5,
        "Should iterate over the right number of ZST instances."
    );

    let old_ptr = arr.ptr;
    let mut arr = arr.forget_init();
    arr.realloc(30);
    assert_eq!(
        arr.ptr,
        old_ptr.cast(),
        "Pointer shouldn't change when reallocated for a ZST."
    );
    assert_eq!(arr.size(), 30);
}

#[test]
fn test_realloc() {
    let mut arr = Array::from(0_usize..5).forget_init();
    assert_eq!(arr.size(), 5);

    let old_ptr = arr.ptr;
    arr.realloc(5);
    assert_eq!(
        arr.ptr, old_ptr,
        "When reallocating to the same size, the pointer shouldn't change."
    );

    arr.realloc(0);
    assert_eq!(arr.size(), 0, "Shrinking to zero should leave an empty Array.");

    arr.realloc(10);
    for (i, slot) in arr.iter_mut().enumerate() {
        *slot = MaybeUninit::new(i);
    }

    arr.realloc(15);
    for i in 0..10 {
        // SAFETY: The first 10 values were initialized before growing.
        assert_eq!(
            unsafe { arr[i].assume_init() }, i,
            "When growing, all elements should remain in the Array."
        );
    }

    assert_panics!({
        let mut arr = Array::<u64>::new_uninit(5);
        arr.realloc(isize::MAX as usize);
    });
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let arr = Array::from(iter::repeat_with(|| counter.clone()).take(10));

    drop(arr);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");

    let counter = CountedDrop::new(0);
    let arr = Array::from(iter::repeat_with(|| counter.clone()).take(10)).forget_init();

    drop(arr);

    assert_eq!(counter.take(), 0, "Uninitialized elements should never be dropped.");
}

#[test]
fn test_equality_and_hash() {
    let arr = Array::from(0_usize..5);

    assert_eq!(
        arr,
        Array::from([0, 1, 2, 3, 4].into_iter()),
        "Different construction methods should produce equal results."
    );
    assert_ne!(Array::from([0, 1, 2, 5, 4].into_iter()), Array::from(0..5));

    let borrowed: &[usize] = arr.borrow();
    assert_eq!(borrowed, &[0, 1, 2, 3, 4], "Borrow equality should be upheld.");
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one(Array::from(0_usize..5)),
        "Equal arrays should produce the same hash."
    );
}

#[test]
fn test_iterators() {
    let mut arr = Array::from(0_usize..5);
    let collected = Array::from(arr.iter().cloned());
    assert_eq!(arr, collected, "Collected iter should be equal.");

    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(
        *arr,
        [0_usize, 2, 4, 6, 8],
        "Array mutated by iterator should equal this slice."
    );

    let mut iter = arr.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.as_slice(), &[2, 4, 6]);
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new(0);
    let arr = Array::from(iter::repeat_with(|| counter.clone()).take(10));

    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(
        counter.take(),
        10,
        "Dropping a partially consumed iterator should drop all remaining elements."
    );
}
