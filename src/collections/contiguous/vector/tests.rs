#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::contiguous::Array;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::{EmptyCollection, IndexOutOfBounds, PositionError, StalePosition};
use crate::util::panic::assert_panics;

#[test]
fn test_push_back_growth() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 0, "A new Vector shouldn't allocate.");

    vec.push_back(0_usize);
    assert_eq!(vec.cap(), 5, "The first growth should use the minimum capacity.");

    for i in 1..5 {
        vec.push_back(i);
    }
    assert_eq!(vec.cap(), 5, "Growth should only happen once the Vector is full.");

    vec.push_back(5);
    assert_eq!(vec.cap(), 10, "A full Vector should double its capacity.");

    for i in 6..100 {
        vec.push_back(i);
    }
    assert_eq!(vec.len(), 100);
    assert_eq!(vec.cap(), 160);
    assert!(
        vec.iter().copied().eq(0..100),
        "Pushed elements should be kept in insertion order."
    );
}

#[test]
fn test_insert() {
    let mut vec = Vector::from([0, 1, 2, 3]);

    for (index, value) in [(0, 10), (2, 20), (6, 30), (3, 40)] {
        let len = vec.len();
        let pos = vec.insert(index, value);
        assert_eq!(pos.index(), index);
        assert_eq!(vec[index], value, "The inserted value should be found at its index.");
        assert_eq!(vec.get_at(pos), Ok(&value));
        assert_eq!(vec.len(), len + 1, "Insertion should increase len by exactly one.");
    }

    assert_eq!(&*vec, &[10, 0, 20, 40, 1, 2, 3, 30]);

    assert_eq!(
        vec.try_insert(9, 50),
        Err(IndexOutOfBounds { index: 9, len: 8 }),
        "Insertion may not skip past the end."
    );
    assert_panics!({
        let mut vec = Vector::from([1, 2]);
        vec.insert(3, 0);
    });
}

#[test]
fn test_insert_into_full_vector() {
    let mut vec = Vector::with_cap(3);
    vec.extend([1, 2, 3]);
    let epoch = vec.epoch();

    let pos = vec.insert(1, 100);
    assert_eq!(vec.cap(), 6, "Inserting into a full Vector should grow it first.");
    assert_ne!(vec.epoch(), epoch);
    assert_eq!(pos.epoch(), vec.epoch(), "The returned Position should belong to the new epoch.");
    assert_eq!(&*vec, &[1, 100, 2, 3]);
}

#[test]
fn test_erase() {
    let mut vec: Vector<usize> = (0..10).collect();

    for index in [2, 3, 4] {
        let next = vec.erase(index).expect("index should be in bounds");
        assert_eq!(next.index(), index);
    }

    assert_eq!(
        &*vec,
        &[0, 1, 3, 5, 7, 8, 9],
        "Erasing indices 2, 3, 4 in sequence should preserve the order of the rest."
    );

    let next = vec.erase(6).expect("index should be in bounds");
    assert_eq!(next, vec.end(), "Erasing the last element should return the end.");

    assert_eq!(vec.erase(6), Err(IndexOutOfBounds { index: 6, len: 6 }));

    let mut empty: Vector<u8> = Vector::new();
    assert!(empty.erase(0).is_err(), "Erasing from an empty Vector should fail.");
}

#[test]
fn test_remove_and_replace() {
    let mut vec = Vector::from(['a', 'b', 'c']);
    assert_eq!(vec.remove(1), 'b');
    assert_eq!(vec.try_remove(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    assert_eq!(vec.replace(1, 'z'), 'c');
    assert_eq!(&*vec, &['a', 'z']);

    assert_panics!({
        let mut vec = Vector::from([1]);
        vec.remove(1);
    });
}

#[test]
fn test_checked_access() {
    let mut vec = Vector::from([1, 2, 3]);
    assert_eq!(vec.at(2), Ok(&3));
    assert_eq!(vec.at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));

    *vec.at_mut(0).expect("index should be in bounds") = 10;
    assert_eq!(vec[0], 10);
    assert!(vec.at_mut(5).is_err());

    assert_panics!({
        let vec = Vector::from([1, 2, 3]);
        let _ = vec[3];
    });
}

#[test]
fn test_positions() {
    let mut vec = Vector::from([1, 2, 3]);
    assert_eq!(vec.end().distance(vec.begin()), 3);
    assert_eq!(vec.begin().distance(vec.end()), -3);
    assert_eq!(vec.begin().prev(), None);
    assert_eq!(vec.end().prev(), Some(vec.position(2).expect("index should be in bounds")));
    assert_eq!(vec.begin().offset(2).offset(-1), vec.begin().next());
    assert!(vec.begin() < vec.end());
    assert!(vec.position(4).is_err());

    assert_eq!(
        vec.get_at(vec.end()),
        Err(PositionError::IndexOutOfBounds(IndexOutOfBounds { index: 3, len: 3 })),
        "The end Position doesn't refer to an element."
    );

    let mut pos = vec.begin();
    while pos != vec.end() {
        *vec.get_at_mut(pos).expect("pos should be valid") *= 10;
        pos = pos.next();
    }
    assert_eq!(&*vec, &[10, 20, 30]);

    let back = vec.end().prev().expect("vec isn't empty");
    let mut collected = Vector::new();
    let mut pos = Some(back);
    while let Some(curr) = pos {
        collected.push_back(*vec.get_at(curr).expect("pos should be valid"));
        pos = curr.prev();
    }
    assert_eq!(&*collected, &[30, 20, 10], "Positions should support walking backwards.");
}

#[test]
fn test_stale_positions() {
    let mut vec = Vector::with_cap(2);
    vec.push_back(1);
    let first = vec.begin();

    // No reallocation, the Position stays valid.
    vec.push_back(2);
    assert_eq!(vec.get_at(first), Ok(&1));

    // Full, so this reallocates.
    vec.push_back(3);
    let err = vec.get_at(first).expect_err("the Position should be stale");
    assert!(err.is_stale_position());
    assert_eq!(
        err,
        PositionError::StalePosition(StalePosition { epoch: 0, current: 1 })
    );
    assert!(vec.erase_at(first).is_err());
    assert!(vec.insert_at(first, 0).is_err());

    let epoch = vec.epoch();
    vec.reserve(2);
    assert_eq!(vec.epoch(), epoch, "Reserving less than the capacity shouldn't reallocate.");
    vec.reserve(20);
    assert_ne!(vec.epoch(), epoch, "Reserving more than the capacity should reallocate.");
    assert_eq!(&*vec, &[1, 2, 3], "Reallocation should preserve elements in order.");
}

#[test]
fn test_positional_insert_and_erase() {
    let mut vec: Vector<i32> = (0..10).collect();

    for _ in 0..3 {
        let pos = vec.position(2).expect("index should be in bounds");
        vec.erase_at(pos).expect("pos should be valid");
    }
    assert_eq!(&*vec, &[0, 1, 5, 6, 7, 8, 9]);

    vec.insert_at(vec.begin(), 10).expect("begin should be valid");
    let mid = vec.position(vec.len() / 2).expect("index should be in bounds");
    vec.insert_at(mid, 20).expect("mid should be valid");
    vec.insert_at(vec.end(), 30).expect("end should be valid");
    assert_eq!(&*vec, &[10, 0, 1, 5, 20, 6, 7, 8, 9, 30]);

    assert!(
        vec.erase_at(vec.end()).is_err(),
        "The end Position can't be erased."
    );
}

#[test]
fn test_pop_back() {
    let mut vec = Vector::from_iter(0..3);
    assert_eq!(vec.pop_back(), Ok(2));
    assert_eq!(vec.pop_back(), Ok(1));
    assert_eq!(vec.pop_back(), Ok(0));
    assert_eq!(vec.pop_back(), Err(EmptyCollection));
}

#[test]
fn test_clear_and_shrink() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(6).collect();
    vec.reserve(12);

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 6);
    assert_eq!(counter.take(), 0, "Shrinking shouldn't drop live elements.");

    vec.clear();
    assert_eq!(counter.take(), 6, "Clearing should drop every element.");
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.cap(), 0, "Clearing should release the storage.");

    vec.push_back(counter.clone());
    assert_eq!(vec.len(), 1, "A cleared Vector should be reusable.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut vec = Vector::with_cap(10);
    for _ in 0..7 {
        vec.push_back(counter.clone());
    }

    drop(vec.remove(3));
    assert_eq!(counter.take(), 1);

    drop(vec);
    assert_eq!(counter.take(), 6, "Only initialized elements should be dropped.");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push_back(ZeroSizedType);
    }
    vec.insert(4, ZeroSizedType);
    assert_eq!(vec.len(), 11);
    assert_eq!(vec.remove(0), ZeroSizedType);
    assert_eq!(vec.iter().count(), 10);
}

#[test]
fn test_clone_and_equality() {
    let mut vec = Vector::with_cap(8);
    vec.extend(["a".to_owned(), "b".to_owned()]);

    let cloned = vec.clone();
    assert_eq!(cloned, vec);
    assert_eq!(cloned.cap(), 8, "Clones should keep the capacity of the original.");

    vec.push_back("c".to_owned());
    assert_ne!(cloned, vec, "A clone should be independent from the original.");
}

#[test]
fn test_conversions() {
    let vec = Vector::from([1, 2, 3]);
    let arr = Array::from(vec);
    assert_eq!(arr.size(), 3);
    assert_eq!(&*arr, &[1, 2, 3]);

    let vec = Vector::from(arr);
    assert_eq!(vec.cap(), 3);

    let repeated: Vector<u16> = Vector::repeat_default(4);
    assert_eq!(&*repeated, &[0, 0, 0, 0]);

    let mut iter = vec.into_iter();
    assert_eq!(iter.next_back(), Some(3));
    assert!(iter.eq([1, 2]));
}

#[test]
fn test_borrowed_iteration() {
    let mut vec = Vector::from([1, 2, 3]);
    for value in &mut vec {
        *value += 1;
    }

    let mut sum = 0;
    for value in &vec {
        sum += value;
    }
    assert_eq!(sum, 9);
    assert!(vec.iter().rev().copied().eq([4, 3, 2]));
}

#[test]
fn test_formatting() {
    let vec: Vector<_> = (0..10).collect();
    assert_eq!(vec.to_string(), "0, 1, 2, 3, 4, 5, 6, 7, 8, 9, END");

    let debug = format!("{:?}", Vector::from([1, 2]));
    assert_eq!(debug, "Vector { contents: [1, 2], len: 2, cap: 2, epoch: 0 }");
}
