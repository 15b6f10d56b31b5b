use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use super::Position;
use crate::collections::contiguous::Array;
use crate::util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds, PositionError, StalePosition};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 5;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// Positions within a Vector are represented by [`Position`], an index stamped with the Vector's
/// epoch. The epoch advances whenever the Vector reallocates, which invalidates every Position
/// created beforehand.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` / `erase` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push_back` will take
/// `O(n)`. Capacity doubles each time this happens, so the cost is amortized to `O(1)`.
///
/// \** If the Vector already has the requested capacity, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
    pub(crate) epoch: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            arr: Array::new(),
            len: 0,
            epoch: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
            epoch: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is guaranteed to be
    /// exactly the value provided to any of the various capacity manipulation functions.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns the current epoch of the Vector, which is advanced by every reallocation.
    pub const fn epoch(&self) -> usize {
        self.epoch
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if it is out of bounds.
    ///
    /// For unchecked access, index the Vector directly (which panics when out of bounds) or use
    /// [`slice::get_unchecked`].
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 2, 3]);
    /// assert_eq!(vec.at(1), Ok(&2));
    /// assert!(vec.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.get(index).ok_or(IndexOutOfBounds { index, len: self.len })
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if it is out of
    /// bounds.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a Position referring to the first element of the Vector. For an empty Vector, this
    /// is equal to [`end`](Vector::end).
    pub const fn begin(&self) -> Position {
        Position::new(0, self.epoch)
    }

    /// Returns a Position referring to the slot directly after the last element.
    pub const fn end(&self) -> Position {
        Position::new(self.len, self.epoch)
    }

    /// Returns a Position for the provided `index`, which may be anywhere in `0..=len`.
    pub const fn position(&self, index: usize) -> Result<Position, IndexOutOfBounds> {
        if index <= self.len {
            Ok(Position::new(index, self.epoch))
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// # Errors
    /// Returns an [`Err`] if `pos` is stale or doesn't refer to an element.
    pub fn get_at(&self, pos: Position) -> Result<&T, PositionError> {
        let index = self.check_position(pos)?;
        Ok(self.at(index)?)
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// # Errors
    /// Returns an [`Err`] if `pos` is stale or doesn't refer to an element.
    pub fn get_at_mut(&mut self, pos: Position) -> Result<&mut T, PositionError> {
        let index = self.check_position(pos)?;
        Ok(self.at_mut(index)?)
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    /// When full, the capacity is doubled, starting from a minimum of 5.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push_back(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 10);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap) to
    /// do so. Using this method on a Vector without enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the pointer write being in bounds of the object.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Vector has no elements.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1]);
    /// assert_eq!(vec.pop_back(), Ok(1));
    /// assert_eq!(vec.pop_back(), Ok(0));
    /// assert!(vec.pop_back().is_err());
    /// ```
    pub fn pop_back(&mut self) -> Result<T, EmptyCollection> {
        if self.len == 0 {
            return Err(EmptyCollection);
        }

        // Decrement len before reading, which marks the slot as uninitialized.
        self.len -= 1;

        // SAFETY: The value at the old last index is initialized and won't be read again.
        Ok(unsafe { self.arr[self.len].assume_init_read() })
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    /// Returns the Position of the inserted element.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Position {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, returning an [`Err`] rather than panicking
    /// if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<Position, IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        if self.len == self.cap() {
            self.grow();
        }

        // Shift every value from index onward one slot towards the back, the last replacement
        // swaps the uninitialized slot at len out.
        let mut prev = MaybeUninit::new(value);
        for i in index..=self.len {
            prev = mem::replace(&mut self.arr[i], prev);
        }

        self.len += 1;
        Ok(Position::new(index, self.epoch))
    }

    /// Inserts the provided value before the element at `pos`, which may also be
    /// [`end`](Vector::end). Returns the Position of the inserted element, carrying the new epoch
    /// if the insertion reallocated.
    ///
    /// # Errors
    /// Returns an [`Err`] if `pos` is stale or lies past the end of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// let pos = vec.insert_at(vec.begin(), 0).unwrap();
    /// assert_eq!(vec.get_at(pos), Ok(&0));
    /// vec.insert_at(vec.end(), 3).unwrap();
    /// assert_eq!(&*vec, &[0, 1, 2, 3]);
    /// ```
    pub fn insert_at(&mut self, pos: Position, value: T) -> Result<Position, PositionError> {
        self.check_epoch(pos)?;
        Ok(self.try_insert(pos.index, value)?)
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at the provided index, returning an [`Err`] rather than
    /// panicking if it is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let mut next = MaybeUninit::uninit();
        // Iterate backwards to index.
        for i in (index..self.len).rev() {
            next = mem::replace(&mut self.arr[i], next);
        }

        self.len -= 1;
        // SAFETY: next contains the value which was previously located at index, which we've
        // already checked to be less than len and therefore initialized.
        Ok(unsafe { next.assume_init() })
    }

    /// Drops the element at `index` and shifts the following elements towards the front. Returns
    /// the Position of the element that followed the erased one.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`, including for every index of an empty
    /// Vector.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2, 3]);
    /// let next = vec.erase(1).unwrap();
    /// assert_eq!(vec.get_at(next), Ok(&2));
    /// assert!(vec.erase(3).is_err());
    /// ```
    pub fn erase(&mut self, index: usize) -> Result<Position, IndexOutOfBounds> {
        drop(self.try_remove(index)?);
        Ok(Position::new(index, self.epoch))
    }

    /// Drops the element at `pos`, see [`erase`](Vector::erase).
    ///
    /// # Errors
    /// Returns an [`Err`] if `pos` is stale or doesn't refer to an element.
    pub fn erase_at(&mut self, pos: Position) -> Result<Position, PositionError> {
        let index = self.check_position(pos)?;
        Ok(self.erase(index)?)
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        mem::replace(self.at_mut(index).throw(), new_value)
    }

    /// Ensures that the Vector has a capacity of at least `new_cap`, reallocating to exactly
    /// `new_cap` if it is currently smaller. Existing elements keep their order.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// vec.reserve(8);
    /// assert_eq!(vec.cap(), 8);
    /// vec.reserve(4);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap > self.cap() {
            self.realloc_with_cap(new_cap);
        }
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        self.realloc_with_cap(self.len);
    }

    /// Drops all elements and releases the Vector's storage, leaving it with capacity 0.
    pub fn clear(&mut self) {
        let len = self.len;
        // Set len first, so that a panicking drop can't cause a double drop.
        self.len = 0;

        // SAFETY: The first len values were initialized and are no longer reachable.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast::<T>(),
                len,
            ));
        }

        self.realloc_with_cap(0);
    }

    /// Reallocates the internal Array with the provided capacity, advancing the epoch if the
    /// capacity changes.
    ///
    /// The caller is responsible for dropping any values that don't fit in the new capacity.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        if new_cap == self.cap() { return; }

        debug_assert!(new_cap >= self.len, "reallocation would discard initialized values");

        self.arr.realloc(new_cap);
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Grows the internal Array to allow for the insertion of additional elements. After calling
    /// this, the Vector can take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let doubled = self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw();
        self.realloc_with_cap(cmp::max(doubled, MIN_CAP));
    }

    /// Checks that the provided index refers to an element of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    /// Checks that the provided Position was created during the current epoch.
    pub(crate) const fn check_epoch(&self, pos: Position) -> Result<(), StalePosition> {
        if pos.epoch == self.epoch {
            Ok(())
        } else {
            Err(StalePosition { epoch: pos.epoch, current: self.epoch })
        }
    }

    /// Checks that the provided Position is current and refers to an element, returning its index.
    pub(crate) fn check_position(&self, pos: Position) -> Result<usize, PositionError> {
        self.check_epoch(pos)?;
        self.check_index(pos.index)?;
        Ok(pos.index)
    }
}

impl<T: Default> Vector<T> {
    /// Creates a Vector containing `count` default values, with capacity equal to `count`.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let vec: Vector<u32> = Vector::repeat_default(3);
    /// assert_eq!(&*vec, &[0, 0, 0]);
    /// ```
    pub fn repeat_default(count: usize) -> Vector<T> {
        Vector::from(Array::<T>::repeat_default(count))
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push_back(item);
        }

        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        Vector::from(Array::from(value.into_iter()))
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and safe to drop.
        unsafe { ptr::drop_in_place(self.deref_mut()); }

        // Implicitly drop self.arr, containing only MaybeUninit values with a no-op drop. Doing so
        // also deallocates the owned memory.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: See Deref. The borrow checker enforces that self isn't accessed elsewhere while
        // the slice is alive.
        unsafe {
            slice::from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            // SAFETY: vec has the same capacity as self, which holds at least len values.
            unsafe { vec.push_unchecked(value.clone()); }
        }

        vec
    }
}

impl<T> From<Vector<T>> for Array<T> {
    fn from(mut value: Vector<T>) -> Self {
        // Dealloc all uninit values > len.
        value.shrink_to_fit();

        let arr = mem::take(&mut value.arr);
        value.len = 0;

        // SAFETY: After shrinking, every value in arr is initialized. value no longer owns them.
        unsafe { arr.assume_init() }
    }
}

impl<T> From<Array<T>> for Vector<T> {
    fn from(value: Array<T>) -> Self {
        let len = value.size();
        Vector {
            arr: value.forget_init(),
            len,
            epoch: 0,
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("epoch", &self.epoch)
            .finish()
    }
}

impl<T: Display> Display for Vector<T> {
    /// Formats the Vector as each element followed by `", "`, terminated by `END`.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// assert_eq!(Vector::from([1, 2, 3]).to_string(), "1, 2, 3, END");
    /// assert_eq!(Vector::<u8>::new().to_string(), "END");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value}, ")?;
        }
        write!(f, "END")
    }
}
