use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};

use super::Array;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let end = self.size;
        IntoIter {
            buf: self.forget_init(),
            start: 0,
            end,
        }
    }
}

/// An owned type for owned iteration over an [`Array`] or [`Vector`](super::super::Vector). See
/// [`Array::into_iter`] and [`Vector::into_iter`](super::super::Vector::into_iter).
pub struct IntoIter<T> {
    // Values in start..end are initialized, all others have been moved out already.
    pub(crate) buf: Array<MaybeUninit<T>>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the remaining items of this iterator as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: All values in start..end are initialized.
        unsafe { mem::transmute::<&[MaybeUninit<T>], &[T]>(&self.buf[self.start..self.end]) }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.buf[self.start..self.end] {
            // SAFETY: All values in start..end are initialized and haven't been yielded.
            unsafe { slot.assume_init_drop(); }
        }
        // Dropping buf deallocates without touching the (now uninitialized) values.
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start < end, so the value is initialized. Incrementing start afterwards
            // marks it as moved out.
            let value = unsafe { self.buf[self.start].assume_init_read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: end has just been decremented and is still >= start, so the value is
            // initialized and now considered moved out.
            let value = unsafe { self.buf[self.end].assume_init_read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

// Borrowed iteration uses the iter and iter_mut definitions provided by Deref<Target = [T]>.
