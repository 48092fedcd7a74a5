use core::marker::PhantomData;
use core::ptr::NonNull;

use alloc::boxed::Box;

use super::{
    cursor::{Cursor, CursorMut, Position},
    iter::{Iter, IterMut},
    node::{Link, Node},
};

/// A singly linked list that owns its elements.
///
/// The list keeps a value-less head link in front of the first element.
/// [`before_begin`](Self::before_begin) refers to that head, so inserting
/// or erasing the first element goes through the same cursor operations as
/// any other position.
pub struct ForwardList<T> {
    head: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> ForwardList<T> {
    /// Creates a new, empty list. Does not allocate.
    pub const fn new() -> Self {
        ForwardList {
            head: Link::new(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list. `O(1)`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements. `O(1)`.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element, or `None` if the list is empty.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: nodes reachable from `head` are owned by `self`.
        self.head.next().map(|node| unsafe { node.as_ref().value() })
    }

    /// Returns a mutable reference to the first element, or `None` if the list is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: nodes reachable from `head` are owned by `self`, which is
        // mutably borrowed.
        self.head
            .next()
            .map(|node| unsafe { (*node.as_ptr()).value_mut() })
    }

    /// Prepends `value` to the list. `O(1)`.
    pub fn push_front(&mut self, value: T) {
        self.head.link_after(value);
        self.len += 1;
    }

    /// Removes the first element and returns it, or `None` if the list is empty. `O(1)`.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.unlink_after().inspect(|_| self.len -= 1)
    }

    /// Removes every element. `O(n)`.
    pub fn clear(&mut self) {
        #[cfg(feature = "log")]
        {
            if self.len > 0 {
                log::trace!("releasing {} forward list nodes", self.len);
            }
        }
        while self.pop_front().is_some() {}
    }

    /// Exchanges the contents of two lists. `O(1)`, never allocates.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.head, &mut other.head);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// Returns `true` if the list contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Returns an iterator over shared references, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.next(), self.len)
    }

    /// Returns an iterator over mutable references, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.next(), self.len)
    }

    /// Returns a read-only cursor at the position before the first element.
    ///
    /// The cursor has no current element; it is the anchor for
    /// inserting or erasing the first element.
    pub fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::BeforeBegin)
    }

    /// Returns a read-only cursor at the first element, or at the end if the list is empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.first_position())
    }

    /// Returns a read-only cursor one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::End)
    }

    /// Returns a mutable cursor at the position before the first element.
    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, Position::BeforeBegin)
    }

    /// Returns a mutable cursor at the first element, or at the end if the list is empty.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let position = self.first_position();
        CursorMut::new(self, position)
    }

    /// Returns a mutable cursor one past the last element.
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, Position::End)
    }

    fn first_position(&self) -> Position<T> {
        Position::after(self.head.next())
    }

    pub(crate) fn head(&self) -> &Link<T> {
        &self.head
    }

    pub(crate) fn head_mut(&mut self) -> &mut Link<T> {
        &mut self.head
    }

    pub(crate) fn inc_len(&mut self) {
        self.len += 1;
    }

    pub(crate) fn dec_len(&mut self) {
        self.len -= 1;
    }

    /// Appends every value of `values` after the current last element, in order.
    ///
    /// Walks to the tail once, then links each new node after the previous one.
    pub(crate) fn append_values<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut tail = NonNull::from(&mut self.head);
        // SAFETY: `tail` always points at the head or at a node owned by
        // `self`; nothing else touches the chain while it is held.
        unsafe {
            while let Some(next) = tail.as_ref().next() {
                tail = NonNull::from((*next.as_ptr()).link_mut());
            }
            for value in values {
                let node = tail.as_mut().link_after(value);
                tail = NonNull::from((*node.as_ptr()).link_mut());
                self.len += 1;
            }
        }
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    /// Builds the list by pushing the array's elements at the front in
    /// reverse, so iteration order matches the array.
    fn from(values: [T; N]) -> Self {
        let mut list = ForwardList::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ForwardList::new();
        list.append_values(iter);
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    /// Appends the values after the current last element.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_values(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.append_values(iter.into_iter().copied());
    }
}

unsafe impl<T: Send> Send for ForwardList<T> {}
unsafe impl<T: Sync> Sync for ForwardList<T> {}
