use core::fmt;
use core::ptr::NonNull;

use super::{
    error::{InvalidPosition, rejected},
    list::ForwardList,
    node::{Link, Node},
};

/// Where a cursor points: the head, a node, or one past the last node.
pub(crate) enum Position<T> {
    BeforeBegin,
    Node(NonNull<Node<T>>),
    End,
}

impl<T> Position<T> {
    /// The position of `next`, or the end if there is none.
    pub(crate) fn after(next: Option<NonNull<Node<T>>>) -> Self {
        match next {
            Some(node) => Position::Node(node),
            None => Position::End,
        }
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

/// The identity of a position: the address of the link it refers to.
///
/// Every end position has the same identity.
fn address<T>(list: &ForwardList<T>, position: Position<T>) -> Option<NonNull<()>> {
    match position {
        Position::BeforeBegin => Some(NonNull::from(list.head()).cast()),
        Position::Node(node) => Some(node.cast()),
        Position::End => None,
    }
}

/// A read-only position in a [`ForwardList`].
///
/// A cursor is either before the first element, at an element, or at the
/// end. Only a cursor at an element has a [`current`](Self::current) value.
/// Cursors are cheap to copy and compare equal when they refer to the same
/// position, regardless of which list method produced them.
pub struct Cursor<'a, T> {
    list: &'a ForwardList<T>,
    position: Position<T>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a ForwardList<T>, position: Position<T>) -> Self {
        Cursor { list, position }
    }

    /// Returns the element at the cursor.
    ///
    /// Returns `None` before the first element and at the end.
    pub fn current(&self) -> Option<&'a T> {
        match self.position {
            // SAFETY: the node is owned by `list`, which is borrowed for `'a`.
            Position::Node(node) => Some(unsafe { node.as_ref().value() }),
            Position::BeforeBegin | Position::End => None,
        }
    }

    /// Returns the element right after the cursor, if any.
    pub fn peek_next(&self) -> Option<&'a T> {
        let next = self.anchor()?.next()?;
        // SAFETY: `next` is owned by `list`, which is borrowed for `'a`.
        Some(unsafe { next.as_ref().value() })
    }

    /// Moves the cursor to the next position. At the end this is a no-op.
    pub fn move_next(&mut self) {
        self.position = match self.anchor() {
            Some(link) => Position::after(link.next()),
            None => Position::End,
        };
    }

    /// Returns `true` if the cursor is before the first element.
    pub fn is_before_begin(&self) -> bool {
        matches!(self.position, Position::BeforeBegin)
    }

    /// Returns `true` if the cursor is one past the last element.
    pub fn is_end(&self) -> bool {
        matches!(self.position, Position::End)
    }

    fn anchor(&self) -> Option<&'a Link<T>> {
        match self.position {
            Position::BeforeBegin => Some(self.list.head()),
            // SAFETY: the node is owned by `list`, which is borrowed for `'a`.
            Position::Node(node) => Some(unsafe { node.as_ref().link() }),
            Position::End => None,
        }
    }

    fn address(&self) -> Option<NonNull<()>> {
        address(self.list, self.position)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_position(f, "Cursor", self.position, self.current())
    }
}

/// A position in a [`ForwardList`] that can edit the list after itself.
///
/// [`insert_after`](Self::insert_after) and [`erase_after`](Self::erase_after)
/// act on the link right after the cursor. A cursor created with
/// [`ForwardList::before_begin_mut`] edits the front of the list; a cursor at
/// the end has nothing after it and rejects both operations with
/// [`InvalidPosition::End`].
///
/// The cursor itself is never removed by its own edits, so it stays valid
/// across any number of them.
pub struct CursorMut<'a, T> {
    list: &'a mut ForwardList<T>,
    position: Position<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut ForwardList<T>, position: Position<T>) -> Self {
        CursorMut { list, position }
    }

    /// Returns the element at the cursor.
    ///
    /// Returns `None` before the first element and at the end.
    pub fn current(&self) -> Option<&T> {
        match self.position {
            // SAFETY: the node is owned by `list`, which this cursor borrows.
            Position::Node(node) => Some(unsafe { node.as_ref().value() }),
            Position::BeforeBegin | Position::End => None,
        }
    }

    /// Returns the element at the cursor mutably.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        match self.position {
            // SAFETY: the node is owned by `list`, which is mutably borrowed
            // by this cursor, and `&mut self` makes the reference unique.
            Position::Node(node) => Some(unsafe { (*node.as_ptr()).value_mut() }),
            Position::BeforeBegin | Position::End => None,
        }
    }

    /// Returns the element right after the cursor, if any.
    pub fn peek_next(&self) -> Option<&T> {
        self.as_cursor().peek_next()
    }

    /// Returns the element right after the cursor mutably, if any.
    pub fn peek_next_mut(&mut self) -> Option<&mut T> {
        let next = self.anchor_mut()?.next()?;
        // SAFETY: `next` is owned by `list`, which is mutably borrowed by
        // this cursor, and `&mut self` makes the reference unique.
        Some(unsafe { (*next.as_ptr()).value_mut() })
    }

    /// Moves the cursor to the next position. At the end this is a no-op.
    pub fn move_next(&mut self) {
        let mut cursor = self.as_cursor();
        cursor.move_next();
        self.position = cursor.position;
    }

    /// Returns `true` if the cursor is before the first element.
    pub fn is_before_begin(&self) -> bool {
        matches!(self.position, Position::BeforeBegin)
    }

    /// Returns `true` if the cursor is one past the last element.
    pub fn is_end(&self) -> bool {
        matches!(self.position, Position::End)
    }

    /// Returns a read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.position)
    }

    /// Inserts `value` right after the cursor and returns a reference to it. `O(1)`.
    ///
    /// The cursor does not move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPosition::End`] if the cursor is at the end; the list
    /// is left unchanged.
    pub fn insert_after(&mut self, value: T) -> Result<&mut T, InvalidPosition> {
        let node = self.link_after(value)?;
        // SAFETY: `node` was just linked into `list`, which is mutably
        // borrowed by this cursor.
        Ok(unsafe { (*node.as_ptr()).value_mut() })
    }

    /// Inserts `value` right after the cursor and moves the cursor onto it. `O(1)`.
    ///
    /// Repeated calls from [`ForwardList::before_begin_mut`] build the front
    /// of the list in call order.
    ///
    /// # Errors
    ///
    /// Same as [`insert_after`](Self::insert_after).
    pub fn insert_after_and_move(&mut self, value: T) -> Result<(), InvalidPosition> {
        let node = self.link_after(value)?;
        self.position = Position::Node(node);
        Ok(())
    }

    /// Removes the element right after the cursor and returns it. `O(1)`.
    ///
    /// The cursor does not move; [`peek_next`](Self::peek_next) afterwards
    /// sees the element that followed the removed one.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPosition::End`] if the cursor is at the end, or
    /// [`InvalidPosition::NoSuccessor`] if nothing follows the cursor. The
    /// list is left unchanged.
    pub fn erase_after(&mut self) -> Result<T, InvalidPosition> {
        let anchor = self
            .anchor_mut()
            .ok_or_else(|| rejected("erase_after", InvalidPosition::End))?;
        let value = anchor
            .unlink_after()
            .ok_or_else(|| rejected("erase_after", InvalidPosition::NoSuccessor))?;
        self.list.dec_len();
        Ok(value)
    }

    fn link_after(&mut self, value: T) -> Result<NonNull<Node<T>>, InvalidPosition> {
        let anchor = self
            .anchor_mut()
            .ok_or_else(|| rejected("insert_after", InvalidPosition::End))?;
        let node = anchor.link_after(value);
        self.list.inc_len();
        Ok(node)
    }

    fn anchor_mut(&mut self) -> Option<&mut Link<T>> {
        match self.position {
            Position::BeforeBegin => Some(self.list.head_mut()),
            // SAFETY: the node is owned by `list`, which is mutably borrowed
            // by this cursor.
            Position::Node(node) => Some(unsafe { (*node.as_ptr()).link_mut() }),
            Position::End => None,
        }
    }

    fn address(&self) -> Option<NonNull<()>> {
        address(self.list, self.position)
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_position(f, "CursorMut", self.position, self.current())
    }
}

fn debug_position<T: fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    position: Position<T>,
    current: Option<&T>,
) -> fmt::Result {
    match (position, current) {
        (_, Some(value)) => f.debug_tuple(name).field(value).finish(),
        (Position::BeforeBegin, None) => write!(f, "{name}(BeforeBegin)"),
        _ => write!(f, "{name}(End)"),
    }
}

impl<'b, T> PartialEq<Cursor<'b, T>> for Cursor<'_, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.address() == other.address()
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<'b, T> PartialEq<CursorMut<'b, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.address() == other.address()
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.address() == other.address()
    }
}

impl<'b, T> PartialEq<CursorMut<'b, T>> for Cursor<'_, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.address() == other.address()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}
unsafe impl<T: Sync> Sync for Cursor<'_, T> {}
unsafe impl<T: Send> Send for CursorMut<'_, T> {}
unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}
