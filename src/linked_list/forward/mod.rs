//! # Forward List
//!
//! A singly linked list that owns its elements, with cursors for `O(1)`
//! insertion and removal right after any position.
//!
//! ## Core Components
//!
//! - [`list::ForwardList`]: the list. Owns a value-less head link and every node after it.
//! - [`cursor::Cursor`] and [`cursor::CursorMut`]: read-only and editing positions.
//!   Both can sit before the first element, at an element, or at the end, and
//!   compare equal to each other when they refer to the same position.
//! - [`iter`]: borrowing and owning iterators.
//! - [`error::InvalidPosition`]: returned when an edit is anchored where
//!   nothing can follow.
//!
//! ## Positions
//!
//! ```text
//! head -> [a] -> [b] -> [c] -> (none)
//!  ^       ^                     ^
//!  |       begin                 end
//!  before_begin
//! ```
//!
//! Editing cursors borrow the list mutably, so no other position can be
//! observed while the chain changes. Positions never dangle.

pub mod cursor;
pub mod error;
pub mod iter;
pub mod list;
mod node;
mod ops;

pub use ops::swap;

#[cfg(test)]
mod tests;

/// Creates a [`ForwardList`](list::ForwardList) holding the given elements in order.
///
/// ```
/// use mola_forward_list::forward_list;
///
/// let list = forward_list![1, 2, 3];
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// let empty: mola_forward_list::ForwardList<u8> = forward_list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! forward_list {
    () => {
        $crate::linked_list::forward::list::ForwardList::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::linked_list::forward::list::ForwardList::from([$($value),+])
    };
}
