//! A singly linked list with value semantics and `O(1)` edits after any position.
#![no_std]

extern crate alloc;

pub mod linked_list;

pub use linked_list::forward::{
    cursor::{Cursor, CursorMut},
    error::InvalidPosition,
    iter::{IntoIter, Iter, IterMut},
    list::ForwardList,
    swap,
};
