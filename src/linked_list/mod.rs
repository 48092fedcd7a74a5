//! Linked lists.
//!
//! [`forward`] holds a singly linked list that owns its nodes. Every edit
//! happens right after a known position, and the position before the first
//! element is a real anchor, so the front of the list is edited the same way
//! as any other spot.
//!
//! # Examples
//!
//! ```
//! use mola_forward_list::ForwardList;
//!
//! let mut list = ForwardList::from([1, 2, 3]);
//! list.push_front(0);
//!
//! let mut cursor = list.begin_mut();
//! *cursor.insert_after(10).unwrap() += 1;
//! assert_eq!(cursor.peek_next(), Some(&11));
//!
//! let mut front = list.before_begin_mut();
//! assert_eq!(front.erase_after(), Ok(0));
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![11, 1, 2, 3]);
//! assert!(list.end_mut().insert_after(4).is_err());
//! ```
pub mod forward;
