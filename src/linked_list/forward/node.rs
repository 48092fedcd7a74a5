use core::ptr::NonNull;

use alloc::boxed::Box;

/// The `next` slot shared by the list head and every node.
///
/// The head of a [`ForwardList`](super::list::ForwardList) is a bare `Link`
/// that never carries a value, so "after the head" and "after a node" are the
/// same operation on a `Link`.
pub(crate) struct Link<T> {
    next: Option<NonNull<Node<T>>>,
}

impl<T> Link<T> {
    pub(crate) const fn new() -> Self {
        Link { next: None }
    }

    /// Get the next node in the chain
    pub(crate) fn next(&self) -> Option<NonNull<Node<T>>> {
        self.next
    }

    /// Set the next node in the chain
    pub(crate) fn set_next(&mut self, next: Option<NonNull<Node<T>>>) {
        self.next = next;
    }

    /// Allocates a node holding `value` and splices it in right after this link.
    pub(crate) fn link_after(&mut self, value: T) -> NonNull<Node<T>> {
        let node = Node::alloc(value, self.next());
        self.set_next(Some(node));
        node
    }

    /// Unlinks and frees the node right after this link, returning its value.
    ///
    /// Returns `None` if there is no successor.
    pub(crate) fn unlink_after(&mut self) -> Option<T> {
        self.next().map(|next| {
            // SAFETY: every `next` pointer was produced by `Node::alloc` and is
            // reachable from exactly one link, this one.
            let (value, after) = unsafe { Node::free(next) };
            self.set_next(after);
            value
        })
    }
}

/// A heap node of a forward list.
pub(crate) struct Node<T> {
    link: Link<T>,
    value: T,
}

impl<T> Node<T> {
    fn alloc(value: T, next: Option<NonNull<Node<T>>>) -> NonNull<Self> {
        let node = Box::new(Node {
            link: Link { next },
            value,
        });
        NonNull::from(Box::leak(node))
    }

    /// Reclaims a node allocated by [`Link::link_after`].
    ///
    /// # Safety
    ///
    /// `node` must come from `Node::alloc`, must no longer be reachable from
    /// any link, and must not be used again.
    unsafe fn free(node: NonNull<Self>) -> (T, Option<NonNull<Self>>) {
        // SAFETY: guaranteed by the caller.
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        let Node { link, value } = *node;
        (value, link.next)
    }

    pub(crate) fn link(&self) -> &Link<T> {
        &self.link
    }

    pub(crate) fn link_mut(&mut self) -> &mut Link<T> {
        &mut self.link
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::{vec, vec::Vec};

    use super::Link;

    fn values(link: &Link<i32>) -> Vec<i32> {
        let mut values = vec![];
        let mut current = link.next();
        while let Some(node) = current {
            // SAFETY: the test owns every node linked from `link`.
            let node = unsafe { node.as_ref() };
            values.push(*node.value());
            current = node.link().next();
        }
        values
    }

    #[test]
    fn test_link_after_and_unlink_after() {
        let mut head = Link::new();
        assert!(head.next().is_none());

        head.link_after(3);
        let first = head.link_after(1);
        // SAFETY: `first` stays linked from `head` until the end of the test.
        unsafe { (*first.as_ptr()).link_mut().link_after(2) };
        assert_eq!(values(&head), vec![1, 2, 3]);
        assert_eq!(head.next(), Some(first));

        assert_eq!(unsafe { (*first.as_ptr()).link_mut().unlink_after() }, Some(2));
        assert_eq!(values(&head), vec![1, 3]);

        assert_eq!(head.unlink_after(), Some(1));
        assert_eq!(head.unlink_after(), Some(3));
        assert_eq!(head.unlink_after(), None);
        assert!(head.next().is_none());
    }
}
