use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use super::list::ForwardList;

impl<T: Clone> Clone for ForwardList<T> {
    /// Copies the list in a single forward pass.
    ///
    /// Each element is cloned and linked after the previously copied one.
    fn clone(&self) -> Self {
        let mut copy = ForwardList::new();
        copy.append_values(self.iter().cloned());
        copy
    }

    /// Builds the copy on the side and swaps it in, so `self` is untouched
    /// if cloning an element panics.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    /// Lexicographic: the first differing element decides, and a proper
    /// prefix orders before the longer list.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// Exchanges the contents of two lists. Same as [`ForwardList::swap`].
pub fn swap<T>(lhs: &mut ForwardList<T>, rhs: &mut ForwardList<T>) {
    lhs.swap(rhs);
}
