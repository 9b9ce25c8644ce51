//! Lexicographic next permutation, in place.
//!
//! Example: for 8342|666411 the head ends in 2 and the tail 666411 is non-increasing.
//! The rightmost tail element above 2 is the last 4; swapping gives 8344|666211, and
//! reversing the tail gives 8344112666, the next permutation.
//!
//! Duplicates are fine: the suffix scan and the pivot search compare strictly,
//! so each distinct arrangement of a multiset appears exactly once.

/// Advance `seq` to its lexicographic successor.
///
/// Returns `false` and leaves `seq` untouched when it is already the last
/// (non-increasing) arrangement; empty and single-element slices always return `false`.
///
/// ```
/// use stathelpers::next_permutation;
/// let mut s = *b"abcde";
/// let mut count = 1;
/// while next_permutation(&mut s) {
///     count += 1;
/// }
/// assert_eq!(count, 120);
/// assert_eq!(&s, b"edcba");
/// ```
pub fn next_permutation<T: Ord>(seq: &mut [T]) -> bool {
    if seq.len() < 2 {
        return false;
    }
    // Head index of the longest non-increasing suffix.
    let mut i = seq.len() - 1;
    while i > 0 && seq[i - 1] >= seq[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    // Rightmost element exceeding the pivot; seq[i] qualifies, so j >= i.
    let mut j = seq.len() - 1;
    while seq[j] <= seq[i - 1] {
        j -= 1;
    }
    seq.swap(i - 1, j);
    seq[i..].reverse();
    true
}

/// Walks every distinct arrangement of a multiset in lexicographic order.
///
/// The items are sorted on construction; the first call to `next_perm` yields that
/// sorted arrangement, later calls yield successors until `None`.
#[derive(Clone, Debug)]
pub struct LexPermutations<T> {
    items: Vec<T>,
    started: bool,
    done: bool,
}

impl<T: Ord> LexPermutations<T> {
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort();
        Self {
            items,
            started: false,
            done: false,
        }
    }

    /// Next arrangement, or `None` once the descending arrangement has been yielded.
    pub fn next_perm(&mut self) -> Option<&[T]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.items);
        }
        if next_permutation(&mut self.items) {
            Some(&self.items)
        } else {
            self.done = true;
            None
        }
    }

    /// Current arrangement (the sorted start before the first `next_perm`).
    pub fn current(&self) -> &[T] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}
