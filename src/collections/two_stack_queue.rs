//! Queue on two stacks.
//!
//! `inbox` receives new elements; `outbox` holds older elements with the
//! oldest on top. The outbox is refilled by reversing the inbox only when
//! it runs empty, so each element moves at most twice: amortized O(1).

/// A FIFO queue built from two `Vec` stacks.
///
/// # Examples
///
/// ```
/// use u_algos::collections::TwoStackQueue;
///
/// let mut q = TwoStackQueue::new();
/// q.enqueue(1);
/// q.enqueue(2);
/// assert_eq!(q.dequeue(), Some(1));
/// q.enqueue(3);
/// assert_eq!(q.dequeue(), Some(2));
/// assert_eq!(q.dequeue(), Some(3));
/// assert_eq!(q.dequeue(), None);
/// ```
#[derive(Debug, Clone)]
pub struct TwoStackQueue<T> {
    inbox: Vec<T>,
    outbox: Vec<T>,
}

impl<T> Default for TwoStackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TwoStackQueue<T> {
    pub fn new() -> Self {
        Self {
            inbox: Vec::new(),
            outbox: Vec::new(),
        }
    }

    /// Appends an element at the back.
    pub fn enqueue(&mut self, item: T) {
        self.inbox.push(item);
    }

    /// Removes and returns the front element, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.refill();
        self.outbox.pop()
    }

    /// Front element without removing it.
    ///
    /// Takes `&mut self` because it may move the inbox into the outbox.
    pub fn peek(&mut self) -> Option<&T> {
        self.refill();
        self.outbox.last()
    }

    pub fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    fn refill(&mut self) {
        if self.outbox.is_empty() {
            self.outbox.extend(self.inbox.drain(..).rev());
        }
    }
}

impl<T> FromIterator<T> for TwoStackQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inbox: iter.into_iter().collect(),
            outbox: Vec::new(),
        }
    }
}
