//! Shared-tail singly linked lists.

use std::rc::Rc;

/// A node of a singly linked list whose links are reference-counted, so
/// several lists may share one tail.
#[derive(Debug)]
pub struct ListNode<T> {
    pub value: T,
    pub next: Option<Rc<ListNode<T>>>,
}

impl<T> ListNode<T> {
    /// Creates a node in front of `next`.
    pub fn new(value: T, next: Option<Rc<ListNode<T>>>) -> Rc<Self> {
        Rc::new(Self { value, next })
    }

    /// Builds a list holding `values` in order, followed by `tail`.
    ///
    /// Returns `tail` itself when `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_algos::collections::{values, ListNode};
    ///
    /// let shared = ListNode::from_values([3], None);
    /// let a = ListNode::from_values([1, 1], shared.clone());
    /// let b = ListNode::from_values([2, 2, 2], shared);
    /// assert_eq!(values(a.as_ref()), vec![1, 1, 3]);
    /// assert_eq!(values(b.as_ref()), vec![2, 2, 2, 3]);
    /// ```
    pub fn from_values(
        values: impl IntoIterator<Item = T>,
        tail: Option<Rc<ListNode<T>>>,
    ) -> Option<Rc<ListNode<T>>> {
        let values: Vec<T> = values.into_iter().collect();
        values
            .into_iter()
            .rev()
            .fold(tail, |next, value| Some(ListNode::new(value, next)))
    }
}

/// Collects the values of the list starting at `head`.
pub fn values<T: Clone>(head: Option<&Rc<ListNode<T>>>) -> Vec<T> {
    let mut out = Vec::new();
    let mut cursor = head;
    while let Some(node) = cursor {
        out.push(node.value.clone());
        cursor = node.next.as_ref();
    }
    out
}

/// First node shared by the lists starting at `a` and `b`, compared by
/// identity rather than value.
///
/// Two cursors walk their own list and then switch to the other list's
/// head once. Both then cover `len(a) + len(b)` nodes and arrive at the
/// shared node together, or both reach the end a second time when the
/// lists are disjoint. O(len(a) + len(b)) time, O(1) space.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use u_algos::collections::{find_intersection, ListNode};
///
/// let shared = ListNode::from_values([3], None);
/// let a = ListNode::from_values([1, 1], shared.clone());
/// let b = ListNode::from_values([2, 2, 2, 2], shared.clone());
///
/// let hit = find_intersection(a.as_ref(), b.as_ref()).unwrap();
/// assert!(Rc::ptr_eq(&hit, shared.as_ref().unwrap()));
/// ```
pub fn find_intersection<T>(
    a: Option<&Rc<ListNode<T>>>,
    b: Option<&Rc<ListNode<T>>>,
) -> Option<Rc<ListNode<T>>> {
    let (head_a, head_b) = (a?, b?);
    let (mut p, mut q) = (head_a, head_b);
    let (mut p_switched, mut q_switched) = (false, false);

    loop {
        if Rc::ptr_eq(p, q) {
            return Some(Rc::clone(p));
        }

        p = match &p.next {
            Some(next) => next,
            None if !p_switched => {
                p_switched = true;
                head_b
            }
            None => return None,
        };
        q = match &q.next {
            Some(next) => next,
            None if !q_switched => {
                q_switched = true;
                head_a
            }
            None => return None,
        };
    }
}
