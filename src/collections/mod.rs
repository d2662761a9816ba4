//! Small collection studies.
//!
//! - [`TwoStackQueue`]: FIFO queue built from two LIFO stacks.
//! - [`ListNode`]: singly linked list with shared (`Rc`) links, so two
//!   lists can merge into a common tail, plus [`find_intersection`] to
//!   locate the merge node.

mod list;
mod two_stack_queue;

pub use list::{find_intersection, values, ListNode};
pub use two_stack_queue::TwoStackQueue;
