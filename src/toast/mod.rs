//! Toast/alert queue owned by the host and passed where it is needed.
//!
//! - [`Toast`]: one notification with kind, priority and text.
//! - [`ToastQueue`]: slotmap-backed priority queue with change listeners.

pub mod queue;
pub mod types;

pub use queue::{SubscriptionId, ToastId, ToastListener, ToastQueue};
pub use types::{Toast, ToastKind, ToastPriority};
