//! Registry abstraction for participant mailboxes.
//!
//! The usecase layer depends on this trait only; the concrete storage lives
//! in the infrastructure layer (dependency inversion). The mapping itself is
//! never handed out: callers get sender handles, counts or yes/no answers.

use async_trait::async_trait;

use super::{entity::MailboxSender, value_object::ParticipantName};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailboxRegistry: Send + Sync {
    /// Register `mailbox` under `name` with exclusive access.
    ///
    /// Returns the previously registered sender if `name` was already taken;
    /// that sender is replaced.
    async fn register(&self, name: ParticipantName, mailbox: MailboxSender)
    -> Option<MailboxSender>;

    /// Remove the mailbox registered under `name` with exclusive access.
    async fn deregister(&self, name: &str) -> Option<MailboxSender>;

    /// Whether `name` is currently registered.
    async fn contains(&self, name: &str) -> bool;

    /// Number of registered participants.
    async fn count(&self) -> usize;

    /// Sender handle for `name`, if registered.
    async fn get(&self, name: &str) -> Option<MailboxSender>;

    /// Sender handles of every registered mailbox at the time of the call.
    async fn snapshot(&self) -> Vec<MailboxSender>;
}
