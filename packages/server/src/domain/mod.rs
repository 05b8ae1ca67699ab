//! Domain layer for the chat room.
//!
//! This module contains the message model, command parsing and the
//! registry abstraction. It is independent of the transport and of the
//! concrete registry storage.

pub mod command;
pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use command::Command;
pub use entity::{INBOUND_CAPACITY, MAILBOX_CAPACITY, Mailbox, MailboxSender, Message, MessageKind};
pub use error::{CommandError, ParseError, ValueObjectError};
pub use factory::ParticipantNameFactory;
pub use repository::MailboxRegistry;
pub use value_object::ParticipantName;
