//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod chat_room;
pub mod connect_participant;
pub mod delivery;
pub mod disconnect_participant;
pub mod dispatch;
pub mod error;
pub mod handle_message;
pub mod send_message;

pub use chat_room::ChatRoom;
pub use connect_participant::ConnectParticipantUseCase;
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use error::{HandleMessageError, SendMessageError};
pub use handle_message::HandleMessageUseCase;
pub use send_message::SendMessageUseCase;
