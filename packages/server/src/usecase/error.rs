//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{CommandError, ParseError};

/// メッセージ送信（Say）のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// ディスパッチループが終了しており、受信キューが閉じている
    #[error("chat room is closed")]
    RoomClosed,
}

/// 受信メッセージ処理のエラー
///
/// 表示文言はそのまま送信者へのサーバーメッセージになる。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandleMessageError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),
}
