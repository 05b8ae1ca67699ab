//! UseCase: メッセージ送信処理（Say）
//!
//! 受信キューに積むだけで、レジストリには一切触れません。
//! キューが満杯のとき呼び出し側は空きができるまで待機します（バックプレッシャー）。
//! キューに積まれた順序が、ルームが保証する唯一の全順序です。

use tokio::sync::mpsc;

use crate::domain::{Message, ParticipantName};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
#[derive(Clone)]
pub struct SendMessageUseCase {
    /// ルーム全体で 1 つの受信キュー
    inbound: mpsc::Sender<Message>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(inbound: mpsc::Sender<Message>) -> Self {
        Self { inbound }
    }

    /// メッセージ送信を実行
    ///
    /// # Errors
    ///
    /// * `SendMessageError::RoomClosed` - ディスパッチループが終了している
    pub async fn execute(
        &self,
        author: &ParticipantName,
        content: impl Into<String>,
    ) -> Result<(), SendMessageError> {
        self.inbound
            .send(Message::chat(author.as_str(), content))
            .await
            .map_err(|_| SendMessageError::RoomClosed)
    }
}
