//! チャットルーム
//!
//! トランスポート層が利用する 4 つの操作（subscribe / unsubscribe / say /
//! is_name_available）をまとめた窓口です。生成時にディスパッチループを起動し、
//! ルームが破棄されて受信キューが閉じるとループも終了します。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ChatRoom の公開操作を組み合わせたときの配送結果
//!
//! ### なぜこのテストが必要か
//! - 受信キュー・ディスパッチループ・レジストリを通した一連の流れを保証
//! - 並行に発言しても、全員に全メッセージが重複・欠落なく届くことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：入室直後の発言、/count、/tell
//! - 並行性：複数参加者の同時発言

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::{INBOUND_CAPACITY, MAILBOX_CAPACITY, Mailbox, MailboxRegistry, ParticipantName};

use super::{
    connect_participant::ConnectParticipantUseCase,
    disconnect_participant::DisconnectParticipantUseCase, dispatch::run_dispatch_loop,
    error::SendMessageError, handle_message::HandleMessageUseCase,
    send_message::SendMessageUseCase,
};

/// 単一のチャットルーム
pub struct ChatRoom {
    repository: Arc<dyn MailboxRegistry>,
    connect: ConnectParticipantUseCase,
    disconnect: DisconnectParticipantUseCase,
    send: SendMessageUseCase,
}

impl ChatRoom {
    /// 既定の容量でルームを作成し、ディスパッチループを起動する
    ///
    /// Tokio ランタイム上で呼び出す必要がある。
    pub fn new(repository: Arc<dyn MailboxRegistry>) -> Self {
        Self::with_capacity(repository, INBOUND_CAPACITY, MAILBOX_CAPACITY)
    }

    /// 受信キューと mailbox の容量を指定してルームを作成する
    pub fn with_capacity(
        repository: Arc<dyn MailboxRegistry>,
        inbound_capacity: usize,
        mailbox_capacity: usize,
    ) -> Self {
        let (inbound_tx, inbound_rx) = mpsc::channel(inbound_capacity);
        let handler = Arc::new(HandleMessageUseCase::new(repository.clone()));
        tokio::spawn(run_dispatch_loop(inbound_rx, handler));

        Self {
            connect: ConnectParticipantUseCase::with_capacity(repository.clone(), mailbox_capacity),
            disconnect: DisconnectParticipantUseCase::new(repository.clone()),
            send: SendMessageUseCase::new(inbound_tx),
            repository,
        }
    }

    /// 参加者を登録して mailbox を返す。入室通知は mailbox の先頭に届く
    pub async fn subscribe(&self, name: ParticipantName) -> Mailbox {
        self.connect.execute(name).await
    }

    /// 参加者を削除して退室通知を配送する
    pub async fn unsubscribe(&self, name: &str) {
        self.disconnect.execute(name).await
    }

    /// 発言を受信キューに積む。キューが満杯の間は待機する
    pub async fn say(
        &self,
        name: &ParticipantName,
        content: impl Into<String>,
    ) -> Result<(), SendMessageError> {
        self.send.execute(name, content).await
    }

    /// `name` が未登録なら true
    pub async fn is_name_available(&self, name: &str) -> bool {
        self.connect.is_name_available(name).await
    }

    /// 現在の参加者数
    pub async fn participant_count(&self) -> usize {
        self.repository.count().await
    }
}
