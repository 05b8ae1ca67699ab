//! UseCase: 参加者接続処理（Subscribe / IsNameAvailable）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectParticipantUseCase::execute() メソッド
//! - ConnectParticipantUseCase::is_name_available() メソッド
//!
//! ### なぜこのテストが必要か
//! - 参加者の mailbox が登録され、入室通知が本人を含む全員に届くことを保証
//! - 同名での再接続の挙動（上書き）を明示する
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の接続と入室通知
//! - エッジケース：同名での再接続（以前の mailbox は置き換えられ、以後何も届かない）

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::{MAILBOX_CAPACITY, Mailbox, MailboxRegistry, Message, ParticipantName};

use super::delivery::broadcast;

/// 参加者接続のユースケース
pub struct ConnectParticipantUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn MailboxRegistry>,
    /// 新しく作成する mailbox の容量
    mailbox_capacity: usize,
}

impl ConnectParticipantUseCase {
    /// 新しい ConnectParticipantUseCase を作成
    pub fn new(repository: Arc<dyn MailboxRegistry>) -> Self {
        Self::with_capacity(repository, MAILBOX_CAPACITY)
    }

    /// mailbox の容量を指定して作成
    pub fn with_capacity(repository: Arc<dyn MailboxRegistry>, mailbox_capacity: usize) -> Self {
        Self {
            repository,
            mailbox_capacity,
        }
    }

    /// 参加者接続を実行
    ///
    /// 新しい mailbox を登録し、`"{name} entered the chat"` を全員に配送してから
    /// mailbox を返す。失敗することはない。
    ///
    /// 同名の参加者が既に登録されている場合、以前の mailbox は置き換えられ、
    /// 以後そちらには何も配送されない。
    pub async fn execute(&self, name: ParticipantName) -> Mailbox {
        let (sender, mailbox) = mpsc::channel(self.mailbox_capacity);

        // 1. Repository に mailbox を登録
        if self
            .repository
            .register(name.clone(), sender)
            .await
            .is_some()
        {
            tracing::warn!(
                "Participant '{}' was already registered; previous mailbox replaced",
                name
            );
        }
        tracing::info!("Participant '{}' entered the chat", name);

        // 2. 入室通知をブロードキャスト（本人を含む）
        broadcast(
            self.repository.as_ref(),
            Message::server(format!("{name} entered the chat")),
        )
        .await;

        mailbox
    }

    /// `name` が現在未登録であれば true
    pub async fn is_name_available(&self, name: &str) -> bool {
        !self.repository.contains(name).await
    }
}
