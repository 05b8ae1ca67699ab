//! UseCase: 参加者切断処理（Unsubscribe）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectParticipantUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 切断した参加者がレジストリから削除され、残りの参加者に退室通知が届くことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加者の切断と通知
//! - エッジケース：存在しない参加者の切断（何もしない）

use std::sync::Arc;

use crate::domain::{MailboxRegistry, Message};

use super::delivery::broadcast;

/// 参加者切断のユースケース
pub struct DisconnectParticipantUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn MailboxRegistry>,
}

impl DisconnectParticipantUseCase {
    /// 新しい DisconnectParticipantUseCase を作成
    pub fn new(repository: Arc<dyn MailboxRegistry>) -> Self {
        Self { repository }
    }

    /// 参加者切断を実行
    ///
    /// mailbox を削除してから `"{name} left the chat"` を残りの全員に配送する。
    /// `name` が登録されていなければ何もしない。
    pub async fn execute(&self, name: &str) {
        // 1. Repository 経由で mailbox を削除
        if self.repository.deregister(name).await.is_none() {
            tracing::debug!("Participant '{}' was not registered", name);
            return;
        }
        tracing::info!("Participant '{}' left the chat", name);

        // 2. 退室通知をブロードキャスト
        broadcast(
            self.repository.as_ref(),
            Message::server(format!("{name} left the chat")),
        )
        .await;
    }
}
