//! ディスパッチループ
//!
//! 受信キューの唯一の消費者。キューから FIFO 順に取り出し、1 通ごとに独立したタスクを
//! 起動して処理させます。ループ自身は配送を行わないため、遅い mailbox に詰まることは
//! ありません。起動したタスク同士の処理順序は保証しません。

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::Message;

use super::handle_message::HandleMessageUseCase;

/// 受信キューが閉じられるまでメッセージを取り出し続ける
pub async fn run_dispatch_loop(
    mut inbound: mpsc::Receiver<Message>,
    handler: Arc<HandleMessageUseCase>,
) {
    tracing::debug!("Dispatch loop started");

    while let Some(message) = inbound.recv().await {
        let handler = handler.clone();
        tokio::spawn(async move { handler.execute(message).await });
    }

    tracing::debug!("Dispatch loop stopped: inbound queue closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MailboxRegistry, ParticipantName},
        infrastructure::repository::InMemoryMailboxRegistry,
    };
    use std::time::Duration;

    #[tokio::test]
    async fn test_dispatch_loop_handles_queued_messages() {
        // テスト項目: キューに積まれたメッセージが処理され、配送される
        // given (前提条件):
        let repository = Arc::new(InMemoryMailboxRegistry::new());
        let (mailbox_tx, mut mailbox) = mpsc::channel(16);
        repository
            .register(ParticipantName::try_from("alice").unwrap(), mailbox_tx)
            .await;
        let (inbound_tx, inbound_rx) = mpsc::channel(16);
        let handler = Arc::new(HandleMessageUseCase::new(repository));
        let dispatch = tokio::spawn(run_dispatch_loop(inbound_rx, handler));

        // when (操作):
        inbound_tx
            .send(Message::chat("alice", "hello"))
            .await
            .unwrap();

        // then (期待する結果):
        let received = tokio::time::timeout(Duration::from_secs(1), mailbox.recv())
            .await
            .unwrap();
        assert_eq!(received, Some(Message::chat("alice", "hello")));

        // キューを閉じるとループが終了する
        drop(inbound_tx);
        tokio::time::timeout(Duration::from_secs(1), dispatch)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_dispatch_loop_not_blocked_by_full_mailbox() {
        // テスト項目: 満杯の mailbox があっても、ループは後続のメッセージを処理し続ける
        // given (前提条件):
        let repository = Arc::new(InMemoryMailboxRegistry::new());
        let (slow_tx, _slow) = mpsc::channel(1);
        let (fast_tx, mut fast) = mpsc::channel(16);
        repository
            .register(ParticipantName::try_from("slow").unwrap(), slow_tx)
            .await;
        repository
            .register(ParticipantName::try_from("fast").unwrap(), fast_tx)
            .await;
        let (inbound_tx, inbound_rx) = mpsc::channel(16);
        let handler = Arc::new(HandleMessageUseCase::new(repository));
        tokio::spawn(run_dispatch_loop(inbound_rx, handler));

        // when (操作): slow の mailbox を埋めたうえで fast 宛てに /count を送る
        inbound_tx.send(Message::chat("fast", "one")).await.unwrap();
        inbound_tx.send(Message::chat("fast", "two")).await.unwrap();
        inbound_tx.send(Message::chat("fast", "/count")).await.unwrap();

        // then (期待する結果): fast には /count の返信が届く
        let mut received = Vec::new();
        while let Ok(Some(message)) =
            tokio::time::timeout(Duration::from_millis(500), fast.recv()).await
        {
            received.push(message);
        }
        assert!(received.contains(&Message::server("2 users connected")));
    }
}
