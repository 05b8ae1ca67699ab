//! InMemory MailboxRegistry 実装
//!
//! ドメイン層が定義する MailboxRegistry trait の具体的な実装。
//! RwLock で保護した HashMap をレジストリとして使用します。
//!
//! 登録・削除は write ロック、それ以外（存在確認、件数、取得、スナップショット）は
//! read ロックを取ります。ロックを保持したまま mailbox への送信を待つことはありません。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{MailboxRegistry, MailboxSender, ParticipantName};

/// インメモリ MailboxRegistry 実装
#[derive(Default)]
pub struct InMemoryMailboxRegistry {
    /// 参加者名 → mailbox 送信側
    mailboxes: RwLock<HashMap<ParticipantName, MailboxSender>>,
}

impl InMemoryMailboxRegistry {
    /// 新しい InMemoryMailboxRegistry を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MailboxRegistry for InMemoryMailboxRegistry {
    async fn register(
        &self,
        name: ParticipantName,
        mailbox: MailboxSender,
    ) -> Option<MailboxSender> {
        let mut mailboxes = self.mailboxes.write().await;
        mailboxes.insert(name, mailbox)
    }

    async fn deregister(&self, name: &str) -> Option<MailboxSender> {
        let mut mailboxes = self.mailboxes.write().await;
        mailboxes.remove(name)
    }

    async fn contains(&self, name: &str) -> bool {
        let mailboxes = self.mailboxes.read().await;
        mailboxes.contains_key(name)
    }

    async fn count(&self) -> usize {
        let mailboxes = self.mailboxes.read().await;
        mailboxes.len()
    }

    async fn get(&self, name: &str) -> Option<MailboxSender> {
        let mailboxes = self.mailboxes.read().await;
        mailboxes.get(name).cloned()
    }

    async fn snapshot(&self) -> Vec<MailboxSender> {
        let mailboxes = self.mailboxes.read().await;
        mailboxes.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Message;
    use tokio::sync::mpsc;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryMailboxRegistry の登録・削除・参照操作
    //
    // 【なぜこのテストが必要か】
    // - レジストリはルームで唯一の共有可変状態であり、UseCase 層はその正しさに依存する
    //
    // 【どのようなシナリオをテストするか】
    // 1. 登録した参加者が存在確認・件数・取得に反映される
    // 2. 削除した参加者は参照できなくなる
    // 3. 存在しない参加者の削除は何もしない
    // 4. 同名で再登録すると以前の mailbox が置き換えられる
    // 5. スナップショットで全 mailbox に送信できる
    // ========================================

    fn name(value: &str) -> ParticipantName {
        ParticipantName::try_from(value).unwrap()
    }

    #[tokio::test]
    async fn test_register_success() {
        // テスト項目: 登録した参加者が存在確認・件数に反映される
        // given (前提条件):
        let registry = InMemoryMailboxRegistry::new();
        let (tx, _rx) = mpsc::channel(1);

        // when (操作):
        let previous = registry.register(name("alice"), tx).await;

        // then (期待する結果):
        assert!(previous.is_none());
        assert!(registry.contains("alice").await);
        assert!(!registry.contains("bob").await);
        assert_eq!(registry.count().await, 1);
        assert!(registry.get("alice").await.is_some());
    }

    #[tokio::test]
    async fn test_deregister_success() {
        // テスト項目: 削除した参加者は参照できなくなる
        // given (前提条件):
        let registry = InMemoryMailboxRegistry::new();
        let (tx, _rx) = mpsc::channel(1);
        registry.register(name("alice"), tx).await;

        // when (操作):
        let removed = registry.deregister("alice").await;

        // then (期待する結果):
        assert!(removed.is_some());
        assert!(!registry.contains("alice").await);
        assert_eq!(registry.count().await, 0);
        assert!(registry.get("alice").await.is_none());
    }

    #[tokio::test]
    async fn test_deregister_nonexistent_is_noop() {
        // テスト項目: 存在しない参加者の削除は何もしない
        // given (前提条件):
        let registry = InMemoryMailboxRegistry::new();

        // when (操作):
        let removed = registry.deregister("ghost").await;

        // then (期待する結果):
        assert!(removed.is_none());
        assert_eq!(registry.count().await, 0);
    }

    #[tokio::test]
    async fn test_register_same_name_replaces_mailbox() {
        // テスト項目: 同名で再登録すると以前の mailbox が返され、置き換えられる
        // given (前提条件):
        let registry = InMemoryMailboxRegistry::new();
        let (tx1, _rx1) = mpsc::channel(1);
        let (tx2, mut rx2) = mpsc::channel(1);
        registry.register(name("alice"), tx1).await;

        // when (操作):
        let previous = registry.register(name("alice"), tx2).await;

        // then (期待する結果):
        assert!(previous.is_some());
        assert_eq!(registry.count().await, 1);
        let current = registry.get("alice").await.unwrap();
        current.send(Message::server("ping")).await.unwrap();
        assert_eq!(rx2.recv().await, Some(Message::server("ping")));
    }

    #[tokio::test]
    async fn test_snapshot_contains_every_mailbox() {
        // テスト項目: スナップショットには登録済みの全 mailbox が含まれる
        // given (前提条件):
        let registry = InMemoryMailboxRegistry::new();
        let (tx1, mut rx1) = mpsc::channel(1);
        let (tx2, mut rx2) = mpsc::channel(1);
        registry.register(name("alice"), tx1).await;
        registry.register(name("bob"), tx2).await;

        // when (操作):
        let snapshot = registry.snapshot().await;
        for sender in &snapshot {
            sender.send(Message::server("hello")).await.unwrap();
        }

        // then (期待する結果):
        assert_eq!(snapshot.len(), 2);
        assert_eq!(rx1.recv().await, Some(Message::server("hello")));
        assert_eq!(rx2.recv().await, Some(Message::server("hello")));
    }
}
