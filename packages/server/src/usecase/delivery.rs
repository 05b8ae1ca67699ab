//! 配送処理（broadcast / tell）
//!
//! どちらもレジストリからは送信ハンドルだけを read ロックで取り出し、
//! ロック解放後に mailbox へ送信します。mailbox が満杯の場合、送信側のタスクは
//! 空きができるまで待機します（バックプレッシャー）。

use crate::domain::{MailboxRegistry, Message};

/// 登録済みの全 mailbox（送信者自身を含む）にメッセージを配送する
pub async fn broadcast(repository: &dyn MailboxRegistry, message: Message) {
    tracing::debug!("Broadcasting: {}", message);

    let mailboxes = repository.snapshot().await;
    for mailbox in mailboxes {
        if mailbox.send(message.clone()).await.is_err() {
            tracing::debug!("Mailbox closed before broadcast delivery: {}", message);
        }
    }
}

/// `dest` の mailbox にだけメッセージを配送する
///
/// `dest` が登録されていなければ何もせずに破棄する。
/// 利用者向けのエラーが必要な場合は呼び出し側で事前に存在確認すること。
pub async fn tell(repository: &dyn MailboxRegistry, dest: &str, message: Message) {
    let Some(mailbox) = repository.get(dest).await else {
        tracing::debug!("Dropping message for unknown participant '{}'", dest);
        return;
    };

    if mailbox.send(message).await.is_err() {
        tracing::debug!("Mailbox of '{}' closed before delivery", dest);
    }
}
