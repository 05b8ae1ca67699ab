//! UseCase: 受信メッセージの処理
//!
//! ディスパッチループが受信キューから取り出したメッセージ 1 通ごとに、独立したタスクで
//! 実行されます。`/` で始まる内容はコマンドとして解析・実行し、それ以外は全員に
//! ブロードキャストします。
//!
//! 解析エラー・コマンドエラーはサーバーメッセージとして送信者にだけ返信され、
//! ループを止めることはありません。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - HandleMessageUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - コマンドごとの返信内容と配送先（送信者のみ / 宛先のみ / 全員）を保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：通常メッセージのブロードキャスト、/tell、/count
//! - 異常系：未知のコマンド、引数の数の誤り、未登録の宛先、解析エラー

use std::sync::Arc;

use crate::domain::{Command, CommandError, MailboxRegistry, Message};

use super::{
    delivery::{broadcast, tell},
    error::HandleMessageError,
};

/// 受信メッセージ処理のユースケース
pub struct HandleMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn MailboxRegistry>,
}

impl HandleMessageUseCase {
    /// 新しい HandleMessageUseCase を作成
    pub fn new(repository: Arc<dyn MailboxRegistry>) -> Self {
        Self { repository }
    }

    /// 受信メッセージを処理する
    pub async fn execute(&self, message: Message) {
        let Some(command_text) = message.content().strip_prefix('/') else {
            broadcast(self.repository.as_ref(), message).await;
            return;
        };

        let Some(author) = message.author() else {
            tracing::warn!("Dropping command without author: {}", message);
            return;
        };

        if let Err(e) = self.run_command(author, command_text).await {
            tracing::debug!("Command from '{}' rejected: {}", author, e);
            self.reply(author, e.to_string()).await;
        }
    }

    /// コマンドを解析して実行する
    async fn run_command(&self, author: &str, command_text: &str) -> Result<(), HandleMessageError> {
        let command = Command::parse(command_text)?;
        match command.name.as_str() {
            "tell" => self.tell_command(author, &command.args).await?,
            "count" => self.count_command(author, &command.args).await?,
            _ => return Err(CommandError::UnknownCommand(command.name.clone()).into()),
        }
        Ok(())
    }

    /// `/tell {dest} {text}`
    async fn tell_command(&self, author: &str, args: &[String]) -> Result<(), CommandError> {
        let [dest, text] = args else {
            return Err(CommandError::Malformed);
        };

        // tell 自体は未登録の宛先を黙って破棄するため、ここで事前に確認する
        if !self.repository.contains(dest).await {
            return Err(CommandError::UserNotFound(dest.clone()));
        }

        tell(
            self.repository.as_ref(),
            dest,
            Message::whisper(author, text.as_str()),
        )
        .await;
        Ok(())
    }

    /// `/count`
    async fn count_command(&self, author: &str, args: &[String]) -> Result<(), CommandError> {
        if !args.is_empty() {
            return Err(CommandError::Malformed);
        }

        let count = self.repository.count().await;
        self.reply(author, format!("{count} users connected")).await;
        Ok(())
    }

    /// 送信者にサーバーメッセージを返信する
    async fn reply(&self, author: &str, content: String) {
        tell(self.repository.as_ref(), author, Message::server(content)).await;
    }
}
