//! ワークフローの送信（スピナー表示付き）

use crate::client::InferenceClient;
use crate::error::Result;
use agricare_common::{EndpointConfig, Workflow};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner());
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 1回送信して結果をワークフローに反映する
///
/// 入力不足などで送信を開始できない場合のみエラーを返す。
/// 通信失敗はワークフローの失敗処理（エラー表示・フォールバック）に渡す。
pub async fn submit(
    workflow: &mut Workflow,
    client: &InferenceClient,
    endpoints: &EndpointConfig,
) -> Result<()> {
    let pending = workflow.begin_submission(endpoints)?;

    let pb = spinner(&format!("送信中... {}", pending.request.url()));
    let response = client.send(&pending.request).await;
    pb.finish_and_clear();

    if let Err(e) = &response {
        tracing::warn!(mode = workflow.mode().as_str(), error = %e, "submission failed");
    }

    workflow.complete_submission(pending.ticket, response);
    Ok(())
}
