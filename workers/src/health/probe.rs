//! 到達性プローブ
//!
//! 1回だけのHEADリクエストを締め切り付きで実行する。
//! どの失敗経路も `ProbeOutcome` として返し、エラーやpanicを外へ漏らさない。

use async_trait::async_trait;
use reqwest::{redirect, Client};
use selferase_common::config::WorkerConfig;
use selferase_common::error::CommonError;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// 1回のプローブ結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 締め切り前に応答を受信した
    Responded(u16),
    /// 締め切りまでに応答がなかった
    TimedOut(Duration),
    /// 応答を受け取る前に失敗した（接続拒否、DNS、TLS等）
    TransportError(String),
}

impl ProbeOutcome {
    /// reqwestのエラーを結果に変換
    ///
    /// クライアント側のタイムアウトも `TimedOut` として扱う。
    pub fn from_request_error(error: &reqwest::Error, deadline: Duration) -> Self {
        if error.is_timeout() {
            return Self::TimedOut(deadline);
        }
        Self::TransportError(error.to_string())
    }
}

/// 到達性チェックの抽象
///
/// テストでは固定の `ProbeOutcome` を返す実装に差し替える。
#[async_trait]
pub trait BrokerProbe: Send + Sync {
    /// `url` に対して1回だけチェックを行う
    ///
    /// `deadline` を過ぎた場合は `ProbeOutcome::TimedOut` を返す。
    async fn check(&self, url: &str, deadline: Duration) -> ProbeOutcome;
}

/// 実行中プローブの所有ハンドル
///
/// 締め切り超過時、またはハンドルが破棄された時点でタスクを中断する。
/// 中断後に届いた応答は誰にも観測されない。
#[derive(Debug)]
pub struct ProbeHandle {
    task: JoinHandle<ProbeOutcome>,
}

impl ProbeHandle {
    /// プローブをバックグラウンドタスクとして開始
    pub fn spawn<F>(probe: F) -> Self
    where
        F: Future<Output = ProbeOutcome> + Send + 'static,
    {
        Self {
            task: tokio::spawn(probe),
        }
    }

    /// 締め切りまで結果を待つ
    pub async fn wait(mut self, deadline: Duration) -> ProbeOutcome {
        match tokio::time::timeout(deadline, &mut self.task).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(join_error)) => {
                ProbeOutcome::TransportError(format!("probe task failed: {}", join_error))
            }
            Err(_) => {
                self.task.abort();
                ProbeOutcome::TimedOut(deadline)
            }
        }
    }
}

impl Drop for ProbeHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// 締め切り付きで任意のプローブ処理を実行
pub async fn run_with_deadline<F>(probe: F, deadline: Duration) -> ProbeOutcome
where
    F: Future<Output = ProbeOutcome> + Send + 'static,
{
    ProbeHandle::spawn(probe).wait(deadline).await
}

/// reqwestによるHEADプローブ
#[derive(Clone, Debug)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// User-Agentとリダイレクト上限を指定して作成
    pub fn new(user_agent: &str, max_redirects: usize) -> Result<Self, CommonError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(redirect::Policy::limited(max_redirects))
            // ブローカーへ直接到達できるかを見るため、システムプロキシは使わない
            .no_proxy()
            .build()
            .map_err(|e| CommonError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// 設定から作成
    pub fn from_config(config: &WorkerConfig) -> Result<Self, CommonError> {
        Self::new(&config.user_agent, config.max_redirects)
    }
}

#[async_trait]
impl BrokerProbe for HttpProbe {
    async fn check(&self, url: &str, deadline: Duration) -> ProbeOutcome {
        // ボディは要求しない
        let request = self.client.head(url).timeout(deadline);
        let target = url.to_string();

        run_with_deadline(
            async move {
                match request.send().await {
                    Ok(response) => ProbeOutcome::Responded(response.status().as_u16()),
                    Err(e) => {
                        debug!(url = %target, error = %e, "Probe request failed");
                        ProbeOutcome::from_request_error(&e, deadline)
                    }
                }
            },
            deadline,
        )
        .await
    }
}
