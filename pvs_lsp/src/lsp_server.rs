//! JSON-RPC によるメッセージのやりとり

mod lsp_handler;
mod lsp_main;
mod lsp_receiver;
mod lsp_sender;

use serde::{Deserialize, Serialize};

pub(crate) use lsp_main::start_lsp_server;

/// クライアントから届くリクエスト
#[derive(Deserialize)]
pub(super) struct LspRequest<Params> {
    pub(crate) id: i64,
    pub(crate) params: Params,
}

/// リクエストへの応答
#[derive(Serialize)]
pub(super) struct LspResponse<Result> {
    pub(crate) jsonrpc: &'static str,
    pub(crate) id: i64,
    pub(crate) result: Result,
}

/// 処理できなかったリクエストへの応答
#[derive(Serialize)]
pub(super) struct LspErrorResponse {
    pub(crate) jsonrpc: &'static str,
    pub(crate) id: i64,
    pub(crate) error: LspError,
}

#[derive(Serialize)]
pub(super) struct LspError {
    pub(crate) code: i64,
    pub(crate) message: String,
}

/// 知らないメソッドのリクエストに返すエラーコード
pub(super) const METHOD_NOT_FOUND: i64 = -32601;

/// 通知。どちらの方向にも送られる。
#[derive(Serialize, Deserialize)]
pub(super) struct LspNotification<Params> {
    pub(crate) jsonrpc: String,
    pub(crate) method: String,
    pub(crate) params: Params,
}

/// メソッドの振り分けに使う部分だけを読んだメッセージ。
///
/// id があればリクエスト、なければ通知。shutdown のように params を持たないリクエストもある。
#[derive(Deserialize)]
pub(super) struct LspMessageOpaque {
    #[serde(default)]
    pub(crate) id: Option<i64>,
    pub(crate) method: String,
}
