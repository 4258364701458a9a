//! `getAccountInfo` over JSON-RPC.
//!
//! Building the request, classifying the node's `result` and turning
//! transport failures into [`CurveError`] all happen here, so the curve code
//! only ever sees decoded account bytes.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use solana_client::rpc_request::RpcRequest;

use crate::error::{CurveError, DecodeError};

/// JSON-RPC id of every `getAccountInfo` call.
pub const REQUEST_ID: u64 = 1;

/// The only transport encoding requested from the node.
pub const ACCOUNT_DATA_ENCODING: &str = "base64";

/// Params of a `getAccountInfo` call: `[<account>, {"encoding": "base64"}]`.
pub fn get_account_info_params(account: &str) -> Value {
    json!([account, { "encoding": ACCOUNT_DATA_ENCODING }])
}

/// Full JSON-RPC 2.0 envelope of the `getAccountInfo` call.
pub fn get_account_info_request(account: &str) -> Value {
    RpcRequest::GetAccountInfo.build_request_json(REQUEST_ID, get_account_info_params(account))
}

/// Account data as returned by the node, still in its transport encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    /// base64 of the raw account bytes (`data[0]`)
    pub data: String,
    pub lamports: Option<u64>,
    pub owner: Option<String>,
}

impl AccountInfo {
    pub fn decode(&self) -> Result<Vec<u8>, DecodeError> {
        Ok(STANDARD.decode(&self.data)?)
    }
}

/// Outcome of a `getAccountInfo` call that reached the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountInfoResponse {
    Found(AccountInfo),
    NotFound,
    Malformed(String),
}

#[derive(Deserialize)]
struct RpcAccountResult {
    value: Value,
}

#[derive(Deserialize)]
struct RpcAccountValue {
    data: Vec<String>,
    #[serde(default)]
    lamports: Option<u64>,
    #[serde(default)]
    owner: Option<String>,
}

impl AccountInfoResponse {
    /// Classifies a whole JSON-RPC response body.
    ///
    /// A JSON-RPC error object in place of `result` means the account data
    /// was not found.
    pub fn from_body(body: Value) -> Self {
        let mut obj = match body {
            Value::Object(obj) => obj,
            other => return Self::Malformed(format!("response is not a JSON object: {other}")),
        };

        match obj.remove("result") {
            Some(result) => Self::from_result(result),
            None => {
                // JSON-RPC error object вместо `result` = аккаунт не найден
                if let Some(error) = obj.get("error") {
                    debug!("getAccountInfo failed with rpc error {}", error);
                }
                Self::NotFound
            }
        }
    }

    /// Classifies the `result` member of a `getAccountInfo` response.
    ///
    /// An absent/`null`/empty `result` and a `null` `result.value` both mean
    /// the node has nothing for the account. Any other deviation from
    /// `result.value.data = [<base64>, "base64"]` is `Malformed`.
    pub fn from_result(result: Value) -> Self {
        if result.is_null() || result.as_object().is_some_and(|obj| obj.is_empty()) {
            return Self::NotFound;
        }

        let result: RpcAccountResult = match serde_json::from_value(result) {
            Ok(result) => result,
            Err(e) => return Self::Malformed(e.to_string()),
        };
        if result.value.is_null() {
            return Self::NotFound;
        }

        let value: RpcAccountValue = match serde_json::from_value(result.value) {
            Ok(value) => value,
            Err(e) => return Self::Malformed(e.to_string()),
        };

        let mut data = value.data.into_iter();
        let Some(encoded) = data.next() else {
            return Self::Malformed("`data` is empty".to_string());
        };
        if let Some(encoding) = data.next() {
            if encoding != ACCOUNT_DATA_ENCODING {
                return Self::Malformed(format!(
                    "unexpected account data encoding `{encoding}`"
                ));
            }
        }

        Self::Found(AccountInfo {
            data: encoded,
            lamports: value.lamports,
            owner: value.owner,
        })
    }
}

/// Anything that can answer a `getAccountInfo` for a single account.
pub trait AccountSource {
    /// Performs exactly one lookup. `Err` is reserved for failures where no
    /// response could be obtained at all.
    fn account_info(&self, account: &str) -> Result<AccountInfoResponse, CurveError>;
}

/// `getAccountInfo` over a single HTTP POST per lookup.
///
/// There is no retry of any kind: a 429 or any other non-2xx status is
/// returned to the caller as [`CurveError::Transport`].
#[derive(Debug, Clone)]
pub struct HttpAccountSource {
    client: Client,
    endpoint: String,
}

impl HttpAccountSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, CurveError> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AccountSource for HttpAccountSource {
    fn account_info(&self, account: &str) -> Result<AccountInfoResponse, CurveError> {
        let request = get_account_info_request(account);
        debug!("POST {} {}", self.endpoint, request);

        let body = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()?
            .error_for_status()?
            .text()?;

        match serde_json::from_str::<Value>(&body) {
            Ok(body) => Ok(AccountInfoResponse::from_body(body)),
            Err(e) => Ok(AccountInfoResponse::Malformed(format!(
                "response body is not JSON: {e}"
            ))),
        }
    }
}

/// Fetches an account and returns its raw bytes.
pub fn fetch_account_data<S: AccountSource + ?Sized>(
    source: &S,
    account: &str,
) -> Result<Vec<u8>, CurveError> {
    match source.account_info(account)? {
        AccountInfoResponse::Found(info) => {
            let data = info.decode()?;
            debug!("Fetched account {}: {} bytes, owner {:?}", account, data.len(), info.owner);
            Ok(data)
        }
        AccountInfoResponse::NotFound => Err(CurveError::NotFound),
        AccountInfoResponse::Malformed(reason) => Err(CurveError::Parse(reason)),
    }
}
