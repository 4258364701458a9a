/// Errors raised while fetching and decoding a bonding curve account.
#[derive(Debug, thiserror::Error)]
pub enum CurveError {
    /// The node returned no result for the account.
    #[error("account data not found")]
    NotFound,

    /// The request never produced a usable response (connection, DNS, HTTP status).
    #[error("rpc transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response did not have the `result.value.data` shape.
    #[error("malformed rpc response: {0}")]
    Parse(String),

    #[error("account data decode error: {0}")]
    Decode(#[from] DecodeError),
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid base64 account data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("account data is {actual} bytes, need at least {needed}")]
    TooShort { needed: usize, actual: usize },
}

/// Errors raised while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid mint address {mint}: {reason}")]
    InvalidMint { mint: String, reason: String },

    #[error("curve entry {0} has neither `account` nor `mint`")]
    MissingAccount(usize),
}
