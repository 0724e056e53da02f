#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    #[error("Please, install Metamask!")]
    WalletAbsent,
    #[error("wallet returned no account")]
    NoAccount,
    #[error("Connect your wallet before sending")]
    NotConnected,
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("abi decode failed: {0}")]
    Abi(#[from] alloy_sol_types::Error),
    #[error("invalid hex payload: {0}")]
    Hex(#[from] alloy_primitives::hex::FromHexError),
    #[error("serialization failed: {0}")]
    Serde(String),
    #[error("transaction {0} reverted")]
    Reverted(String),
}

impl TransactionError {
    pub fn is_wallet_absent(&self) -> bool {
        matches!(self, Self::WalletAbsent)
    }

    /// EIP-1193 code for a request the user declined in the wallet.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Self::Rpc { code: 4001, .. })
    }
}

impl From<serde_wasm_bindgen::Error> for TransactionError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Self::Serde(e.to_string())
    }
}
