use crate::contract::TransferStruct;
use crate::error::TransactionError;
use crate::models::{AddToBlockchain, PendingTransaction, TransferRequest};
use async_trait::async_trait;
use std::rc::Rc;

/// Wallet extension plus the transactions contract reached through it.
#[async_trait(?Send)]
pub trait WalletGateway {
    fn is_installed(&self) -> bool;

    async fn request_accounts(&self) -> Result<Vec<String>, TransactionError>;

    async fn accounts(&self) -> Result<Vec<String>, TransactionError>;

    async fn send_transaction(&self, request: TransferRequest) -> Result<String, TransactionError>;

    async fn get_all_transactions(&self) -> Result<Vec<TransferStruct>, TransactionError>;

    async fn get_transaction_count(&self) -> Result<u64, TransactionError>;

    async fn add_to_blockchain(
        &self,
        from: &str,
        call: AddToBlockchain,
    ) -> Result<PendingTransaction, TransactionError>;

    async fn wait(&self, pending: &PendingTransaction) -> Result<(), TransactionError>;
}

pub trait CountCache {
    fn load(&self) -> Option<u64>;
    fn save(&self, count: u64);
}

/// Shared handles passed to the provider as a prop.
#[derive(Clone)]
pub struct Services {
    pub gateway: Rc<dyn WalletGateway>,
    pub cache: Rc<dyn CountCache>,
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.gateway, &other.gateway) && Rc::ptr_eq(&self.cache, &other.cache)
    }
}
