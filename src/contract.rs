use crate::models::{AddToBlockchain, TransactionRecord};
use crate::utils::{format_timestamp, wei_to_ether};
use alloy_sol_types::{sol, SolCall};

sol! {
    #[derive(Debug, PartialEq)]
    struct TransferStruct {
        address sender;
        address receiver;
        uint256 amount;
        string message;
        uint256 timestamp;
        string keyword;
    }

    interface ITransactions {
        function addToBlockchain(address receiver, uint256 amount, string message, string keyword) external;
        function getAllTransactions() external view returns (TransferStruct[] memory);
        function getTransactionCount() external view returns (uint256);
    }
}

pub fn encode_add_to_blockchain(call: &AddToBlockchain) -> Vec<u8> {
    ITransactions::addToBlockchainCall {
        receiver: call.receiver,
        amount: call.amount,
        message: call.message.clone(),
        keyword: call.keyword.clone(),
    }
    .abi_encode()
}

pub fn encode_get_all_transactions() -> Vec<u8> {
    ITransactions::getAllTransactionsCall {}.abi_encode()
}

pub fn encode_get_transaction_count() -> Vec<u8> {
    ITransactions::getTransactionCountCall {}.abi_encode()
}

pub fn decode_all_transactions(data: &[u8]) -> Result<Vec<TransferStruct>, alloy_sol_types::Error> {
    ITransactions::getAllTransactionsCall::abi_decode_returns(data)
}

pub fn decode_transaction_count(data: &[u8]) -> Result<u64, alloy_sol_types::Error> {
    let count = ITransactions::getTransactionCountCall::abi_decode_returns(data)?;
    Ok(count.saturating_to::<u64>())
}

impl TransferStruct {
    pub fn to_record(&self) -> TransactionRecord {
        self.to_record_with(format_timestamp)
    }

    pub fn to_record_with(&self, fmt_time: impl Fn(u64) -> String) -> TransactionRecord {
        TransactionRecord {
            address_to: self.receiver.to_string(),
            address_from: self.sender.to_string(),
            timestamp: fmt_time(self.timestamp.saturating_to::<u64>()),
            message: self.message.clone(),
            keyword: self.keyword.clone(),
            amount: wei_to_ether(self.amount),
        }
    }
}
