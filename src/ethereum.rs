use crate::config::Config;
use crate::contract::{
    decode_all_transactions, decode_transaction_count, encode_add_to_blockchain,
    encode_get_all_transactions, encode_get_transaction_count, TransferStruct,
};
use crate::error::TransactionError;
use crate::gateway::WalletGateway;
use crate::models::{AddToBlockchain, PendingTransaction, TransferRequest};
use alloy_primitives::{hex, Address};
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Promise, Reflect};
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

/// Internal JSON-RPC error code, used when the rejection carries none.
const UNKNOWN_RPC_CODE: i64 = -32603;

#[derive(Serialize)]
struct RpcRequest<'a> {
    method: &'a str,
    params: Value,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Receipt {
    status: Option<String>,
    block_number: Option<String>,
}

/// `window.ethereum` (EIP-1193) plus the transactions contract behind it.
pub struct Eip1193Gateway {
    config: Config,
}

impl Eip1193Gateway {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn provider() -> Option<JsValue> {
        let window = window()?;
        let ethereum = Reflect::get(&window, &"ethereum".into()).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            None
        } else {
            Some(ethereum)
        }
    }

    async fn request(&self, method: &str, params: Value) -> Result<JsValue, TransactionError> {
        let ethereum = Self::provider().ok_or(TransactionError::WalletAbsent)?;
        let request_fn = Reflect::get(&ethereum, &"request".into())
            .map_err(rpc_error)?
            .dyn_into::<Function>()
            .map_err(|_| TransactionError::WalletAbsent)?;

        let args = RpcRequest { method, params }
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;

        debug!("ethereum.request {}", method);
        let promise = request_fn.call1(&ethereum, &args).map_err(rpc_error)?;
        JsFuture::from(Promise::from(promise)).await.map_err(|e| {
            let err = rpc_error(e);
            error!("{} failed: {}", method, err);
            err
        })
    }

    async fn call_contract(&self, data: Vec<u8>) -> Result<Vec<u8>, TransactionError> {
        let params = json!([
            {
                "to": self.config.contract_address.to_string(),
                "data": hex::encode_prefixed(data),
            },
            "latest"
        ]);
        let result = self.request("eth_call", params).await?;
        let raw: String = serde_wasm_bindgen::from_value(result)?;
        Ok(hex::decode(raw)?)
    }
}

#[async_trait(?Send)]
impl WalletGateway for Eip1193Gateway {
    fn is_installed(&self) -> bool {
        Self::provider().is_some()
    }

    async fn request_accounts(&self) -> Result<Vec<String>, TransactionError> {
        let result = self.request("eth_requestAccounts", json!([])).await?;
        Ok(serde_wasm_bindgen::from_value(result)?)
    }

    async fn accounts(&self) -> Result<Vec<String>, TransactionError> {
        let result = self.request("eth_accounts", json!([])).await?;
        Ok(serde_wasm_bindgen::from_value(result)?)
    }

    async fn send_transaction(&self, request: TransferRequest) -> Result<String, TransactionError> {
        let result = self
            .request("eth_sendTransaction", transfer_params(&request))
            .await?;
        let hash: String = serde_wasm_bindgen::from_value(result)?;
        info!("Value transfer submitted: {}", hash);
        Ok(hash)
    }

    async fn get_all_transactions(&self) -> Result<Vec<TransferStruct>, TransactionError> {
        let data = self.call_contract(encode_get_all_transactions()).await?;
        Ok(decode_all_transactions(&data)?)
    }

    async fn get_transaction_count(&self) -> Result<u64, TransactionError> {
        let data = self.call_contract(encode_get_transaction_count()).await?;
        Ok(decode_transaction_count(&data)?)
    }

    async fn add_to_blockchain(
        &self,
        from: &str,
        call: AddToBlockchain,
    ) -> Result<PendingTransaction, TransactionError> {
        let params = record_params(from, &call, self.config.contract_address);
        let result = self.request("eth_sendTransaction", params).await?;
        let hash: String = serde_wasm_bindgen::from_value(result)?;
        info!("addToBlockchain submitted: {}", hash);
        Ok(PendingTransaction { hash })
    }

    async fn wait(&self, pending: &PendingTransaction) -> Result<(), TransactionError> {
        loop {
            let result = self
                .request("eth_getTransactionReceipt", json!([pending.hash]))
                .await?;
            let receipt = serde_wasm_bindgen::from_value::<Option<Receipt>>(result)?;
            match receipt_outcome(&pending.hash, receipt) {
                Some(outcome) => return outcome,
                None => TimeoutFuture::new(self.config.receipt_poll_interval_ms).await,
            }
        }
    }
}

fn transfer_params(request: &TransferRequest) -> Value {
    json!([{
        "from": request.from,
        "to": request.to.to_string(),
        "gas": request.gas,
        "value": format!("0x{:x}", request.value),
    }])
}

fn record_params(from: &str, call: &AddToBlockchain, contract: Address) -> Value {
    json!([{
        "from": from,
        "to": contract.to_string(),
        "data": hex::encode_prefixed(encode_add_to_blockchain(call)),
    }])
}

/// `None` while the transaction is still unmined.
fn receipt_outcome(hash: &str, receipt: Option<Receipt>) -> Option<Result<(), TransactionError>> {
    let receipt = receipt?;
    if receipt.status.as_deref() == Some("0x0") {
        return Some(Err(TransactionError::Reverted(hash.to_string())));
    }
    info!(
        "Transaction {} confirmed in block {}",
        hash,
        receipt.block_number.as_deref().unwrap_or("?")
    );
    Some(Ok(()))
}

fn rpc_error(err: JsValue) -> TransactionError {
    let code = Reflect::get(&err, &"code".into())
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64)
        .unwrap_or(UNKNOWN_RPC_CODE);
    TransactionError::Rpc { code, message: get_error_message(err) }
}

pub fn get_error_message(res: JsValue) -> String {
    for key in ["message", "error"] {
        if let Ok(val) = Reflect::get(&res, &key.into()) {
            if let Some(s) = val.as_string() {
                return s;
            }
        }
    }

    if let Some(s) = res.as_string() {
        return s;
    }

    if let Ok(str_val) = js_sys::JSON::stringify(&res) {
        if let Some(s) = str_val.as_string() {
            return s;
        }
    }

    "Unknown error (failed to extract message)".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TRANSFER_GAS;
    use crate::contract::ITransactions;
    use crate::utils::ether_to_wei;
    use alloy_primitives::U256;
    use alloy_sol_types::SolCall;

    const HASH: &str = "0xfeed";

    fn receipt(value: Value) -> Option<Receipt> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn transfer_params_use_hex_wei_and_fixed_gas() {
        let params = transfer_params(&TransferRequest {
            from: "0xA".into(),
            to: Address::with_last_byte(9),
            gas: TRANSFER_GAS,
            value: ether_to_wei("0.25").unwrap(),
        });
        assert_eq!(
            params,
            json!([{
                "from": "0xA",
                "to": Address::with_last_byte(9).to_string(),
                "gas": "0x5208",
                "value": "0x3782dace9d90000",
            }])
        );
    }

    #[test]
    fn zero_value_is_still_hex() {
        let params = transfer_params(&TransferRequest {
            from: "0xA".into(),
            to: Address::ZERO,
            gas: TRANSFER_GAS,
            value: U256::ZERO,
        });
        assert_eq!(params[0]["value"], "0x0");
    }

    #[test]
    fn record_params_target_contract_with_calldata() {
        let contract = Address::with_last_byte(0xcc);
        let call = AddToBlockchain {
            receiver: Address::with_last_byte(9),
            amount: U256::from(5u64),
            message: "hi".into(),
            keyword: "wave".into(),
        };
        let params = record_params("0xA", &call, contract);
        let tx = &params[0];
        assert_eq!(tx["from"], "0xA");
        assert_eq!(tx["to"], contract.to_string());
        assert!(tx.get("value").is_none());

        let data = hex::decode(tx["data"].as_str().unwrap()).unwrap();
        let decoded = ITransactions::addToBlockchainCall::abi_decode(&data).unwrap();
        assert_eq!(decoded.receiver, call.receiver);
        assert_eq!(decoded.amount, call.amount);
        assert_eq!(decoded.message, "hi");
        assert_eq!(decoded.keyword, "wave");
    }

    #[test]
    fn failed_receipt_is_reverted() {
        let mined = receipt(json!({ "status": "0x0", "blockNumber": "0x10" }));
        let outcome = receipt_outcome(HASH, mined);
        assert!(matches!(outcome, Some(Err(TransactionError::Reverted(h))) if h == HASH));
    }

    #[test]
    fn successful_receipt_confirms() {
        let mined = receipt(json!({ "status": "0x1", "blockNumber": "0x10" }));
        let outcome = receipt_outcome(HASH, mined);
        assert!(matches!(outcome, Some(Ok(()))));

        // pre-byzantium receipts carry no status
        let outcome = receipt_outcome(HASH, receipt(json!({ "blockNumber": "0x10" })));
        assert!(matches!(outcome, Some(Ok(()))));
    }

    #[test]
    fn missing_receipt_keeps_polling() {
        assert!(receipt(Value::Null).is_none());
        assert!(receipt_outcome(HASH, receipt(Value::Null)).is_none());
    }
}
