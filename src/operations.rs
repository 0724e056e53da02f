use crate::config::TRANSFER_GAS;
use crate::error::TransactionError;
use crate::gateway::{CountCache, WalletGateway};
use crate::models::{AddToBlockchain, FormData, TransferRequest};
use crate::state::TransactionAction;
use crate::utils::{ether_to_wei, parse_address};
use log::{info, warn};

pub async fn connect_wallet(
    gateway: &dyn WalletGateway,
    dispatch: impl Fn(TransactionAction),
) -> Result<String, TransactionError> {
    if !gateway.is_installed() {
        return Err(TransactionError::WalletAbsent);
    }

    let accounts = gateway.request_accounts().await?;
    let account = accounts.into_iter().next().ok_or(TransactionError::NoAccount)?;
    info!("Wallet connected: {}", account);
    dispatch(TransactionAction::AccountConnected(account.clone()));
    Ok(account)
}

pub async fn get_all_transactions(
    gateway: &dyn WalletGateway,
    dispatch: impl Fn(TransactionAction),
) -> Result<usize, TransactionError> {
    if !gateway.is_installed() {
        return Err(TransactionError::WalletAbsent);
    }

    let records: Vec<_> = gateway
        .get_all_transactions()
        .await?
        .iter()
        .map(|t| t.to_record())
        .collect();
    let count = records.len();
    info!("Fetched {} transactions", count);
    dispatch(TransactionAction::TransactionsLoaded(records));
    Ok(count)
}

/// Silent start-up check: adopts an already authorized account if there is one.
pub async fn check_if_wallet_is_connected(
    gateway: &dyn WalletGateway,
    dispatch: impl Fn(TransactionAction),
) -> Result<Option<String>, TransactionError> {
    if !gateway.is_installed() {
        return Err(TransactionError::WalletAbsent);
    }

    match gateway.accounts().await?.into_iter().next() {
        Some(account) => {
            dispatch(TransactionAction::AccountConnected(account.clone()));
            get_all_transactions(gateway, &dispatch).await?;
            Ok(Some(account))
        }
        None => {
            info!("No accounts found");
            Ok(None)
        }
    }
}

pub async fn check_if_transactions_exist(
    gateway: &dyn WalletGateway,
    cache: &dyn CountCache,
    dispatch: impl Fn(TransactionAction),
) -> Result<u64, TransactionError> {
    if !gateway.is_installed() {
        return Err(TransactionError::WalletAbsent);
    }

    let count = gateway.get_transaction_count().await?;
    cache.save(count);
    dispatch(TransactionAction::CountUpdated(count));
    Ok(count)
}

/// Sends the value transfer, records it in the contract and waits for the
/// record to confirm. Returns the refreshed transaction count.
pub async fn send_transaction(
    gateway: &dyn WalletGateway,
    cache: &dyn CountCache,
    account: Option<&str>,
    form: &FormData,
    dispatch: impl Fn(TransactionAction),
) -> Result<u64, TransactionError> {
    if !gateway.is_installed() {
        return Err(TransactionError::WalletAbsent);
    }

    let from = account.ok_or(TransactionError::NotConnected)?.to_string();
    let parsed_amount = ether_to_wei(&form.amount)?;
    let receiver = parse_address(&form.address_to)?;

    info!("Sending {} ETH from {} to {}", form.amount.trim(), from, receiver);
    gateway
        .send_transaction(TransferRequest {
            from: from.clone(),
            to: receiver,
            gas: TRANSFER_GAS,
            value: parsed_amount,
        })
        .await?;

    let pending = gateway
        .add_to_blockchain(
            &from,
            AddToBlockchain {
                receiver,
                amount: parsed_amount,
                message: form.message.clone(),
                keyword: form.keyword.clone(),
            },
        )
        .await?;

    dispatch(TransactionAction::LoadingChanged(true));
    info!("Loading - {}", pending.hash);
    let confirmed = gateway.wait(&pending).await;
    dispatch(TransactionAction::LoadingChanged(false));
    if let Err(e) = confirmed {
        warn!("Transaction {} was not confirmed: {}", pending.hash, e);
        return Err(e);
    }
    info!("Success - {}", pending.hash);

    dispatch(TransactionAction::FormCleared);

    let count = gateway.get_transaction_count().await?;
    cache.save(count);
    dispatch(TransactionAction::CountUpdated(count));
    Ok(count)
}
