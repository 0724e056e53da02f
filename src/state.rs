use crate::models::{FormData, FormField, TransactionRecord};
use std::rc::Rc;
use yew::functional::Reducible;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionState {
    pub current_account: Option<String>,
    pub form_data: FormData,
    pub transactions: Vec<TransactionRecord>,
    pub is_loading: bool,
    pub transaction_count: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TransactionAction {
    AccountConnected(String),
    FieldChanged(FormField, String),
    FormCleared,
    LoadingChanged(bool),
    TransactionsLoaded(Vec<TransactionRecord>),
    CountUpdated(u64),
}

impl TransactionState {
    pub fn with_cached_count(count: Option<u64>) -> Self {
        Self { transaction_count: count, ..Self::default() }
    }

    pub fn is_connected(&self) -> bool {
        self.current_account.is_some()
    }

    pub fn apply(&mut self, action: TransactionAction) {
        match action {
            TransactionAction::AccountConnected(account) => self.current_account = Some(account),
            TransactionAction::FieldChanged(field, value) => self.form_data.set(field, value),
            TransactionAction::FormCleared => self.form_data = FormData::default(),
            TransactionAction::LoadingChanged(loading) => self.is_loading = loading,
            TransactionAction::TransactionsLoaded(records) => self.transactions = records,
            TransactionAction::CountUpdated(count) => self.transaction_count = Some(count),
        }
    }
}

impl Reducible for TransactionState {
    type Action = TransactionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: u8) -> TransactionRecord {
        TransactionRecord {
            address_to: format!("to{n}"),
            address_from: format!("from{n}"),
            timestamp: "1/1/2024, 12:00:00 AM".into(),
            message: String::new(),
            keyword: "kw".into(),
            amount: n as f64,
        }
    }

    #[test]
    fn starts_disconnected_with_cached_count() {
        let state = TransactionState::with_cached_count(Some(7));
        assert!(!state.is_connected());
        assert!(!state.is_loading);
        assert_eq!(state.transaction_count, Some(7));
        assert_eq!(state.form_data, FormData::default());
    }

    #[test]
    fn reducer_sets_account_and_fields() {
        let state = Rc::new(TransactionState::default());
        let state = state.reduce(TransactionAction::AccountConnected("0xA".into()));
        let state = state.reduce(TransactionAction::FieldChanged(FormField::Amount, "0.5".into()));
        assert_eq!(state.current_account.as_deref(), Some("0xA"));
        assert_eq!(state.form_data.amount, "0.5");
        assert!(state.form_data.address_to.is_empty());
    }

    #[test]
    fn clearing_form_keeps_other_state() {
        let mut state = TransactionState::default();
        state.apply(TransactionAction::AccountConnected("0xA".into()));
        state.apply(TransactionAction::FieldChanged(FormField::Message, "hi".into()));
        state.apply(TransactionAction::TransactionsLoaded(vec![record(1)]));
        state.apply(TransactionAction::FormCleared);
        assert_eq!(state.form_data, FormData::default());
        assert_eq!(state.transactions.len(), 1);
        assert!(state.is_connected());
    }

    #[test]
    fn loaded_transactions_replace_previous_list() {
        let mut state = TransactionState::default();
        state.apply(TransactionAction::TransactionsLoaded(vec![record(1), record(2)]));
        state.apply(TransactionAction::TransactionsLoaded(vec![record(3)]));
        assert_eq!(state.transactions, vec![record(3)]);
    }
}
