use alloy_primitives::{Address, U256};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub address_to: String,
    pub amount: String,
    pub keyword: String,
    pub message: String,
}

impl FormData {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::AddressTo => self.address_to = value,
            FormField::Amount => self.amount = value,
            FormField::Keyword => self.keyword = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::AddressTo => &self.address_to,
            FormField::Amount => &self.amount,
            FormField::Keyword => &self.keyword,
            FormField::Message => &self.message,
        }
    }

    pub fn is_complete(&self) -> bool {
        FormField::ALL.iter().all(|f| !self.get(*f).trim().is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    AddressTo,
    Amount,
    Keyword,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::AddressTo,
        FormField::Amount,
        FormField::Keyword,
        FormField::Message,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::AddressTo => "addressTo",
            FormField::Amount => "amount",
            FormField::Keyword => "keyword",
            FormField::Message => "message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::AddressTo => "Address To",
            FormField::Amount => "Amount (ETH)",
            FormField::Keyword => "Keyword (Gif)",
            FormField::Message => "Enter Message",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::Amount => "number",
            _ => "text",
        }
    }
}

/// A transfer as shown in the history list.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRecord {
    pub address_to: String,
    pub address_from: String,
    pub timestamp: String,
    pub message: String,
    pub keyword: String,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransferRequest {
    pub from: String,
    pub to: Address,
    pub gas: &'static str,
    pub value: U256,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AddToBlockchain {
    pub receiver: Address,
    pub amount: U256,
    pub message: String,
    pub keyword: String,
}

/// Hash of a submitted transaction still waiting for its receipt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTransaction {
    pub hash: String,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub enum ToastKind {
    #[default]
    Error,
    Success,
    Warning,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Error => "toast-error",
            ToastKind::Success => "toast-success",
            ToastKind::Warning => "toast-warning",
            ToastKind::Info => "toast-info",
        }
    }
    pub fn icon_mask(&self) -> &'static str {
        match self {
            ToastKind::Error => "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='none' stroke='%23f87171' stroke-width='2'%3E%3Ccircle cx='12' cy='12' r='10'%3E%3C/circle%3E%3Cline x1='15' y1='9' x2='9' y2='15'%3E%3C/line%3E%3Cline x1='9' y1='9' x2='15' y2='15'%3E%3C/line%3E%3C/svg%3E",
            ToastKind::Success => "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='none' stroke='%232dd4bf' stroke-width='2'%3E%3Cpolyline points='20 6 9 17 4 12'%3E%3C/polyline%3E%3C/svg%3E",
            ToastKind::Warning => "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='none' stroke='%23fbbf24' stroke-width='2'%3E%3Cpath d='M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z'%3E%3C/path%3E%3C/svg%3E",
            ToastKind::Info => "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='none' stroke='%236b7280' stroke-width='2'%3E%3Ccircle cx='12' cy='12' r='10'%3E%3C/circle%3E%3Cpath d='M12 16v-4m0-4h.01'%3E%3C/path%3E%3C/svg%3E",
        }
    }
}
