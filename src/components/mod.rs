pub mod send_form;
pub mod toast;
pub mod transactions;
pub mod welcome;

pub use send_form::SendForm;
pub use transactions::Transactions;
pub use welcome::Welcome;
