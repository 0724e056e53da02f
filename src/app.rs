use crate::components::toast::use_toast;
use crate::components::{Transactions, Welcome};
use crate::config::Config;
use crate::ethereum::Eip1193Gateway;
use crate::gateway::Services;
use crate::provider::TransactionProvider;
use crate::storage::LocalCountCache;
use log::info;
use std::rc::Rc;
use yew::prelude::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| {
        let config = Config::from_env();
        info!("Using transactions contract {}", config.contract_address);
        Services {
            gateway: Rc::new(Eip1193Gateway::new(config)),
            cache: Rc::new(LocalCountCache),
        }
    });
    let (push_toast, render_toast) = use_toast();

    html! {
        <div class="app-container">
            <div class="app-title">{ format!("Transfer Ledger v{}", VERSION) }</div>
            <TransactionProvider services={(*services).clone()} push_toast={push_toast.clone()}>
                <main class="main-content">
                    <Welcome push_toast={push_toast.clone()} />
                    <Transactions />
                </main>
            </TransactionProvider>
            { render_toast }
        </div>
    }
}
