use crate::error::TransactionError;
use crate::gateway::Services;
use crate::models::{FormField, ToastKind};
use crate::operations;
use crate::state::{TransactionAction, TransactionState};
use futures_util::future::join;
use log::{debug, error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// What descendants of `TransactionProvider` can read and trigger.
#[derive(Clone, PartialEq)]
pub struct TransactionContext {
    pub state: UseReducerHandle<TransactionState>,
    pub connect_wallet: Callback<()>,
    pub send_transaction: Callback<()>,
    pub get_all_transactions: Callback<()>,
    pub handle_change: Callback<(InputEvent, FormField)>,
}

#[derive(Properties, PartialEq)]
pub struct TransactionProviderProps {
    pub services: Services,
    pub push_toast: Callback<(String, ToastKind)>,
    #[prop_or_default]
    pub children: Children,
}

fn report(err: TransactionError, push_toast: &Callback<(String, ToastKind)>) {
    if err.is_wallet_absent() || matches!(err, TransactionError::NotConnected) {
        push_toast.emit((err.to_string(), ToastKind::Warning));
        return;
    }
    if err.is_user_rejection() {
        info!("Request declined in wallet: {}", err);
        push_toast.emit(("Request cancelled in your wallet".into(), ToastKind::Info));
        return;
    }
    error!("{}", err);
    push_toast.emit((err.to_string(), ToastKind::Error));
}

fn reload_page() {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.location().reload() {
                error!("Page reload failed: {:?}", e);
            }
        }
        None => error!("Window not available for reload"),
    }
}

#[function_component(TransactionProvider)]
pub fn transaction_provider(props: &TransactionProviderProps) -> Html {
    let state = {
        let cache = props.services.cache.clone();
        use_reducer(move || TransactionState::with_cached_count(cache.load()))
    };

    {
        let services = props.services.clone();
        let push_toast = props.push_toast.clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let dispatch = |action: TransactionAction| dispatcher.dispatch(action);
                let (connected, counted) = join(
                    operations::check_if_wallet_is_connected(services.gateway.as_ref(), &dispatch),
                    operations::check_if_transactions_exist(
                        services.gateway.as_ref(),
                        services.cache.as_ref(),
                        &dispatch,
                    ),
                )
                .await;

                match connected {
                    Ok(Some(account)) => info!("Restored wallet session for {}", account),
                    Ok(None) => {}
                    Err(e) => report(e, &push_toast),
                }
                match counted {
                    Ok(count) => debug!("Contract holds {} transactions", count),
                    Err(TransactionError::WalletAbsent) => {}
                    Err(e) => error!("Failed to read transaction count: {}", e),
                }
            });
            || ()
        });
    }

    let connect_wallet = {
        let services = props.services.clone();
        let push_toast = props.push_toast.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| {
            let services = services.clone();
            let push_toast = push_toast.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let dispatch = move |action: TransactionAction| dispatcher.dispatch(action);
                if let Err(e) =
                    operations::connect_wallet(services.gateway.as_ref(), dispatch).await
                {
                    report(e, &push_toast);
                }
            });
        })
    };

    let get_all_transactions = {
        let services = props.services.clone();
        let push_toast = props.push_toast.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| {
            let services = services.clone();
            let push_toast = push_toast.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let dispatch = move |action: TransactionAction| dispatcher.dispatch(action);
                if let Err(e) =
                    operations::get_all_transactions(services.gateway.as_ref(), dispatch).await
                {
                    report(e, &push_toast);
                }
            });
        })
    };

    let send_transaction = {
        let services = props.services.clone();
        let push_toast = props.push_toast.clone();
        let state = state.clone();
        Callback::from(move |_: ()| {
            let services = services.clone();
            let push_toast = push_toast.clone();
            let dispatcher = state.dispatcher();
            let form = state.form_data.clone();
            let account = state.current_account.clone();
            spawn_local(async move {
                let dispatch = move |action: TransactionAction| dispatcher.dispatch(action);
                match operations::send_transaction(
                    services.gateway.as_ref(),
                    services.cache.as_ref(),
                    account.as_deref(),
                    &form,
                    dispatch,
                )
                .await
                {
                    Ok(count) => {
                        info!("Transfer recorded, contract now holds {} transactions", count);
                        reload_page();
                    }
                    Err(e) => report(e, &push_toast),
                }
            });
        })
    };

    let handle_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(e, field): (InputEvent, FormField)| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                dispatcher.dispatch(TransactionAction::FieldChanged(field, input.value()));
            }
        })
    };

    let context = TransactionContext {
        state,
        connect_wallet,
        send_transaction,
        get_all_transactions,
        handle_change,
    };

    html! {
        <ContextProvider<TransactionContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<TransactionContext>>
    }
}

#[hook]
pub fn use_transactions() -> Option<TransactionContext> {
    use_context::<TransactionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn reported(err: TransactionError) -> (String, ToastKind) {
        let toasts = Rc::new(RefCell::new(vec![]));
        let push_toast = {
            let toasts = toasts.clone();
            Callback::from(move |toast: (String, ToastKind)| toasts.borrow_mut().push(toast))
        };
        report(err, &push_toast);
        let mut toasts = toasts.borrow_mut();
        assert_eq!(toasts.len(), 1);
        toasts.remove(0)
    }

    #[test]
    fn declined_request_is_not_an_error_toast() {
        let err = TransactionError::Rpc { code: 4001, message: "User denied".into() };
        assert_eq!(
            reported(err),
            ("Request cancelled in your wallet".to_string(), ToastKind::Info)
        );
    }

    #[test]
    fn missing_wallet_and_account_warn() {
        assert_eq!(
            reported(TransactionError::WalletAbsent),
            ("Please, install Metamask!".to_string(), ToastKind::Warning)
        );
        assert_eq!(
            reported(TransactionError::NotConnected),
            ("Connect your wallet before sending".to_string(), ToastKind::Warning)
        );
    }

    #[test]
    fn node_failures_show_their_text() {
        let err = TransactionError::Rpc { code: -32000, message: "nonce too low".into() };
        assert_eq!(
            reported(err),
            ("rpc error -32000: nonce too low".to_string(), ToastKind::Error)
        );
    }
}
