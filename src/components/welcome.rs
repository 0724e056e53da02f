use yew::prelude::*;
use crate::components::SendForm;
use crate::models::ToastKind;
use crate::provider::use_transactions;
use crate::utils::shorten_address;

#[derive(Properties, PartialEq)]
pub struct WelcomeProps {
    pub push_toast: Callback<(String, ToastKind)>,
}

#[function_component(Welcome)]
pub fn welcome(props: &WelcomeProps) -> Html {
    let Some(ctx) = use_transactions() else {
        return html! {};
    };

    let on_connect = ctx.connect_wallet.reform(|_: MouseEvent| ());
    let account = ctx.state.current_account.clone();

    html! {
        <div class="screen-container home-centered" role="main">
            <div class="home-inner">
                <h1 class="home-title">{"Send Crypto across the world"}</h1>
                <p class="home-subtitle">{"Explore the crypto world. Buy and sell cryptocurrencies easily."}</p>

                { match &account {
                    None => html! {
                        <button onclick={on_connect} class="btn btn-primary" aria-label="Connect your wallet">
                            {"Connect Wallet"}
                        </button>
                    },
                    Some(addr) => html! {
                        <div class="account-card" aria-live="polite">
                            <span class="account-label">{"Address"}</span>
                            <code class="account-address" title={addr.clone()}>{ shorten_address(addr) }</code>
                            <span class="account-network">{"Ethereum"}</span>
                        </div>
                    },
                }}

                <SendForm push_toast={props.push_toast.clone()} />
            </div>
        </div>
    }
}
