use yew::prelude::*;
use crate::models::TransactionRecord;
use crate::provider::use_transactions;
use crate::utils::{format_eth, shorten_address};

#[derive(Properties, PartialEq)]
struct TransactionCardProps {
    tx: TransactionRecord,
}

#[function_component(TransactionCard)]
fn transaction_card(props: &TransactionCardProps) -> Html {
    let tx = &props.tx;
    html! {
        <div class="tx-card">
            <div class="tx-header">
                <span class="tx-addr" title={tx.address_from.clone()}>
                    {"From: "}{ shorten_address(&tx.address_from) }
                </span>
                <span class="tx-addr" title={tx.address_to.clone()}>
                    {"To: "}{ shorten_address(&tx.address_to) }
                </span>
            </div>
            <div class="tx-body">
                <p class="tx-amt">{ format_eth(tx.amount) }</p>
                if !tx.message.is_empty() {
                    <p class="tx-message">{"Message: "}{ &tx.message }</p>
                }
                <span class="tx-keyword">{ &tx.keyword }</span>
                <p class="tx-time">{ &tx.timestamp }</p>
            </div>
        </div>
    }
}

#[function_component(Transactions)]
pub fn transactions() -> Html {
    let Some(ctx) = use_transactions() else {
        return html! {};
    };

    let refresh = ctx.get_all_transactions.reform(|_: MouseEvent| ());

    html! {
        <div class="screen-container" role="main" aria-label="Transactions">
            if ctx.state.is_connected() {
                <h3 class="section-title">{"Latest Transactions"}</h3>
                if ctx.state.transactions.is_empty() {
                    <p class="info-text">{"No transactions yet."}</p>
                } else {
                    <div class="tx-grid">
                        { for ctx.state.transactions.iter().rev().map(|tx| html! {
                            <TransactionCard tx={tx.clone()} />
                        })}
                    </div>
                }
                <button onclick={refresh} class="btn btn-sm">{"Refresh"}</button>
            } else {
                <h3 class="section-title">{"Connect your account to see the latest transactions"}</h3>
            }
        </div>
    }
}
