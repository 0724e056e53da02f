use yew::prelude::*;
use crate::models::{FormField, ToastKind};
use crate::provider::use_transactions;

#[derive(Properties, PartialEq)]
pub struct SendFormProps {
    pub push_toast: Callback<(String, ToastKind)>,
}

#[function_component(SendForm)]
pub fn send_form(props: &SendFormProps) -> Html {
    let Some(ctx) = use_transactions() else {
        return html! {};
    };

    let is_loading = ctx.state.is_loading;
    let form = ctx.state.form_data.clone();

    let onsubmit = {
        let form = form.clone();
        let send = ctx.send_transaction.clone();
        let push_toast = props.push_toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.is_complete() {
                push_toast.emit(("Please fill in all fields".into(), ToastKind::Error));
                return;
            }
            push_toast.emit(("Confirm both requests in your wallet".into(), ToastKind::Info));
            send.emit(());
        })
    };

    html! {
        <form class="send-form" {onsubmit} aria-label="Send transaction form">
            { for FormField::ALL.iter().map(|field| {
                let field = *field;
                let handle_change = ctx.handle_change.clone();
                let oninput = Callback::from(move |e: InputEvent| handle_change.emit((e, field)));
                html! {
                    <input
                        name={field.name()}
                        type={field.input_type()}
                        step={(field == FormField::Amount).then_some("0.0001")}
                        placeholder={field.placeholder()}
                        value={form.get(field).to_string()}
                        {oninput}
                        disabled={is_loading}
                        class="input"
                    />
                }
            })}

            <div class="button-group">
                if is_loading {
                    <div class="loader" aria-busy="true"></div>
                } else {
                    <button type="submit" class="btn btn-prominent">
                        {"Send now"}
                    </button>
                }
            </div>
        </form>
    }
}
