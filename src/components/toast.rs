use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::debug;
use crate::models::ToastKind;

const TOAST_MS: u32 = 6_000;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: String,
    #[prop_or_default]
    pub kind: ToastKind,
    pub on_close: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let kind_class = props.kind.class();
    let icon_mask = props.kind.icon_mask();
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class={classes!("toast", kind_class)} role="alert">
            <span class="toast-icon" style={format!("-webkit-mask-image: url(\"{}\"); mask-image: url(\"{}\");", icon_mask, icon_mask)}></span>
            <span class="toast-message">{ &props.message }</span>
            <button class="toast-close" onclick={close}>{ "×" }</button>
        </div>
    }
}

/// Alert surface shared by the app: returns the push callback and the markup.
#[hook]
pub fn use_toast() -> (Callback<(String, ToastKind)>, Html) {
    let toast = use_state(|| None::<(String, ToastKind)>);
    {
        let toast = toast.clone();
        use_effect_with(toast.clone(), move |t| {
            let handle = t.is_some().then(|| {
                let toast = toast.clone();
                Timeout::new(TOAST_MS, move || toast.set(None))
            });
            move || drop(handle)
        });
    }

    let clear_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let push_toast = {
        let toast = toast.clone();
        Callback::from(move |(msg, kind): (String, ToastKind)| {
            debug!("Toast: {} ({:?})", msg, kind);
            toast.set(Some((msg, kind)))
        })
    };

    let render_toast = html! {
        <div class="toast-container">
            if let Some((msg, kind)) = &*toast {
                <div class="toast-overlay" onclick={clear_toast.reform(|_: MouseEvent| ())}></div>
                <div class="toast-center">
                    <Toast message={msg.clone()} kind={kind.clone()} on_close={clear_toast.clone()} />
                </div>
            }
        </div>
    };

    (push_toast, render_toast)
}
