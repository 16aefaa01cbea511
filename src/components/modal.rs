//! Modal Components
//!
//! Generic modal panel and the yes/no confirmation dialog built on it.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
}

impl ModalSize {
    fn class(&self) -> &'static str {
        match self {
            ModalSize::Sm => "modal-panel max-w-md",
            ModalSize::Md => "modal-panel max-w-lg",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ConfirmColor {
    #[default]
    Red,
    Blue,
}

impl ConfirmColor {
    fn class(&self) -> &'static str {
        match self {
            ConfirmColor::Red => "confirm-btn confirm-red",
            ConfirmColor::Blue => "confirm-btn confirm-blue",
        }
    }
}

/// Overlay modal; clicking the backdrop or × closes it
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] title: String,
    #[prop(optional)] size: ModalSize,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-root">
                <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
                <div class=size.class()>
                    <div class="modal-header">
                        <h3 class="modal-title">{title.clone()}</h3>
                        <button class="modal-close" title="Close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}

/// Confirmation dialog
///
/// Confirm runs `on_confirm` and then closes; Cancel only closes.
#[component]
pub fn ConfirmModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into, default = "Delete".to_string())] confirm_text: String,
    #[prop(optional)] confirm_color: ConfirmColor,
) -> impl IntoView {
    view! {
        <Modal is_open=is_open on_close=on_close title=title size=ModalSize::Sm>
            <div class="confirm-content">
                <p class="confirm-message">{move || message.get()}</p>
                <div class="confirm-actions">
                    <button class="cancel-btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class=confirm_color.class()
                        on:click=move |_| {
                            on_confirm.run(());
                            on_close.run(());
                        }
                    >
                        {confirm_text.clone()}
                    </button>
                </div>
            </div>
        </Modal>
    }
}
