//! Form Card Component
//!
//! Compact layout: one card per form, with the action menu.

use leptos::prelude::*;

use crate::components::{ActionMenu, FormLinks, StatusBadge};
use crate::models::Form;

#[component]
fn FormCard(form: Form) -> impl IntoView {
    view! {
        <div class="modern-card form-card">
            <div class="form-card-head">
                <div class="form-details">
                    <div class="form-icon">"📄"</div>
                    <div class="form-text">
                        <h3 class="form-title truncate">{form.title.clone()}</h3>
                        <p class="form-description truncate">{form.description_or_placeholder().to_string()}</p>
                    </div>
                </div>
                <ActionMenu form=form.clone() />
            </div>

            <div class="form-card-meta">
                <div class="form-card-stats">
                    <StatusBadge status=form.status />
                    <span class="form-responses">
                        <span class="responses-icon">"📊"</span>
                        {format!("{} responses", form.submissions_count)}
                    </span>
                </div>
                <span class="form-created">{form.created_short_label()}</span>
            </div>

            <div class="row-links">
                <FormLinks form_id=form.id.clone() compact=true />
            </div>
        </div>
    }
}

#[component]
pub fn FormCards(#[prop(into)] forms: Signal<Vec<Form>>) -> impl IntoView {
    view! {
        <div class="form-cards compact-only">
            <For
                each=move || forms.get()
                key=|form| form.id.clone()
                children=move |form| view! { <FormCard form=form /> }
            />
        </div>
    }
}
