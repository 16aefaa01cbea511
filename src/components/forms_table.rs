//! Forms Table Component
//!
//! Wide layout: one table row per form with inline action links.

use leptos::prelude::*;

use crate::components::StatusBadge;
use crate::models::{Form, FormId};
use crate::routes::Route;

/// Edit / Preview / Analytics links shared by rows and cards
#[component]
pub fn FormLinks(form_id: FormId, #[prop(optional)] compact: bool) -> impl IntoView {
    let links = [
        (Route::Edit(form_id.clone()), "✎", "Edit", "Edit Form", "row-link indigo"),
        (Route::Preview(form_id.clone()), "👁", "Preview", "Preview Form", "row-link emerald"),
        (Route::Analytics(form_id), "📊", "Analytics", "View Analytics", "row-link purple"),
    ];
    // Table rows hide the text labels on narrower screens
    let label_class = if compact { "row-link-label" } else { "row-link-label wide-only" };

    links
        .into_iter()
        .map(|(route, icon, label, title, class)| {
            view! {
                <a class=class href=route.href() title=title>
                    <span class="row-link-icon">{icon}</span>
                    <span class=label_class>{label}</span>
                </a>
            }
        })
        .collect_view()
}

#[component]
fn FormRow(form: Form) -> impl IntoView {
    view! {
        <tr class="form-row">
            <td>
                <div class="form-details">
                    <div class="form-icon">"📄"</div>
                    <div class="form-text">
                        <div class="form-title">{form.title.clone()}</div>
                        <div class="form-description">{form.description_or_placeholder().to_string()}</div>
                    </div>
                </div>
            </td>
            <td><StatusBadge status=form.status /></td>
            <td>
                <span class="form-responses">
                    <span class="responses-icon">"📊"</span>
                    {form.submissions_count}
                </span>
            </td>
            <td class="form-created">{form.created_label()}</td>
            <td class="form-actions">
                <div class="row-links">
                    <FormLinks form_id=form.id.clone() />
                </div>
            </td>
        </tr>
    }
}

#[component]
pub fn FormsTable(#[prop(into)] forms: Signal<Vec<Form>>) -> impl IntoView {
    view! {
        <div class="modern-card forms-table-wrapper wide-only">
            <table class="forms-table">
                <thead>
                    <tr>
                        <th>"Form Details"</th>
                        <th>"Status"</th>
                        <th>"Responses"</th>
                        <th>"Created"</th>
                        <th class="align-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || forms.get()
                        key=|form| form.id.clone()
                        children=move |form| view! { <FormRow form=form /> }
                    />
                </tbody>
            </table>
        </div>
    }
}
