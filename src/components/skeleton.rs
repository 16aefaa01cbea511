//! Loading Skeletons
//!
//! Placeholders shown while the forms list is being fetched.

use leptos::prelude::*;

#[component]
pub fn TableSkeleton(
    #[prop(default = 5)] rows: usize,
    #[prop(default = 5)] columns: usize,
) -> impl IntoView {
    view! {
        <div class="modern-card skeleton-table">
            <div class="skeleton-row skeleton-head">
                {(0..columns).map(|_| view! { <div class="skeleton-cell pulse"></div> }).collect_view()}
            </div>
            {(0..rows).map(|_| view! {
                <div class="skeleton-row">
                    {(0..columns).map(|_| view! { <div class="skeleton-cell pulse"></div> }).collect_view()}
                </div>
            }).collect_view()}
        </div>
    }
}

/// Page header placeholder plus table skeleton
#[component]
pub fn DashboardSkeleton() -> impl IntoView {
    view! {
        <div class="dashboard loading">
            <div class="dashboard-header">
                <div>
                    <div class="skeleton-bar pulse w-64"></div>
                    <div class="skeleton-bar pulse w-96"></div>
                </div>
                <div class="skeleton-button pulse"></div>
            </div>
            <TableSkeleton rows=5 columns=5 />
        </div>
    }
}
