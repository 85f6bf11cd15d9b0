//! PageFrame — standard root wrapper for every routed page.
//!
//! Sets `id` (`"{entity}--{category}"`) and `data-page-category` on the root
//! element, plus `data-theme` so theme stylesheets can scope page rules.

use super::page_standard::*;
use crate::shared::theme::Theme;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a030_survey--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Current theme.
    #[prop(into)]
    theme: Signal<Theme>,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    view! {
        <div
            id=page_id
            class=base_class
            data-page-category=category
            data-theme=move || theme.get().as_str()
        >
            {children()}
        </div>
    }
}
