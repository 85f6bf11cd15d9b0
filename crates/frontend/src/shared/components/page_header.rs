use leptos::prelude::*;

/// PageHeader component - reusable header for list pages
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Class for the title element, on top of the base class
    #[prop(optional, into)]
    title_class: MaybeProp<String>,

    /// Header actions (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class=move || format!("page-header__title {}", title_class.get().unwrap_or_default())>
                        {title}
                    </h1>
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
