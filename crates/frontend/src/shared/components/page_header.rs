use leptos::prelude::*;

/// Sticky screen header: title and subtitle on the left, actions on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Header actions (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__content">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <p class="page-header__subtitle">{s}</p>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </header>
    }
}
