use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::notice::Notice;

/// CSS class, icon name and text of the banner for `notice`
fn banner_parts(notice: Notice) -> (&'static str, &'static str, String) {
    let class = notice.css_class();
    let icon_name = if notice.is_error() { "alert-circle" } else { "check-circle" };
    (class, icon_name, notice.text)
}

/// Success/error banner; renders nothing while `notice` is `None`
#[component]
pub fn NoticeBar(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    view! {
        {move || notice.get().map(|n| {
            let (class, icon_name, text) = banner_parts(n);
            view! {
                <div class=class role="status">
                    <span class="alert__icon">{icon(icon_name)}</span>
                    <p class="alert__text">{text}</p>
                </div>
            }
        })}
    }
}
