pub mod preview;
pub mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

use crate::domain::a001_image::ui::dashboard::DashboardVm;
use crate::shared::icons::icon;
use preview::read_data_uri;
use state::UploaderState;

const FILE_INPUT_ID: &str = "image-file-input";

/// Pick one image, preview it, hand it to the dashboard for upload
#[component]
pub fn ImageUploader(
    vm: DashboardVm,
    /// Dashboard list fetch in flight; blocks the upload trigger
    #[prop(into)]
    is_loading: Signal<bool>,
) -> impl IntoView {
    let state = RwSignal::new_local(UploaderState::<web_sys::File>::default());
    let input_ref: NodeRef<leptos::html::Input> = NodeRef::new();

    let reset_input = move || {
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    };

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(file) = input.and_then(|i| i.files()).and_then(|files| files.get(0)) else {
            return;
        };

        let mut ticket = None;
        state.update(|s| ticket = s.select(file.clone(), &file.type_()));
        let Some(ticket) = ticket else {
            log::debug!("ignored non-image file {} ({})", file.name(), file.type_());
            return;
        };

        spawn_local(async move {
            match read_data_uri(&file).await {
                Ok(uri) => state.update(|s| {
                    s.preview_ready(ticket, uri);
                }),
                Err(e) => log::warn!("preview for {} failed: {}", file.name(), e),
            }
        });
    };

    let handle_upload = move |_| {
        let mut file = None;
        state.update(|s| file = s.begin_upload());
        let Some(file) = file else {
            return;
        };
        spawn_local(async move {
            vm.upload(file).await;
            state.update(|s| s.finish_upload());
            reset_input();
        });
    };

    let upload_disabled = Signal::derive(move || !state.with(|s| s.can_upload(is_loading.get())));
    let is_uploading = move || state.with(|s| s.is_uploading());

    view! {
        <div class="uploader">
            <label class="uploader__dropzone" for=FILE_INPUT_ID>
                <input
                    id=FILE_INPUT_ID
                    node_ref=input_ref
                    type="file"
                    accept="image/*"
                    class="hidden"
                    on:change=handle_file_select
                    disabled=is_uploading
                />
                <span class="uploader__icon">{icon("upload-large")}</span>
                <p class="uploader__title">"Click to upload"</p>
                <p class="uploader__hint">"PNG, JPG, GIF up to 10MB"</p>
            </label>

            {move || state.with(|s| s.preview().map(|src| {
                let src = src.to_string();
                view! {
                    <div class="uploader__preview">
                        <img src=src alt="Preview" />
                    </div>
                }
            }))}

            <Button
                appearance=ButtonAppearance::Primary
                on_click=handle_upload
                disabled=upload_disabled
                class="uploader__submit"
            >
                {move || if is_uploading() {
                    view! {
                        <Space gap=SpaceGap::Small>
                            <Spinner size=SpinnerSize::Tiny />
                            <span>"Uploading..."</span>
                        </Space>
                    }.into_any()
                } else {
                    view! { <span>"Upload Image"</span> }.into_any()
                }}
            </Button>
        </div>
    }
}
