pub mod state;

use contracts::domain::a001_image::aggregate::ImageRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_image::ui::dashboard::DashboardVm;
use crate::shared::icons::icon;
use state::{ImageListState, NO_LABELS_MESSAGE};

/// Uploaded images with their labels; deletion goes through the dashboard
#[component]
pub fn ImageList(vm: DashboardVm, images: Vec<ImageRecord>) -> impl IntoView {
    let state = RwSignal::new(ImageListState::default());

    let rows = images
        .into_iter()
        .map(|image| {
            let id = image.id;
            let is_deleting = Signal::derive(move || state.with(|s| s.is_deleting(id)));

            let on_delete = move |_| {
                let mut started = false;
                state.update(|s| started = s.begin_delete(id));
                if !started {
                    return;
                }
                spawn_local(async move {
                    vm.delete(id).await;
                    state.update(|s| s.finish_delete(id));
                });
            };

            let labels = if image.has_labels() {
                view! {
                    <div class="image-row__labels">
                        {image
                            .labels
                            .into_iter()
                            .map(|label| view! {
                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                    {label}
                                </Badge>
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            } else {
                view! { <p class="image-row__no-labels">{NO_LABELS_MESSAGE}</p> }.into_any()
            };

            view! {
                <div class="image-row">
                    <div class="image-row__info">
                        <h4 class="image-row__filename" title=image.filename.clone()>
                            {image.filename.clone()}
                        </h4>
                        {labels}
                    </div>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=on_delete
                        disabled=is_deleting
                        class="image-row__delete"
                    >
                        {icon("trash")}
                    </Button>
                </div>
            }
        })
        .collect_view();

    view! { <div class="image-list">{rows}</div> }
}
