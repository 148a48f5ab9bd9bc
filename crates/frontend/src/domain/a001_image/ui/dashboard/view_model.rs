//! Dashboard - View Model

use contracts::domain::a001_image::aggregate::ImageId;
use leptos::prelude::*;

use super::model;
use super::state::DashboardState;
use crate::shared::api_utils::ApiClient;
use crate::system::auth::context::SessionContext;

/// Shared by the dashboard, the uploader and the image list
#[derive(Clone, Copy)]
pub struct DashboardVm {
    pub state: RwSignal<DashboardState>,
    api: StoredValue<ApiClient>,
    session: SessionContext,
}

impl DashboardVm {
    pub fn new(api: ApiClient, session: SessionContext) -> Self {
        Self {
            state: RwSignal::new(DashboardState::default()),
            api: StoredValue::new(api),
            session,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    pub async fn refresh(self) {
        let Some(token) = self.session.token_untracked() else {
            return;
        };
        let api = self.api.get_value();
        model::refresh(&api, &token, &self.state).await;
    }

    pub async fn upload(self, file: web_sys::File) {
        let Some(token) = self.session.token_untracked() else {
            return;
        };
        let api = self.api.get_value();
        model::upload(&api, &token, &file, &self.state).await;
    }

    pub async fn delete(self, id: ImageId) {
        let Some(token) = self.session.token_untracked() else {
            return;
        };
        let api = self.api.get_value();
        model::delete(&api, &token, id, &self.state).await;
    }
}
