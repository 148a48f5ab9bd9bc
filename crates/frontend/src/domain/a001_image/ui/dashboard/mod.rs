//! Dashboard UI Module (MVVM Standard)
//!
//! Structure:
//! - state.rs: DashboardState and its transitions
//! - model.rs: fetch/upload/delete flows over RecognitionApi
//! - view_model.rs: DashboardVm shared with the uploader and the list
//! - view.rs: DashboardPage component

pub mod model;
pub mod state;
mod view;
mod view_model;

pub use view::DashboardPage;
pub use view_model::DashboardVm;
