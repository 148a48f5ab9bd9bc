//! Shared handle over screen state.
//!
//! Flows mutate state through [`StateCell`] so the same async code drives a
//! reactive signal in the browser and a plain `RefCell` in tests.

use leptos::prelude::*;
use std::cell::RefCell;

pub trait StateCell<T> {
    fn update_state(&self, f: impl FnOnce(&mut T));
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn update_state(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }
}

impl<T> StateCell<T> for RefCell<T> {
    fn update_state(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }
}
