//! Browser session
//!
//! Drives a [`BrowserState`] with an [`InventoryApi`]: every user action starts
//! a request on the state machine, awaits the API and feeds the result back.

use crate::browser::client::InventoryApi;
use crate::browser::state::{BrowserState, Outcome};

pub struct BrowserSession<A: InventoryApi> {
    api: A,
    state: BrowserState,
}

impl<A: InventoryApi> BrowserSession<A> {
    pub fn new(api: A, default_status_prefix: Option<i32>) -> Self {
        Self {
            api,
            state: BrowserState::new(default_status_prefix),
        }
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut BrowserState {
        &mut self.state
    }

    /// Loads the status list and the default search, concurrently.
    pub async fn mount(&mut self) {
        let Some(request) = self.state.mount() else {
            return;
        };

        let (statuses, vehicles) =
            tokio::join!(self.api.statuses(), self.api.search(&request.form));
        self.state.finish_statuses(request.statuses, statuses);
        self.state.finish_search(request.vehicles, vehicles);
    }

    pub async fn search(&mut self) -> Outcome {
        let (ticket, form) = self.state.begin_search();
        let result = self.api.search(&form).await;
        self.state.finish_search(ticket, result)
    }

    /// Reloads the status list, e.g. after the initial load failed.
    pub async fn refresh_statuses(&mut self) -> Outcome {
        let ticket = self.state.begin_statuses();
        let result = self.api.statuses().await;
        self.state.finish_statuses(ticket, result)
    }

    /// Fetches the full record and opens the detail view.
    pub async fn open_vehicle(&mut self, id: i32) -> Outcome {
        let ticket = self.state.begin_detail();
        let result = self.api.vehicle(id).await;
        self.state.finish_detail(ticket, result)
    }
}
