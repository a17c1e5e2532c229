//! Browser state machine
//!
//! Each query type (status list, vehicle search, vehicle detail) moves through
//! `Idle -> Loading -> Loaded | Failed`. Starting a request hands out a
//! [`Ticket`] stamped with a per-query generation; a response is applied only
//! if its ticket is still the latest one for that query. When two searches
//! overlap, the response of the most recently *started* search wins and the
//! older one is dropped as [`Outcome::Stale`], whatever order they arrive in.

use std::fmt::Display;

use crate::models::vehicle::{Vehicle, VehicleSummary};

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            QueryState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Statuses,
    Vehicles,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: QueryKind,
    pub generation: u64,
}

/// What happened to a response handed back to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Stale,
}

#[derive(Debug)]
struct Tracked<T> {
    kind: QueryKind,
    generation: u64,
    state: QueryState<T>,
}

impl<T> Tracked<T> {
    fn new(kind: QueryKind) -> Self {
        Self {
            kind,
            generation: 0,
            state: QueryState::Idle,
        }
    }

    fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = QueryState::Loading;
        Ticket {
            kind: self.kind,
            generation: self.generation,
        }
    }

    fn accepts(&self, ticket: Ticket) -> bool {
        ticket.kind == self.kind && ticket.generation == self.generation && self.state.is_loading()
    }

    /// Invalidates any outstanding ticket.
    fn reset(&mut self) {
        self.generation += 1;
        self.state = QueryState::Idle;
    }
}

/// Current text of the search fields. Empty means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub stock_number: String,
    pub vin: String,
    pub status_prefix: String,
}

/// Sub-sections of the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    VehicleInfo,
    ColorInfo,
    FtpVAuto,
    FtpAutosoft,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::VehicleInfo,
        DetailTab::ColorInfo,
        DetailTab::FtpVAuto,
        DetailTab::FtpAutosoft,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DetailTab::VehicleInfo => "Vehicle Info",
            DetailTab::ColorInfo => "Color Info",
            DetailTab::FtpVAuto => "FTP VAuto",
            DetailTab::FtpAutosoft => "FTP Autosoft",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub vehicle: Vehicle,
    pub tab: DetailTab,
}

/// Requests to issue when the browser first opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountRequest {
    pub statuses: Ticket,
    pub vehicles: Ticket,
    pub form: SearchForm,
}

#[derive(Debug)]
pub struct BrowserState {
    pub form: SearchForm,
    default_status_prefix: Option<i32>,
    mounted: bool,
    statuses: Tracked<Vec<i32>>,
    vehicles: Tracked<Vec<VehicleSummary>>,
    detail: Tracked<DetailView>,
    error: Option<String>,
}

impl BrowserState {
    pub fn new(default_status_prefix: Option<i32>) -> Self {
        Self {
            form: SearchForm {
                status_prefix: default_status_prefix
                    .map(|prefix| prefix.to_string())
                    .unwrap_or_default(),
                ..Default::default()
            },
            default_status_prefix,
            mounted: false,
            statuses: Tracked::new(QueryKind::Statuses),
            vehicles: Tracked::new(QueryKind::Vehicles),
            detail: Tracked::new(QueryKind::Detail),
            error: None,
        }
    }

    /// First-open requests: the status list and a search with the default
    /// status prefix. Returns `None` once the browser is already mounted.
    pub fn mount(&mut self) -> Option<MountRequest> {
        if self.mounted {
            return None;
        }
        self.mounted = true;

        let statuses = self.begin_statuses();
        let form = SearchForm {
            status_prefix: self
                .default_status_prefix
                .map(|prefix| prefix.to_string())
                .unwrap_or_default(),
            ..Default::default()
        };
        self.error = None;
        let vehicles = self.vehicles.begin();
        Some(MountRequest {
            statuses,
            vehicles,
            form,
        })
    }

    pub fn begin_statuses(&mut self) -> Ticket {
        self.error = None;
        self.statuses.begin()
    }

    /// Starts a search with a snapshot of the current form.
    pub fn begin_search(&mut self) -> (Ticket, SearchForm) {
        self.error = None;
        (self.vehicles.begin(), self.form.clone())
    }

    pub fn begin_detail(&mut self) -> Ticket {
        self.error = None;
        self.detail.begin()
    }

    pub fn finish_statuses<E: Display>(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<i32>, E>,
    ) -> Outcome {
        if !self.statuses.accepts(ticket) {
            return Outcome::Stale;
        }
        self.statuses.state = self.settle(result);
        Outcome::Applied
    }

    pub fn finish_search<E: Display>(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<VehicleSummary>, E>,
    ) -> Outcome {
        if !self.vehicles.accepts(ticket) {
            return Outcome::Stale;
        }
        self.vehicles.state = self.settle(result);
        Outcome::Applied
    }

    /// A successful lookup opens the detail view on its first tab.
    pub fn finish_detail<E: Display>(
        &mut self,
        ticket: Ticket,
        result: Result<Vehicle, E>,
    ) -> Outcome {
        if !self.detail.accepts(ticket) {
            return Outcome::Stale;
        }
        let result = result.map(|vehicle| DetailView {
            vehicle,
            tab: DetailTab::default(),
        });
        self.detail.state = self.settle(result);
        Outcome::Applied
    }

    fn settle<T, E: Display>(&mut self, result: Result<T, E>) -> QueryState<T> {
        match result {
            Ok(value) => QueryState::Loaded(value),
            Err(e) => {
                let message = e.to_string();
                self.error = Some(message.clone());
                QueryState::Failed(message)
            }
        }
    }

    pub fn select_tab(&mut self, tab: DetailTab) {
        if let QueryState::Loaded(view) = &mut self.detail.state {
            view.tab = tab;
        }
    }

    /// Clears the selected vehicle; a lookup still in flight is discarded.
    pub fn close_detail(&mut self) {
        self.detail.reset();
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn set_status_filter(&mut self, prefix: Option<i32>) {
        self.form.status_prefix = prefix.map(|p| p.to_string()).unwrap_or_default();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn statuses(&self) -> &QueryState<Vec<i32>> {
        &self.statuses.state
    }

    pub fn vehicles(&self) -> &QueryState<Vec<VehicleSummary>> {
        &self.vehicles.state
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.state.loaded()
    }

    pub fn is_loading(&self) -> bool {
        self.vehicles.state.is_loading()
    }

    pub fn default_status_prefix(&self) -> Option<i32> {
        self.default_status_prefix
    }
}
