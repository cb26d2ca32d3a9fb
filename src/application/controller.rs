//! Hotel list view state and the controller that fills it.
//!
//! A *mount* is one page load: one token request followed by one hotel list
//! request. There is no way back to [`LoadPhase::Pending`] once a mount has
//! completed, and no retry.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::application::services::HotelService;
use crate::domain::entities::Hotel;
use crate::domain::gateways::{HotelDirectory, TokenProvider};

/// The only failure text ever shown to end users.
pub const LOAD_ERROR_MESSAGE: &str = "Unable to retrieve hotels";

/// Lifecycle of a hotel list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPhase {
    Pending,
    Loaded,
    Errored,
}

/// What the hotel list page renders.
///
/// An errored view carries [`LOAD_ERROR_MESSAGE`] and no hotels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub phase: LoadPhase,
    pub hotels: Vec<Hotel>,
    pub error: Option<String>,
}

impl ViewState {
    pub fn pending() -> Self {
        Self {
            phase: LoadPhase::Pending,
            hotels: Vec::new(),
            error: None,
        }
    }

    pub fn loaded(hotels: Vec<Hotel>) -> Self {
        Self {
            phase: LoadPhase::Loaded,
            hotels,
            error: None,
        }
    }

    pub fn errored() -> Self {
        Self {
            phase: LoadPhase::Errored,
            hotels: Vec::new(),
            error: Some(LOAD_ERROR_MESSAGE.to_string()),
        }
    }

    /// One `"{name} - {city}"` line per hotel, in API order.
    pub fn lines(&self) -> Vec<String> {
        self.hotels.iter().map(Hotel::display_line).collect()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::pending()
    }
}

/// Runs the load sequence once per mount and keeps the latest view state.
///
/// Every mount draws a generation number. A finished mount commits its view
/// state only while its generation is still the newest, so a slow earlier
/// mount can never overwrite the outcome of a later one.
///
/// A mount whose future is dropped before completing (e.g. the client
/// disconnected) still holds the newest generation. Older mounts finishing
/// after that are discarded as stale, so [`Self::current`] keeps the state
/// from before both until the next mount completes.
pub struct HotelListController<T: TokenProvider, H: HotelDirectory> {
    service: HotelService<T, H>,
    state: RwLock<ViewState>,
    generation: AtomicU64,
}

impl<T: TokenProvider, H: HotelDirectory> HotelListController<T, H> {
    /// Creates a controller in the [`LoadPhase::Pending`] state.
    pub fn new(service: HotelService<T, H>) -> Self {
        Self {
            service,
            state: RwLock::new(ViewState::pending()),
            generation: AtomicU64::new(0),
        }
    }

    /// Loads the hotel list for one page load.
    ///
    /// Returns this mount's own view state whether or not it was committed.
    /// Failures are logged with full detail; the returned state only carries
    /// [`LOAD_ERROR_MESSAGE`].
    pub async fn mount(&self) -> ViewState {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, "Mounting hotel list");

        let view = match self.service.load_hotels().await {
            Ok(hotels) => {
                info!(generation, count = hotels.len(), "Hotel list loaded");
                ViewState::loaded(hotels)
            }
            Err(e) => {
                error!(
                    generation,
                    stage = %e.stage(),
                    status = ?e.status(),
                    error = %e,
                    "Failed to load hotels"
                );
                ViewState::errored()
            }
        };

        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) == generation {
            *state = view.clone();
        } else {
            debug!(generation, "Discarding stale hotel list load");
        }

        view
    }

    /// Snapshot of the last committed view state.
    pub async fn current(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Number of mounts started so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
