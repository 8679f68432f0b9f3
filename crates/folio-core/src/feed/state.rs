//! Loading state for the gallery feed.

use crate::error::FeedError;
use crate::models::GalleryItem;

/// Identifies one load request.
///
/// Only the ticket from the most recent [`FeedState::begin`] can complete the
/// state; results carrying an older ticket are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// The feed slot read by the gallery: items plus a loading flag.
#[derive(Debug, Clone)]
pub struct FeedState {
    items: Vec<GalleryItem>,
    loading: bool,
    error: Option<FeedError>,
    generation: u64,
}

impl FeedState {
    /// A state that is loading with no items, as on first render.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The failure from the last completed load, if any.
    pub fn error(&self) -> Option<&FeedError> {
        self.error.as_ref()
    }

    /// Start a new load. Any ticket issued earlier becomes stale.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    /// Whether `ticket` belongs to the load currently in flight.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply the outcome of a load.
    ///
    /// Returns `false` and leaves the state untouched if the ticket is
    /// stale. On failure the items are cleared; loading always ends.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<GalleryItem>, FeedError>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.items.clear();
                self.error = Some(err);
            }
        }
        self.loading = false;
        true
    }

    /// Invalidate the outstanding load so a late result is ignored.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.loading = false;
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}
