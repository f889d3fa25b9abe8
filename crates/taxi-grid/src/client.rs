//! Passengers.

use taxi_core::{ClientId, PlaceId};

/// A passenger waiting at a town, or riding with an agent once `taken`.
///
/// Equality is by id alone; the destination and flag are payload.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Client {
    pub id:          ClientId,
    /// One of the four towns.
    pub destination: PlaceId,
    /// Set on embark.  A taken client is no longer available for pickup.
    pub taken:       bool,
}

impl Client {
    pub fn new(id: ClientId, destination: PlaceId) -> Self {
        Self { id, destination, taken: false }
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        !self.taken
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Client {}

impl std::hash::Hash for Client {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
