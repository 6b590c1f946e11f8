use common::types::{Location, VoteCounts};
use uuid::Uuid;

/// Client-side copy of every location, as last fetched.
#[derive(Debug, Clone, Default)]
pub struct LocationBook {
    locations: Vec<Location>,
}

impl LocationBook {
    pub fn new(locations: Vec<Location>) -> Self { Self { locations } }

    pub fn replace_all(&mut self, locations: Vec<Location>) {
        self.locations = locations;
    }

    pub fn all(&self) -> &[Location] { &self.locations }

    pub fn get(&self, id: Uuid) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Overwrite both counters with the server's answer. `false` for unknown ids.
    pub fn apply_votes(&mut self, id: Uuid, counts: VoteCounts) -> bool {
        match self.locations.iter_mut().find(|l| l.id == id) {
            Some(loc) => {
                loc.likes = counts.likes;
                loc.dislikes = counts.dislikes;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize { self.locations.len() }

    pub fn is_empty(&self) -> bool { self.locations.is_empty() }
}
