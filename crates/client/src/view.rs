//! Rendering inputs for the map and the card grid.
//!
//! Nothing here draws; these structs describe what a map widget and a card
//! grid should show for the current filtered set.

use common::types::{Location, VoteCounts};
use uuid::Uuid;

use crate::geo::Coordinates;

/// Marker clustering settings handed to the map widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterSettings {
    /// Pixels.
    pub max_cluster_radius: u32,
    pub disable_clustering_at_zoom: u8,
}

impl Default for ClusterSettings {
    fn default() -> Self {
        Self { max_cluster_radius: 25, disable_clustering_at_zoom: 15 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub title: String,
    pub image_src: String,
    pub description: String,
    /// `Types: a, b`
    pub types_line: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub location_id: Uuid,
    pub position: Coordinates,
    pub popup: Popup,
}

impl Marker {
    pub fn for_location(location: &Location) -> Self {
        Self {
            location_id: location.id,
            position: Coordinates::new(location.latitude, location.longitude),
            popup: Popup {
                title: location.title.clone(),
                image_src: location.src.clone(),
                description: location.description.clone(),
                types_line: format!("Types: {}", location.types.join(", ")),
            },
        }
    }
}

/// Smallest box containing every marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

impl Bounds {
    pub fn around<'a>(points: impl IntoIterator<Item = &'a Coordinates>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Self { south_west: first, north_east: first }, |b, p| Self {
            south_west: Coordinates::new(b.south_west.latitude.min(p.latitude), b.south_west.longitude.min(p.longitude)),
            north_east: Coordinates::new(b.north_east.latitude.max(p.latitude), b.north_east.longitude.max(p.longitude)),
        }))
    }

    pub fn contains(&self, p: &Coordinates) -> bool {
        (self.south_west.latitude..=self.north_east.latitude).contains(&p.latitude)
            && (self.south_west.longitude..=self.north_east.longitude).contains(&p.longitude)
    }
}

/// Where the device says the user is.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPosition {
    pub position: Coordinates,
    /// Metres; half the reported accuracy.
    pub radius_m: f64,
    pub popup: String,
}

pub const INITIAL_ZOOM: u8 = 2;
pub const LOCATED_ZOOM: u8 = 13;

/// Map state owned by the controller: markers for the filtered set, fitted
/// bounds and the user's position.
#[derive(Debug, Clone, PartialEq)]
pub struct MapContext {
    pub cluster: ClusterSettings,
    pub center: Coordinates,
    pub zoom: u8,
    markers: Vec<Marker>,
    bounds: Option<Bounds>,
    user: Option<UserPosition>,
}

impl Default for MapContext {
    fn default() -> Self {
        Self {
            cluster: ClusterSettings::default(),
            center: Coordinates::new(0.0, 0.0),
            zoom: INITIAL_ZOOM,
            markers: Vec::new(),
            bounds: None,
            user: None,
        }
    }
}

impl MapContext {
    pub fn new() -> Self { Self::default() }

    /// Replace every marker. Bounds are refitted; an empty set leaves none.
    pub fn set_markers(&mut self, locations: &[Location]) {
        self.markers = locations.iter().map(Marker::for_location).collect();
        self.bounds = Bounds::around(self.markers.iter().map(|m| &m.position));
        if self.markers.is_empty() {
            tracing::debug!("no locations to show on the map");
        }
    }

    /// Record a position fix and centre the map on it.
    pub fn locate(&mut self, position: Coordinates, accuracy_m: f64) {
        let radius_m = accuracy_m / 2.0;
        self.user = Some(UserPosition {
            position,
            radius_m,
            popup: format!("You are within {} meters from this point", radius_m),
        });
        self.center = position;
        self.zoom = LOCATED_ZOOM;
    }

    pub fn markers(&self) -> &[Marker] { &self.markers }

    pub fn bounds(&self) -> Option<Bounds> { self.bounds }

    pub fn user(&self) -> Option<&UserPosition> { self.user.as_ref() }
}

/// Share of likes and dislikes in percent; both 0 when nobody voted.
pub fn vote_percentages(likes: u64, dislikes: u64) -> (f64, f64) {
    let total = likes + dislikes;
    if total == 0 {
        return (0.0, 0.0);
    }
    let total = total as f64;
    (likes as f64 / total * 100.0, dislikes as f64 / total * 100.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub location_id: Uuid,
    pub title: String,
    pub description: String,
    pub image_src: String,
    pub likes: u64,
    pub dislikes: u64,
    pub like_pct: f64,
    pub dislike_pct: f64,
}

impl Card {
    fn for_location(location: &Location) -> Self {
        let mut card = Self {
            location_id: location.id,
            title: location.title.clone(),
            description: location.description.clone(),
            image_src: location.src.clone(),
            likes: 0,
            dislikes: 0,
            like_pct: 0.0,
            dislike_pct: 0.0,
        };
        card.set_votes(location.counts());
        card
    }

    fn set_votes(&mut self, counts: VoteCounts) {
        self.likes = counts.likes;
        self.dislikes = counts.dislikes;
        (self.like_pct, self.dislike_pct) = vote_percentages(counts.likes, counts.dislikes);
    }
}

/// Cards for the filtered set, in filter order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridView {
    cards: Vec<Card>,
}

impl GridView {
    pub fn render(&mut self, locations: &[Location]) {
        self.cards = locations.iter().map(Card::for_location).collect();
    }

    /// Patch one card's counters; `false` if the location is not shown.
    pub fn update_votes(&mut self, id: Uuid, counts: VoteCounts) -> bool {
        match self.cards.iter_mut().find(|c| c.location_id == id) {
            Some(card) => {
                card.set_votes(counts);
                true
            }
            None => false,
        }
    }

    pub fn cards(&self) -> &[Card] { &self.cards }
}
