use common::types::{Location, VoteCounts};
use uuid::Uuid;

use crate::filter::{filter, Category, FilterCriteria};
use crate::geo::Coordinates;
use crate::view::{GridView, MapContext};

/// Owns the full location list, the facets and the rendering context.
///
/// Every setter recomputes the visible set from the full list and
/// overwrites the previous map and grid output.
#[derive(Debug, Clone, Default)]
pub struct FilterController {
    locations: Vec<Location>,
    criteria: FilterCriteria,
    visible: Vec<Location>,
    map: MapContext,
    grid: GridView,
}

impl FilterController {
    pub fn new(locations: Vec<Location>) -> Self {
        let mut c = Self { locations, ..Self::default() };
        c.recompute();
        c
    }

    pub fn set_locations(&mut self, locations: Vec<Location>) {
        self.locations = locations;
        self.recompute();
    }

    /// Single-select: picking a category replaces the previous one; `None` clears it.
    pub fn select_category(&mut self, category: Option<Category>) {
        self.criteria.category = category;
        self.recompute();
    }

    pub fn set_require_amenity(&mut self, required: bool) {
        self.criteria.require_amenity = required;
        self.recompute();
    }

    pub fn set_max_distance(&mut self, km: f64) {
        self.criteria.max_distance_km = km;
        self.recompute();
    }

    /// A position fix also moves the map; `accuracy_m` as reported by the device.
    pub fn set_origin(&mut self, origin: Option<Coordinates>, accuracy_m: f64) {
        self.criteria.origin = origin;
        if let Some(position) = origin {
            self.map.locate(position, accuracy_m);
        }
        self.recompute();
    }

    /// Server counts for one location, applied to the full list and the grid.
    pub fn apply_votes(&mut self, id: Uuid, counts: VoteCounts) {
        for loc in self.locations.iter_mut().chain(self.visible.iter_mut()).filter(|l| l.id == id) {
            loc.likes = counts.likes;
            loc.dislikes = counts.dislikes;
        }
        self.grid.update_votes(id, counts);
    }

    fn recompute(&mut self) {
        self.visible = filter(&self.locations, &self.criteria);
        self.map.set_markers(&self.visible);
        self.grid.render(&self.visible);
        tracing::debug!(visible = self.visible.len(), total = self.locations.len(), title = self.title(), "filters applied");
    }

    pub fn title(&self) -> &'static str { self.criteria.title() }

    pub fn criteria(&self) -> &FilterCriteria { &self.criteria }

    pub fn visible(&self) -> &[Location] { &self.visible }

    pub fn map(&self) -> &MapContext { &self.map }

    pub fn grid(&self) -> &GridView { &self.grid }
}
