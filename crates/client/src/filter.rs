use common::types::Location;
use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

/// Amenity tag required when `require_amenity` is set.
pub const AMENITY_TAG: &str = "WC";

/// Filter title shown when no category is selected.
pub const DEFAULT_TITLE: &str = "Locais";

/// Location categories; each is stored as a Portuguese tag inside `typeicon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Culture,
    Nature,
    Beach,
    Trail,
    Snacks,
}

impl Category {
    pub const ALL: [Category; 5] = [Category::Culture, Category::Nature, Category::Beach, Category::Trail, Category::Snacks];

    /// Stored tag, also used as the filter title.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Culture => "Cultura",
            Category::Nature => "Natureza",
            Category::Beach => "Praia",
            Category::Trail => "Trilho",
            Category::Snacks => "Merendas",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == tag)
    }

    pub fn matches(self, location: &Location) -> bool {
        location.type_icon.contains(self.tag())
    }
}

/// The three independent facets plus the origin distances are measured from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterCriteria {
    pub category: Option<Category>,
    pub require_amenity: bool,
    /// Inclusive bound in kilometres.
    pub max_distance_km: f64,
    /// Without an origin the distance facet is inactive.
    pub origin: Option<Coordinates>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self { category: None, require_amenity: false, max_distance_km: f64::INFINITY, origin: None }
    }
}

impl FilterCriteria {
    pub fn matches(&self, location: &Location) -> bool {
        if let Some(category) = self.category {
            if !category.matches(location) {
                return false;
            }
        }
        if self.require_amenity && !location.has_type(AMENITY_TAG) {
            return false;
        }
        match self.origin {
            Some(origin) => origin.distance_km(&Coordinates::new(location.latitude, location.longitude)) <= self.max_distance_km,
            None => true,
        }
    }

    pub fn title(&self) -> &'static str {
        self.category.map(Category::tag).unwrap_or(DEFAULT_TITLE)
    }
}

/// Locations matching every active facet, in input order.
pub fn filter(locations: &[Location], criteria: &FilterCriteria) -> Vec<Location> {
    locations.iter().filter(|l| criteria.matches(l)).cloned().collect()
}
