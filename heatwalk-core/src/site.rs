//! Catalogue entries for the cultural sites shown on the map.

use geo::Coord;

/// A cultural site from the static catalogue.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The
/// year is kept as the free-form string supplied by the catalogue; sites
/// whose year does not parse as an integer are excluded from regression
/// but remain valid catalogue entries.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use heatwalk_core::Site;
///
/// let site = Site::new("Yuelu Academy", Coord { x: 112.9361, y: 28.1836 }, "1955");
/// assert_eq!(site.numeric_year(), Some(1955));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    /// Unique display name; the key of the interest vectors.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Founding or significance year as recorded in the catalogue.
    pub year: String,
}

impl Site {
    /// Construct a catalogue entry.
    pub fn new(name: impl Into<String>, location: Coord<f64>, year: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location,
            year: year.into(),
        }
    }

    /// Parse the year as an integer, tolerating surrounding whitespace.
    ///
    /// Returns `None` for year-like strings that carry no numeric value,
    /// which marks the site as unusable for regression.
    #[must_use]
    pub fn numeric_year(&self) -> Option<i32> {
        self.year.trim().parse().ok()
    }
}
