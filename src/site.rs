/// Static map marker for the planting region. Display-only; the projection
/// model never reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteMarker {
    pub latitude: f64,
    pub longitude: f64,
}

/// East Godavari planting region, centered around Kakinada.
pub const EAST_GODAVARI: SiteMarker = SiteMarker {
    latitude: 17.0,
    longitude: 82.2,
};

impl SiteMarker {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90".to_string());
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err("Longitude must be between -180 and 180".to_string());
        }

        Ok(SiteMarker {
            latitude,
            longitude,
        })
    }
}
