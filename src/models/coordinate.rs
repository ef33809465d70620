use serde::Serialize;
use std::fmt;

/// A geographic position in degrees, sent as the body of an SOS request.
///
/// Serialises to `{"lat": <number>, "lon": <number>}`. The values are sent
/// as given; range checking is left to the receiving server.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}
