//! Row admission policy.

/// Which rows make it into the output.
///
/// Coordinates are always required. `require_positive_price` additionally
/// drops rows whose price defaulted to (or was) zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowPolicy {
    pub require_positive_price: bool,
}

/// Why a row was left out of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvalidLatitude,
    InvalidLongitude,
    NonPositivePrice,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::InvalidLatitude => write!(f, "latitude is missing or not a number"),
            Rejection::InvalidLongitude => write!(f, "longitude is missing or not a number"),
            Rejection::NonPositivePrice => write!(f, "price is not greater than zero"),
        }
    }
}

impl RowPolicy {
    /// Returns the finite `(lat, lng)` pair when the row is admitted.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] that applies, checking latitude,
    /// then longitude, then price.
    pub fn admit(
        self,
        lat: Option<f64>,
        lng: Option<f64>,
        price: f64,
    ) -> Result<(f64, f64), Rejection> {
        let lat = lat
            .filter(|v| v.is_finite())
            .ok_or(Rejection::InvalidLatitude)?;
        let lng = lng
            .filter(|v| v.is_finite())
            .ok_or(Rejection::InvalidLongitude)?;
        if self.require_positive_price && price <= 0.0 {
            return Err(Rejection::NonPositivePrice);
        }
        Ok((lat, lng))
    }
}
