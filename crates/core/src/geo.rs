//! Bounding-box parsing for viewport place queries.

use crate::error::CoreError;

/// A longitude/latitude rectangle, as sent by the map client.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Parse `"minLng,minLat,maxLng,maxLat"`.
    ///
    /// Exactly four comma-separated finite numbers are required. Whitespace
    /// around each value is ignored. Inverted ranges are accepted and simply
    /// match nothing.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let values = raw
            .split(',')
            .map(|part| part.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(invalid_bbox)?;

        match values.as_slice() {
            [min_lng, min_lat, max_lng, max_lat] => Ok(Self {
                min_lng: *min_lng,
                min_lat: *min_lat,
                max_lng: *max_lng,
                max_lat: *max_lat,
            }),
            _ => Err(invalid_bbox()),
        }
    }
}

fn invalid_bbox() -> CoreError {
    CoreError::Validation("Invalid bounding box".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_four_values() {
        let bbox = BoundingBox::parse("122.0,20.0,154.0,46.5").unwrap();
        assert_eq!(bbox.min_lng, 122.0);
        assert_eq!(bbox.min_lat, 20.0);
        assert_eq!(bbox.max_lng, 154.0);
        assert_eq!(bbox.max_lat, 46.5);
    }

    #[test]
    fn tolerates_whitespace_and_negatives() {
        let bbox = BoundingBox::parse(" -10.5, -3 ,4,  5e0").unwrap();
        assert_eq!(bbox.min_lng, -10.5);
        assert_eq!(bbox.min_lat, -3.0);
        assert_eq!(bbox.max_lat, 5.0);
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(BoundingBox::parse("1,2,3").is_err());
        assert!(BoundingBox::parse("1,2,3,4,5").is_err());
        assert!(BoundingBox::parse("").is_err());
    }

    #[test]
    fn rejects_non_numeric_and_non_finite() {
        assert!(BoundingBox::parse("a,2,3,4").is_err());
        assert!(BoundingBox::parse("1,,3,4").is_err());
        assert!(BoundingBox::parse("NaN,2,3,4").is_err());
        assert!(BoundingBox::parse("1,2,inf,4").is_err());
    }
}
