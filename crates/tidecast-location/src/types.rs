use serde::{Deserialize, Serialize};

/// A point on the map, as handed to calling UI code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_serialization() {
        let coords = Coordinates {
            latitude: 35.1796,
            longitude: 129.0756,
        };

        let json = serde_json::to_string(&coords).unwrap();
        assert!(json.contains("35.1796"));
        assert!(json.contains("129.0756"));
    }
}
