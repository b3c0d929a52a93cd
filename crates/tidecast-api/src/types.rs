use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope the backend wraps every success payload in.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub(crate) data: T,
}

/// A registered fishing spot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FishingSpot {
    #[serde(rename = "fishing_place_id")]
    pub id: i64,
    pub name: String,
    /// Spot category (sea, reservoir, ...).
    #[serde(rename = "type")]
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address_road: Option<String>,
    pub address_land: Option<String>,
    pub phone_number: Option<String>,
    pub main_fish_species: Option<String>,
    pub usage_fee: Option<String>,
    pub safety_facilities: Option<String>,
    pub convenience_facilities: Option<String>,
}

/// Tide cycle for one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TideCycle {
    pub lunar_date: String,
    /// Cycle name used on the west coast.
    pub seohae: String,
    /// Cycle name used on the remaining coasts.
    pub other: String,
    pub moon_phase: f64,
}

/// One detected fish in an uploaded photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub label: String,
    pub confidence: f64,
    /// Closed-season range for the species; empty when none applies.
    #[serde(default)]
    pub prohibited_dates: Option<String>,
    /// Bounding box as `[x1, y1, x2, y2]`.
    pub bbox: Vec<f64>,
}

/// Result of a prediction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Catch record id; present when the request carried a valid token.
    #[serde(default)]
    pub id: Option<i64>,
    pub detections: Vec<Detection>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

/// Sea conditions near a coordinate, served from the closest tidal
/// observation station.
///
/// Each slot aggregates an upstream provider response whose shape this
/// layer does not own, so the bodies stay loosely typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeaConditions {
    /// Most recent observation from the closest station.
    pub obsrecent: Value,
    /// Tide prediction table for the closest station.
    pub obspretab: Value,
}

/// An image to submit for species prediction.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Convenience constructor for the common JPEG case.
    pub fn jpeg(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: "image/jpeg".to_string(),
            bytes,
        }
    }
}
