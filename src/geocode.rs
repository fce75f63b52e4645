//! Forward Geocoding & Pin Projection
//!
//! Resolves each project's free-text location to coordinates through a
//! Nominatim-style endpoint and projects the results onto the map
//! viewport. Per-item failures are logged and skipped; one bad address
//! never blocks plotting the rest.

use gloo_net::http::Request;
use serde::Deserialize;

use crate::api::ApiError;
use crate::i18n::Lang;
use crate::models::{Project, TextField};

const GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Fallback map center (Nof HaGalil) when nothing could be plotted
pub const DEFAULT_CENTER: GeoPoint = GeoPoint { lat: 32.708, lon: 35.317 };

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// A project successfully placed on the map
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectPin {
    pub project_id: String,
    pub point: GeoPoint,
}

#[derive(Debug, Deserialize)]
struct GeocodeHit {
    lat: String,
    lon: String,
}

pub(crate) fn parse_first_hit(body: &str) -> Result<GeoPoint, ApiError> {
    let hits: Vec<GeocodeHit> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let hit = hits.first().ok_or(ApiError::Status(404))?;
    let lat = hit.lat.parse().map_err(|_| ApiError::Decode("bad latitude".into()))?;
    let lon = hit.lon.parse().map_err(|_| ApiError::Decode("bad longitude".into()))?;
    Ok(GeoPoint { lat, lon })
}

/// Geocode one free-text location
pub async fn geocode_location(location: &str) -> Result<GeoPoint, ApiError> {
    let response = Request::get(GEOCODER_URL)
        .query([("format", "jsonv2"), ("limit", "1"), ("q", location)])
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    parse_first_hit(&body)
}

/// Location string used for geocoding: active language, then base
pub fn geocode_query(project: &Project, lang: Lang) -> Option<String> {
    project
        .text(TextField::Location, lang)
        .or_else(|| project.text(TextField::Location, Lang::En))
        .map(String::from)
}

/// Geocode every project, collecting settled successes and skipping
/// failures per item
pub async fn geocode_projects(projects: &[Project], lang: Lang) -> Vec<ProjectPin> {
    let mut pins = Vec::new();
    for project in projects {
        let Some(query) = geocode_query(project, lang) else {
            web_sys::console::warn_1(
                &format!("[ProjectMap] project {} has no location", project.id).into(),
            );
            continue;
        };
        match geocode_location(&query).await {
            Ok(point) => pins.push(ProjectPin { project_id: project.id.clone(), point }),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("[ProjectMap] geocoding failed for {}: {err}", project.id).into(),
                );
            }
        }
    }
    pins
}

/// Geographic bounding box over plotted pins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = GeoBounds {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lon,
            max_lon: first.lon,
        };
        for p in iter {
            bounds.min_lat = bounds.min_lat.min(p.lat);
            bounds.max_lat = bounds.max_lat.max(p.lat);
            bounds.min_lon = bounds.min_lon.min(p.lon);
            bounds.max_lon = bounds.max_lon.max(p.lon);
        }
        Some(bounds)
    }

    /// Widen by a fraction of each span so pins sit inside the frame;
    /// degenerate spans get a fixed margin
    pub fn padded(self, fraction: f64) -> Self {
        let lat_pad = ((self.max_lat - self.min_lat) * fraction).max(0.01);
        let lon_pad = ((self.max_lon - self.min_lon) * fraction).max(0.01);
        GeoBounds {
            min_lat: self.min_lat - lat_pad,
            max_lat: self.max_lat + lat_pad,
            min_lon: self.min_lon - lon_pad,
            max_lon: self.max_lon + lon_pad,
        }
    }

    pub fn center(self) -> GeoPoint {
        GeoPoint {
            lat: (self.min_lat + self.max_lat) / 2.0,
            lon: (self.min_lon + self.max_lon) / 2.0,
        }
    }
}

fn mercator_y(lat_deg: f64) -> f64 {
    // Clamp away from the poles where the projection diverges
    let lat = lat_deg.clamp(-85.0, 85.0).to_radians();
    (lat / 2.0 + std::f64::consts::FRAC_PI_4).tan().ln()
}

/// Project a point into pixel space: linear in longitude, Mercator in
/// latitude, with y growing downward
pub fn pin_position(point: GeoPoint, bounds: GeoBounds, width: f64, height: f64) -> (f64, f64) {
    let lon_span = bounds.max_lon - bounds.min_lon;
    let x = if lon_span > 0.0 {
        (point.lon - bounds.min_lon) / lon_span * width
    } else {
        width / 2.0
    };

    let y_min = mercator_y(bounds.min_lat);
    let y_max = mercator_y(bounds.max_lat);
    let y_span = y_max - y_min;
    let y = if y_span > 0.0 {
        (1.0 - (mercator_y(point.lat) - y_min) / y_span) * height
    } else {
        height / 2.0
    };
    (x, y)
}

/// OpenStreetMap embed URL framing `bounds` with a marker on `marker`
pub fn embed_url(bounds: GeoBounds, marker: GeoPoint) -> String {
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={:.5}%2C{:.5}%2C{:.5}%2C{:.5}&layer=mapnik&marker={:.5}%2C{:.5}",
        bounds.min_lon, bounds.min_lat, bounds.max_lon, bounds.max_lat, marker.lat, marker.lon
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_hit() {
        let body = r#"[{"lat":"32.701","lon":"35.297","display_name":"Nof HaGalil"}]"#;
        let point = parse_first_hit(body).unwrap();
        assert!((point.lat - 32.701).abs() < 1e-9);
        assert!((point.lon - 35.297).abs() < 1e-9);
    }

    #[test]
    fn test_parse_empty_result_is_error_not_panic() {
        assert!(parse_first_hit("[]").is_err());
        assert!(parse_first_hit("not json").is_err());
    }

    #[test]
    fn test_bounds_aggregation() {
        let points = [
            GeoPoint { lat: 32.0, lon: 35.0 },
            GeoPoint { lat: 33.0, lon: 34.5 },
            GeoPoint { lat: 31.5, lon: 35.5 },
        ];
        let bounds = GeoBounds::from_points(points.iter()).unwrap();
        assert_eq!(bounds.min_lat, 31.5);
        assert_eq!(bounds.max_lat, 33.0);
        assert_eq!(bounds.min_lon, 34.5);
        assert_eq!(bounds.max_lon, 35.5);
        assert!(GeoBounds::from_points([].iter()).is_none());
    }

    #[test]
    fn test_pins_land_inside_the_viewport() {
        let points = [
            GeoPoint { lat: 32.0, lon: 35.0 },
            GeoPoint { lat: 33.0, lon: 34.5 },
        ];
        let bounds = GeoBounds::from_points(points.iter()).unwrap().padded(0.1);
        for p in points {
            let (x, y) = pin_position(p, bounds, 640.0, 480.0);
            assert!((0.0..=640.0).contains(&x));
            assert!((0.0..=480.0).contains(&y));
        }
    }

    #[test]
    fn test_single_point_centers() {
        let p = GeoPoint { lat: 32.7, lon: 35.3 };
        let bounds = GeoBounds::from_points([p].iter()).unwrap();
        let (x, y) = pin_position(p, bounds, 640.0, 480.0);
        assert_eq!((x, y), (320.0, 240.0));
    }

    #[test]
    fn test_northern_points_map_higher() {
        let north = GeoPoint { lat: 33.0, lon: 35.0 };
        let south = GeoPoint { lat: 31.0, lon: 35.0 };
        let bounds = GeoBounds::from_points([north, south].iter()).unwrap().padded(0.1);
        let (_, y_north) = pin_position(north, bounds, 640.0, 480.0);
        let (_, y_south) = pin_position(south, bounds, 640.0, 480.0);
        assert!(y_north < y_south);
    }

    #[test]
    fn test_geocode_query_falls_back_to_english() {
        let project = Project {
            translations: [(
                "en".to_string(),
                crate::models::ProjectText { location: Some("Nof HaGalil".into()), ..Default::default() },
            )]
            .into_iter()
            .collect(),
            ..Default::default()
        };
        assert_eq!(geocode_query(&project, Lang::Ar).as_deref(), Some("Nof HaGalil"));
        assert_eq!(geocode_query(&Project::default(), Lang::Ar), None);
    }
}
