// CourtScout - core/export.rs
//
// CSV and GeoJSON export of the filtered court list.
// Core layer: writes to any Write trait object.

use crate::core::dataset::{to_feature, FeatureCollection};
use crate::core::model::CourtRecord;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export courts to CSV format, in the order given.
///
/// Writes: name, location, courts, count, type, latitude, longitude, distance_km
pub fn export_csv<W: Write>(
    courts: &[&CourtRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "name",
            "location",
            "courts",
            "count",
            "type",
            "latitude",
            "longitude",
            "distance_km",
        ])
        .map_err(csv_err)?;

    let mut count = 0;
    for court in courts {
        let (lat, lng) = court
            .position()
            .map(|p| (p.lat.to_string(), p.lng.to_string()))
            .unwrap_or_default();
        let distance = court
            .distance_km
            .filter(|d| d.is_finite())
            .map(|d| format!("{d:.2}"))
            .unwrap_or_default();

        csv_writer
            .write_record([
                court.name.as_str(),
                court.location.as_deref().unwrap_or(""),
                court.courts_text.as_deref().unwrap_or(""),
                &court.count.to_string(),
                court.court_type.key(),
                &lat,
                &lng,
                &distance,
            ])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export courts as a GeoJSON FeatureCollection.
pub fn export_geojson<W: Write>(
    courts: &[&CourtRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let collection = FeatureCollection::new(courts.iter().map(|c| to_feature(c)).collect());
    serde_json::to_writer_pretty(writer, &collection).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(courts.len())
}
