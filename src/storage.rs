use crate::config::ChartConfig;
use crate::models::Dataset;
use crate::viz::Frame;
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A chart description on disk: configuration plus datasets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartFile {
    #[serde(default)]
    pub config: ChartConfig,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

/// Load a JSON chart description.
pub fn load_chart<P: AsRef<Path>>(path: P) -> Result<ChartFile> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let chart = serde_json::from_reader(f)
        .with_context(|| format!("parsing chart description {}", path.display()))?;
    Ok(chart)
}

/// Load datasets from headerless CSV rows of the form `label,v1,v2,...`.
/// Empty cells are missing values; rows may differ in length.
pub fn load_datasets_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Dataset>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let Some(label) = record.get(0) else {
            continue;
        };
        let mut values = Vec::with_capacity(record.len().saturating_sub(1));
        for cell in record.iter().skip(1) {
            if cell.is_empty() {
                values.push(None);
            } else {
                let v: f64 = cell.parse().with_context(|| {
                    format!("row {}: {cell:?} is not a number", row + 1)
                })?;
                values.push(Some(v));
            }
        }
        out.push(Dataset::new(label, values));
    }
    Ok(out)
}

/// Save the computed geometry of a frame as pretty JSON.
pub fn save_frame_json<P: AsRef<Path>>(frame: &Frame, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let s = serde_json::to_string_pretty(frame)?;
    f.write_all(s.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viz::{Chart, HeuristicMetrics};
    use tempfile::tempdir;

    #[test]
    fn read_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        std::fs::write(&csvp, "North, 1, 2,3\nSouth,4,,6\n").unwrap();
        std::fs::write(
            &jsonp,
            r##"{ "config": { "title": "T" }, "datasets": [ { "label": "a", "values": [1, null, 3], "color": "#FF0000" } ] }"##,
        )
        .unwrap();

        let ds = load_datasets_csv(&csvp).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds[0].values, vec![Some(1.0), Some(2.0), Some(3.0)]);
        assert_eq!(ds[1].values, vec![Some(4.0), None, Some(6.0)]);

        let chart = load_chart(&jsonp).unwrap();
        assert_eq!(chart.config.title.as_deref(), Some("T"));
        assert_eq!(chart.datasets[0].values, vec![Some(1.0), None, Some(3.0)]);
        assert_eq!(chart.datasets[0].color.unwrap().to_hex(), "#FF0000");
    }

    #[test]
    fn non_numeric_cell_is_error() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("bad.csv");
        std::fs::write(&csvp, "North,1,two\n").unwrap();
        assert!(load_datasets_csv(&csvp).is_err());
    }

    #[test]
    fn frame_json_has_geometry() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("frame.json");
        let chart = Chart::default().with_datasets(vec![Dataset::new("a", vec![Some(1.0)])]);
        let frame = chart.render(&HeuristicMetrics).unwrap();
        save_frame_json(&frame, &out).unwrap();
        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert!(v["rect"]["height"].is_number());
        assert_eq!(v["stage"], "AxisLabelsDrawn");
    }

    #[test]
    fn frame_json_error_names_the_path() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("missing-dir").join("frame.json");
        let frame = Chart::default().render(&HeuristicMetrics).unwrap();
        let err = save_frame_json(&frame, &out).unwrap_err();
        assert!(format!("{err:#}").contains("frame.json"));
    }
}
