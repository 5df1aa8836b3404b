// File: crates/gantt-cli/src/input.rs
// Summary: CSV ingestion for the project and milestone tables (columns read by position).

use anyhow::{bail, Context, Result};
use gantt_core::{LayoutOptions, RawRow, SpotRow};
use std::path::{Path, PathBuf};

/// Cells spelled like this are treated as empty.
const MISSING_MARKERS: &[&str] = &["", "NA", "N/A", "null"];

fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS.iter().any(|m| m.eq_ignore_ascii_case(cell.trim()))
}

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))
}

/// Load the project table: work package, activity, start, end (first four columns).
pub fn load_project_csv(path: &Path) -> Result<Vec<RawRow>> {
    let mut rdr = open(path)?;
    let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect::<Vec<_>>();
    tracing::debug!(?headers, "project table headers");
    if headers.len() < 4 {
        bail!("{}: expected at least 4 columns (work package, activity, start, end), found {}", path.display(), headers.len());
    }

    let mut out = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("{}: reading row {}", path.display(), i + 1))?;
        if rec.iter().all(is_missing) {
            continue;
        }
        let cell = |ix: usize| rec.get(ix).filter(|c| !is_missing(c)).unwrap_or("").to_string();
        out.push(RawRow::new(cell(0), cell(1), cell(2), cell(3)).at_row(i + 1));
    }
    tracing::info!(rows = out.len(), path = %path.display(), "loaded project table");
    Ok(out)
}

/// Load the milestone table: activity, date, text (first three columns). Blank cells stay missing.
pub fn load_spots_csv(path: &Path) -> Result<Vec<SpotRow>> {
    let mut rdr = open(path)?;
    let mut out = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("{}: reading row {}", path.display(), i + 1))?;
        let cell = |ix: usize| rec.get(ix).filter(|c| !is_missing(c)).map(str::to_string);
        out.push(SpotRow { activity: cell(0), date: cell(1), text: cell(2) });
    }
    tracing::info!(rows = out.len(), path = %path.display(), "loaded milestone table");
    Ok(out)
}

/// Read layout options from a TOML file; unspecified keys keep their defaults.
pub fn load_layout(path: &Path) -> Result<LayoutOptions> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing layout config {}", path.display()))
}

/// Produce output file name like target/out/gantt_<stem>.png
pub fn default_output(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("gantt_{stem}.png"))
}
