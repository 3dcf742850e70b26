// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV series, runs the polyline pipeline with a JSON config, and writes the points as CSV.

use anyhow::{Context, Result};
use scrollchart_core::{Pipeline, PipelineConfig, Polyline, Series};
use std::path::{Path, PathBuf};

/// Series longer than this are mean-aggregated unless the config says otherwise.
const TARGET_POINTS: usize = 1500;

fn main() -> Result<()> {
    init_logging()?;

    // Usage: scrollchart-demo <input.csv> [config.json] [output.csv]
    let mut args = std::env::args().skip(1);
    let raw = args.next().context("usage: scrollchart-demo <input.csv> [config.json] [output.csv]")?;
    let config_path = args.next().map(PathBuf::from);
    let output = args.next().map(PathBuf::from);

    let (path, used_alt) = resolve_path(&raw)?;
    log::info!("Using input file: {}", path.display());
    if used_alt {
        log::info!("  (extension swapped between .csv/.cvs)");
    }

    let series = load_series_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    log::info!("Loaded {} samples", series.len());
    if series.is_empty() {
        anyhow::bail!("no samples loaded; check headers/delimiter.");
    }

    // Optional aggregation for large datasets
    let config = match &config_path {
        Some(p) => load_config(p)?,
        None => PipelineConfig::default(),
    }
    .with_point_budget(series.len(), TARGET_POINTS);
    if let Some(agg) = config.aggregation {
        log::info!("Aggregating by {} ({:?})", agg.group_size, agg.reduction);
    }

    let polyline = Pipeline::new(config).run(&series).context("pipeline failed")?;
    log::info!(
        "Range [{:.4}, {:.4}]: {} points, {} after simplification, {} flattened",
        polyline.range.min,
        polyline.range.max,
        polyline.points.len(),
        polyline.simplified.len(),
        polyline.flattened.len()
    );
    if let Some(m) = polyline.model {
        log::info!("Trend: slope={:.6} intercept={:.6} r2={:.4}", m.slope, m.intercept, m.r_squared);
    }
    for rule in &polyline.rules {
        log::info!("Rule {:>10} at y={:.2}", rule.label, rule.y);
    }

    let out = output.unwrap_or_else(|| out_name_with(&path, "points"));
    write_points_csv(&polyline, &out).with_context(|| format!("writing {}", out.display()))?;
    log::info!("Wrote {}", out.display());
    Ok(())
}

/// Log level comes from SCROLLCHART_LOG (error|warn|info|debug|trace), default info.
fn init_logging() -> Result<()> {
    let level = std::env::var("SCROLLCHART_LOG")
        .ok()
        .and_then(|v| v.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}: {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn load_config(path: &Path) -> Result<PipelineConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: PipelineConfig = serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    log::debug!("config: {:?}", config);
    Ok(config)
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/series_<stem>_<suffix>.csv
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("series");
    let short = stem.split('_').take(3).collect::<Vec<_>>().join("_");
    let mut out = PathBuf::from("target/out");
    if short.is_empty() {
        out.push(format!("series_{}.csv", suffix));
    } else {
        out.push(format!("series_{}_{}.csv", short, suffix));
    }
    out
}

/// Load one numeric column. Prefers a `value`/`close`/`y` header, else the
/// first column whose first row parses as a number. Unparseable cells become NaN
/// so the pipeline can report and zero them.
fn load_series_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    log::debug!("Headers: {:?}", headers);

    let named = ["value", "close", "y", "price"]
        .iter()
        .find_map(|want| headers.iter().position(|h| h == want));

    let mut values = Vec::new();
    let mut column = named;
    for rec in rdr.records() {
        let rec = rec?;
        if column.is_none() {
            column = rec.iter().position(|cell| cell.trim().parse::<f64>().is_ok());
            if column.is_none() {
                log::warn!("Skipping row without numeric cells: {:?}", rec);
                continue;
            }
        }
        let v = column
            .and_then(|ix| rec.get(ix))
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(f64::NAN);
        values.push(v);
    }

    let name = column.and_then(|ix| headers.get(ix).cloned());
    Ok(Series { name, values })
}

fn write_points_csv(polyline: &Polyline, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record(["kind", "index", "x", "y", "value"])?;
    for (i, (p, v)) in polyline.points.iter().zip(&polyline.values).enumerate() {
        let kind = match polyline.projected_from {
            Some(start) if i >= start => "projected",
            _ => "scaled",
        };
        wtr.write_record([kind.to_string(), i.to_string(), p.x.to_string(), p.y.to_string(), v.to_string()])?;
    }
    for (i, p) in polyline.simplified.iter().enumerate() {
        wtr.write_record(["simplified".to_string(), i.to_string(), p.x.to_string(), p.y.to_string(), String::new()])?;
    }
    for (i, p) in polyline.flattened.iter().enumerate() {
        wtr.write_record(["curve".to_string(), i.to_string(), p.x.to_string(), p.y.to_string(), String::new()])?;
    }
    wtr.flush()?;
    Ok(())
}

fn swap_ext(p: &Path) -> Option<std::path::PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
