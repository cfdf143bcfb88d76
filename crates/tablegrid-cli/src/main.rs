//! tablegrid CLI - reconstruct table grids from OCR fragment dumps
//!
//! Reads JSON fragment dumps produced by the upstream OCR stage (one file
//! per cropped table region) and writes one CSV per table. This binary is
//! the downstream grid consumer: it owns serialization, which the core
//! leaves to implementations of [`GridExporter`].
//!
//! Dump format:
//!
//! ```json
//! {
//!   "width": 1240.0,
//!   "height": 620.0,
//!   "spans": [
//!     { "points": [[10,5],[60,5],[60,25],[10,25]], "text": "total", "confidence": 0.98 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Deserialize;

use tablegrid_core::{
    Fragment, Grid, GridError, GridExporter, ReconstructorConfigBuilder, TableReconstructor,
};

/// One OCR span as emitted by the upstream engine: a 4-point quad plus
/// recognized text and confidence
#[derive(Debug, Deserialize)]
struct OcrSpan {
    points: Vec<[f32; 2]>,
    text: String,
    confidence: f32,
}

/// JSON dump for one cropped table region
#[derive(Debug, Deserialize)]
struct TableDump {
    /// Table image width in pixels
    width: f32,
    /// Table image height in pixels
    height: f32,
    /// OCR spans in engine emission order
    spans: Vec<OcrSpan>,
}

#[derive(Parser, Debug)]
#[command(
    name = "tablegrid",
    version,
    about = "Reconstruct table grids from OCR fragment dumps"
)]
struct Args {
    /// OCR fragment dump files (JSON), one per table region
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory for CSV output (defaults to each input's directory)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Suppression overlap-ratio threshold
    #[arg(long, default_value_t = 0.1)]
    suppression_threshold: f32,

    /// Cell-assignment IoU threshold
    #[arg(long, default_value_t = 0.1)]
    cell_iou_threshold: f32,

    /// Soft cap on line candidates per axis
    #[arg(long, default_value_t = 1000)]
    max_candidates: usize,
}

/// CSV implementation of the grid consumer contract
///
/// Row-major, no header row, `""` for empty cells: the wire contract as
/// documented on [`GridExporter`].
struct CsvExporter<W: std::io::Write> {
    writer: csv::Writer<W>,
}

impl<W: std::io::Write> CsvExporter<W> {
    fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }
}

impl<W: std::io::Write> GridExporter for CsvExporter<W> {
    fn export(&mut self, grid: &Grid) -> tablegrid_core::Result<()> {
        for row in grid.iter_rows() {
            self.writer.write_record(row).map_err(GridError::export)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Output path for one input: "table_3.json" -> "table_3.csv", in
/// `out_dir` when given, else next to the input
fn output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let file_name = format!("{}.csv", stem.to_string_lossy());
    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

fn process_table(
    reconstructor: &TableReconstructor,
    input: &Path,
    out_dir: Option<&Path>,
) -> Result<()> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("cannot read {}", input.display()))?;
    let dump: TableDump = serde_json::from_str(&raw)
        .with_context(|| format!("malformed fragment dump {}", input.display()))?;

    let fragments = dump
        .spans
        .iter()
        .map(|span| Fragment::from_quad(&span.points, span.text.as_str(), span.confidence))
        .collect::<tablegrid_core::Result<Vec<_>>>()?;

    let result = reconstructor.reconstruct(&fragments, dump.width, dump.height)?;
    if result.grid.is_empty() {
        info!("{}: no OCR output, skipping CSV", input.display());
        return Ok(());
    }

    let csv_path = output_path(input, out_dir);
    let file = fs::File::create(&csv_path)
        .with_context(|| format!("cannot create {}", csv_path.display()))?;
    let mut exporter = CsvExporter::new(file);
    exporter.export(&result.grid)?;

    info!(
        "{}: {}x{} grid, {} filled cells -> {}",
        input.display(),
        result.stats.kept_rows,
        result.stats.kept_cols,
        result.stats.filled_cells,
        csv_path.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = ReconstructorConfigBuilder::new()
        .suppression_threshold(args.suppression_threshold)
        .cell_iou_threshold(args.cell_iou_threshold)
        .max_candidates_per_axis(args.max_candidates)
        .build()
        .context("invalid reconstruction thresholds")?;
    let reconstructor = TableReconstructor::new(config);

    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
    }

    for input in &args.inputs {
        process_table(&reconstructor, input, args.out_dir.as_deref())
            .with_context(|| format!("failed to process {}", input.display()))?;
    }
    Ok(())
}
