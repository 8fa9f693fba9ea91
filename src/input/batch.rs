/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::input::process_input;
use crate::shared::OutputFormat;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to open input file {path}: {source}")]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to create output file {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("batch I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Processes one request per input line and writes one result line per request.
 *
 * Lines that fail to parse produce `Error: <message>` in the output and do not stop the batch.
 * Only I/O failures abort.
 */
pub fn process_batch<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    floor_travel_time: u64,
    format: OutputFormat,
) -> Result<BatchSummary, BatchError> {
    let mut summary = BatchSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        summary.processed += 1;

        match process_input(&line, floor_travel_time) {
            Ok(result) => writeln!(writer, "{}", format.render(&result))?,
            Err(e) => {
                warn!("Line {}: {}", index + 1, e);
                summary.failed += 1;
                writeln!(writer, "Error: {}", e)?;
            }
        }
    }

    writer.flush()?;
    Ok(summary)
}

pub fn run_batch(
    input_path: &Path,
    output_path: &Path,
    floor_travel_time: u64,
    format: OutputFormat,
) -> Result<BatchSummary, BatchError> {
    let input = File::open(input_path).map_err(|source| BatchError::OpenInput {
        path: input_path.to_path_buf(),
        source,
    })?;
    let output = File::create(output_path).map_err(|source| BatchError::CreateOutput {
        path: output_path.to_path_buf(),
        source,
    })?;

    let summary = process_batch(
        BufReader::new(input),
        BufWriter::new(output),
        floor_travel_time,
        format,
    )?;

    info!(
        "Processed {} requests from {} into {} ({} failed)",
        summary.processed,
        input_path.display(),
        output_path.display(),
        summary.failed
    );
    Ok(summary)
}
