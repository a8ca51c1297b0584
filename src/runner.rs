//! File-to-file trimming runs: reads are trimmed on the calling thread and
//! handed to a writer thread in batches.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::fs;
use std::io::Write;
use std::mem;
use std::path::Path;
use std::thread;

use crate::config::TrimConfig;
use crate::error::{Error, Result};
use crate::fastq_io::{create_writer, read_fastq, FastqWriter};
use crate::pipeline::run;
use crate::read::Read;
use crate::stats::RunStatistics;

/// Trim `input` into `output`.
///
/// On failure the output file is removed, but only once this run has
/// created it. An `output` naming the same file as `input` is rejected
/// before either is opened.
pub fn trim_file(
    input: &Path,
    output: &Path,
    config: TrimConfig,
    batch_size: usize,
) -> Result<RunStatistics> {
    ensure_distinct(input, output)?;

    let reader = read_fastq(input)?;
    let sink = create_writer(output)?;

    let result = trim_stream(reader, sink, config, batch_size);
    if result.is_err() {
        let _ = fs::remove_file(output);
    }
    result
}

fn ensure_distinct(input: &Path, output: &Path) -> Result<()> {
    if !output.exists() {
        return Ok(());
    }
    let same = input == output
        || matches!(
            (fs::canonicalize(input), fs::canonicalize(output)),
            (Ok(a), Ok(b)) if a == b
        );
    if same {
        return Err(Error::SameInputOutput {
            path: output.to_path_buf(),
        });
    }
    Ok(())
}

/// Trim `records` and write the survivors to `sink` on a separate thread.
pub fn trim_stream<I, W>(
    records: I,
    sink: W,
    config: TrimConfig,
    batch_size: usize,
) -> Result<RunStatistics>
where
    I: IntoIterator<Item = Result<Read>>,
    W: Write + Send + 'static,
{
    let batch_size = batch_size.max(1);
    let (batch_tx, batch_rx): (Sender<Vec<Read>>, Receiver<Vec<Read>>) = bounded(16);

    let writer_handle = thread::spawn(move || -> Result<()> {
        let mut writer = FastqWriter::new(sink);
        while let Ok(batch) = batch_rx.recv() {
            writer.write_batch(&batch)?;
        }
        writer.finish()?;
        Ok(())
    });

    let mut pipeline = run(records, config);
    let mut batch = Vec::with_capacity(batch_size);
    let mut trim_result = Ok(());

    for read in pipeline.by_ref() {
        match read {
            Ok(read) => {
                batch.push(read);
                if batch.len() >= batch_size {
                    let full = mem::replace(&mut batch, Vec::with_capacity(batch_size));
                    // receiver gone means the writer failed; its error surfaces on join
                    if batch_tx.send(full).is_err() {
                        break;
                    }
                }
            }
            Err(e) => {
                trim_result = Err(e);
                break;
            }
        }
    }

    if trim_result.is_ok() && !batch.is_empty() {
        let _ = batch_tx.send(batch);
    }
    drop(batch_tx);

    let write_result = writer_handle.join().map_err(|_| Error::WriterPanicked)?;

    trim_result?;
    write_result?;

    Ok(pipeline.finish())
}
