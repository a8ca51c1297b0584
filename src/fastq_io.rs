//! FASTQ record source and sink (4-line records, Phred+33), plain or gzip.

use fastq::{OwnedRecord, Record};
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::quality;
use crate::read::Read;

pub const OUTPUT_SUFFIX: &str = "_trimmed";

fn is_gzip(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    let file = File::open(path)?;

    if is_gzip(path) {
        let decoder = MultiGzDecoder::new(file);
        // 2MB 读缓冲
        Ok(Box::new(BufReader::with_capacity(2 << 20, decoder)))
    } else {
        Ok(Box::new(BufReader::with_capacity(2 << 20, file)))
    }
}

pub fn create_writer(path: &Path) -> Result<Box<dyn Write + Send>> {
    let file = File::create(path)?;

    if is_gzip(path) {
        // level 1: speed over ratio
        let encoder = GzEncoder::new(file, Compression::new(1));
        Ok(Box::new(BufWriter::with_capacity(4 << 20, encoder)))
    } else {
        Ok(Box::new(BufWriter::with_capacity(4 << 20, file)))
    }
}

/// `reads.fastq` -> `reads_trimmed.fastq`, `reads.fq.gz` -> `reads_trimmed.fastq.gz`.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let gzip = is_gzip(input);
    let mut base = input.with_extension("");
    if gzip && matches!(base.extension().and_then(|s| s.to_str()), Some("fastq" | "fq")) {
        base = base.with_extension("");
    }

    let stem = base
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = if gzip { ".fastq.gz" } else { ".fastq" };
    base.with_file_name(format!("{}{}{}", stem, OUTPUT_SUFFIX, extension))
}

/// Lazily parses [`Read`]s from 4-line FASTQ text.
pub struct FastqReader<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        FastqReader {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            Some(line) => {
                self.line_no += 1;
                let mut line = line?;
                if line.ends_with('\r') {
                    line.pop();
                }
                Ok(Some(line))
            }
            None => Ok(None),
        }
    }

    fn require_line(&mut self, what: &str) -> Result<String> {
        self.next_line()?.ok_or_else(|| Error::MalformedRecord {
            line: self.line_no + 1,
            msg: format!("unexpected end of file while reading {}", what),
        })
    }

    fn read_record(&mut self) -> Result<Option<Read>> {
        // Skip blank lines between records
        let header = loop {
            match self.next_line()? {
                Some(line) if line.is_empty() => continue,
                Some(line) => break line,
                None => return Ok(None),
            }
        };
        let Some(header) = header.strip_prefix('@') else {
            return Err(Error::MalformedRecord {
                line: self.line_no,
                msg: "header line does not start with '@'".to_string(),
            });
        };
        let id = header.split_whitespace().next().unwrap_or_default().to_string();
        let description = header.to_string();

        let sequence = self.require_line("sequence")?.into_bytes();

        let separator = self.require_line("separator")?;
        if !separator.starts_with('+') {
            return Err(Error::MalformedRecord {
                line: self.line_no,
                msg: "separator line does not start with '+'".to_string(),
            });
        }

        let quality = self.require_line("quality")?;
        let line = self.line_no;
        let qualities = quality::decode_all(quality.as_bytes()).map_err(|e| {
            Error::MalformedRecord {
                line,
                msg: e.to_string(),
            }
        })?;

        Read::new(id, description, sequence, qualities).map(Some)
    }
}

impl<R: BufRead> Iterator for FastqReader<R> {
    type Item = Result<Read>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

pub fn read_fastq(path: &Path) -> Result<FastqReader<Box<dyn BufRead + Send>>> {
    Ok(FastqReader::new(open_reader(path)?))
}

/// Serializes [`Read`]s back into 4-line FASTQ.
pub struct FastqWriter<W: Write> {
    inner: W,
    buffer: Vec<u8>,
}

impl<W: Write> FastqWriter<W> {
    pub fn new(inner: W) -> Self {
        FastqWriter {
            inner,
            buffer: Vec::with_capacity(1 << 20),
        }
    }

    fn encode_into(buffer: &mut Vec<u8>, read: &Read) -> Result<()> {
        let head = if read.description().is_empty() {
            read.id()
        } else {
            read.description()
        };
        let record = OwnedRecord {
            head: head.as_bytes().to_vec(),
            seq: read.sequence().to_vec(),
            sep: None,
            qual: quality::encode_all(read.qualities())?,
        };
        record.write(buffer)?;
        Ok(())
    }

    pub fn write_read(&mut self, read: &Read) -> Result<()> {
        self.write_batch(std::slice::from_ref(read))
    }

    /// Encode a batch into the scratch buffer, then hand it to the writer in one call.
    pub fn write_batch(&mut self, reads: &[Read]) -> Result<()> {
        self.buffer.clear();
        for read in reads {
            Self::encode_into(&mut self.buffer, read)?;
        }
        self.inner.write_all(&self.buffer)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
