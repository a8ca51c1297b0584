use std::fs;
use std::io::{Cursor, Read as _, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use fastq_quality_trimmer::fastq_io::{
    create_writer, derive_output_path, read_fastq, FastqReader, FastqWriter,
};
use fastq_quality_trimmer::{run, Error, Read, Result, TrimConfig};

fn parse(text: &str) -> Vec<Result<Read>> {
    FastqReader::new(Cursor::new(text.as_bytes().to_vec())).collect()
}

#[test]
fn test_parse_records() {
    let reads: Vec<Read> = parse("@r1 sample=1\nACGT\n+\nII++\n@r2\nGG\n+r2\n!~\n")
        .into_iter()
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(reads.len(), 2);
    assert_eq!(reads[0].id(), "r1");
    assert_eq!(reads[0].description(), "r1 sample=1");
    assert_eq!(reads[0].sequence(), b"ACGT");
    assert_eq!(reads[0].qualities(), &[40, 40, 10, 10]);
    assert_eq!(reads[1].id(), "r2");
    assert_eq!(reads[1].qualities(), &[0, 93]);
}

#[test]
fn test_parse_tolerates_crlf_and_blank_lines() {
    let reads: Vec<Read> = parse("@r1\r\nAC\r\n+\r\nII\r\n\n\n@r2\r\nT\r\n+\r\n5\r\n")
        .into_iter()
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(reads.len(), 2);
    assert_eq!(reads[0].sequence(), b"AC");
    assert_eq!(reads[1].qualities(), &[20]);
}

#[test]
fn test_parse_empty_read() {
    let reads = parse("@empty\n\n+\n\n");
    assert_eq!(reads.len(), 1);
    assert!(reads[0].as_ref().unwrap().is_empty());
}

#[test]
fn test_length_mismatch_is_invalid_record() {
    let reads = parse("@r1\nACGT\n+\nII\n");
    assert!(matches!(
        reads[0],
        Err(Error::InvalidRecord { sequence_len: 4, quality_len: 2, .. })
    ));
}

#[test]
fn test_missing_header_marker() {
    let reads = parse("r1\nACGT\n+\nIIII\n");
    assert!(matches!(reads[0], Err(Error::MalformedRecord { line: 1, .. })));
}

#[test]
fn test_missing_separator() {
    let reads = parse("@r1\nACGT\nIIII\nIIII\n");
    assert!(matches!(reads[0], Err(Error::MalformedRecord { line: 3, .. })));
}

#[test]
fn test_truncated_record() {
    let reads = parse("@r1\nACGT\n+\n");
    assert!(matches!(reads[0], Err(Error::MalformedRecord { line: 4, .. })));
}

#[test]
fn test_invalid_quality_character() {
    let reads = parse("@r1\nAC\n+\nII\n@r2\nAC\n+\nI \n");
    assert!(reads[0].is_ok());
    match &reads[1] {
        Err(Error::MalformedRecord { line, msg }) => {
            assert_eq!(*line, 8);
            assert!(msg.contains("' '"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_write_records() {
    let trimmed = Read::new("r1", "r1 sample=1", b"GTAC".to_vec(), vec![30, 30, 30, 30]).unwrap();
    let bare = Read::new("r2", "", b"A".to_vec(), vec![40]).unwrap();

    let mut writer = FastqWriter::new(Vec::new());
    writer.write_batch(&[trimmed]).unwrap();
    writer.write_read(&bare).unwrap();
    let out = writer.finish().unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "@r1 sample=1\nGTAC\n+\n????\n@r2\nA\n+\nI\n"
    );
}

#[test]
fn test_derive_output_path() {
    assert_eq!(
        derive_output_path(Path::new("reads.fastq")),
        Path::new("reads_trimmed.fastq")
    );
    assert_eq!(
        derive_output_path(Path::new("/data/run1/sample.fq")),
        Path::new("/data/run1/sample_trimmed.fastq")
    );
    assert_eq!(
        derive_output_path(Path::new("reads")),
        Path::new("reads_trimmed.fastq")
    );
    assert_eq!(
        derive_output_path(Path::new("reads.fq.gz")),
        Path::new("reads_trimmed.fastq.gz")
    );
    assert_eq!(
        derive_output_path(Path::new("sample.R1.gz")),
        Path::new("sample.R1_trimmed.fastq.gz")
    );
}

#[test]
fn test_file_round_trip_through_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("reads.fastq");
    fs::write(
        &input,
        "@r1\nACGTACGT\n+\n++????++\n@r2\nACGT\n+\n&&&&\n@r3\nTTGCA\n+\n????)\n",
    )
    .unwrap();
    let output = derive_output_path(&input);

    let mut pipeline = run(read_fastq(&input).unwrap(), TrimConfig::base(20));
    let kept: Vec<Read> = pipeline.by_ref().collect::<Result<_>>().unwrap();
    let mut writer = FastqWriter::new(create_writer(&output).unwrap());
    writer.write_batch(&kept).unwrap();
    drop(writer.finish().unwrap());

    let stats = pipeline.finish();
    assert_eq!(stats.total_sequences, 3);
    assert_eq!(stats.discarded_sequences, 1);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "@r1\nGTAC\n+\n????\n@r3\nTTGC\n+\n????\n"
    );
}

#[test]
fn test_gzip_input_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("reads.fastq.gz");
    {
        let mut w = create_writer(&input).unwrap();
        w.write_all(b"@r1\nACGTA\n+\n+???+\n").unwrap();
    }
    let output = derive_output_path(&input);
    assert_eq!(output.file_name().unwrap(), "reads_trimmed.fastq.gz");

    let mut pipeline = run(read_fastq(&input).unwrap(), TrimConfig::base(20));
    let kept: Vec<Read> = pipeline.by_ref().collect::<Result<_>>().unwrap();
    assert_eq!(kept[0].sequence(), b"CGT");

    let mut writer = FastqWriter::new(create_writer(&output).unwrap());
    writer.write_batch(&kept).unwrap();
    drop(writer.finish().unwrap());

    let mut text = String::new();
    MultiGzDecoder::new(fs::File::open(&output).unwrap())
        .read_to_string(&mut text)
        .unwrap();
    assert_eq!(text, "@r1\nCGT\n+\n???\n");
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_fastq(&dir.path().join("absent.fastq")).err().unwrap();
    assert!(matches!(err, Error::Io(_)));
}
