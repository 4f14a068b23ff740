use crate::error::CrawlError;
use crate::results::CastRecord;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tokio::sync::mpsc;

/// Tabular file formats for crawl output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
    #[serde(alias = "jsonl", alias = "jl")]
    JsonLines,
}

impl OutputFormat {
    /// Picks a format from the file extension, falling back to CSV
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => OutputFormat::Json,
            Some("jsonl") | Some("jl") | Some("jsonlines") => OutputFormat::JsonLines,
            _ => OutputFormat::Csv,
        }
    }
}

/// Streaming writer for cast records
pub enum RecordSink<W: Write> {
    Csv(csv::Writer<W>),
    Json { out: W, written: usize },
    JsonLines(W),
}

impl<W: Write> RecordSink<W> {
    /// Opens a sink and writes any preamble (CSV header, JSON array start)
    pub fn new(out: W, format: OutputFormat) -> Result<Self, CrawlError> {
        let sink = match format {
            OutputFormat::Csv => {
                let mut writer = csv::WriterBuilder::new()
                    .has_headers(false)
                    .from_writer(out);
                writer.write_record(CastRecord::COLUMNS)?;
                RecordSink::Csv(writer)
            }
            OutputFormat::Json => {
                let mut out = out;
                out.write_all(b"[")?;
                RecordSink::Json { out, written: 0 }
            }
            OutputFormat::JsonLines => RecordSink::JsonLines(out),
        };
        Ok(sink)
    }

    pub fn write(&mut self, record: &CastRecord) -> Result<(), CrawlError> {
        match self {
            RecordSink::Csv(writer) => writer.serialize(record)?,
            RecordSink::Json { out, written } => {
                let separator: &[u8] = if *written == 0 { b"\n" } else { b",\n" };
                out.write_all(separator)?;
                serde_json::to_writer(&mut *out, record)?;
                *written += 1;
            }
            RecordSink::JsonLines(out) => {
                serde_json::to_writer(&mut *out, record)?;
                out.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    /// Writes any trailer and flushes, handing back the underlying writer
    pub fn finish(self) -> Result<W, CrawlError> {
        match self {
            RecordSink::Csv(mut writer) => {
                writer.flush()?;
                writer
                    .into_inner()
                    .map_err(|e| CrawlError::Io(e.into_error()))
            }
            RecordSink::Json { mut out, .. } => {
                out.write_all(b"\n]\n")?;
                out.flush()?;
                Ok(out)
            }
            RecordSink::JsonLines(mut out) => {
                out.flush()?;
                Ok(out)
            }
        }
    }
}

/// Drains the record stream into `path`, returning how many rows were written
pub async fn write_records(
    path: &Path,
    format: OutputFormat,
    mut rx: mpsc::Receiver<CastRecord>,
) -> Result<usize, CrawlError> {
    ::log::info!("Writing {:?} output to {}", format, path.display());

    let file = File::create(path)?;
    let mut sink = RecordSink::new(BufWriter::new(file), format)?;

    let mut count = 0;
    while let Some(record) = rx.recv().await {
        sink.write(&record)?;
        count += 1;
        ::log::trace!("Wrote record {}: {:?}", count, record);
    }

    sink.finish()?;
    Ok(count)
}
