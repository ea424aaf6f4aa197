//! # Result log
//!
//! Every attempted operation is appended as one CSV row and flushed at once,
//! so an interrupted run still leaves everything it did on disk.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Context;

use snmpush_common::operation::ResultRecord;

/// Destination for result records.
pub trait ResultSink {
    fn append(&mut self, record: &ResultRecord) -> anyhow::Result<()>;
}

impl<T: ResultSink + ?Sized> ResultSink for &mut T {
    fn append(&mut self, record: &ResultRecord) -> anyhow::Result<()> {
        (**self).append(record)
    }
}

/// Keeps records in memory.
impl ResultSink for Vec<ResultRecord> {
    fn append(&mut self, record: &ResultRecord) -> anyhow::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

pub struct CsvResultLog<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvResultLog<File> {
    /// Creates (or truncates) the log file and writes the header.
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("creating result log {}", path.display()))?;
        Self::from_writer(file)
    }
}

impl<W: Write> CsvResultLog<W> {
    pub fn from_writer(inner: W) -> anyhow::Result<Self> {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(ResultRecord::HEADER)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    pub fn into_inner(self) -> anyhow::Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("flushing result log: {}", e.error()))
    }
}

impl<W: Write> ResultSink for CsvResultLog<W> {
    fn append(&mut self, record: &ResultRecord) -> anyhow::Result<()> {
        self.writer.serialize(record).context("writing result row")?;
        self.writer.flush().context("flushing result log")?;
        Ok(())
    }
}
