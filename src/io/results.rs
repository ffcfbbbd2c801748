use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};

/// Separator between filename and result in each record
pub const RECORD_SEPARATOR: &str = "-->";

/// Writer for the results file.
///
/// The file is truncated on creation and every record is flushed as soon as it is
/// written, so an interrupted run leaves all completed records on disk.
pub struct ResultsWriter {
    path: PathBuf,
    out: BufWriter<File>,
    records: usize,
}

impl ResultsWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| Error::ResultsFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            out: BufWriter::new(file),
            records: 0,
        })
    }

    /// Write `<filename>--><result>\n`
    pub fn write_record(&mut self, filename: &str, result: impl std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{}{}{}", filename, RECORD_SEPARATOR, result)?;
        self.out.flush()?;
        self.records += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn finish(mut self) -> Result<usize> {
        self.out.flush()?;
        info!("Wrote {} record(s) to {:?}", self.records, self.path);
        Ok(self.records)
    }
}
