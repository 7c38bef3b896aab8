//! Output formatting for the histoquote CLI.

use anyhow::{Context, Result, bail};
use histoquote_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Where and how command results are written.
#[derive(Debug)]
pub(crate) struct Output {
    path: Option<PathBuf>,
    format: OutputFormat,
    pretty: bool,
    csv: CsvFormatter,
}

impl Output {
    /// Builds the output settings, rejecting a delimiter CSV cannot encode.
    pub(crate) fn new(
        path: Option<PathBuf>,
        format: OutputFormat,
        pretty: bool,
        delimiter: char,
    ) -> Result<Self> {
        if !delimiter.is_ascii() {
            bail!("CSV delimiter must be an ASCII character, got '{delimiter}'");
        }
        Ok(Self {
            path,
            format,
            pretty,
            csv: CsvFormatter::new().with_delimiter(delimiter as u8),
        })
    }

    fn json(&self) -> JsonFormatter {
        match self.format {
            OutputFormat::Ndjson => JsonFormatter::ndjson(),
            _ => JsonFormatter::new().with_pretty(self.pretty),
        }
    }

    fn writer(&self) -> Result<Box<dyn Write + Send>> {
        match &self.path {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(BufWriter::new(std::io::stdout()))),
        }
    }

    fn announce(&self) {
        if let Some(path) = &self.path {
            eprintln!("Output written to: {} ({})", path.display(), self.format);
        }
    }

    /// Writes quote rows.
    pub(crate) fn quotes(&self, quotes: &[Quote]) -> Result<()> {
        let mut writer = self.writer()?;
        match self.format {
            OutputFormat::Csv => self.csv.write_quotes(quotes, &mut writer)?,
            OutputFormat::Json | OutputFormat::Ndjson => {
                self.json().write_quotes(quotes, &mut writer)?;
            }
        }
        writer.flush()?;
        self.announce();
        Ok(())
    }

    /// Writes a tick history. CSV and NDJSON carry the timeline only.
    pub(crate) fn ticks(&self, ticks: &EodTicks) -> Result<()> {
        let mut writer = self.writer()?;
        match self.format {
            OutputFormat::Csv => self.csv.write_ticks(&ticks.timeline, &mut writer)?,
            OutputFormat::Json => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, ticks)?;
                } else {
                    serde_json::to_writer(&mut writer, ticks)?;
                }
                writeln!(writer)?;
            }
            OutputFormat::Ndjson => self.json().write_ticks(&ticks.timeline, &mut writer)?,
        }
        writer.flush()?;
        self.announce();
        Ok(())
    }

    /// Writes search hits.
    pub(crate) fn assets(&self, assets: &[Asset]) -> Result<()> {
        let mut writer = self.writer()?;
        match self.format {
            OutputFormat::Csv => self.csv.write_assets(assets, &mut writer)?,
            OutputFormat::Json | OutputFormat::Ndjson => {
                self.json().write_assets(assets, &mut writer)?;
            }
        }
        writer.flush()?;
        self.announce();
        Ok(())
    }
}
