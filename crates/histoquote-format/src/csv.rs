//! CSV output format.

use csv::WriterBuilder;
use histoquote_types::{Asset, Quote, Tick};
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Fields holding the delimiter, a quote or a line break are quoted, so
/// locale prices such as `1 234,50` survive the default comma delimiter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: u8,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: b',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    fn write_rows<W, const N: usize>(
        &self,
        writer: W,
        header: [&str; N],
        rows: impl IntoIterator<Item = [String; N]>,
    ) -> Result<(), FormatError>
    where
        W: Write,
    {
        let mut csv = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);

        if self.include_header {
            csv.write_record(header)?;
        }
        for row in rows {
            csv.write_record(&row)?;
        }

        csv.flush()?;
        Ok(())
    }
}

impl Formatter for CsvFormatter {
    fn write_quotes<W: Write + Send>(
        &self,
        quotes: &[Quote],
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_rows(
            writer,
            ["date", "price"],
            quotes
                .iter()
                .map(|quote| [quote.date.clone(), quote.price.clone()]),
        )
    }

    fn write_ticks<W: Write + Send>(&self, ticks: &[Tick], writer: W) -> Result<(), FormatError> {
        self.write_rows(
            writer,
            ["date", "open", "high", "low", "close", "volume"],
            ticks.iter().map(|tick| {
                [
                    tick.date.to_string(),
                    tick.open.to_string(),
                    tick.high.to_string(),
                    tick.low.to_string(),
                    tick.close.to_string(),
                    tick.volume.to_string(),
                ]
            }),
        )
    }

    fn write_assets<W: Write + Send>(
        &self,
        assets: &[Asset],
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_rows(
            writer,
            ["symbol", "name", "last_price", "price_variation"],
            assets.iter().map(|asset| {
                [
                    asset.symbol.clone(),
                    asset.name.clone(),
                    asset.last_price.clone(),
                    asset.price_variation.clone(),
                ]
            }),
        )
    }
}
