//! Load bank offers from CSV (`name,rate` header)

use csv::{Reader, Trim};
use log::debug;
use std::io::Read;
use std::path::Path;

use crate::error::{CalcError, Result};
use crate::projection::BankOffer;

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    rate: f64,
}

impl CsvRow {
    fn into_offer(self) -> Result<BankOffer> {
        if self.name.is_empty() {
            return Err(CalcError::validation("bank name", "must not be empty"));
        }
        Ok(BankOffer::new(self.name, self.rate))
    }
}

/// Load all offers from a CSV file
pub fn load_bank_offers<P: AsRef<Path>>(path: P) -> Result<Vec<BankOffer>> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new().trim(Trim::All).from_path(path)?;
    let offers = read_offers(reader)?;
    debug!("Loaded {} bank offers from {}", offers.len(), path.display());
    Ok(offers)
}

/// Load offers from any reader (e.g., string buffer, stdin)
pub fn load_bank_offers_from_reader<R: Read>(reader: R) -> Result<Vec<BankOffer>> {
    read_offers(csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader))
}

fn read_offers<R: Read>(mut reader: Reader<R>) -> Result<Vec<BankOffer>> {
    let mut offers = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        offers.push(row.into_offer()?);
    }

    Ok(offers)
}
