//! Catalog loading — Parquet preferred, CSV fallback.
//!
//! The source column names are fixed for compatibility with the published
//! dataset and must not be renamed: `Name`, `Type`, `Category`, `Cuisine`,
//! `Price_Range`, `Halal_Status`, `Address`, `Opening_Hours`, `Description`,
//! `Accessibility_Info`, `Public_Transport`, `Contact_Website`,
//! `Famous_Dish`, `Ticket_Price_Breakdown`, `Image_URL`.

use std::path::Path;

use arrow::array::{Array, LargeStringArray, StringArray};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use tracing::info;

use jalan_core::{DataPaths, Error, Result};

use crate::types::{PlaceRecord, PlaceType};

/// The in-memory place catalog. Ordered as in the source file; that order
/// is the stable tie-break for every downstream consumer.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<PlaceRecord>,
}

impl Catalog {
    /// Load the catalog from the configured data paths.
    ///
    /// Prefers the Parquet source when both files are present. Fails with
    /// `DataUnavailable` when neither exists. Row-level oddities degrade the
    /// affected field to `None` rather than failing the load.
    pub fn load(paths: &DataPaths) -> Result<Self> {
        if paths.catalog_parquet.exists() {
            let records = read_parquet(&paths.catalog_parquet)?;
            info!(
                rows = records.len(),
                path = %paths.catalog_parquet.display(),
                "loaded catalog from parquet"
            );
            return Ok(Self { records });
        }
        if paths.catalog_csv.exists() {
            let records = read_csv(&paths.catalog_csv)?;
            info!(
                rows = records.len(),
                path = %paths.catalog_csv.display(),
                "loaded catalog from csv"
            );
            return Ok(Self { records });
        }
        Err(Error::DataUnavailable(format!(
            "no catalog file found; place places.parquet or places.csv in {}",
            paths.root.display()
        )))
    }

    /// Build a catalog from records directly. Used for synthetic test data.
    pub fn from_records(records: Vec<PlaceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PlaceRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlaceRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Normalize a raw cell: empty or whitespace-only becomes `None`.
fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

// ---------------------------------------------------------------
// Parquet
// ---------------------------------------------------------------

fn read_parquet(path: &Path) -> Result<Vec<PlaceRecord>> {
    let file = std::fs::File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|e| Error::Catalog(format!("parquet open failed: {e}")))?
        .build()
        .map_err(|e| Error::Catalog(format!("parquet read failed: {e}")))?;

    let mut records = Vec::new();
    for batch in reader {
        let batch = batch.map_err(|e| Error::Catalog(format!("parquet batch failed: {e}")))?;
        append_batch(&batch, &mut records);
    }
    Ok(records)
}

fn append_batch(batch: &RecordBatch, records: &mut Vec<PlaceRecord>) {
    let col = |name: &str, row: usize| -> Option<String> {
        let idx = batch.schema().index_of(name).ok()?;
        string_at(batch.column(idx).as_ref(), row)
    };

    for row in 0..batch.num_rows() {
        records.push(PlaceRecord {
            name: col("Name", row).unwrap_or_default(),
            place_type: PlaceType::from_label(&col("Type", row).unwrap_or_default()),
            category: non_empty(col("Category", row)),
            cuisine: non_empty(col("Cuisine", row)),
            price_range: non_empty(col("Price_Range", row)),
            halal_status: non_empty(col("Halal_Status", row)),
            address: non_empty(col("Address", row)),
            opening_hours: non_empty(col("Opening_Hours", row)),
            description: non_empty(col("Description", row)),
            accessibility_info: non_empty(col("Accessibility_Info", row)),
            how_to_get_there: non_empty(col("Public_Transport", row)),
            contact: non_empty(col("Contact_Website", row)),
            famous_for: non_empty(col("Famous_Dish", row)),
            ticket_price: non_empty(col("Ticket_Price_Breakdown", row)),
            image_url: non_empty(col("Image_URL", row)),
        });
    }
}

/// Extract a string cell, tolerating both utf8 widths. Nulls and
/// non-string columns yield `None`.
fn string_at(array: &dyn Array, row: usize) -> Option<String> {
    if array.is_null(row) {
        return None;
    }
    if let Some(a) = array.as_any().downcast_ref::<StringArray>() {
        return Some(a.value(row).to_string());
    }
    if let Some(a) = array.as_any().downcast_ref::<LargeStringArray>() {
        return Some(a.value(row).to_string());
    }
    None
}

// ---------------------------------------------------------------
// CSV
// ---------------------------------------------------------------

/// Raw CSV row, field names bound to the source header verbatim.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Name", default)]
    name: Option<String>,
    #[serde(rename = "Type", default)]
    place_type: Option<String>,
    #[serde(rename = "Category", default)]
    category: Option<String>,
    #[serde(rename = "Cuisine", default)]
    cuisine: Option<String>,
    #[serde(rename = "Price_Range", default)]
    price_range: Option<String>,
    #[serde(rename = "Halal_Status", default)]
    halal_status: Option<String>,
    #[serde(rename = "Address", default)]
    address: Option<String>,
    #[serde(rename = "Opening_Hours", default)]
    opening_hours: Option<String>,
    #[serde(rename = "Description", default)]
    description: Option<String>,
    #[serde(rename = "Accessibility_Info", default)]
    accessibility_info: Option<String>,
    #[serde(rename = "Public_Transport", default)]
    how_to_get_there: Option<String>,
    #[serde(rename = "Contact_Website", default)]
    contact: Option<String>,
    #[serde(rename = "Famous_Dish", default)]
    famous_for: Option<String>,
    #[serde(rename = "Ticket_Price_Breakdown", default)]
    ticket_price: Option<String>,
    #[serde(rename = "Image_URL", default)]
    image_url: Option<String>,
}

impl From<RawRow> for PlaceRecord {
    fn from(raw: RawRow) -> Self {
        PlaceRecord {
            name: non_empty(raw.name).unwrap_or_default(),
            place_type: PlaceType::from_label(raw.place_type.as_deref().unwrap_or("")),
            category: non_empty(raw.category),
            cuisine: non_empty(raw.cuisine),
            price_range: non_empty(raw.price_range),
            halal_status: non_empty(raw.halal_status),
            address: non_empty(raw.address),
            opening_hours: non_empty(raw.opening_hours),
            description: non_empty(raw.description),
            accessibility_info: non_empty(raw.accessibility_info),
            how_to_get_there: non_empty(raw.how_to_get_there),
            contact: non_empty(raw.contact),
            famous_for: non_empty(raw.famous_for),
            ticket_price: non_empty(raw.ticket_price),
            image_url: non_empty(raw.image_url),
        }
    }
}

fn read_csv(path: &Path) -> Result<Vec<PlaceRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::Catalog(format!("csv open failed: {e}")))?;

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        let raw = row.map_err(|e| Error::Catalog(format!("csv row failed: {e}")))?;
        records.push(PlaceRecord::from(raw));
    }
    Ok(records)
}
