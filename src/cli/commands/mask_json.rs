//! Mask-json command implementation
//!
//! Reads a JSON object or an array of objects, masks the fields named in the
//! field masking map and writes the result as pretty-printed JSON.

use crate::config::DatamaskConfig;
use crate::domain::MaskError;
use crate::masking::{FieldMaskingMap, MaskingService, MaskingSummary};
use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};

/// Arguments for the mask-json command
#[derive(Args, Debug)]
pub struct MaskJsonArgs {
    /// Input JSON file, or `-` for stdin
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Field assignment FIELD=STRATEGY; overrides the config [fields] table
    #[arg(short, long)]
    pub field: Vec<String>,
}

impl MaskJsonArgs {
    /// Execute the mask-json command
    pub fn execute(&self, config: &DatamaskConfig) -> Result<i32> {
        let map = match self.field_map(config) {
            Ok(map) => map,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        if map.is_empty() {
            tracing::warn!("No fields mapped; output will equal input");
        }

        let service =
            MaskingService::new(&config.masking).context("Failed to build masking registry")?;

        let raw = self.read_input()?;
        let document: Value = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse JSON from {}", self.input))?;

        let (masked, summary) = mask_document(&service, document, &map);
        let rendered = serde_json::to_string_pretty(&masked).context("Failed to render JSON")?;

        match &self.output {
            Some(path) => {
                fs::write(path, format!("{rendered}\n"))
                    .with_context(|| format!("Failed to write {path}"))?;
                tracing::info!(
                    output = %path,
                    records = summary.records,
                    masked = summary.masked,
                    "Masked JSON written"
                );
            }
            None => println!("{rendered}"),
        }

        Ok(0)
    }

    /// Config `[fields]` overlaid with `--field` assignments
    ///
    /// Every strategy in the merged map must be enabled in `masking.strategies`.
    pub fn field_map(&self, config: &DatamaskConfig) -> crate::domain::Result<FieldMaskingMap> {
        let mut map = config.fields.clone();
        let overrides = self
            .field
            .iter()
            .map(|assignment| FieldMaskingMap::parse_assignment(assignment))
            .collect::<crate::domain::Result<FieldMaskingMap>>()?;
        map.merge(&overrides);

        if let Some((field, strategy)) = map
            .iter()
            .find(|(_, strategy)| !config.masking.strategies.contains(strategy))
        {
            return Err(MaskError::Configuration(format!(
                "--field {field} uses strategy '{strategy}' which is not enabled in masking.strategies"
            )));
        }

        Ok(map)
    }

    fn read_input(&self) -> Result<String> {
        if self.input == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read JSON from stdin")?;
            Ok(buf)
        } else {
            fs::read_to_string(&self.input).with_context(|| format!("Failed to read {}", self.input))
        }
    }
}

/// Mask a top-level object, or every element of a top-level array
pub fn mask_document(
    service: &MaskingService,
    document: Value,
    map: &FieldMaskingMap,
) -> (Value, MaskingSummary) {
    match document {
        Value::Array(records) => {
            let (masked, summary) = service.apply_masking_batch_with_summary(records, map);
            (Value::Array(masked), summary)
        }
        mut record => {
            let summary = service.apply_masking_in_place(&mut record, map);
            (record, summary)
        }
    }
}
