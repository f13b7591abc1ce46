// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Command line interface.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{LookupResult, Point};
use crate::services::presentation::{self, DistrictLabel, Marker};
use crate::services::{
    normalize_district_id, BoundaryStore, DistrictLocator, LoadReport, LocateOutcome,
    NominatimGeocoder,
};
use clap::{Args, Parser, Subcommand, ValueHint};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "district_locator=debug,info";

/// Find which congressional district an address or point is in
#[derive(Parser, Debug)]
#[command(name = "district-locator", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides for where boundaries come from.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// District boundaries GeoJSON file
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub boundaries: Option<PathBuf>,

    /// Download boundaries from this URL instead of reading a file
    #[arg(long, global = true, conflicts_with = "boundaries")]
    pub url: Option<String>,

    /// Attribute holding the district number (e.g. CD118FP)
    #[arg(long, global = true)]
    pub field: Option<String>,

    /// District to highlight (e.g. 8)
    #[arg(long, global = true)]
    pub highlight: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up the district containing a coordinate
    Point {
        /// Latitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        /// Label for the marker popup
        #[arg(long)]
        label: Option<String>,
    },

    /// Geocode an address and look up its district
    Locate {
        /// Free-text address
        #[arg(required = true, num_args = 1..)]
        address: Vec<String>,
    },

    /// List loaded districts in numeric order with label positions
    Districts,

    /// Write the styled district GeoJSON for the map
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Apply command line overrides on top of the environment config.
    pub fn apply_to(&self, config: &mut Config) -> Result<()> {
        if let Some(path) = &self.source.boundaries {
            config.boundaries_path = path.clone();
            config.boundaries_url = None;
        }
        if let Some(url) = &self.source.url {
            config.boundaries_url = Some(url.clone());
        }
        if let Some(field) = &self.source.field {
            config.district_field = Some(field.clone());
        }
        if let Some(raw) = &self.source.highlight {
            config.highlight_district = normalize_district_id(raw)
                .ok_or_else(|| AppError::BadRequest(format!("--highlight must be a district number, got {:?}", raw)))?;
        }
        Ok(())
    }
}

/// Log filter for the binary.
///
/// A valid `rust_log` replaces the default filter entirely; `-v` raises this
/// crate to trace on top of either.
pub fn log_filter(rust_log: Option<&str>, verbose: u8) -> EnvFilter {
    let mut filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));
    if verbose > 0 {
        if let Ok(directive) = "district_locator=trace".parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Lookup output: the result plus the marker the map should draw.
#[derive(Debug, Serialize)]
pub struct LookupOutput {
    pub result: LookupResult,
    pub marker: Marker,
}

#[derive(Debug, Serialize)]
struct DistrictsOutput {
    highlighted: String,
    districts: Vec<DistrictEntry>,
    load: LoadReport,
}

#[derive(Debug, Serialize)]
struct DistrictEntry {
    district_id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<DistrictLabel>,
}

/// Load boundaries according to `config`.
pub async fn load_boundaries(config: &Config) -> Result<(BoundaryStore, LoadReport)> {
    let store = BoundaryStore::new();
    let field = config.district_field.as_deref();

    let report = match &config.boundaries_url {
        Some(url) => {
            let http = reqwest::Client::builder()
                .user_agent(config.geocoder_user_agent.as_str())
                .build()
                .map_err(|e| AppError::Internal(e.into()))?;
            store.fetch_from_url(&http, url, field).await?
        }
        None => {
            tracing::info!(path = %config.boundaries_path.display(), "Loading district boundaries");
            store.load_from_file(&config.boundaries_path, field)?
        }
    };

    if store.snapshot().is_empty() {
        tracing::warn!("No districts loaded; every lookup will come back not found");
    }

    Ok((store, report))
}

/// Run one command, writing JSON to `out`.
pub async fn run<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> Result<()> {
    let (store, report) = load_boundaries(config).await?;

    let geocoder = NominatimGeocoder::new(
        &config.geocoder_url,
        &config.geocoder_region_suffix,
        &config.geocoder_user_agent,
    )?;
    let locator = DistrictLocator::new(store, geocoder, config.highlight_district.clone());

    match &cli.command {
        Commands::Point { lat, lng, label } => {
            let point = Point::new(*lat, *lng);
            let label = label
                .clone()
                .unwrap_or_else(|| format!("{:.5}, {:.5}", lat, lng));
            let result = locator.locate_point(point, label);
            write_json(out, &lookup_output(result))
        }
        Commands::Locate { address } => {
            let address = address.join(" ");
            match locator.locate(&address).await? {
                LocateOutcome::Resolved(result) => write_json(out, &lookup_output(result)),
                LocateOutcome::AddressNotFound => Err(AppError::BadRequest(format!(
                    "Address not found: {}",
                    address
                ))),
            }
        }
        Commands::Districts => {
            let snapshot = locator.boundaries().snapshot();
            let labels = presentation::district_labels(&snapshot, locator.highlighted_district());
            let districts = presentation::sorted_district_ids(&snapshot)
                .into_iter()
                .filter_map(|id| {
                    let feature = snapshot.get(&id)?;
                    Some(DistrictEntry {
                        name: feature.display_name(),
                        label: labels.iter().find(|l| l.district_id == id).cloned(),
                        district_id: id,
                    })
                })
                .collect();

            write_json(
                out,
                &DistrictsOutput {
                    highlighted: locator.highlighted_district().to_string(),
                    districts,
                    load: report,
                },
            )
        }
        Commands::Export { output } => {
            let snapshot = locator.boundaries().snapshot();
            let collection =
                presentation::styled_feature_collection(&snapshot, locator.highlighted_district());

            match output {
                Some(path) => {
                    let json = serde_json::to_string(&collection)
                        .map_err(|e| AppError::Internal(e.into()))?;
                    std::fs::write(path, json).map_err(|e| AppError::Internal(e.into()))?;
                    tracing::info!(path = %path.display(), count = snapshot.len(), "Wrote styled districts");
                    Ok(())
                }
                None => write_json(out, &collection),
            }
        }
    }
}

fn lookup_output(result: LookupResult) -> LookupOutput {
    let marker = presentation::marker_for(&result);
    LookupOutput { result, marker }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(|e| AppError::Internal(e.into()))?;
    writeln!(out).map_err(|e| AppError::Internal(e.into()))
}
