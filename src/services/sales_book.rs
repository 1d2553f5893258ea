use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::manager::{Manager, Roster, SalesSource};
use crate::domain::period::Period;
use crate::domain::series::{GeneratorSettings, Series};
use crate::services::series_generator::generate_series_with_sampler;
use crate::services::unit_sampler::UnitSampler;

#[derive(Error, Debug)]
pub enum SalesBookError {
    #[error("failed to read sales file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to write sales file {path}: {source}")]
    WriteFile { path: PathBuf, source: io::Error },
    #[error("failed to parse sales yaml {path}: {source}")]
    ParseYaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("failed to parse sales json {path}: {source}")]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unsupported sales file extension: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookFormat {
    Yaml,
    Json,
}

impl BookFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Some(BookFormat::Yaml),
            Some("json") => Some(BookFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerSales {
    pub id: String,
    pub sales: BTreeMap<Period, Series>,
}

/// One series per (manager, period), produced once and kept for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesBook {
    pub generated_on: NaiveDate,
    pub managers: Vec<ManagerSales>,
}

impl SalesBook {
    pub fn generate<S: UnitSampler + ?Sized>(
        roster: &Roster,
        settings: &GeneratorSettings,
        sampler: &mut S,
        generated_on: NaiveDate,
    ) -> Self {
        let managers = roster
            .managers()
            .iter()
            .map(|manager| ManagerSales {
                id: manager.id.clone(),
                sales: Period::ALL
                    .iter()
                    .map(|period| (*period, series_for(manager, *period, settings, sampler)))
                    .collect(),
            })
            .collect();
        info!(managers = roster.managers().len(), "generated sales book");
        Self {
            generated_on,
            managers,
        }
    }

    /// Empty slice when the manager or period is missing from the book.
    pub fn series(&self, manager_id: &str, period: Period) -> &[i64] {
        self.managers
            .iter()
            .find(|entry| entry.id == manager_id)
            .and_then(|entry| entry.sales.get(&period))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replaces the period's series of every seeded manager in the roster.
    /// Fixed series are left as they are.
    pub fn regenerate_period<S: UnitSampler + ?Sized>(
        &mut self,
        roster: &Roster,
        period: Period,
        settings: &GeneratorSettings,
        sampler: &mut S,
    ) {
        for manager in roster.managers() {
            if !matches!(manager.source, SalesSource::Seeded { .. }) {
                continue;
            }
            let series = series_for(manager, period, settings, sampler);
            match self.managers.iter_mut().find(|entry| entry.id == manager.id) {
                Some(entry) => {
                    entry.sales.insert(period, series);
                }
                None => self.managers.push(ManagerSales {
                    id: manager.id.clone(),
                    sales: BTreeMap::from([(period, series)]),
                }),
            }
        }
        debug!(%period, "regenerated period series");
    }
}

fn series_for<S: UnitSampler + ?Sized>(
    manager: &Manager,
    period: Period,
    settings: &GeneratorSettings,
    sampler: &mut S,
) -> Series {
    match &manager.source {
        SalesSource::Seeded {
            base,
            variance,
            trend,
        } => {
            let params = period.params_for(*base, *variance, *trend);
            generate_series_with_sampler(&params, settings, sampler)
        }
        SalesSource::Fixed { .. } => manager
            .source
            .fixed_series(period)
            .cloned()
            .unwrap_or_default(),
    }
}

pub fn serialize_sales_book<W: Write>(
    writer: &mut W,
    book: &SalesBook,
    format: BookFormat,
) -> io::Result<()> {
    match format {
        BookFormat::Yaml => {
            let yaml = serde_yaml::to_string(book).map_err(io::Error::other)?;
            writer.write_all(yaml.as_bytes())
        }
        BookFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, book).map_err(io::Error::other)?;
            writer.write_all(b"\n")
        }
    }
}

pub fn write_sales_book_file<P: AsRef<Path>>(
    path: P,
    book: &SalesBook,
) -> Result<(), SalesBookError> {
    let path = path.as_ref();
    let format = BookFormat::from_path(path)
        .ok_or_else(|| SalesBookError::UnsupportedFormat(path.to_path_buf()))?;
    let mut buffer = Vec::new();
    serialize_sales_book(&mut buffer, book, format)
        .and_then(|_| std::fs::write(path, buffer))
        .map_err(|source| SalesBookError::WriteFile {
            path: path.to_path_buf(),
            source,
        })
}

pub fn load_sales_book_file<P: AsRef<Path>>(path: P) -> Result<SalesBook, SalesBookError> {
    let path = path.as_ref();
    let format = BookFormat::from_path(path)
        .ok_or_else(|| SalesBookError::UnsupportedFormat(path.to_path_buf()))?;
    let contents = std::fs::read_to_string(path).map_err(|source| SalesBookError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    match format {
        BookFormat::Yaml => {
            serde_yaml::from_str(&contents).map_err(|source| SalesBookError::ParseYaml {
                path: path.to_path_buf(),
                source,
            })
        }
        BookFormat::Json => {
            serde_json::from_str(&contents).map_err(|source| SalesBookError::ParseJson {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
