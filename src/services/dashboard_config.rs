use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::manager::{Manager, Rgb, Roster, SalesSource};
use crate::domain::period::Period;
use crate::domain::series::{GeneratorSettings, Series};

#[derive(Error, Debug)]
pub enum DashboardConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("config in {0} lists no managers")]
    EmptyRoster(PathBuf),
    #[error("duplicate manager id in {path}: {id}")]
    DuplicateManager { path: PathBuf, id: String },
    #[error("invalid color for manager {id} in {path}: {value} (expected #rrggbb)")]
    InvalidColor {
        path: PathBuf,
        id: String,
        value: String,
    },
    #[error("manager {id} in {path} needs either `base` or `sales`, not both")]
    AmbiguousSource { path: PathBuf, id: String },
    #[error("manager {id} in {path} has invalid {field}: {value}")]
    InvalidParameter {
        path: PathBuf,
        id: String,
        field: &'static str,
        value: f64,
    },
    #[error("invalid generator setting in {path}: {field} = {value}")]
    InvalidGenerator {
        path: PathBuf,
        field: &'static str,
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub generator: GeneratorSettings,
    pub regenerate_on_switch: bool,
    pub roster: Roster,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorSettings::default(),
            regenerate_on_switch: false,
            roster: Roster::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigRecord {
    generator: Option<GeneratorSettings>,
    regenerate_on_switch: Option<bool>,
    managers: Option<Vec<ManagerRecord>>,
}

#[derive(Debug, Deserialize)]
struct ManagerRecord {
    id: String,
    name: Option<String>,
    city: Option<String>,
    color: Option<String>,
    base: Option<f64>,
    variance: Option<f64>,
    trend: Option<f64>,
    sales: Option<FixedSalesRecord>,
}

#[derive(Debug, Deserialize)]
struct FixedSalesRecord {
    week: Option<Series>,
    month: Option<Series>,
    year: Option<Series>,
}

const DEFAULT_COLOR: Rgb = Rgb(0x34, 0xd3, 0x99);

/// Returns the built-in configuration when `path` is `None`.
pub fn load_config_if_provided(
    path: Option<&str>,
) -> Result<DashboardConfig, DashboardConfigError> {
    match path {
        Some(path) => load_config_from_yaml_file(path),
        None => Ok(DashboardConfig::default()),
    }
}

/// Reads a YAML config. Missing keys keep their built-in values; a
/// `managers` list replaces the built-in roster entirely.
pub fn load_config_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<DashboardConfig, DashboardConfigError> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|source| DashboardConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    let config = deserialize_config_from_yaml_str(&contents, path)?;
    info!(
        path = %path.display(),
        managers = config.roster.managers().len(),
        "loaded dashboard config"
    );
    Ok(config)
}

fn deserialize_config_from_yaml_str(
    input: &str,
    origin_path: &Path,
) -> Result<DashboardConfig, DashboardConfigError> {
    let record: ConfigRecord =
        serde_yaml::from_str(input).map_err(|source| DashboardConfigError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?;

    let generator = record.generator.unwrap_or_default();
    validate_generator(&generator, origin_path)?;

    let roster = match record.managers {
        None => Roster::default(),
        Some(records) => {
            let mut seen = HashSet::new();
            let managers = records
                .into_iter()
                .map(|record| {
                    if !seen.insert(record.id.clone()) {
                        return Err(DashboardConfigError::DuplicateManager {
                            path: origin_path.to_path_buf(),
                            id: record.id,
                        });
                    }
                    manager_from_record(record, origin_path)
                })
                .collect::<Result<Vec<_>, _>>()?;
            Roster::new(managers)
                .ok_or_else(|| DashboardConfigError::EmptyRoster(origin_path.to_path_buf()))?
        }
    };

    Ok(DashboardConfig {
        generator,
        regenerate_on_switch: record.regenerate_on_switch.unwrap_or(false),
        roster,
    })
}

fn validate_generator(
    settings: &GeneratorSettings,
    origin_path: &Path,
) -> Result<(), DashboardConfigError> {
    let checks = [
        ("seasonal_factor", settings.seasonal_factor),
        ("short_series_multiplier", settings.short_series_multiplier),
    ];
    for (field, value) in checks {
        if !value.is_finite() {
            return Err(DashboardConfigError::InvalidGenerator {
                path: origin_path.to_path_buf(),
                field,
                value,
            });
        }
    }

    // a window may span at most the longest period
    let longest = Period::ALL.iter().map(Period::points).max().unwrap_or(0);
    if settings.smoothing_window > longest {
        return Err(DashboardConfigError::InvalidGenerator {
            path: origin_path.to_path_buf(),
            field: "smoothing_window",
            value: settings.smoothing_window as f64,
        });
    }
    Ok(())
}

fn manager_from_record(
    record: ManagerRecord,
    origin_path: &Path,
) -> Result<Manager, DashboardConfigError> {
    let color = match &record.color {
        Some(value) => {
            Rgb::from_hex(value).ok_or_else(|| DashboardConfigError::InvalidColor {
                path: origin_path.to_path_buf(),
                id: record.id.clone(),
                value: value.clone(),
            })?
        }
        None => DEFAULT_COLOR,
    };

    let source = match (record.base, record.sales) {
        (Some(_), Some(_)) | (None, None) => {
            return Err(DashboardConfigError::AmbiguousSource {
                path: origin_path.to_path_buf(),
                id: record.id,
            });
        }
        (None, Some(sales)) => SalesSource::Fixed {
            week: sales.week,
            month: sales.month,
            year: sales.year,
        },
        (Some(base), None) => {
            let variance = record.variance.unwrap_or(0.0);
            let trend = record.trend.unwrap_or(0.0);
            let invalid = |field: &'static str, value: f64| DashboardConfigError::InvalidParameter {
                path: origin_path.to_path_buf(),
                id: record.id.clone(),
                field,
                value,
            };
            if !base.is_finite() || base < 0.0 {
                return Err(invalid("base", base));
            }
            if !variance.is_finite() || variance < 0.0 {
                return Err(invalid("variance", variance));
            }
            if !trend.is_finite() {
                return Err(invalid("trend", trend));
            }
            SalesSource::Seeded {
                base,
                variance,
                trend,
            }
        }
    };

    Ok(Manager {
        name: record.name.unwrap_or_else(|| record.id.clone()),
        city: record.city.unwrap_or_default(),
        id: record.id,
        color,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_fs::prelude::*;

    fn load(contents: &str) -> Result<DashboardConfig, DashboardConfigError> {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("dashboard.yaml");
        file.write_str(contents).unwrap();
        load_config_from_yaml_file(file.path())
    }

    #[test]
    fn missing_path_uses_builtin_config() {
        let config = load_config_if_provided(None).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.roster.managers().len(), 5);
    }

    #[test]
    fn returns_error_when_file_does_not_exist() {
        let temp = assert_fs::TempDir::new().unwrap();
        let missing = temp.path().join("missing.yaml");
        let err = load_config_from_yaml_file(&missing).unwrap_err();
        assert!(matches!(err, DashboardConfigError::ReadFile { path, .. } if path == missing));
    }

    #[test]
    fn returns_error_on_invalid_yaml_syntax() {
        let err = load("managers: [\n").unwrap_err();
        assert!(matches!(err, DashboardConfigError::Parse { .. }));
    }

    #[test]
    fn empty_document_keeps_defaults() {
        let config = load("{}\n").unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn partial_generator_settings_keep_other_defaults() {
        let config = load("generator:\n  floor: 60\n  seasonal_factor: 0.4\n").unwrap();
        assert_eq!(config.generator.floor, 60);
        assert_eq!(config.generator.seasonal_factor, 0.4);
        assert_eq!(config.generator.smoothing_window, 2);
        assert_eq!(config.generator.short_series_multiplier, 4.0);
    }

    #[test]
    fn returns_error_on_oversized_smoothing_window() {
        let err = load("generator:\n  smoothing_window: 18446744073709551615\n").unwrap_err();
        assert!(matches!(
            err,
            DashboardConfigError::InvalidGenerator { field: "smoothing_window", .. }
        ));

        let err = load("generator:\n  smoothing_window: 31\n").unwrap_err();
        assert!(matches!(err, DashboardConfigError::InvalidGenerator { .. }));

        let config = load("generator:\n  smoothing_window: 30\n").unwrap();
        assert_eq!(config.generator.smoothing_window, 30);
    }

    #[test]
    fn returns_error_on_empty_roster() {
        let err = load("managers: []\n").unwrap_err();
        assert!(matches!(err, DashboardConfigError::EmptyRoster(_)));
    }

    #[test]
    fn returns_error_on_duplicate_ids() {
        let err =
            load("managers:\n  - id: a\n    base: 10\n  - id: a\n    base: 20\n").unwrap_err();
        assert!(matches!(err, DashboardConfigError::DuplicateManager { id, .. } if id == "a"));
    }

    #[test]
    fn returns_error_on_invalid_color() {
        let err = load("managers:\n  - id: a\n    base: 10\n    color: green\n").unwrap_err();
        assert!(matches!(err, DashboardConfigError::InvalidColor { .. }));
    }

    #[test]
    fn returns_error_on_negative_variance() {
        let err = load("managers:\n  - id: a\n    base: 10\n    variance: -1\n").unwrap_err();
        assert!(matches!(
            err,
            DashboardConfigError::InvalidParameter { field: "variance", .. }
        ));
    }

    #[test]
    fn returns_error_when_source_is_missing_or_ambiguous() {
        let err = load("managers:\n  - id: a\n").unwrap_err();
        assert!(matches!(err, DashboardConfigError::AmbiguousSource { .. }));

        let err =
            load("managers:\n  - id: a\n    base: 1\n    sales:\n      month: [1]\n").unwrap_err();
        assert!(matches!(err, DashboardConfigError::AmbiguousSource { .. }));
    }

    #[test]
    fn loads_seeded_and_fixed_managers() {
        let config = load(
            "regenerate_on_switch: true\nmanagers:\n  - id: anna\n    name: Анна\n    city: Пермь\n    color: \"#0ea05d\"\n    base: 120\n    variance: 30\n    trend: 0.5\n  - id: oleg\n    sales:\n      month: [120, 90, 100]\n",
        )
        .unwrap();

        assert!(config.regenerate_on_switch);
        let managers = config.roster.managers();
        assert_eq!(managers.len(), 2);
        assert_eq!(managers[0].name, "Анна");
        assert_eq!(managers[0].color, Rgb(0x0e, 0xa0, 0x5d));
        assert_eq!(
            managers[0].source,
            SalesSource::Seeded {
                base: 120.0,
                variance: 30.0,
                trend: 0.5
            }
        );
        assert_eq!(managers[1].name, "oleg");
        assert_eq!(managers[1].color, DEFAULT_COLOR);
        assert_eq!(
            managers[1].source,
            SalesSource::Fixed {
                week: None,
                month: Some(vec![120, 90, 100]),
                year: None
            }
        );
    }
}
