use chrono::Local;
use thiserror::Error;

use crate::services::dashboard_config::{
    DashboardConfig, DashboardConfigError, load_config_if_provided,
};
use crate::services::sales_book::{SalesBook, SalesBookError, load_sales_book_file};
use crate::services::unit_sampler::{UnitSampler, sampler_from_seed};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] DashboardConfigError),
    #[error(transparent)]
    SalesBook(#[from] SalesBookError),
}

/// Config, sales and the sampler later used for regeneration.
pub struct Session {
    pub config: DashboardConfig,
    pub book: SalesBook,
    pub sampler: Box<dyn UnitSampler>,
}

/// Loads the config, then either reads `input` or generates a fresh book.
pub fn open_session(
    config_path: Option<&str>,
    input: Option<&str>,
    seed: Option<u64>,
) -> Result<Session, SessionError> {
    let config = load_config_if_provided(config_path)?;
    let mut sampler = sampler_from_seed(seed);
    let book = match input {
        Some(path) => load_sales_book_file(path)?,
        None => SalesBook::generate(
            &config.roster,
            &config.generator,
            &mut sampler,
            Local::now().date_naive(),
        ),
    };
    Ok(Session {
        config,
        book,
        sampler,
    })
}
