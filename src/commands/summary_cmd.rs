use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_summary_report;
use crate::commands::session::open_session;
use crate::services::dashboard::{period_totals, summary_cards};

pub fn summary_command(cmd: Commands) -> ExitCode {
    if let Commands::Summary {
        input,
        config,
        seed,
        period,
    } = cmd
    {
        let session = match open_session(config.as_deref(), input.as_deref(), seed) {
            Ok(session) => session,
            Err(e) => {
                eprintln!("Failed to prepare sales data: {e}");
                return ExitCode::FAILURE;
            }
        };

        let roster = &session.config.roster;
        let cards = summary_cards(roster, &session.book);
        let totals = period_totals(roster, &session.book, period);
        println!("{}", format_summary_report(period, &cards, &totals));
    }
    ExitCode::SUCCESS
}
