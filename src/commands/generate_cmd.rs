use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::session::open_session;
use crate::services::sales_book::write_sales_book_file;

pub fn generate_command(cmd: Commands) -> ExitCode {
    if let Commands::Generate {
        output,
        config,
        seed,
    } = cmd
    {
        let session = match open_session(config.as_deref(), None, seed) {
            Ok(session) => session,
            Err(e) => {
                eprintln!("Failed to prepare sales data: {e}");
                return ExitCode::FAILURE;
            }
        };

        if let Err(e) = write_sales_book_file(&output, &session.book) {
            eprintln!("Failed to write sales data: {e}");
            return ExitCode::FAILURE;
        }
        println!(
            "Sales data for {} managers written to {output}",
            session.book.managers.len()
        );
    }
    ExitCode::SUCCESS
}
