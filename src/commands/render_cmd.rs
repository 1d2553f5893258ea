use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::session::open_session;
use crate::domain::period::Period;
use crate::services::chart_render::{ChartError, PngSurface};
use crate::services::dashboard::Dashboard;

pub fn render_command(cmd: Commands) -> ExitCode {
    if let Commands::Render {
        output,
        input,
        config,
        seed,
        period,
        manager,
    } = cmd
    {
        let session = match open_session(config.as_deref(), input.as_deref(), seed) {
            Ok(session) => session,
            Err(e) => {
                eprintln!("Failed to prepare sales data: {e}");
                return ExitCode::FAILURE;
            }
        };

        let mut dashboard = Dashboard::new(
            session.config,
            session.book,
            PngSurface::new(&output),
            session.sampler,
        );
        if let Err(e) = render_dashboard(&mut dashboard, manager.as_deref(), period) {
            eprintln!("Failed to render charts: {e}");
            return ExitCode::FAILURE;
        }

        let targets = dashboard.targets();
        for slot in targets.mounted_slots() {
            println!("{slot} chart written to {}", targets.surface().chart_path(slot).display());
        }
        println!(
            "Charts for {} ({}) written to {output}",
            dashboard.selected_manager().name,
            dashboard.period()
        );
    }
    ExitCode::SUCCESS
}

/// Mirrors a user session: initial render, then the manager and period switches.
fn render_dashboard(
    dashboard: &mut Dashboard<PngSurface>,
    manager: Option<&str>,
    period: Period,
) -> Result<(), ChartError> {
    dashboard.init()?;
    if let Some(id) = manager {
        dashboard.select_manager(id)?;
    }
    dashboard.switch_period(period)?;
    Ok(())
}
