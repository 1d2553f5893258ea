use crate::domain::period::Period;
use crate::services::currency_format::format_currency;
use crate::services::dashboard::{PeriodTotal, SummaryCard};

pub fn format_summary_card(card: &SummaryCard) -> String {
    let best = match card.stats.best {
        Some(best) => format!("Лучший день ({}): {}", best.day(), format_currency(best.value)),
        None => "Лучший день: n/a".to_string(),
    };

    let mut lines = Vec::new();
    lines.push(format!("{} ({})", card.name, card.city));
    lines.push(format!("  Итого за месяц: {}", format_currency(card.stats.total)));
    lines.push(format!("  Среднее в день: {}", format_currency(card.stats.average)));
    lines.push(format!("  {best}"));
    lines.join("\n")
}

pub fn format_summary_report(
    period: Period,
    cards: &[SummaryCard],
    totals: &[PeriodTotal],
) -> String {
    let mut lines = Vec::new();
    lines.push("Sales Summary".to_string());
    lines.push(String::new());
    for card in cards {
        lines.push(format_summary_card(card));
        lines.push(String::new());
    }
    lines.push(format!("Итого за {}:", period.label()));
    lines.push("Manager | Total".to_string());
    lines.push("--------|------".to_string());
    for row in totals {
        lines.push(format!("{} | {}", row.name, format_currency(row.total)));
    }

    lines.join("\n")
}
