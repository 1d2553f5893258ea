/// Group separator used by the ru-RU locale (no-break space).
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Inserts a group separator every three digits from the right.
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

/// Amounts are kept in thousands of rubles.
pub fn format_currency(value: i64) -> String {
    format!("{} тыс. ₽", format_grouped(value))
}
