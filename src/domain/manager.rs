use crate::domain::period::Period;
use crate::domain::series::Series;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `#rrggbb`.
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SalesSource {
    Seeded {
        base: f64,
        variance: f64,
        trend: f64,
    },
    Fixed {
        week: Option<Series>,
        month: Option<Series>,
        year: Option<Series>,
    },
}

impl SalesSource {
    pub fn fixed_series(&self, period: Period) -> Option<&Series> {
        match self {
            SalesSource::Seeded { .. } => None,
            SalesSource::Fixed { week, month, year } => match period {
                Period::Week => week.as_ref(),
                Period::Month => month.as_ref(),
                Period::Year => year.as_ref(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Manager {
    pub id: String,
    pub name: String,
    pub city: String,
    pub color: Rgb,
    pub source: SalesSource,
}

impl Manager {
    pub fn seeded(
        id: &str,
        name: &str,
        city: &str,
        color: Rgb,
        base: f64,
        variance: f64,
        trend: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            color,
            source: SalesSource::Seeded {
                base,
                variance,
                trend,
            },
        }
    }
}

/// Ordered, non-empty list of managers.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    managers: Vec<Manager>,
}

impl Roster {
    /// Returns `None` for an empty list; every lookup relies on a first manager.
    pub fn new(managers: Vec<Manager>) -> Option<Self> {
        if managers.is_empty() {
            None
        } else {
            Some(Self { managers })
        }
    }

    pub fn managers(&self) -> &[Manager] {
        &self.managers
    }

    pub fn first(&self) -> &Manager {
        &self.managers[0]
    }

    pub fn find(&self, id: &str) -> Option<&Manager> {
        self.managers.iter().find(|manager| manager.id == id)
    }

    /// Unknown ids resolve to the first manager in roster order.
    pub fn find_or_first(&self, id: &str) -> &Manager {
        self.find(id).unwrap_or_else(|| self.first())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            managers: vec![
                Manager::seeded(
                    "katerina",
                    "Катерина Орлова",
                    "Москва",
                    Rgb(0x34, 0xd3, 0x99),
                    130.0,
                    35.0,
                    0.8,
                ),
                Manager::seeded(
                    "ivan",
                    "Иван Филимонов",
                    "Казань",
                    Rgb(0x22, 0xc5, 0x5e),
                    105.0,
                    30.0,
                    0.4,
                ),
                Manager::seeded(
                    "marina",
                    "Марина Лукина",
                    "Новосибирск",
                    Rgb(0x16, 0xa3, 0x4a),
                    115.0,
                    25.0,
                    0.6,
                ),
                Manager::seeded(
                    "timur",
                    "Тимур Абдуллаев",
                    "Санкт-Петербург",
                    Rgb(0x0e, 0xa0, 0x5d),
                    95.0,
                    28.0,
                    0.5,
                ),
                Manager::seeded(
                    "larisa",
                    "Лариса Чернова",
                    "Екатеринбург",
                    Rgb(0x0f, 0x76, 0x6e),
                    100.0,
                    22.0,
                    0.7,
                ),
            ],
        }
    }
}
