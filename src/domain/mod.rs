pub mod manager;
pub mod period;
pub mod series;
