pub mod chart_render;
pub mod chart_spec;
pub mod currency_format;
pub mod dashboard;
pub mod dashboard_config;
pub mod render_targets;
pub mod sales_book;
pub mod sales_stats;
pub mod series_generator;
pub mod unit_sampler;
