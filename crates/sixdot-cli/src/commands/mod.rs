pub mod chart_ops;
pub mod config_ops;
