pub mod allocation;
pub mod analytics;
pub mod chart;
pub mod goal;
pub mod holding;
pub mod ledger;
pub mod period;
pub mod settings;
