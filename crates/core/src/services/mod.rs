pub mod allocation_service;
pub mod insight_service;
pub mod ledger_service;
pub mod metrics_service;
pub mod performance_service;
pub mod period_service;
