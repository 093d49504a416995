pub mod metrics;
pub mod record;
pub mod selection;
