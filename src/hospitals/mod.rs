pub mod fetch_error;
pub mod hospital_source;
pub mod snapshot_slot;
