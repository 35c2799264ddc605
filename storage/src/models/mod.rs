mod record;

pub use record::{Record, CREATED_AT_SQL_FORMAT};
