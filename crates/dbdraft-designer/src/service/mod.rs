//! Services operating on schema designs

mod db_sync;
mod ddl_generator;

pub use db_sync::{apply_schema, recreate};
pub use ddl_generator::DdlGenerator;
