mod audit_record;
mod profile;
mod recipient;

pub use audit_record::*;
pub use profile::*;
pub use recipient::*;
