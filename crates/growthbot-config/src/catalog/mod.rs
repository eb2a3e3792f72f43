//! Service catalog: company profile and service list read at startup.
//!
//! Every field is optional at parse time. Only a missing file or an
//! undecodable document is an error; gaps in the data are left for the
//! tools to report as unavailable.

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{load_catalog, parse_catalog};
pub use types::{Catalog, CompanyInfo, ContactInfo, ServiceEntry, ServicesSummary};
