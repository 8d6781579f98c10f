//! Query-string builder for AFAS Profit GetConnectors.
//!
//! [`AfasFilter`] collects skip/take, filter conditions and order-bys for an
//! [`Entity`] and renders them into the `skip`, `take`, `filterfieldids`,
//! `filtervalues`, `operatortypes` and `orderbyfieldids` parameters the REST
//! API expects. Sending the request is left to the caller.

pub mod config;
pub mod entity;
pub mod error;
pub mod filter;
pub mod operator;
pub mod params;
pub mod testing;
pub mod value;

pub use config::{FilterConfig, FilterConfigBuilder, FilterRuleConfig, OrderByConfig};
pub use entity::{Entity, Field};
pub use error::{AfasError, Result};
pub use filter::{AfasFilter, FilterEntry};
pub use operator::{Operator, OrderDirection};
pub use params::SearchParams;
pub use value::FilterValue;
