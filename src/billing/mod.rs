mod competencia;
mod row;

pub use competencia::{is_valid_competencia, parse_competencia};
pub use row::BillingRow;
