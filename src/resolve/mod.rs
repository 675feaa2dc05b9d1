//! Local address resolution.
//!
//! Selects the single best IPv4 address among the candidates reported
//! by the adapter enumerator, using a fixed private-range priority
//! ([`score_address`]) and an optional preferred-adapter hint
//! ([`best_address`]).

mod local;
mod score;

pub use local::{LocalResolver, best_address};
pub use score::score_address;
