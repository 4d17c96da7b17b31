pub mod algebra;
pub mod demo;
pub mod structures;
pub mod utils;

pub use algebra::group::FiniteGroup;
pub use algebra::group::SporadicGroup;

pub use structures::catalog;
pub use structures::catalog::GroupRecord;
pub use structures::element::MonsterElement;
pub use structures::factorization::{Factorization, FactorizationError};
pub use structures::monster::Monster;
#[cfg(feature = "serde")]
pub use structures::monster::GroupSummary;
pub use utils::{factorial, grouped_decimal, is_prime, order_ratio, scientific_notation};
