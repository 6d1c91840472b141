//! Statistics over population metric distributions.

pub mod percentile;

pub use percentile::percentile;
