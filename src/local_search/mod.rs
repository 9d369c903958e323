//! Local search operators for improving tours.
//!
//! - [`two_opt_improve`] — Closed-tour 2-opt edge reversal, first improvement

mod two_opt;

pub use two_opt::two_opt_improve;
