//! Composite actions built from child actions.
//!
//! - [`Sequence`] — Run every child in declared order against identical input.
//! - [`Pipe`] — Feed each child's output into the next child's argument list.
//! - [`Parallel`] — Fan out one worker per child and drain every outcome.
//!
//! Composites are themselves actions, so they nest freely: evaluation is a
//! depth-first tree except where [`Parallel`] forks concurrent branches.

mod parallel;
mod pipe;
mod sequence;

pub use parallel::Parallel;
pub use pipe::Pipe;
pub use sequence::Sequence;
