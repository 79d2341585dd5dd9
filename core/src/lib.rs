#![no_std]

extern crate alloc;

pub use board::*;
pub use dataset::*;
pub use error::*;
pub use persist::*;
pub use session::*;
pub use types::*;
pub use view::*;

mod board;
mod dataset;
mod error;
mod persist;
mod session;
mod types;
mod view;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}
