//! Dispatch domain module

mod outcome;

pub use outcome::{Channel, ChannelStatus, Delivery, DispatchOutcome, DispatchReport};
