//! External process invocations
//!
//! An [`Invocation`] describes one run of an external program; the runner in
//! `areas::runner` turns it into an [`InvocationOutput`].

pub mod invocation;

pub use invocation::{Invocation, InvocationOutput};
