//! The shortcut table
//!
//! Every key the binary understands maps to exactly one [`Shortcut`]. The
//! table is built at compile time and never changes at runtime.

pub mod arity;
pub mod outcome;
#[allow(clippy::module_inception)]
pub mod shortcut;

pub use arity::Arity;
pub use outcome::Outcome;
pub use shortcut::Shortcut;

pub const SHORTCUTS: phf::Map<&'static str, Shortcut> = phf::phf_map! {
    "gaa" => Shortcut::AddAll,
    "gra" => Shortcut::RestoreAll,
    "gcm" => Shortcut::Commit,
    "gp" => Shortcut::Push,
    "gpb" => Shortcut::PushBranch,
    "gpl" => Shortcut::Pull,
    "gplb" => Shortcut::PullBranch,
    "gs" => Shortcut::Status,
    "gl" => Shortcut::Log,
    "gb" => Shortcut::BranchList,
    "gbd" => Shortcut::BranchDelete,
    "gco" => Shortcut::Checkout,
    "gcb" => Shortcut::CheckoutNewBranch,
    "cl" => Shortcut::Clear,
    "gsh" => Shortcut::Help,
    "help" => Shortcut::Help,
};
