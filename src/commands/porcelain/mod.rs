//! Handlers wrapping git porcelain commands
//!
//! ## Commands
//!
//! - `add`: `gaa`, `gra` (stage or restore the whole working tree)
//! - `commit`: `gcm`
//! - `remote`: `gp`, `gpb`, `gpl`, `gplb`
//! - `status`: `gs`, colorized
//! - `log`: `gl`, colorized
//! - `branch`: `gb`, `gbd`
//! - `checkout`: `gco`, `gcb`

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod log;
pub mod remote;
pub mod status;
