//! Domain logic for SetupForMe: turns a user's registered applications into
//! a single unattended PowerShell installation script.
//!
//! Nothing in this crate touches storage or the network directly; the only
//! outbound call is the bounded package-id lookup in [`resolver`].

pub mod error;
pub mod quoting;
pub mod resolver;
pub mod script;
pub mod types;
pub mod validation;
