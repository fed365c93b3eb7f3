pub mod cli;
pub mod commands;
pub mod dataset;

pub use cli::*;
pub use dataset::*;

/// Operations CLI for the ClaimsDesk engine
///
/// Runs the pricing and coverage services against a dataset exported from
/// the admin application, for support staff and for checking contract or
/// policy changes before they go live.
///
/// # Example Usage
///
/// ```bash
/// # Price two units of a procedure with a doctor and implantables
/// claimsdesk price --dataset export.yaml \
///     --provider 6f1c2a52-8a3e-4c55-9d55-0b7a1f3e9a10 \
///     --code IMPL-001 --doctor 0d9e7f0e-3f7b-4b7b-a9a4-8f2a8c1d5e21 \
///     --quantity 2 --implantable
///
/// # Check a surgery request against a policy, Hebrew status text
/// claimsdesk --lang he coverage --dataset export.json --policy POL-2024-7781 \
///     --procedure ORTH-220 --diagnosis M17.1 --days 3 \
///     --cost 52000 --service-type surgery
/// ```
pub const BINARY_NAME: &str = "claimsdesk";
