/// Command module for the `tred` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the input content and parsed arguments and returns `Ok(())`
/// on success or a [`crate::error::CliError`] on failure.
pub mod closure;
pub mod cycles;
pub mod reach;
pub mod reduce;
pub mod verify;
