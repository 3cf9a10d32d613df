//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is its own strategy type with its own input type,
//! dispatched statically from `main`.

mod ask;
mod init;
mod run;
mod version;

pub use ask::{AskInput, AskStrategy};
pub use init::InitStrategy;
pub use run::{RunInput, RunStrategy};
pub use version::VersionStrategy;

/// Contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
