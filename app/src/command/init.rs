use blathers_config::{Config, Credentials};
use tracing::info;

/// Writes `~/blathers/config.json` and reports whether the key file it names exists yet.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config()?;
        let config = Config::load_from(&config_path)?;
        info!("Config written to {}", config_path.display());

        let keys_path = config.resolve_keys_path(None)?;
        if Credentials::load_if_present(&keys_path)?.is_some() {
            info!("Key file {} is ready", keys_path.display());
        }
        Ok(())
    }
}
