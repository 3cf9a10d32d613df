use blathers_config::Config;

/// Prints the version and the wiki root lookups go to.
#[derive(Debug, Clone, Copy)]
pub struct VersionStrategy;

fn version_text(wiki_root: &str) -> String {
    format!("blathers {}\nwiki: {wiki_root}", env!("CARGO_PKG_VERSION"))
}

impl super::CommandStrategy for VersionStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        // Unreadable config falls back to defaults.
        let config = Config::load().unwrap_or_default();
        println!("{}", version_text(&config.wiki.root));
        Ok(())
    }
}
