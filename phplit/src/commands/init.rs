use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use phplit_config::Config;

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the config file
    #[arg(default_value = phplit_config::CONFIG_FILE)]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        if self.path.exists() && !self.force {
            eyre::bail!(
                "{} already exists (use --force to overwrite)",
                self.path.display()
            );
        }

        let content = Config::defaults()
            .to_toml_string()
            .wrap_err("Failed to serialize default config")?;
        std::fs::write(&self.path, content)
            .wrap_err_with(|| format!("Failed to write {}", self.path.display()))?;

        println!("Created {}", self.path.display());
        Ok(())
    }
}
