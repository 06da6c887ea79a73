//! Config command: inspect or initialize configuration.

use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

use crate::config::SeoPromptConfig;

pub async fn run_config_command(config_path: Option<&Path>, init: bool) -> Result<()> {
    if init {
        let path = SeoPromptConfig::ensure_user_config_exists()?;
        eprintln!("📄 User config: {}", path.display());
    }

    let env_vars: HashMap<String, String> = std::env::vars().collect();
    let config = SeoPromptConfig::load_with_precedence(config_path, None, &env_vars)?;

    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
