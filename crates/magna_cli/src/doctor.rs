//! Configuration diagnostics

use anyhow::Result;
use magna_config::{ConfigError, SiteConfig, ENV_BACKEND_ANON_KEY, ENV_BACKEND_URL};
use tracing::{info, warn};

pub fn run() -> Result<()> {
    println!("Magna site configuration check");
    println!("==============================\n");

    match SiteConfig::from_env() {
        Ok(config) => {
            info!("configuration loaded");
            println!("✓ backend url:   {}", config.backend.url);
            println!("✓ anon key:      {} chars", config.backend.anon_key.len());
            println!("\nTable registry:");
            let tables = &config.tables;
            for (label, name) in [
                ("users", &tables.users),
                ("user_roles", &tables.user_roles),
                ("user_categories", &tables.user_categories),
                ("projects", &tables.projects),
                ("project_contributors", &tables.project_contributors),
                ("user_preferences", &tables.user_preferences),
                ("user_skills", &tables.user_skills),
            ] {
                println!("  {label:<22} -> {name}");
            }
            Ok(())
        }
        Err(err @ ConfigError::MissingVar(var)) => {
            warn!(%var, "missing configuration");
            println!("✗ {err}");
            println!("\nSet both {ENV_BACKEND_URL} and {ENV_BACKEND_ANON_KEY}.");
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
