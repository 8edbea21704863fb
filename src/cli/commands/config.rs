use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Commands;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&cfg).unwrap());
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                println!("⚠️  No configuration file found at {}", path.display());
                println!("   Run `rattend init` to create one.");
                return Ok(());
            }

            if cfg.office_quota_percent <= 0.0 || cfg.office_quota_percent > 100.0 {
                println!(
                    "⚠️  office_quota_percent out of range: {}",
                    cfg.office_quota_percent
                );
            } else {
                println!("✅ Configuration file OK: {}", path.display());
            }
        }
    }

    Ok(())
}
