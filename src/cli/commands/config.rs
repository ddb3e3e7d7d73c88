//! Config command handler
//!
//! Keys: `level`, `file`, `verbose`, `catalog`, `reports_dir`.

use crate::args::ConfigSubcommand;
use curriculum_progress::config::Config;
use std::io::{self, BufRead, Write};

const KEYS: &str = "level, file, verbose, catalog, reports_dir";

/// Dispatch config subcommands
///
/// # Errors
/// Returns a message for unknown keys, rejected values, or a config file that
/// cannot be written
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            print_all(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => {
            let value = lookup(config, &key)?;
            println!("{value}");
            Ok(())
        }
        Some(ConfigSubcommand::Set { key, value }) => {
            config.set(&key, &value)?;
            persist(config)?;
            println!("✓ Set {key} = {value}");
            Ok(())
        }
        Some(ConfigSubcommand::Unset { key }) => {
            config.unset(&key, defaults)?;
            persist(config)?;
            println!("✓ Reset {key} to default");
            Ok(())
        }
        Some(ConfigSubcommand::Reset) => reset(&mut io::stdin().lock()),
    }
}

fn print_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    println!("  ({})\n", Config::get_config_file_path().display());
    print!("{config}");
}

fn lookup(config: &Config, key: &str) -> Result<String, String> {
    config
        .get(key)
        .ok_or_else(|| format!("Unknown config key: '{key}' (known keys: {KEYS})"))
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

/// Delete the config file after a y/n confirmation read from `input`
fn reset(input: &mut impl BufRead) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    if confirmed(input) {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

/// `y` or `yes`, any case; anything else (including EOF) declines
fn confirmed(input: &mut impl BufRead) -> bool {
    let mut response = String::new();
    if input.read_line(&mut response).is_err() {
        return false;
    }
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_answers() {
        assert!(confirmed(&mut "y\n".as_bytes()));
        assert!(confirmed(&mut "YES\n".as_bytes()));
        assert!(!confirmed(&mut "n\n".as_bytes()));
        assert!(!confirmed(&mut "".as_bytes()));
    }

    #[test]
    fn test_lookup_unknown_key_lists_known_keys() {
        let config = Config::from_defaults();
        let err = lookup(&config, "colour").unwrap_err();
        assert!(err.contains("known keys: level"));
        assert_eq!(lookup(&config, "verbose"), Ok(config.logging.verbose.to_string()));
    }

    #[test]
    fn test_set_rejects_unsupported_catalog_before_saving() {
        let mut config = Config::from_defaults();
        let defaults = Config::from_defaults();
        let subcommand = ConfigSubcommand::Set {
            key: "catalog".to_string(),
            value: "plan.xlsx".to_string(),
        };

        let err = run(Some(subcommand), &mut config, &defaults).unwrap_err();
        assert!(err.contains("plan.xlsx"));
        assert_eq!(config.paths.catalog, defaults.paths.catalog);
    }
}
