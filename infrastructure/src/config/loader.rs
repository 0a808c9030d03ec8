//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use colored::Colorize;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./tally.toml` or `./.tally.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/tally/config.toml`
    /// 4. Fallback: `~/.config/tally/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        // Add project-level config file (check both names)
        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/tally/config.toml if set, otherwise
    /// falls back to ~/.config/tally/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("tally").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["tally.toml", ".tally.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  {} Project: {}", "[FOUND]".green(), path.display());
        } else {
            println!("  [     ] Project: ./tally.toml or ./.tally.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  {} Global:  {}", "[FOUND]".green(), path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }

    /// Print the fully merged configuration as TOML
    pub fn print_effective_config(config: &FileConfig) {
        println!();
        println!("{}", "Effective configuration:".bold());
        match toml::to_string_pretty(config) {
            Ok(rendered) => print!("{}", rendered),
            Err(e) => println!("  (could not render configuration: {})", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.export.file_name, "calculator-history.txt");
        assert_eq!(config.tui.theme, "dark");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("tally"));
    }

    #[test]
    fn test_explicit_config_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            r#"
[tui]
theme = "light"
"#,
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.tui.theme, "light");
        // Untouched sections keep their defaults
        assert_eq!(config.export.file_name, "calculator-history.txt");
        assert_eq!(config.tui.tick_rate_ms, 200);
    }

    #[test]
    fn test_missing_explicit_config_yields_defaults() {
        let path = PathBuf::from("/nonexistent/tally-config.toml");
        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config, FileConfig::default());
    }
}
