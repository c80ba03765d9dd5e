//! Config subcommands handler

use anyhow::Result;

use vidctl::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let path = Config::config_path()?;
    let config = Config::load_from(&path)?;
    let theme = config.ui.theme();
    println!("{}", theme.accent_text(&format!("# {}", path.display())));
    println!("{}", theme.primary_text(&config.to_toml()?));
    Ok(())
}

/// Print where the configuration file is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    println!("{}", path.display());
    if !path.exists() {
        let theme = Config::default().ui.theme();
        eprintln!("{}", theme.secondary_text("(file does not exist, defaults are in effect)"));
    }
    Ok(())
}
