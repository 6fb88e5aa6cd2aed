use std::fs;

use super::config::Config;
use super::error::Result;

pub fn load_config(path: &str) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    let config = parse_config(&text)?;
    Ok(config)
}

pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(text)?;
    config.validate()?;
    Ok(config)
}
