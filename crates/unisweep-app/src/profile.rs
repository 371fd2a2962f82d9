use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use unisweep_config::Config;

/// Load a JSON config profile, falling back to defaults if there is none
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No config file given, using defaults");
        return Ok(Config::default());
    };

    if !path.exists() {
        tracing::warn!("Config {} not found, using defaults", path.display());
        return Ok(Config::default());
    }

    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), Config::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = Path::new("definitely/not/here/unisweep.json");
        assert_eq!(load_config(Some(path)).unwrap(), Config::default());
    }
}
