use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{DataSettings, ServerSettings, Settings};

/// Loads the application configuration from a TOML file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Settings`
/// struct, validates it, and returns it.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let load_error = |source| ConfigError::LoadError {
        path: path.to_path_buf(),
        source,
    };

    let builder = config::Config::builder()
        .add_source(config::File::from(path))
        // Environment variables win over the file, e.g. MARKETLENS_SERVER__PORT.
        .add_source(config::Environment::with_prefix("MARKETLENS").separator("__"))
        .build()
        .map_err(load_error)?;

    let settings = builder
        .try_deserialize::<Settings>()
        .map_err(load_error)?;
    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_and_validates_a_complete_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
host = "127.0.0.1"
port = 8000

[data]
markets_file = "data/market_data.json"
properties_file = "data/property_data.json"
"#
        )
        .unwrap();

        let settings = load_settings(file.path()).expect("must load");
        assert_eq!(settings.server.port, 8000);
        assert_eq!(
            settings.data.markets_file.to_str().unwrap(),
            "data/market_data.json"
        );
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = load_settings(Path::new("no-such-config.toml")).expect_err("must fail");
        assert!(matches!(err, ConfigError::LoadError { .. }));
        assert!(err.to_string().contains("no-such-config.toml"));
    }

    #[test]
    fn rejects_port_zero() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
host = "127.0.0.1"
port = 0

[data]
markets_file = "m.json"
properties_file = "p.json"
"#
        )
        .unwrap();

        let err = load_settings(file.path()).expect_err("must fail");
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
