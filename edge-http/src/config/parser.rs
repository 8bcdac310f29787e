use rstdev_config::format::use_toml;
use rstdev_config::parser::from_file;
use rstdev_config::Builder;

use crate::common::types::{CommonError, ToValidate};

use super::Config;

pub struct Parser {
    conf_file: String,
}

impl Parser {
    pub fn new(conf_file: String) -> Self {
        Self { conf_file }
    }

    /// `parse` loads the `TOML` file and validates its content
    pub fn parse(&self) -> Result<Config, CommonError> {
        let config: Config = Builder::new(from_file(self.conf_file.to_owned()))
            .fetch()
            .map_err(|err| CommonError::ConfigError(err.to_string()))?
            .parse(use_toml)
            .map_err(|err| CommonError::ConfigError(err.to_string()))?;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::common::helpers::fixtures::fixture_path;

    #[test]
    fn test_parse_config() {
        let parser = Parser::new(fixture_path("config.toml"));
        let config_builder = parser.parse();

        assert!(!config_builder.is_err());

        let config_transport = config_builder.as_ref().unwrap().transport();
        assert_eq!(config_transport.get_endpoint_path(), "/agency/msg");
        assert_eq!(config_transport.get_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_parse_invalid_config() {
        let parser = Parser::new(fixture_path("config_invalid.toml"));
        let config_builder = parser.parse();

        assert!(matches!(
            config_builder.unwrap_err(),
            CommonError::ValidationError(_)
        ))
    }

    #[test]
    fn test_parse_missing_file() {
        let parser = Parser::new(fixture_path("missing.toml"));
        let config_builder = parser.parse();

        assert!(matches!(
            config_builder.unwrap_err(),
            CommonError::ConfigError(_)
        ))
    }
}
