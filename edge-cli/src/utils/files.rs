use std::fs;

use rst_common::with_logging::log::debug;

use verity_edge_core::provision::{Context, ProvisionToken};

use crate::types::CliError;

pub fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    debug!("[files] reading: {path}");
    fs::read(path).map_err(|err| CliError::FileError(format!("{}: {}", path, err)))
}

pub fn load_context(path: &str) -> Result<Context, CliError> {
    let bytes = read_file(path)?;
    let context = Context::try_from(bytes)?;
    Ok(context)
}

pub fn load_token(path: &str) -> Result<ProvisionToken, CliError> {
    let bytes = read_file(path)?;
    let token_json =
        String::from_utf8(bytes).map_err(|err| CliError::FileError(err.to_string()))?;

    let token = ProvisionToken::from_json(&token_json)?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    use verity_edge_core::provision::types::ProvisionError;

    fn write_temp(name: &str, content: &str) -> String {
        let mut path = env::temp_dir();
        path.push(format!("verity-edge-cli-{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        format!("{}", path.display())
    }

    #[test]
    fn test_load_context() {
        let path = write_temp(
            "context.json",
            r#"{
                "verityUrl": "http://localhost:9000",
                "verityPublicDID": "verity-did",
                "verityPublicVerKey": "verity-verkey",
                "sdkVerKey": "sdk-verkey"
            }"#,
        );

        let context = load_context(&path).unwrap();
        assert_eq!(context.get_verity_public_did(), "verity-did");
        assert!(!context.is_provisioned());
    }

    #[test]
    fn test_load_malformed_token() {
        let path = write_temp("token.json", "{\"nonce\": \"n1\"");
        let token = load_token(&path);

        assert!(matches!(
            token.unwrap_err(),
            CliError::ProvisionError(ProvisionError::MalformedInput(_))
        ))
    }

    #[test]
    fn test_missing_file() {
        let context = load_context("/nonexistent/verity-edge/context.json");
        assert!(matches!(context.unwrap_err(), CliError::FileError(_)))
    }
}
