use crate::commands::{CmdMessage, CmdResult};
use crate::config::DemoConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = DemoConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = DemoConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = DemoConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok(result);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn show_all_returns_defaults_when_missing() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(DemoConfig::default()));
    }

    #[test]
    fn set_persists_and_reports() {
        let temp = TempDir::new().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("group".into(), "Boston".into()),
        )
        .unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Success));
        assert_eq!(result.messages[0].content, "group set to Boston");

        let shown = run(temp.path(), ConfigAction::ShowKey("group".into())).unwrap();
        assert_eq!(shown.messages[0].content, "Boston");
    }

    #[test]
    fn set_invalid_reports_error_without_saving() {
        let temp = TempDir::new().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("pause".into(), "sometimes".into()),
        )
        .unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn show_unknown_key_reports_error() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::ShowKey("nope".into())).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
    }
}
