use crate::commands::{CmdMessage, CmdResult};
use crate::config::TireditConfig;
use crate::error::Result;
use std::path::Path;

/// What to do with the configuration.
#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    SetLegacySpacing(bool),
    AddParam(String),
    RemoveParam(String),
}

/// Shows or mutates the configuration; mutations are saved to `config_dir`.
pub fn run(
    config: &mut TireditConfig,
    config_dir: &Path,
    action: ConfigAction,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::SetLegacySpacing(value) => {
            config.legacy_spacing = value;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "legacy-spacing set to {}",
                value
            )));
        }
        ConfigAction::AddParam(name) => {
            let name = name.trim().to_uppercase();
            if config.extra_params.iter().any(|p| *p == name) {
                result.add_message(CmdMessage::info(format!("{} is already editable", name)));
            } else {
                config.extra_params.push(name.clone());
                config.save(config_dir)?;
                result.add_message(CmdMessage::success(format!("{} added", name)));
            }
        }
        ConfigAction::RemoveParam(name) => {
            let name = name.trim().to_uppercase();
            let before = config.extra_params.len();
            config.extra_params.retain(|p| *p != name);
            if config.extra_params.len() == before {
                result.add_message(CmdMessage::warning(format!(
                    "{} was not in the extra parameter list",
                    name
                )));
            } else {
                config.save(config_dir)?;
                result.add_message(CmdMessage::success(format!("{} removed", name)));
            }
        }
    }

    result.config = Some(config.clone());
    Ok(result)
}
