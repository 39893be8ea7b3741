use crate::config::TireditConfig;
use crate::session::{RingSeries, WrittenEdit};
use std::path::PathBuf;

pub mod config;
pub mod edit;
pub mod load;
pub mod show;
pub mod write;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result of a command: data for the front-end to render plus
/// human-readable messages. No command prints anything itself.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub candidates: Vec<String>,
    pub series: Option<RingSeries>,
    pub written: Option<WrittenEdit>,
    pub output_path: Option<PathBuf>,
    pub config: Option<TireditConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}
