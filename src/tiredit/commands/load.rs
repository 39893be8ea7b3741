use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::params::ParamSet;
use crate::session::EditSession;
use std::path::Path;

/// Reads a def file and starts a fresh session over it.
pub fn run(path: &Path, params: &ParamSet) -> Result<(EditSession, CmdResult)> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Reading tirific def file {}",
        path.display()
    )));

    let session = EditSession::open(path, params)?;
    result.add_message(CmdMessage::success("Read succeeded"));

    result.candidates = session.candidates().to_vec();
    if result.candidates.is_empty() {
        result.add_message(CmdMessage::warning(
            "No editable parameters found in this file",
        ));
    }

    Ok((session, result))
}
