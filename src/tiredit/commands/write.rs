use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::EditSession;
use std::path::Path;

/// Writes the session's document to `path` with the pending edit applied,
/// reporting the edited parameter's value before and after.
pub fn run(session: &mut EditSession, path: &Path, legacy_spacing: bool) -> Result<CmdResult> {
    let written = session.write(path, legacy_spacing)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Before: {}", written.before)));
    result.add_message(CmdMessage::info(format!(" After: {}", written.after)));
    result.add_message(CmdMessage::info(format!(
        "(New value for {} used in output)",
        written.param
    )));
    result.add_message(CmdMessage::success(format!(
        "Wrote output def file {}",
        path.display()
    )));
    result.written = Some(written);
    result.output_path = Some(path.to_path_buf());
    Ok(result)
}

/// Writes the session's document to `path` unchanged. Spacing comes out in
/// the uniform `KEY= VALUE` form.
pub fn rewrite(session: &mut EditSession, path: &Path) -> Result<CmdResult> {
    session.rewrite(path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Wrote output def file {}",
        path.display()
    )));
    result.output_path = Some(path.to_path_buf());
    Ok(result)
}
