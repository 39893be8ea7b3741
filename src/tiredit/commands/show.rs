use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TireditError};
use crate::session::EditSession;

/// Returns the ring series for `param`, with a warning for every sample
/// that had to be substituted from the previous ring.
pub fn run(session: &EditSession, param: &str) -> Result<CmdResult> {
    if !session.candidates().iter().any(|c| c == param) {
        return Err(TireditError::Api(format!(
            "{} is not an editable parameter in this file",
            param
        )));
    }

    let series = session.series(param)?;
    let mut result = CmdResult::default();
    for &ring in &series.substituted {
        result.add_message(CmdMessage::warning(format!(
            "{} ring {} was not numeric; using ring {}'s value",
            param,
            ring,
            ring - 1
        )));
    }
    result.series = Some(series);
    Ok(result)
}
