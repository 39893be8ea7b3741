use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TireditError};
use crate::session::EditSession;

/// Applies `(ring, value)` edits to `param`, staging them in the session's
/// pending buffer. Nothing is written until the write command runs.
pub fn run(session: &mut EditSession, param: &str, edits: &[(usize, f64)]) -> Result<CmdResult> {
    if !session.candidates().iter().any(|c| c == param) {
        return Err(TireditError::Api(format!(
            "{} is not an editable parameter in this file",
            param
        )));
    }
    if edits.is_empty() {
        return Err(TireditError::Api("No ring edits given".to_string()));
    }

    let mut result = CmdResult::default();

    // Keep the working buffer if this parameter is already staged, so
    // repeated edit commands accumulate.
    let already_selected = session.selected().map(|(p, _)| p == param).unwrap_or(false);
    if !already_selected {
        let series = session.select(param)?;
        for &ring in &series.substituted {
            result.add_message(CmdMessage::warning(format!(
                "{} ring {} was not numeric; using ring {}'s value",
                param,
                ring,
                ring - 1
            )));
        }
    }

    for &(ring, value) in edits {
        session.commit(ring, value)?;
        result.add_message(CmdMessage::info(format!(
            "{} ring {} set to {}",
            param, ring, value
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deffile::parse_def;
    use crate::params::ParamSet;
    use crate::session::EditSession;

    fn session() -> EditSession {
        let loaded = parse_def(
            "NUR= 3.0\nRADI= 0.0 10.0 20.0\nVROT= 0.0 100.0 120.0\n",
            &ParamSet::new(),
        )
        .unwrap();
        EditSession::from_loaded("test.def", loaded)
    }

    #[test]
    fn edits_land_in_the_pending_buffer() {
        let mut s = session();
        run(&mut s, "VROT", &[(1, 105.0), (2, 125.0)]).unwrap();

        let (_, samples) = s.selected().unwrap();
        assert_eq!(samples, &[0.0, 105.0, 125.0]);
    }

    #[test]
    fn repeated_edits_accumulate() {
        let mut s = session();
        run(&mut s, "VROT", &[(1, 105.0)]).unwrap();
        run(&mut s, "VROT", &[(2, 125.0)]).unwrap();

        let (_, samples) = s.selected().unwrap();
        assert_eq!(samples, &[0.0, 105.0, 125.0]);
    }

    #[test]
    fn out_of_range_ring_fails() {
        let mut s = session();
        assert!(matches!(
            run(&mut s, "VROT", &[(3, 1.0)]),
            Err(TireditError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn non_editable_parameter_is_rejected() {
        let mut s = session();
        assert!(matches!(
            run(&mut s, "NUR", &[(0, 5.0)]),
            Err(TireditError::Api(_))
        ));
    }

    #[test]
    fn empty_edit_list_is_rejected() {
        let mut s = session();
        assert!(run(&mut s, "VROT", &[]).is_err());
    }
}
