use std::io::Write;

use fittrack_types::trainings::ActivityKind;
use strum::IntoEnumIterator as _;

/// One line per workout kind: code, name and the readings a packet carries.
pub fn write_kinds<W: Write>(out: &mut W) -> std::io::Result<()> {
    for kind in ActivityKind::iter() {
        writeln!(
            out,
            "{}\t{}\t[{}]",
            kind.code(),
            kind,
            kind.parameters().join(", ")
        )?;
    }
    Ok(())
}
