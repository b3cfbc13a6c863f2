//! Round-by-round CSV export of a fight, for spreadsheets and regression diffs.

use std::io::Write;

use crate::combat::FightSummary;

pub const ROUNDS_CSV_HEADER: [&str; 10] = [
    "round",
    "thrown_a",
    "landed_a",
    "thrown_b",
    "landed_b",
    "score_a",
    "score_b",
    "knockdown_a",
    "knockdown_b",
    "commentary",
];

pub fn write_rounds_csv<W: Write>(summary: &FightSummary, writer: W) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(ROUNDS_CSV_HEADER)?;
    for r in &summary.rounds {
        out.write_record([
            r.round.to_string(),
            r.thrown_a.to_string(),
            r.landed_a.to_string(),
            r.thrown_b.to_string(),
            r.landed_b.to_string(),
            r.score_a.to_string(),
            r.score_b.to_string(),
            r.knockdown_a.to_string(),
            r.knockdown_b.to_string(),
            r.commentary.clone(),
        ])?;
    }
    out.flush()?;
    Ok(())
}
