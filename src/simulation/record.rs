//! One row of simulation output.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Outcome of one simulated game, written as one CSV row.
///
/// Field order is the column order of `results.csv`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub game_type: String,
    pub match_number: usize,
    /// Starting number for halving games, empty otherwise.
    pub initial_number: Option<u32>,
    pub player1_agent: String,
    pub player2_agent: String,
    /// `1` or `-1` for the winning side, `0` for a draw.
    pub winner: i8,
    pub total_moves: usize,
    /// Seconds player 1 spent choosing moves.
    pub player1_computation_time: f64,
    /// Seconds player 2 spent choosing moves.
    pub player2_computation_time: f64,
}

/// Write records to `path` with a header row.
pub fn write_csv(path: &Path, records: &[MatchRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read records back from a CSV file written by `write_csv`.
pub fn read_csv(path: &Path) -> Result<Vec<MatchRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<MatchRecord>, csv::Error>>()?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(initial_number: Option<u32>) -> MatchRecord {
        MatchRecord {
            game_type: "Halving Game".to_string(),
            match_number: 3,
            initial_number,
            player1_agent: "Random AI".to_string(),
            player2_agent: "Minimax AI".to_string(),
            winner: -1,
            total_moves: 6,
            player1_computation_time: 0.5,
            player2_computation_time: 0.25,
        }
    }

    #[test]
    fn test_csv_header_and_empty_initial_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");

        write_csv(&path, &[record(Some(12)), record(None)]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "game_type,match_number,initial_number,player1_agent,player2_agent,winner,\
             total_moves,player1_computation_time,player2_computation_time"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Halving Game,3,12,Random AI,Minimax AI,-1,6,0.5,0.25"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Halving Game,3,,Random AI,Minimax AI,-1,6,0.5,0.25"
        );
    }

    #[test]
    fn test_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let records = vec![record(Some(20)), record(None)];

        write_csv(&path, &records).unwrap();
        assert_eq!(read_csv(&path).unwrap(), records);
    }
}
