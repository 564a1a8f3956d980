//! Aggregate statistics over simulation records.

use log::info;
use rustc_hash::FxHashMap;

use crate::core::PlayerId;

use super::record::MatchRecord;

/// Running aggregates of starting numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialNumberStats {
    pub min: u32,
    pub max: u32,
    sum: u64,
    count: usize,
}

impl InitialNumberStats {
    fn new(value: u32) -> Self {
        Self {
            min: value,
            max: value,
            sum: u64::from(value),
            count: 1,
        }
    }

    fn add(&mut self, value: u32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += u64::from(value);
        self.count += 1;
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.sum as f64 / self.count as f64
    }
}

/// Statistics for one (game, player 1 agent, player 2 agent) group.
#[derive(Clone, Debug, PartialEq)]
pub struct PairingSummary {
    pub game_type: String,
    pub player1_agent: String,
    pub player2_agent: String,
    pub games: usize,
    pub player1_wins: usize,
    pub player2_wins: usize,
    pub draws: usize,
    pub min_moves: usize,
    pub max_moves: usize,
    total_moves: usize,
    player1_time: f64,
    player2_time: f64,
    pub initial_numbers: Option<InitialNumberStats>,
}

impl PairingSummary {
    fn new(record: &MatchRecord) -> Self {
        Self {
            game_type: record.game_type.clone(),
            player1_agent: record.player1_agent.clone(),
            player2_agent: record.player2_agent.clone(),
            games: 0,
            player1_wins: 0,
            player2_wins: 0,
            draws: 0,
            min_moves: usize::MAX,
            max_moves: 0,
            total_moves: 0,
            player1_time: 0.0,
            player2_time: 0.0,
            initial_numbers: None,
        }
    }

    fn add(&mut self, record: &MatchRecord) {
        self.games += 1;
        match PlayerId::from_sign(record.winner) {
            Some(PlayerId::First) => self.player1_wins += 1,
            Some(PlayerId::Second) => self.player2_wins += 1,
            None => self.draws += 1,
        }
        self.min_moves = self.min_moves.min(record.total_moves);
        self.max_moves = self.max_moves.max(record.total_moves);
        self.total_moves += record.total_moves;
        self.player1_time += record.player1_computation_time;
        self.player2_time += record.player2_computation_time;
        if let Some(value) = record.initial_number {
            match &mut self.initial_numbers {
                Some(stats) => stats.add(value),
                None => self.initial_numbers = Some(InitialNumberStats::new(value)),
            }
        }
    }

    /// Share of games, in percent.
    #[must_use]
    pub fn percent(&self, count: usize) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            count as f64 / self.games as f64 * 100.0
        }
    }

    #[must_use]
    pub fn mean_moves(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games as f64
        }
    }

    /// Mean seconds per game spent choosing moves by `player`.
    #[must_use]
    pub fn mean_time(&self, player: PlayerId) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let total = match player {
            PlayerId::First => self.player1_time,
            PlayerId::Second => self.player2_time,
        };
        total / self.games as f64
    }

    fn log(&self) {
        info!(
            "{} vs {} ({} games):",
            self.player1_agent, self.player2_agent, self.games
        );
        if self.player1_wins > 0 {
            info!(
                "  Player 1 ({}) wins: {} ({:.1}%)",
                self.player1_agent,
                self.player1_wins,
                self.percent(self.player1_wins)
            );
        }
        if self.player2_wins > 0 {
            info!(
                "  Player 2 ({}) wins: {} ({:.1}%)",
                self.player2_agent,
                self.player2_wins,
                self.percent(self.player2_wins)
            );
        }
        if self.draws > 0 {
            info!("  Draws: {} ({:.1}%)", self.draws, self.percent(self.draws));
        }
        info!("  Average moves per game: {:.2}", self.mean_moves());
        info!("  Min/Max moves: {}/{}", self.min_moves, self.max_moves);
        info!(
            "  Avg computation time - Player 1: {:.4}s",
            self.mean_time(PlayerId::First)
        );
        info!(
            "  Avg computation time - Player 2: {:.4}s",
            self.mean_time(PlayerId::Second)
        );
        if let Some(initial) = &self.initial_numbers {
            info!("  Initial number range: {}-{}", initial.min, initial.max);
            info!("  Average initial number: {:.1}", initial.mean());
        }
    }
}

/// Per-pairing statistics, in order of first appearance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pairings: Vec<PairingSummary>,
}

impl Summary {
    /// Group records by game and agent pairing.
    pub fn from_records(records: &[MatchRecord]) -> Self {
        let mut index: FxHashMap<(&str, &str, &str), usize> = FxHashMap::default();
        let mut pairings: Vec<PairingSummary> = Vec::new();

        for record in records {
            let key = (
                record.game_type.as_str(),
                record.player1_agent.as_str(),
                record.player2_agent.as_str(),
            );
            let slot = *index.entry(key).or_insert_with(|| {
                pairings.push(PairingSummary::new(record));
                pairings.len() - 1
            });
            pairings[slot].add(record);
        }

        Self { pairings }
    }

    #[must_use]
    pub fn pairings(&self) -> &[PairingSummary] {
        &self.pairings
    }

    /// Look up one group.
    #[must_use]
    pub fn get(&self, game_type: &str, player1: &str, player2: &str) -> Option<&PairingSummary> {
        self.pairings.iter().find(|p| {
            p.game_type == game_type && p.player1_agent == player1 && p.player2_agent == player2
        })
    }

    /// Total games across all groups.
    #[must_use]
    pub fn total_games(&self) -> usize {
        self.pairings.iter().map(|p| p.games).sum()
    }

    /// Log the summary at info level, grouped by game.
    pub fn log(&self) {
        info!("{}", "=".repeat(60));
        info!("SIMULATION SUMMARY STATISTICS");
        info!("{}", "=".repeat(60));

        let mut current_game: Option<&str> = None;
        for pairing in &self.pairings {
            if current_game != Some(pairing.game_type.as_str()) {
                info!("--- {} ---", pairing.game_type.to_uppercase());
                current_game = Some(pairing.game_type.as_str());
            }
            pairing.log();
        }
    }
}
