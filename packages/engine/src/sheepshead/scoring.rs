//! Outcome and score determination.
//!
//! Points are computed on demand from the trick history, the buried cards,
//! and the team rosters. Scores are zero-sum: the payout table is keyed on
//! the size of the winning side.

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::game::{GameOutcome, PlayerScore, Team, TeamPoints};
use crate::player::{Player, Seat};

use super::bury::BuriedCards;
use super::teams::Teams;
use super::tricks::TrickTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scoring {
    Normal,
    /// Everyone passed: fewest points taken wins, one trick minimum.
    Leaster,
    /// Normal scoring at double stakes.
    Doubler,
}

impl Scoring {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scoring::Normal => "normal",
            Scoring::Leaster => "leaster",
            Scoring::Doubler => "doubler",
        }
    }
}

/// How a tie for fewest leaster points is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeasterTieBreak {
    /// The earliest tied player in seat order wins.
    SeatOrder,
    /// The tied player who took the most recent trick wins.
    LastTrickTaken,
}

/// Point and score calculator for one hand.
pub struct Points<'a> {
    scoring: Scoring,
    tie_break: LeasterTieBreak,
    tracker: &'a TrickTracker,
    buried: &'a BuriedCards,
    teams: &'a Teams,
    seating: &'a [Player],
}

impl<'a> Points<'a> {
    pub fn new(
        scoring: Scoring,
        tie_break: LeasterTieBreak,
        tracker: &'a TrickTracker,
        buried: &'a BuriedCards,
        teams: &'a Teams,
        seating: &'a [Player],
    ) -> Self {
        Points {
            scoring,
            tie_break,
            tracker,
            buried,
            teams,
            seating,
        }
    }

    /// Trick points per team, buried points credited to the picking team,
    /// ranked descending.
    fn team_points(&self) -> Vec<TeamPoints> {
        let rosters = self.teams.teams(self.seating);
        let by_seat = self.tracker.points_by_seat();
        let mut totals: Vec<TeamPoints> = rosters
            .into_iter()
            .map(|team| {
                let mut points: u32 = by_seat
                    .iter()
                    .filter(|(&seat, _)| team.members.contains(&self.seating[seat]))
                    .map(|(_, &pts)| pts)
                    .sum();
                if self.scoring != Scoring::Leaster && team.name == "pickers" {
                    points += self.buried.points();
                }
                TeamPoints { team, points }
            })
            .collect();
        totals.sort_by(|a, b| b.points.cmp(&a.points));
        totals
    }

    /// The top two teams by points taken.
    pub fn determine_points(&self) -> Result<GameOutcome, GameError> {
        let mut totals = self.team_points();
        if totals.len() < 2 {
            return Err(GameError::protocol(
                "Cannot determine an outcome with fewer than two teams.",
            ));
        }
        let losers = totals.remove(1);
        let winners = totals.remove(0);
        Ok(GameOutcome { winners, losers })
    }

    pub fn determine_winner(&self) -> Result<Team, GameError> {
        match self.scoring {
            Scoring::Leaster => {
                let seat = self.leaster_winner_seat()?;
                let player = self.seating[seat].clone();
                let name = player.name().to_string();
                Ok(Team::new(name, vec![player]))
            }
            _ => Ok(self.determine_points()?.winners.team),
        }
    }

    pub fn determine_score(&self) -> Result<Vec<PlayerScore>, GameError> {
        match self.scoring {
            Scoring::Normal => self.score_normal(1),
            Scoring::Doubler => self.score_normal(2),
            Scoring::Leaster => self.score_leaster(),
        }
    }

    fn score_normal(&self, multiplier: i32) -> Result<Vec<PlayerScore>, GameError> {
        let picker_seat = self
            .teams
            .picker()
            .ok_or_else(|| GameError::protocol("Cannot score a normal hand without a picker."))?;
        let picker = &self.seating[picker_seat];
        let partner = self.teams.partner().map(|seat| &self.seating[seat]);

        let outcome = self.determine_points()?;
        let winners = &outcome.winners.team.members;

        let score_for = |player: &Player| -> Result<i32, GameError> {
            let is_picker = player == picker;
            let is_partner = partner.is_some_and(|p| p == player) && !is_picker;
            let base = match winners.len() {
                // picker alone took it
                1 => {
                    if is_picker {
                        4
                    } else {
                        -1
                    }
                }
                // picker and partner took it
                2 => {
                    if is_picker {
                        2
                    } else if is_partner {
                        1
                    } else {
                        -1
                    }
                }
                // setters set a picker with a partner
                3 => {
                    if is_picker {
                        -2
                    } else if is_partner {
                        -1
                    } else {
                        1
                    }
                }
                // setters set a lone picker
                4 => {
                    if is_picker {
                        -4
                    } else {
                        1
                    }
                }
                n => {
                    return Err(GameError::protocol(format!(
                        "Cannot score a winning team of {n} players."
                    )))
                }
            };
            Ok(base * multiplier)
        };

        self.seating
            .iter()
            .map(|player| {
                Ok(PlayerScore {
                    player: player.clone(),
                    score: score_for(player)?,
                })
            })
            .collect()
    }

    fn score_leaster(&self) -> Result<Vec<PlayerScore>, GameError> {
        let winner = self.leaster_winner_seat()?;
        Ok(self
            .seating
            .iter()
            .enumerate()
            .map(|(seat, player)| PlayerScore {
                player: player.clone(),
                score: if seat == winner { 4 } else { -1 },
            })
            .collect())
    }

    /// The leaster winner: fewest points among players who took at least one
    /// trick, ties broken per the configured rule.
    fn leaster_winner_seat(&self) -> Result<Seat, GameError> {
        let totals = self.tracker.points_by_seat();
        let minimum = totals
            .values()
            .min()
            .copied()
            .ok_or_else(|| {
                GameError::protocol("Could not determine winner for leaster scoring.")
            })?;
        let tied: Vec<Seat> = totals
            .iter()
            .filter(|(_, &pts)| pts == minimum)
            .map(|(&seat, _)| seat)
            .collect();
        match self.tie_break {
            // BTreeMap iteration is seat-ordered, so the first tied seat wins
            LeasterTieBreak::SeatOrder => tied.first().copied().ok_or_else(|| {
                GameError::protocol("Could not determine winner for leaster scoring.")
            }),
            LeasterTieBreak::LastTrickTaken => {
                let last_taken = self.tracker.last_trick_taken_by_seat();
                tied.iter()
                    .max_by_key(|seat| last_taken.get(seat).copied().unwrap_or(0))
                    .copied()
                    .ok_or_else(|| {
                        GameError::protocol("Could not determine winner for leaster scoring.")
                    })
            }
        }
    }
}
