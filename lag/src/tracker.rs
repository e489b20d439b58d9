//! Rolling per-team lag over a season of games
//!
//! [`RollingLagTracker`] is a pull-based iterator: every call to `next` does
//! at most one zone lookup and one recurrence step, so records come out while
//! the input is still being read. Each game yields two records, home team
//! first. The first error ends the stream.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::domain::{Game, LagRecord, ZoneOffset};
use crate::error::LagError;
use crate::recurrence::lag_between;
use crate::resolver::ZoneResolver;

/// Where a team stood after its most recent game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamLagState {
    pub last_date: NaiveDate,
    pub last_zone: ZoneOffset,
    pub last_lag: i64,
}

/// How per-team state starts out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InitialState {
    /// Any team may appear; state is created on first appearance
    #[default]
    Lazy,
    /// Only these teams may appear, each starting with no prior state
    Prepopulated(Vec<String>),
}

/// Yields a [`LagRecord`] per team per game
pub struct RollingLagTracker<I, R> {
    games: I,
    resolver: R,
    team_lag: HashMap<String, Option<TeamLagState>>,
    closed_roster: bool,
    /// Game whose visiting team is still to be processed
    pending: Option<(Game, ZoneOffset)>,
    games_processed: usize,
    finished: bool,
}

/// Track lag over games that are already parsed
pub fn stream<G, R>(games: G, resolver: R) -> RollingLagTracker<impl Iterator<Item = Result<Game, LagError>>, R>
where
    G: IntoIterator<Item = Game>,
    R: ZoneResolver,
{
    RollingLagTracker::new(games.into_iter().map(Ok::<Game, LagError>), resolver)
}

impl<I, R> RollingLagTracker<I, R>
where
    I: Iterator<Item = Result<Game, LagError>>,
    R: ZoneResolver,
{
    pub fn new(games: impl IntoIterator<IntoIter = I>, resolver: R) -> Self {
        Self::with_initial_state(games, resolver, InitialState::Lazy)
    }

    pub fn with_initial_state(games: impl IntoIterator<IntoIter = I>, resolver: R, initial: InitialState) -> Self {
        let (team_lag, closed_roster) = match initial {
            InitialState::Lazy => (HashMap::new(), false),
            InitialState::Prepopulated(teams) => {
                debug!(count = teams.len(), "RollingLagTracker: pre-populating teams");
                (teams.into_iter().map(|team| (team, None)).collect(), true)
            }
        };

        Self {
            games: games.into_iter(),
            resolver,
            team_lag,
            closed_roster,
            pending: None,
            games_processed: 0,
            finished: false,
        }
    }

    /// Current state for a team, if it has played
    pub fn state_of(&self, team: &str) -> Option<&TeamLagState> {
        self.team_lag.get(team).and_then(Option::as_ref)
    }

    /// Every known team and its state, sorted by team id
    pub fn teams(&self) -> Vec<(&str, Option<&TeamLagState>)> {
        let mut teams: Vec<_> = self
            .team_lag
            .iter()
            .map(|(team, state)| (team.as_str(), state.as_ref()))
            .collect();
        teams.sort_by_key(|(team, _)| *team);
        teams
    }

    /// Number of games whose zone has been resolved
    pub fn games_processed(&self) -> usize {
        self.games_processed
    }

    fn home_step(&mut self, game: Game) -> Result<LagRecord, LagError> {
        let zone = self.resolver.resolve(&game)?;
        self.games_processed += 1;

        let record = self.advance(&game.home_team_id, &game, zone)?;
        self.pending = Some((game, zone));
        Ok(record)
    }

    /// Apply one game to one team's state and emit its record
    fn advance(&mut self, team: &str, game: &Game, zone: ZoneOffset) -> Result<LagRecord, LagError> {
        let state_prev = match self.team_lag.get(team) {
            Some(state) => *state,
            None if self.closed_roster => return Err(LagError::UnknownTeam { team: team.to_string() }),
            None => None,
        };

        let (zone_prev, days_delta, lag) = match state_prev {
            None => (zone, 0, lag_between(0, 0, zone, zone)),
            Some(prev) => {
                if game.date < prev.last_date {
                    return Err(LagError::UnsortedLog {
                        team: team.to_string(),
                        date: game.date,
                        last_date: prev.last_date,
                    });
                }
                let days_delta = (game.date - prev.last_date).num_days();
                (
                    prev.last_zone,
                    days_delta,
                    lag_between(prev.last_lag, days_delta, prev.last_zone, zone),
                )
            }
        };

        trace!(team, date = %game.date, %zone, lag, days_delta, "RollingLagTracker::advance");

        let record = LagRecord {
            date: game.date,
            team_id: team.to_string(),
            zone,
            lag,
            matchup: game.matchup(),
            zone_shift: format!("{}->{}", zone_prev.ordinal(), zone.ordinal()),
            days_delta,
            double_header_slot: game.double_header_slot,
            venue_id: game.venue_id.clone(),
        };

        self.team_lag.insert(
            team.to_string(),
            Some(TeamLagState {
                last_date: game.date,
                last_zone: zone,
                last_lag: lag,
            }),
        );

        Ok(record)
    }
}

impl<I, R> Iterator for RollingLagTracker<I, R>
where
    I: Iterator<Item = Result<Game, LagError>>,
    R: ZoneResolver,
{
    type Item = Result<LagRecord, LagError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = match self.pending.take() {
            Some((game, zone)) => self.advance(&game.visiting_team_id, &game, zone),
            None => match self.games.next()? {
                Ok(game) => self.home_step(game),
                Err(e) => Err(e),
            },
        };

        if let Err(e) = &result {
            debug!(error = %e, games = self.games_processed, "RollingLagTracker: stopping");
            self.finished = true;
        }
        Some(result)
    }
}

impl<I, R> std::iter::FusedIterator for RollingLagTracker<I, R>
where
    I: std::iter::FusedIterator<Item = Result<Game, LagError>>,
    R: ZoneResolver,
{
}
