//! Zone resolution strategies
//!
//! A [`ZoneResolver`] decides which zone a game was played in. Two are
//! provided: by park ([`VenueZones`]) and by home team ([`HomeTeamZones`]).
//! Home-team resolution gets neutral-site and overseas games wrong and only
//! exists to measure how far it drifts from the park-based answer.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Game, ZoneOffset};
use crate::error::LagError;
use crate::tables::{TEAM_ZONES, VENUE_ZONES};

/// Maps a game to the zone it was played in
pub trait ZoneResolver {
    fn resolve(&self, game: &Game) -> Result<ZoneOffset, LagError>;
}

impl<F> ZoneResolver for F
where
    F: Fn(&Game) -> Result<ZoneOffset, LagError>,
{
    fn resolve(&self, game: &Game) -> Result<ZoneOffset, LagError> {
        self(game)
    }
}

/// Venue and team zone lookups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneTable {
    venues: HashMap<String, ZoneOffset>,
    teams: HashMap<String, ZoneOffset>,
}

impl ZoneTable {
    /// Table with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in park and team tables
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.extend_venues(VENUE_ZONES.iter().map(|(id, zone)| (id.to_string(), *zone)));
        table.extend_teams(TEAM_ZONES.iter().map(|(id, zone)| (id.to_string(), *zone)));
        table
    }

    /// Add or replace venue entries
    pub fn extend_venues(&mut self, entries: impl IntoIterator<Item = (String, ZoneOffset)>) {
        for (venue, zone) in entries {
            if let Some(old) = self.venues.insert(venue.clone(), zone)
                && old != zone
            {
                debug!(%venue, %old, %zone, "ZoneTable: venue zone overridden");
            }
        }
    }

    /// Add or replace team entries
    pub fn extend_teams(&mut self, entries: impl IntoIterator<Item = (String, ZoneOffset)>) {
        for (team, zone) in entries {
            if let Some(old) = self.teams.insert(team.clone(), zone)
                && old != zone
            {
                debug!(%team, %old, %zone, "ZoneTable: team zone overridden");
            }
        }
    }

    pub fn venue_zone(&self, venue: &str) -> Option<ZoneOffset> {
        self.venues.get(venue).copied()
    }

    pub fn team_zone(&self, team: &str) -> Option<ZoneOffset> {
        self.teams.get(team).copied()
    }

    /// Every team id in the table, sorted
    pub fn team_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.teams.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn venue_count(&self) -> usize {
        self.venues.len()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn venue_resolver(&self) -> VenueZones<'_> {
        VenueZones { table: self }
    }

    pub fn home_team_resolver(&self) -> HomeTeamZones<'_> {
        HomeTeamZones {
            table: self,
            continental_only: false,
        }
    }
}

/// Resolve by the park the game was played in
#[derive(Debug, Clone, Copy)]
pub struct VenueZones<'a> {
    table: &'a ZoneTable,
}

impl ZoneResolver for VenueZones<'_> {
    fn resolve(&self, game: &Game) -> Result<ZoneOffset, LagError> {
        let venue = game.venue_id.as_deref().ok_or_else(|| LagError::MissingVenue {
            date: game.date,
            matchup: game.matchup(),
        })?;

        self.table.venue_zone(venue).ok_or_else(|| LagError::UnknownVenue {
            venue: venue.to_string(),
        })
    }
}

/// Resolve by the home team's usual park
#[derive(Debug, Clone, Copy)]
pub struct HomeTeamZones<'a> {
    table: &'a ZoneTable,
    continental_only: bool,
}

impl HomeTeamZones<'_> {
    /// Reject teams mapped outside the four mainland zones
    pub fn continental_only(mut self) -> Self {
        self.continental_only = true;
        self
    }
}

impl ZoneResolver for HomeTeamZones<'_> {
    fn resolve(&self, game: &Game) -> Result<ZoneOffset, LagError> {
        let team = &game.home_team_id;
        let zone = self
            .table
            .team_zone(team)
            .ok_or_else(|| LagError::UnknownTeam { team: team.clone() })?;

        if self.continental_only && !zone.is_continental() {
            return Err(LagError::UnsupportedZone { id: team.clone(), zone });
        }
        Ok(zone)
    }
}
