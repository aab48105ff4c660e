//! Standings compilation: grouping team stats by pool, ranking, tie
//! flagging, and advancement tiers; plus the cumulative all-phase merge.

use crate::logic::stats::{MatchLine, PlayerStats, PoolTeamStats, RoundStats};
use crate::models::{Match, Side, Tournament};
use log::warn;

/// One pool's ranked standings table.
#[derive(Clone, Debug, PartialEq)]
pub struct PoolStats {
    /// Index into the phase's pool list; `None` groups teams that played in
    /// the phase without a pool assignment.
    pub pool_idx: Option<usize>,
    pub pool_teams: Vec<PoolTeamStats>,
}

/// Compiled standings for one statistically relevant phase.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseStandings {
    pub phase_idx: usize,
    pub pools: Vec<PoolStats>,
    pub players: Vec<PlayerStats>,
    /// Whether any two teams share a record, or any game was drawn. Ties are
    /// flagged, never auto-broken; tiebreaker phases exist for that.
    pub any_ties_exist: bool,
}

impl PhaseStandings {
    /// Build the standings for the phase at `phase_idx` from scratch. Pure
    /// read over the tournament graph; a fresh call always reflects the
    /// current raw data.
    pub fn compile(tournament: &Tournament, phase_idx: usize) -> Self {
        let phase = &tournament.phases[phase_idx];
        let rules = &tournament.scoring_rules;

        let mut team_stats: Vec<PoolTeamStats> = Vec::new();
        let mut players: Vec<PlayerStats> = Vec::new();
        for (pool_idx, pool) in phase.pools.iter().enumerate() {
            for &team_id in &pool.team_ids {
                team_stats.push(PoolTeamStats::new(team_id, Some(pool_idx), rules));
                if let Some(team) = tournament.find_team(team_id) {
                    for player in &team.players {
                        players.push(PlayerStats::new(player.id, team_id, rules));
                    }
                }
            }
        }

        for (own_idx, round_number, game) in relevant_matches(tournament, phase_idx) {
            for side in [Side::Left, Side::Right] {
                let Some(team_id) = game.match_team(side).team_id else {
                    continue;
                };
                let line = MatchLine {
                    phase_idx: own_idx,
                    round_number,
                    match_id: game.id,
                    side,
                };
                let ts = match team_stats.iter_mut().find(|ts| ts.team_id == team_id) {
                    Some(ts) => ts,
                    None => {
                        // Playing without a pool assignment is inconsistent
                        // data, but the report still has to account for it.
                        warn!(
                            "team {team_id:?} has matches in phase {} but no pool",
                            phase.name
                        );
                        team_stats.push(PoolTeamStats::new(team_id, None, rules));
                        team_stats.last_mut().unwrap()
                    }
                };
                ts.add_match(line, game, rules);

                for mp in &game.match_team(side).match_players {
                    let ps = match players.iter_mut().find(|ps| ps.player_id == mp.player_id) {
                        Some(ps) => ps,
                        None => {
                            players.push(PlayerStats::new(mp.player_id, team_id, rules));
                            players.last_mut().unwrap()
                        }
                    };
                    ps.add_match(line, game);
                }
            }
        }

        let mut any_ties_exist = team_stats.iter().any(|ts| ts.ties > 0);
        let mut pools: Vec<PoolStats> = Vec::new();
        for pool_idx in 0..phase.pools.len() {
            let pool_teams: Vec<PoolTeamStats> = team_stats
                .iter()
                .filter(|ts| ts.pool_idx == Some(pool_idx))
                .cloned()
                .collect();
            pools.push(PoolStats {
                pool_idx: Some(pool_idx),
                pool_teams,
            });
        }
        let unassigned: Vec<PoolTeamStats> = team_stats
            .iter()
            .filter(|ts| ts.pool_idx.is_none())
            .cloned()
            .collect();
        if !unassigned.is_empty() {
            pools.push(PoolStats {
                pool_idx: None,
                pool_teams: unassigned,
            });
        }

        for pool_stats in &mut pools {
            if sort_and_rank_teams(&mut pool_stats.pool_teams) {
                any_ties_exist = true;
            }
        }

        apply_advancement(tournament, phase_idx, &mut pools);

        rank_players(&mut players);

        Self {
            phase_idx,
            pools,
            players,
            any_ties_exist,
        }
    }
}

/// Matches that count for the phase's standings: those its own rounds hold,
/// plus carryover games owned by other phases. Tiebreaker games never count.
fn relevant_matches<'a>(
    tournament: &'a Tournament,
    phase_idx: usize,
) -> Vec<(usize, u32, &'a Match)> {
    let phase_name = &tournament.phases[phase_idx].name;
    let mut result = Vec::new();
    for (own_idx, phase) in tournament.phases.iter().enumerate() {
        let carried = own_idx != phase_idx;
        for round in &phase.rounds {
            for game in &round.matches {
                if game.tiebreaker {
                    continue;
                }
                if !carried || game.carryover_phases.contains(phase_name) {
                    result.push((own_idx, round.number, game));
                }
            }
        }
    }
    result
}

/// Sort a pool by win percentage (descending) and assign position-based
/// ranks with gaps: teams tied for second are both rank 2 and the next team
/// is rank 4. Returns whether any rank tie exists. The sort is stable, so
/// the stats engine's insertion order breaks display ties.
fn sort_and_rank_teams(pool_teams: &mut [PoolTeamStats]) -> bool {
    pool_teams.sort_by(|a, b| {
        let pct = cmp_opt_desc(a.win_pct(), b.win_pct());
        pct.then(cmp_opt_desc(a.pts_per_reg_tuh(), b.pts_per_reg_tuh()))
    });

    let mut any_tie = false;
    for idx in 0..pool_teams.len() {
        if idx > 0 && pool_teams[idx].record_equal(&pool_teams[idx - 1]) {
            pool_teams[idx].rank = pool_teams[idx - 1].rank;
            pool_teams[idx].rank_tie = true;
            pool_teams[idx - 1].rank_tie = true;
            any_tie = true;
        } else {
            pool_teams[idx].rank = idx as u32 + 1;
            pool_teams[idx].rank_tie = false;
        }
    }
    any_tie
}

/// Rank players by points per tossup heard, gapped like the team ranks.
fn rank_players(players: &mut Vec<PlayerStats>) {
    players.sort_by(|a, b| cmp_opt_desc(a.pptuh(), b.pptuh()));
    for idx in 0..players.len() {
        if idx > 0 && players[idx].pptuh_equal(&players[idx - 1]) {
            players[idx].rank = players[idx - 1].rank;
            players[idx].rank_tie = true;
            players[idx - 1].rank_tie = true;
        } else {
            players[idx].rank = idx as u32 + 1;
            players[idx].rank_tie = false;
        }
    }
}

/// Descending order with absent values last.
fn cmp_opt_desc(a: Option<f64>, b: Option<f64>) -> std::cmp::Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
}

/// Fill in advancement info against the next playoff phase: definite when
/// that phase's pools are populated, provisional from the standing order
/// otherwise. A record tie spanning a cutoff makes advancement ambiguous
/// and is flagged rather than resolved.
fn apply_advancement(tournament: &Tournament, phase_idx: usize, pools: &mut [PoolStats]) {
    let Some(next_phase) = tournament.next_full_phase(phase_idx) else {
        return;
    };
    let phase = &tournament.phases[phase_idx];

    if next_phase.any_teams_assigned() {
        for pool_stats in pools.iter_mut() {
            for ts in &mut pool_stats.pool_teams {
                ts.did_not_advance = next_phase.find_pool_with_team(ts.team_id).is_none();
            }
        }
        return;
    }

    for pool_stats in pools.iter_mut() {
        let Some(pool) = pool_stats.pool_idx.and_then(|i| phase.pools.get(i)) else {
            continue;
        };
        for (pos, ts) in pool_stats.pool_teams.iter_mut().enumerate() {
            ts.advance_to_tier = pool.tier_for_finish(pos + 1);
        }
        for cutoff in pool.advancement_cutoffs() {
            if cutoff == 0 || cutoff >= pool_stats.pool_teams.len() {
                continue;
            }
            let boundary_tied = {
                let (above, below) = pool_stats.pool_teams.split_at(cutoff);
                above[cutoff - 1].record_equal(&below[0])
            };
            if boundary_tied {
                let tied_rank = pool_stats.pool_teams[cutoff - 1].rank;
                for ts in &mut pool_stats.pool_teams {
                    if ts.rank == tied_rank && ts.rank_tie {
                        ts.record_tie_for_advancement = true;
                    }
                }
            }
        }
    }
}

/// Every full phase merged into one additive table, plus the round report.
#[derive(Clone, Debug, PartialEq)]
pub struct CumulativeStats {
    pub team_stats: Vec<PoolTeamStats>,
    pub players: Vec<PlayerStats>,
    pub rounds: Vec<RoundStats>,
    pub round_report_total_stats: RoundStats,
    pub any_ties_exist: bool,
}

impl CumulativeStats {
    /// Merge all full phases into additive totals: raw counts summed team by
    /// team and player by player, never ratios of ratios. Each match
    /// contributes through the phase that owns it, exactly once, so
    /// carryover games aren't double counted. The same ranking pass then
    /// runs over the merged totals, with no advancement column.
    pub fn compile(tournament: &Tournament, phase_stats: &[PhaseStandings]) -> Self {
        let rules = &tournament.scoring_rules;
        let mut team_stats: Vec<PoolTeamStats> = Vec::new();
        let mut players: Vec<PlayerStats> = Vec::new();

        // Seed the tables in standings order so teams and players with no
        // games still appear in the merged view.
        for standings in phase_stats {
            for pool_stats in &standings.pools {
                for ts in &pool_stats.pool_teams {
                    if !team_stats.iter().any(|t| t.team_id == ts.team_id) {
                        team_stats.push(PoolTeamStats::new(ts.team_id, None, rules));
                    }
                }
            }
            for ps in &standings.players {
                if !players.iter().any(|p| p.player_id == ps.player_id) {
                    players.push(PlayerStats::new(ps.player_id, ps.team_id, rules));
                }
            }
        }

        for (phase_idx, phase) in tournament.phases.iter().enumerate() {
            if !phase.is_full_phase() {
                continue;
            }
            for round in &phase.rounds {
                for game in &round.matches {
                    if game.tiebreaker {
                        continue;
                    }
                    for side in [Side::Left, Side::Right] {
                        let Some(team_id) = game.match_team(side).team_id else {
                            continue;
                        };
                        let line = MatchLine {
                            phase_idx,
                            round_number: round.number,
                            match_id: game.id,
                            side,
                        };
                        let ts = match team_stats.iter_mut().find(|t| t.team_id == team_id) {
                            Some(ts) => ts,
                            None => {
                                team_stats.push(PoolTeamStats::new(team_id, None, rules));
                                team_stats.last_mut().unwrap()
                            }
                        };
                        ts.add_match(line, game, rules);

                        for mp in &game.match_team(side).match_players {
                            let ps = match players
                                .iter_mut()
                                .find(|p| p.player_id == mp.player_id)
                            {
                                Some(ps) => ps,
                                None => {
                                    players.push(PlayerStats::new(mp.player_id, team_id, rules));
                                    players.last_mut().unwrap()
                                }
                            };
                            ps.add_match(line, game);
                        }
                    }
                }
            }
        }

        let mut any_ties_exist = team_stats.iter().any(|ts| ts.ties > 0);
        if sort_and_rank_teams(&mut team_stats) {
            any_ties_exist = true;
        }
        rank_players(&mut players);

        let (rounds, round_report_total_stats) = compile_rounds(tournament);

        Self {
            team_stats,
            players,
            rounds,
            round_report_total_stats,
            any_ties_exist,
        }
    }
}

/// Round report rows: one per round that has matches, in phase order, plus
/// the tournament-wide totals row.
fn compile_rounds(tournament: &Tournament) -> (Vec<RoundStats>, RoundStats) {
    let rules = &tournament.scoring_rules;
    let mut rounds = Vec::new();
    let mut totals = RoundStats::new(None, 0);
    for (phase_idx, phase) in tournament.phases.iter().enumerate() {
        if !phase.is_full_phase() {
            continue;
        }
        for round in &phase.rounds {
            if round.matches.is_empty() {
                continue;
            }
            let mut rs = RoundStats::new(Some(phase_idx), round.number);
            for game in &round.matches {
                if game.tiebreaker {
                    continue;
                }
                rs.add_match(game, rules);
            }
            totals.merge(&rs);
            rounds.push(rs);
        }
    }
    (rounds, totals)
}
