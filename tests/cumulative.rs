//! Cumulative stats: additivity across phases, player accumulation, and the
//! round report.

use quizbowl_stats::{Phase, PhaseType, PlayerId, Pool, TeamId, Tournament};

/// Two teams playing in both a prelim and a playoff phase.
fn two_phase_tournament() -> (Tournament, TeamId, TeamId, PlayerId, PlayerId) {
    let mut t = Tournament::new("Two Stage Classic");

    let mut prelims = Phase::with_rounds("Prelims", PhaseType::Prelim, 1, 2);
    let mut pool = Pool::new("Pool A", 1, 2);
    pool.seed_numbers = vec![1, 2];
    prelims.pools.push(pool);
    t.phases.push(prelims);

    let mut playoffs = Phase::with_rounds("Playoffs", PhaseType::Playoff, 3, 4);
    playoffs.pools.push(Pool::new("Finals Pool", 1, 2));
    t.phases.push(playoffs);

    let a = t.add_reg_and_team("Alpha HS", "Alpha").unwrap();
    let b = t.add_reg_and_team("Beta HS", "Beta").unwrap();
    let anna = t.add_player(a, "Anna").unwrap();
    let ben = t.add_player(b, "Ben").unwrap();

    let playoffs = t
        .phases
        .iter_mut()
        .find(|ph| ph.name == "Playoffs")
        .unwrap();
    playoffs.pools[0].team_ids = vec![a, b];

    (t, a, b, anna, ben)
}

/// One fully scored game: Anna 2 powers + 3 gets for Alpha, Ben 4 gets and
/// 1 neg for Beta, explicit totals.
fn add_scored_game(
    t: &mut Tournament,
    round: u32,
    a: TeamId,
    b: TeamId,
    a_total: i32,
    b_total: i32,
) {
    let mut m = t.create_match(a, b).unwrap();
    m.tossups_read = Some(20);
    m.left_team.points = Some(a_total);
    m.left_team.match_players[0].tossups_heard = Some(20);
    m.left_team.match_players[0].set_answer_count(15, Some(2));
    m.left_team.match_players[0].set_answer_count(10, Some(3));
    m.right_team.points = Some(b_total);
    m.right_team.match_players[0].tossups_heard = Some(20);
    m.right_team.match_players[0].set_answer_count(10, Some(4));
    m.right_team.match_players[0].set_answer_count(-5, Some(1));
    t.add_match(m, round).unwrap();
}

#[test]
fn cumulative_counts_are_the_sum_of_phase_counts() {
    let (mut t, a, b, _, _) = two_phase_tournament();
    add_scored_game(&mut t, 1, a, b, 120, 55);
    add_scored_game(&mut t, 2, b, a, 90, 110);
    add_scored_game(&mut t, 3, a, b, 130, 35);

    t.compile_stats();
    assert_eq!(t.stats.len(), 2);
    let cumulative = t.cumulative_stats.as_ref().unwrap();

    for team_id in [a, b] {
        let per_phase: Vec<_> = t
            .stats
            .iter()
            .filter_map(|standings| {
                standings
                    .pools
                    .iter()
                    .flat_map(|p| p.pool_teams.iter())
                    .find(|ts| ts.team_id == team_id)
            })
            .collect();
        let total = cumulative
            .team_stats
            .iter()
            .find(|ts| ts.team_id == team_id)
            .unwrap();

        let wins: u32 = per_phase.iter().map(|ts| ts.wins).sum();
        let losses: u32 = per_phase.iter().map(|ts| ts.losses).sum();
        let bonus_points: i64 = per_phase.iter().map(|ts| ts.bonus_points).sum();
        let bonuses_heard: u32 = per_phase.iter().map(|ts| ts.bonuses_heard).sum();
        let tuh: u32 = per_phase.iter().map(|ts| ts.tuh_total).sum();
        assert_eq!(total.wins, wins);
        assert_eq!(total.losses, losses);
        assert_eq!(total.bonus_points, bonus_points);
        assert_eq!(total.bonuses_heard, bonuses_heard);
        assert_eq!(total.tuh_total, tuh);
        for ac in &total.tossup_counts {
            let phase_sum: u32 = per_phase
                .iter()
                .map(|ts| ts.tossup_count(ac.answer_type.value))
                .sum();
            assert_eq!(ac.number, Some(phase_sum));
        }
    }
}

#[test]
fn merging_phase_accumulators_matches_the_compiled_cumulative() {
    let (mut t, a, _, _, _) = two_phase_tournament();
    let b = t.find_team_by_name("Beta").unwrap().id;
    add_scored_game(&mut t, 1, a, b, 120, 55);
    add_scored_game(&mut t, 3, a, b, 130, 35);

    t.compile_stats();
    let mut summed = t.stats[0]
        .pools
        .iter()
        .flat_map(|p| p.pool_teams.iter())
        .find(|ts| ts.team_id == a)
        .unwrap()
        .clone();
    let playoff_line = t.stats[1]
        .pools
        .iter()
        .flat_map(|p| p.pool_teams.iter())
        .find(|ts| ts.team_id == a)
        .unwrap();
    summed.merge(playoff_line);

    let total = t
        .cumulative_stats
        .as_ref()
        .unwrap()
        .team_stats
        .iter()
        .find(|ts| ts.team_id == a)
        .unwrap();
    assert_eq!(summed.wins, total.wins);
    assert_eq!(summed.bonus_points, total.bonus_points);
    assert_eq!(summed.tuh_total, total.tuh_total);
    assert_eq!(summed.matches, total.matches);
}

#[test]
fn games_played_is_fractional_by_tossups_heard() {
    let (mut t, a, b, anna, _) = two_phase_tournament();
    let mut m = t.create_match(a, b).unwrap();
    m.tossups_read = Some(20);
    m.left_team.points = Some(50);
    m.left_team.match_players[0].tossups_heard = Some(10);
    m.left_team.match_players[0].set_answer_count(10, Some(3));
    m.right_team.points = Some(40);
    m.right_team.match_players[0].tossups_heard = Some(20);
    t.add_match(m, 1).unwrap();

    t.compile_stats();
    let anna_stats = t.stats[0]
        .players
        .iter()
        .find(|ps| ps.player_id == anna)
        .unwrap();
    assert!((anna_stats.games_played - 0.5).abs() < 1e-9);
    assert_eq!(anna_stats.tossups_heard, 10);
    assert_eq!(anna_stats.total_points(), 30);
    let pptuh = anna_stats.pptuh().unwrap();
    assert!((pptuh - 3.0).abs() < 1e-9);
}

#[test]
fn players_rank_by_scoring_rate_with_gapped_ties() {
    let (mut t, a, b, anna, ben) = two_phase_tournament();
    let carol = t.add_player(a, "Carol").unwrap();
    let mut m = t.create_match(a, b).unwrap();
    m.tossups_read = Some(20);
    m.left_team.points = Some(80);
    // Anna and Carol both at 10 points per 10 tossups heard.
    m.left_team.match_players[0].tossups_heard = Some(10);
    m.left_team.match_players[0].set_answer_count(10, Some(1));
    m.left_team.match_players[1].tossups_heard = Some(10);
    m.left_team.match_players[1].set_answer_count(10, Some(1));
    m.right_team.points = Some(0);
    m.right_team.match_players[0].tossups_heard = Some(20);
    t.add_match(m, 1).unwrap();

    t.compile_stats();
    let players = &t.stats[0].players;
    let anna_stats = players.iter().find(|ps| ps.player_id == anna).unwrap();
    let carol_stats = players.iter().find(|ps| ps.player_id == carol).unwrap();
    let ben_stats = players.iter().find(|ps| ps.player_id == ben).unwrap();
    assert_eq!(anna_stats.rank, 1);
    assert_eq!(carol_stats.rank, 1);
    assert!(anna_stats.rank_tie && carol_stats.rank_tie);
    assert_eq!(anna_stats.rank_string(), "1=");
    assert_eq!(ben_stats.rank, 3);
}

#[test]
fn round_report_covers_played_rounds_and_totals() {
    let (mut t, a, b, _, _) = two_phase_tournament();
    add_scored_game(&mut t, 1, a, b, 120, 55);
    add_scored_game(&mut t, 3, a, b, 130, 35);
    // A forfeit adds a game to no round report row.
    let mut forfeit = t.create_match(a, b).unwrap();
    forfeit.right_team.forfeit_loss = true;
    t.add_match(forfeit, 2).unwrap();

    t.compile_stats();
    let cumulative = t.cumulative_stats.as_ref().unwrap();
    let round_numbers: Vec<u32> = cumulative.rounds.iter().map(|rs| rs.round_number).collect();
    assert_eq!(round_numbers, vec![1, 2, 3]);
    assert_eq!(cumulative.rounds[0].games, 1);
    assert_eq!(cumulative.rounds[1].games, 0);
    assert_eq!(cumulative.round_report_total_stats.games, 2);

    let rules = &t.scoring_rules;
    let round1 = &cumulative.rounds[0];
    // 2 powers + 7 gets converted out of 20 read, 2 of them powers.
    assert_eq!(round1.converted, 9);
    assert_eq!(round1.powers, 2);
    assert_eq!(round1.negs, 1);
    let conv = round1.tossup_conversion_pct().unwrap();
    assert!((conv - 45.0).abs() < 1e-9);
    assert!(round1.points_per_x_tuh(rules).is_some());
}
