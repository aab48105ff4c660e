//! Phase standings: ranking, tie flagging, forfeits, advancement tiers.

use quizbowl_stats::{
    AdvancementRule, Phase, PhaseType, Pool, TeamId, Tournament,
};

/// Four teams in one prelim pool (rounds 1-3), followed by an unpopulated
/// playoff phase (rounds 4-5).
fn four_team_tournament() -> (Tournament, Vec<TeamId>) {
    let mut t = Tournament::new("Test Invitational");

    let mut prelims = Phase::with_rounds("Prelims", PhaseType::Prelim, 1, 3);
    let mut pool = Pool::new("Pool A", 1, 4);
    pool.seed_numbers = (1..=4).collect();
    pool.auto_advance = vec![
        AdvancementRule { tier: 1, count: 2 },
        AdvancementRule { tier: 2, count: 2 },
    ];
    prelims.pools.push(pool);
    t.phases.push(prelims);

    let mut playoffs = Phase::with_rounds("Playoffs", PhaseType::Playoff, 4, 5);
    playoffs.pools.push(Pool::new("Championship", 1, 4));
    t.phases.push(playoffs);

    let ids = vec![
        t.add_reg_and_team("Alpha HS", "Alpha").unwrap(),
        t.add_reg_and_team("Beta HS", "Beta").unwrap(),
        t.add_reg_and_team("Gamma HS", "Gamma").unwrap(),
        t.add_reg_and_team("Delta HS", "Delta").unwrap(),
    ];
    (t, ids)
}

fn add_game(t: &mut Tournament, round: u32, left: TeamId, right: TeamId, lpts: i32, rpts: i32) {
    let mut m = t.create_match(left, right).unwrap();
    m.tossups_read = Some(20);
    m.left_team.points = Some(lpts);
    m.right_team.points = Some(rpts);
    t.add_match(m, round).unwrap();
}

#[test]
fn teams_are_grouped_by_pool_and_sorted_by_win_pct() {
    let (mut t, ids) = four_team_tournament();
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
    add_game(&mut t, 1, a, b, 300, 200);
    add_game(&mut t, 1, c, d, 250, 150);
    add_game(&mut t, 2, a, c, 310, 190);
    add_game(&mut t, 2, d, b, 100, 260);

    t.compile_stats();
    let standings = &t.stats[0];
    assert_eq!(standings.pools.len(), 1);
    let table = &standings.pools[0].pool_teams;
    assert_eq!(table[0].team_id, a);
    assert_eq!(table[0].record(), "2-0");
    assert_eq!(table[3].team_id, d);
    assert_eq!(table[3].wins, 0);
}

#[test]
fn tied_teams_share_rank_and_next_rank_has_gap() {
    let (mut t, ids) = four_team_tournament();
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
    // A 2-0; B and C 1-1; D 0-2.
    add_game(&mut t, 1, a, b, 300, 200);
    add_game(&mut t, 1, c, d, 250, 150);
    add_game(&mut t, 2, a, c, 310, 190);
    add_game(&mut t, 2, b, d, 260, 100);

    t.compile_stats();
    let table = &t.stats[0].pools[0].pool_teams;
    let ranks: Vec<u32> = table.iter().map(|ts| ts.rank).collect();
    assert_eq!(ranks, vec![1, 2, 2, 4]);
    assert!(table[1].rank_tie && table[2].rank_tie);
    assert!(!table[0].rank_tie && !table[3].rank_tie);
    assert_eq!(table[1].rank_string(), "2=");
    assert!(t.stats[0].any_ties_exist);
}

#[test]
fn drawn_games_count_as_ties_and_flag_the_standings() {
    let (mut t, ids) = four_team_tournament();
    let (a, b) = (ids[0], ids[1]);
    add_game(&mut t, 1, a, b, 200, 200);

    t.compile_stats();
    let table = &t.stats[0].pools[0].pool_teams;
    let a_stats = table.iter().find(|ts| ts.team_id == a).unwrap();
    assert_eq!(a_stats.ties, 1);
    assert_eq!(a_stats.record(), "0-0-1");
    assert_eq!(a_stats.win_pct(), Some(0.5));
    assert!(t.stats[0].any_ties_exist);
}

#[test]
fn forfeits_affect_record_but_no_per_question_stats() {
    let (mut t, ids) = four_team_tournament();
    let (a, b) = (ids[0], ids[1]);
    let mut m = t.create_match(a, b).unwrap();
    m.right_team.forfeit_loss = true;
    t.add_match(m, 1).unwrap();

    t.compile_stats();
    let table = &t.stats[0].pools[0].pool_teams;
    let a_stats = table.iter().find(|ts| ts.team_id == a).unwrap();
    let b_stats = table.iter().find(|ts| ts.team_id == b).unwrap();

    assert_eq!((a_stats.wins, a_stats.losses), (1, 0));
    assert_eq!((b_stats.wins, b_stats.losses), (0, 1));
    // The denominators stay empty: no tossups heard, no bonuses heard.
    for ts in [a_stats, b_stats] {
        assert_eq!(ts.tuh_total, 0);
        assert_eq!(ts.tuh_regulation, 0);
        assert_eq!(ts.pts_per_bonus(), None);
        assert_eq!(ts.pts_per_reg_tuh(), None);
    }
}

#[test]
fn tiebreaker_games_never_count_toward_stats() {
    let (mut t, ids) = four_team_tournament();
    let (a, b) = (ids[0], ids[1]);
    add_game(&mut t, 1, a, b, 300, 200);
    let mut tb = t.create_match(a, b).unwrap();
    tb.tiebreaker = true;
    tb.tossups_read = Some(20);
    tb.left_team.points = Some(100);
    tb.right_team.points = Some(200);
    t.add_match(tb, 2).unwrap();

    t.compile_stats();
    let table = &t.stats[0].pools[0].pool_teams;
    let a_stats = table.iter().find(|ts| ts.team_id == a).unwrap();
    assert_eq!((a_stats.wins, a_stats.losses), (1, 0));
    assert_eq!(a_stats.tuh_total, 20);
}

#[test]
fn compile_stats_is_idempotent() {
    let (mut t, ids) = four_team_tournament();
    add_game(&mut t, 1, ids[0], ids[1], 300, 200);
    add_game(&mut t, 1, ids[2], ids[3], 250, 150);

    t.compile_stats();
    let first_stats = t.stats.clone();
    let first_cumulative = t.cumulative_stats.clone();

    t.compile_stats();
    assert_eq!(first_stats, t.stats);
    assert_eq!(first_cumulative, t.cumulative_stats);
}

#[test]
fn provisional_advancement_follows_cutoffs_and_flags_boundary_ties() {
    let (mut t, ids) = four_team_tournament();
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
    // A 2-0; B and C 1-1, tied across the top-2 cutoff; D 0-2.
    add_game(&mut t, 1, a, b, 300, 200);
    add_game(&mut t, 1, c, d, 250, 150);
    add_game(&mut t, 2, a, c, 310, 190);
    add_game(&mut t, 2, b, d, 260, 100);

    t.compile_stats();
    let table = &t.stats[0].pools[0].pool_teams;
    assert_eq!(table[0].advance_to_tier, Some(1));
    assert!(!table[0].record_tie_for_advancement);
    // Second and third place are tied at the cutoff: ambiguous.
    assert!(table[1].record_tie_for_advancement);
    assert!(table[2].record_tie_for_advancement);
    assert_eq!(table[3].advance_to_tier, Some(2));
    assert!(!table[3].record_tie_for_advancement);
}

#[test]
fn definite_advancement_reads_the_next_phases_pools() {
    let (mut t, ids) = four_team_tournament();
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
    add_game(&mut t, 1, a, b, 300, 200);
    add_game(&mut t, 1, c, d, 250, 150);

    // Director placed A and C in the playoff pool; B and D are done.
    let playoffs = t
        .phases
        .iter_mut()
        .find(|ph| ph.name == "Playoffs")
        .unwrap();
    playoffs.pools[0].team_ids = vec![a, c];

    t.compile_stats();
    let table = &t.stats[0].pools[0].pool_teams;
    for ts in table {
        let expect_out = ts.team_id == b || ts.team_id == d;
        assert_eq!(ts.did_not_advance, expect_out, "team {:?}", ts.team_id);
    }
}

#[test]
fn carryover_games_count_in_the_carried_phase() {
    let (mut t, ids) = four_team_tournament();
    let (a, b) = (ids[0], ids[1]);
    let playoffs = t
        .phases
        .iter_mut()
        .find(|ph| ph.name == "Playoffs")
        .unwrap();
    playoffs.pools[0].team_ids = vec![a, b];

    let mut m = t.create_match(a, b).unwrap();
    m.tossups_read = Some(20);
    m.left_team.points = Some(300);
    m.right_team.points = Some(200);
    m.carryover_phases = vec!["Playoffs".into()];
    t.add_match(m, 1).unwrap();

    t.compile_stats();
    // stats[0] is prelims, stats[1] is playoffs; the game counts in both.
    for standings in &t.stats {
        let a_stats = standings
            .pools
            .iter()
            .flat_map(|p| p.pool_teams.iter())
            .find(|ts| ts.team_id == a)
            .unwrap();
        assert_eq!((a_stats.wins, a_stats.losses), (1, 0));
        assert_eq!(a_stats.tuh_total, 20);
    }
    // ...but only once in the cumulative view.
    let cumulative = t.cumulative_stats.as_ref().unwrap();
    let a_total = cumulative
        .team_stats
        .iter()
        .find(|ts| ts.team_id == a)
        .unwrap();
    assert_eq!((a_total.wins, a_total.losses), (1, 0));
    assert_eq!(a_total.tuh_total, 20);
    assert_eq!(a_total.matches.len(), 1);
}

#[test]
fn stats_survive_a_save_and_reload() {
    let (mut t, ids) = four_team_tournament();
    add_game(&mut t, 1, ids[0], ids[1], 300, 200);
    t.compile_stats();

    // Derived stats are never persisted; a reloaded tournament recompiles to
    // the same result.
    let json = serde_json::to_string(&t).unwrap();
    let mut reloaded: Tournament = serde_json::from_str(&json).unwrap();
    assert!(reloaded.stats.is_empty());
    reloaded.compile_stats();
    assert_eq!(t.stats, reloaded.stats);
}
