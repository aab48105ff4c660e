//! Tournament roster management: registrations, seed editing, cascades.

use quizbowl_stats::{Phase, PhaseType, Pool, Tournament, TournamentError};

/// Prelim phase with two snake-seeded pools of two.
fn seeded_tournament() -> Tournament {
    let mut t = Tournament::new("Seeding Test");
    let mut prelims = Phase::with_rounds("Prelims", PhaseType::Prelim, 1, 3);
    let mut top = Pool::new("Top Pool", 1, 2);
    top.seed_numbers = vec![1, 4];
    let mut bottom = Pool::new("Bottom Pool", 2, 2);
    bottom.seed_numbers = vec![2, 3];
    prelims.pools.push(top);
    prelims.pools.push(bottom);
    t.phases.push(prelims);
    t
}

#[test]
fn new_teams_are_seeded_into_the_matching_pool() {
    let mut t = seeded_tournament();
    let a = t.add_reg_and_team("Alpha HS", "Alpha").unwrap();
    let b = t.add_reg_and_team("Beta HS", "Beta").unwrap();
    let c = t.add_reg_and_team("Gamma HS", "Gamma").unwrap();
    let d = t.add_reg_and_team("Delta HS", "Delta").unwrap();

    assert_eq!(t.seeds, vec![a, b, c, d]);
    assert_eq!(t.number_of_teams(), 4);
    assert_eq!(t.expected_number_of_teams(), Some(4));

    let prelims = t.prelim_phase().unwrap();
    assert_eq!(prelims.pools[0].team_ids, vec![a, d]);
    assert_eq!(prelims.pools[1].team_ids, vec![b, c]);
}

#[test]
fn duplicate_team_names_are_rejected_case_insensitively() {
    let mut t = seeded_tournament();
    t.add_reg_and_team("Alpha HS", "Alpha").unwrap();
    assert!(matches!(
        t.add_reg_and_team("Other School", "ALPHA"),
        Err(TournamentError::DuplicateTeamName(_))
    ));
}

#[test]
fn swapping_seeds_redistributes_the_pools() {
    let mut t = seeded_tournament();
    let a = t.add_reg_and_team("Alpha HS", "Alpha").unwrap();
    let b = t.add_reg_and_team("Beta HS", "Beta").unwrap();
    let c = t.add_reg_and_team("Gamma HS", "Gamma").unwrap();
    let d = t.add_reg_and_team("Delta HS", "Delta").unwrap();

    t.swap_seeds(1, 2).unwrap();
    let prelims = t.prelim_phase().unwrap();
    assert_eq!(prelims.pools[0].team_ids, vec![b, d]);
    assert_eq!(prelims.pools[1].team_ids, vec![a, c]);

    t.shift_seed_up(4).unwrap();
    assert_eq!(t.seeds, vec![b, a, d, c]);
    assert!(t.shift_seed_up(1).is_err());
    assert!(t.shift_seed_down(4).is_err());
    assert!(matches!(
        t.swap_seeds(1, 9),
        Err(TournamentError::InvalidSeed(9))
    ));
}

#[test]
fn inserting_a_seed_shifts_the_ones_between() {
    let mut t = seeded_tournament();
    let a = t.add_reg_and_team("Alpha HS", "Alpha").unwrap();
    let b = t.add_reg_and_team("Beta HS", "Beta").unwrap();
    let c = t.add_reg_and_team("Gamma HS", "Gamma").unwrap();
    let d = t.add_reg_and_team("Delta HS", "Delta").unwrap();

    t.insert_seed_at_position(4, 1).unwrap();
    assert_eq!(t.seeds, vec![d, a, b, c]);
}

#[test]
fn deleting_a_team_cascades_to_seeds_and_pools() {
    let mut t = seeded_tournament();
    let a = t.add_reg_and_team("Alpha HS", "Alpha").unwrap();
    let b = t.add_reg_and_team("Beta HS", "Beta").unwrap();
    let c = t.add_reg_and_team("Gamma HS", "Gamma").unwrap();
    let d = t.add_reg_and_team("Delta HS", "Delta").unwrap();

    t.delete_team(b).unwrap();
    assert_eq!(t.seeds, vec![a, c, d]);
    assert_eq!(t.number_of_teams(), 3);
    // Single-team registration goes with its team.
    assert!(t.find_registration("Beta HS").is_none());
    let prelims = t.prelim_phase().unwrap();
    assert!(!prelims.pools.iter().any(|p| p.has_team(b)));
    // Remaining teams re-seed into pools by their new numbers.
    assert_eq!(prelims.pools[0].team_ids, vec![a]);
    assert_eq!(prelims.pools[1].team_ids, vec![c, d]);
}

#[test]
fn players_with_data_only_lists_those_who_played() {
    let mut t = seeded_tournament();
    let a = t.add_reg_and_team("Alpha HS", "Alpha").unwrap();
    let b = t.add_reg_and_team("Beta HS", "Beta").unwrap();
    let anna = t.add_player(a, "Anna").unwrap();
    let _andy = t.add_player(a, "Andy").unwrap();
    t.add_player(b, "Ben").unwrap();

    let mut m = t.create_match(a, b).unwrap();
    m.tossups_read = Some(20);
    m.left_team.points = Some(100);
    m.left_team.match_players[0].tossups_heard = Some(20);
    m.right_team.points = Some(50);
    t.add_match(m, 1).unwrap();

    assert_eq!(t.players_with_data(a), vec![anna]);
    assert_eq!(t.find_team_of_player(anna).unwrap().id, a);
    assert!(t.team_has_played_any_match(a));
    let gamma = t.add_reg_and_team("Gamma HS", "Gamma").unwrap();
    assert!(!t.team_has_played_any_match(gamma));
}

#[test]
fn second_teams_join_an_existing_registration() {
    let mut t = seeded_tournament();
    let a = t.add_reg_and_team("Alpha HS", "Alpha A").unwrap();
    let a2 = t.add_team("Alpha HS", "Alpha B").unwrap();
    assert!(matches!(
        t.add_team("Nowhere HS", "Nowhere A"),
        Err(TournamentError::RegistrationNotFound(_))
    ));

    let reg = t.find_registration("Alpha HS").unwrap();
    assert_eq!(reg.teams.len(), 2);
    assert_eq!(t.seeds, vec![a, a2]);

    t.delete_registration("Alpha HS");
    assert_eq!(t.number_of_teams(), 0);
    assert!(t.seeds.is_empty());
}

#[test]
fn matches_can_be_removed_before_recompiling() {
    let mut t = seeded_tournament();
    let a = t.add_reg_and_team("Alpha HS", "Alpha").unwrap();
    let b = t.add_reg_and_team("Beta HS", "Beta").unwrap();

    assert!(!t.any_match_data_exists());
    let mut m = t.create_match(a, b).unwrap();
    m.tossups_read = Some(20);
    m.left_team.points = Some(100);
    m.right_team.points = Some(50);
    let match_id = m.id;
    t.add_match(m, 1).unwrap();
    assert!(t.any_match_data_exists());
    assert_eq!(t.find_pool_with_team(a, 1).unwrap().name, "Top Pool");

    t.compile_stats();
    let wins_before = t.stats[0].pools[0].pool_teams[0].wins;
    assert_eq!(wins_before, 1);

    // Stats only change on the next explicit recompile.
    t.delete_match(match_id, 1).unwrap();
    assert_eq!(t.stats[0].pools[0].pool_teams[0].wins, 1);
    t.compile_stats();
    assert_eq!(t.stats[0].pools[0].pool_teams[0].wins, 0);
    assert!(t.find_match(match_id).is_none());
}

#[test]
fn phase_lookups_resolve_by_name_and_round() {
    let t = seeded_tournament();
    assert!(t.find_phase_by_name("Prelims").is_some());
    assert!(t.find_phase_by_name("Playoffs").is_none());
    assert_eq!(t.phase_for_round(2).unwrap().name, "Prelims");
    assert!(t.phase_for_round(9).is_none());
}
