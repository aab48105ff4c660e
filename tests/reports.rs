//! Report rendering: page structure, sentinel display, and CSV export.

use quizbowl_stats::reports::csv_export;
use quizbowl_stats::{
    HtmlReportGenerator, Phase, PhaseType, Pool, TeamId, Tournament,
};

fn reported_tournament() -> (Tournament, TeamId, TeamId) {
    let mut t = Tournament::new("Report Test Open");
    t.question_set = "Sample Set 1".into();

    let mut prelims = Phase::with_rounds("Prelims", PhaseType::Prelim, 1, 2);
    let mut pool = Pool::new("Pool A", 1, 2);
    pool.seed_numbers = vec![1, 2];
    prelims.pools.push(pool);
    t.phases.push(prelims);

    let a = t.add_reg_and_team("Alpha HS", "Alpha").unwrap();
    let b = t.add_reg_and_team("Beta HS", "Beta").unwrap();
    t.add_player(a, "Anna").unwrap();
    t.add_player(a, "Andy").unwrap();
    t.add_player(b, "Ben").unwrap();

    let mut m = t.create_match(a, b).unwrap();
    m.tossups_read = Some(20);
    m.left_team.points = Some(120);
    m.left_team.match_players[0].tossups_heard = Some(20);
    m.left_team.match_players[0].set_answer_count(15, Some(2));
    m.left_team.match_players[0].set_answer_count(10, Some(3));
    m.right_team.points = Some(40);
    m.right_team.match_players[0].tossups_heard = Some(20);
    m.right_team.match_players[0].set_answer_count(10, Some(4));
    t.add_match(m, 1).unwrap();

    t.compile_stats();
    (t, a, b)
}

#[test]
fn all_six_pages_are_generated_with_titles_and_file_names() {
    let (t, _, _) = reported_tournament();
    let pages = HtmlReportGenerator::new(&t).generate_all();
    let titles: Vec<&str> = pages.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Team Standings",
            "Individuals",
            "Scoreboard",
            "Team Detail",
            "Player Detail",
            "Round Report"
        ]
    );
    for page in &pages {
        assert!(page.file_name.ends_with(".html"));
        assert!(page.content.contains("<HTML>"));
        assert!(page.content.contains(&page.title));
    }
}

#[test]
fn standings_page_shows_records_and_metadata() {
    let (t, _, _) = reported_tournament();
    let page = HtmlReportGenerator::new(&t).generate_standings_page();
    assert!(page.content.contains("Report Test Open"));
    assert!(page.content.contains("Question set: Sample Set 1"));
    assert!(page.content.contains("Alpha"));
    assert!(page.content.contains("PP20TUH"));
    assert!(page.content.contains("PPB"));
}

#[test]
fn missing_ratios_render_as_a_dash() {
    let mut t = Tournament::new("Forfeit Open");
    let mut prelims = Phase::with_rounds("Prelims", PhaseType::Prelim, 1, 1);
    let mut pool = Pool::new("Pool A", 1, 2);
    pool.seed_numbers = vec![1, 2];
    prelims.pools.push(pool);
    t.phases.push(prelims);
    let a = t.add_reg_and_team("Alpha HS", "Alpha").unwrap();
    let b = t.add_reg_and_team("Beta HS", "Beta").unwrap();

    // Only a forfeit: every rate statistic is in the absent state.
    let mut m = t.create_match(a, b).unwrap();
    m.right_team.forfeit_loss = true;
    t.add_match(m, 1).unwrap();
    t.compile_stats();

    let page = HtmlReportGenerator::new(&t).generate_standings_page();
    assert!(page.content.contains("&mdash;"));
    assert!(!page.content.contains("NaN"));
    assert!(!page.content.contains("inf"));
}

#[test]
fn individuals_page_skips_players_with_no_tossups_heard() {
    let (t, _, _) = reported_tournament();
    let page = HtmlReportGenerator::new(&t).generate_individuals_page();
    assert!(page.content.contains("Anna"));
    // Andy is on the roster but never played.
    assert!(!page.content.contains("Andy"));
}

#[test]
fn scoreboard_has_box_scores_with_team_totals() {
    let (t, _, _) = reported_tournament();
    let page = HtmlReportGenerator::new(&t).generate_scoreboard_page();
    assert!(page.content.contains("Alpha 120, Beta 40"));
    assert!(page.content.contains("Tossups read: 20"));
    assert!(page.content.contains("Bonuses"));
}

#[test]
fn team_detail_is_alphabetical_with_totals_row() {
    let (t, _, _) = reported_tournament();
    let page = HtmlReportGenerator::new(&t).generate_team_detail_page();
    let alpha_pos = page.content.find("<h2 id=Alpha>").unwrap();
    let beta_pos = page.content.find("<h2 id=Beta>").unwrap();
    assert!(alpha_pos < beta_pos);
    assert!(page.content.contains("1-0"));
    assert!(page.content.contains("0-1"));
}

#[test]
fn player_detail_lists_each_game() {
    let (t, _, _) = reported_tournament();
    let page = HtmlReportGenerator::new(&t).generate_player_detail_page();
    assert!(page.content.contains("Anna, Alpha"));
    assert!(page.content.contains("120-40"));
}

#[test]
fn round_report_has_conversion_figures() {
    let (t, _, _) = reported_tournament();
    let page = HtmlReportGenerator::new(&t).generate_round_report_page();
    assert!(page.content.contains("TU Converted"));
    // 9 of 20 tossups converted across the one game.
    assert!(page.content.contains("45%"));
}

#[test]
fn reports_on_an_empty_tournament_do_not_panic() {
    let t = Tournament::new("Nothing Yet");
    let pages = HtmlReportGenerator::new(&t).generate_all();
    assert_eq!(pages.len(), 6);
}

#[test]
fn csv_exports_contain_the_cumulative_tables() {
    let (t, _, _) = reported_tournament();
    let standings = csv_export::standings_csv(&t).unwrap();
    let mut lines = standings.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("Rank,Team,W,L,T,Pct,PP20TUH"));
    assert!(standings.lines().any(|l| l.contains("Alpha") && l.contains("1,0")));

    let individuals = csv_export::individuals_csv(&t).unwrap();
    assert!(individuals.contains("Anna"));
    assert!(!individuals.contains("Andy"));
}
