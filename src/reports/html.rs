//! HTML report pages: standings, individuals, scoreboard, team and player
//! detail, and the round report.
//!
//! This layer only formats stats that [`Tournament::compile_stats`] already
//! built; the single computation it does is scaling per-tossup rates by the
//! regulation tossup count for display.

use crate::logic::standings::{PhaseStandings, PoolStats};
use crate::logic::stats::{MatchLine, PlayerStats, PoolTeamStats, RoundStats};
use crate::models::{Match, Phase, PhaseType, PlayerId, Pool, Side, TeamId, Tournament};
use crate::reports::ReportPage;
use log::warn;

pub const STANDINGS_FILE: &str = "standings.html";
pub const INDIVIDUALS_FILE: &str = "individuals.html";
pub const SCOREBOARD_FILE: &str = "games.html";
pub const TEAM_DETAIL_FILE: &str = "teamdetail.html";
pub const PLAYER_DETAIL_FILE: &str = "playerdetail.html";
pub const ROUND_REPORT_FILE: &str = "rounds.html";

const M_DASH: &str = "&mdash;";
const N_DASH: &str = "&ndash;";
const NBSP: &str = "&nbsp;";
const EMSP: &str = "&emsp;";
const TOP_ANCHOR_ID: &str = "#top";

/// Renders every report page for one tournament. Expects
/// [`Tournament::compile_stats`] to have run; with no compiled stats the
/// pages come out empty rather than failing.
pub struct HtmlReportGenerator<'a> {
    tournament: &'a Tournament,
}

impl<'a> HtmlReportGenerator<'a> {
    pub fn new(tournament: &'a Tournament) -> Self {
        if tournament.stats.is_empty() {
            warn!("generating reports with no compiled stats; pages will be empty");
        }
        Self { tournament }
    }

    pub fn generate_all(&self) -> Vec<ReportPage> {
        vec![
            self.generate_standings_page(),
            self.generate_individuals_page(),
            self.generate_scoreboard_page(),
            self.generate_team_detail_page(),
            self.generate_player_detail_page(),
            self.generate_round_report_page(),
        ]
    }

    pub fn generate_standings_page(&self) -> ReportPage {
        self.page("Team Standings", STANDINGS_FILE, self.standings_html())
    }

    pub fn generate_individuals_page(&self) -> ReportPage {
        self.page("Individuals", INDIVIDUALS_FILE, self.individuals_html())
    }

    pub fn generate_scoreboard_page(&self) -> ReportPage {
        self.page("Scoreboard", SCOREBOARD_FILE, self.scoreboard_html())
    }

    pub fn generate_team_detail_page(&self) -> ReportPage {
        self.page("Team Detail", TEAM_DETAIL_FILE, self.team_detail_html())
    }

    pub fn generate_player_detail_page(&self) -> ReportPage {
        self.page("Player Detail", PLAYER_DETAIL_FILE, self.player_detail_html())
    }

    pub fn generate_round_report_page(&self) -> ReportPage {
        self.page("Round Report", ROUND_REPORT_FILE, self.round_report_html())
    }

    /// The entire contents of one document.
    fn page(&self, title: &str, file_name: &str, data: String) -> ReportPage {
        let head = generic_tag("HEAD", &generic_tag("title", title));
        let main_header = format!("<h1 id={TOP_ANCHOR_ID}>\n{title}\n</h1>");
        let body = generic_tag(
            "BODY",
            &[top_links(), main_header, page_style(), data].join("\n"),
        );
        ReportPage {
            title: title.to_string(),
            file_name: file_name.to_string(),
            content: generic_tag("HTML", &format!("{head}\n{body}")),
        }
    }

    // ---- lookups ----------------------------------------------------------

    fn team_name(&self, team_id: Option<TeamId>) -> String {
        team_id
            .and_then(|id| self.tournament.find_team(id))
            .map(|t| t.name.clone())
            .unwrap_or_default()
    }

    fn player_name(&self, player_id: PlayerId) -> String {
        self.tournament
            .find_player(player_id)
            .map(|p| p.name.clone())
            .unwrap_or_default()
    }

    fn phase_of_line(&self, line: &MatchLine) -> Option<&Phase> {
        self.tournament.phases.get(line.phase_idx)
    }

    fn match_of_line(&self, line: &MatchLine) -> Option<&Match> {
        self.phase_of_line(line)?
            .round(line.round_number)?
            .find_match(line.match_id)
    }

    fn omit_phase_col(&self) -> bool {
        self.tournament.full_phases().len() < 2
    }

    // ---- standings --------------------------------------------------------

    fn standings_html(&self) -> String {
        let mut sections: Vec<String> = Vec::new();
        if self.tournament.stats.is_empty() {
            return String::new();
        }

        sections.push(self.general_metadata());
        sections.push(self.finals_list().join("\n"));

        let mut printed_phase_count = 0;
        for standings in self.tournament.stats.iter().rev() {
            let phase = &self.tournament.phases[standings.phase_idx];
            if !phase.any_teams_assigned() {
                continue;
            }
            printed_phase_count += 1;
            let header = header_with_divider(&phase.name, printed_phase_count == 1);
            sections.push(format!(
                "{header}\n{}",
                self.standings_for_one_phase(standings)
            ));
        }

        if printed_phase_count > 1 {
            let header = header_with_divider("Cumulative", false);
            sections.push(format!("{header}\n{}", self.cumulative_standings_table()));
        }
        sections.join("\n")
    }

    /// Name, dates, site, and question set on one line.
    fn general_metadata(&self) -> String {
        let t = self.tournament;
        let mut segments: Vec<String> = Vec::new();
        if !t.name.is_empty() {
            segments.push(generic_tag("span", &t.name));
        }
        if let Some(start) = t.start_date {
            let text = match t.end_date {
                Some(end) => format!("{start} {N_DASH} {end}"),
                None => start.to_string(),
            };
            segments.push(generic_tag("span", &text));
        }
        if !t.site_name.is_empty() {
            segments.push(generic_tag("span", &t.site_name));
        }
        if !t.question_set.is_empty() {
            segments.push(generic_tag("span", &format!("Question set: {}", t.question_set)));
        }
        segments.join(&generic_tag("span", &format!("{EMSP}|{EMSP}")))
    }

    fn standings_for_one_phase(&self, standings: &PhaseStandings) -> String {
        let phase = &self.tournament.phases[standings.phase_idx];
        let next_phase = self.tournament.next_full_phase(standings.phase_idx);
        let tb_phase = self.tournament.tiebreaker_phase_for(standings.phase_idx);

        let mut tables: Vec<String> = Vec::new();
        for pool_stats in &standings.pools {
            let header = if standings.pools.len() > 1 {
                generic_tag("h3", &self.pool_name(phase, pool_stats))
            } else {
                String::new()
            };
            tables.push(format!(
                "{header}\n{}",
                self.one_standings_table(phase, pool_stats, standings.any_ties_exist, tb_phase, next_phase)
            ));
        }
        format!("{}<br/>", tables.join("\n"))
    }

    fn pool_name(&self, phase: &Phase, pool_stats: &PoolStats) -> String {
        match pool_stats.pool_idx.and_then(|i| phase.pools.get(i)) {
            Some(pool) => pool.name.clone(),
            None => "Unassigned".into(),
        }
    }

    fn one_standings_table(
        &self,
        phase: &Phase,
        pool_stats: &PoolStats,
        any_ties_exist: bool,
        tb_phase: Option<&Phase>,
        next_phase: Option<&Phase>,
    ) -> String {
        let mut rows = vec![self.standings_header(any_ties_exist, next_phase, false, false)];
        for team_stats in &pool_stats.pool_teams {
            rows.push(self.standings_row(team_stats, any_ties_exist, next_phase, false, false));
        }
        let pool = pool_stats.pool_idx.and_then(|i| phase.pools.get(i));
        format!(
            "{}\n{}",
            table_tag(&rows, Some("100%")),
            self.tiebreaker_list(tb_phase, pool)
        )
    }

    fn cumulative_standings_table(&self) -> String {
        let Some(stats) = &self.tournament.cumulative_stats else {
            return String::new();
        };
        let mut rows = vec![self.standings_header(stats.any_ties_exist, None, true, true)];
        for team_stats in &stats.team_stats {
            rows.push(self.standings_row(team_stats, stats.any_ties_exist, None, true, true));
        }
        table_tag(&rows, Some("75%"))
    }

    fn standings_header(
        &self,
        any_ties_exist: bool,
        next_phase: Option<&Phase>,
        cumulative: bool,
        omit_rank: bool,
    ) -> String {
        let t = self.tournament;
        let rules = &t.scoring_rules;
        let mut cells: Vec<String> = Vec::new();
        if !omit_rank {
            cells.push(header_cell_w("Rank", false, "3%"));
        }
        cells.push(header_cell_w("Team", false, if cumulative { "" } else { "20%" }));
        if t.track_small_school {
            cells.push(header_cell("SS", false));
        }
        if t.track_jv {
            cells.push(header_cell("JV", false));
        }
        if t.track_ug {
            cells.push(header_cell("UG", false));
        }
        if t.track_d2 {
            cells.push(header_cell("D2", false));
        }
        cells.push(header_cell_w("W", true, "3%"));
        cells.push(header_cell_w("L", true, "3%"));
        if any_ties_exist {
            cells.push(header_cell_w("T", true, "3%"));
        }
        if !cumulative {
            cells.push(header_cell("Pct", true));
        }
        cells.push(header_cell_w(
            &format!("PP{}TUH", rules.regulation_tossup_count),
            true,
            "8%",
        ));
        self.push_tossup_value_headers(&mut cells);
        cells.push(header_cell("TUH", true));
        if rules.use_bonuses {
            cells.push(header_cell("PPB", true));
        }
        if rules.bonuses_bounce_back {
            cells.push(header_cell("BB%", true));
        }
        match next_phase {
            Some(np) if np.any_teams_assigned() => cells.push(header_cell("Advanced To", false)),
            Some(_) => cells.push(header_cell("Would Advance", false)),
            None => {}
        }
        tr_tag(&cells)
    }

    fn standings_row(
        &self,
        team_stats: &PoolTeamStats,
        any_ties_exist: bool,
        next_phase: Option<&Phase>,
        cumulative: bool,
        omit_rank: bool,
    ) -> String {
        let t = self.tournament;
        let rules = &t.scoring_rules;
        let team = t.find_team(team_stats.team_id);
        let mut cells: Vec<String> = Vec::new();

        if !omit_rank {
            cells.push(text_cell(&team_stats.rank_string()));
        }
        cells.push(text_cell(&self.team_detail_link(team_stats.team_id)));
        if t.track_small_school {
            let is_ss = t
                .find_registration_by_team(team_stats.team_id)
                .is_some_and(|reg| reg.is_small_school);
            cells.push(text_cell(if is_ss { "SS" } else { "" }));
        }
        if t.track_jv {
            cells.push(text_cell(if team.is_some_and(|tm| tm.is_jv) { "JV" } else { "" }));
        }
        if t.track_ug {
            cells.push(text_cell(if team.is_some_and(|tm| tm.is_ug) { "UG" } else { "" }));
        }
        if t.track_d2 {
            cells.push(text_cell(if team.is_some_and(|tm| tm.is_d2) { "D2" } else { "" }));
        }
        cells.push(numeric_cell(&team_stats.wins.to_string()));
        cells.push(numeric_cell(&team_stats.losses.to_string()));
        if any_ties_exist {
            cells.push(numeric_cell(&team_stats.ties.to_string()));
        }

        if !cumulative {
            cells.push(numeric_cell(&fmt_opt(team_stats.win_pct(), 3)));
        }

        let ppg = team_stats
            .pts_per_reg_tuh()
            .map(|rate| rate * f64::from(rules.regulation_tossup_count));
        cells.push(numeric_cell(&fmt_opt(ppg, 1)));

        for at in &rules.answer_types {
            cells.push(numeric_cell(&team_stats.tossup_count(at.value).to_string()));
        }
        cells.push(numeric_cell(&team_stats.tuh_regulation.to_string()));

        if rules.use_bonuses {
            cells.push(numeric_cell(&fmt_opt(team_stats.pts_per_bonus(), 2)));
        }
        if rules.bonuses_bounce_back {
            cells.push(numeric_cell(&fmt_opt(team_stats.bounceback_conv_pct(rules), 1)));
        }

        match next_phase {
            Some(np) if np.any_teams_assigned() => {
                cells.push(text_cell(&self.definite_advancement_tier_display(team_stats, np)));
            }
            Some(_) => {
                cells.push(text_cell(&self.provisional_advancement_tier_display(team_stats)));
            }
            None => {}
        }

        tr_tag(&cells)
    }

    fn provisional_advancement_tier_display(&self, team_stats: &PoolTeamStats) -> String {
        if team_stats.record_tie_for_advancement {
            return unicode_html("2754");
        }
        match team_stats.advance_to_tier {
            Some(tier) => format!("Tier {tier}"),
            None => M_DASH.into(),
        }
    }

    fn definite_advancement_tier_display(
        &self,
        team_stats: &PoolTeamStats,
        next_phase: &Phase,
    ) -> String {
        if team_stats.did_not_advance {
            return "None".into();
        }
        next_phase
            .find_pool_with_team(team_stats.team_id)
            .map(|pool| pool.name.clone())
            .unwrap_or_default()
    }

    fn finals_list(&self) -> Vec<String> {
        self.tournament
            .finals_phases()
            .iter()
            .filter_map(|ph| {
                let match_list = self.tiebreaker_list(Some(ph), None);
                if match_list.is_empty() {
                    return None;
                }
                Some(format!("{}\n{match_list}", header_with_divider(&ph.name, false)))
            })
            .collect()
    }

    /// A compact list of tiebreaker or finals results.
    fn tiebreaker_list(&self, tb_or_finals_phase: Option<&Phase>, pool: Option<&Pool>) -> String {
        let Some(phase) = tb_or_finals_phase else {
            return String::new();
        };
        let matches = phase.matches_for_pool(pool);
        if matches.is_empty() {
            return String::new();
        }
        let title = if phase.phase_type == PhaseType::Tiebreaker {
            generic_tag("span", "Tiebreakers:")
        } else {
            String::new()
        };
        let items: Vec<String> = matches
            .iter()
            .map(|m| {
                m.winner_loser_string(
                    &self.team_name(m.left_team.team_id),
                    &self.team_name(m.right_team.team_id),
                )
            })
            .collect();
        format!(
            "<div class=\"smallText\">\n{title}\n{}\n</div>",
            unordered_list(&items)
        )
    }

    // ---- individuals ------------------------------------------------------

    fn individuals_html(&self) -> String {
        let mut sections: Vec<String> = Vec::new();
        let Some(prelims) = self.tournament.stats.first() else {
            return String::new();
        };

        let prelims_header =
            header_with_divider(&self.tournament.phases[prelims.phase_idx].name, true);
        sections.push(format!(
            "{prelims_header}\n{}",
            self.individuals_table(&prelims.players, false)
        ));

        if self.tournament.stats.len() > 1 {
            if let Some(cumulative) = &self.tournament.cumulative_stats {
                let header = header_with_divider("All Games", false);
                sections.push(format!(
                    "{header}\n{}",
                    self.individuals_table(&cumulative.players, true)
                ));
            }
        }
        sections.join("\n")
    }

    fn individuals_table(&self, players: &[PlayerStats], skip_rank_col: bool) -> String {
        let mut rows = vec![self.individuals_header(skip_rank_col)];
        for player_stats in players {
            if player_stats.tossups_heard == 0 {
                continue;
            }
            rows.push(self.individuals_row(player_stats, skip_rank_col));
        }
        table_tag(&rows, Some("80%"))
    }

    fn individuals_header(&self, skip_rank_col: bool) -> String {
        let t = self.tournament;
        let mut cells: Vec<String> = Vec::new();
        if !skip_rank_col {
            cells.push(header_cell_w("Rank", false, "3%"));
        }
        cells.push(header_cell("Player", false));
        if t.track_player_year {
            cells.push(header_cell("Year/Grade", false));
        }
        if t.track_ug {
            cells.push(header_cell("UG", false));
        }
        if t.track_d2 {
            cells.push(header_cell("D2", false));
        }
        cells.push(header_cell("Team", false));
        cells.push(header_cell("GP", true));
        self.push_tossup_value_headers(&mut cells);
        cells.push(header_cell("TUH", true));
        cells.push(header_cell(
            &format!("PP{}TUH", t.scoring_rules.regulation_tossup_count),
            true,
        ));
        tr_tag(&cells)
    }

    fn individuals_row(&self, player_stats: &PlayerStats, skip_rank_col: bool) -> String {
        let t = self.tournament;
        let rules = &t.scoring_rules;
        let player = t.find_player(player_stats.player_id);
        let mut cells: Vec<String> = Vec::new();
        if !skip_rank_col {
            cells.push(text_cell(&player_stats.rank_string()));
        }
        cells.push(text_cell(
            &self.player_detail_link(player_stats.player_id, player_stats.team_id),
        ));
        if t.track_player_year {
            cells.push(text_cell(
                player.map(|p| p.year_string.as_str()).unwrap_or(""),
            ));
        }
        if t.track_ug {
            cells.push(text_cell(if player.is_some_and(|p| p.is_ug) { "UG" } else { "" }));
        }
        if t.track_d2 {
            cells.push(text_cell(if player.is_some_and(|p| p.is_d2) { "D2" } else { "" }));
        }
        cells.push(text_cell(&self.team_detail_link(player_stats.team_id)));
        cells.push(numeric_cell(&format!("{:.1}", player_stats.games_played)));
        for at in &rules.answer_types {
            cells.push(numeric_cell(&player_stats.tossup_count(at.value).to_string()));
        }
        cells.push(numeric_cell(&player_stats.tossups_heard.to_string()));
        let pptuh = player_stats
            .pptuh()
            .map(|rate| rate * f64::from(rules.regulation_tossup_count));
        cells.push(numeric_cell(&fmt_opt(pptuh, 2)));
        tr_tag(&cells)
    }

    // ---- scoreboard -------------------------------------------------------

    fn scoreboard_html(&self) -> String {
        let mut rounds: Vec<String> = Vec::new();
        let mut toc_items: Vec<String> = Vec::new();
        let mut first_round = true;
        for phase in &self.tournament.phases {
            let mut phase_has_games = false;
            for round in &phase.rounds {
                if round.matches.is_empty() {
                    continue;
                }
                rounds.push(self.one_round_of_box_scores(round, phase, first_round));
                first_round = false;
                if !phase_has_games {
                    phase_has_games = true;
                    if phase.uses_numeric_rounds() {
                        toc_items.push(phase.name.clone());
                    } else {
                        toc_items.push(scoreboard_round_link(round.number, &phase.name));
                    }
                }
                if phase.uses_numeric_rounds() {
                    toc_items.push(format!(
                        "{NBSP}{NBSP}{}",
                        scoreboard_round_link(round.number, &round.display_name(true))
                    ));
                }
            }
        }
        let toc = format!(
            "<div class=\"floatingTOC\">\n{}\n</div>",
            unordered_list(&toc_items)
        );
        format!("{toc}\n{}", rounds.join("\n"))
    }

    fn one_round_of_box_scores(
        &self,
        round: &crate::models::Round,
        phase: &Phase,
        first_round: bool,
    ) -> String {
        let mut segments: Vec<String> = Vec::new();
        if !first_round {
            segments.push("<br /><br />".into());
        }
        let mut title = round.display_name(false);
        if phase.is_full_phase() {
            title += &format!(" - {}", phase.name);
        }
        segments.push(format!("<div id={}></div>", round_link_id(round.number)));
        segments.push(header_with_divider(&title, first_round));
        for game in &round.matches {
            segments.push(self.box_score(game));
        }
        segments.join("\n")
    }

    fn box_score(&self, game: &Match) -> String {
        let rules = &self.tournament.scoring_rules;
        let mut segments: Vec<String> = Vec::new();
        segments.push(format!("<div id={}></div>", match_link_id(game)));
        let left_name = self.team_name(game.left_team.team_id);
        let right_name = self.team_name(game.right_team.team_id);
        segments.push(generic_tag("h3", &game.score_string(&left_name, &right_name)));
        if game.is_forfeit() {
            return segments.join("\n");
        }

        if !game.carryover_phases.is_empty() {
            segments.push(format!(
                "<p class=\"smallText\">\nCarries over to: {}\n</p>",
                game.carryover_phases.join(", ")
            ));
        }
        let mut tu_read = format!(
            "Tossups read: {}",
            game.tossups_read
                .map(|n| n.to_string())
                .unwrap_or_else(|| "unknown".into())
        );
        if game.overtime_tossups_read > 0 {
            tu_read += &format!(" ({} in OT)", game.overtime_tossups_read);
        }
        segments.push(format!("<p class=\"smallText\">\n{tu_read}\n</p>"));

        let left_table = self.box_score_table_one_team(game, Side::Left);
        let right_table = self.box_score_table_one_team(game, Side::Right);
        segments.push(format!(
            "<div class=\"boxScoreTable\">\n{left_table}\n{right_table}\n</div>"
        ));

        if rules.use_bonuses {
            segments.push("<br />".into());
            segments.push(self.box_score_bonus_table(game));
        }
        if rules.bonuses_bounce_back {
            segments.push(self.box_score_bounceback_table(game));
        }
        segments.join("\n")
    }

    fn box_score_table_one_team(&self, game: &Match, side: Side) -> String {
        let mt = game.match_team(side);
        let mut rows = vec![self.box_score_table_header(&self.team_name(mt.team_id))];
        for mp in mt.active_match_players() {
            rows.push(self.box_score_one_match_player(mp));
        }
        rows.push(self.box_score_total_row(mt));
        table_tag(&rows, Some("35%"))
    }

    fn box_score_table_header(&self, team_name: &str) -> String {
        let mut cells = vec![header_cell(team_name, false), header_cell("TUH", true)];
        self.push_tossup_value_headers(&mut cells);
        cells.push(header_cell("Tot", true));
        tr_tag(&cells)
    }

    fn box_score_one_match_player(&self, mp: &crate::models::MatchPlayer) -> String {
        let mut cells = vec![
            text_cell(&self.player_name(mp.player_id)),
            numeric_cell(&mp.tossups_heard.unwrap_or(0).to_string()),
        ];
        for at in &self.tournament.scoring_rules.answer_types {
            cells.push(numeric_cell(&mp.answer_count(at.value).to_string()));
        }
        cells.push(numeric_cell(&mp.points().to_string()));
        tr_tag(&cells)
    }

    fn box_score_total_row(&self, mt: &crate::models::MatchTeam) -> String {
        let mut cells = vec![header_cell("Total", false), text_cell("")];
        let counts = mt.answer_counts();
        for at in &self.tournament.scoring_rules.answer_types {
            let n = counts
                .iter()
                .find(|ac| ac.answer_type.value == at.value)
                .and_then(|ac| ac.number)
                .unwrap_or(0);
            cells.push(header_cell(&n.to_string(), true));
        }
        cells.push(header_cell(&mt.tossup_points().to_string(), true));
        table_footer(&cells)
    }

    fn box_score_bonus_table(&self, game: &Match) -> String {
        let rows = vec![
            tr_tag(&[
                header_cell_w("Bonuses", false, "40%"),
                header_cell_w("Heard", true, "20%"),
                header_cell_w("Pts", true, "20%"),
                header_cell_w("PPB", true, "20%"),
            ]),
            self.box_score_bonus_table_row(game, Side::Left),
            self.box_score_bonus_table_row(game, Side::Right),
        ];
        table_tag(&rows, Some("50%"))
    }

    fn box_score_bonus_table_row(&self, game: &Match, side: Side) -> String {
        let mt = game.match_team(side);
        let (pts, heard, ppb) = mt.bonus_stats(&self.tournament.scoring_rules);
        tr_tag(&[
            text_cell(&self.team_name(mt.team_id)),
            numeric_cell(&heard),
            numeric_cell(&pts),
            numeric_cell(&ppb),
        ])
    }

    fn box_score_bounceback_table(&self, game: &Match) -> String {
        let rows = vec![
            tr_tag(&[
                header_cell_w("Bouncebacks", false, "40%"),
                header_cell_w("Parts Heard", true, "20%"),
                header_cell_w("Pts", true, "20%"),
                header_cell_w("Success%", true, "20%"),
            ]),
            self.box_score_bounceback_table_row(game, Side::Left),
            self.box_score_bounceback_table_row(game, Side::Right),
        ];
        table_tag(&rows, Some("50%"))
    }

    fn box_score_bounceback_table_row(&self, game: &Match, side: Side) -> String {
        let rules = &self.tournament.scoring_rules;
        let (heard, rate) = game.bounceback_stats_string(side, rules);
        let mt = game.match_team(side);
        tr_tag(&[
            text_cell(&self.team_name(mt.team_id)),
            numeric_cell(&heard),
            numeric_cell(&mt.bonus_bounceback_points.unwrap_or(0).to_string()),
            numeric_cell(&format!("{rate}%")),
        ])
    }

    // ---- team detail ------------------------------------------------------

    fn team_detail_html(&self) -> String {
        let Some(cumulative) = &self.tournament.cumulative_stats else {
            return String::new();
        };

        // Alphabetical for lookup, unlike the ranked standings page.
        let mut team_list: Vec<&PoolTeamStats> = cumulative.team_stats.iter().collect();
        team_list.sort_by_key(|ts| self.team_name(Some(ts.team_id)).to_uppercase());

        team_list
            .iter()
            .map(|ts| self.team_detail_one_team(ts))
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn team_detail_one_team(&self, team_stats: &PoolTeamStats) -> String {
        let name = self.team_name(Some(team_stats.team_id));
        let mut segments = vec![format!(
            "<h2 id={}>\n{name}\n</h2>",
            team_detail_link_id(&name)
        )];
        segments.push(self.team_detail_match_table(team_stats));
        segments.push("<br />".into());
        segments.push(self.team_detail_player_table(team_stats.team_id));
        segments.join("\n")
    }

    fn team_detail_match_table(&self, team_stats: &PoolTeamStats) -> String {
        let omit_phase = self.omit_phase_col();
        let mut rows = vec![self.team_detail_match_table_header(omit_phase)];
        for line in &team_stats.matches {
            rows.push(self.team_detail_match_table_row(line, omit_phase));
        }
        rows.push(self.team_detail_match_table_footer(team_stats, omit_phase));
        table_tag(&rows, Some("100%"))
    }

    fn team_detail_match_table_header(&self, omit_phase: bool) -> String {
        let rules = &self.tournament.scoring_rules;
        let mut cells = vec![header_cell_w("Round", false, "5%")];
        if !omit_phase {
            cells.push(header_cell_w("Stage", false, "12%"));
            if self.tournament.has_any_carryover() {
                cells.push(header_cell_w("Carried To", false, "8%"));
            }
        }
        cells.push(header_cell("Opponent", false));
        cells.push(header_cell("", false)); // win/loss
        cells.push(header_cell("Score", false));
        self.push_tossup_value_headers(&mut cells);
        cells.push(header_cell("TUH", true));
        if rules.use_bonuses {
            cells.push(header_cell("BHrd", true));
            cells.push(header_cell("BPts", true));
            cells.push(header_cell("PPB", true));
        }
        if rules.bonuses_bounce_back {
            cells.push(header_cell("BBHrd", true));
            cells.push(header_cell("BBPts", true));
            cells.push(header_cell("BB%", true));
        }
        tr_tag(&cells)
    }

    fn team_detail_match_table_row(&self, line: &MatchLine, omit_phase: bool) -> String {
        let rules = &self.tournament.scoring_rules;
        let Some(game) = self.match_of_line(line) else {
            return tr_tag(&[]);
        };
        let phase = self.phase_of_line(line);
        let mt = game.match_team(line.side);
        let opponent = game.opponent(line.side);
        let forfeit = game.is_forfeit();
        if mt.team_id.is_none() || opponent.team_id.is_none() {
            return tr_tag(&[]);
        }

        let mut cells: Vec<String> = Vec::new();
        cells.push(text_cell(
            &phase
                .filter(|ph| ph.uses_numeric_rounds())
                .map(|_| line.round_number.to_string())
                .unwrap_or_default(),
        ));
        if !omit_phase {
            cells.push(text_cell(phase.map(|ph| ph.name.as_str()).unwrap_or("")));
            if self.tournament.has_any_carryover() {
                cells.push(text_cell(&game.carryover_phases.join(", ")));
            }
        }
        cells.push(text_cell(
            &self.team_detail_link(opponent.team_id.unwrap_or(TeamId(0))),
        ));
        cells.push(text_cell(&game.result_display(line.side)));
        cells.push(text_cell(&scoreboard_match_link(
            game,
            &game.score_only(line.side),
        )));

        let counts = mt.answer_counts();
        for at in &rules.answer_types {
            if forfeit {
                cells.push(numeric_cell(""));
                continue;
            }
            let n = counts
                .iter()
                .find(|ac| ac.answer_type.value == at.value)
                .and_then(|ac| ac.number)
                .unwrap_or(0);
            cells.push(numeric_cell(&n.to_string()));
        }

        cells.push(numeric_cell(
            &game
                .tossups_read
                .filter(|_| !forfeit)
                .map(|n| n.to_string())
                .unwrap_or_default(),
        ));
        if rules.use_bonuses {
            let (pts, heard, ppb) = mt.bonus_stats(rules);
            cells.push(numeric_cell(if forfeit { "" } else { heard.as_str() }));
            cells.push(numeric_cell(if forfeit { "" } else { pts.as_str() }));
            cells.push(numeric_cell(if forfeit { "" } else { ppb.as_str() }));
        }
        if rules.bonuses_bounce_back {
            let (heard, rate) = game.bounceback_stats_string(line.side, rules);
            let pts = mt.bonus_bounceback_points.unwrap_or(0).to_string();
            let rate_pct = format!("{rate}%");
            cells.push(numeric_cell(if forfeit { "" } else { heard.as_str() }));
            cells.push(numeric_cell(if forfeit { "" } else { pts.as_str() }));
            cells.push(numeric_cell(if forfeit { "" } else { rate_pct.as_str() }));
        }
        tr_tag(&cells)
    }

    fn team_detail_match_table_footer(
        &self,
        team_stats: &PoolTeamStats,
        omit_phase: bool,
    ) -> String {
        let rules = &self.tournament.scoring_rules;
        let mut cells = vec![text_cell("")]; // round no.
        if !omit_phase {
            cells.push(text_cell(""));
            if self.tournament.has_any_carryover() {
                cells.push(text_cell(""));
            }
        }
        cells.push(header_cell("Total", false)); // below the Opponent column
        cells.push(header_cell(&team_stats.record(), false));
        cells.push(header_cell("", false));
        for at in &rules.answer_types {
            cells.push(header_cell(&team_stats.tossup_count(at.value).to_string(), true));
        }
        cells.push(header_cell(&team_stats.tuh_total.to_string(), true));
        if rules.use_bonuses {
            cells.push(header_cell(&team_stats.bonuses_heard.to_string(), true));
            cells.push(header_cell(&team_stats.bonus_points.to_string(), true));
            cells.push(header_cell(&fmt_opt(team_stats.pts_per_bonus(), 2), true));
        }
        if rules.bonuses_bounce_back {
            cells.push(header_cell(
                &format!("{:.0}", team_stats.bounceback_parts_heard),
                true,
            ));
            cells.push(header_cell(&team_stats.bounceback_points.to_string(), true));
            cells.push(header_cell(
                &fmt_opt(team_stats.bounceback_conv_pct(rules), 1),
                true,
            ));
        }
        table_footer(&cells)
    }

    fn team_detail_player_table(&self, team_id: TeamId) -> String {
        let Some(cumulative) = &self.tournament.cumulative_stats else {
            return String::new();
        };
        let players_on_team: Vec<&PlayerStats> = cumulative
            .players
            .iter()
            .filter(|ps| ps.team_id == team_id)
            .collect();
        if players_on_team.is_empty() {
            return String::new();
        }

        let mut rows = vec![self.team_detail_player_table_header()];
        for ps in players_on_team {
            rows.push(self.team_detail_player_table_row(ps));
        }
        table_tag(&rows, Some("70%"))
    }

    fn team_detail_player_table_header(&self) -> String {
        let t = self.tournament;
        let mut cells = vec![header_cell("Player", false)];
        if t.track_player_year {
            cells.push(header_cell("Year/Grade", false));
        }
        if t.track_ug {
            cells.push(header_cell("UG", false));
        }
        if t.track_d2 {
            cells.push(header_cell("D2", false));
        }
        cells.push(header_cell("GP", true));
        self.push_tossup_value_headers(&mut cells);
        cells.push(header_cell("TUH", true));
        cells.push(header_cell(
            &format!("PP{}TUH", t.scoring_rules.regulation_tossup_count),
            true,
        ));
        tr_tag(&cells)
    }

    fn team_detail_player_table_row(&self, player_stats: &PlayerStats) -> String {
        let t = self.tournament;
        let rules = &t.scoring_rules;
        let player = t.find_player(player_stats.player_id);
        let mut cells = vec![text_cell(
            &self.player_detail_link(player_stats.player_id, player_stats.team_id),
        )];
        if t.track_player_year {
            cells.push(text_cell(
                player.map(|p| p.year_string.as_str()).unwrap_or(""),
            ));
        }
        if t.track_ug {
            cells.push(text_cell(if player.is_some_and(|p| p.is_ug) { "UG" } else { "" }));
        }
        if t.track_d2 {
            cells.push(text_cell(if player.is_some_and(|p| p.is_d2) { "D2" } else { "" }));
        }
        cells.push(numeric_cell(&format!("{:.1}", player_stats.games_played)));
        for at in &rules.answer_types {
            cells.push(numeric_cell(&player_stats.tossup_count(at.value).to_string()));
        }
        cells.push(numeric_cell(&player_stats.tossups_heard.to_string()));
        let pptuh = player_stats
            .pptuh()
            .map(|rate| rate * f64::from(rules.regulation_tossup_count));
        cells.push(numeric_cell(&fmt_opt(pptuh, 2)));
        tr_tag(&cells)
    }

    // ---- player detail ----------------------------------------------------

    fn player_detail_html(&self) -> String {
        let Some(cumulative) = &self.tournament.cumulative_stats else {
            return String::new();
        };

        let mut player_list: Vec<&PlayerStats> = cumulative.players.iter().collect();
        player_list.sort_by_key(|ps| {
            (
                self.team_name(Some(ps.team_id)).to_uppercase(),
                self.player_name(ps.player_id).to_uppercase(),
            )
        });

        player_list
            .iter()
            .map(|ps| self.player_detail_one_player(ps))
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn player_detail_one_player(&self, player_stats: &PlayerStats) -> String {
        let player_name = self.player_name(player_stats.player_id);
        let team_name = self.team_name(Some(player_stats.team_id));
        let anchor = player_detail_link_id(&team_name, &player_name);
        let mut segments = vec![format!("<h2 id={anchor}>\n{player_name}, {team_name}\n</h2>")];
        segments.push(self.player_detail_table(player_stats));
        segments.join("\n")
    }

    fn player_detail_table(&self, player_stats: &PlayerStats) -> String {
        let omit_phase = self.omit_phase_col();
        let mut rows = vec![self.player_detail_table_header(omit_phase)];
        for line in &player_stats.matches {
            rows.push(self.player_detail_table_row(player_stats.player_id, line, omit_phase));
        }
        rows.push(self.player_detail_table_footer(player_stats, omit_phase));
        table_tag(&rows, Some("80%"))
    }

    fn player_detail_table_header(&self, omit_phase: bool) -> String {
        let mut cells = vec![header_cell_w("Round", false, "5%")];
        if !omit_phase {
            cells.push(header_cell_w("Stage", false, "15%"));
        }
        cells.push(header_cell("Opponent", false));
        cells.push(header_cell("", false)); // win/loss
        cells.push(header_cell("Score", false));
        cells.push(header_cell("GP", true));
        self.push_tossup_value_headers(&mut cells);
        cells.push(header_cell("TUH", true));
        cells.push(header_cell("Pts", true));
        tr_tag(&cells)
    }

    fn player_detail_table_row(
        &self,
        player_id: PlayerId,
        line: &MatchLine,
        omit_phase: bool,
    ) -> String {
        let rules = &self.tournament.scoring_rules;
        let Some(game) = self.match_of_line(line) else {
            return tr_tag(&[]);
        };
        let phase = self.phase_of_line(line);
        let mt = game.match_team(line.side);
        let opponent = game.opponent(line.side);
        let forfeit = game.is_forfeit();
        if mt.team_id.is_none() || opponent.team_id.is_none() {
            return tr_tag(&[]);
        }
        let mp = mt.match_players.iter().find(|mp| mp.player_id == player_id);

        let mut cells: Vec<String> = Vec::new();
        cells.push(text_cell(
            &phase
                .filter(|ph| ph.uses_numeric_rounds())
                .map(|_| line.round_number.to_string())
                .unwrap_or_default(),
        ));
        if !omit_phase {
            cells.push(text_cell(phase.map(|ph| ph.name.as_str()).unwrap_or("")));
        }
        cells.push(text_cell(
            &self.team_detail_link(opponent.team_id.unwrap_or(TeamId(0))),
        ));
        cells.push(text_cell(&game.result_display(line.side)));
        cells.push(text_cell(&scoreboard_match_link(
            game,
            &game.score_only(line.side),
        )));

        let heard = mp.and_then(|mp| mp.tossups_heard).unwrap_or(0);
        let games_played = game
            .tossups_read
            .filter(|read| *read > 0)
            .map(|read| f64::from(heard) / f64::from(read));
        cells.push(numeric_cell(
            &games_played
                .filter(|_| !forfeit)
                .map(|gp| format!("{gp:.1}"))
                .unwrap_or_default(),
        ));

        for at in &rules.answer_types {
            if forfeit {
                cells.push(numeric_cell(""));
                continue;
            }
            let n = mp.map(|mp| mp.answer_count(at.value)).unwrap_or(0);
            cells.push(numeric_cell(&n.to_string()));
        }

        let heard_str = heard.to_string();
        cells.push(numeric_cell(if forfeit { "" } else { heard_str.as_str() }));
        let points = mp.map(|mp| mp.points()).unwrap_or(0).to_string();
        cells.push(numeric_cell(if forfeit { "" } else { points.as_str() }));
        tr_tag(&cells)
    }

    fn player_detail_table_footer(&self, player_stats: &PlayerStats, omit_phase: bool) -> String {
        let rules = &self.tournament.scoring_rules;
        let mut cells = vec![text_cell("")]; // round
        if !omit_phase {
            cells.push(text_cell(""));
        }
        cells.push(header_cell("Total", false)); // underneath the opponent column
        cells.push(text_cell("")); // result
        cells.push(text_cell("")); // score
        cells.push(header_cell(&format!("{:.1}", player_stats.games_played), true));
        for at in &rules.answer_types {
            cells.push(header_cell(&player_stats.tossup_count(at.value).to_string(), true));
        }
        cells.push(header_cell(&player_stats.tossups_heard.to_string(), true));
        cells.push(header_cell(&player_stats.total_points().to_string(), true));
        table_footer(&cells)
    }

    // ---- round report -----------------------------------------------------

    fn round_report_html(&self) -> String {
        let Some(cumulative) = &self.tournament.cumulative_stats else {
            return String::new();
        };
        let omit_phase = self.omit_phase_col();
        let mut rows = vec![self.round_report_table_header(omit_phase)];
        for round_stats in &cumulative.rounds {
            rows.push(self.round_report_table_row(round_stats, omit_phase));
        }
        rows.push(
            self.round_report_table_footer(&cumulative.round_report_total_stats, omit_phase),
        );
        table_tag(&rows, Some("100%"))
    }

    fn round_report_table_header(&self, omit_phase: bool) -> String {
        let rules = &self.tournament.scoring_rules;
        let width = if omit_phase { "11%" } else { "10%" };
        let x = rules.regulation_tossup_count;
        let mut cells = vec![header_cell("Round", false)];
        if !omit_phase {
            cells.push(header_cell_w("Stage", false, "15%"));
        }
        cells.push(header_cell_w("Games", true, "10%"));
        cells.push(header_cell_w(&format!("Pts/Team/{x}TUH"), true, width));
        if rules.has_powers() {
            cells.push(header_cell_w("TU Powered", true, width));
        }
        cells.push(header_cell_w("TU Converted", true, width));
        if rules.has_negs() {
            cells.push(header_cell_w(&format!("Negs/Team/{x}TUH"), true, width));
        }
        if rules.use_bonuses {
            cells.push(header_cell_w("PPB", true, width));
        }
        if rules.bonuses_bounce_back {
            cells.push(header_cell_w("BB%", true, width));
            cells.push(header_cell_w("Bonus%", true, width));
        }
        tr_tag(&cells)
    }

    fn round_report_table_row(&self, stats: &RoundStats, omit_phase: bool) -> String {
        let rules = &self.tournament.scoring_rules;
        let phase = stats.phase_idx.and_then(|i| self.tournament.phases.get(i));
        let mut cells: Vec<String> = Vec::new();
        cells.push(text_cell(
            &phase
                .filter(|ph| ph.uses_numeric_rounds())
                .map(|_| scoreboard_round_link(stats.round_number, &stats.round_number.to_string()))
                .unwrap_or_default(),
        ));
        if !omit_phase {
            match phase {
                Some(ph) if !ph.uses_numeric_rounds() => {
                    let first_round = ph.rounds.first().map(|r| r.number).unwrap_or(0);
                    cells.push(text_cell(&scoreboard_round_link(first_round, &ph.name)));
                }
                Some(ph) => cells.push(text_cell(&ph.name)),
                None => cells.push(text_cell("")),
            }
        }
        cells.push(numeric_cell(&stats.games.to_string()));
        cells.push(numeric_cell(&fmt_opt(stats.points_per_x_tuh(rules), 1)));
        if rules.has_powers() {
            cells.push(numeric_cell(&fmt_opt_pct(stats.power_pct())));
        }
        cells.push(numeric_cell(&fmt_opt_pct(stats.tossup_conversion_pct())));
        if rules.has_negs() {
            cells.push(numeric_cell(&fmt_opt(stats.negs_per_x_tuh(rules), 1)));
        }
        if rules.use_bonuses {
            cells.push(numeric_cell(&fmt_opt(stats.points_per_bonus(), 2)));
        }
        if rules.bonuses_bounce_back {
            cells.push(numeric_cell(&fmt_opt_pct(stats.bounceback_conv_pct(rules))));
            cells.push(numeric_cell(&fmt_opt_pct(stats.total_bonus_conv_pct(rules))));
        }
        tr_tag(&cells)
    }

    fn round_report_table_footer(&self, totals: &RoundStats, omit_phase: bool) -> String {
        let rules = &self.tournament.scoring_rules;
        let mut cells = vec![header_cell("Total", false)];
        if !omit_phase {
            cells.push(header_cell("", false));
        }
        cells.push(header_cell(&totals.games.to_string(), true));
        cells.push(header_cell(&fmt_opt(totals.points_per_x_tuh(rules), 1), true));
        if rules.has_powers() {
            cells.push(header_cell(&fmt_opt_pct(totals.power_pct()), true));
        }
        cells.push(header_cell(&fmt_opt_pct(totals.tossup_conversion_pct()), true));
        if rules.has_negs() {
            cells.push(header_cell(&fmt_opt(totals.negs_per_x_tuh(rules), 1), true));
        }
        if rules.use_bonuses {
            cells.push(header_cell(&fmt_opt(totals.points_per_bonus(), 2), true));
        }
        if rules.bonuses_bounce_back {
            cells.push(header_cell(&fmt_opt_pct(totals.bounceback_conv_pct(rules)), true));
            cells.push(header_cell(&fmt_opt_pct(totals.total_bonus_conv_pct(rules)), true));
        }
        table_footer(&cells)
    }

    // ---- shared bits ------------------------------------------------------

    fn push_tossup_value_headers(&self, cells: &mut Vec<String>) {
        for at in &self.tournament.scoring_rules.answer_types {
            cells.push(header_cell(&at.value.to_string(), true));
        }
    }

    fn team_detail_link(&self, team_id: TeamId) -> String {
        let name = self.team_name(Some(team_id));
        a_tag(
            &format!("{TEAM_DETAIL_FILE}#{}", team_detail_link_id(&name)),
            &name,
        )
    }

    fn player_detail_link(&self, player_id: PlayerId, team_id: TeamId) -> String {
        let player_name = self.player_name(player_id);
        let team_name = self.team_name(Some(team_id));
        a_tag(
            &format!(
                "{PLAYER_DETAIL_FILE}#{}",
                player_detail_link_id(&team_name, &player_name)
            ),
            &player_name,
        )
    }
}

// ---- tag and string helpers ------------------------------------------------

fn a_tag(href: &str, contents: &str) -> String {
    format!("<a HREF={href}>{contents}</a>")
}

fn generic_tag(tag: &str, contents: &str) -> String {
    format!("<{tag}>\n{contents}\n</{tag}>")
}

fn table_tag(tr_tags: &[String], width: Option<&str>) -> String {
    let width_attr = match width {
        Some(w) if !w.is_empty() => format!("width={w}"),
        _ => String::new(),
    };
    format!("<table {width_attr}>\n{}\n</table>", tr_tags.join("\n"))
}

fn tr_tag(td_tags: &[String]) -> String {
    format!("<tr>\n{}\n</tr>", td_tags.join("\n"))
}

/// A row with the footer style: top border, no zebra stripe.
fn table_footer(td_tags: &[String]) -> String {
    format!("<tr class=pseudoTFoot>\n{}\n</tr>", td_tags.join("\n"))
}

fn td_tag(bold: bool, align_right: bool, width: &str, contents: &str) -> String {
    let align = if align_right { "align=\"right\"" } else { "" };
    let width_attr = if width.is_empty() {
        String::new()
    } else {
        format!("width=\"{width}\"")
    };
    let inner = if bold {
        format!("<b>{contents}</b>")
    } else {
        contents.to_string()
    };
    format!("<td {align} {width_attr}>{inner}</td>")
}

fn text_cell(contents: &str) -> String {
    td_tag(false, false, "", contents)
}

fn numeric_cell(contents: &str) -> String {
    td_tag(false, true, "", contents)
}

fn header_cell(contents: &str, right_align: bool) -> String {
    td_tag(true, right_align, "", contents)
}

fn header_cell_w(contents: &str, right_align: bool, width: &str) -> String {
    td_tag(true, right_align, width, contents)
}

fn header_with_divider(text: &str, no_top_link: bool) -> String {
    let header = generic_tag("h2", &format!("{text}{NBSP}"));
    let divider = "<div class=\"inlineDivider\">\n\n</div>".to_string();
    if no_top_link {
        return format!("<div class=\"headerAndDivider\">\n{header}\n{divider}\n</div>");
    }
    let top_link = a_tag(
        TOP_ANCHOR_ID,
        &format!("<span class=\"smallText\">{}Top</span>", unicode_html("2191")),
    );
    format!(
        "<div class=\"headerAndDivider\">\n{header}\n{divider}\n{}\n{top_link}\n</div>",
        generic_tag("span", NBSP)
    )
}

fn unordered_list(items: &[String]) -> String {
    let li_tags: Vec<String> = items.iter().map(|itm| generic_tag("li", itm)).collect();
    generic_tag("ul", &li_tags.join("\n"))
}

fn unicode_html(codepoint: &str) -> String {
    format!("&#x{codepoint};")
}

fn scoreboard_round_link(round_number: u32, text: &str) -> String {
    a_tag(
        &format!("{SCOREBOARD_FILE}#{}", round_link_id(round_number)),
        text,
    )
}

fn round_link_id(round_number: u32) -> String {
    format!("Round-{round_number}")
}

fn scoreboard_match_link(game: &Match, text: &str) -> String {
    a_tag(&format!("{SCOREBOARD_FILE}#{}", match_link_id(game)), text)
}

fn match_link_id(game: &Match) -> String {
    format!("Match-{}", game.id.0)
}

fn team_detail_link_id(team_name: &str) -> String {
    alpha_only(team_name)
}

fn player_detail_link_id(team_name: &str, player_name: &str) -> String {
    format!("{}-{}", alpha_only(team_name), alpha_only(player_name))
}

fn alpha_only(s: &str) -> String {
    s.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Format an optional ratio, rendering the absent state as a dash.
fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => M_DASH.into(),
    }
}

fn fmt_opt_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.0}%"),
        None => M_DASH.into(),
    }
}

/// The links at the top of every page of the report.
fn top_links() -> String {
    let pages = [
        (STANDINGS_FILE, "Standings"),
        (INDIVIDUALS_FILE, "Individuals"),
        (SCOREBOARD_FILE, "Scoreboard"),
        (TEAM_DETAIL_FILE, "Team Detail"),
        (PLAYER_DETAIL_FILE, "Player Detail"),
        (ROUND_REPORT_FILE, "Round Report"),
    ];
    let cells: Vec<String> = pages
        .iter()
        .map(|(file, title)| text_cell(&a_tag(file, title)))
        .collect();
    format!("<table border=0 width=100%>\n{}\n</table>", tr_tag(&cells))
}

fn page_style() -> String {
    generic_tag(
        "style",
        "BODY{ font-family: Roboto, sans-serif; }\n\
         table{ font-size: 11pt; border-spacing: 0; border-collapse: collapse; }\n\
         td{ padding: 5px; }\n\
         tr:nth-child(even){ background-color: #f2f2f2; }\n\
         ul{ margin: 0; }\n\
         .headerAndDivider{ display: flex; flex-direction: row; margin: 18 0; }\n\
         .headerAndDivider h2{ margin: 0; }\n\
         .inlineDivider{ flex-grow: 1; height: 1px; background-color: #9f9f9f; align-self: center; }\n\
         .smallText{ font-size: 10pt; }\n\
         .boxScoreTable{ display: flex; gap: 15px; align-items: flex-start; }\n\
         .pseudoTFoot{ border-top: 1px solid #909090; background-color: #ffffff !important; }\n\
         .floatingTOC{ top: 45px; position: sticky; float: right; margin-top: 5px; margin-right: 10px; \
         padding-right: 5px; background-color: #cccccc; box-shadow: 4px 4px 7px #999999; line-height: 1.5; }\n\
         .floatingTOC ul{ list-style-type: none; padding-inline-start: 20px; font-size: 11pt; }",
    )
}
