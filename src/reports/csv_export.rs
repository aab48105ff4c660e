//! CSV export of the standings and individuals tables, for spreadsheets.
//!
//! Writers run over in-memory buffers; persisting the result is the
//! caller's job.

use crate::models::Tournament;
use csv::Writer;

/// The cumulative standings table as CSV. Empty (header only) until stats
/// have been compiled.
pub fn standings_csv(tournament: &Tournament) -> Result<String, csv::Error> {
    let rules = &tournament.scoring_rules;
    let mut wtr = Writer::from_writer(Vec::new());

    let mut header = vec![
        "Rank".to_string(),
        "Team".to_string(),
        "W".to_string(),
        "L".to_string(),
        "T".to_string(),
        "Pct".to_string(),
        format!("PP{}TUH", rules.regulation_tossup_count),
    ];
    for at in &rules.answer_types {
        header.push(at.value.to_string());
    }
    header.push("TUH".to_string());
    if rules.use_bonuses {
        header.push("PPB".to_string());
    }
    if rules.bonuses_bounce_back {
        header.push("BB%".to_string());
    }
    wtr.write_record(&header)?;

    if let Some(stats) = &tournament.cumulative_stats {
        for ts in &stats.team_stats {
            let name = tournament
                .find_team(ts.team_id)
                .map(|t| t.name.clone())
                .unwrap_or_default();
            let mut record = vec![
                ts.rank_string(),
                name,
                ts.wins.to_string(),
                ts.losses.to_string(),
                ts.ties.to_string(),
                fmt_opt(ts.win_pct(), 3),
                fmt_opt(
                    ts.pts_per_reg_tuh()
                        .map(|r| r * f64::from(rules.regulation_tossup_count)),
                    1,
                ),
            ];
            for at in &rules.answer_types {
                record.push(ts.tossup_count(at.value).to_string());
            }
            record.push(ts.tuh_regulation.to_string());
            if rules.use_bonuses {
                record.push(fmt_opt(ts.pts_per_bonus(), 2));
            }
            if rules.bonuses_bounce_back {
                record.push(fmt_opt(ts.bounceback_conv_pct(rules), 1));
            }
            wtr.write_record(&record)?;
        }
    }

    into_string(wtr)
}

/// The cumulative individuals table as CSV.
pub fn individuals_csv(tournament: &Tournament) -> Result<String, csv::Error> {
    let rules = &tournament.scoring_rules;
    let mut wtr = Writer::from_writer(Vec::new());

    let mut header = vec![
        "Rank".to_string(),
        "Player".to_string(),
        "Team".to_string(),
        "GP".to_string(),
    ];
    for at in &rules.answer_types {
        header.push(at.value.to_string());
    }
    header.push("TUH".to_string());
    header.push(format!("PP{}TUH", rules.regulation_tossup_count));
    wtr.write_record(&header)?;

    if let Some(stats) = &tournament.cumulative_stats {
        for ps in &stats.players {
            if ps.tossups_heard == 0 {
                continue;
            }
            let player_name = tournament
                .find_player(ps.player_id)
                .map(|p| p.name.clone())
                .unwrap_or_default();
            let team_name = tournament
                .find_team(ps.team_id)
                .map(|t| t.name.clone())
                .unwrap_or_default();
            let mut record = vec![
                ps.rank_string(),
                player_name,
                team_name,
                format!("{:.1}", ps.games_played),
            ];
            for at in &rules.answer_types {
                record.push(ps.tossup_count(at.value).to_string());
            }
            record.push(ps.tossups_heard.to_string());
            record.push(fmt_opt(
                ps.pptuh()
                    .map(|r| r * f64::from(rules.regulation_tossup_count)),
                2,
            ));
            wtr.write_record(&record)?;
        }
    }

    into_string(wtr)
}

fn into_string(wtr: Writer<Vec<u8>>) -> Result<String, csv::Error> {
    let buf = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "--".into(),
    }
}
