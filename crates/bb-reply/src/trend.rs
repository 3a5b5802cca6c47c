use crate::cutoff::not_offered;
use crate::templates::{footer, pick, score_cell, signed, table_header, table_row, TREND_ENDINGS};
use bb_core::{Branch, Campus, Dataset, Prediction, PredictionMethod, TrendSeries, TREND_YEARS};
use rand::Rng;

/// Rows shown in the overview when neither branch nor campus is known.
const OVERVIEW_ROWS: usize = 10;

pub fn prediction_line(prediction: Option<Prediction>) -> String {
    match prediction {
        Some(p) => {
            let how = match p.method {
                PredictionMethod::LastDelta => "last score + last yearly change",
                PredictionMethod::AverageSlope => "last score + average yearly change",
            };
            format!(
                "🔮 **{} estimate: ~{}** *(heuristic estimate: {how}; not a statistical forecast)*\n",
                p.year, p.score
            )
        }
        None => "🔮 Not enough history for an estimate.\n".to_string(),
    }
}

/// Year-descending table with deltas, followed by the estimate.
pub fn series_table(series: &TrendSeries) -> String {
    let mut out = table_header(&["Year", "Cutoff", "Change"]);
    for point in series.year_points().iter().rev() {
        out += &table_row(&[
            point.year.to_string(),
            score_cell(Some(point.score)),
            point.delta.map(signed).unwrap_or_else(|| "-".to_string()),
        ]);
    }
    out.push('\n');
    out += &prediction_line(series.predict_next());
    out
}

fn overview(rows: &[(Campus, Branch)], data: &Dataset) -> String {
    let mut columns = vec!["Program".to_string()];
    columns.extend(TREND_YEARS.iter().rev().map(|y| y.to_string()));
    columns.push("Est.".to_string());
    let columns: Vec<&str> = columns.iter().map(String::as_str).collect();

    let mut out = table_header(&columns);
    for (campus, branch) in rows {
        let Some(series) = data.trend(*branch, *campus) else { continue };
        let mut cells = vec![format!("{} @ {}", branch.label(), campus.name())];
        let points = series.year_points();
        for year in TREND_YEARS.iter().rev() {
            let score = points.iter().find(|p| p.year == *year).map(|p| p.score);
            cells.push(score_cell(score));
        }
        cells.push(
            series
                .predict_next()
                .map(|p| format!("~{}", p.score))
                .unwrap_or_else(|| "-".to_string()),
        );
        out += &table_row(&cells);
    }
    out
}

pub fn trend_reply<R: Rng + ?Sized>(
    name: &str,
    branch: Option<Branch>,
    campus: Option<Campus>,
    data: &Dataset,
    rng: &mut R,
) -> String {
    let intros = [
        format!("Arre {name}, trend dekhna hai? Cutoffs have been climbing like your screen time"),
        format!("Yo {name}! Time travel through BITSAT cutoffs, trauma included"),
        format!("Dekh {name}, history lesson incoming - the painful kind"),
    ];
    let mut out = intros[rng.gen_range(0..intros.len())].clone();
    out += ":\n\n";

    match (branch, campus) {
        (Some(b), Some(c)) => match data.trend(b, c) {
            Some(series) => {
                out += &format!("📈 **{} @ {}**\n\n", b.label(), c.name());
                out += &series_table(series);
            }
            None => out += &not_offered(b, c, data),
        },
        (Some(b), None) => {
            for (c, _) in data.campuses_for(b) {
                if let Some(series) = data.trend(b, c) {
                    out += &format!("📈 **{} @ {}**\n\n", b.label(), c.name());
                    out += &series_table(series);
                    out.push('\n');
                }
            }
        }
        (None, Some(c)) => {
            out += &format!("{}\n\n", c.heading());
            let rows: Vec<(Campus, Branch)> = data.branches_at(c).into_iter().map(|(b, _)| (c, b)).collect();
            out += &overview(&rows, data);
        }
        (None, None) => {
            out += "**Top programs, year by year:**\n\n";
            let rows: Vec<(Campus, Branch)> = data
                .ranked()
                .into_iter()
                .take(OVERVIEW_ROWS)
                .map(|(c, b, _)| (c, b))
                .collect();
            out += &overview(&rows, data);
        }
    }

    out += &format!("\n{}\n", pick(rng, TREND_ENDINGS));
    out += &footer();
    out
}
