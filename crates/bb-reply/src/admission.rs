//! Admission-chance verdicts: score minus cutoff, bucketed.

use crate::cutoff::not_offered;
use crate::templates::{
    footer, out_of_range_note, pick, score_cell, signed, table_header, table_row, CHANCE_ENDINGS,
};
use bb_core::{Branch, Campus, Dataset};
use rand::Rng;

/// Ordinal verdict, best first. `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Chance {
    Excellent,
    VeryGood,
    Good,
    Borderline,
    Risky,
    Difficult,
    ExtremelyDifficult,
}

/// Lower margin bound of each bucket. Anything below the last is `ExtremelyDifficult`.
const BUCKETS: [(i32, Chance); 6] = [
    (15, Chance::Excellent),
    (8, Chance::VeryGood),
    (3, Chance::Good),
    (0, Chance::Borderline),
    (-5, Chance::Risky),
    (-15, Chance::Difficult),
];

impl Chance {
    pub fn from_margin(margin: i32) -> Self {
        BUCKETS
            .iter()
            .find(|(min, _)| margin >= *min)
            .map(|(_, chance)| *chance)
            .unwrap_or(Chance::ExtremelyDifficult)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Chance::Excellent => "🟢 Excellent",
            Chance::VeryGood => "🟢 Very Good",
            Chance::Good => "🟡 Good",
            Chance::Borderline => "🟡 Borderline",
            Chance::Risky => "🟠 Risky",
            Chance::Difficult => "🔴 Difficult",
            Chance::ExtremelyDifficult => "💀 Extremely Difficult",
        }
    }
}

pub fn margin(score: u16, cutoff: u16) -> i32 {
    i32::from(score) - i32::from(cutoff)
}

/// `short by 17` or `+9 safe`.
pub fn margin_text(margin: i32) -> String {
    if margin < 0 {
        format!("short by {}", -margin)
    } else {
        format!("{} safe", signed(margin))
    }
}

/// (campus, branch, cutoff) rows the verdict covers.
fn targets(branch: Option<Branch>, campus: Option<Campus>, data: &Dataset) -> Vec<(Campus, Branch, u16)> {
    match (branch, campus) {
        (Some(b), Some(c)) => data.cutoff(c, b).map(|s| vec![(c, b, s)]).unwrap_or_default(),
        (Some(b), None) => data.campuses_for(b).into_iter().map(|(c, s)| (c, b, s)).collect(),
        (None, Some(c)) => data.branches_at(c).into_iter().map(|(b, s)| (c, b, s)).collect(),
        (None, None) => data.ranked(),
    }
}

fn intro<R: Rng + ?Sized>(rng: &mut R, name: &str, score: u16) -> String {
    let templates = [
        format!("Arre {name}, {score} and asking about chances? Let's do the math"),
        format!("Yo {name}! {score} marks ka reality check coming up"),
        format!("Dekh {name}, {score} vs the cutoffs - no sugarcoating"),
        format!("Bhai {name}, with {score} here's where you actually stand"),
    ];
    let idx = rng.gen_range(0..templates.len());
    templates[idx].clone()
}

pub fn admission_reply<R: Rng + ?Sized>(
    name: &str,
    branch: Option<Branch>,
    campus: Option<Campus>,
    score: Option<u16>,
    data: &Dataset,
    rng: &mut R,
) -> String {
    let Some(score) = score else {
        return format!(
            "Arre {name}, chances of *what* score? Drop your BITSAT score, e.g. `!chance cse 300` 😅\n"
        );
    };

    let mut out = intro(rng, name, score);
    out += ":\n\n";
    if let Some(note) = out_of_range_note(score) {
        out += &note;
    }

    if let (Some(b), Some(c)) = (branch, campus) {
        if !data.is_offered(c, b) {
            out += &not_offered(b, c, data);
            out += &footer();
            return out;
        }
    }

    let mut rows = targets(branch, campus, data);
    let scoped = branch.is_some() || campus.is_some();
    if !scoped {
        // Without a branch or campus, list what the score clears plus the nearest misses.
        rows.retain(|(_, _, cutoff)| margin(score, *cutoff) >= -15);
        rows.truncate(12);
    }

    if rows.is_empty() {
        out += &format!("Nothing within reach at {score} yet. Cutoffs start at {}.\n", lowest(data));
    } else {
        out += &table_header(&["Branch", "Campus", "Cutoff", "Margin", "Chance"]);
        for (c, b, cutoff) in &rows {
            let m = margin(score, *cutoff);
            out += &table_row(&[
                b.label().to_string(),
                c.name().to_string(),
                score_cell(Some(*cutoff)),
                margin_text(m),
                Chance::from_margin(m).label().to_string(),
            ]);
        }
        if let Some((c, b, cutoff)) = rows.iter().max_by_key(|(_, _, cutoff)| margin(score, *cutoff)) {
            let m = margin(score, *cutoff);
            out += &format!(
                "\n**Best shot:** {} at {} ({})\n",
                b.label(),
                c.name(),
                margin_text(m)
            );
        }
    }

    out += &format!("\n*Based on {} cutoffs; next year's can move either way.*\n", bb_core::SNAPSHOT_YEAR);
    out += &format!("\n{}\n", pick(rng, CHANCE_ENDINGS));
    out += &footer();
    out
}

fn lowest(data: &Dataset) -> String {
    data.ranked()
        .last()
        .map(|(_, _, s)| score_cell(Some(*s)))
        .unwrap_or_else(|| "-".to_string())
}
