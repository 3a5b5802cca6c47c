use crate::admission::{margin, margin_text};
use crate::templates::{
    footer, out_of_range_note, pick, score_cell, table_header, table_row, SUGGESTION_ENDINGS,
};
use bb_core::{Branch, Campus, Dataset};
use rand::Rng;

use Branch::*;
use Campus::*;

/// Score band with its curated picks.
pub struct Tier {
    pub min: u16,
    pub title: &'static str,
    pub options: &'static [(Branch, Campus)],
    pub advice: &'static str,
}

/// Highest band first; the last band catches everything.
pub const TIERS: &[Tier] = &[
    Tier {
        min: 330,
        title: "Topper zone 👑",
        options: &[(Cse, Pilani), (Mnc, Pilani), (Ece, Pilani)],
        advice: "Anything you want. Pick CSE Pilani and never look back.",
    },
    Tier {
        min: 315,
        title: "Elite tier 🔥",
        options: &[(Mnc, Pilani), (Ece, Pilani), (Cse, Goa), (Cse, Hyderabad)],
        advice: "Pilani circuit branches or CSE at Goa/Hyd. Branch vs campus is your call.",
    },
    Tier {
        min: 300,
        title: "Strong position 💪",
        options: &[(Cse, Goa), (Mnc, Goa), (Cse, Hyderabad), (Eee, Pilani)],
        advice: "CSE at Goa is tight, Hyd CSE and MnC are realistic. Keep Pilani EEE as a flex.",
    },
    Tier {
        min: 285,
        title: "Solid options 🎯",
        options: &[(Ece, Goa), (Mnc, Hyderabad), (Eee, Pilani), (Instrumentation, Pilani)],
        advice: "Circuit branches are in play. Coding-heavy MnC at Hyd is a sleeper pick.",
    },
    Tier {
        min: 270,
        title: "Decent spot 🙂",
        options: &[(Eee, Goa), (Eee, Hyderabad), (Instrumentation, Goa), (Economics, Pilani)],
        advice: "EEE/ENI at Goa or Hyd, or MSc Eco Pilani for the dual-degree route.",
    },
    Tier {
        min: 255,
        title: "Fighting chance ⚔️",
        options: &[(Mechanical, Pilani), (Economics, Goa), (Economics, Hyderabad), (MscMathematics, Pilani)],
        advice: "Core branches or an MSc with a shot at a second-year dual degree.",
    },
    Tier {
        min: 230,
        title: "Scraping through 😬",
        options: &[(Chemical, Pilani), (Civil, Pilani), (Manufacturing, Pilani), (Physics, Goa), (Biology, Hyderabad)],
        advice: "Core engineering or MSc programs. A BITS tag is still a BITS tag.",
    },
    Tier {
        min: 0,
        title: "Rough waters 🌊",
        options: &[(Pharmacy, Pilani), (Pharmacy, Hyderabad)],
        advice: "B.Pharm is open. Otherwise think about iteration 2, other exams, or a drop year.",
    },
];

pub fn tier_for(score: u16) -> &'static Tier {
    TIERS
        .iter()
        .find(|t| score >= t.min)
        .unwrap_or(&TIERS[TIERS.len() - 1])
}

/// Dataset programs the score clears, highest cutoff first.
pub fn clearable(
    score: u16,
    branch: Option<Branch>,
    campus: Option<Campus>,
    data: &Dataset,
    limit: usize,
) -> Vec<(Campus, Branch, u16)> {
    data.ranked()
        .into_iter()
        .filter(|(c, b, cutoff)| {
            *cutoff <= score && campus.map_or(true, |x| x == *c) && branch.map_or(true, |x| x == *b)
        })
        .take(limit)
        .collect()
}

pub fn suggestion_reply<R: Rng + ?Sized>(
    name: &str,
    branch: Option<Branch>,
    campus: Option<Campus>,
    score: Option<u16>,
    data: &Dataset,
    rng: &mut R,
) -> String {
    let Some(score) = score else {
        return format!(
            "Arre {name}, suggestions need a score, yaar. Drop it like `!suggest 285` and I'll tell you what's realistic 🎯\n"
        );
    };

    let tier = tier_for(score);
    let mut out = format!("Dekh {name}, {score} marks - **{}**\n\n", tier.title);
    if let Some(note) = out_of_range_note(score) {
        out += &note;
    }

    out += "**Recommended options:**\n\n";
    out += &table_header(&["Branch", "Campus", "Cutoff", "Margin"]);
    for (b, c) in tier.options {
        let cutoff = data.cutoff(*c, *b);
        out += &table_row(&[
            b.label().to_string(),
            c.name().to_string(),
            score_cell(cutoff),
            cutoff.map(|x| margin_text(margin(score, x))).unwrap_or_else(|| "-".to_string()),
        ]);
    }
    out += &format!("\n💡 {}\n", tier.advice);

    let reachable = clearable(score, branch, campus, data, 6);
    if reachable.is_empty() {
        if branch.is_some() || campus.is_some() {
            out += "\nNothing you named clears at this score on last year's numbers.\n";
        }
    } else {
        out += "\n**Cleared on last year's cutoffs:**\n";
        for (c, b, cutoff) in reachable {
            out += &format!("• {} @ {}: {} ({})\n", b.label(), c.name(), score_cell(Some(cutoff)), margin_text(margin(score, cutoff)));
        }
    }

    out += &format!("\n{}\n", pick(rng, SUGGESTION_ENDINGS));
    out += &footer();
    out
}
