//! Side-by-side comparison of two branches, two campuses, or two pairs.

use crate::cutoff::cutoff_reply;
use crate::templates::{footer, pick, score_cell, table_header, table_row, COMPARE_ENDINGS};
use bb_core::{Branch, Campus, Dataset, PlacementStat};
use bb_router::Side;
use rand::Rng;

const NO_DATA: &str = "no data";

pub fn side_label(side: &Side) -> String {
    match (side.branch, side.campus) {
        (Some(b), Some(c)) => format!("{} @ {}", b.label(), c.name()),
        (Some(b), None) => b.label().to_string(),
        (None, Some(c)) => c.name().to_string(),
        (None, None) => "?".to_string(),
    }
}

/// The cutoff a side is judged by: its own campus, else its highest campus.
fn headline_cutoff(side: &Side, data: &Dataset) -> Option<(Campus, u16)> {
    let branch = side.branch?;
    match side.campus {
        Some(c) => data.cutoff(c, branch).map(|s| (c, s)),
        None => data.campuses_for(branch).into_iter().max_by_key(|(_, s)| *s),
    }
}

fn placement<'a>(side: &Side, data: &'a Dataset) -> Option<&'a PlacementStat> {
    side.branch.and_then(|b| data.placement(b))
}

fn lpa(value: Option<f32>) -> String {
    value.map(|v| format!("{v:.1} LPA")).unwrap_or_else(|| NO_DATA.to_string())
}

fn cutoff_rows(a: &Side, b: &Side, data: &Dataset) -> String {
    let cell = |side: &Side, campus: Campus| match side.branch {
        Some(branch) if side.campus.is_none() || side.campus == Some(campus) => {
            match data.cutoff(campus, branch) {
                Some(s) => score_cell(Some(s)),
                None => "not offered".to_string(),
            }
        }
        _ => "-".to_string(),
    };

    let mut out = String::new();
    if let (Some(ca), Some(cb)) = (a.campus, b.campus) {
        out += &table_row(&["Cutoff".to_string(), cell(a, ca), cell(b, cb)]);
    } else {
        for campus in Campus::ALL {
            out += &table_row(&[format!("Cutoff ({})", campus.name()), cell(a, campus), cell(b, campus)]);
        }
    }
    out
}

fn placement_rows(a: &Side, b: &Side, data: &Dataset) -> String {
    let (pa, pb) = (placement(a, data), placement(b, data));
    let mut out = String::new();
    out += &table_row(&[
        "Avg package".to_string(),
        lpa(pa.map(|p| p.average_lpa)),
        lpa(pb.map(|p| p.average_lpa)),
    ]);
    out += &table_row(&[
        "Median package".to_string(),
        lpa(pa.map(|p| p.median_lpa)),
        lpa(pb.map(|p| p.median_lpa)),
    ]);
    out += &table_row(&[
        "Highest package".to_string(),
        lpa(pa.map(|p| p.highest_lpa)),
        lpa(pb.map(|p| p.highest_lpa)),
    ]);
    out += &table_row(&[
        "Top recruiters".to_string(),
        pa.map(|p| p.recruiters.clone()).unwrap_or_else(|| NO_DATA.to_string()),
        pb.map(|p| p.recruiters.clone()).unwrap_or_else(|| NO_DATA.to_string()),
    ]);
    out
}

fn summary(a: &Side, b: &Side, data: &Dataset) -> String {
    let (la, lb) = (side_label(a), side_label(b));
    let mut out = String::new();

    match (headline_cutoff(a, data), headline_cutoff(b, data)) {
        (Some((_, sa)), Some((_, sb))) if sa == sb => {
            out += &format!("• Same cutoff for both: {}\n", score_cell(Some(sa)));
        }
        (Some((_, sa)), Some((_, sb))) => {
            let (hi, lo, d) = if sa > sb { (&la, &lb, sa - sb) } else { (&lb, &la, sb - sa) };
            out += &format!("• **{hi}** needs **{d}** more marks than **{lo}** ({sa} vs {sb})\n");
        }
        (None, _) if a.branch.is_some() => {
            out += &format!("• **{la}** is not offered there, so no cutoff verdict\n");
        }
        (_, None) if b.branch.is_some() => {
            out += &format!("• **{lb}** is not offered there, so no cutoff verdict\n");
        }
        _ => {}
    }

    match (placement(a, data), placement(b, data)) {
        (Some(pa), Some(pb)) if a.branch == b.branch => {
            out += &format!(
                "• Same branch, same placement pool ({:.1} LPA avg); campus vibe decides\n",
                pa.average_lpa.max(pb.average_lpa)
            );
        }
        (Some(pa), Some(pb)) => {
            let (hi, d) = if pa.average_lpa >= pb.average_lpa {
                (&la, pa.average_lpa - pb.average_lpa)
            } else {
                (&lb, pb.average_lpa - pa.average_lpa)
            };
            out += &format!("• **{hi}** has the higher average package by **{d:.1} LPA**\n");
        }
        _ => {
            out += "• Placement data missing for at least one side, no package verdict\n";
        }
    }
    out
}

/// Campus vs campus with no branch: every branch either campus runs.
fn campus_vs_campus(a: Campus, b: Campus, data: &Dataset) -> String {
    let mut out = table_header(&["Branch", a.name(), b.name()]);
    let mut a_higher = 0;
    let mut b_higher = 0;
    for branch in Branch::ALL {
        let (sa, sb) = (data.cutoff(a, branch), data.cutoff(b, branch));
        if sa.is_none() && sb.is_none() {
            continue;
        }
        if let (Some(x), Some(y)) = (sa, sb) {
            if x > y {
                a_higher += 1;
            } else if y > x {
                b_higher += 1;
            }
        }
        out += &table_row(&[branch.label().to_string(), score_cell(sa), score_cell(sb)]);
    }
    out += &format!(
        "\n• {} has the higher cutoff in {a_higher} branches, {} in {b_higher}\n",
        a.name(),
        b.name()
    );
    out += "• Placement figures are per branch, name one for package numbers\n";
    out
}

pub fn comparison_reply<R: Rng + ?Sized>(
    name: &str,
    sides: Option<(Side, Side)>,
    data: &Dataset,
    rng: &mut R,
) -> String {
    let Some((a, b)) = sides else {
        return cutoff_reply(name, None, None, data, rng);
    };

    let intros = [
        format!("Arre {name}, {} vs {}? Let the numbers fight it out", side_label(&a), side_label(&b)),
        format!("Yo {name}! {} or {} - classic dilemma, here's the data", side_label(&a), side_label(&b)),
        format!("Dekh {name}, {} aur {} ka face-off", side_label(&a), side_label(&b)),
    ];
    let mut out = intros[rng.gen_range(0..intros.len())].clone();
    out += ":\n\n";

    match (a.branch, b.branch, a.campus, b.campus) {
        (None, None, Some(ca), Some(cb)) => out += &campus_vs_campus(ca, cb, data),
        _ => {
            let (la, lb) = (side_label(&a), side_label(&b));
            out += &table_header(&["", la.as_str(), lb.as_str()]);
            out += &cutoff_rows(&a, &b, data);
            out += &placement_rows(&a, &b, data);
            out.push('\n');
            out += &summary(&a, &b, data);
        }
    }

    out += &format!("\n{}\n", pick(rng, COMPARE_ENDINGS));
    out += &footer();
    out
}
