//! Cutoff tables at four levels of specificity.

use crate::templates::{footer, pick, score_cell, table_header, table_row, CUTOFF_ENDINGS};
use bb_core::{Branch, Campus, Dataset, ProgramType, SNAPSHOT_YEAR};
use rand::Rng;

fn intro<R: Rng + ?Sized>(
    rng: &mut R,
    name: &str,
    branch: Option<Branch>,
    campus: Option<Campus>,
) -> String {
    let templates: [String; 4] = match (branch, campus) {
        (Some(b), Some(c)) => {
            let (b, c) = (b.label(), c.name().to_uppercase());
            [
                format!("Arre {name}, {b} at {c}? Time for some brutal honesty"),
                format!("Yo {name}! {b} {c} cutoff? Prepare for emotional damage"),
                format!("Dekh {name}, {c} {b} ka scene - reality check incoming"),
                format!("Bhai {name}, {b} for {c}? Here's your dose of harsh truth"),
            ]
        }
        (Some(b), None) => {
            let b = b.label();
            [
                format!("Arre {name}, {b} cutoffs? Time to crush some dreams across campuses"),
                format!("Yo {name}! {b} ka complete destruction across all campuses"),
                format!("Dekh {name}, {b} cutoffs - campus wise reality slap"),
                format!("Bhai {name}, {b} ke liye sabhi campus ka brutal data"),
            ]
        }
        (None, Some(c)) => {
            let c = c.name().to_uppercase();
            [
                format!("Arre {name}, {c} campus? Prepare for complete emotional devastation"),
                format!("Yo {name}! {c} campus - all branches reality check"),
                format!("Dekh {name}, {c} ka complete cutoff massacre"),
                format!("Bhai {name}, {c} campus cutoffs - full destruction mode"),
            ]
        }
        (None, None) => [
            format!("Arre {name}, complete BITSAT cutoff data? RIP your mental peace"),
            format!("Yo {name}! Full cutoff breakdown? Time for existential crisis"),
            format!("Dekh {name}, complete BITSAT cutoff apocalypse incoming"),
            format!("Bhai {name}, comprehensive cutoff data - prepare for trauma"),
        ],
    };
    let idx = rng.gen_range(0..templates.len());
    templates[idx].clone()
}

/// Explicit message for a program a campus does not run, with where it does run.
pub fn not_offered(branch: Branch, campus: Campus, data: &Dataset) -> String {
    let mut out = format!(
        "**{}** is not offered at **{}** campus.",
        branch.label(),
        campus.name()
    );
    let elsewhere = data.campuses_for(branch);
    if !elsewhere.is_empty() {
        let list: Vec<String> = elsewhere
            .iter()
            .map(|(c, s)| format!("{} ({})", c.name(), score_cell(Some(*s))))
            .collect();
        out += &format!(" Available at: {}.", list.join(", "));
    }
    out.push('\n');
    out
}

/// Placement block for a branch, empty when there is no data.
pub fn placement_lines(branch: Branch, data: &Dataset) -> String {
    match data.placement(branch) {
        Some(p) => format!(
            "\n💼 **{} placements:** avg {:.1} LPA, median {:.1} LPA, highest {:.1} LPA\n*Top recruiters: {}*\n",
            branch.label(),
            p.average_lpa,
            p.median_lpa,
            p.highest_lpa,
            p.recruiters
        ),
        None => String::new(),
    }
}

fn single(branch: Branch, campus: Campus, data: &Dataset) -> String {
    let mut out = format!("{}\n\n", campus.heading());
    out += &table_header(&["Branch", "Campus", "Cutoff"]);
    match data.cutoff(campus, branch) {
        Some(score) => {
            out += &table_row(&[
                branch.label().to_string(),
                campus.name().to_string(),
                score_cell(Some(score)),
            ]);
            out += &format!("\n*{} - {} cutoff specifically*\n", campus.flavor(), branch.label());
        }
        None => {
            out += &table_row(&[
                branch.label().to_string(),
                campus.name().to_string(),
                "not offered".to_string(),
            ]);
            out.push('\n');
            out += &not_offered(branch, campus, data);
        }
    }
    out
}

fn across_campuses(branch: Branch, data: &Dataset) -> String {
    let mut out = format!("**{} CUTOFFS ACROSS CAMPUSES:**\n\n", branch.label());
    out += &table_header(&["Campus", "Cutoff"]);
    for campus in Campus::ALL {
        out += &table_row(&[campus.name().to_string(), score_cell(data.cutoff(campus, branch))]);
    }
    out
}

fn campus_table(campus: Campus, data: &Dataset) -> String {
    let mut out = format!("{}\n*{}*\n", campus.heading(), campus.flavor());
    for program in ProgramType::ALL {
        out += &format!("\n{}\n\n", program.heading());
        out += &table_header(&["Branch", "Cutoff"]);
        for branch in Branch::ALL.iter().filter(|b| b.program_type() == program) {
            out += &table_row(&[branch.label().to_string(), score_cell(data.cutoff(campus, *branch))]);
        }
    }
    out
}

fn full_matrix(data: &Dataset) -> String {
    let mut out = format!("**🎯 BITSAT {SNAPSHOT_YEAR} COMPLETE CUTOFFS:**\n\n");
    let mut columns = vec!["Branch"];
    columns.extend(Campus::ALL.iter().map(|c| c.name()));
    out += &table_header(&columns);
    for branch in Branch::ALL {
        if data.campuses_for(branch).is_empty() {
            continue;
        }
        let mut cells = vec![branch.label().to_string()];
        cells.extend(Campus::ALL.iter().map(|c| score_cell(data.cutoff(*c, branch))));
        out += &table_row(&cells);
    }
    out
}

/// Cutoff reply. The table shape follows whichever of branch and campus is known.
pub fn cutoff_reply<R: Rng + ?Sized>(
    name: &str,
    branch: Option<Branch>,
    campus: Option<Campus>,
    data: &Dataset,
    rng: &mut R,
) -> String {
    let mut out = intro(rng, name, branch, campus);
    out += ":\n\n";
    out += &match (branch, campus) {
        (Some(b), Some(c)) => single(b, c, data),
        (Some(b), None) => across_campuses(b, data),
        (None, Some(c)) => campus_table(c, data),
        (None, None) => full_matrix(data),
    };
    if let Some(b) = branch {
        out += &placement_lines(b, data);
    }
    out += &format!("\n{}\n", pick(rng, CUTOFF_ENDINGS));
    out += &footer();
    out
}
