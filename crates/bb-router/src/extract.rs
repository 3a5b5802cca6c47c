//! Entity extraction: campus, branch, score and comparison sides.
//!
//! All functions take the normalized, lower-cased comment except
//! [`extract_score`], which scans the raw text.

use crate::types::{BranchMention, CampusMention, Side};
use bb_core::{Branch, Campus};
use bb_text::{find_alias_all, first_score, token_index_at, tokenize};

/// `msc`, `m.sc` or the split form `m sc`.
pub fn has_msc_marker(lower: &str) -> bool {
    let tokens = tokenize(lower);
    tokens.iter().any(|t| t == "msc" || t == "m.sc")
        || tokens.windows(2).any(|w| w[0] == "m" && w[1] == "sc")
}

/// Every branch alias hit, overlapping hits included, in branch declaration
/// order then alias order then text order.
pub fn branch_hits(lower: &str) -> Vec<BranchMention> {
    let mut hits = Vec::new();
    for branch in Branch::ALL {
        for alias in branch.aliases() {
            for pos in find_alias_all(lower, alias) {
                hits.push(BranchMention { branch, alias: *alias, pos });
            }
        }
    }
    hits
}

fn campus_hits(lower: &str) -> Vec<CampusMention> {
    let mut hits = Vec::new();
    for campus in Campus::ALL {
        for alias in campus.aliases() {
            for pos in find_alias_all(lower, alias) {
                hits.push(CampusMention { campus, alias: *alias, pos });
            }
        }
    }
    hits
}

/// First-encountered hit among those with the longest alias.
fn longest<'a>(hits: impl Iterator<Item = &'a BranchMention>) -> Option<&'a BranchMention> {
    hits.fold(None, |best: Option<&BranchMention>, m| match best {
        Some(b) if b.alias.len() >= m.alias.len() => Some(b),
        _ => Some(m),
    })
}

/// Keep the longest spans, drop anything overlapping them, return in text order.
fn non_overlapping<T: Copy>(mut hits: Vec<T>, span: impl Fn(&T) -> (usize, usize)) -> Vec<T> {
    hits.sort_by(|a, b| {
        let (sa, la) = span(a);
        let (sb, lb) = span(b);
        lb.cmp(&la).then(sa.cmp(&sb))
    });
    let mut kept: Vec<T> = Vec::new();
    for hit in hits {
        let (start, len) = span(&hit);
        let overlaps = kept.iter().any(|k| {
            let (ks, kl) = span(k);
            start < ks + kl && ks < start + len
        });
        if !overlaps {
            kept.push(hit);
        }
    }
    kept.sort_by_key(|h| span(h).0);
    kept
}

/// At most one branch: the longest matching alias wins. With an M.Sc. marker
/// present an alias containing "msc" wins instead, and failing that the first
/// bare subject word maps to its M.Sc. program.
pub fn extract_branch(lower: &str) -> Option<Branch> {
    let hits = branch_hits(lower);
    if hits.is_empty() {
        return None;
    }
    if has_msc_marker(lower) {
        if let Some(m) = longest(hits.iter().filter(|m| m.alias.contains("msc"))) {
            return Some(m.branch);
        }
        if let Some(branch) = tokenize(lower).iter().find_map(|t| Branch::msc_subject(t)) {
            return Some(branch);
        }
    }
    longest(hits.iter()).map(|m| m.branch)
}

/// Non-overlapping branch mentions in text order, repeats included.
pub fn branch_occurrences(lower: &str) -> Vec<BranchMention> {
    let msc = has_msc_marker(lower);
    non_overlapping(branch_hits(lower), |m| (m.pos, m.alias.len()))
        .into_iter()
        .map(|mut m| {
            if msc {
                if let Some(b) = Branch::msc_subject(m.alias) {
                    m.branch = b;
                }
            }
            m
        })
        .collect()
}

/// Distinct branches in order of first appearance.
pub fn branch_mentions(lower: &str) -> Vec<BranchMention> {
    let mut seen = Vec::new();
    branch_occurrences(lower)
        .into_iter()
        .filter(|m| {
            if seen.contains(&m.branch) {
                false
            } else {
                seen.push(m.branch);
                true
            }
        })
        .collect()
}

pub fn campus_occurrences(lower: &str) -> Vec<CampusMention> {
    non_overlapping(campus_hits(lower), |m| (m.pos, m.alias.len()))
}

/// Distinct campuses in order of first appearance.
pub fn campus_mentions(lower: &str) -> Vec<CampusMention> {
    let mut seen = Vec::new();
    campus_occurrences(lower)
        .into_iter()
        .filter(|m| {
            if seen.contains(&m.campus) {
                false
            } else {
                seen.push(m.campus);
                true
            }
        })
        .collect()
}

/// At most one campus: the first in canonical order with any alias hit.
pub fn extract_campus(lower: &str) -> Option<Campus> {
    Campus::ALL
        .into_iter()
        .find(|c| c.aliases().iter().any(|a| !find_alias_all(lower, a).is_empty()))
}

pub fn extract_score(raw: &str) -> Option<u16> {
    first_score(raw)
}

/// Pair each campus mention with the nearest unused branch mention at most
/// `window` tokens away, either side. Succeeds only with two distinct pairs,
/// returned in order of first appearance.
pub fn extract_comparison_pairs(lower: &str, window: usize) -> Option<(Side, Side)> {
    let branches = branch_occurrences(lower);
    let branch_idx: Vec<usize> = branches.iter().map(|b| token_index_at(lower, b.pos)).collect();
    let mut used = vec![false; branches.len()];
    let mut pairs: Vec<(usize, Side)> = Vec::new();

    for campus in campus_occurrences(lower) {
        let ci = token_index_at(lower, campus.pos);
        let nearest = branch_idx
            .iter()
            .enumerate()
            .filter(|(i, _)| !used[*i])
            .map(|(i, bi)| (i, *bi, bi.abs_diff(ci)))
            .filter(|(_, _, d)| *d <= window)
            .min_by_key(|(_, _, d)| *d);
        if let Some((i, bi, _)) = nearest {
            used[i] = true;
            let side = Side::pair(campus.campus, branches[i].branch);
            if !pairs.iter().any(|(_, s)| *s == side) {
                pairs.push((ci.min(bi), side));
            }
        }
    }

    pairs.sort_by_key(|(idx, _)| *idx);
    match pairs.as_slice() {
        [(_, a), (_, b), ..] => Some((*a, *b)),
        _ => None,
    }
}

/// Resolve the two sides of a comparison: explicit campus/branch pairs first,
/// then two branches (sharing the one campus mentioned, if any), then two
/// campuses (sharing the one branch mentioned, if any).
pub fn comparison_sides(lower: &str, window: usize) -> Option<(Side, Side)> {
    if let Some(pairs) = extract_comparison_pairs(lower, window) {
        return Some(pairs);
    }
    let branches = branch_mentions(lower);
    let campuses = campus_mentions(lower);
    if let [a, b, ..] = branches.as_slice() {
        let campus = match campuses.as_slice() {
            [only] => Some(only.campus),
            _ => None,
        };
        return Some((Side::new(campus, Some(a.branch)), Side::new(campus, Some(b.branch))));
    }
    if let [a, b, ..] = campuses.as_slice() {
        let branch = branches.first().map(|m| m.branch);
        return Some((Side::new(Some(a.campus), branch), Side::new(Some(b.campus), branch)));
    }
    None
}
