//! Embedded admission dataset: 2024 cutoffs, three-year history and placement figures.

use crate::catalog::{Branch, Campus, ProgramType};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Maximum BITSAT score.
pub const MAX_SCORE: u16 = 390;
pub const SNAPSHOT_YEAR: u16 = 2024;
pub const TREND_YEARS: [u16; 3] = [2022, 2023, 2024];
/// Series with at least this many valid points predict from the long-run slope.
pub const LONG_HISTORY_MIN_POINTS: usize = 4;

use Branch::*;
use Campus::*;

const CUTOFFS: &[(Campus, Branch, u16)] = &[
    (Pilani, Cse, 327),
    (Pilani, Ece, 314),
    (Pilani, Eee, 292),
    (Pilani, Mechanical, 266),
    (Pilani, Chemical, 247),
    (Pilani, Civil, 238),
    (Pilani, Manufacturing, 243),
    (Pilani, Mnc, 318),
    (Pilani, Instrumentation, 282),
    (Pilani, Pharmacy, 165),
    (Pilani, Biology, 236),
    (Pilani, Chemistry, 241),
    (Pilani, Economics, 271),
    (Pilani, Physics, 254),
    (Pilani, MscMathematics, 256),
    (Goa, Cse, 301),
    (Goa, Ece, 287),
    (Goa, Eee, 278),
    (Goa, Mechanical, 254),
    (Goa, Chemical, 239),
    (Goa, Mnc, 295),
    (Goa, Instrumentation, 270),
    (Goa, Biology, 234),
    (Goa, Chemistry, 236),
    (Goa, Economics, 263),
    (Goa, Physics, 243),
    (Goa, MscMathematics, 247),
    (Hyderabad, Cse, 298),
    (Hyderabad, Ece, 284),
    (Hyderabad, Eee, 275),
    (Hyderabad, Mechanical, 251),
    (Hyderabad, Chemical, 238),
    (Hyderabad, Civil, 235),
    (Hyderabad, Mnc, 293),
    (Hyderabad, Instrumentation, 270),
    (Hyderabad, Pharmacy, 161),
    (Hyderabad, Biology, 234),
    (Hyderabad, Chemistry, 235),
    (Hyderabad, Economics, 261),
    (Hyderabad, Physics, 245),
    (Hyderabad, MscMathematics, 245),
];

// Scores for TREND_YEARS in order.
const HISTORY: &[(Campus, Branch, [Option<u16>; 3])] = &[
    (Pilani, Cse, [Some(320), Some(322), Some(327)]),
    (Pilani, Ece, [Some(300), Some(306), Some(314)]),
    (Pilani, Eee, [Some(281), Some(285), Some(292)]),
    (Pilani, Mechanical, [Some(254), Some(259), Some(266)]),
    (Pilani, Chemical, [Some(233), Some(241), Some(247)]),
    (Pilani, Civil, [Some(226), Some(232), Some(238)]),
    (Pilani, Manufacturing, [Some(227), Some(236), Some(243)]),
    (Pilani, Mnc, [Some(306), Some(311), Some(318)]),
    (Pilani, Instrumentation, [Some(270), Some(275), Some(282)]),
    (Pilani, Pharmacy, [Some(152), Some(160), Some(165)]),
    (Pilani, Biology, [Some(224), Some(230), Some(236)]),
    (Pilani, Chemistry, [Some(230), Some(235), Some(241)]),
    (Pilani, Economics, [Some(262), Some(266), Some(271)]),
    (Pilani, Physics, [Some(244), Some(249), Some(254)]),
    (Pilani, MscMathematics, [Some(246), Some(250), Some(256)]),
    (Goa, Cse, [Some(295), Some(298), Some(301)]),
    (Goa, Ece, [Some(278), Some(283), Some(287)]),
    (Goa, Eee, [Some(267), Some(272), Some(278)]),
    (Goa, Mechanical, [Some(243), Some(248), Some(254)]),
    (Goa, Chemical, [Some(228), Some(233), Some(239)]),
    (Goa, Mnc, [Some(287), Some(291), Some(295)]),
    (Goa, Instrumentation, [Some(258), Some(264), Some(270)]),
    (Goa, Biology, [Some(221), Some(226), Some(234)]),
    (Goa, Chemistry, [Some(227), Some(230), Some(236)]),
    (Goa, Economics, [Some(251), Some(257), Some(263)]),
    (Goa, Physics, [Some(232), Some(237), Some(243)]),
    (Goa, MscMathematics, [Some(240), Some(243), Some(247)]),
    (Hyderabad, Cse, [Some(291), Some(295), Some(298)]),
    (Hyderabad, Ece, [Some(272), Some(280), Some(284)]),
    (Hyderabad, Eee, [Some(262), Some(269), Some(275)]),
    (Hyderabad, Mechanical, [Some(240), Some(245), Some(251)]),
    (Hyderabad, Chemical, [Some(225), Some(231), Some(238)]),
    (Hyderabad, Civil, [None, Some(229), Some(235)]),
    (Hyderabad, Mnc, [Some(284), Some(288), Some(293)]),
    (Hyderabad, Instrumentation, [Some(257), Some(263), Some(270)]),
    (Hyderabad, Pharmacy, [Some(145), Some(155), Some(161)]),
    (Hyderabad, Biology, [Some(218), Some(226), Some(234)]),
    (Hyderabad, Chemistry, [Some(223), Some(229), Some(235)]),
    (Hyderabad, Economics, [Some(249), Some(255), Some(261)]),
    (Hyderabad, Physics, [Some(233), Some(239), Some(245)]),
    (Hyderabad, MscMathematics, [Some(238), Some(241), Some(245)]),
];

/// Campus-agnostic placement figures in LPA.
const PLACEMENTS: &[(Branch, f32, f32, f32, &str)] = &[
    (Cse, 30.4, 22.0, 60.7, "Google, Microsoft, Amazon, Goldman Sachs, Uber"),
    (Mnc, 28.1, 21.0, 55.0, "Google, Tower Research, Goldman Sachs, Microsoft"),
    (Ece, 22.6, 17.5, 52.0, "Texas Instruments, Qualcomm, Nvidia, Intel"),
    (Eee, 18.9, 15.0, 45.0, "Texas Instruments, Analog Devices, Samsung, Intel"),
    (Instrumentation, 17.2, 14.0, 40.0, "Analog Devices, Micron, Honeywell"),
    (Mechanical, 11.8, 10.0, 30.0, "ITC, Tata Motors, Schlumberger, Bajaj Auto"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct PlacementStat {
    pub average_lpa: f32,
    pub median_lpa: f32,
    pub highest_lpa: f32,
    pub recruiters: String,
}

/// Year-over-year row of a trend table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearPoint {
    pub year: u16,
    pub score: u16,
    /// Change from the previous valid year, `None` for the oldest point.
    pub delta: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionMethod {
    /// `latest + latest year-over-year delta`
    LastDelta,
    /// `latest + (latest - oldest) / span_years`
    AverageSlope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub year: u16,
    pub score: i32,
    pub method: PredictionMethod,
}

/// Ordered year → score history. Missing years are legitimately absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendSeries {
    points: BTreeMap<u16, Option<u16>>,
}

impl TrendSeries {
    pub fn from_points(points: impl IntoIterator<Item = (u16, Option<u16>)>) -> Self {
        Self { points: points.into_iter().collect() }
    }

    /// Years with a score, oldest first.
    pub fn valid(&self) -> Vec<(u16, u16)> {
        self.points
            .iter()
            .filter_map(|(year, score)| score.map(|s| (*year, s)))
            .collect()
    }

    pub fn latest(&self) -> Option<(u16, u16)> {
        self.valid().last().copied()
    }

    /// Rows oldest first, each carrying its delta from the previous valid year.
    pub fn year_points(&self) -> Vec<YearPoint> {
        let mut prev: Option<u16> = None;
        self.valid()
            .into_iter()
            .map(|(year, score)| {
                let delta = prev.map(|p| score as i32 - p as i32);
                prev = Some(score);
                YearPoint { year, score, delta }
            })
            .collect()
    }

    pub fn last_delta(&self) -> Option<i32> {
        self.year_points().last().and_then(|p| p.delta)
    }

    /// Naive one-year-ahead estimate. Needs at least two valid years.
    pub fn predict_next(&self) -> Option<Prediction> {
        let valid = self.valid();
        let (first_year, first) = *valid.first()?;
        let (last_year, last) = *valid.last()?;
        if valid.len() < 2 || last_year == first_year {
            return None;
        }
        if valid.len() >= LONG_HISTORY_MIN_POINTS {
            let slope = (last as f64 - first as f64) / (last_year - first_year) as f64;
            return Some(Prediction {
                year: last_year + 1,
                score: (last as f64 + slope).round() as i32,
                method: PredictionMethod::AverageSlope,
            });
        }
        let delta = self.last_delta()?;
        Some(Prediction {
            year: last_year + 1,
            score: last as i32 + delta,
            method: PredictionMethod::LastDelta,
        })
    }
}

/// The immutable process-wide snapshot every formatter reads.
#[derive(Debug, Clone)]
pub struct Dataset {
    cutoffs: BTreeMap<(Campus, Branch), u16>,
    trends: BTreeMap<(Branch, Campus), TrendSeries>,
    placements: BTreeMap<Branch, PlacementStat>,
}

static DATASET: LazyLock<Dataset> = LazyLock::new(Dataset::build);

impl Dataset {
    pub fn global() -> &'static Dataset {
        &DATASET
    }

    fn build() -> Self {
        let cutoffs = CUTOFFS.iter().map(|(c, b, s)| ((*c, *b), *s)).collect();
        let trends = HISTORY
            .iter()
            .map(|(c, b, scores)| {
                let series = TrendSeries::from_points(TREND_YEARS.iter().copied().zip(scores.iter().copied()));
                ((*b, *c), series)
            })
            .collect();
        let placements = PLACEMENTS
            .iter()
            .map(|(b, avg, median, high, recruiters)| {
                (
                    *b,
                    PlacementStat {
                        average_lpa: *avg,
                        median_lpa: *median,
                        highest_lpa: *high,
                        recruiters: recruiters.to_string(),
                    },
                )
            })
            .collect();
        let dataset = Self { cutoffs, trends, placements };
        tracing::debug!(pairs = dataset.len(), year = SNAPSHOT_YEAR, "cutoff dataset loaded");
        dataset
    }

    /// `None` means the branch is not offered at that campus.
    pub fn cutoff(&self, campus: Campus, branch: Branch) -> Option<u16> {
        self.cutoffs.get(&(campus, branch)).copied()
    }

    pub fn is_offered(&self, campus: Campus, branch: Branch) -> bool {
        self.cutoffs.contains_key(&(campus, branch))
    }

    /// Campuses offering `branch`, in canonical campus order.
    pub fn campuses_for(&self, branch: Branch) -> Vec<(Campus, u16)> {
        Campus::ALL
            .iter()
            .filter_map(|c| self.cutoff(*c, branch).map(|s| (*c, s)))
            .collect()
    }

    /// Branches offered at `campus`, in canonical branch order.
    pub fn branches_at(&self, campus: Campus) -> Vec<(Branch, u16)> {
        Branch::ALL
            .iter()
            .filter_map(|b| self.cutoff(campus, *b).map(|s| (*b, s)))
            .collect()
    }

    pub fn branches_at_of_type(&self, campus: Campus, program: ProgramType) -> Vec<(Branch, u16)> {
        self.branches_at(campus)
            .into_iter()
            .filter(|(b, _)| b.program_type() == program)
            .collect()
    }

    /// Every offered (campus, branch) pair with its score, highest score first.
    pub fn ranked(&self) -> Vec<(Campus, Branch, u16)> {
        let mut all: Vec<_> = self.cutoffs.iter().map(|((c, b), s)| (*c, *b, *s)).collect();
        all.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)).then(a.1.cmp(&b.1)));
        all
    }

    pub fn trend(&self, branch: Branch, campus: Campus) -> Option<&TrendSeries> {
        self.trends.get(&(branch, campus))
    }

    pub fn placement(&self, branch: Branch) -> Option<&PlacementStat> {
        self.placements.get(&branch)
    }

    pub fn len(&self) -> usize {
        self.cutoffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cutoffs.is_empty()
    }
}
