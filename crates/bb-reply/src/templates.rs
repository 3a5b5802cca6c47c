//! Phrase pools and small Markdown helpers shared by the synthesizers.

use bb_core::MAX_SCORE;
use rand::seq::SliceRandom;
use rand::Rng;

pub const CUTOFF_LINK: &str = "https://www.bitsadmission.com/FD/BITSAT_cutoffs.html?06012025";

pub const DARK_STARTERS: &[&str] = &[
    "Arre yaar", "Bhai dekh", "Suno", "Arey", "Oye", "Beta", "Dost", "Yaar", "Bro", "Listen up",
];

pub const MOTIVATIONAL_DARK: &[&str] = &[
    "life's roasting you slowly",
    "universe ka twisted sense of humor",
    "reality's slapping you awake",
    "harsh truth delivery service",
    "bitter pill pharmacy",
    "wake up call from hell",
    "plot twist from satan",
    "character assassination arc",
    "villain backstory unlocked",
    "trauma bonding with destiny",
    "existential crisis speedrun",
    "mental breakdown any% category",
    "suffering simulator level 100",
];

pub const HINGLISH_VIBES: &[&str] = &[
    "matlab", "basically", "obviously", "clearly", "apparently", "technically", "realistically",
    "honestly", "frankly", "seriously", "literally", "actually", "bro",
];

pub const COOL_ENDINGS: &[&str] = &[
    "but you're built different",
    "time to become the villain",
    "embrace your dark era",
    "plot armor loading...",
    "main character syndrome activated",
    "sigma grindset unlocked",
    "no cap fr fr",
    "periodt bestie",
    "that's the brutal tea",
    "it is what it is king",
    "we move like psychopaths",
    "different breed of chaos",
    "built for destruction",
    "menace to society vibes",
    "unhinged energy only",
];

pub const DARK_WISDOM: &[&str] = &[
    "pain is just life's way of saying hello",
    "suffering is character development on steroids",
    "every L is just practice for the final boss fight",
    "failure is success wearing a disguise",
    "rock bottom has excellent wifi",
    "storms are just nature's therapy sessions",
    "diamonds are coal that handled pressure like a psychopath",
    "scars are just life's autographs",
    "trauma is just spicy character development",
    "depression is just your brain's dark mode",
];

pub const CUTOFF_ENDINGS: &[&str] = &[
    "Numbers don't define you - but they sure love to roast you! 💀",
    "Cutoff dekh ke cry mat kar, grind kar! Tears won't get you admission 😈",
    "Every topper was once crying over cutoffs - now it's your turn! 🔥",
    "These scores are just life's way of saying 'try harder, peasant' 💪",
    "Remember: suffering today = flexing tomorrow (maybe) 😅",
    "Cutoffs are temporary, but the trauma is permanent! Stay strong 🎭",
    "These numbers are just suggestions from the universe to work harder 💯",
];

pub const CHANCE_ENDINGS: &[&str] = &[
    "Iteration 2 exists for a reason. Use it wisely 😈",
    "Cutoffs move every year, so keep grinding till the final list 🔥",
    "Margins are vibes, not guarantees. Pray to the iteration gods 🙏",
    "Your score is locked, your hope shouldn't be 💪",
];

pub const COMPARE_ENDINGS: &[&str] = &[
    "Branch > campus or campus > branch? The eternal BITSAT debate continues 💀",
    "Pick the one you won't regret at 3 AM before a compre 😅",
    "Both beat drop year trauma, just saying 🔥",
];

pub const TREND_ENDINGS: &[&str] = &[
    "Cutoffs only know one direction: up. Like your anxiety 📈",
    "History repeats itself, especially the painful parts 💀",
    "Past numbers, future trauma. Plan accordingly 😈",
];

pub const SUGGESTION_ENDINGS: &[&str] = &[
    "Fill your preferences smart, not emotional 🧠",
    "Campus life is 4 years, branch is forever. Choose wisely 💀",
    "Iterations can surprise you, keep the backup options real 🔥",
];

/// Best-effort remark for scores past the paper maximum.
pub fn out_of_range_note(score: u16) -> Option<String> {
    (score > MAX_SCORE).then(|| {
        format!("*({score}? The paper is out of {MAX_SCORE}, but sure, let's pretend.)*\n\n")
    })
}

pub fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Markdown table header with its alignment row.
pub fn table_header(columns: &[&str]) -> String {
    let head = columns.join(" | ");
    let rule = vec!["---"; columns.len()].join("|");
    format!("| {head} |\n|{rule}|\n")
}

pub fn table_row(cells: &[String]) -> String {
    format!("| {} |\n", cells.join(" | "))
}

/// `287/390`, or a dash when the program is not offered.
pub fn score_cell(score: Option<u16>) -> String {
    match score {
        Some(s) => format!("{s}/{MAX_SCORE}"),
        None => "-".to_string(),
    }
}

pub fn signed(delta: i32) -> String {
    if delta >= 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

pub fn footer() -> String {
    format!("\n📊 More detailed info: {CUTOFF_LINK}")
}
