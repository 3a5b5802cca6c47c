//! Data-free fallback reply stitched from the phrase pools.

use crate::templates::{pick, COOL_ENDINGS, DARK_STARTERS, DARK_WISDOM, HINGLISH_VIBES, MOTIVATIONAL_DARK};
use rand::seq::SliceRandom;
use rand::Rng;

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `words` are the comment's meaningful tokens; when present one of them
/// may be worked into the line.
pub fn roast_reply<R: Rng + ?Sized>(name: &str, words: &[String], rng: &mut R) -> String {
    let starter = pick(rng, DARK_STARTERS);
    let vibe = pick(rng, HINGLISH_VIBES);
    let motivation = pick(rng, MOTIVATIONAL_DARK);
    let ending = pick(rng, COOL_ENDINGS);
    let wisdom = pick(rng, DARK_WISDOM);

    let mut patterns = vec![
        format!("{starter} {name}, {vibe} {motivation} but remember - {wisdom}. {} 💀✨", capitalize(ending)),
        format!("Yo {name}! {vibe} this is just {motivation}. Here's the thing - {wisdom}. {} 🔥", capitalize(ending)),
        format!("{starter}, {vibe} life threw you this curveball? {} hai yaar. But {wisdom} - {ending} 💪😈", capitalize(motivation)),
        format!("Dekh {name}, {vibe} {motivation} is happening. Real talk - {wisdom}. Time to {ending} 🎯"),
        format!("{starter} {name}, {motivation}? {vibe} perfect timing. Remember: {wisdom}. Now {ending} 🚀💀"),
    ];

    if let Some(word) = words.choose(rng) {
        patterns.extend([
            format!("{starter} {name}, {vibe} {word} is giving you {motivation}? Plot twist: {wisdom}. {} 🎭", capitalize(ending)),
            format!("Yo {name}! {word} se {motivation}? {vibe} {wisdom} - {ending} 💯"),
            format!("{starter}, {word} and {motivation} - {vibe} classic combo. But {wisdom}, so {ending} 🔥💀"),
        ]);
    }

    let idx = rng.gen_range(0..patterns.len());
    patterns.swap_remove(idx)
}
