use crate::templates::footer;

pub fn help_reply(name: &str) -> String {
    let mut out = format!("Hey {name}! I'm the BITSAT cutoff bot. Ask me in plain words or use a command:\n\n");
    out += "| Command | What you get |\n|---|---|\n";
    out += "| `!cutoff goa ece` | Cutoff for a branch/campus (or everything) |\n";
    out += "| `!chance cse 310` | Your margin and odds against each cutoff |\n";
    out += "| `!compare goa cse vs hyd ece` | Cutoffs and placements side by side |\n";
    out += "| `!trend cse pilani` | Year-wise cutoffs with a next-year estimate |\n";
    out += "| `!suggest 285` | What your score realistically gets you |\n";
    out += "| `!placement mnc` | Cutoffs plus placement numbers |\n";
    out += "\nPlain questions work too: *\"can i get cse with 300\"*, *\"pilani vs goa for eee?\"*\n";
    out += "\nM.Sc. programs: say `msc` (e.g. *\"msc eco goa cutoff\"*).\n";
    out += &footer();
    out
}
