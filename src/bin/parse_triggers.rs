//! Reads an assistant reply on stdin and prints what the console would do
//! with it: one `NAME<TAB>param` line per trigger, a blank line, then the
//! cleaned text.

use anyhow::{Context, Result};
use paver::domain::skill::SkillName;
use paver::domain::trigger::parse;
use std::io::{self, Read, Write};

fn main() -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;

    let parsed = parse(&input);

    let mut out = io::stdout().lock();
    for trigger in &parsed.triggers {
        let known = if trigger.skill_name.parse::<SkillName>().is_ok() {
            ""
        } else {
            "\t(unknown)"
        };
        writeln!(out, "{}\t{}{known}", trigger.skill_name, trigger.param)?;
    }
    writeln!(out)?;
    write!(out, "{}", parsed.cleaned_text)?;
    out.flush()?;
    Ok(())
}
