//! Interactive decision prompts on stdin. Anything unrecognized reads as
//! a cancel, so a stray Enter never creates files.

use std::io::{self, BufRead, Write};

use anjuan_router::{SelfChoice, WitnessChoice};
use anjuan_store::index::CaseMatch;

fn read_answer(question: &str) -> eyre::Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Yes/no confirmation, defaulting to no.
pub fn confirm(question: &str) -> eyre::Result<bool> {
    let answer = read_answer(&format!("{question} [y/N] "))?;
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Pick one of the listed earlier cases, start a new one, or cancel.
/// The caller has already printed the numbered list.
pub fn choose_case(matches: &[CaseMatch]) -> eyre::Result<SelfChoice> {
    let answer = read_answer(&format!(
        "选择案件 [1-{}], n 新建案件, 回车取消: ",
        matches.len()
    ))?;
    if answer.is_empty() {
        return Ok(SelfChoice::Cancel);
    }
    if answer.eq_ignore_ascii_case("n") {
        return Ok(SelfChoice::StartNew);
    }
    match answer.parse::<usize>() {
        Ok(i) if (1..=matches.len()).contains(&i) => Ok(SelfChoice::UseExisting(i - 1)),
        _ => Ok(SelfChoice::Cancel),
    }
}

/// Reopen the existing witness record, take another statement, or cancel.
pub fn witness_choice() -> eyre::Result<WitnessChoice> {
    let answer = read_answer("o 打开已有笔录, n 另录一份, 回车取消: ")?;
    if answer.eq_ignore_ascii_case("o") {
        return Ok(WitnessChoice::OpenExisting);
    }
    if answer.eq_ignore_ascii_case("n") {
        return Ok(WitnessChoice::CreateNew);
    }
    Ok(WitnessChoice::Cancel)
}
