use std::io::{self, BufRead, Write};
use std::thread;

use colored::{ColoredString, Colorize};

use sl_core::{Question, QuestionType};
use sl_quips::QuipSelector;
use sl_recovery::{
    Advance, FINAL_CONFESSION, FINAL_MESSAGE, LoadingPhase, RecoveryConfig, RecoveryDesk,
    RecoveryError, RecoveryWizard,
};

const SHARE_TEXT: &str =
    "I just completed the most absurd password recovery flow ever at SecureLogin™!";

/// Range answers when nothing is typed.
const DEFAULT_RATING: &str = "5";

/// Words reserved at question prompts. Anything else is an answer.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Back,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Finished,
    Quit,
}

pub fn run(seed: Option<u64>, quip_seed: Option<u64>, fast: bool) -> Result<(), String> {
    let mut config = super::recovery_config(seed, quip_seed);
    if fast {
        config = config.without_delays();
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    play(&mut reader, &config)
}

fn play<R: BufRead>(reader: &mut R, config: &RecoveryConfig) -> Result<(), String> {
    let desk = RecoveryDesk::new(config);
    let mut wizard = RecoveryWizard::new(desk).with_quips(QuipSelector::new(config.quip_seed));

    loop {
        print_login_banner();
        if recover(reader, &mut wizard, config)? == Outcome::Quit {
            return Ok(());
        }

        println!("  {} [y/N]", "Do It All Again!".bold());
        prompt(">")?;
        match read_line(reader)? {
            Some(answer) if is_yes(&answer) => wizard.start_over(),
            _ => return Ok(()),
        }
    }
}

/// One pass from email entry to the final screen.
fn recover<R: BufRead>(
    reader: &mut R,
    wizard: &mut RecoveryWizard<RecoveryDesk>,
    config: &RecoveryConfig,
) -> Result<Outcome, String> {
    println!("  {}", "Password Recovery".bold());
    println!("  Please enter your email address to verify your identity.\n");

    loop {
        prompt("Email Address:")?;
        let Some(email) = read_line(reader)? else {
            return Ok(Outcome::Quit);
        };
        if is_quit(&email) {
            return Ok(Outcome::Quit);
        }
        match wizard.start(&email) {
            Ok(phase) => {
                show_loading(phase, config);
                break;
            }
            Err(e @ RecoveryError::EmailRequired) => println!("  {}\n", e.to_string().red()),
            Err(e) => return Err(format!("failed to start recovery: {e}")),
        }
    }
    wizard.finish_loading().map_err(|e| e.to_string())?;

    loop {
        let flow = wizard.flow();
        let question = flow
            .current_question()
            .cloned()
            .ok_or("no security questions are configured")?;
        let text = flow.rendered_question().unwrap_or_default();
        let index = flow.current_index();
        let is_last = flow.is_last_question();

        println!(
            "  Question {index} of {} ({}% verified)",
            flow.total_questions(),
            flow.progress_percent()
        );
        print_question(&question, &text, is_last);

        prompt(">")?;
        let Some(input) = read_line(reader)? else {
            return Ok(Outcome::Quit);
        };
        match question_command(&input) {
            Some(Command::Quit) => return Ok(Outcome::Quit),
            Some(Command::Back) => {
                if index == 1 {
                    println!("  {}\n", "This is the first question.".yellow());
                } else {
                    wizard.back().map_err(|e| e.to_string())?;
                }
                continue;
            }
            None => {}
        }

        let answer = match resolve_answer(&question, &input) {
            Ok(answer) => answer,
            Err(hint) => {
                println!("  {}\n", hint.yellow());
                continue;
            }
        };
        if is_last && !confirm_confession(reader)? {
            return Ok(Outcome::Quit);
        }

        let reply = wizard.answer(&answer).map_err(|e| e.to_string())?;
        match reply.advance {
            Advance::Rejected(_) => println!("\n  {}\n", reply.message.red()),
            Advance::Finalizing => {
                println!("\n  {}\n", reply.message.italic().cyan());
                break;
            }
            Advance::Next(_) | Advance::Stayed => {
                println!("\n  {}\n", reply.message.italic().cyan())
            }
        }
    }

    show_loading(LoadingPhase::Finalizing, config);
    wizard.finish_loading().map_err(|e| e.to_string())?;
    print_final();
    Ok(Outcome::Finished)
}

fn print_login_banner() {
    println!();
    println!("  {}", "SecureLogin™".bold());
    println!("  Email or Username  [ disabled ]");
    println!("  Password           [ disabled ]");
    println!("  [ ] Remember me     {}", "Forgot password?".underline());
    println!("  {}\n", "Sign in (disabled)".dimmed());
}

fn show_loading(phase: LoadingPhase, config: &RecoveryConfig) {
    println!("  {}", phase.headline().bold());
    println!("  {}", phase.subline().dimmed());

    match phase {
        LoadingPhase::AccountLookup => thread::sleep(config.intro_delay),
        LoadingPhase::Finalizing => {
            let mut elapsed = std::time::Duration::ZERO;
            for line in phase.status_lines() {
                thread::sleep(config.status_interval);
                elapsed += config.status_interval;
                println!("  {line}");
                println!("  {}", phase.status_subline().dimmed());
            }
            thread::sleep(config.final_delay.saturating_sub(elapsed));
        }
    }
    println!();
}

fn print_final() {
    println!("  {}", "Verification Complete".bold().green());
    println!("  {}\n", FINAL_MESSAGE);
    println!("  Share this madness: \"{SHARE_TEXT}\"\n");
}

/// Question text gets louder as absurdity rises.
fn styled(text: &str, level: u8) -> ColoredString {
    let styled = match level {
        0..=2 => text.normal(),
        3..=5 => text.cyan(),
        6..=8 => text.magenta(),
        _ => text.yellow().bold(),
    };
    if level >= 3 { styled.italic() } else { styled }
}

fn hint(question: &Question) -> Option<&'static str> {
    let level = question.absurdity_level;
    match question.question_type {
        QuestionType::Text => match level {
            0..=2 => None,
            3 => Some("Please be specific about condiments."),
            4..=6 => Some("This is critical security information."),
            7..=8 => Some("Your password's self-esteem depends on this."),
            _ => Some("Be specific. For security purposes only."),
        },
        QuestionType::Radio => Some("Enter the number of your answer."),
        QuestionType::Select => Some("This is critical security information."),
        QuestionType::Checkbox => {
            Some("Select all that apply (e.g. 1,3). Your selections are critical for account recovery.")
        }
        QuestionType::Range => {
            Some("1 = Ugly, 10 = Breathtaking. We need this for artistic security measures.")
        }
    }
}

fn print_question(question: &Question, text: &str, is_last: bool) {
    println!("  {}", styled(text, question.absurdity_level));
    for (i, option) in question.options.iter().enumerate() {
        println!("    {}. {option}", i + 1);
    }
    if let Some(hint) = hint(question) {
        println!("  {}", hint.dimmed());
    }
    if is_last {
        println!("  {}", "Complete Verification".red().bold());
    }
    println!(
        "  {}",
        "(type exactly 'back' for the previous question or 'quit' to give up)".dimmed()
    );
}

/// Turn typed input into the answer submitted for `question`.
fn resolve_answer(question: &Question, input: &str) -> Result<String, String> {
    let input = input.trim();
    match question.question_type {
        QuestionType::Text => {
            if input.is_empty() {
                Err("Please type an answer.".into())
            } else {
                Ok(input.to_string())
            }
        }
        QuestionType::Radio | QuestionType::Select => pick_option(&question.options, input)
            .map(str::to_string)
            .ok_or_else(|| "Pick one of the numbered options.".to_string()),
        QuestionType::Checkbox => {
            let picked: Option<Vec<&str>> = input
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| pick_option(&question.options, part))
                .collect();
            match picked {
                Some(picked) if !picked.is_empty() => Ok(picked.join(", ")),
                _ => Err("Select at least one option, separated by commas.".into()),
            }
        }
        QuestionType::Range => {
            if input.is_empty() {
                return Ok(DEFAULT_RATING.to_string());
            }
            match input.parse::<u8>() {
                Ok(n @ 1..=10) => Ok(n.to_string()),
                _ => Err("Pick a number from 1 to 10.".into()),
            }
        }
    }
}

/// An option by 1-based number or by case-insensitive name.
fn pick_option<'a>(options: &'a [String], input: &str) -> Option<&'a str> {
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).map(String::as_str);
    }
    options
        .iter()
        .find(|o| o.eq_ignore_ascii_case(input))
        .map(String::as_str)
}

fn confirm_confession<R: BufRead>(reader: &mut R) -> Result<bool, String> {
    loop {
        println!("  {}", FINAL_CONFESSION.red());
        prompt("Type 'I agree' to continue:")?;
        let Some(input) = read_line(reader)? else {
            return Ok(false);
        };
        if is_quit(&input) {
            return Ok(false);
        }
        if input.eq_ignore_ascii_case("i agree") || is_yes(&input) {
            return Ok(true);
        }
        println!("  {}\n", "Agreement is required to complete verification.".yellow());
    }
}

fn prompt(label: &str) -> Result<(), String> {
    print!("  {label} ");
    io::stdout().flush().map_err(|e| e.to_string())
}

/// Next trimmed line, or `None` at EOF.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) => Err(e.to_string()),
    }
}

/// Only the full words count here, so short answers like "Q" still submit.
fn question_command(input: &str) -> Option<Command> {
    if input.eq_ignore_ascii_case("back") {
        Some(Command::Back)
    } else if input.eq_ignore_ascii_case("quit") {
        Some(Command::Quit)
    } else {
        None
    }
}

fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q")
}

fn is_yes(input: &str) -> bool {
    input.eq_ignore_ascii_case("y") || input.eq_ignore_ascii_case("yes")
}
