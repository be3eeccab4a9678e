//! CLI gift game example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use giftwheel::{Command, Driver, Effect, EffectType, Game, GameOptions, GamePhase, GameView};

const TIMER_STEP_SECS: i64 = 5 * 60;

enum Input {
    Run(Command),
    Unknown,
    Quit,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!("Gift wheel CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let driver = Driver::start(Game::new(GameOptions::default(), seed));

    loop {
        let view = driver.game().snapshot();
        print_view(&view);

        let command = match view.phase {
            GamePhase::Setup => setup_command(&view),
            GamePhase::Round1 | GamePhase::Round2 => round_command(&view),
            GamePhase::Intermission => intermission_command(),
            GamePhase::Finished => finished_command(),
        };

        let command = match command {
            Input::Run(command) => command,
            Input::Unknown => {
                println!("Unknown action.");
                continue;
            }
            Input::Quit => {
                println!("Goodbye.");
                break;
            }
        };

        match driver.dispatch(command) {
            Ok(Effect::WheelOpened) => println!("The wheel of fortune appears!"),
            Ok(Effect::ScheduleSettle(ticket)) => {
                println!("The wheel is spinning...");
                std::thread::sleep(ticket.settle_after());
            }
            Ok(Effect::ScheduleReveal(_)) => println!("The timer goes dark."),
            Ok(Effect::Expired) => println!("Time is up!"),
            Ok(Effect::None) => {}
            Err(err) => println!("Not now: {err}"),
        }
    }
}

fn setup_command(view: &GameView) -> Input {
    println!("[n]ame <slot> <name>  [a]dd slot  [r]emove <slot>  [s]tart");
    let input = prompt_line("> ");
    let mut parts = input.splitn(3, ' ');

    match parts.next().unwrap_or_default() {
        "n" | "name" => {
            let Some(index) = parse_slot(parts.next(), view) else {
                return Input::Unknown;
            };
            let name = parts.next().unwrap_or_default().to_string();
            Input::Run(Command::SetPlayerName { index, name })
        }
        "a" | "add" => Input::Run(Command::AddPlayerSlot),
        "r" | "remove" => parse_slot(parts.next(), view)
            .map_or(Input::Unknown, |index| Input::Run(Command::RemovePlayerSlot(index))),
        "s" | "start" => Input::Run(Command::AdvancePhase(GamePhase::Round1)),
        "q" | "quit" => Input::Quit,
        _ => Input::Unknown,
    }
}

fn round_command(view: &GameView) -> Input {
    if view.wheel.visible {
        let action = if view.wheel.result.is_some() {
            "[c]lose wheel"
        } else {
            "[s]pin"
        };
        println!("{action}");
        return match prompt_line("> ").as_str() {
            "s" | "spin" => Input::Run(Command::Spin),
            "c" | "close" => Input::Run(Command::CloseWheel),
            "q" | "quit" => Input::Quit,
            _ => Input::Unknown,
        };
    }

    if view.phase == GamePhase::Round1 {
        println!("[enter] next card  [w]heel  [i]ntermission");
    } else {
        println!("[enter] next card  [w]heel  [p]ause/resume  [e]nd");
    }

    match prompt_line("> ").as_str() {
        "" | "next" => Input::Run(Command::AdvanceTurn),
        "w" | "wheel" => Input::Run(Command::ForceOpenWheel),
        "i" | "intermission" => Input::Run(Command::ProceedToIntermission),
        "p" | "pause" => Input::Run(Command::ToggleTimer),
        "e" | "end" => Input::Run(Command::Finish),
        "q" | "quit" => Input::Quit,
        _ => Input::Unknown,
    }
}

fn intermission_command() -> Input {
    println!("[+] five more minutes  [-] five fewer minutes  [s]tart finale");
    match prompt_line("> ").as_str() {
        "+" => Input::Run(Command::AdjustTimer(TIMER_STEP_SECS)),
        "-" => Input::Run(Command::AdjustTimer(-TIMER_STEP_SECS)),
        "s" | "start" => Input::Run(Command::StartRound2),
        "q" | "quit" => Input::Quit,
        _ => Input::Unknown,
    }
}

fn finished_command() -> Input {
    println!("Hands off the gifts! [r]estart");
    match prompt_line("> ").as_str() {
        "r" | "restart" => Input::Run(Command::Restart),
        "q" | "quit" => Input::Quit,
        _ => Input::Unknown,
    }
}

fn parse_slot(input: Option<&str>, view: &GameView) -> Option<usize> {
    let slot = input?.parse::<usize>().ok()?;
    // Slots are shown 1-based.
    slot.checked_sub(1).filter(|index| *index < view.slots.len())
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_string()
}

fn print_view(view: &GameView) {
    println!();
    match view.phase {
        GamePhase::Setup => {
            println!("Who is playing?");
            for (index, slot) in view.slots.iter().enumerate() {
                let name = if slot.is_empty() { "-" } else { slot };
                println!("  {}. {name}", index + 1);
            }
        }
        GamePhase::Intermission => {
            println!("Intermission. Finale timer: {}", view.timer.display);
        }
        GamePhase::Finished => println!("{}", colorize("FINISHED!", "33")),
        GamePhase::Round1 | GamePhase::Round2 => {
            if view.phase == GamePhase::Round2 {
                let code = if view.timer.low_time { "31" } else { "33" };
                let paused = if view.timer.running { "" } else { " (paused)" };
                println!("Time: {}{paused}", colorize(&view.timer.display, code));
            }
            println!("Turn of: {}", view.active_name().unwrap_or("?"));
            if let Some(segment) = &view.wheel.segment {
                println!("The wheel stopped on {}", colorize(&segment.label, "35"));
            }
            if let Some(card) = &view.card {
                let code = match card.effect {
                    EffectType::Chaos => "35",
                    EffectType::Special | EffectType::Meta => "33",
                    EffectType::Info => "90",
                    _ => "0",
                };
                println!("{}", colorize(card.text(), code));
            }
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
