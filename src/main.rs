//! Polysay main entry point
//!
//! The interactive surface is one prompt loop standing in for the three
//! widgets: typed lines are the text input, `/lang` is the language
//! drop-down, and submitting a line is the speak button.

use log::{error, info};
use polysay::controller::{DispatchError, SpeechController};
use polysay::locales;
use polysay::speech::create_synth;
use polysay::Result;
use std::io::{self, BufRead, Write};
use std::process;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let debug_mode = args.iter().any(|arg| arg == "--debug" || arg == "-d");

    // Initialize logger
    if debug_mode {
        // Debug mode: write to polysay.log file
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("polysay.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!(
                    "Warning: Failed to open polysay.log for debug logging: {}",
                    e
                );
                eprintln!("Continuing without file logging...");
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "Polysay version {} starting (debug mode, logging to polysay.log)",
            polysay::VERSION
        );
    } else {
        // Normal mode: minimal logging to stderr, only errors
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .init();
    }

    // Run the application
    if let Err(e) = run() {
        error!("Fatal error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let synth = create_synth()?;
    let mut controller = SpeechController::new(synth)?;
    info!("Controller initialized");

    println!("{} {}", polysay::APP_NAME, polysay::VERSION);
    println!(
        "Language: {} ({})",
        selected_name(&controller),
        controller.state.selected_locale()
    );
    println!("Voices reported by host: {}", controller.voices().len());
    println!("Type text and press enter to speak it.");
    println!("Commands: /langs  /lang <n|code>  /voices  /text <s>  /quit");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        // Pick up any catalog change signalled since the last turn
        controller.poll_catalog()?;

        print!("say> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }
        let input = line.trim_end_matches(&['\r', '\n'][..]);

        if let Some(rest) = input.strip_prefix('/') {
            if handle_command(&mut controller, rest)? {
                break;
            }
            continue;
        }

        // The speak button: submit whatever was typed, empty or not
        controller.state.set_text(input);
        match controller.dispatch() {
            Ok(()) => {}
            Err(DispatchError::Speech(e)) => return Err(e),
            Err(notice) => println!("** {} **", notice),
        }
    }

    Ok(())
}

/// Handle a `/command` line; returns true when the loop should exit
fn handle_command(controller: &mut SpeechController, command: &str) -> Result<bool> {
    let (name, arg) = match command.split_once(' ') {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "langs" => {
            for (i, opt) in locales::list_locales().iter().enumerate() {
                let marker = if opt.code == controller.state.selected_locale() {
                    '*'
                } else {
                    ' '
                };
                println!("{} {:2}. {}  {}", marker, i + 1, opt.code, opt.name);
            }
        }
        "lang" => select_locale(controller, arg),
        "voices" => {
            let voices = controller.voices();
            if voices.is_empty() {
                println!("No voices reported by the host");
            } else {
                for voice in voices {
                    println!("  {}  {}", voice.language, voice.name);
                }
            }
        }
        "text" => {
            controller.state.set_text(arg);
            println!("Text set ({} chars)", arg.len());
        }
        "quit" | "q" | "exit" => return Ok(true),
        _ => println!("Unknown command: /{}", name),
    }

    Ok(false)
}

/// Select a locale by table index (as printed by /langs) or by code
///
/// This is the constrained selection widget: anything not in the table
/// is rejected here and never reaches the state setter.
fn select_locale(controller: &mut SpeechController, arg: &str) {
    let option = if let Ok(n) = arg.parse::<usize>() {
        n.checked_sub(1).and_then(|i| locales::list_locales().get(i))
    } else {
        locales::find(arg)
    };

    match option {
        Some(opt) => {
            controller.state.set_locale(opt.code);
            println!("Language: {} ({})", opt.name, opt.code);
        }
        None => println!("Not a listed language: {}", arg),
    }
}

fn selected_name(controller: &SpeechController) -> &'static str {
    locales::find(controller.state.selected_locale())
        .map(|opt| opt.name)
        .unwrap_or("?")
}
