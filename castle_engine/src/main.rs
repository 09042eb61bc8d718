#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Skye's Castle **
//! Find Skye, Auntie, the cat and the doll, and get everyone out before dark.

use castle_engine::repl::{InputEvent, InputManager, LineSource};
use castle_engine::style::GameStyle;
use castle_engine::{CastleWorld, MessageKey, View, ViewItem, load_text_table, run_session};

use anyhow::{Context, Result};
use log::info;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading castle text table...");
    let text = load_text_table().context("while loading the text table")?;
    let mut world = CastleWorld::new(text);
    let mut input = InputManager::new();
    let mut view = View::new();

    loop {
        world.reset();
        view.reset();

        // clear the screen
        print!("\x1B[2J\x1B[H");
        std::io::stdout().flush()?;
        info!("Starting the game!");
        println!("{}", world.text.intro().description_style());

        let ending = run_session(&mut world, &mut view, &mut input)?;
        info!("session over: {ending:?}");
        view.push(ViewItem::GameOver {
            turns: world.player.turns,
        });
        view.flush(&world.text)?;

        let prompt = world.text.message(MessageKey::PlayAgain).prompt_style().to_string();
        let again = match input.read_line(&prompt)? {
            InputEvent::Line(answer) => !answer.trim_start().to_lowercase().starts_with('n'),
            InputEvent::Interrupted => true,
            InputEvent::Eof => false,
        };
        if !again {
            break;
        }
    }
    Ok(())
}
