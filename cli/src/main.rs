use std::path::PathBuf;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use rand::Rng;

use hamekomi::{PuzzleSession, SaveStore, SessionHooks};
use hamekomi_core::game::ScatterArea;

#[derive(Parser)]
#[command(name = "hamekomi-cli", version, about = "Admin tools for hamekomi save slots")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Save {
        #[command(subcommand)]
        command: SaveCommand,
    },
    /// Scripted end-to-end session: scatter, drag every piece home, report
    /// cues and completion.
    Simulate {
        #[arg(long, env = "HAMEKOMI_SAVE_DIR", default_value = ".")]
        dir: PathBuf,
        #[arg(long, default_value_t = 12)]
        pieces: usize,
        #[arg(long)]
        seed: Option<u32>,
    },
}

#[derive(Subcommand)]
enum SaveCommand {
    Inspect {
        #[arg(long, env = "HAMEKOMI_SAVE_DIR", default_value = ".")]
        dir: PathBuf,
    },
    Clear {
        #[arg(long, env = "HAMEKOMI_SAVE_DIR", default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Save { command } => match command {
            SaveCommand::Inspect { dir } => {
                let store = SaveStore::new(dir);
                match store.peek() {
                    Some(data) => {
                        println!("save file: {}", store.path().display());
                        println!(
                            "pieces: {} ({} placed)",
                            data.placed_positions.len(),
                            data.placed_count()
                        );
                    }
                    None => println!("no save file at {}", store.path().display()),
                }
            }
            SaveCommand::Clear { dir } => {
                let store = SaveStore::new(dir);
                if store.exists() {
                    store.delete();
                    println!("cleared {}", store.path().display());
                } else {
                    println!("nothing to clear at {}", store.path().display());
                }
            }
        },
        Commands::Simulate { dir, pieces, seed } => {
            let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
            simulate(dir, pieces, seed);
        }
    }

    Ok(())
}

fn simulate(dir: PathBuf, pieces: usize, seed: u32) {
    let targets = grid_targets(pieces);
    let area = scatter_area_for(&targets);
    let hooks = SessionHooks {
        on_sound: Rc::new(|cue| println!("cue: {cue:?}")),
        on_win: Rc::new(|| println!("win indicator shown")),
        on_reload: Rc::new(|| {}),
    };
    let mut session =
        PuzzleSession::with_null_haptics(&targets, area, seed, SaveStore::new(dir), hooks);

    println!("simulating {pieces} pieces (seed {seed:#010x})");
    for id in 0..session.board().len() {
        if session.board().piece(id).map(|piece| piece.is_placed()) == Some(true) {
            continue;
        }
        let (tx, ty) = session.board().piece(id).expect("piece exists").target();
        let (cx, cy) = session.board().piece(id).expect("piece exists").position();
        log::debug!("dragging piece {id} from ({cx:.1}, {cy:.1}) to ({tx:.1}, {ty:.1})");
        session.begin_drag(id);
        session.drag_delta(id, tx - cx, ty - cy);
        session.end_drag(id);
    }

    println!(
        "done: {} pieces, game over = {}",
        session.board().len(),
        session.is_game_over()
    );
}

fn grid_targets(pieces: usize) -> Vec<(f32, f32)> {
    let cols = (pieces as f32).sqrt().ceil().max(1.0) as usize;
    (0..pieces)
        .map(|id| ((id % cols) as f32 * 100.0 + 40.0, (id / cols) as f32 * 100.0 + 40.0))
        .collect()
}

fn scatter_area_for(targets: &[(f32, f32)]) -> ScatterArea {
    let max_x = targets.iter().map(|(x, _)| *x).fold(0.0, f32::max);
    let max_y = targets.iter().map(|(_, y)| *y).fold(0.0, f32::max);
    ScatterArea::new(0.0, 0.0, max_x + 80.0, max_y + 80.0)
}
