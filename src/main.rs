use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::error::MoveError;
use connect_four::game::{GameOutcome, GameSession, Player, SideControl, COLS};

#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax engine")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth override, in plies.
    #[arg(long)]
    depth: Option<usize>,

    /// Which side the engine plays.
    #[arg(long, value_enum)]
    side: Option<SideArg>,

    /// Watch an engine vs engine game instead of playing.
    #[arg(long)]
    auto: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum SideArg {
    Red,
    Yellow,
}

impl From<SideArg> for Player {
    fn from(side: SideArg) -> Player {
        match side {
            SideArg::Red => Player::Red,
            SideArg::Yellow => Player::Yellow,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_or_default(path)?,
        None => AppConfig::default(),
    };
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(side) = cli.side {
        config.session.automated_side = side.into();
    }
    config.validate()?;

    let automated = SideControl::Automated {
        depth: config.search.depth,
    };
    let (red, yellow) = if cli.auto {
        (automated, automated)
    } else if config.session.automated_side == Player::Red {
        (automated, SideControl::Human)
    } else {
        (SideControl::Human, automated)
    };

    let mut session = GameSession::new(red, yellow);
    loop {
        play_game(&mut session)?;
        if cli.auto || !prompt_yes_no("Play again? [y/N] ")? {
            return Ok(());
        }
        session.reset();
    }
}

fn play_game(session: &mut GameSession) -> anyhow::Result<()> {
    while !session.is_terminal() {
        println!("\n{}\n", session.board());
        let side = session.current_player();
        if session.is_automated_turn() {
            let result = session.automated_move().context("engine move failed")?;
            println!("{side} plays column {}", result.column);
        } else {
            let column = prompt_column(side)?;
            match session.human_move(column) {
                Ok(_) => {}
                Err(err @ (MoveError::InvalidColumn(_) | MoveError::ColumnFull(_))) => {
                    println!("Invalid move: {err}");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    println!("\n{}\n", session.board());
    match session.outcome() {
        GameOutcome::Win(side) => println!("{side} wins!"),
        GameOutcome::Draw => println!("It's a draw."),
        GameOutcome::Ongoing => unreachable!("loop exits only on a terminal outcome"),
    }
    Ok(())
}

fn prompt_column(side: Player) -> anyhow::Result<usize> {
    loop {
        print!("{side} to move, column (0-{}): ", COLS - 1);
        io::stdout().flush()?;
        match read_line()?.trim().parse::<usize>() {
            Ok(column) => return Ok(column),
            Err(_) => println!("Enter a column number."),
        }
    }
}

fn prompt_yes_no(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    Ok(matches!(read_line()?.trim(), "y" | "Y" | "yes"))
}

fn read_line() -> anyhow::Result<String> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("stdin closed");
    }
    Ok(line)
}
