//! Text front end for the rules engine.
//!
//! Reads one command per line from stdin:
//! `e2 e4` (or `e2e4`), `moves e2`, `help`, `random`, `new`, `board`,
//! `history`, `pgn`, `fen`, `timeout w|b`, `quit`.
//!
//! Flags: `--ascii` renders FEN letters instead of glyphs, `--verbose`
//! prints engine info lines.

use std::io::{self, BufRead, Write};

use plum_chess_rules::engines::engine_greedy::GreedyEngine;
use plum_chess_rules::engines::engine_random::RandomEngine;
use plum_chess_rules::engines::engine_trait::{Engine, EngineOutput};
use plum_chess_rules::game_state::chess_types::Color;
use plum_chess_rules::game_state::game_state::GameState;
use plum_chess_rules::utils::algebraic::{algebraic_to_square, parse_coordinate_move, to_algebraic};
use plum_chess_rules::utils::pgn::write_pgn;
use plum_chess_rules::utils::render_game_state::{render_board, RenderConfig};

struct Session {
    game: GameState,
    render: RenderConfig,
    verbose: bool,
    random_engine: RandomEngine,
}

impl Session {
    fn show_board(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_board(self.game.board(), self.render))?;
        writeln!(out, "Turn: {}", self.game.side_to_move())?;
        let status = self.game.status().to_string();
        if !status.is_empty() {
            writeln!(out, "{status}")?;
        }
        Ok(())
    }

    fn print_engine_info(&self, output: &EngineOutput, out: &mut impl Write) -> io::Result<()> {
        if self.verbose {
            for line in &output.info_lines {
                writeln!(out, "{line}")?;
            }
        }
        Ok(())
    }

    /// Returns `false` when the session should end.
    fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(true);
        };

        match command {
            "quit" | "exit" => return Ok(false),
            "new" | "reset" => {
                self.game.reset();
                self.random_engine.new_game();
                self.show_board(out)?;
            }
            "board" => self.show_board(out)?,
            "fen" => writeln!(out, "{}", self.game.get_fen())?,
            "pgn" => write!(out, "{}", write_pgn(&self.game))?,
            "history" => {
                for record in self.game.history().records() {
                    writeln!(
                        out,
                        "{:>3}  {:<8} {}",
                        record.move_number,
                        record.white.as_deref().unwrap_or(""),
                        record.black.as_deref().unwrap_or("")
                    )?;
                }
            }
            "moves" => match words.next().map(algebraic_to_square) {
                Some(Ok(square)) => {
                    let targets: Vec<String> = self
                        .game
                        .legal_moves(square)
                        .into_iter()
                        .map(to_algebraic)
                        .collect();
                    writeln!(out, "{}", targets.join(" "))?;
                }
                Some(Err(e)) => writeln!(out, "{e}")?,
                None => writeln!(out, "usage: moves <square>")?,
            },
            "help" => match GreedyEngine::new().choose_move(&self.game) {
                Ok(output) => {
                    self.print_engine_info(&output, out)?;
                    match output.best_move {
                        Some(mv) => writeln!(out, "Suggested move: {mv}")?,
                        None => writeln!(out, "No moves available.")?,
                    }
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            "random" => match self.random_engine.choose_move(&self.game) {
                Ok(output) => {
                    self.print_engine_info(&output, out)?;
                    if let Some(mv) = output.best_move {
                        self.play(&format!("{}{}", mv.from, mv.to), out)?;
                    }
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            "timeout" => {
                let color = match words.next() {
                    Some("w") | Some("white") => Color::White,
                    Some("b") | Some("black") => Color::Black,
                    _ => {
                        writeln!(out, "usage: timeout w|b")?;
                        return Ok(true);
                    }
                };
                match self.game.time_expired(color) {
                    Ok(status) => writeln!(out, "{status}")?,
                    Err(e) => writeln!(out, "{e}")?,
                }
            }
            _ => self.play(line, out)?,
        }

        Ok(true)
    }

    fn play(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        let mv = match parse_coordinate_move(text) {
            Ok(mv) => mv,
            Err(e) => return writeln!(out, "{e}"),
        };

        match self.game.attempt_move(mv.from, mv.to) {
            Ok(outcome) => {
                if let Some(captured) = outcome.captured {
                    writeln!(out, "Captured {captured}")?;
                }
                self.show_board(out)
            }
            Err(rejection) => writeln!(out, "{rejection}"),
        }
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut session = Session {
        game: GameState::new_game(),
        render: RenderConfig {
            unicode: !args.iter().any(|a| a == "--ascii"),
            ..RenderConfig::default()
        },
        verbose: args.iter().any(|a| a == "--verbose" || a == "-v"),
        random_engine: RandomEngine::new(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    session.show_board(&mut out)?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if !session.handle(line.trim(), &mut out)? {
            break;
        }
        out.flush()?;
    }

    Ok(())
}
