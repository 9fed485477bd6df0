use std::process;

use chess_core::{Board, Coord};

fn main() {
    let board = Board::new();

    println!("{board}");
    println!();
    match board.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("failed to serialize board: {e}");
            process::exit(1);
        }
    }

    // Optional squares to inspect, e.g. `board_dump b1 e2 d8`.
    for arg in std::env::args().skip(1) {
        let at: Coord = match arg.parse() {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{arg}: {e}");
                process::exit(2);
            }
        };
        let Some(piece) = board.piece_at(at) else {
            println!("{at}: empty");
            continue;
        };
        println!("{at}: {}", piece.display_name());
        println!("  moves     {}", piece.moves());
        println!("  attacks   {}", piece.attacks());
        if let Ok(reach) = board.reachable_moves(at) {
            println!("  reachable {reach}");
        }
    }
}
