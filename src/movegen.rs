// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-piece attack and move generation. Pieces are plain values; the board they stand on is always passed in.
//!
//! Two different sets are computed for every piece:
//!  1. The attack set, the squares a piece threatens. This is what king safety is computed from. Sliding pieces
//!     include the first piece they run into, whatever its color, since a defended piece is still covered.
//!  2. The move set, the pseudo-legal destinations of a piece. These never include a friendly-occupied square, and
//!     are not yet filtered for king safety.
use crate::board::Board;
use crate::core::attacks::{self, KING_STEPS, KNIGHT_JUMPS};
use crate::core::*;

/// Walks every ray outward from `origin`, calling `visit` on each square reached along with its occupant. A ray ends
/// at the board edge or at the first occupied square, which is visited before the ray stops.
fn walk<F>(origin: Coordinate, rays: &[Vector], board: &Board, mut visit: F)
where
    F: FnMut(Coordinate, Option<Piece>),
{
    for &ray in rays {
        let mut target = origin + ray;
        while target.is_inside() {
            let occupant = board.piece_at(target);
            visit(target, occupant);
            if occupant.is_some() {
                break;
            }

            target = target + ray;
        }
    }
}

fn steps(origin: Coordinate, offsets: &[Vector]) -> impl Iterator<Item = Coordinate> + '_ {
    offsets
        .iter()
        .map(move |&offset| origin + offset)
        .filter(|target| target.is_inside())
}

/// Returns the set of squares threatened by `piece` on `board`.
pub fn attack_set(piece: &Piece, board: &Board) -> CoordSet {
    let origin = piece.coord;
    match piece.kind {
        PieceKind::King => steps(origin, &KING_STEPS).collect(),
        PieceKind::Knight => steps(origin, &KNIGHT_JUMPS).collect(),
        PieceKind::Pawn => steps(origin, &attacks::pawn_attack_steps(piece.color)).collect(),
        PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop => {
            let mut set = CoordSet::empty();
            walk(origin, attacks::rays(piece.kind), board, |target, _| {
                set.insert(target)
            });
            set
        }
    }
}

/// Pushes every pseudo-legal move of `piece` on `board` into `moves`.
pub fn move_set(piece: &Piece, board: &Board, moves: &mut Vec<Move>) {
    let origin = piece.coord;
    let is_open = |target: Coordinate| match board.piece_at(target) {
        Some(occupant) => occupant.color != piece.color,
        None => true,
    };

    match piece.kind {
        PieceKind::King | PieceKind::Knight => {
            let offsets: &[Vector] = if piece.kind == PieceKind::King {
                &KING_STEPS
            } else {
                &KNIGHT_JUMPS
            };

            for target in steps(origin, offsets).filter(|&target| is_open(target)) {
                moves.push(Move::new(origin, target));
            }
        }
        PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop => {
            walk(origin, attacks::rays(piece.kind), board, |target, occupant| {
                match occupant {
                    Some(occupant) if occupant.color == piece.color => {}
                    _ => moves.push(Move::new(origin, target)),
                }
            });
        }
        PieceKind::Pawn => generate_pawn_moves(piece, board, moves),
    }
}

/// Pawns only ever move forward onto empty squares: one step, or two from their starting rank when both squares in
/// front of them are empty. Their diagonal squares are threats, not moves.
fn generate_pawn_moves(piece: &Piece, board: &Board, moves: &mut Vec<Move>) {
    let origin = piece.coord;
    let up = piece.color.forward();
    let single = origin + up;
    if !single.is_inside() || board.piece_at(single).is_some() {
        return;
    }

    moves.push(Move::new(origin, single));
    if origin.y == piece.color.pawn_rank() {
        let double = single + up;
        if double.is_inside() && board.piece_at(double).is_none() {
            moves.push(Move::new(origin, double));
        }
    }
}

/// Pushes the pseudo-legal moves of every piece of color `us` into `moves`.
pub fn generate_moves(us: Color, board: &Board, moves: &mut Vec<Move>) {
    for piece in board.pieces().filter(|piece| piece.color == us) {
        move_set(&piece, board, moves);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::Position;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn lone(kind: PieceKind, color: Color, at: Coordinate) -> (Board, Piece) {
        let mut board = Board::new();
        let piece = Piece::new(kind, color, at);
        board.place(at, piece).unwrap();
        (board, piece)
    }

    fn destinations(piece: &Piece, board: &Board) -> HashSet<Coordinate> {
        let mut moves = Vec::new();
        move_set(piece, board, &mut moves);
        for mov in &moves {
            assert_eq!(piece.coord, mov.from());
        }

        let set: HashSet<_> = moves.iter().map(|m| m.to()).collect();
        assert_eq!(set.len(), moves.len(), "duplicate moves: {:?}", moves);
        set
    }

    fn assert_moves_generated(fen: &'static str, moves: &[Move]) {
        let pos = Position::from_fen(fen).unwrap();
        let mut mov_vec = Vec::new();
        generate_moves(pos.side_to_move(), pos.board(), &mut mov_vec);
        let generated: HashSet<_> = mov_vec.iter().collect();
        let expected: HashSet<_> = moves.iter().collect();
        if generated != expected {
            println!("{}", pos);
            println!("generated: {:?}", mov_vec);
            println!("expected:  {:?}", moves);
            panic!()
        }
    }

    fn assert_moves_contains(fen: &'static str, moves: &[Move]) {
        let pos = Position::from_fen(fen).unwrap();
        let mut mov_vec = Vec::new();
        generate_moves(pos.side_to_move(), pos.board(), &mut mov_vec);
        let hash: HashSet<_> = mov_vec.iter().collect();
        for mov in moves {
            if !hash.contains(mov) {
                println!("move list did not contain move: {}", mov);
                println!("{}", pos);
                panic!()
            }
        }
    }

    fn assert_moves_does_not_contain(fen: &'static str, moves: &[Move]) {
        let pos = Position::from_fen(fen).unwrap();
        let mut mov_vec = Vec::new();
        generate_moves(pos.side_to_move(), pos.board(), &mut mov_vec);
        let hash: HashSet<_> = mov_vec.iter().collect();
        for mov in moves {
            if hash.contains(mov) {
                println!("move list contained banned move: {}", mov);
                println!("{}", pos);
                panic!()
            }
        }
    }

    mod knights {
        use super::*;

        #[test]
        fn center_empty_board() {
            let (board, knight) = lone(PieceKind::Knight, Color::White, c(4, 4));
            let expected: HashSet<_> = vec![
                c(6, 5),
                c(6, 3),
                c(2, 5),
                c(2, 3),
                c(5, 6),
                c(3, 6),
                c(5, 2),
                c(3, 2),
            ]
            .into_iter()
            .collect();
            assert_eq!(expected, destinations(&knight, &board));
        }

        #[test]
        fn corner_clipped() {
            let (board, knight) = lone(PieceKind::Knight, Color::Black, c(0, 0));
            let expected: HashSet<_> = vec![c(1, 2), c(2, 1)].into_iter().collect();
            assert_eq!(expected, destinations(&knight, &board));
            assert_eq!(2, attack_set(&knight, &board).len());
        }

        #[test]
        fn friendly_blocks_enemy_captures() {
            assert_moves_generated(
                "8/8/8/8/8/2p5/3P4/1N6 w - - 0 1",
                &[
                    Move::new(c(1, 0), c(0, 2)),
                    Move::new(c(1, 0), c(2, 2)),
                    Move::new(c(3, 1), c(3, 2)),
                    Move::new(c(3, 1), c(3, 3)),
                ],
            );
        }

        #[test]
        fn attacks_include_friendly() {
            let pos = Position::from_fen("8/8/8/8/8/8/3P4/1N6 w - - 0 1").unwrap();
            let knight = pos.board().piece_at(c(1, 0)).unwrap();
            let attacks = attack_set(&knight, pos.board());
            assert!(attacks.contains(c(3, 1)));
            assert_eq!(3, attacks.len());
        }
    }

    mod kings {
        use super::*;

        #[test]
        fn center_empty_board() {
            let (board, king) = lone(PieceKind::King, Color::White, c(3, 3));
            assert_eq!(8, destinations(&king, &board).len());
            assert_eq!(8, attack_set(&king, &board).len());
        }

        #[test]
        fn edge_clipped() {
            let (board, king) = lone(PieceKind::King, Color::Black, c(7, 4));
            assert_eq!(5, destinations(&king, &board).len());
            assert_eq!(5, attack_set(&king, &board).len());
        }

        #[test]
        fn friendly_excluded_from_moves_not_attacks() {
            let pos = Position::from_fen("8/8/8/8/8/8/3Pp3/4K3 w - - 0 1").unwrap();
            let king = pos.board().piece_at(c(4, 0)).unwrap();
            let moves = destinations(&king, pos.board());
            assert!(!moves.contains(&c(3, 1)));
            assert!(moves.contains(&c(4, 1)));
            assert_eq!(4, moves.len());
            let attacks = attack_set(&king, pos.board());
            assert!(attacks.contains(c(3, 1)));
            assert_eq!(5, attacks.len());
        }
    }

    mod rooks {
        use super::*;

        #[test]
        fn corner_empty_board() {
            let (board, rook) = lone(PieceKind::Rook, Color::White, c(0, 0));
            let moves = destinations(&rook, &board);
            assert_eq!(14, moves.len());
            for i in 1..8 {
                assert!(moves.contains(&c(0, i)));
                assert!(moves.contains(&c(i, 0)));
            }
        }

        #[test]
        fn enemy_stops_ray_with_capture() {
            let (mut board, rook) = lone(PieceKind::Rook, Color::White, c(0, 0));
            board
                .place(c(0, 3), Piece::new(PieceKind::Pawn, Color::Black, c(0, 3)))
                .unwrap();
            let moves = destinations(&rook, &board);
            let vertical: HashSet<_> = moves.iter().filter(|t| t.x == 0).cloned().collect();
            let expected: HashSet<_> = vec![c(0, 1), c(0, 2), c(0, 3)].into_iter().collect();
            assert_eq!(expected, vertical);
            assert_eq!(10, moves.len());
        }

        #[test]
        fn friendly_stops_ray_without_capture() {
            let (mut board, rook) = lone(PieceKind::Rook, Color::White, c(0, 0));
            board
                .place(c(0, 3), Piece::new(PieceKind::Pawn, Color::White, c(0, 3)))
                .unwrap();
            let moves = destinations(&rook, &board);
            assert!(moves.contains(&c(0, 2)));
            assert!(!moves.contains(&c(0, 3)));
            assert!(!moves.contains(&c(0, 4)));

            let attacks = attack_set(&rook, &board);
            assert!(attacks.contains(c(0, 3)));
            assert!(!attacks.contains(c(0, 4)));
        }

        #[test]
        fn rays_restart_from_origin() {
            // Each ray is walked from the rook's own square, never from where the previous ray stopped.
            let (board, rook) = lone(PieceKind::Rook, Color::Black, c(3, 3));
            let moves = destinations(&rook, &board);
            assert_eq!(14, moves.len());
            assert!(moves.contains(&c(3, 7)));
            assert!(moves.contains(&c(0, 3)));
            assert!(moves.contains(&c(7, 3)));
            assert!(moves.contains(&c(3, 0)));
        }
    }

    mod bishops {
        use super::*;

        #[test]
        fn smoke_test() {
            let d4 = c(3, 3);
            assert_moves_generated(
                "8/8/8/8/3B4/8/8/8 w - - 0 1",
                &[
                    Move::new(d4, c(4, 4)),
                    Move::new(d4, c(5, 5)),
                    Move::new(d4, c(6, 6)),
                    Move::new(d4, c(7, 7)),
                    Move::new(d4, c(4, 2)),
                    Move::new(d4, c(5, 1)),
                    Move::new(d4, c(6, 0)),
                    Move::new(d4, c(2, 2)),
                    Move::new(d4, c(1, 1)),
                    Move::new(d4, c(0, 0)),
                    Move::new(d4, c(2, 4)),
                    Move::new(d4, c(1, 5)),
                    Move::new(d4, c(0, 6)),
                ],
            );
        }

        #[test]
        fn smoke_capture() {
            let d4 = c(3, 3);
            assert_moves_generated(
                "8/8/8/2p1p3/3B4/2p1p3/8/8 w - - 0 1",
                &[
                    Move::new(d4, c(4, 4)),
                    Move::new(d4, c(4, 2)),
                    Move::new(d4, c(2, 4)),
                    Move::new(d4, c(2, 2)),
                ],
            );
        }
    }

    mod queens {
        use super::*;

        #[test]
        fn center_empty_board() {
            let (board, queen) = lone(PieceKind::Queen, Color::White, c(3, 3));
            assert_eq!(27, destinations(&queen, &board).len());
            assert_eq!(27, attack_set(&queen, &board).len());
        }

        #[test]
        fn boxed_in_by_friends() {
            let pos = Position::from_fen("8/8/8/2PPP3/2PQP3/2PPP3/8/8 w - - 0 1").unwrap();
            let queen = pos.board().piece_at(c(3, 3)).unwrap();
            assert!(destinations(&queen, pos.board()).is_empty());
            assert_eq!(8, attack_set(&queen, pos.board()).len());
        }
    }

    mod pawns {
        use super::*;

        #[test]
        fn double_step_from_home_rank() {
            for x in 0..8 {
                let (board, pawn) = lone(PieceKind::Pawn, Color::White, c(x, 1));
                let expected: HashSet<_> = vec![c(x, 2), c(x, 3)].into_iter().collect();
                assert_eq!(expected, destinations(&pawn, &board));
            }
        }

        #[test]
        fn single_step_after_leaving_home() {
            let (board, pawn) = lone(PieceKind::Pawn, Color::White, c(3, 2));
            let expected: HashSet<_> = vec![c(3, 3)].into_iter().collect();
            assert_eq!(expected, destinations(&pawn, &board));
        }

        #[test]
        fn black_moves_down() {
            let (board, pawn) = lone(PieceKind::Pawn, Color::Black, c(5, 6));
            let expected: HashSet<_> = vec![c(5, 5), c(5, 4)].into_iter().collect();
            assert_eq!(expected, destinations(&pawn, &board));
        }

        #[test]
        fn no_double_pawn_push_when_blocked() {
            assert_moves_does_not_contain(
                "8/8/8/8/8/4p3/4P3/8 w - - 0 1",
                &[
                    Move::new(c(4, 1), c(4, 2)),
                    Move::new(c(4, 1), c(4, 3)),
                ],
            );
        }

        #[test]
        fn double_push_blocked_on_far_square() {
            assert_moves_generated(
                "8/8/8/8/4p3/8/4P3/8 w - - 0 1",
                &[Move::new(c(4, 1), c(4, 2))],
            );
        }

        #[test]
        fn no_diagonal_moves() {
            assert_moves_generated(
                "8/8/8/8/8/3p1p2/4P3/8 w - - 0 1",
                &[
                    Move::new(c(4, 1), c(4, 2)),
                    Move::new(c(4, 1), c(4, 3)),
                ],
            );
        }

        #[test]
        fn black_home_rank_double_push() {
            assert_moves_contains(
                "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1",
                &[
                    Move::new(c(0, 6), c(0, 4)),
                    Move::new(c(4, 6), c(4, 5)),
                    Move::new(c(4, 6), c(4, 4)),
                    Move::new(c(6, 7), c(5, 5)),
                ],
            );
        }

        #[test]
        fn last_rank_is_stuck() {
            let (board, pawn) = lone(PieceKind::Pawn, Color::White, c(2, 7));
            assert!(destinations(&pawn, &board).is_empty());
        }

        #[test]
        fn attacks_diagonally_forward() {
            let (board, pawn) = lone(PieceKind::Pawn, Color::White, c(4, 4));
            let expected: CoordSet = vec![c(5, 5), c(3, 5)].into_iter().collect();
            assert_eq!(expected, attack_set(&pawn, &board));

            let (board, pawn) = lone(PieceKind::Pawn, Color::Black, c(0, 4));
            let expected: CoordSet = vec![c(1, 3)].into_iter().collect();
            assert_eq!(expected, attack_set(&pawn, &board));
        }
    }

    #[test]
    fn start_position_moves() {
        let pos = Position::from_start_position();
        let mut moves = Vec::new();
        generate_moves(Color::White, pos.board(), &mut moves);
        assert_eq!(20, moves.len());
        moves.clear();
        generate_moves(Color::Black, pos.board(), &mut moves);
        assert_eq!(20, moves.len());
    }
}
