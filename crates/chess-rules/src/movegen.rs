//! Legal move generation.
//!
//! Pseudo-legal moves are generated per piece and then filtered by making
//! each move and checking that the mover's king is not left attacked.

use chess_core::{Move, PieceKind, Square};

use crate::attacks::attacks_of;
use crate::status::is_attacked;
use crate::Board;

const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generates all legal moves for the side to move.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = pseudo_legal_moves(board);
    moves.retain(|m| keeps_king_safe(board, *m));
    moves
}

/// Returns true if the side to move has at least one legal move.
pub fn has_legal_move(board: &Board) -> bool {
    pseudo_legal_moves(board)
        .into_iter()
        .any(|m| keeps_king_safe(board, m))
}

fn keeps_king_safe(board: &Board, m: Move) -> bool {
    let us = board.turn();
    let after = make_move(board, m);
    match after.king_of(us) {
        Some(king) => !is_attacked(&after, king, us.opposite()),
        None => true,
    }
}

fn pseudo_legal_moves(board: &Board) -> Vec<Move> {
    let us = board.turn();
    let ours = board.by_color(us);
    let occupied = board.occupied();
    let mut moves = Vec::new();

    for from in ours {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        if piece.kind == PieceKind::Pawn {
            push_pawn_moves(board, from, &mut moves);
            continue;
        }
        for to in attacks_of(piece.kind, us, from, occupied) & !ours {
            moves.push(Move::normal(from, to));
        }
    }

    moves
}

fn push_pawn_moves(board: &Board, from: Square, moves: &mut Vec<Move>) {
    let us = board.turn();
    let occupied = board.occupied();
    let theirs = board.by_color(us.opposite());
    let promotion_rank = us.opposite().back_rank();
    let forward = us.forward();

    let mut targets = Vec::new();
    if let Some(one) = from.offset(0, forward).filter(|sq| !occupied.contains(*sq)) {
        targets.push(one);
        let start_rank = (us.back_rank() as i8 + forward) as u8;
        if from.rank() == start_rank {
            if let Some(two) = one.offset(0, forward).filter(|sq| !occupied.contains(*sq)) {
                targets.push(two);
            }
        }
    }
    targets.extend(attacks_of(PieceKind::Pawn, us, from, occupied) & theirs);

    for to in targets {
        if to.rank() == promotion_rank {
            for kind in PROMOTIONS {
                moves.push(Move::promoting(from, to, kind));
            }
        } else {
            moves.push(Move::normal(from, to));
        }
    }
}

/// Makes a move and returns the new board with the other side to move.
pub fn make_move(board: &Board, m: Move) -> Board {
    let mut after = board.clone();
    if let Some(mut piece) = after.remove_piece_at(m.from) {
        if let Some(kind) = m.promotion {
            piece.kind = kind;
        }
        after.set_piece_at(m.to, piece);
    }
    after.set_turn(board.turn().opposite());
    after
}
