//! Alpha-beta search with iterative deepening.
//!
//! The searcher is negamax over the legal move generator, threaded
//! through the transposition table. Move ordering tries the stored PV
//! move first, then captures by MVV-LVA, then killer moves by their
//! cutoff counts, then the rest. Iterative deepening republishes an
//! improving `Variation` after every completed depth and honors the stop
//! hint cooperatively; the publish callback's return value is the
//! continue/stop token of the worker rendezvous.

use std::collections::HashMap;

use crate::board::{evaluate, Move, Piece, Position, MATE};
use crate::sync::StopFlag;
use crate::tt::{Bound, Transposition, TranspositionTable};

/// Iterative deepening never goes past this depth.
pub const MAX_DEPTH: u32 = 64;

/// Window bound strictly outside every reachable score.
const INFINITY: i32 = 0x10000;

/// Quiescence looks at capture chains at most this long.
const QUIESCENCE_DEPTH: u32 = 6;

const PV_SCORE: i32 = 1 << 20;
const CAPTURE_SCORE: i32 = 1 << 16;

/// A principal variation: the line the searcher currently believes both
/// sides will follow. Scores are centipawns from White's viewpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variation {
    pub moves: Vec<Move>,
    pub score: i32,
    pub nodes: u64,
    pub depth: u32,
}

/// What the worker tells the driver between depths.
#[derive(Clone, Debug)]
pub enum Report {
    /// A completed depth produced this (possibly improved) variation.
    Improved(Variation),
    /// The plan handed down by the driver no longer applies.
    Forget,
    /// A previously published variation turned out to be wrong.
    Removed(Variation),
}

/// Search state that survives across epochs: the transposition table and
/// the killer move counts.
#[derive(Default)]
pub struct SearchState {
    pub tt: TranspositionTable,
    pub killers: HashMap<Move, u32>,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        SearchState {
            tt: TranspositionTable::new(),
            killers: HashMap::new(),
        }
    }

    /// Forget everything, e.g. on `new`.
    pub fn reset(&mut self) {
        self.tt.clear();
        self.killers.clear();
    }
}

/// Immutable snapshot the driver hands to a worker at spawn.
#[derive(Clone, Debug)]
pub struct Task {
    /// The position to search.
    pub root: Position,
    /// Hashes of all predecessor positions, for repetition detection.
    pub history: Vec<u64>,
    /// The continuation the driver expects, seeded into move ordering.
    pub plan: Option<Variation>,
}

struct Ctx<'a> {
    state: &'a mut SearchState,
    stop: &'a StopFlag,
    nodes: u64,
    path: Vec<u64>,
    aborted: bool,
}

impl Ctx<'_> {
    fn should_stop(&mut self) -> bool {
        if !self.aborted && self.stop.is_stopped() {
            self.aborted = true;
        }
        self.aborted
    }
}

/// Whether `m` takes a piece in `pos` (including en passant).
fn is_capture(pos: &Position, m: Move) -> bool {
    pos.piece_on(m.to).is_some() || (m.piece == Piece::Pawn && m.from.file() != m.to.file())
}

/// Most valuable victim, least valuable attacker.
fn mvv_lva(pos: &Position, m: Move) -> i32 {
    let victim = match pos.piece_on(m.to) {
        Some((_, piece)) => piece.value(),
        None => Piece::Pawn.value(), // en passant
    };
    victim * 10 - m.piece.value()
}

/// Order the legal moves of `pos`: stored PV move first, captures by
/// MVV-LVA, killers by count, then the rest. A stored move list from a
/// previous iteration is reused as the base order.
fn order_moves(pos: &Position, state: &SearchState) -> Vec<Move> {
    let entry = state.tt.probe(pos.hash());
    let pv_move = entry.and_then(|e| e.pv.first().copied());
    let mut moves = match entry {
        Some(e) if !e.moves.is_empty() => e.moves.clone(),
        _ => pos.legal_moves(),
    };

    let score = |m: &Move| -> i32 {
        if Some(*m) == pv_move {
            PV_SCORE
        } else if is_capture(pos, *m) {
            CAPTURE_SCORE + mvv_lva(pos, *m)
        } else {
            state.killers.get(m).map_or(0, |count| (*count as i32).min(0xFFF))
        }
    };
    moves.sort_by_key(|m| -score(m));
    moves
}

fn quiescence(ctx: &mut Ctx<'_>, pos: &Position, mut alpha: i32, beta: i32, depth: u32) -> i32 {
    ctx.nodes += 1;
    let stand = pos.turn().factor() * evaluate(pos);
    if depth == 0 || ctx.should_stop() || stand >= beta {
        return stand;
    }
    if stand > alpha {
        alpha = stand;
    }

    let mut captures: Vec<Move> = pos
        .legal_moves()
        .into_iter()
        .filter(|m| is_capture(pos, *m))
        .collect();
    captures.sort_by_key(|m| -mvv_lva(pos, *m));

    for m in captures {
        let score = -quiescence(ctx, &pos.apply_move(m), -beta, -alpha, depth - 1);
        if score >= beta {
            return score;
        }
        if score > alpha {
            alpha = score;
        }
    }
    alpha
}

fn alphabeta(ctx: &mut Ctx<'_>, pos: &Position, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
    ctx.nodes += 1;
    if ctx.should_stop() {
        return alpha;
    }

    // Any earlier occurrence of this position on the path is a draw
    if ctx.path.contains(&pos.hash()) {
        return 0;
    }
    if pos.halfmove_clock() >= 100 {
        return 0;
    }

    let alpha_orig = alpha;
    if let Some(entry) = ctx.state.tt.probe(pos.hash()) {
        if entry.depth >= depth {
            match entry.bound {
                Bound::Exact => return entry.score,
                Bound::Lower => alpha = alpha.max(entry.score),
                Bound::Upper => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return entry.score;
            }
        }
    }

    if depth == 0 {
        return quiescence(ctx, pos, alpha, beta, QUIESCENCE_DEPTH);
    }

    let ordered = order_moves(pos, ctx.state);
    if ordered.is_empty() {
        return if pos.in_check(pos.turn()) { -MATE } else { 0 };
    }

    let mut best_score = -INFINITY;
    let mut best_pv: Vec<Move> = Vec::new();

    ctx.path.push(pos.hash());
    for m in &ordered {
        let child = pos.apply_move(*m);
        let score = -alphabeta(ctx, &child, depth - 1, -beta, -alpha);
        if ctx.aborted {
            break;
        }
        if score > best_score {
            best_score = score;
            best_pv.clear();
            best_pv.push(*m);
            if let Some(entry) = ctx.state.tt.probe(child.hash()) {
                best_pv.extend(entry.pv.iter().copied());
            }
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            if !is_capture(pos, *m) {
                *ctx.state.killers.entry(*m).or_insert(0) += 1;
            }
            break;
        }
    }
    ctx.path.pop();

    if ctx.aborted {
        return best_score.max(alpha_orig);
    }

    let bound = if best_score <= alpha_orig {
        Bound::Upper
    } else if best_score >= beta {
        Bound::Lower
    } else {
        Bound::Exact
    };
    ctx.state.tt.store(
        pos.hash(),
        Transposition {
            depth,
            score: best_score,
            bound,
            pv: best_pv,
            moves: ordered,
        },
    );
    best_score
}

/// Run iterative deepening on the task, publishing an improving variation
/// after each completed depth. `publish` returning false is the FALSE
/// token: the search stops and publishes nothing further.
pub fn iterative_deepening(
    task: &Task,
    state: &mut SearchState,
    stop: &StopFlag,
    publish: &mut dyn FnMut(Report) -> bool,
) {
    let root = &task.root;
    let root_moves = root.legal_moves();
    if root_moves.is_empty() {
        return;
    }
    let factor = root.turn().factor();

    // Seed the root ordering from the continuation the driver expects.
    if let Some(plan) = &task.plan {
        match plan.moves.first() {
            Some(first) if root_moves.contains(first) => {
                state.tt.store(
                    root.hash(),
                    Transposition {
                        depth: 0,
                        score: plan.score * factor,
                        bound: Bound::Exact,
                        pv: plan.moves.clone(),
                        moves: Vec::new(),
                    },
                );
            }
            _ => {
                if !publish(Report::Forget) {
                    return;
                }
            }
        }
    }

    let mut ctx = Ctx {
        state,
        stop,
        nodes: 0,
        path: task.history.clone(),
        aborted: false,
    };
    let mut previous: Option<Variation> = None;

    for depth in 1..=MAX_DEPTH {
        let score = alphabeta(&mut ctx, root, depth, -INFINITY, INFINITY);
        if ctx.aborted {
            return;
        }
        let Some(pv) = ctx.state.tt.probe(root.hash()).map(|e| e.pv.clone()) else {
            return;
        };
        if pv.is_empty() {
            return;
        }
        let variation = Variation {
            moves: pv,
            score: factor * score,
            nodes: ctx.nodes,
            depth,
        };
        if let Some(prev) = &previous {
            if prev.moves.first() != variation.moves.first()
                && !publish(Report::Removed(prev.clone()))
            {
                return;
            }
        }
        if !publish(Report::Improved(variation.clone())) {
            return;
        }
        previous = Some(variation);
        // Nothing more to learn once mate is proven or the move is forced
        if score.abs() >= MATE || root_moves.len() == 1 {
            return;
        }
    }
}
