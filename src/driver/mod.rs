//! CECP protocol driver.
//!
//! The driver owns the game state and stdout. It consumes one shared
//! input queue fed by two producers: a reader thread blocked on stdin and
//! at most one search worker. Both producers wait for a boolean token
//! after every publish (true = continue, false = stop), so the driver can
//! cancel either silently. Worker messages carry the epoch id (`sid`)
//! they were spawned with; messages from cancelled epochs are discarded
//! by id mismatch.

pub mod command;
pub mod output;
pub mod time;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, SyncSender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::board::{Move, Player, Position};
use crate::book::Book;
use crate::search::{self, Report, SearchState, Task, Variation};
use crate::sync::StopFlag;

use command::{parse_command, Command};

/// How the engine picks its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Full iterative-deepening search
    Best,
    /// Play the first legal move immediately
    First,
    /// Resign instead of moving
    Resign,
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best" => Ok(Strategy::Best),
            "first" => Ok(Strategy::First),
            "resign" => Ok(Strategy::Resign),
            other => Err(format!("unknown strategy '{other}'")),
        }
    }
}

/// Everything that can arrive on the driver's input queue.
#[derive(Debug)]
pub enum Input {
    /// A command line from the reader.
    Line(String),
    /// Standard input closed.
    Eof,
    /// Worker reports an improved principal variation.
    Mv(u64, Variation),
    /// Worker completed its search.
    NoMore(u64),
    /// Worker abandoned all previously published variations.
    Forget(u64),
    /// Worker invalidated one specific variation.
    Remove(u64, Variation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Applying user setup, never thinking
    Forced,
    /// In a game, waiting for the opponent
    Playing,
    /// A worker is searching since the given instant
    Thinking(Instant),
    /// Shutting down
    Terminated,
}

enum Outcome {
    Continue,
    Quit,
}

struct Worker {
    token: SyncSender<bool>,
    handle: JoinHandle<()>,
}

/// The protocol driver. Owns the game state; workers only ever see
/// immutable snapshots and the shared search tables.
pub struct Driver {
    history: Vec<Position>,
    plan: Option<Variation>,
    best: Option<Variation>,
    state: State,
    self_color: Player,
    sid: u64,
    search_state: Arc<Mutex<SearchState>>,
    stop: StopFlag,
    strategy: Strategy,
    post: bool,
    my_time_ms: i64,
    opp_time_ms: i64,
    budget_ms: u64,
    books: [Book; 2],
    tx: Sender<Input>,
    rx: Receiver<Input>,
    worker: Option<Worker>,
    reader_token: Option<SyncSender<bool>>,
    rng: ThreadRng,
}

/// Run the protocol loop until `quit` or end of input.
pub fn run(strategy: Strategy) {
    Driver::new(strategy).run();
}

impl Driver {
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        let (tx, rx) = mpsc::channel();
        let book_dir = Path::new("data");
        Driver {
            history: vec![Position::initial()],
            plan: None,
            best: None,
            state: State::Forced,
            self_color: Player::Black,
            sid: 0,
            search_state: Arc::new(Mutex::new(SearchState::new())),
            stop: StopFlag::new(),
            strategy,
            post: false,
            my_time_ms: 0,
            opp_time_ms: 0,
            budget_ms: 1000,
            books: [
                Book::open(book_dir, Player::White),
                Book::open(book_dir, Player::Black),
            ],
            tx,
            rx,
            worker: None,
            reader_token: None,
            rng: rand::thread_rng(),
        }
    }

    /// Spawn the reader and consume the queue until quit or EOF.
    pub fn run(&mut self) {
        self.reader_token = Some(spawn_reader(self.tx.clone()));
        while let Some(input) = self.next_input() {
            if !self.dispatch(input) {
                break;
            }
        }
        self.stop_worker();
        self.state = State::Terminated;
    }

    /// Take the next input. While thinking with a move in hand, polling
    /// is bounded by the remaining budget; running out commits the best
    /// variation so far. Without a reported move the driver waits
    /// indefinitely rather than resigning on the clock.
    fn next_input(&mut self) -> Option<Input> {
        loop {
            match self.state {
                State::Thinking(since) if self.best.is_some() => {
                    let budget = Duration::from_millis(self.budget_ms);
                    let elapsed = since.elapsed();
                    if elapsed >= budget {
                        self.commit_best();
                        continue;
                    }
                    match self.rx.recv_timeout(budget - elapsed) {
                        Ok(input) => return Some(input),
                        Err(RecvTimeoutError::Timeout) => self.commit_best(),
                        Err(RecvTimeoutError::Disconnected) => return None,
                    }
                }
                _ => return self.rx.recv().ok(),
            }
        }
    }

    /// Handle one input; false ends the loop.
    fn dispatch(&mut self, input: Input) -> bool {
        match input {
            Input::Line(text) => match self.handle_line(&text) {
                Outcome::Continue => {
                    self.reply_reader(true);
                    true
                }
                Outcome::Quit => {
                    self.reply_reader(false);
                    false
                }
            },
            Input::Eof => false,
            Input::Mv(sid, variation) if sid == self.sid => {
                self.handle_pv(variation);
                true
            }
            Input::NoMore(sid) if sid == self.sid => {
                if matches!(self.state, State::Thinking(_)) {
                    self.commit_best();
                }
                true
            }
            Input::Forget(sid) if sid == self.sid => {
                self.best = None;
                self.reply_worker(true);
                true
            }
            Input::Remove(sid, variation) if sid == self.sid => {
                if self.best.as_ref() == Some(&variation) {
                    self.best = None;
                }
                self.reply_worker(true);
                true
            }
            // Lagging message from a cancelled epoch
            _ => true,
        }
    }

    fn handle_line(&mut self, text: &str) -> Outcome {
        let Some(cmd) = parse_command(text) else {
            return Outcome::Continue;
        };

        if matches!(self.state, State::Thinking(_)) && !allowed_while_thinking(&cmd) {
            self.emit(&output::format_error("command not legal now", text.trim()));
            return Outcome::Continue;
        }
        self.handle_command(cmd)
    }

    /// Apply one parsed command to the game state.
    fn handle_command(&mut self, cmd: Command) -> Outcome {
        match cmd {
            Command::Ack | Command::Hard | Command::Easy | Command::Level => {}
            Command::Post => self.post = true,
            Command::NoPost => self.post = false,
            Command::Protover(version) => {
                if version >= 2 {
                    self.emit(&output::format_features());
                }
            }
            Command::New => {
                self.stop_worker();
                self.history = vec![Position::initial()];
                self.self_color = Player::Black;
                self.plan = None;
                self.best = None;
                self.search_state.lock().reset();
                self.state = State::Playing;
            }
            Command::Quit => {
                self.stop_worker();
                return Outcome::Quit;
            }
            Command::Force => {
                self.stop_worker();
                self.state = State::Forced;
            }
            Command::PlayOther => {
                self.state = State::Playing;
                self.self_color = self.current().turn().opponent();
            }
            Command::Go => {
                // Already thinking for the side to move: nothing to change
                if !matches!(self.state, State::Thinking(_)) {
                    self.state = State::Playing;
                    self.self_color = self.current().turn();
                    self.maybe_think();
                }
            }
            Command::SetBoard(fen) => {
                self.stop_worker();
                match Position::decode(&fen) {
                    Ok(pos) => {
                        self.history = vec![pos];
                        self.plan = None;
                        self.best = None;
                    }
                    Err(e) => self.emit(&output::format_error(&e.to_string(), &fen)),
                }
                self.state = State::Forced;
            }
            Command::UserMove(alg) => self.handle_user_move(&alg),
            Command::Result(_) => {
                self.stop_worker();
                self.state = State::Forced;
            }
            Command::Undo => {
                if matches!(self.state, State::Thinking(_)) {
                    self.stop_worker();
                    self.state = State::Forced;
                }
                if self.history.len() <= 1 {
                    self.emit(&output::format_error("command not legal now", "undo"));
                } else {
                    self.history.pop();
                    self.plan = None;
                }
            }
            Command::Remove => {
                if self.history.len() > 2 {
                    self.history.pop();
                    self.history.pop();
                    self.plan = None;
                } else {
                    self.emit(&output::format_error("command not legal now", "remove"));
                }
            }
            Command::Time(cs) => self.my_time_ms = (cs * 10) as i64,
            Command::OTime(cs) => self.opp_time_ms = (cs * 10) as i64,
            // The search runs a single worker; the core limit is accepted
            // and ignored
            Command::Cores(_) => {}
            Command::MoveNow => {
                if matches!(self.state, State::Thinking(_)) {
                    if self.best.is_some() {
                        self.commit_best();
                    } else {
                        // Nothing reported yet: commit the first PV that arrives
                        self.budget_ms = 0;
                    }
                }
            }
            Command::Unknown(text) => {
                self.emit(&output::format_error("unknown command", &text));
            }
        }
        Outcome::Continue
    }

    fn handle_user_move(&mut self, alg: &str) {
        let current = *self.current();
        match current.parse_move(alg) {
            Err(_) => self.emit(&output::format_illegal_move(alg)),
            Ok(mv) => {
                let next = current.apply_move(mv);
                self.verify_hash(&next);
                let _ = self.books[mv.player.index()].record(alg, &current.encode());
                // Keep the plan alive while the opponent follows it
                self.plan = match self.plan.take() {
                    Some(mut plan) if plan.moves.first() == Some(&mv) => {
                        plan.moves.remove(0);
                        if plan.moves.is_empty() {
                            None
                        } else {
                            Some(plan)
                        }
                    }
                    _ => None,
                };
                self.history.push(next);
                if !self.announce_terminal() {
                    self.maybe_think();
                }
            }
        }
    }

    /// A worker published an improved PV for the current epoch.
    fn handle_pv(&mut self, variation: Variation) {
        let State::Thinking(since) = self.state else {
            return;
        };
        let elapsed_ms = since.elapsed().as_millis() as u64;
        let accept = self.best.is_none() || elapsed_ms * 10 < self.budget_ms * 9;

        if accept {
            if self.post {
                let score = variation.score * self.self_color.factor();
                self.emit(&output::format_thinking(&variation, score, elapsed_ms / 10));
            }
            self.best = Some(match self.best.take() {
                None => variation,
                Some(best) => choose(best, variation, self.self_color, &mut self.rng),
            });
            self.reply_worker(true);
        } else {
            self.commit_best();
        }
    }

    /// Commit the best variation so far (cancelling any worker first), or
    /// fall back to the first legal move when nothing was ever reported.
    fn commit_best(&mut self) {
        self.stop_worker();
        match self.best.take() {
            Some(variation) => {
                let mv = variation.moves[0];
                let rest: Vec<Move> = variation.moves[1..].to_vec();
                let plan = if rest.is_empty() {
                    None
                } else {
                    Some(Variation {
                        moves: rest,
                        ..variation
                    })
                };
                self.commit_move(mv, plan);
            }
            None => {
                if let Some(&mv) = self.current().legal_moves().first() {
                    self.commit_move(mv, None);
                } else {
                    self.state = State::Playing;
                    self.announce_terminal();
                }
            }
        }
    }

    fn commit_move(&mut self, mv: Move, plan: Option<Variation>) {
        self.emit(&output::format_move(&mv));
        let next = self.current().apply_move(mv);
        self.verify_hash(&next);
        self.history.push(next);
        self.plan = plan;
        self.state = State::Playing;
        self.announce_terminal();
    }

    /// Start thinking, play instantly, or resign, depending on strategy.
    fn maybe_think(&mut self) {
        if self.state != State::Playing || self.current().turn() != self.self_color {
            return;
        }
        if self.announce_terminal() {
            return;
        }
        match self.strategy {
            Strategy::Resign => {
                self.emit("resign");
                self.state = State::Forced;
            }
            Strategy::First => {
                if let Some(&mv) = self.current().legal_moves().first() {
                    self.commit_move(mv, None);
                }
            }
            Strategy::Best => self.begin_thinking(),
        }
    }

    /// Spawn the search worker for a fresh epoch.
    fn begin_thinking(&mut self) {
        self.stop_worker();
        self.sid += 1;
        self.stop.reset();
        self.best = None;
        self.budget_ms = time::time_per_move(self.my_time_ms, self.opp_time_ms).max(1);

        let sid = self.sid;
        let task = Task {
            root: *self.current(),
            history: self.history[..self.history.len() - 1]
                .iter()
                .map(Position::hash)
                .collect(),
            plan: self.plan.clone(),
        };
        let (token_tx, token_rx) = mpsc::sync_channel::<bool>(1);
        let tx = self.tx.clone();
        let state = Arc::clone(&self.search_state);
        let stop = self.stop.clone();

        let handle = thread::Builder::new()
            .name("worker".to_string())
            .spawn(move || {
                let mut guard = state.lock();
                let mut cancelled = false;
                // A panicking search still ends in NoMore, so the driver
                // sees it as an ordinary end of search.
                let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    search::iterative_deepening(&task, &mut guard, &stop, &mut |report| {
                        let input = match report {
                            Report::Improved(variation) => Input::Mv(sid, variation),
                            Report::Forget => Input::Forget(sid),
                            Report::Removed(variation) => Input::Remove(sid, variation),
                        };
                        if tx.send(input).is_err() {
                            cancelled = true;
                            return false;
                        }
                        match token_rx.recv() {
                            Ok(true) => true,
                            _ => {
                                cancelled = true;
                                false
                            }
                        }
                    });
                }));
                // A FALSE may already be waiting if the driver cancelled
                // mid-depth; in that case nothing more may be published.
                if !cancelled && !matches!(token_rx.try_recv(), Ok(false)) {
                    let _ = tx.send(Input::NoMore(sid));
                }
            })
            .expect("failed to spawn search worker");

        self.worker = Some(Worker {
            token: token_tx,
            handle,
        });
        self.state = State::Thinking(Instant::now());
    }

    /// Cancel and reap the worker, if any, and retire its epoch.
    fn stop_worker(&mut self) {
        self.stop.stop();
        if let Some(worker) = self.worker.take() {
            let _ = worker.token.try_send(false);
            drop(worker.token);
            let _ = worker.handle.join();
            self.sid += 1;
        }
    }

    fn reply_worker(&mut self, go_on: bool) {
        if let Some(worker) = &self.worker {
            let _ = worker.token.send(go_on);
        }
    }

    fn reply_reader(&mut self, go_on: bool) {
        if let Some(token) = &self.reader_token {
            let _ = token.send(go_on);
        }
    }

    /// The current position (head of the history).
    fn current(&self) -> &Position {
        self.history.last().unwrap_or_else(|| unreachable!("history never empty"))
    }

    /// Announce mate, stalemate, the 50-move rule or repetition; returns
    /// true when the game is over.
    fn announce_terminal(&mut self) -> bool {
        match self.terminal() {
            Some((result, reason)) => {
                self.emit(&output::format_result(result, reason));
                self.state = State::Forced;
                true
            }
            None => false,
        }
    }

    fn terminal(&self) -> Option<(&'static str, &'static str)> {
        let pos = self.current();
        if pos.legal_moves().is_empty() {
            if pos.in_check(pos.turn()) {
                return Some(if pos.turn() == Player::White {
                    ("0-1", "Black mates")
                } else {
                    ("1-0", "White mates")
                });
            }
            return Some(("1/2-1/2", "Stalemate"));
        }
        if pos.halfmove_clock() >= 100 {
            return Some(("1/2-1/2", "50 moves"));
        }
        if self.history.iter().filter(|p| *p == pos).count() > 1 {
            return Some(("1/2-1/2", "repetition"));
        }
        None
    }

    /// Cross-check the incremental Zobrist hash; diagnose, never crash.
    fn verify_hash(&mut self, pos: &Position) {
        let incremental = pos.hash();
        let recomputed = pos.rehash();
        if incremental != recomputed {
            self.emit(&output::format_comment("ZOBRIST HASH FAILURE"));
            self.emit(&output::format_comment(&format!(
                "incremental {incremental:016x} recomputed {recomputed:016x} in {}",
                pos.encode()
            )));
        }
    }

    fn emit(&mut self, line: &str) {
        let mut stdout = io::stdout();
        writeln!(stdout, "{line}").ok();
        stdout.flush().ok();
    }
}

/// Which commands may interrupt a thinking engine. The listed ones cancel
/// the worker (or are harmless); everything else is rejected.
fn allowed_while_thinking(cmd: &Command) -> bool {
    matches!(
        cmd,
        Command::New
            | Command::Force
            | Command::SetBoard(_)
            | Command::Undo
            | Command::Quit
            | Command::MoveNow
            | Command::Go
            | Command::Result(_)
            | Command::Time(_)
            | Command::OTime(_)
            | Command::Cores(_)
            | Command::Level
            | Command::Post
            | Command::NoPost
            | Command::Hard
            | Command::Easy
            | Command::Ack
            | Command::Protover(_)
            | Command::Unknown(_)
    )
}

/// Pick between the reigning best variation and an incoming one.
///
/// Same first move: the deeper line replaces the old one. Nearly equal
/// scores: a coin flip keeps play varied. Otherwise White prefers the
/// higher score and Black the lower.
fn choose(best: Variation, incoming: Variation, engine: Player, rng: &mut impl Rng) -> Variation {
    if incoming.moves.first() == best.moves.first() {
        return incoming;
    }
    if (incoming.score - best.score).abs() <= 5 {
        return if rng.gen_bool(0.5) { incoming } else { best };
    }
    let prefer_incoming = match engine {
        Player::White => incoming.score > best.score,
        Player::Black => incoming.score < best.score,
    };
    if prefer_incoming {
        incoming
    } else {
        best
    }
}

/// The reader: blocks on stdin, publishes lines, and waits for the
/// continue token after each one.
fn spawn_reader(tx: Sender<Input>) -> SyncSender<bool> {
    let (token_tx, token_rx) = mpsc::sync_channel::<bool>(1);
    thread::Builder::new()
        .name("reader".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(Input::Line(line)).is_err() {
                    return;
                }
                match token_rx.recv() {
                    Ok(true) => {}
                    _ => return,
                }
            }
            let _ = tx.send(Input::Eof);
        })
        .expect("failed to spawn reader");
    token_tx
}
