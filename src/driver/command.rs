//! CECP command parsing.
//!
//! Commands match case-sensitively on a leading-whitespace-trimmed line.
//! Anything unrecognized becomes `Command::Unknown` so the driver can
//! report it without changing state.

/// Protocol commands recognized by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Acknowledged without any state change: `xboard`, `random`,
    /// `computer`, `accepted`, `rejected`
    Ack,
    /// Protocol version negotiation
    Protover(u32),
    /// Start a new game; engine plays Black
    New,
    /// Terminate cleanly
    Quit,
    /// Enter force mode (apply moves without thinking)
    Force,
    /// Play the side not on move
    PlayOther,
    /// Play the side to move and start thinking
    Go,
    /// Set position from FEN
    SetBoard(String),
    /// Opponent played a move in long algebraic notation
    UserMove(String),
    /// Game ended
    Result(String),
    /// Take back one half-move
    Undo,
    /// Take back a full move (two half-moves)
    Remove,
    /// Own clock in centiseconds
    Time(u64),
    /// Opponent clock in centiseconds
    OTime(u64),
    /// Worker core limit
    Cores(u32),
    /// Accepted but not acted on: `level`, `st`, `sd`, `nps`
    Level,
    /// Enable thinking output
    Post,
    /// Disable thinking output
    NoPost,
    /// Pondering toggles, acknowledged only
    Hard,
    Easy,
    /// Move immediately (`?`)
    MoveNow,
    /// Unrecognized command line
    Unknown(String),
}

/// Parse one input line. Empty lines parse to `None`.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim_start();
    let mut words = trimmed.split_whitespace();
    let keyword = words.next()?;

    let arg_u64 = |words: &mut std::str::SplitWhitespace<'_>| {
        words.next().and_then(|w| w.parse::<u64>().ok())
    };

    let cmd = match keyword {
        "xboard" | "random" | "computer" | "accepted" | "rejected" => Command::Ack,
        "protover" => match arg_u64(&mut words) {
            Some(version) => Command::Protover(version as u32),
            None => Command::Unknown(trimmed.trim_end().to_string()),
        },
        "new" => Command::New,
        "quit" => Command::Quit,
        "force" => Command::Force,
        "playother" => Command::PlayOther,
        "go" => Command::Go,
        "setboard" => Command::SetBoard(words.collect::<Vec<_>>().join(" ")),
        "usermove" => match words.next() {
            Some(mv) => Command::UserMove(mv.to_string()),
            None => Command::Unknown(trimmed.trim_end().to_string()),
        },
        "result" => Command::Result(words.collect::<Vec<_>>().join(" ")),
        "undo" => Command::Undo,
        "remove" => Command::Remove,
        "time" => match arg_u64(&mut words) {
            Some(cs) => Command::Time(cs),
            None => Command::Unknown(trimmed.trim_end().to_string()),
        },
        "otim" => match arg_u64(&mut words) {
            Some(cs) => Command::OTime(cs),
            None => Command::Unknown(trimmed.trim_end().to_string()),
        },
        "cores" => match arg_u64(&mut words) {
            Some(n) => Command::Cores(n as u32),
            None => Command::Unknown(trimmed.trim_end().to_string()),
        },
        "level" | "st" | "sd" | "nps" => Command::Level,
        "post" => Command::Post,
        "nopost" => Command::NoPost,
        "hard" => Command::Hard,
        "easy" => Command::Easy,
        "?" => Command::MoveNow,
        _ => Command::Unknown(trimmed.trim_end().to_string()),
    };
    Some(cmd)
}
