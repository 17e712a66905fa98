//! Interactive guess-the-animal session.
//!
//! ```text
//! Welcome -> RoundActive -> {RoundWon, RoundLost} -> ReplayPrompt -> {RoundActive, Closed}
//! ```
//!
//! Every screen comes from [`GameView`]; this module only decides which one to
//! play and reads keys. A lost connection in any phase skips straight to
//! closing the transport.

use tracing::{debug, info, Instrument};
use vt52_core::{default_words, GameRound, RoundStatus, WordPicker};
use vt52_input::{guess_from_byte, reply_from_byte, GuessKey, ReplyKey};
use vt52_term::{GameView, Script};
use vt52_transport::{ConnectionLost, Transport};
use vt52_types::{Pacing, SessionPhase};

use crate::report::{GameReport, SessionOutcome};
use crate::screen;

/// Per-session game settings.
#[derive(Debug, Clone)]
pub struct GameOptions {
    pub pacing: Pacing,
    /// Candidate targets, already validated and uppercased. Empty means the
    /// built-in animals.
    pub words: Vec<String>,
    pub seed: u32,
    pub view: GameView,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            pacing: Pacing::default(),
            words: default_words(),
            seed: 1,
            view: GameView::default(),
        }
    }
}

pub struct GameSession<T> {
    transport: T,
    pacing: Pacing,
    view: GameView,
    words: Vec<String>,
    picker: WordPicker,
    phase: SessionPhase,
    round: Option<GameRound>,
    rounds_won: u32,
    rounds_lost: u32,
}

impl<T: Transport> GameSession<T> {
    pub fn new(transport: T, options: GameOptions) -> Self {
        let words = if options.words.is_empty() {
            default_words()
        } else {
            options.words
        };
        Self {
            transport,
            pacing: options.pacing,
            view: options.view,
            words,
            picker: WordPicker::new(options.seed),
            phase: SessionPhase::Welcome,
            round: None,
            rounds_won: 0,
            rounds_lost: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Run the session to completion and close the transport.
    pub async fn run(mut self) -> GameReport {
        let span = tracing::info_span!("game", peer = %self.transport.peer());
        async move {
            let result = self.drive().await;
            match &result {
                Ok(()) => info!(
                    won = self.rounds_won,
                    lost = self.rounds_lost,
                    "session finished"
                ),
                Err(err) => info!(phase = %self.phase, error = %err, "connection lost"),
            }
            self.transport.close().await;

            GameReport {
                rounds_won: self.rounds_won,
                rounds_lost: self.rounds_lost,
                last_phase: self.phase,
                outcome: SessionOutcome::from_result(result),
            }
        }
        .instrument(span)
        .await
    }

    async fn drive(&mut self) -> Result<(), ConnectionLost> {
        while !self.phase.is_terminal() {
            let next = self.step().await?;
            debug!(from = %self.phase, to = %next, "phase change");
            self.phase = next;
        }
        Ok(())
    }

    async fn step(&mut self) -> Result<SessionPhase, ConnectionLost> {
        match self.phase {
            SessionPhase::Welcome => {
                let script = self.view.welcome();
                self.play(&script).await?;
                Ok(SessionPhase::RoundActive)
            }
            SessionPhase::RoundActive => self.play_round().await,
            SessionPhase::RoundWon => {
                self.rounds_won += 1;
                let script = self.view.won();
                self.play(&script).await?;
                Ok(SessionPhase::ReplayPrompt)
            }
            SessionPhase::RoundLost => {
                self.rounds_lost += 1;
                let script = match &self.round {
                    Some(round) => self.view.lost(round),
                    None => Script::new(),
                };
                self.play(&script).await?;
                Ok(SessionPhase::ReplayPrompt)
            }
            SessionPhase::ReplayPrompt => self.ask_replay().await,
            SessionPhase::Closed => Ok(SessionPhase::Closed),
        }
    }

    async fn play_round(&mut self) -> Result<SessionPhase, ConnectionLost> {
        let word = self.picker.pick(&self.words).unwrap_or("LION");
        let mut round = GameRound::new(word);
        debug!(word = round.target(), "round started");
        let intro = self.view.round_start();
        self.play(&intro).await?;

        let next = loop {
            let board = self.view.board(&round);
            self.play(&board).await?;
            if round.status() == RoundStatus::Won {
                break SessionPhase::RoundWon;
            }

            let prompt = self.view.guess_prompt();
            self.play(&prompt).await?;
            let letter = self.read_letter().await?;
            let echo = self.view.echo(letter);
            self.play(&echo).await?;

            let outcome = round.guess(letter);
            debug!(%letter, ?outcome, attempts_left = round.attempts_left(), "guess");
            if round.status() == RoundStatus::Lost {
                break SessionPhase::RoundLost;
            }
        };

        self.round = Some(round);
        Ok(next)
    }

    async fn ask_replay(&mut self) -> Result<SessionPhase, ConnectionLost> {
        let prompt = self.view.replay_prompt();
        self.play(&prompt).await?;

        loop {
            for byte in self.transport.receive(1).await? {
                match reply_from_byte(byte) {
                    ReplyKey::Yes => return Ok(SessionPhase::RoundActive),
                    ReplyKey::No => {
                        let farewell = self.view.farewell();
                        self.play(&farewell).await?;
                        return Ok(SessionPhase::Closed);
                    }
                    ReplyKey::Other => {}
                }
            }
        }
    }

    /// Block until an ASCII letter arrives. Empty reads and other bytes are
    /// ignored.
    async fn read_letter(&mut self) -> Result<char, ConnectionLost> {
        loop {
            for byte in self.transport.receive(1).await? {
                if let GuessKey::Letter(letter) = guess_from_byte(byte) {
                    return Ok(letter);
                }
            }
        }
    }

    async fn play(&mut self, script: &Script) -> Result<(), ConnectionLost> {
        screen::play(&mut self.transport, script, &self.pacing).await
    }
}
