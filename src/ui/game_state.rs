//! Game state management for the Gomoku GUI

use crate::engine::{EngineConfig, SearchKind};
use crate::game::Game;
use crate::{AIEngine, MoveResult, Player, Pos};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human against the alpha-beta engine
    HumanVsAi { human: Player },
    /// Alpha-beta engine (X) against plain minimax (O)
    AiVsAi,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::HumanVsAi { human: Player::X }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main GUI state around one [`Game`]
pub struct GameState {
    pub game: Game,
    pub mode: GameMode,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    // Set when the engine returned no move; cleared by undo
    ai_stalled: bool,

    // Search depth for every engine in this session
    depth: u8,
}

impl GameState {
    pub fn new(mode: GameMode, depth: u8) -> Self {
        info!(?mode, depth, "new game");
        Self {
            game: Game::new(),
            mode,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            ai_stalled: false,
            depth,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.depth);
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn current_turn(&self) -> Player {
        self.game.to_move()
    }

    /// Engine playing for `player`: alpha-beta against humans, and in AI vs
    /// AI alpha-beta for X and plain minimax for O.
    pub fn engine_for(&self, player: Player) -> AIEngine {
        let kind = match (self.mode, player) {
            (GameMode::AiVsAi, Player::O) => SearchKind::Minimax,
            _ => SearchKind::AlphaBeta,
        };
        AIEngine::with_config(EngineConfig {
            kind,
            depth: self.depth,
            ..EngineConfig::default()
        })
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::HumanVsAi { human } => self.game.to_move() == human,
            GameMode::AiVsAi => false,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.game.is_over() && !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// The engine found no move for this position and will not be restarted
    pub fn is_ai_stalled(&self) -> bool {
        self.ai_stalled
    }

    /// Attempt to place a stone for the human at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game.is_over() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|e| e.to_string())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), crate::MoveError> {
        self.game.play(pos)?;

        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();
        if !self.game.is_over() {
            self.move_timer.start();
        }
        Ok(())
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.ai_stalled {
            return;
        }

        let board = *self.game.board();
        let history = self.game.history().clone();
        let player = self.game.to_move();
        let engine = self.engine_for(player);

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board, player, &history);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI thread ended without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result.clone());
            self.move_timer.set_ai_time(elapsed);

            match move_result.best_move {
                Some(pos) => {
                    if let Err(e) = self.execute_move(pos) {
                        warn!(error = %e, "AI move rejected");
                        self.message = Some(e.to_string());
                    }
                }
                None => {
                    warn!("engine returned no move, pausing AI");
                    self.ai_stalled = true;
                    self.message = Some("AI could not find a move".to_string());
                }
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Suggest a move for the human, computed with the alpha-beta engine
    pub fn request_suggestion(&mut self) {
        if self.game.is_over() || self.is_ai_thinking() || !self.is_human_turn() {
            return;
        }

        let player = self.game.to_move();
        let engine = AIEngine::with_config(EngineConfig {
            depth: self.depth,
            ..EngineConfig::default()
        });
        let result = engine.get_move_with_stats(self.game.board(), player, self.game.history());

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo the last move, or the last human + AI pair against the AI
    pub fn undo(&mut self) {
        if self.game.history().is_empty() || self.is_ai_thinking() {
            return;
        }

        let undo_count = match self.mode {
            GameMode::HumanVsAi { human } if self.game.history().len() >= 2 => {
                // Land back on the human's turn
                if self.game.is_over() && self.game.to_move() == human {
                    1
                } else {
                    2
                }
            }
            _ => 1,
        };

        self.game.undo(undo_count);
        self.ai_stalled = false;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }
}
