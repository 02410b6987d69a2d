use std::io::{self, Stdout};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::ai::{Agent, MinimaxAgent};
use crate::config::AppConfig;
use crate::game::{Difficulty, GameMode, GameOutcome, GameState, MoveError, Player};

const MODE_ITEMS: [GameMode; 3] = [
    GameMode::HumanVsHuman,
    GameMode::HumanVsAi,
    GameMode::AiVsAi,
];

const DIFFICULTY_ITEMS: [Difficulty; 3] = [
    Difficulty::Easy,
    Difficulty::Medium,
    Difficulty::Hard,
];

enum Screen {
    ModeSelect,
    DifficultySelect,
    Playing,
}

pub struct App {
    config: AppConfig,
    screen: Screen,
    menu_cursor: usize,
    mode: GameMode,
    difficulty: Difficulty,
    game_state: GameState,
    agents: [Option<Box<dyn Agent>>; 2],
    selected_column: usize,
    message: Option<String>,
    should_quit: bool,
    rng: StdRng,
}

impl App {
    /// Start at the mode-selection menu.
    pub fn new(config: AppConfig) -> Self {
        App {
            config,
            screen: Screen::ModeSelect,
            menu_cursor: 0,
            mode: GameMode::HumanVsHuman,
            difficulty: Difficulty::Medium,
            game_state: GameState::initial(),
            agents: [None, None],
            selected_column: 3,
            message: None,
            should_quit: false,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Skip the menus and jump straight into a game.
    pub fn with_mode(config: AppConfig, mode: GameMode, difficulty: Difficulty) -> Self {
        let mut app = Self::new(config);
        app.mode = mode;
        app.difficulty = difficulty;
        app.start_game();
        app
    }

    /// Main application loop
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.step_computer();
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::ModeSelect => self.handle_mode_key(key),
            Screen::DifficultySelect => self.handle_difficulty_key(key),
            Screen::Playing => self.handle_game_key(key),
        }
    }

    fn handle_mode_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => {
                self.menu_cursor = self.menu_cursor.checked_sub(1).unwrap_or(MODE_ITEMS.len() - 1)
            }
            KeyCode::Down => self.menu_cursor = (self.menu_cursor + 1) % MODE_ITEMS.len(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.mode = MODE_ITEMS[self.menu_cursor];
                if self.mode.uses_ai() {
                    self.menu_cursor = 1; // Medium
                    self.screen = Screen::DifficultySelect;
                } else {
                    self.start_game();
                }
            }
            _ => {}
        }
    }

    fn handle_difficulty_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                self.menu_cursor = 0;
                self.screen = Screen::ModeSelect;
            }
            KeyCode::Up => {
                self.menu_cursor = self
                    .menu_cursor
                    .checked_sub(1)
                    .unwrap_or(DIFFICULTY_ITEMS.len() - 1)
            }
            KeyCode::Down => self.menu_cursor = (self.menu_cursor + 1) % DIFFICULTY_ITEMS.len(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.difficulty = DIFFICULTY_ITEMS[self.menu_cursor];
                self.start_game();
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.human_to_move() {
                    self.drop_piece();
                } else if self.game_state.is_terminal() {
                    self.message = Some("Game over! Press 'r' to restart.".to_string());
                }
            }
            KeyCode::Char('r') => {
                self.start_game();
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('m') => {
                self.menu_cursor = 0;
                self.agents = [None, None];
                self.screen = Screen::ModeSelect;
            }
            _ => {}
        }
    }

    /// Reset the session for the configured mode and difficulty.
    fn start_game(&mut self) {
        let starter = if self.config.game.random_start && self.rng.random_bool(0.5) {
            Player::Yellow
        } else {
            Player::Red
        };
        self.game_state = GameState::with_starting_player(starter);
        self.selected_column = 3;
        self.message = None;

        let depth = self.difficulty.depth(&self.config.ai);
        let mode = self.mode;
        self.agents = [Player::Red, Player::Yellow].map(|player| {
            if mode.human_controls(player) {
                None
            } else {
                Some(Box::new(MinimaxAgent::new(depth)) as Box<dyn Agent>)
            }
        });
        self.screen = Screen::Playing;
    }

    fn human_to_move(&self) -> bool {
        !self.game_state.is_terminal()
            && self.mode.human_controls(self.game_state.current_player())
    }

    /// Let the computer take its turn, if it is one.
    fn step_computer(&mut self) {
        if !matches!(self.screen, Screen::Playing) || self.game_state.is_terminal() {
            return;
        }

        let idx = self.game_state.current_player().index();
        let column = match self.agents[idx].as_mut() {
            Some(agent) => agent.select_action(&self.game_state),
            None => return,
        };

        // Keep AI vs AI games watchable
        if self.mode == GameMode::AiVsAi {
            thread::sleep(Duration::from_millis(self.config.ai.move_delay_ms));
        }

        self.commit_move(column);
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        let column = self.selected_column;
        self.commit_move(column);
    }

    fn commit_move(&mut self, column: usize) {
        match self.game_state.apply_move_mut(column) {
            Ok(()) => {
                if let Some(outcome) = self.game_state.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => format!("{} wins!", player.name()),
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::ModeSelect => super::menu_view::render_mode_menu(frame, self.menu_cursor),
            Screen::DifficultySelect => {
                super::menu_view::render_difficulty_menu(frame, self.menu_cursor)
            }
            Screen::Playing => super::game_view::render(
                frame,
                &self.game_state,
                self.selected_column,
                &self.message,
                self.mode.label(),
                self.human_to_move(),
            ),
        }
    }
}
