//! Screen-flow state machine for one quiz run: intro, questions in order,
//! result. Arriving with a valid share code short-circuits straight to the
//! result screen; an invalid code falls back to the intro.

use thiserror::Error;
use tracing::{info, warn};

use crate::engine::bank::Bank;
use crate::engine::codec::{AnswerSheet, SelectError};

/// Where the session currently is. `Question` carries the zero-based index
/// of the question being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Question(usize),
    Result,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("no question is on screen")]
    NotInQuestion,
    #[error(transparent)]
    Select(#[from] SelectError),
}

/// One run of a quiz against a fixed bank.
#[derive(Debug)]
pub struct QuizSession<'a, B: Bank> {
    bank: &'a B,
    sheet: AnswerSheet,
    screen: Screen,
}

impl<'a, B: Bank> QuizSession<'a, B> {
    /// Opens a session. A decodable share code restores the full sheet and
    /// jumps to the result; anything else starts at the intro.
    pub fn open(bank: &'a B, share_code: Option<&str>) -> Self {
        if let Some(code) = share_code {
            match AnswerSheet::decode(bank, code) {
                Ok(sheet) => {
                    info!(code_len = code.len(), "restored session from share code");
                    return Self {
                        bank,
                        sheet,
                        screen: Screen::Result,
                    };
                }
                Err(error) => {
                    warn!(%error, "ignoring malformed share code");
                }
            }
        }

        Self {
            bank,
            sheet: AnswerSheet::new(),
            screen: Screen::Intro,
        }
    }

    /// Leaves the intro (or restarts a finished run) with a fresh sheet.
    pub fn start(&mut self) {
        self.sheet = AnswerSheet::new();
        self.screen = Screen::Question(0);
    }

    /// Records the choice for the question on screen and advances, landing on
    /// the result once the last question is answered.
    pub fn answer(&mut self, choice: usize) -> Result<(), FlowError> {
        let Screen::Question(index) = self.screen else {
            return Err(FlowError::NotInQuestion);
        };

        self.sheet.select(self.bank, choice)?;

        let next = index + 1;
        self.screen = if next < self.bank.question_count() {
            Screen::Question(next)
        } else {
            Screen::Result
        };
        Ok(())
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn sheet(&self) -> &AnswerSheet {
        &self.sheet
    }

    /// The share code for a finished run; `None` before the result screen.
    pub fn share_code(&self) -> Option<String> {
        match self.screen {
            Screen::Result => self.sheet.encode(self.bank).ok(),
            _ => None,
        }
    }
}
