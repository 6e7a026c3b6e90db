//! View state machine for the interactive session.
//!
//! Screens: main menu, weekly bulletin flow, movement announcement flow.
//! Each flow carries an explicit load sub-state; illegal transitions are
//! rejected (returned as `false` or an error), never silently merged.
//! Submission is structurally unreachable while a request is in flight, and
//! a result settling after the user left the screen is discarded.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::domain::post_text;
use crate::domain::{DomainError, MovementArticle, MovementArticleRequest, WeeklyAnalysis};

/// Wall-clock lifetime of the "copied" indicator.
pub const COPIED_RESET_SECS: u64 = 2;

/// Load sub-state of a flow's result pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Editable fields of a loaded weekly analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeeklyField {
    Week,
    Date,
    Topic,
    Presenter,
    Lesson,
    Feedback,
    Spread,
}

/// Editable fields of a loaded movement article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementField {
    Name,
    Introduction,
    DetailedContent,
    Significance,
}

/// Weekly bulletin flow. The preview is independent of the load state: it is
/// set synchronously when the image is picked, before analysis resolves.
#[derive(Debug, Clone, Default)]
pub struct WeeklyFlow {
    pub preview: Option<String>,
    pub result: LoadState<WeeklyAnalysis>,
    pub copied_at: Option<Instant>,
}

/// Movement announcement flow.
#[derive(Debug, Clone, Default)]
pub struct MovementFlow {
    pub form: MovementArticleRequest,
    pub result: LoadState<MovementArticle>,
    pub copied_at: Option<Instant>,
}

/// Current screen. Opening a flow always starts from a fresh value.
#[derive(Debug, Clone)]
pub enum Screen {
    Main,
    Weekly(WeeklyFlow),
    Movements(MovementFlow),
}

/// The session state machine. One instance per run, owned by the UI loop.
#[derive(Debug, Clone)]
pub struct ViewState {
    screen: Screen,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Main,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Full reset into the weekly flow. Prior result, preview and form state
    /// are dropped unconditionally.
    pub fn open_weekly(&mut self) {
        self.screen = Screen::Weekly(WeeklyFlow::default());
    }

    /// Full reset into the movements flow.
    pub fn open_movements(&mut self) {
        self.screen = Screen::Movements(MovementFlow::default());
    }

    /// Always permitted; always resets to no preview and no result.
    pub fn back_to_main(&mut self) {
        self.screen = Screen::Main;
    }

    // ── Weekly flow ─────────────────────────────────────────────────────────

    /// Image picked: set the preview immediately and enter Loading. Rejected
    /// while an analysis is already in flight.
    pub fn weekly_image_selected(&mut self, preview_data_uri: String) -> bool {
        match &mut self.screen {
            Screen::Weekly(flow) if !flow.result.is_loading() => {
                flow.preview = Some(preview_data_uri);
                flow.result = LoadState::Loading;
                flow.copied_at = None;
                true
            }
            Screen::Weekly(_) => {
                warn!("analysis already in flight, ignoring new image");
                false
            }
            _ => {
                debug!("image selected outside weekly flow, ignoring");
                false
            }
        }
    }

    /// Analysis settled with a result. Applied only if the weekly flow is
    /// still on screen and Loading; a late arrival is discarded.
    pub fn weekly_loaded(&mut self, analysis: WeeklyAnalysis) -> bool {
        match &mut self.screen {
            Screen::Weekly(flow) if flow.result.is_loading() => {
                flow.result = LoadState::Loaded(analysis);
                true
            }
            _ => {
                warn!("discarding weekly analysis for a screen the user left");
                false
            }
        }
    }

    /// Analysis settled with an error. Same screen guard as `weekly_loaded`.
    pub fn weekly_failed(&mut self, error: &DomainError) -> bool {
        match &mut self.screen {
            Screen::Weekly(flow) if flow.result.is_loading() => {
                flow.result = LoadState::Failed(error.to_string());
                true
            }
            _ => {
                warn!(%error, "discarding weekly failure for a screen the user left");
                false
            }
        }
    }

    /// Replace a single field of the loaded analysis. No re-validation, no
    /// re-generation. Rejected unless Loaded.
    pub fn edit_weekly_field(&mut self, field: WeeklyField, value: String) -> bool {
        let Screen::Weekly(flow) = &mut self.screen else {
            return false;
        };
        let LoadState::Loaded(analysis) = &mut flow.result else {
            return false;
        };
        match field {
            WeeklyField::Week => analysis.week = value,
            WeeklyField::Date => analysis.date = value,
            WeeklyField::Topic => analysis.topic = value,
            WeeklyField::Presenter => analysis.presenter = value,
            WeeklyField::Lesson => analysis.lesson = value,
            WeeklyField::Feedback => analysis.feedback = value,
            WeeklyField::Spread => analysis.spread = value,
        }
        true
    }

    // ── Movements flow ──────────────────────────────────────────────────────

    /// Submit the movement form. Reachable only from Idle or Failed; a
    /// missing mandatory field raises `Validation` and leaves the state
    /// untouched, with no service call made by the caller.
    pub fn movement_submit(&mut self, form: MovementArticleRequest) -> Result<(), DomainError> {
        let Screen::Movements(flow) = &mut self.screen else {
            return Err(DomainError::Input(
                "movement submit outside movements flow".to_string(),
            ));
        };
        match flow.result {
            LoadState::Idle | LoadState::Failed(_) => {}
            LoadState::Loading => {
                return Err(DomainError::Input(
                    "một yêu cầu đang được xử lý, vui lòng đợi".to_string(),
                ));
            }
            LoadState::Loaded(_) => {
                return Err(DomainError::Input(
                    "bài viết đã có; quay lại menu để viết bài mới".to_string(),
                ));
            }
        }
        form.validate()?;
        flow.form = form;
        flow.result = LoadState::Loading;
        flow.copied_at = None;
        Ok(())
    }

    pub fn movement_loaded(&mut self, article: MovementArticle) -> bool {
        match &mut self.screen {
            Screen::Movements(flow) if flow.result.is_loading() => {
                flow.result = LoadState::Loaded(article);
                true
            }
            _ => {
                warn!("discarding movement article for a screen the user left");
                false
            }
        }
    }

    pub fn movement_failed(&mut self, error: &DomainError) -> bool {
        match &mut self.screen {
            Screen::Movements(flow) if flow.result.is_loading() => {
                flow.result = LoadState::Failed(error.to_string());
                true
            }
            _ => {
                warn!(%error, "discarding movement failure for a screen the user left");
                false
            }
        }
    }

    pub fn edit_movement_field(&mut self, field: MovementField, value: String) -> bool {
        let Screen::Movements(flow) = &mut self.screen else {
            return false;
        };
        let LoadState::Loaded(article) = &mut flow.result else {
            return false;
        };
        match field {
            MovementField::Name => article.name = value,
            MovementField::Introduction => article.introduction = value,
            MovementField::DetailedContent => article.detailed_content = value,
            MovementField::Significance => article.significance = value,
        }
        true
    }

    // ── Copy action ─────────────────────────────────────────────────────────

    /// Post text of the currently loaded result, if any.
    pub fn clipboard_text(&self) -> Option<String> {
        match &self.screen {
            Screen::Weekly(flow) => flow.result.loaded().map(post_text::weekly_post),
            Screen::Movements(flow) => flow.result.loaded().map(post_text::movement_post),
            Screen::Main => None,
        }
    }

    /// Flip the transient "copied" indicator of the active flow. It expires
    /// on its own; the caller never has to wait on it.
    pub fn mark_copied(&mut self) {
        let now = Instant::now();
        match &mut self.screen {
            Screen::Weekly(flow) => flow.copied_at = Some(now),
            Screen::Movements(flow) => flow.copied_at = Some(now),
            Screen::Main => {}
        }
    }

    /// Whether the active flow's "copied" indicator is still live. Reverts
    /// after `COPIED_RESET_SECS` of wall clock, evaluated at read time.
    pub fn copied(&self) -> bool {
        let copied_at = match &self.screen {
            Screen::Weekly(flow) => flow.copied_at,
            Screen::Movements(flow) => flow.copied_at,
            Screen::Main => None,
        };
        copied_at
            .map(|at| at.elapsed() < Duration::from_secs(COPIED_RESET_SECS))
            .unwrap_or(false)
    }

}
