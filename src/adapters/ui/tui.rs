//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Owns the view state machine for the session and drives it from user
//! actions: main menu, weekly bulletin flow, movement announcement flow,
//! plus the read-only library screens. Long-running generation calls are
//! shown with an indicatif spinner (the Loading sub-state).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{InquireError, Select, Text};
use tracing::warn;

use crate::adapters::media::load_image_as_data_uri;
use crate::domain::{CategoryType, DomainError, MovementArticleRequest};
use crate::ports::InputPort;
use crate::usecases::{
    ComposerService, Illustration, LibraryService, LoadState, MovementField, Screen, ViewState,
    WeeklyField,
};

const MENU_WEEKLY: &str = "Mỗi tuần một câu chuyện đẹp, một cuốn sách hay, một tấm gương sáng";
const MENU_MOVEMENTS: &str = "Các phong trào khác của Liên đội";
const MENU_LIBRARY: &str = "Thư viện nội dung giáo dục";
const MENU_DIRECTORY: &str = "Danh sách phong trào tiêu biểu";
const MENU_EXIT: &str = "Thoát";

const ACTION_PICK_IMAGE: &str = "Chọn ảnh buổi sinh hoạt";
const ACTION_EDIT: &str = "Chỉnh sửa một mục";
const ACTION_COPY: &str = "Sao chép bài viết";
const ACTION_RETRY: &str = "Thử lại";
const ACTION_BACK: &str = "Quay lại";

/// TUI adapter. Inquire prompts over the composer and library services.
pub struct TuiInputPort {
    composer: Arc<ComposerService>,
    library: Arc<LibraryService>,
}

impl TuiInputPort {
    pub fn new(composer: Arc<ComposerService>, library: Arc<LibraryService>) -> Self {
        Self { composer, library }
    }

    /// Select prompt; Esc and Ctrl-C both mean "leave this menu".
    fn select(prompt: &str, options: Vec<&'static str>) -> Result<Option<&'static str>, DomainError> {
        match Select::new(prompt, options).prompt() {
            Ok(choice) => Ok(Some(choice)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(DomainError::Input(e.to_string())),
        }
    }

    /// Text prompt with an initial value; Esc cancels.
    fn text(prompt: &str, initial: &str) -> Result<Option<String>, DomainError> {
        match Text::new(prompt).with_initial_value(initial).prompt() {
            Ok(value) => Ok(Some(value)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(DomainError::Input(e.to_string())),
        }
    }

    fn spinner(message: &'static str) -> ProgressBar {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.yellow} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(80));
        bar
    }

    fn notice(message: &str) {
        println!("⚠️  {message}");
    }

    // ── Weekly bulletin flow ────────────────────────────────────────────────

    async fn weekly_screen(&self, state: &mut ViewState) -> Result<(), DomainError> {
        // Snapshot the sub-state; the transitions below take `state` mutably.
        let result = match state.screen() {
            Screen::Weekly(flow) => flow.result.clone(),
            _ => return Ok(()),
        };

        match result {
            LoadState::Idle => {
                let choice = Self::select(
                    "PHONG TRÀO: Mỗi tuần một câu chuyện đẹp",
                    vec![ACTION_PICK_IMAGE, ACTION_BACK],
                )?;
                match choice {
                    Some(ACTION_PICK_IMAGE) => self.analyze_photo(state).await?,
                    _ => state.back_to_main(),
                }
            }
            LoadState::Failed(message) => {
                Self::notice(&message);
                let choice =
                    Self::select("Phân tích thất bại", vec![ACTION_PICK_IMAGE, ACTION_BACK])?;
                match choice {
                    Some(ACTION_PICK_IMAGE) => self.analyze_photo(state).await?,
                    _ => state.back_to_main(),
                }
            }
            LoadState::Loaded(_) => self.weekly_result_menu(state).await?,
            // The UI never parks on Loading: analyze_photo resolves it inline.
            LoadState::Loading => state.back_to_main(),
        }
        Ok(())
    }

    /// Pick an image file, set the preview, run the analysis.
    async fn analyze_photo(&self, state: &mut ViewState) -> Result<(), DomainError> {
        let Some(path) = Self::text("Đường dẫn tệp ảnh (JPG/PNG):", "")? else {
            return Ok(());
        };

        let data_uri = match load_image_as_data_uri(&path) {
            Ok(uri) => uri,
            Err(e) => {
                Self::notice(&e.to_string());
                return Ok(());
            }
        };

        // Preview first, synchronously; then the flow enters Loading and
        // re-submission is structurally impossible until it settles.
        if !state.weekly_image_selected(data_uri.clone()) {
            return Ok(());
        }
        println!("🖼  Đã chọn ảnh: {path}");

        let bar = Self::spinner("Đang phân tích nội dung hình ảnh...");
        let outcome = self.composer.analyze_weekly(&data_uri).await;
        bar.finish_and_clear();

        match outcome {
            Ok(analysis) => {
                state.weekly_loaded(analysis);
            }
            Err(e) => {
                warn!(error = %e, "weekly analysis failed");
                state.weekly_failed(&e);
            }
        }
        Ok(())
    }

    async fn weekly_result_menu(&self, state: &mut ViewState) -> Result<(), DomainError> {
        if let Some(text) = state.clipboard_text() {
            println!("\n{text}\n");
        }
        let choice = Self::select(
            "Bài viết đã sẵn sàng",
            vec![ACTION_EDIT, ACTION_COPY, ACTION_PICK_IMAGE, ACTION_BACK],
        )?;
        match choice {
            Some(ACTION_EDIT) => self.edit_weekly_field(state)?,
            Some(ACTION_COPY) => self.copy_current_post(state)?,
            Some(ACTION_PICK_IMAGE) => self.analyze_photo(state).await?,
            _ => state.back_to_main(),
        }
        Ok(())
    }

    fn edit_weekly_field(&self, state: &mut ViewState) -> Result<(), DomainError> {
        const FIELDS: [(&str, WeeklyField); 7] = [
            ("Tuần", WeeklyField::Week),
            ("Ngày", WeeklyField::Date),
            ("Câu chuyện", WeeklyField::Topic),
            ("Người trình bày", WeeklyField::Presenter),
            ("Bài học rút ra", WeeklyField::Lesson),
            ("Nhận xét", WeeklyField::Feedback),
            ("Thông điệp lan tỏa", WeeklyField::Spread),
        ];

        let labels: Vec<&'static str> = FIELDS.iter().map(|(label, _)| *label).collect();
        let Some(picked) = Self::select("Chỉnh sửa mục nào?", labels)? else {
            return Ok(());
        };
        let field = FIELDS
            .iter()
            .find(|(label, _)| *label == picked)
            .map(|(_, field)| *field)
            .unwrap_or(WeeklyField::Week);

        let current = match state.screen() {
            Screen::Weekly(flow) => flow.result.loaded().map(|a| match field {
                WeeklyField::Week => a.week.clone(),
                WeeklyField::Date => a.date.clone(),
                WeeklyField::Topic => a.topic.clone(),
                WeeklyField::Presenter => a.presenter.clone(),
                WeeklyField::Lesson => a.lesson.clone(),
                WeeklyField::Feedback => a.feedback.clone(),
                WeeklyField::Spread => a.spread.clone(),
            }),
            _ => None,
        }
        .unwrap_or_default();

        if let Some(value) = Self::text(picked, &current)? {
            state.edit_weekly_field(field, value);
        }
        Ok(())
    }

    // ── Movement announcement flow ──────────────────────────────────────────

    async fn movements_screen(&self, state: &mut ViewState) -> Result<(), DomainError> {
        let result = match state.screen() {
            Screen::Movements(flow) => flow.result.clone(),
            _ => return Ok(()),
        };

        match result {
            LoadState::Idle | LoadState::Failed(_) => {
                if let LoadState::Failed(message) = result {
                    Self::notice(&message);
                }
                self.movement_form(state).await?
            }
            LoadState::Loaded(_) => self.movement_result_menu(state).await?,
            LoadState::Loading => state.back_to_main(),
        }
        Ok(())
    }

    /// Fill the form and submit. Validation failures are surfaced as a
    /// blocking notice; the flow stays Idle and no service call is made.
    async fn movement_form(&self, state: &mut ViewState) -> Result<(), DomainError> {
        let initial = match state.screen() {
            Screen::Movements(flow) => flow.form.clone(),
            _ => MovementArticleRequest::default(),
        };

        let prompts = [
            ("Tên phong trào:", initial.name.clone()),
            ("Ngày tháng năm tổ chức:", initial.date.clone()),
            ("Địa điểm tổ chức:", initial.location.clone()),
            ("Số lượng tham gia:", initial.participants.clone()),
            ("Nội dung phong trào:", initial.content.clone()),
        ];
        let mut answers = Vec::with_capacity(prompts.len());
        for (label, value) in &prompts {
            match Self::text(label, value)? {
                Some(answer) => answers.push(answer),
                None => {
                    state.back_to_main();
                    return Ok(());
                }
            }
        }
        let [name, date, location, participants, content]: [String; 5] = answers
            .try_into()
            .map_err(|_| DomainError::Input("form answers out of shape".to_string()))?;
        let request = MovementArticleRequest {
            name,
            date,
            location,
            participants,
            content,
        };

        if let Err(e) = state.movement_submit(request.clone()) {
            Self::notice(&e.to_string());
            return Ok(());
        }

        let bar = Self::spinner("Đang viết bài tự động...");
        let outcome = self.composer.write_movement_article(&request).await;
        bar.finish_and_clear();

        match outcome {
            Ok(article) => {
                state.movement_loaded(article);
            }
            Err(e) => {
                warn!(error = %e, "movement generation failed");
                state.movement_failed(&e);
            }
        }
        Ok(())
    }

    async fn movement_result_menu(&self, state: &mut ViewState) -> Result<(), DomainError> {
        if let Some(text) = state.clipboard_text() {
            println!("\n{text}\n");
        }
        let choice = Self::select(
            "Bài viết đã sẵn sàng",
            vec![ACTION_EDIT, ACTION_COPY, ACTION_BACK],
        )?;
        match choice {
            Some(ACTION_EDIT) => self.edit_movement_field(state)?,
            Some(ACTION_COPY) => self.copy_current_post(state)?,
            _ => state.back_to_main(),
        }
        Ok(())
    }

    fn edit_movement_field(&self, state: &mut ViewState) -> Result<(), DomainError> {
        const FIELDS: [(&str, MovementField); 4] = [
            ("Tên phong trào", MovementField::Name),
            ("Giới thiệu", MovementField::Introduction),
            ("Nội dung chi tiết", MovementField::DetailedContent),
            ("Ý nghĩa", MovementField::Significance),
        ];

        let labels: Vec<&'static str> = FIELDS.iter().map(|(label, _)| *label).collect();
        let Some(picked) = Self::select("Chỉnh sửa mục nào?", labels)? else {
            return Ok(());
        };
        let field = FIELDS
            .iter()
            .find(|(label, _)| *label == picked)
            .map(|(_, field)| *field)
            .unwrap_or(MovementField::Name);

        let current = match state.screen() {
            Screen::Movements(flow) => flow.result.loaded().map(|a| match field {
                MovementField::Name => a.name.clone(),
                MovementField::Introduction => a.introduction.clone(),
                MovementField::DetailedContent => a.detailed_content.clone(),
                MovementField::Significance => a.significance.clone(),
            }),
            _ => None,
        }
        .unwrap_or_default();

        if let Some(value) = Self::text(picked, &current)? {
            state.edit_movement_field(field, value);
        }
        Ok(())
    }

    // ── Copy action ─────────────────────────────────────────────────────────

    fn copy_current_post(&self, state: &mut ViewState) -> Result<(), DomainError> {
        let Some(text) = state.clipboard_text() else {
            return Ok(());
        };
        match self.composer.copy_post(&text) {
            Ok(()) => {
                // The indicator expires on its own; the prompt loop keeps
                // accepting input immediately.
                state.mark_copied();
                println!("✅ Đã sao chép!");
            }
            Err(e) => Self::notice(&e.to_string()),
        }
        Ok(())
    }

    // ── Library screens (read-only) ─────────────────────────────────────────

    async fn library_screen(&self) -> Result<(), DomainError> {
        const CAT_STORY: &str = "Câu chuyện đẹp";
        const CAT_BOOK: &str = "Cuốn sách hay";
        const CAT_EXAMPLE: &str = "Tấm gương sáng";

        let Some(choice) = Self::select(
            "Thư viện nội dung",
            vec![CAT_STORY, CAT_BOOK, CAT_EXAMPLE, ACTION_BACK],
        )?
        else {
            return Ok(());
        };
        let category = match choice {
            CAT_STORY => CategoryType::Story,
            CAT_BOOK => CategoryType::Book,
            CAT_EXAMPLE => CategoryType::Example,
            _ => return Ok(()),
        };

        let bar = Self::spinner("Đang tải dữ liệu...");
        let outcome = self.library.fetch_content(category).await;
        bar.finish_and_clear();

        let content = match outcome {
            Ok(content) => content,
            Err(e) => {
                Self::notice(&e.to_string());
                return Ok(());
            }
        };

        println!("\n📖 {}\n", content.title);
        println!("{}\n", content.summary);
        println!("{}\n", content.content);
        if let Some(author) = &content.author_or_target {
            println!("✍️  {author}\n");
        }
        if let Some(lessons) = &content.lessons {
            println!("Bài học:");
            for lesson in lessons {
                println!("  - {lesson}");
            }
            println!();
        }

        let bar = Self::spinner("Đang tạo ảnh minh họa...");
        let outcome = self.library.illustrate(&content.image_prompt).await;
        bar.finish_and_clear();
        match outcome {
            Ok(Illustration::Saved(path)) => println!("🖼  Ảnh minh họa: {}", path.display()),
            Ok(Illustration::Remote(uri)) => println!("🖼  Ảnh minh họa: {uri}"),
            Err(e) => Self::notice(&e.to_string()),
        }
        Ok(())
    }

    async fn directory_screen(&self) -> Result<(), DomainError> {
        let bar = Self::spinner("Đang tải danh sách phong trào...");
        let outcome = self.library.fetch_movements().await;
        bar.finish_and_clear();

        match outcome {
            Ok(movements) => {
                for movement in &movements {
                    println!("\n🏆 {}", movement.name);
                    println!("   {}", movement.description);
                    if !movement.activities.is_empty() {
                        println!("   Hoạt động: {}", movement.activities.join(", "));
                    }
                    println!("   Ý nghĩa: {}", movement.impact);
                }
                println!();
            }
            Err(e) => Self::notice(&e.to_string()),
        }
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut state = ViewState::new();
        loop {
            match state.screen() {
                Screen::Main => {
                    let choice = Self::select(
                        "VIẾT BÀI ĐĂNG FANPAGE",
                        vec![
                            MENU_WEEKLY,
                            MENU_MOVEMENTS,
                            MENU_LIBRARY,
                            MENU_DIRECTORY,
                            MENU_EXIT,
                        ],
                    )?;
                    match choice {
                        Some(MENU_WEEKLY) => state.open_weekly(),
                        Some(MENU_MOVEMENTS) => state.open_movements(),
                        Some(MENU_LIBRARY) => self.library_screen().await?,
                        Some(MENU_DIRECTORY) => self.directory_screen().await?,
                        _ => return Ok(()),
                    }
                }
                Screen::Weekly(_) => self.weekly_screen(&mut state).await?,
                Screen::Movements(_) => self.movements_screen(&mut state).await?,
            }
        }
    }
}
