//! Main application orchestrator.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, info};

use crate::application::services::{Navigator, NoticeQueue};
use crate::application::use_cases::{CreatePostUseCase, LoginUseCase, UpdateProfileUseCase};
use crate::domain::ports::{AuthPort, CatalogPort};
use crate::domain::{DirectMessageParams, Notice, NoticeFollowUp, ProfileStore, Route};
use crate::infrastructure::config::{AppConfig, UiConfig};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    AuthMode, ConfirmDialog, ConfirmOutcome, ConversationAction, ConversationScreen,
    CreatePostAction, CreatePostScreen, DirectMessageAction, DirectMessageScreen,
    EditProfileAction, EditProfileScreen, HomeAction, HomeScreen, LoginAction, LoginScreen,
    NoticeDialog, ProfileAction, ProfileScreen,
};

enum CurrentScreen {
    Login(LoginScreen),
    Home(HomeScreen),
    Conversations(ConversationScreen),
    DirectMessage(DirectMessageScreen),
    Profile(ProfileScreen),
    CreatePost(CreatePostScreen),
    EditProfile(EditProfileScreen),
}

enum ScreenAction {
    Login(LoginAction),
    Home(HomeAction),
    Conversations(ConversationAction),
    DirectMessage(DirectMessageAction),
    Profile(ProfileAction),
    CreatePost(CreatePostAction),
    EditProfile(EditProfileAction),
}

pub struct App {
    running: bool,
    navigator: Navigator,
    screen: CurrentScreen,
    notices: NoticeQueue,
    confirm: Option<ConfirmDialog>,
    profile: ProfileStore,
    catalog: Arc<dyn CatalogPort>,
    login_use_case: LoginUseCase,
    create_post_use_case: CreatePostUseCase,
    update_profile_use_case: UpdateProfileUseCase,
    theme: Theme,
    ui: UiConfig,
}

impl App {
    #[must_use]
    pub fn new(
        config: &AppConfig,
        auth_port: Arc<dyn AuthPort>,
        catalog: Arc<dyn CatalogPort>,
    ) -> Self {
        let theme = Theme::new(&config.theme.accent_color);
        let profile = ProfileStore::new(catalog.default_profile());

        Self {
            running: true,
            navigator: Navigator::new(),
            screen: CurrentScreen::Login(LoginScreen::new(theme)),
            notices: NoticeQueue::new(),
            confirm: None,
            update_profile_use_case: UpdateProfileUseCase::new(profile.clone()),
            profile,
            catalog,
            login_use_case: LoginUseCase::new(auth_port),
            create_post_use_case: CreatePostUseCase::new(),
            theme,
            ui: config.ui.clone(),
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(route = %self.navigator.current(), "Application started");
        self.run_event_loop(terminal).await?;
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick_interval = interval(self.ui.tick_rate());
        let mut last_tick = Instant::now();

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                _ = tick_interval.tick() => {
                    let now = Instant::now();
                    self.tick(now.duration_since(last_tick));
                    last_tick = now;
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.running = false;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn mount(&self, route: &Route) -> CurrentScreen {
        let theme = self.theme;
        match route {
            Route::Login => CurrentScreen::Login(LoginScreen::new(theme)),
            Route::Home => CurrentScreen::Home(HomeScreen::new(
                self.catalog.skill_offers(),
                self.profile.name(),
                self.ui.refresh_delay(),
                theme,
            )),
            Route::ConversationList => CurrentScreen::Conversations(ConversationScreen::new(
                self.catalog.conversations(),
                theme,
            )),
            Route::DirectMessage(params) => CurrentScreen::DirectMessage(
                DirectMessageScreen::new(params, self.catalog.chat_history(), theme),
            ),
            Route::Profile => CurrentScreen::Profile(ProfileScreen::new(&self.profile, theme)),
            Route::CreatePost => CurrentScreen::CreatePost(CreatePostScreen::new(theme)),
            Route::EditProfile => CurrentScreen::EditProfile(EditProfileScreen::new(
                &self.profile.snapshot(),
                self.ui.banner_fade(),
                theme,
            )),
        }
    }

    fn navigate(&mut self, route: Route) {
        self.screen = self.mount(&route);
        self.navigator.navigate(route);
    }

    fn go_back(&mut self) {
        if self.navigator.go_back() {
            self.screen = self.mount(self.navigator.current());
        }
    }

    fn logout(&mut self) {
        info!("User logged out");
        self.notices.clear();
        self.navigator.reset(Route::Login);
        self.screen = self.mount(&Route::Login);
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        if self.notices.is_blocking() {
            if EventHandler::is_submit_event(&key) || EventHandler::is_back_event(&key) {
                if let Some(NoticeFollowUp::GoBack) = self.notices.dismiss() {
                    self.go_back();
                }
            }
            return EventResult::Continue;
        }

        if let Some(dialog) = &mut self.confirm {
            match dialog.handle_key(key) {
                ConfirmOutcome::Pending => {}
                ConfirmOutcome::Cancelled => self.confirm = None,
                ConfirmOutcome::Confirmed => {
                    self.confirm = None;
                    self.logout();
                }
            }
            return EventResult::Continue;
        }

        let action = match &mut self.screen {
            CurrentScreen::Login(screen) => ScreenAction::Login(screen.handle_key(key)),
            CurrentScreen::Home(screen) => ScreenAction::Home(screen.handle_key(key)),
            CurrentScreen::Conversations(screen) => {
                ScreenAction::Conversations(screen.handle_key(key))
            }
            CurrentScreen::DirectMessage(screen) => {
                ScreenAction::DirectMessage(screen.handle_key(key))
            }
            CurrentScreen::Profile(screen) => ScreenAction::Profile(screen.handle_key(key)),
            CurrentScreen::CreatePost(screen) => ScreenAction::CreatePost(screen.handle_key(key)),
            CurrentScreen::EditProfile(screen) => {
                ScreenAction::EditProfile(screen.handle_key(key))
            }
        };

        self.apply(action)
    }

    fn apply(&mut self, action: ScreenAction) -> EventResult {
        match action {
            ScreenAction::Login(LoginAction::Submit) => self.submit_auth(),
            ScreenAction::Login(LoginAction::Quit) => return EventResult::Exit,
            ScreenAction::Home(action) => match action {
                HomeAction::Connect(user_name) => {
                    debug!(user = %user_name, "Connect requested");
                    self.navigate(Route::DirectMessage(DirectMessageParams::new_chat(
                        user_name,
                    )));
                }
                HomeAction::CreatePost => self.navigate(Route::CreatePost),
                HomeAction::Conversations => self.navigate(Route::ConversationList),
                HomeAction::Profile => self.navigate(Route::Profile),
                HomeAction::Back => self.go_back(),
                HomeAction::None => {}
            },
            ScreenAction::Conversations(ConversationAction::Open(user_name)) => {
                self.navigate(Route::DirectMessage(DirectMessageParams::existing_chat(
                    user_name,
                )));
            }
            ScreenAction::Conversations(ConversationAction::Back)
            | ScreenAction::DirectMessage(DirectMessageAction::Back)
            | ScreenAction::Profile(ProfileAction::Back)
            | ScreenAction::CreatePost(CreatePostAction::Back)
            | ScreenAction::EditProfile(EditProfileAction::Back) => self.go_back(),
            ScreenAction::Profile(ProfileAction::Edit) => self.navigate(Route::EditProfile),
            ScreenAction::Profile(ProfileAction::Logout) => {
                self.confirm = Some(ConfirmDialog::logout());
            }
            ScreenAction::CreatePost(CreatePostAction::Submit) => self.submit_post(),
            ScreenAction::EditProfile(EditProfileAction::Save) => self.save_profile(),
            ScreenAction::EditProfile(EditProfileAction::ChangePicture) => {
                self.notices.info(
                    "Feature Coming Soon",
                    "Change profile picture functionality is a work in progress.",
                );
            }
            ScreenAction::Login(LoginAction::None)
            | ScreenAction::Conversations(ConversationAction::None)
            | ScreenAction::DirectMessage(DirectMessageAction::None)
            | ScreenAction::Profile(ProfileAction::None)
            | ScreenAction::CreatePost(CreatePostAction::None)
            | ScreenAction::EditProfile(EditProfileAction::None) => {}
        }

        EventResult::Continue
    }

    fn submit_auth(&mut self) {
        let CurrentScreen::Login(screen) = &mut self.screen else {
            return;
        };

        match screen.mode() {
            AuthMode::Login => {
                let request = screen.login_request();
                match self.login_use_case.login(&request) {
                    Ok(()) => {
                        self.notices.success("Success", "Login successful!");
                        self.navigate(Route::Home);
                    }
                    Err(e) => self.notices.push(e.into()),
                }
            }
            AuthMode::Signup => {
                let request = screen.signup_request();
                match self.login_use_case.signup(&request) {
                    Ok(()) => {
                        screen.set_mode(AuthMode::Login);
                        self.notices
                            .success("Success", "Account created successfully!");
                    }
                    Err(e) => self.notices.push(e.into()),
                }
            }
        }
    }

    fn submit_post(&mut self) {
        let CurrentScreen::CreatePost(screen) = &self.screen else {
            return;
        };

        match self.create_post_use_case.execute(&screen.request()) {
            Ok(draft) => {
                self.notices.push(
                    Notice::success("Post Created", draft.confirmation())
                        .with_follow_up(NoticeFollowUp::GoBack),
                );
            }
            Err(e) => self.notices.push(e.into()),
        }
    }

    fn save_profile(&mut self) {
        let CurrentScreen::EditProfile(screen) = &mut self.screen else {
            return;
        };

        self.update_profile_use_case
            .execute(screen.name(), screen.bio(), screen.skills());
        screen.show_saved_banner();
    }

    fn tick(&mut self, delta: Duration) {
        match &mut self.screen {
            CurrentScreen::Home(screen) => screen.tick(delta),
            CurrentScreen::EditProfile(screen) => screen.tick(delta),
            _ => {}
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match &mut self.screen {
            CurrentScreen::Login(screen) => frame.render_widget(&*screen, area),
            CurrentScreen::Home(screen) => frame.render_widget(&*screen, area),
            CurrentScreen::Conversations(screen) => frame.render_widget(&*screen, area),
            CurrentScreen::DirectMessage(screen) => frame.render_widget(&*screen, area),
            CurrentScreen::Profile(screen) => frame.render_widget(&*screen, area),
            CurrentScreen::CreatePost(screen) => frame.render_widget(&*screen, area),
            CurrentScreen::EditProfile(screen) => frame.render_widget(screen, area),
        }

        if let Some(dialog) = &self.confirm {
            dialog.render(&self.theme, area, frame.buffer_mut());
        }

        if let Some(notice) = self.notices.current() {
            frame.render_widget(NoticeDialog::new(notice, &self.theme), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{FixedCredentialAuth, MockCatalog};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        App::new(
            &AppConfig::default(),
            Arc::new(FixedCredentialAuth::default()),
            Arc::new(MockCatalog::new()),
        )
    }

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn logged_in() -> App {
        let mut app = app();
        type_str(&mut app, "test@student.com");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "12345");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        app
    }

    #[test]
    fn test_login_success_shows_notice_over_home() {
        let mut app = app();
        type_str(&mut app, "test@student.com");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "12345");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.navigator.current(), &Route::Home);
        assert!(matches!(app.screen, CurrentScreen::Home(_)));
        assert_eq!(
            app.notices.current().map(|n| n.message.as_str()),
            Some("Login successful!")
        );

        press(&mut app, KeyCode::Enter);
        assert!(!app.notices.is_blocking());
        assert_eq!(app.navigator.current(), &Route::Home);
    }

    #[test]
    fn test_login_errors_stay_on_login() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.notices.current().map(|n| n.message.as_str()),
            Some("Please fill in all fields")
        );
        press(&mut app, KeyCode::Esc);

        type_str(&mut app, "test@student.com");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "wrong");
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.notices.current().map(|n| n.message.as_str()),
            Some("Invalid email or password")
        );
        assert_eq!(app.navigator.current(), &Route::Login);
    }

    #[test]
    fn test_signup_returns_to_login_mode() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        for value in ["Ann", "ann@student.com", "pw", "pw"] {
            type_str(&mut app, value);
            press(&mut app, KeyCode::Tab);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.notices.current().map(|n| n.message.as_str()),
            Some("Account created successfully!")
        );
        let CurrentScreen::Login(screen) = &app.screen else {
            panic!("expected login screen");
        };
        assert_eq!(screen.mode(), AuthMode::Login);
        assert_eq!(app.navigator.depth(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            EventResult::Exit
        );
        assert_eq!(press(&mut app, KeyCode::Esc), EventResult::Exit);

        let mut app = logged_in();
        assert_eq!(press(&mut app, KeyCode::Esc), EventResult::Continue);
        assert_eq!(app.navigator.current(), &Route::Login);
    }

    #[test]
    fn test_connect_opens_empty_chat() {
        let mut app = logged_in();
        press(&mut app, KeyCode::Char('c'));

        assert_eq!(
            app.navigator.current(),
            &Route::DirectMessage(DirectMessageParams::new_chat("Alex Johnson"))
        );
        let CurrentScreen::DirectMessage(screen) = &app.screen else {
            panic!("expected direct message screen");
        };
        assert!(screen.messages().is_empty());
    }

    #[test]
    fn test_conversation_opens_seeded_chat() {
        let mut app = logged_in();
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Enter);

        let CurrentScreen::DirectMessage(screen) = &app.screen else {
            panic!("expected direct message screen");
        };
        assert_eq!(screen.user_name(), "Alex Johnson");
        assert_eq!(screen.messages().len(), 4);
        assert_eq!(app.navigator.depth(), 4);
    }

    #[test]
    fn test_going_back_remounts_fresh_state() {
        let mut app = logged_in();
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "hi");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Enter);

        let CurrentScreen::DirectMessage(screen) = &app.screen else {
            panic!("expected direct message screen");
        };
        assert_eq!(screen.messages().len(), 4);
    }

    #[test]
    fn test_create_post_goes_back_after_notice() {
        let mut app = logged_in();
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "Guitar");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Music");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Lessons");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.navigator.current(), &Route::CreatePost);
        assert_eq!(
            app.notices.current().map(|n| n.message.as_str()),
            Some("Your post for \"Guitar\" has been created!")
        );

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator.current(), &Route::Home);
        let CurrentScreen::Home(screen) = &app.screen else {
            panic!("expected home screen");
        };
        assert_eq!(screen.offers().len(), 5);
    }

    #[test]
    fn test_create_post_missing_fields_stays() {
        let mut app = logged_in();
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "Guitar");
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.notices.current().map(|n| n.title.as_str()),
            Some("Missing Fields")
        );
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator.current(), &Route::CreatePost);
    }

    #[test]
    fn test_edit_profile_updates_shared_store() {
        let mut app = logged_in();
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        for _ in 0.."Cooking".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, ", , Rust");
        press(&mut app, KeyCode::Enter);

        let profile = app.profile.snapshot();
        assert_eq!(profile.skills().last().map(String::as_str), Some("Rust"));
        assert_eq!(profile.skills().len(), 6);
        assert_eq!(profile.joined_date(), "January 2024");

        let CurrentScreen::EditProfile(screen) = &app.screen else {
            panic!("expected edit profile screen");
        };
        assert_eq!(screen.banner_message(), Some("Profile updated successfully!"));

        app.tick(Duration::from_secs(3));
        let CurrentScreen::EditProfile(screen) = &app.screen else {
            panic!("expected edit profile screen");
        };
        assert!(screen.banner_message().is_none());
    }

    #[test]
    fn test_change_picture_raises_notice() {
        let mut app = logged_in();
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('e'));
        app.handle_key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL));

        assert_eq!(
            app.notices.current().map(|n| n.title.as_str()),
            Some("Feature Coming Soon")
        );
    }

    #[test]
    fn test_logout_confirm_resets_stack() {
        let mut app = logged_in();
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('l'));
        assert!(app.confirm.is_some());

        press(&mut app, KeyCode::Enter);
        assert!(app.confirm.is_none());
        assert_eq!(app.navigator.current(), &Route::Profile);

        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.navigator.depth(), 1);
        assert_eq!(app.navigator.current(), &Route::Login);
        assert!(matches!(app.screen, CurrentScreen::Login(_)));
    }

    #[test]
    fn test_tick_finishes_home_refresh() {
        let mut app = logged_in();
        press(&mut app, KeyCode::Char('r'));
        let CurrentScreen::Home(screen) = &app.screen else {
            panic!("expected home screen");
        };
        assert!(screen.is_refreshing());

        app.tick(Duration::from_millis(1500));
        let CurrentScreen::Home(screen) = &app.screen else {
            panic!("expected home screen");
        };
        assert!(!screen.is_refreshing());
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_terminal_event(Event::Key(key));

        let CurrentScreen::Login(screen) = &app.screen else {
            panic!("expected login screen");
        };
        assert!(screen.login_request().email.is_empty());
    }
}
