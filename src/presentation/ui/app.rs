//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    widgets::{Block, Widget},
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info};

use crate::application::services::{NotificationManager, ThemeService};
use crate::application::use_cases::{
    ListPostsUseCase, LoadPostUseCase, SubmitOutcome, SubmitPostUseCase,
};
use crate::domain::entities::Post;
use crate::domain::errors::RequestError;
use crate::domain::ports::{KeyValueStorePort, NavigatorPort, PostApiPort};
use crate::domain::route::Route;
use crate::infrastructure::Router;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Palette;
use crate::presentation::ui::{
    EditorAction, EditorScreen, NotificationPopup, PostsAction, PostsScreen, ReaderAction,
    ReaderScreen,
};

const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug)]
enum Action {
    PostLoaded {
        editor_id: u64,
        result: Result<Post, RequestError>,
    },
    PostSaved {
        editor_id: u64,
        result: Result<SubmitOutcome, RequestError>,
    },
    PostsListed(Result<Vec<Post>, RequestError>),
}

enum CurrentScreen {
    Reader(Box<ReaderScreen>),
    Posts(PostsScreen),
    Editor(Box<EditorScreen>),
}

/// Terminal host: owns the router, the mounted screen and background requests.
pub struct App {
    router: Router,
    mounted: Route,
    screen: CurrentScreen,
    theme: ThemeService,
    notifications: NotificationManager,
    list_posts: Arc<ListPostsUseCase>,
    load_post: Arc<LoadPostUseCase>,
    submit_post: Arc<SubmitPostUseCase>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    editor_tasks: Vec<JoinHandle<()>>,
    list_task: Option<JoinHandle<()>>,
    next_editor_id: u64,
    running: bool,
}

impl App {
    /// Wires the use cases to `api`, loads the theme from `store` and
    /// prepares to open `initial`.
    #[must_use]
    pub fn new(
        api: Arc<dyn PostApiPort>,
        store: Arc<dyn KeyValueStorePort>,
        initial: Route,
        notification_duration: Duration,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            router: Router::new(initial.clone()),
            mounted: initial,
            screen: CurrentScreen::Reader(Box::default()),
            theme: ThemeService::load(store),
            notifications: NotificationManager::new(notification_duration),
            list_posts: Arc::new(ListPostsUseCase::new(api.clone())),
            load_post: Arc::new(LoadPostUseCase::new(api.clone())),
            submit_post: Arc::new(SubmitPostUseCase::new(api)),
            action_tx,
            action_rx,
            editor_tasks: Vec::new(),
            list_task: None,
            next_editor_id: 0,
            running: true,
        }
    }

    /// Mounts the initial route and runs until the user quits.
    ///
    /// # Errors
    /// Returns error if drawing to the terminal or reading its events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.mount_current_route();
        self.run_event_loop(terminal).await?;

        self.unmount();
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick_interval = interval(TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    self.sync_route();
                }

                Some(event) = terminal_events.next() => {
                    if let EventResult::Exit = self.handle_terminal_event(event?) {
                        self.running = false;
                    }
                    self.sync_route();
                }

                _ = tick_interval.tick() => {
                    self.notifications.tick();
                }
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_press(&key) => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        match &mut self.screen {
            CurrentScreen::Reader(screen) => match screen.handle_key(key) {
                ReaderAction::ToggleTheme => {
                    self.theme.toggle();
                }
                ReaderAction::OpenAdmin => self.router.push(Route::AdminPosts),
                ReaderAction::Quit => return EventResult::Exit,
                ReaderAction::None => {}
            },
            CurrentScreen::Posts(screen) => match screen.handle_key(key) {
                PostsAction::Edit(slug) => self.router.push(Route::EditPost { slug }),
                PostsAction::New => self.router.push(Route::NewPost),
                PostsAction::Reload => {
                    screen.set_loading();
                    self.spawn_list();
                }
                PostsAction::Back => {
                    if !self.router.back() {
                        self.router.push(Route::Home);
                    }
                }
                PostsAction::Quit => return EventResult::Exit,
                PostsAction::None => {}
            },
            CurrentScreen::Editor(screen) => match screen.handle_key(key) {
                EditorAction::Submit => {
                    if let Some(pending) = screen.editor_mut().begin_submit() {
                        let editor_id = screen.id();
                        let use_case = self.submit_post.clone();
                        let tx = self.action_tx.clone();
                        self.track_editor_task(tokio::spawn(async move {
                            let result = use_case.execute(&pending.mode, &pending.post).await;
                            let _ = tx.send(Action::PostSaved { editor_id, result });
                        }));
                    }
                }
                EditorAction::Cancel => {
                    if !self.router.back() {
                        self.router.push(Route::AdminPosts);
                    }
                }
                EditorAction::None => {}
            },
        }

        EventResult::Continue
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::PostLoaded { editor_id, result } => match &mut self.screen {
                CurrentScreen::Editor(screen) if screen.id() == editor_id => {
                    screen.finish_fetch(result, &mut self.notifications);
                }
                _ => debug!(editor_id, "Dropping fetch result for unmounted editor"),
            },
            Action::PostSaved { editor_id, result } => match &mut self.screen {
                CurrentScreen::Editor(screen) if screen.id() == editor_id => {
                    screen.editor_mut().finish_submit(
                        result,
                        &mut self.notifications,
                        &mut self.router,
                    );
                }
                _ => debug!(editor_id, "Dropping submit result for unmounted editor"),
            },
            Action::PostsListed(result) => {
                if let CurrentScreen::Posts(screen) = &mut self.screen {
                    match result {
                        Ok(posts) => screen.set_posts(posts),
                        Err(e) => {
                            self.notifications.error("Error", e.message());
                            screen.set_posts(Vec::new());
                        }
                    }
                }
            }
        }
    }

    /// Remounts the screen when the router moved.
    fn sync_route(&mut self) {
        if self.router.current() != &self.mounted {
            self.mount_current_route();
        }
    }

    /// Stops the requests the current screen started.
    fn unmount(&mut self) {
        self.abort_tasks();
        if let CurrentScreen::Editor(screen) = &mut self.screen {
            screen.editor_mut().cancel_pending();
        }
    }

    fn mount_current_route(&mut self) {
        self.unmount();

        let route = self.router.current().clone();
        info!(route = %route, "Mounting screen");

        self.screen = match &route {
            Route::Home => CurrentScreen::Reader(Box::default()),
            Route::AdminPosts => {
                self.spawn_list();
                CurrentScreen::Posts(PostsScreen::new())
            }
            Route::NewPost | Route::EditPost { .. } => {
                self.next_editor_id += 1;
                let screen = EditorScreen::mount(self.next_editor_id, &self.router);
                if let Some(slug) = screen.editor().fetch_slug() {
                    self.spawn_fetch(screen.id(), slug.to_string());
                }
                CurrentScreen::Editor(Box::new(screen))
            }
        };
        self.mounted = route;
    }

    fn spawn_fetch(&mut self, editor_id: u64, slug: String) {
        let use_case = self.load_post.clone();
        let tx = self.action_tx.clone();
        self.track_editor_task(tokio::spawn(async move {
            let result = use_case.execute(&slug).await;
            let _ = tx.send(Action::PostLoaded { editor_id, result });
        }));
    }

    fn spawn_list(&mut self) {
        if let Some(task) = self.list_task.take() {
            task.abort();
        }

        let use_case = self.list_posts.clone();
        let tx = self.action_tx.clone();
        self.list_task = Some(tokio::spawn(async move {
            let result = use_case.execute().await;
            let _ = tx.send(Action::PostsListed(result));
        }));
    }

    fn track_editor_task(&mut self, task: JoinHandle<()>) {
        self.editor_tasks.retain(|task| !task.is_finished());
        self.editor_tasks.push(task);
    }

    fn abort_tasks(&mut self) {
        for task in self.editor_tasks.drain(..) {
            if !task.is_finished() {
                debug!("Aborting pending editor request");
                task.abort();
            }
        }
        if let Some(task) = self.list_task.take() {
            task.abort();
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let palette = Palette::for_mode(self.theme.mode());
        let area = frame.area();
        let buf = frame.buffer_mut();

        Block::default().style(palette.base_style()).render(area, buf);

        match &mut self.screen {
            CurrentScreen::Reader(screen) => screen.render(area, buf, &palette),
            CurrentScreen::Posts(screen) => screen.render(area, buf, &palette),
            CurrentScreen::Editor(screen) => screen.render(area, buf, &palette),
        }

        if let Some(notification) = self.notifications.current() {
            NotificationPopup::new(notification, &palette).render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockPostApiPort;
    use crate::infrastructure::MemoryKeyValueStore;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app_with(api: MockPostApiPort, initial: Route) -> App {
        let mut app = App::new(
            Arc::new(api),
            Arc::new(MemoryKeyValueStore::new()),
            initial,
            Duration::from_secs(5),
        );
        app.mount_current_route();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        app.sync_route();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn save(app: &mut App) {
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        app.sync_route();
    }

    fn fill_form(app: &mut App) {
        type_text(app, "Hello");
        press(app, KeyCode::Tab);
        type_text(app, "hello");
        press(app, KeyCode::Tab);
        type_text(app, "Body");
    }

    fn editor(app: &App) -> &EditorScreen {
        match &app.screen {
            CurrentScreen::Editor(screen) => &**screen,
            _ => panic!("editor is not mounted"),
        }
    }

    #[tokio::test]
    async fn test_saved_post_returns_to_listing() {
        let mut api = MockPostApiPort::new();
        api.expect_create_post().times(1).returning(|_| Ok(()));
        api.expect_update_post().never();
        api.expect_list_posts().returning(|| Ok(Vec::new()));
        let mut app = app_with(api, Route::NewPost);

        fill_form(&mut app);
        save(&mut app);
        assert!(editor(&app).editor().is_loading());

        let action = app.action_rx.recv().await.unwrap();
        assert!(matches!(action, Action::PostSaved { .. }));
        app.handle_action(action);
        app.sync_route();

        assert_eq!(app.router.current(), &Route::AdminPosts);
        assert!(matches!(app.screen, CurrentScreen::Posts(_)));
        assert_eq!(app.notifications.current().unwrap().title, "Post created");
    }

    #[tokio::test]
    async fn test_rejected_save_stays_on_editor() {
        let mut api = MockPostApiPort::new();
        api.expect_create_post()
            .times(1)
            .returning(|_| Err(RequestError::rejected(409, "slug taken")));
        let mut app = app_with(api, Route::NewPost);

        fill_form(&mut app);
        save(&mut app);
        let action = app.action_rx.recv().await.unwrap();
        app.handle_action(action);
        app.sync_route();

        assert_eq!(app.router.current(), &Route::NewPost);
        let screen = editor(&app);
        assert!(!screen.editor().is_loading());
        assert_eq!(screen.editor().form().slug, "hello");
        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.message, "slug taken");
    }

    #[tokio::test]
    async fn test_fetch_result_fills_mounted_editor() {
        let mut api = MockPostApiPort::new();
        api.expect_get_post()
            .times(1)
            .returning(|slug| Ok(Post::new("Hello", slug, "Body")));
        let mut app = app_with(api, Route::EditPost { slug: "hello".into() });

        let action = app.action_rx.recv().await.unwrap();
        app.handle_action(action);

        let form = editor(&app).editor().form();
        assert_eq!(form.title, "Hello");
        assert_eq!(form.slug, "hello");
        assert_eq!(form.content, "Body");
    }

    #[tokio::test]
    async fn test_leaving_editor_aborts_pending_save() {
        let mut api = MockPostApiPort::new();
        api.expect_create_post().never();
        api.expect_list_posts().returning(|| Ok(Vec::new()));
        let mut app = app_with(api, Route::NewPost);

        fill_form(&mut app);
        save(&mut app);
        assert_eq!(app.editor_tasks.len(), 1);

        press(&mut app, KeyCode::Esc);

        assert_eq!(app.router.current(), &Route::AdminPosts);
        assert!(app.editor_tasks.is_empty());

        let action = app.action_rx.recv().await.unwrap();
        assert!(matches!(action, Action::PostsListed(Ok(_))));
        assert!(app.action_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_unmount_aborts_save_and_clears_loading() {
        let mut api = MockPostApiPort::new();
        api.expect_create_post().never();
        let mut app = app_with(api, Route::NewPost);

        fill_form(&mut app);
        save(&mut app);
        assert!(editor(&app).editor().is_loading());

        app.unmount();
        tokio::task::yield_now().await;

        assert!(app.editor_tasks.is_empty());
        assert!(!editor(&app).editor().is_loading());
        assert!(app.action_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_stale_results_are_dropped() {
        let mut api = MockPostApiPort::new();
        api.expect_list_posts().returning(|| Ok(Vec::new()));
        let mut app = app_with(api, Route::NewPost);
        let stale_id = editor(&app).id();

        app.router.push(Route::AdminPosts);
        app.sync_route();
        app.router.push(Route::NewPost);
        app.sync_route();
        assert_ne!(editor(&app).id(), stale_id);

        app.handle_action(Action::PostSaved {
            editor_id: stale_id,
            result: Ok(SubmitOutcome::Created),
        });
        app.handle_action(Action::PostLoaded {
            editor_id: stale_id,
            result: Ok(Post::new("Old", "old", "Old body")),
        });
        app.sync_route();

        assert_eq!(app.router.current(), &Route::NewPost);
        assert_eq!(editor(&app).editor().form().title, "");
        assert!(!editor(&app).editor().is_loading());
        assert!(app.notifications.current().is_none());
    }

    #[tokio::test]
    async fn test_listing_escape_returns_to_reader() {
        let mut api = MockPostApiPort::new();
        api.expect_list_posts().returning(|| Ok(Vec::new()));
        let mut app = app_with(api, Route::Home);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.router.current(), &Route::AdminPosts);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.router.current(), &Route::Home);
        assert!(matches!(app.screen, CurrentScreen::Reader(_)));
        assert!(!app.router.back());
    }

    #[tokio::test]
    async fn test_listing_escape_without_history_opens_reader() {
        let mut api = MockPostApiPort::new();
        api.expect_list_posts().returning(|| Ok(Vec::new()));
        let mut app = app_with(api, Route::AdminPosts);

        press(&mut app, KeyCode::Esc);

        assert_eq!(app.router.current(), &Route::Home);
        assert!(matches!(app.screen, CurrentScreen::Reader(_)));
    }
}
