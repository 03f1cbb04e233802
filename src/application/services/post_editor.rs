//! Admin post editor state.

use tracing::{debug, info, warn};

use crate::application::dto::{EditorMode, PostForm};
use crate::application::services::NotificationManager;
use crate::application::use_cases::SubmitOutcome;
use crate::domain::entities::Post;
use crate::domain::errors::{PostField, RequestError, ValidationErrors};
use crate::domain::ports::NavigatorPort;
use crate::domain::route::Route;

/// A validated save the host should send to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmit {
    /// Mode at the time of submission.
    pub mode: EditorMode,
    /// Post built from the form.
    pub post: Post,
}

/// Create/update form bound to the post schema.
///
/// The editor never performs I/O itself: the host runs the requests it
/// asks for and feeds results back through [`PostEditor::finish_fetch`]
/// and [`PostEditor::finish_submit`].
#[derive(Debug, Default)]
pub struct PostEditor {
    form: PostForm,
    mode: EditorMode,
    loading: bool,
    fetching: bool,
    submitted: bool,
    errors: ValidationErrors,
}

impl PostEditor {
    /// Mounts the editor on the current route.
    ///
    /// A `slug` parameter switches to edit mode and schedules a fetch.
    #[must_use]
    pub fn mount(navigator: &dyn NavigatorPort) -> Self {
        match navigator.param("slug") {
            Some(slug) => {
                debug!(slug = %slug, "Editor mounted in edit mode");
                Self {
                    mode: EditorMode::Edit {
                        original_slug: slug.to_string(),
                    },
                    fetching: true,
                    ..Self::default()
                }
            }
            None => {
                debug!("Editor mounted in create mode");
                Self::default()
            }
        }
    }

    /// Create or edit, fixed at mount.
    #[must_use]
    pub const fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// Current field values.
    #[must_use]
    pub const fn form(&self) -> &PostForm {
        &self.form
    }

    /// Returns whether a submit is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns whether the initial fetch is in flight.
    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.fetching
    }

    /// Inline errors from the last validation.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Returns the inline message for `field`.
    #[must_use]
    pub fn error_for(&self, field: PostField) -> Option<&str> {
        self.errors.message_for(field)
    }

    /// Slug the host should fetch, while the initial load is pending.
    #[must_use]
    pub fn fetch_slug(&self) -> Option<&str> {
        match &self.mode {
            EditorMode::Edit { original_slug } if self.fetching => Some(original_slug),
            _ => None,
        }
    }

    /// Updates a single field from user input.
    ///
    /// Once a submit has been attempted, every change re-runs validation so
    /// inline messages follow the current input.
    pub fn set_field(&mut self, field: PostField, value: impl Into<String>) {
        self.form.set(field, value);
        if self.submitted {
            self.errors = self.form.validate().err().unwrap_or_default();
        }
    }

    /// Applies the result of the initial fetch.
    pub fn finish_fetch(
        &mut self,
        result: Result<Post, RequestError>,
        notifications: &mut NotificationManager,
    ) {
        self.fetching = false;
        match result {
            Ok(post) => {
                debug!(slug = %post.slug, "Editor filled from fetched post");
                self.form = PostForm::from(post);
            }
            Err(e) => {
                notifications.error("Error", e.message());
            }
        }
    }

    /// Validates the form and marks the editor as loading.
    ///
    /// Returns `None` when a submit is already in flight or validation
    /// failed; in the latter case the field errors are updated.
    pub fn begin_submit(&mut self) -> Option<PendingSubmit> {
        if self.loading {
            debug!("Submit ignored while a request is pending");
            return None;
        }

        self.submitted = true;
        match self.form.validate() {
            Ok(post) => {
                self.errors = ValidationErrors::new();
                self.loading = true;
                Some(PendingSubmit {
                    mode: self.mode.clone(),
                    post,
                })
            }
            Err(errors) => {
                debug!(count = errors.len(), "Form failed validation");
                self.errors = errors;
                None
            }
        }
    }

    /// Applies the result of a submit started with [`Self::begin_submit`].
    ///
    /// On success the host navigates to the admin listing. On failure the
    /// form is left untouched for a retry.
    pub fn finish_submit(
        &mut self,
        result: Result<SubmitOutcome, RequestError>,
        notifications: &mut NotificationManager,
        navigator: &mut dyn NavigatorPort,
    ) {
        self.loading = false;
        match result {
            Ok(outcome) => {
                info!(outcome = ?outcome, "Submit finished");
                notifications.success(outcome.notification_title());
                navigator.push(Route::AdminPosts);
            }
            Err(e) => {
                warn!(error = %e, status = ?e.status(), "Submit failed");
                notifications.error("Error", e.message());
            }
        }
    }

    /// Clears in-flight flags after the host aborted its requests.
    pub fn cancel_pending(&mut self) {
        if self.loading || self.fetching {
            debug!("Pending editor requests cancelled");
        }
        self.loading = false;
        self.fetching = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NotificationLevel;
    use crate::domain::ports::mocks::MockPostApiPort;
    use crate::application::use_cases::{LoadPostUseCase, SubmitPostUseCase};
    use crate::infrastructure::Router;
    use std::sync::Arc;

    async fn load(
        editor: &mut PostEditor,
        use_case: &LoadPostUseCase,
        notifications: &mut NotificationManager,
    ) {
        let slug = editor.fetch_slug().unwrap().to_string();
        let result = use_case.execute(&slug).await;
        editor.finish_fetch(result, notifications);
    }

    async fn submit(
        editor: &mut PostEditor,
        use_case: &SubmitPostUseCase,
        notifications: &mut NotificationManager,
        router: &mut Router,
    ) {
        if let Some(pending) = editor.begin_submit() {
            let result = use_case.execute(&pending.mode, &pending.post).await;
            editor.finish_submit(result, notifications, router);
        }
    }

    fn edit_router(slug: &str) -> Router {
        Router::new(Route::EditPost { slug: slug.into() })
    }

    fn fill(editor: &mut PostEditor, title: &str, slug: &str, content: &str) {
        editor.set_field(PostField::Title, title);
        editor.set_field(PostField::Slug, slug);
        editor.set_field(PostField::Content, content);
    }

    #[test]
    fn test_mount_without_slug_is_create_mode() {
        let router = Router::new(Route::NewPost);
        let editor = PostEditor::mount(&router);

        assert_eq!(editor.mode(), &EditorMode::Create);
        assert_eq!(editor.form(), &PostForm::new());
        assert_eq!(editor.fetch_slug(), None);
    }

    #[test]
    fn test_mount_with_slug_schedules_fetch() {
        let editor = PostEditor::mount(&edit_router("hello"));

        assert!(editor.mode().is_editing());
        assert!(editor.is_fetching());
        assert_eq!(editor.fetch_slug(), Some("hello"));
    }

    #[tokio::test]
    async fn test_load_fills_form_from_fetched_post() {
        let mut api = MockPostApiPort::new();
        api.expect_get_post()
            .times(1)
            .returning(|slug| Ok(Post::new("Hello", slug, "Body text")));
        let use_case = LoadPostUseCase::new(Arc::new(api));
        let mut notifications = NotificationManager::default();

        let mut editor = PostEditor::mount(&edit_router("hello"));
        load(&mut editor, &use_case, &mut notifications).await;

        assert_eq!(editor.form().title, "Hello");
        assert_eq!(editor.form().slug, "hello");
        assert_eq!(editor.form().content, "Body text");
        assert!(!editor.is_fetching());
        assert!(notifications.current().is_none());
    }

    #[tokio::test]
    async fn test_failed_load_notifies_and_keeps_edit_mode() {
        let mut api = MockPostApiPort::new();
        api.expect_get_post()
            .returning(|_| Err(RequestError::network("connection refused")));
        let use_case = LoadPostUseCase::new(Arc::new(api));
        let mut notifications = NotificationManager::default();

        let mut editor = PostEditor::mount(&edit_router("hello"));
        load(&mut editor, &use_case, &mut notifications).await;

        assert!(editor.mode().is_editing());
        assert_eq!(editor.form(), &PostForm::new());
        let toast = notifications.current().unwrap();
        assert_eq!(toast.level, NotificationLevel::Error);
        assert_eq!(toast.message, "connection refused");
    }

    #[tokio::test]
    async fn test_create_submit_notifies_and_navigates() {
        let mut api = MockPostApiPort::new();
        api.expect_create_post().times(1).returning(|_| Ok(()));
        api.expect_update_post().never();
        let use_case = SubmitPostUseCase::new(Arc::new(api));
        let mut notifications = NotificationManager::default();
        let mut router = Router::new(Route::NewPost);

        let mut editor = PostEditor::mount(&router);
        fill(&mut editor, "Hello", "hello", "Body");
        submit(&mut editor, &use_case, &mut notifications, &mut router).await;

        assert_eq!(router.current(), &Route::AdminPosts);
        assert_eq!(
            notifications.current().unwrap().title,
            "Post created"
        );
        assert!(!editor.is_loading());
    }

    #[tokio::test]
    async fn test_edit_submit_updates_once() {
        let mut api = MockPostApiPort::new();
        api.expect_update_post().times(1).returning(|_, _| Ok(()));
        api.expect_create_post().never();
        let use_case = SubmitPostUseCase::new(Arc::new(api));
        let mut notifications = NotificationManager::default();
        let mut router = edit_router("hello");

        let mut editor = PostEditor::mount(&router);
        editor.finish_fetch(Ok(Post::new("Hello", "hello", "Body")), &mut notifications);
        submit(&mut editor, &use_case, &mut notifications, &mut router).await;

        assert_eq!(router.current(), &Route::AdminPosts);
        assert_eq!(
            notifications.current().unwrap().title,
            "Post updated"
        );
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_calls() {
        let mut api = MockPostApiPort::new();
        api.expect_create_post().never();
        api.expect_update_post().never();
        let use_case = SubmitPostUseCase::new(Arc::new(api));
        let mut notifications = NotificationManager::default();
        let mut router = Router::new(Route::NewPost);

        let mut editor = PostEditor::mount(&router);
        fill(&mut editor, "Hello", "", "");
        submit(&mut editor, &use_case, &mut notifications, &mut router).await;

        assert_eq!(editor.error_for(PostField::Title), None);
        assert_eq!(editor.error_for(PostField::Slug), Some("Slug is required"));
        assert_eq!(
            editor.error_for(PostField::Content),
            Some("Content is required")
        );
        assert!(!editor.is_loading());
        assert_eq!(router.current(), &Route::NewPost);
        assert!(notifications.current().is_none());
    }

    #[tokio::test]
    async fn test_rejected_update_keeps_form_and_route() {
        let mut api = MockPostApiPort::new();
        api.expect_update_post()
            .times(1)
            .returning(|_, _| Err(RequestError::rejected(500, "database unavailable")));
        let use_case = SubmitPostUseCase::new(Arc::new(api));
        let mut notifications = NotificationManager::default();
        let mut router = edit_router("hello");

        let mut editor = PostEditor::mount(&router);
        editor.finish_fetch(Ok(Post::new("Hello", "hello", "Body")), &mut notifications);
        editor.set_field(PostField::Title, "Hello again");
        let before = editor.form().clone();

        submit(&mut editor, &use_case, &mut notifications, &mut router).await;

        assert_eq!(editor.form(), &before);
        assert_eq!(router.current(), &Route::EditPost { slug: "hello".into() });
        assert!(!editor.is_loading());
        let toast = notifications.current().unwrap();
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.message, "database unavailable");
    }

    #[test]
    fn test_second_submit_blocked_while_loading() {
        let router = Router::new(Route::NewPost);
        let mut editor = PostEditor::mount(&router);
        fill(&mut editor, "Hello", "hello", "Body");

        assert!(editor.begin_submit().is_some());
        assert!(editor.is_loading());
        assert!(editor.begin_submit().is_none());
    }

    #[test]
    fn test_successful_validation_clears_old_errors() {
        let router = Router::new(Route::NewPost);
        let mut editor = PostEditor::mount(&router);

        assert!(editor.begin_submit().is_none());
        assert_eq!(editor.errors().len(), 3);

        fill(&mut editor, "Hello", "hello", "Body");
        let pending = editor.begin_submit().unwrap();

        assert!(editor.errors().is_empty());
        assert_eq!(pending.mode, EditorMode::Create);
        assert_eq!(pending.post, Post::new("Hello", "hello", "Body"));
    }

    #[test]
    fn test_cancel_pending_clears_flags() {
        let router = edit_router("hello");
        let mut editor = PostEditor::mount(&router);
        fill(&mut editor, "Hello", "hello", "Body");
        editor.begin_submit();

        editor.cancel_pending();

        assert!(!editor.is_loading());
        assert!(!editor.is_fetching());
        assert_eq!(editor.fetch_slug(), None);
    }

    #[test]
    fn test_errors_follow_input_after_failed_submit() {
        let router = Router::new(Route::NewPost);
        let mut editor = PostEditor::mount(&router);

        editor.set_field(PostField::Title, "");
        assert!(editor.errors().is_empty());

        assert!(editor.begin_submit().is_none());
        editor.set_field(PostField::Title, "Hello");

        assert_eq!(editor.error_for(PostField::Title), None);
        assert_eq!(editor.error_for(PostField::Slug), Some("Slug is required"));

        editor.set_field(PostField::Title, "");
        assert_eq!(editor.error_for(PostField::Title), Some("Title is required"));

        editor.set_field(PostField::Title, "Hello");
        editor.set_field(PostField::Slug, "hello");
        editor.set_field(PostField::Content, "Body");
        assert!(editor.errors().is_empty());
    }
}
