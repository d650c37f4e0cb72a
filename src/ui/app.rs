use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use crate::api::ApiError;
use crate::config::Config;
use crate::ui::alert::Alert;
use crate::ui::fetch::{FetchData, FetchIntent, FetchReducer, FetchSlot, RequestId};
use crate::ui::fetcher::{FetchJob, FetchOutcome, FetchPayload, Fetcher};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{Frame, FrameId, NavIntent, NavReducer, NavState, Route, Tab};
use crate::ui::screens::{DrawContext, PostDetailScreen, PostListScreen, ProfileScreen, Screen};
use crate::ui::tasks::TaskGroup;

/// Opens a URL outside the terminal. Replaced in tests.
pub type LinkOpener = Arc<dyn Fn(&str) -> std::io::Result<()> + Send + Sync>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

fn dispatch_fetch<T>(slot: &mut FetchSlot<T>, intent: FetchIntent<T>)
where
    T: FetchData + Clone + PartialEq + Send + 'static,
{
    *slot = FetchReducer::<T>::reduce(std::mem::take(slot), intent);
}

/// Applies a completion to its slot. Returns the error when a live
/// request failed; superseded completions are dropped silently.
fn settle<T>(
    slot: &mut FetchSlot<T>,
    request: RequestId,
    result: Result<T, ApiError>,
) -> Option<ApiError>
where
    T: FetchData + Clone + PartialEq + Send + 'static,
{
    if slot.pending != Some(request) {
        tracing::debug!(request = request.0, "Ignoring superseded completion");
        return None;
    }
    match result {
        Ok(data) => {
            dispatch_fetch(slot, FetchIntent::Succeeded { request, data });
            None
        }
        Err(err) => {
            dispatch_fetch(slot, FetchIntent::Failed { request });
            Some(err)
        }
    }
}

#[derive(Debug, Default)]
struct RequestCounter(u64);

impl RequestCounter {
    fn next(&mut self) -> RequestId {
        self.0 += 1;
        RequestId(self.0)
    }
}

/// A frame on the Home stack together with the requests it owns.
struct Mounted {
    screen: Screen,
    tasks: TaskGroup,
}

pub struct App {
    should_quit: bool,
    tick: usize,
    config: Config,
    /// Tab and Home stack (MVI pattern).
    nav: NavState,
    /// One entry per frame on the stack; removed entries abort their tasks.
    screens: HashMap<FrameId, Mounted>,
    alerts: VecDeque<Alert>,
    requests: RequestCounter,
    fetcher: Fetcher,
    link_opener: LinkOpener,
}

impl App {
    pub fn new(config: Config, fetcher: Fetcher) -> Self {
        Self {
            should_quit: false,
            tick: 0,
            config,
            nav: NavState::default(),
            screens: HashMap::new(),
            alerts: VecDeque::new(),
            requests: RequestCounter::default(),
            fetcher,
            link_opener: Arc::new(|url: &str| webbrowser::open(url)),
        }
    }

    pub fn set_link_opener(&mut self, opener: LinkOpener) {
        self.link_opener = opener;
    }

    /// Mounts the root post list and issues its first request.
    pub fn start(&mut self) {
        self.sync_screens();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn tab(&self) -> Tab {
        self.nav.tab
    }

    pub fn draw_context(&self) -> DrawContext<'_> {
        DrawContext {
            tick: self.tick,
            avatar_placeholder: &self.config.links.avatar_placeholder,
            base_url: &self.config.api.base_url,
        }
    }

    /// Route on top of the Home stack, `None` while Settings is shown.
    pub fn active_route(&self) -> Option<&Route> {
        if self.nav.tab != Tab::Home {
            return None;
        }
        self.nav.top().map(|frame| &frame.route)
    }

    fn active_frame(&self) -> Option<FrameId> {
        if self.nav.tab != Tab::Home {
            return None;
        }
        self.nav.top().map(|frame| frame.id)
    }

    pub fn screen(&self, id: FrameId) -> Option<&Screen> {
        self.screens.get(&id).map(|mounted| &mounted.screen)
    }

    pub fn active_screen(&self) -> Option<&Screen> {
        self.screen(self.active_frame()?)
    }

    fn active_screen_mut(&mut self) -> Option<&mut Screen> {
        let id = self.active_frame()?;
        self.screens.get_mut(&id).map(|mounted| &mut mounted.screen)
    }

    /// Requests still running for a frame.
    pub fn active_tasks(&self, id: FrameId) -> usize {
        self.screens.get(&id).map_or(0, |mounted| mounted.tasks.active())
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    // ========== Navigation ==========

    pub fn dispatch_nav(&mut self, intent: NavIntent) {
        dispatch_mvi!(self, nav, NavReducer, intent);
        self.sync_screens();
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.dispatch_nav(NavIntent::SelectTab(tab));
    }

    pub fn next_tab(&mut self) {
        self.dispatch_nav(NavIntent::NextTab);
    }

    pub fn back(&mut self) {
        self.dispatch_nav(NavIntent::Pop);
    }

    /// Enter: post card → detail, comment → its author's profile.
    pub fn open_selected(&mut self) {
        let route = match self.active_screen() {
            Some(Screen::PostList(screen)) => screen
                .selected_post()
                .map(|post| Route::post_detail(post.id.clone())),
            Some(Screen::Profile(screen)) => screen
                .selected_post()
                .map(|post| Route::post_detail(post.id.clone())),
            Some(Screen::PostDetail(screen)) => screen
                .selected_comment()
                .map(|comment| Route::profile_of(comment.author.as_ref())),
            None => None,
        };
        if let Some(route) = route {
            self.dispatch_nav(NavIntent::Push(route));
        }
    }

    /// Opens the profile of the focused post's author.
    pub fn open_selected_author(&mut self) {
        let route = match self.active_screen() {
            Some(Screen::PostList(screen)) => screen
                .selected_post()
                .map(|post| Route::profile_of(post.author.as_ref())),
            Some(Screen::PostDetail(screen)) => screen
                .post
                .data()
                .map(|post| Route::profile_of(post.author.as_ref())),
            _ => None,
        };
        if let Some(route) = route {
            self.dispatch_nav(NavIntent::Push(route));
        }
    }

    /// Reconciles mounted screens with the stack: popped frames are dropped
    /// (aborting their requests), new frames are mounted and start fetching.
    fn sync_screens(&mut self) {
        let live: HashSet<FrameId> = self.nav.stack.iter().map(|frame| frame.id).collect();
        self.screens.retain(|id, _| {
            let keep = live.contains(id);
            if !keep {
                tracing::debug!(frame = id.0, "Unmounting screen");
            }
            keep
        });

        let fresh: Vec<Frame> = self
            .nav
            .stack
            .iter()
            .filter(|frame| !self.screens.contains_key(&frame.id))
            .cloned()
            .collect();
        for frame in fresh {
            self.mount(frame);
        }
    }

    fn mount(&mut self, frame: Frame) {
        tracing::debug!(frame = frame.id.0, route = ?frame.route, "Mounting screen");
        let mut tasks = TaskGroup::new();

        let screen = match frame.route {
            Route::PostList => {
                let mut screen = PostListScreen::default();
                let request = self.requests.next();
                dispatch_fetch(&mut screen.posts, FetchIntent::Start { request });
                tasks.push(self.fetcher.spawn(frame.id, request, FetchJob::HomePosts));
                Screen::PostList(screen)
            }
            Route::PostDetail { post_id } => {
                let mut screen = PostDetailScreen::new(post_id.clone());
                let post_request = self.requests.next();
                let comments_request = self.requests.next();
                dispatch_fetch(&mut screen.post, FetchIntent::Start { request: post_request });
                dispatch_fetch(
                    &mut screen.comments,
                    FetchIntent::Start {
                        request: comments_request,
                    },
                );
                tasks.push(self.fetcher.spawn(
                    frame.id,
                    post_request,
                    FetchJob::Post(post_id.clone()),
                ));
                tasks.push(self.fetcher.spawn(
                    frame.id,
                    comments_request,
                    FetchJob::Comments(post_id),
                ));
                Screen::PostDetail(screen)
            }
            Route::Profile { username } => {
                let mut screen = ProfileScreen::new(username.clone());
                match username {
                    Some(username) => {
                        let request = self.requests.next();
                        dispatch_fetch(&mut screen.profile, FetchIntent::Start { request });
                        tasks.push(self.fetcher.spawn(
                            frame.id,
                            request,
                            FetchJob::Profile(username),
                        ));
                    }
                    None => {
                        tracing::debug!(frame = frame.id.0, "Profile opened without username");
                        dispatch_fetch(&mut screen.profile, FetchIntent::Skip);
                    }
                }
                Screen::Profile(screen)
            }
        };

        self.screens.insert(frame.id, Mounted { screen, tasks });
    }

    // ========== Fetching ==========

    /// Manual re-fetch of the post list. Ignored while a request is in flight.
    pub fn refresh(&mut self) {
        let Some(id) = self.active_frame() else {
            return;
        };
        let Some(Mounted {
            screen: Screen::PostList(screen),
            tasks,
        }) = self.screens.get_mut(&id)
        else {
            return;
        };
        if !screen.posts.can_refresh() {
            tracing::debug!(frame = id.0, "Refresh ignored; request in flight");
            return;
        }

        let request = self.requests.next();
        dispatch_fetch(&mut screen.posts, FetchIntent::Refresh { request });
        tasks.push(self.fetcher.spawn(id, request, FetchJob::HomePosts));
    }

    pub fn on_fetched(&mut self, outcome: FetchOutcome) {
        let FetchOutcome {
            frame,
            request,
            payload,
        } = outcome;
        let resource = payload.resource();

        let Some(mounted) = self.screens.get_mut(&frame) else {
            tracing::debug!(
                frame = frame.0,
                request = request.0,
                resource = ?resource,
                "Dropping completion for closed screen"
            );
            return;
        };

        let failure = match (&mut mounted.screen, payload) {
            (Screen::PostList(screen), FetchPayload::HomePosts(result)) => {
                let failure = settle(&mut screen.posts, request, result);
                screen.clamp_selection();
                failure
            }
            (Screen::PostDetail(screen), FetchPayload::Post(result)) => {
                settle(&mut screen.post, request, result)
            }
            (Screen::PostDetail(screen), FetchPayload::Comments(result)) => {
                let failure = settle(&mut screen.comments, request, result);
                if screen.selected_comment.is_some() && screen.selected_comment().is_none() {
                    screen.selected_comment = None;
                }
                failure
            }
            (Screen::Profile(screen), FetchPayload::Profile(result)) => {
                let failure = settle(&mut screen.profile, request, result);
                screen.move_selection(0);
                failure
            }
            (_, payload) => {
                tracing::warn!(
                    frame = frame.0,
                    resource = ?payload.resource(),
                    "Completion does not belong to this screen"
                );
                None
            }
        };

        match failure {
            Some(err) => {
                tracing::error!(
                    frame = frame.0,
                    error_type = err.error_type(),
                    error = %err,
                    "{}",
                    resource.log_context()
                );
                self.alerts.push_back(Alert::fetch_failed(resource));
            }
            None => {
                tracing::debug!(frame = frame.0, request = request.0, resource = ?resource, "Fetch settled");
            }
        }
    }

    // ========== Screen interaction ==========

    pub fn move_selection(&mut self, delta: isize) {
        match self.active_screen_mut() {
            Some(Screen::PostList(screen)) => screen.move_selection(delta),
            Some(Screen::PostDetail(screen)) => screen.move_selection(delta),
            Some(Screen::Profile(screen)) => screen.move_selection(delta),
            None => {}
        }
    }

    /// Free scrolling of the post detail body.
    pub fn scroll(&mut self, delta: i32) {
        if let Some(Screen::PostDetail(screen)) = self.active_screen_mut() {
            screen.scroll_by(delta);
        }
    }

    /// "Yorum Yap" and "Beğen" both lead to the website.
    pub fn open_external_site(&mut self) {
        let ready = matches!(
            self.active_screen(),
            Some(Screen::PostDetail(screen)) if screen.post.data().is_some()
        );
        if ready {
            let url = self.config.links.external_site.clone();
            self.open_link(&url);
        }
    }

    pub fn link_pick_active(&self) -> bool {
        matches!(
            self.active_screen(),
            Some(Screen::PostDetail(screen)) if screen.link_pick.is_some()
        )
    }

    /// `l`: starts typing the number of a `[n]` body link.
    pub fn begin_link_pick(&mut self) {
        if let Some(Screen::PostDetail(screen)) = self.active_screen_mut() {
            screen.begin_link_pick();
        }
    }

    pub fn link_pick_digit(&mut self, digit: u32) {
        let url = match self.active_screen_mut() {
            Some(Screen::PostDetail(screen)) => screen.push_link_digit(digit),
            _ => None,
        };
        if let Some(url) = url {
            self.open_link(&url);
        }
    }

    pub fn confirm_link_pick(&mut self) {
        let url = match self.active_screen_mut() {
            Some(Screen::PostDetail(screen)) => screen.confirm_link_pick(),
            _ => None,
        };
        if let Some(url) = url {
            self.open_link(&url);
        }
    }

    pub fn cancel_link_pick(&mut self) {
        if let Some(Screen::PostDetail(screen)) = self.active_screen_mut() {
            screen.link_pick = None;
        }
    }

    /// Opens the focused cover or avatar in the browser.
    pub fn open_image(&mut self) {
        let url = match self.active_screen() {
            Some(Screen::PostList(screen)) => screen.selected_post().map(|post| post.cover.clone()),
            Some(Screen::PostDetail(screen)) => screen.post.data().map(|post| post.cover.clone()),
            Some(Screen::Profile(screen)) => screen.avatar().map(str::to_string),
            None => None,
        };
        if let Some(url) = url.filter(|url| !url.is_empty()) {
            self.open_link(&url);
        }
    }

    fn open_link(&self, url: &str) {
        tracing::info!(url, "Opening link");
        if let Err(err) = (self.link_opener)(url) {
            tracing::warn!(url, error = %err, "Failed to open link");
        }
    }
}
