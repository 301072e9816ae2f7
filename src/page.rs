use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use clap::ValueEnum;
use tracing::{debug, info};

use crate::content::{Content, Link};
use crate::highlight::{Highlight, HIGHLIGHT_INTERVAL};
use crate::reveal::Reveal;
use crate::typewriter::{Timings, Typewriter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PageKind {
    Home,
    About,
    Contact,
}

impl PageKind {
    pub fn headline(self, content: &Content) -> &str {
        match self {
            PageKind::Home => &content.profile.name,
            PageKind::About => &content.about.headline,
            PageKind::Contact => &content.contact.headline,
        }
    }

    /// Numbered links the page offers, in display order.
    pub fn links(self, content: &Content) -> &[Link] {
        match self {
            PageKind::Home => &content.profile.links,
            PageKind::About => &[],
            PageKind::Contact => &content.contact.links,
        }
    }

    /// Fade-in delays (body, links) counted from the end of typing.
    fn reveal_delays(self) -> (Duration, Duration) {
        match self {
            PageKind::Home => (Duration::from_millis(500), Duration::from_millis(800)),
            PageKind::About | PageKind::Contact => {
                (Duration::from_millis(500), Duration::from_millis(500))
            }
        }
    }
}

/// Animation periods shared by every page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageTimings {
    pub typewriter: Timings,
    pub highlight: Duration,
}

impl Default for PageTimings {
    fn default() -> Self {
        Self {
            typewriter: Timings::default(),
            highlight: HIGHLIGHT_INTERVAL,
        }
    }
}

/// A mounted page: owns its headline session and the content gated on it.
///
/// Dropping the view unmounts it, which cancels every timer it holds.
#[derive(Debug)]
pub struct PageView {
    kind: PageKind,
    headline: Typewriter,
    typing_complete: Rc<Cell<bool>>,
    body: Reveal,
    links: Reveal,
    now_playing: Option<Highlight>,
    scroll: u16,
}

impl PageView {
    pub fn mount(kind: PageKind, content: &Content, timings: PageTimings) -> Self {
        let typing_complete = Rc::new(Cell::new(false));
        let headline = {
            let typing_complete = Rc::clone(&typing_complete);
            Typewriter::with_timings(kind.headline(content), timings.typewriter, move || {
                typing_complete.set(true)
            })
        };

        let now_playing = match kind {
            PageKind::About => Some(Highlight::new(
                content.about.now_playing.clone(),
                timings.highlight,
            )),
            _ => None,
        };

        let (body_delay, links_delay) = kind.reveal_delays();
        let mut view = Self {
            kind,
            headline,
            typing_complete,
            body: Reveal::after(body_delay),
            links: Reveal::after(links_delay),
            now_playing,
            scroll: 0,
        };
        view.sync_reveals();

        info!(page = %kind, "page mounted");
        view
    }

    fn sync_reveals(&mut self) {
        if self.typing_complete.get() {
            self.body.trigger();
            self.links.trigger();
        }
    }

    pub fn advance(&mut self, elapsed: Duration) {
        // fade-ins count from the moment typing finished, even mid-frame
        let since_complete = self.headline.advance(elapsed);
        self.sync_reveals();
        self.body.advance(since_complete);
        self.links.advance(since_complete);

        if let Some(highlight) = self.now_playing.as_mut() {
            highlight.advance(elapsed);
        }
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn headline(&self) -> &Typewriter {
        &self.headline
    }

    pub fn typing_complete(&self) -> bool {
        self.typing_complete.get()
    }

    pub fn body_visible(&self) -> bool {
        self.body.is_visible()
    }

    pub fn links_visible(&self) -> bool {
        self.links.is_visible()
    }

    pub fn now_playing(&self) -> Option<&Highlight> {
        self.now_playing.as_ref()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_home(&mut self) {
        self.scroll = 0;
    }

    /// Clamp the scroll offset once the renderer knows how tall the page is.
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }
}

impl Drop for PageView {
    fn drop(&mut self) {
        debug!(page = %self.kind, "page unmounted");
    }
}
