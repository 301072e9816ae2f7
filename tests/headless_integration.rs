use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio::content::Content;
use folio::page::{PageKind, PageTimings, PageView};
use folio::runtime::{FixedTicker, FolioEvent, Runner, TestEventSource};
use folio::typewriter::{Phase, Timings};

fn fast_timings() -> PageTimings {
    PageTimings {
        typewriter: Timings {
            typing: Duration::from_millis(2),
            ellipsis: Duration::from_millis(5),
        },
        highlight: Duration::from_millis(3),
    }
}

// Headless run of a page through the internal runtime without a TTY.
// Each frame feeds the measured wall time, as the real loop does.
#[test]
fn headless_page_types_and_reveals() {
    let content = Content::default();
    let mut page = PageView::mount(PageKind::Contact, &content, fast_timings());

    let (_tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let mut runner = Runner::new(es, FixedTicker::new(Duration::from_millis(1)));

    for _ in 0..2_000u32 {
        let (event, elapsed) = runner.next_frame();
        if let FolioEvent::Tick = event {
            page.advance(elapsed);
        }
        if page.links_visible() {
            break;
        }
    }

    assert!(page.typing_complete());
    assert!(page.links_visible());
    assert_eq!(page.headline().revealed(), "contact me");
    assert_eq!(page.headline().phase(), Phase::Cycling);
}

#[test]
fn headless_keys_pass_through_runner() {
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    tx.send(FolioEvent::Key(KeyEvent::new(
        KeyCode::Char('m'),
        KeyModifiers::NONE,
    )))
    .unwrap();

    match runner.step() {
        FolioEvent::Key(key) => assert_eq!(key.code, KeyCode::Char('m')),
        other => panic!("expected key event, got {other:?}"),
    }
    assert!(matches!(runner.step(), FolioEvent::Tick));
}

#[test]
fn headless_unmount_stops_callbacks() {
    let content = Content::default();
    let mut page = PageView::mount(PageKind::Home, &content, fast_timings());
    page.advance(Duration::from_millis(4));
    let typed = page.headline().revealed().to_string();
    assert_eq!(typed.chars().count(), 2);

    // a new mount replaces the old session entirely
    page = PageView::mount(PageKind::About, &content, fast_timings());
    assert_eq!(page.headline().revealed(), "");
    page.advance(Duration::from_millis(2));
    assert_eq!(page.headline().revealed(), "a");
}
