use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use super::*;
use crate::{
    model::{Album, Artist, PlaybackPointer, Track},
    render::icons::ICON_NOW_PLAYING,
    theme::Theme,
};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn artist() -> Artist {
    let track = |id: &str, title: &str, position: usize| Track {
        id: id.into(),
        title: title.into(),
        artist: "Red Hot Chili Peppers".into(),
        album: Some("Californication".into()),
        duration: Some(250),
        position,
    };

    Artist {
        id: "rhcp".into(),
        name: "Red Hot Chili Peppers".into(),
        tracks: vec![track("t1", "Otherside", 0), track("t2", "Scar Tissue", 1)],
        albums: vec![
            Album {
                id: "a1".into(),
                title: "Californication".into(),
                artist: "Red Hot Chili Peppers".into(),
                cover: Some("californication.jpg".into()),
            },
            Album {
                id: "a2".into(),
                title: "By the Way".into(),
                artist: "Red Hot Chili Peppers".into(),
                cover: None,
            },
        ],
    }
}

fn render(view: &mut ArtistDetailView, artist: &Artist, pointer: Option<&PlaybackPointer>) -> Vec<String> {
    let (width, height) = (140, 32);
    let now_playing = pointer.and_then(|p| artist.tracks.iter().find(|t| p.targets(t)));
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            view.draw(f, area, artist, pointer, now_playing, &Theme::default());
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
        .collect()
}

#[test]
fn back_is_raised_from_any_focus() {
    let artist = artist();
    let mut view = ArtistDetailView::default();
    for _ in 0..4 {
        assert_eq!(view.process_event(&key(KeyCode::Esc), &artist, None), Some(ArtistDetailAction::Back));
        assert_eq!(view.process_event(&key(KeyCode::Tab), &artist, None), None);
    }
}

#[test]
fn focus_cycles_through_ring() {
    let artist = artist();
    let mut view = ArtistDetailView::default();
    assert_eq!(view.focus, Focus::Tracks);
    view.process_event(&key(KeyCode::Tab), &artist, None);
    assert_eq!(view.focus, Focus::Albums);
    view.process_event(&key(KeyCode::Tab), &artist, None);
    assert_eq!(view.focus, Focus::Sidebar);
    view.process_event(&key(KeyCode::BackTab), &artist, None);
    assert_eq!(view.focus, Focus::Albums);
}

#[test]
fn sidebar_reports_library_section() {
    let artist = artist();
    let mut view = ArtistDetailView::default();
    view.focus = Focus::Sidebar;
    view.process_event(&key(KeyCode::Up), &artist, None);
    assert_eq!(
        view.process_event(&key(KeyCode::Enter), &artist, None),
        Some(ArtistDetailAction::ClickLibraryItem("albums".into()))
    );
}

#[test]
fn track_play_is_forwarded() {
    let artist = artist();
    let mut view = ArtistDetailView::default();
    view.process_event(&key(KeyCode::Down), &artist, None);
    view.process_event(&key(KeyCode::Down), &artist, None);
    assert_eq!(
        view.process_event(&key(KeyCode::Enter), &artist, None),
        Some(ArtistDetailAction::PlayTrack { id: "t2".into(), position: 1 })
    );
    assert_eq!(
        view.process_event(&key(KeyCode::Char('m')), &artist, None),
        Some(ArtistDetailAction::OpenContextMenu("t2".into()))
    );
}

#[test]
fn header_buttons_raise_unwired_intents() {
    let artist = artist();
    let mut view = ArtistDetailView::default();
    view.focus = Focus::Actions;
    assert_eq!(view.process_event(&key(KeyCode::Enter), &artist, None), Some(ArtistDetailAction::Play));
    view.process_event(&key(KeyCode::Right), &artist, None);
    assert_eq!(view.process_event(&key(KeyCode::Enter), &artist, None), Some(ArtistDetailAction::Shuffle));
}

#[test]
fn album_tiles_move_but_do_not_navigate() {
    let artist = artist();
    let mut view = ArtistDetailView::default();
    view.focus = Focus::Albums;

    assert_eq!(view.process_event(&key(KeyCode::Enter), &artist, None), None);
    view.process_event(&key(KeyCode::Right), &artist, None);
    assert_eq!(view.album_cursor, Some(0));
    view.process_event(&key(KeyCode::Right), &artist, None);
    view.process_event(&key(KeyCode::Right), &artist, None);
    assert_eq!(view.album_cursor, Some(1));
    assert_eq!(view.process_event(&key(KeyCode::Enter), &artist, None), None);
    view.process_event(&key(KeyCode::Left), &artist, None);
    assert_eq!(view.album_cursor, Some(0));
}

#[test]
fn album_cursor_ignores_empty_grid() {
    let mut artist = artist();
    artist.albums.clear();
    let mut view = ArtistDetailView::default();
    view.focus = Focus::Albums;
    view.process_event(&key(KeyCode::Right), &artist, None);
    assert_eq!(view.album_cursor, None);
}

#[test]
fn renders_composed_sections() {
    let artist = artist();
    let mut view = ArtistDetailView::default();
    let pointer = PlaybackPointer::id("t1", true);
    let lines = render(&mut view, &artist, Some(&pointer));
    let screen = lines.join("\n");

    assert!(screen.contains("Library"));
    assert!(screen.contains("Artists"));
    assert!(screen.contains("Back"));
    assert!(screen.contains("Red Hot Chili Peppers"));
    assert!(screen.contains("Play"));
    assert!(screen.contains("Shuffle"));
    assert!(screen.contains("Tracks"));
    assert!(screen.contains("See all"));
    assert!(screen.contains("Albums"));
    assert!(screen.contains("By the Way"));
    assert!(screen.contains("californication.jpg"));

    let now_playing = format!("{} Otherside", ICON_NOW_PLAYING);
    assert!(lines.iter().any(|line| line.contains(&now_playing)));
}

#[test]
fn renders_empty_artist() {
    let artist = Artist {
        id: "nobody".into(),
        name: "Nobody".into(),
        tracks: vec![],
        albums: vec![],
    };
    let mut view = ArtistDetailView::default();
    let screen = render(&mut view, &artist, None).join("\n");
    assert!(screen.contains("Nobody"));
    assert!(screen.contains("Stopped"));
}
