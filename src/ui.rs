pub mod screen;

use folio::{
    content::{Content, Link},
    nav::{Menu, MENU_ITEMS},
    page::{PageKind, PageView},
};
use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;
use webbrowser::Browser;

use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

const ACCENT: Color = Color::Rgb(0x6F, 0x7F, 0x63);
const OVERLAY: Color = Color::Rgb(0xC9, 0xC6, 0xC1);
const INK: Color = Color::Rgb(0x1E, 0x1E, 0x1E);

/// How a page sits in the body area
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// vertically centred, for short pages
    Centered,
    /// top aligned and scrollable
    Scrolled,
}

pub type PageLines = fn(&Content, &PageView) -> Vec<Line<'static>>;

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        bold().add_modifier(Modifier::UNDERLINED),
    ))
}

fn headline_line(page: &PageView) -> Line<'static> {
    Line::from(Span::styled(page.headline().display(), bold()))
}

/// Paragraph gated on the headline; hidden text keeps one blank row
fn gated(text: &str, visible: bool) -> Line<'static> {
    if visible {
        Line::from(Span::styled(text.to_string(), bold()))
    } else {
        Line::default()
    }
}

fn link_lines(links: &[Link], visible: bool) -> Vec<Line<'static>> {
    if !visible {
        return links.iter().map(|_| Line::default()).collect();
    }

    links
        .iter()
        .enumerate()
        .map(|(idx, link)| {
            let mut spans = vec![
                Span::styled(format!("{} ", idx + 1), dim()),
                Span::styled(
                    link.label.clone(),
                    bold().add_modifier(Modifier::UNDERLINED),
                ),
            ];
            if !link.is_mailto() {
                spans.push(Span::styled(format!("  {}", link.url), dim()));
            }
            Line::from(spans)
        })
        .collect()
}

pub fn home_lines(content: &Content, page: &PageView) -> Vec<Line<'static>> {
    let mut lines = vec![
        headline_line(page),
        Line::default(),
        gated(&content.profile.bio, page.body_visible()),
        Line::default(),
    ];
    lines.extend(link_lines(
        PageKind::Home.links(content),
        page.links_visible(),
    ));
    lines
}

pub fn contact_lines(content: &Content, page: &PageView) -> Vec<Line<'static>> {
    let mut lines = vec![headline_line(page), Line::default()];
    lines.extend(link_lines(
        PageKind::Contact.links(content),
        page.links_visible(),
    ));
    lines
}

pub fn about_lines(content: &Content, page: &PageView) -> Vec<Line<'static>> {
    let about = &content.about;
    let mut lines = vec![
        headline_line(page),
        Line::default(),
        gated(&about.summary, page.body_visible()),
        Line::default(),
        heading("note"),
    ];

    let mut playing = vec![Span::raw("♪ currently listening to: ")];
    if let Some(highlight) = page.now_playing() {
        let (before, lit, after) = highlight.parts();
        playing.push(Span::styled(before.to_string(), bold()));
        playing.push(Span::styled(lit.to_string(), bold().fg(ACCENT)));
        playing.push(Span::styled(after.to_string(), bold()));
    }
    lines.push(Line::from(playing));
    lines.push(Line::from(about.note.clone()));
    lines.push(Line::default());

    lines.push(heading("skills"));
    for category in &about.skills {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", category.category), bold()),
            Span::raw(category.skills.iter().join(" · ")),
        ]));
    }
    lines.push(Line::default());

    lines.push(heading("experience"));
    for job in &about.experience {
        lines.push(Line::from(Span::styled(job.title.clone(), bold())));
        lines.push(Line::from(job.company.clone()));
        lines.push(Line::from(Span::styled(
            format!("{} • {}", job.date, job.location),
            dim(),
        )));
        lines.push(Line::from(job.description.clone()));
        lines.push(Line::default());
    }

    if !about.photos.is_empty() {
        lines.push(heading("photos"));
        for caption in &about.photos {
            lines.push(Line::from(Span::styled(
                format!("▣ {caption}"),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
    }

    lines
}

/// Rows a set of lines takes up once wrapped to `width`
fn occupied_rows(lines: &[Line], width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    lines
        .iter()
        .map(|line| {
            let w: usize = line.spans.iter().map(|s| s.content.width()).sum();
            (w as f64 / width as f64).ceil().max(1.0) as u16
        })
        .sum()
}

pub fn render_page(app: &mut App, f: &mut Frame, build: PageLines, placement: Placement) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // menu + initials
            Constraint::Length(1), // padding
            Constraint::Min(1),    // page body
            Constraint::Length(1), // legend
        ])
        .split(area);

    render_header(app, chunks[0], f.buffer_mut());

    let body = chunks[2];
    let lines = build(&app.content, &app.page);
    let (paragraph, target) = match placement {
        Placement::Centered => {
            let rows = occupied_rows(&lines, body.width);
            let pad = body.height.saturating_sub(rows) / 2;
            let target = Rect {
                y: body.y + pad,
                height: body.height - pad,
                ..body
            };
            (Paragraph::new(lines).wrap(Wrap { trim: true }), target)
        }
        Placement::Scrolled => {
            let max_scroll = occupied_rows(&lines, body.width).saturating_sub(body.height);
            app.page.clamp_scroll(max_scroll);
            let paragraph = Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .scroll((app.page.scroll(), 0));
            (paragraph, body)
        }
    };
    f.render_widget(paragraph, target);

    render_legend(app, chunks[3], f.buffer_mut());
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let menu_style = if app.menu.is_open() {
        bold().fg(ACCENT)
    } else {
        bold()
    };
    Paragraph::new(Span::styled("≡ menu", menu_style)).render(area, buf);
    Paragraph::new(Span::styled(app.content.profile.initials.clone(), bold()))
        .alignment(Alignment::Right)
        .render(area, buf);
}

fn render_legend(app: &App, area: Rect, buf: &mut Buffer) {
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let mut legend = String::from("(m)enu / (h)ome / (a)bout / (c)ontact");
    match app.page.kind() {
        PageKind::About => legend.push_str(" / (↑↓) scroll"),
        kind => {
            let count = kind.links(&app.content).len();
            if count > 0 && Browser::is_available() {
                legend.push_str(&format!(" / (1-{count}) open"));
            }
        }
    }
    legend.push_str(" / (q)uit");

    Paragraph::new(Span::styled(legend, italic_style)).render(area, buf);
}

/// Full-screen navigation overlay
pub fn render_menu(menu: &Menu, area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);
    Block::default()
        .style(Style::default().bg(OVERLAY))
        .render(area, buf);

    let mut spans = Vec::new();
    for (idx, kind) in MENU_ITEMS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("      "));
        }
        let colour = if idx == menu.selected_index() {
            ACCENT
        } else {
            INK
        };
        spans.push(Span::styled(
            kind.to_string(),
            bold().fg(colour).add_modifier(Modifier::UNDERLINED),
        ));
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(rows[1], buf);
    Paragraph::new(Span::styled(
        "(←/→) choose / (enter) go / (m) close",
        Style::default().fg(INK).add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .render(rows[3], buf);
}
