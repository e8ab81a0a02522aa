use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle},
        Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap,
    },
    Frame,
};

use solciv_core::Empire;
use solciv_utils::format::{format_boost, format_estate, format_sol};

use super::state::App;

// ─── Color palette ──────────────────────────────────────────────────

const ACCENT: Color = Color::Cyan;
const GREEN: Color = Color::Rgb(46, 204, 113);
const RED: Color = Color::Red;
const DIM: Color = Color::DarkGray;
const YELLOW: Color = Color::Yellow;
const WHITE: Color = Color::White;
const MAP_BG: Color = Color::Rgb(11, 15, 20);
const RING_INNER: Color = Color::Rgb(52, 73, 94);
const BG_HEADER: Color = Color::Rgb(20, 20, 40);

// ─── Main render ────────────────────────────────────────────────────

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Root layout: header(3) + address(3) + body(flex) + status(1)
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Address input
            Constraint::Min(10),   // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, app, root[0]);
    render_input(frame, app, root[1]);
    render_body(frame, app, root[2]);
    render_status_bar(frame, app, root[3]);

    if app.show_help {
        render_help(frame, area);
    }
}

// ─── Header ─────────────────────────────────────────────────────────

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(DIM))
        .style(Style::default().bg(BG_HEADER));

    let mut spans = vec![
        Span::styled(" SOLCIV ", Style::default().fg(Color::Black).bg(ACCENT).bold()),
        Span::raw("  "),
        Span::styled(app.session.display_name(), Style::default().fg(YELLOW).bold()),
    ];
    if let Some(e) = &app.empire {
        spans.push(Span::raw("  │  "));
        spans.push(Span::styled(e.profile.tier.name(), Style::default().fg(WHITE).bold()));
        spans.push(Span::raw("  │  "));
        spans.push(Span::styled(format!("seed {}", e.seed), Style::default().fg(DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

// ─── Address input ──────────────────────────────────────────────────

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let border = if app.editing { ACCENT } else { DIM };
    let block = Block::default()
        .title(" Solana address ")
        .title_style(Style::default().fg(border).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));

    let line = if app.input.is_empty() && !app.editing {
        Line::from(Span::styled(
            " press i to type an address, g to enter as guest",
            Style::default().fg(DIM),
        ))
    } else {
        let cursor = if app.editing { "▏" } else { "" };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(app.input.as_str(), Style::default().fg(WHITE)),
            Span::styled(cursor, Style::default().fg(ACCENT)),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

// ─── Body ───────────────────────────────────────────────────────────

fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(area);

    match &app.empire {
        Some(e) => render_map(frame, e, cols[0]),
        None => render_empty_map(frame, cols[0]),
    }

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Stats card
            Constraint::Length(5),  // Share text
            Constraint::Min(4),     // Log
        ])
        .split(cols[1]);

    render_stats(frame, app, right[0]);
    render_share(frame, app, right[1]);
    render_log(frame, app, right[2]);
}

fn card(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(ACCENT).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(DIM))
}

/// Shapes live in a 100×100 box with y pointing down; the canvas has y up.
fn render_map(frame: &mut Frame, empire: &Empire, area: Rect) {
    let density = empire.density;
    let canvas = Canvas::default()
        .block(card("Empire Map"))
        .background_color(MAP_BG)
        .marker(Marker::Braille)
        .x_bounds([0.0, 110.0])
        .y_bounds([0.0, 100.0])
        .paint(move |ctx| {
            ctx.draw(&Circle { x: 49.0, y: 77.0, radius: 23.0, color: GREEN });
            ctx.draw(&Circle { x: 49.0, y: 77.0, radius: 16.0, color: RING_INNER });
            ctx.layer();
            for s in &empire.shapes {
                let color = if s.opacity >= 0.7 { WHITE } else { Color::Gray };
                ctx.draw(&Circle { x: s.x, y: 100.0 - s.y, radius: s.r, color });
            }
            ctx.layer();
            let star = if density >= 0.6 { "✶✶" } else { "✶" };
            ctx.print(48.0, 77.0, Span::styled(star, Style::default().fg(WHITE).bold()));
        });
    frame.render_widget(canvas, area);
}

fn render_empty_map(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("  No empire yet.", Style::default().fg(DIM))),
        Line::from(""),
        Line::from("  g      Enter as guest"),
        Line::from("  Enter  Load the typed address"),
    ];
    frame.render_widget(Paragraph::new(text).block(card("Empire Map")), area);
}

fn stat_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {label:<13}"), Style::default().fg(DIM)),
        Span::styled(value, Style::default().fg(color).bold()),
    ])
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let text = match &app.empire {
        Some(e) => {
            let p = &e.profile;
            vec![
                stat_line("Tier", p.tier.name().to_string(), YELLOW),
                stat_line("Estate", format_estate(p.estate.name, p.estate.tiles), WHITE),
                stat_line("SOL", format_sol(p.balance), WHITE),
                stat_line("Token Accts", p.token_account_count.to_string(), WHITE),
                stat_line("$SOLCIV", p.derived_currency.to_string(), GREEN),
                stat_line("Boost", format_boost(p.boost), ACCENT),
                Line::from(""),
                Line::from(Span::styled(
                    " Smaller wallets get a bigger boost.",
                    Style::default().fg(DIM),
                )),
            ]
        }
        None => vec![Line::from(Span::styled(" —", Style::default().fg(DIM)))],
    };
    frame.render_widget(Paragraph::new(text).block(card("Stats")), area);
}

fn render_share(frame: &mut Frame, app: &App, area: Rect) {
    let text = app.share_text().unwrap_or_default();
    let para = Paragraph::new(text)
        .style(Style::default().fg(WHITE))
        .wrap(Wrap { trim: true })
        .block(card("Share"));
    frame.render_widget(para, area);
}

fn render_log(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .log()
        .map(|entry| {
            let color = if entry.message.contains("failed") { RED } else { WHITE };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", entry.at), Style::default().fg(DIM)),
                Span::styled(entry.message.as_str(), Style::default().fg(color)),
            ]))
        })
        .collect();

    let list = if items.is_empty() {
        List::new(vec![ListItem::new(Span::styled(" Empty.", Style::default().fg(DIM)))])
    } else {
        List::new(items)
    };
    frame.render_widget(list.block(card("Log")), area);
}

// ─── Status bar ─────────────────────────────────────────────────────

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let state = if app.loading {
        Span::styled(" ◌ loading… ", Style::default().fg(YELLOW))
    } else {
        Span::styled(" ● ready ", Style::default().fg(GREEN))
    };

    let key = |k: &'static str, bg: Color| {
        Span::styled(
            k,
            Style::default()
                .fg(Color::Black)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
    };

    let line = Line::from(vec![
        state,
        Span::styled(format!(" {}  ", app.config.ledger.rpc_url), Style::default().fg(DIM)),
        key("g", ACCENT),
        Span::styled(" Guest ", Style::default().fg(DIM)),
        key("s", ACCENT),
        Span::styled(" Save ", Style::default().fg(DIM)),
        key("?", ACCENT),
        Span::styled(" Help ", Style::default().fg(DIM)),
        key("q", RED),
        Span::styled(" Quit", Style::default().fg(DIM)),
    ]);

    let bar = Paragraph::new(line).style(Style::default().bg(BG_HEADER));
    frame.render_widget(bar, area);
}

// ─── Help overlay ───────────────────────────────────────────────────

fn render_help(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(55, 60, area);

    frame.render_widget(Clear, popup);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("  Address box", Style::default().fg(ACCENT).bold())),
        Line::from(""),
        Line::from("  i / / / Tab   Focus the address box"),
        Line::from("  Enter         Load the typed address"),
        Line::from("  Esc / Tab     Leave the address box"),
        Line::from(""),
        Line::from(Span::styled("  Actions", Style::default().fg(ACCENT).bold())),
        Line::from(""),
        Line::from("  g             Enter as guest (random wallet)"),
        Line::from("  s             Save SVG + share text to ~/.solciv/maps"),
        Line::from("  ?             Toggle help"),
        Line::from("  q / Ctrl+C    Quit"),
        Line::from(""),
        Line::from(Span::styled("  Press ? or Esc to close", Style::default().fg(DIM))),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .title_style(Style::default().fg(ACCENT).bold())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT)),
        )
        .style(Style::default().bg(Color::Rgb(15, 15, 30)));

    frame.render_widget(help, popup);
}

// ─── Helpers ────────────────────────────────────────────────────────

/// Create a centered rectangle for overlay popups.
fn centered_rect(pct_x: u16, pct_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - pct_y) / 2),
            Constraint::Percentage(pct_y),
            Constraint::Percentage((100 - pct_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - pct_x) / 2),
            Constraint::Percentage(pct_x),
            Constraint::Percentage((100 - pct_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
