use chrono::Utc;
use log::error;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::state::network::LoadingState;
use crate::state::scoreboard::{CardView, empty_message};
use crate::ui::layout::LayoutAreas;
use scores_api::{Sport, StatusClass, TeamLine};

static TABS: &[&str; 2] = &["NHL", "NBA"];

/// Each game card takes a status line and a detail line.
const CARD_HEIGHT: u16 = 2;

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar, app);
        }

        match app.state.active_tab {
            MenuItem::Nhl => draw_games(f, layout.main, app, Sport::Nhl),
            MenuItem::Nba => draw_games(f, layout.main, app, Sport::Nba),
            MenuItem::Help => draw_placeholder(
                f,
                layout.main,
                "Help: q=quit  1=NHL  2=NBA  Tab=switch  ↑/↓=scroll  r=refresh  f=full screen  \"=logs  Esc=back",
            ),
        }

        if let Some(logs) = layout.logs {
            draw_logs(f, logs);
        }

        draw_loading_spinner(f, f.area(), app, loading);
    });

    if let Err(e) = result {
        error!("failed to draw frame: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = match app.state.active_tab {
        MenuItem::Nhl => 0,
        MenuItem::Nba => 1,
        MenuItem::Help => 0,
    };

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

fn draw_games(f: &mut Frame, area: Rect, app: &App, sport: Sport) {
    let updated = app
        .state
        .last_updated
        .map(|t| format!(" {sport} · updated {} ", t.format("%I:%M:%S %p")))
        .unwrap_or_else(|| format!(" {sport} "));
    let block = default_border(Color::White).title(updated);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.state.last_updated.is_none() {
        draw_centered(f, inner, "Loading scores...");
        return;
    }

    let cards = app.state.scoreboard.games(sport);
    if cards.is_empty() {
        draw_centered(f, inner, &empty_message(sport));
        return;
    }

    let now = Utc::now();
    let mut lines = Vec::with_capacity(cards.len() * CARD_HEIGHT as usize);
    for card in cards {
        let view = card.view(&app.state.timers, now);
        lines.extend(card_lines(&view));
    }

    let offset = app.state.list(sport).scroll_offset.saturating_mul(CARD_HEIGHT);
    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}

fn card_lines(view: &CardView) -> [Line<'static>; CARD_HEIGHT as usize] {
    let status_style = Style::default().fg(status_color(view.status.class));
    let headline = Line::from(vec![
        Span::styled(format!("[{}] ", view.sport), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:<16}", matchup_text(&view.away, &view.home)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(view.status.text.clone(), status_style),
    ]);
    let detail = Line::from(Span::styled(
        format!("      {}", view.status.detail.clone().unwrap_or_default()),
        Style::default().fg(Color::Gray),
    ));
    [headline, detail]
}

fn matchup_text(away: &TeamLine, home: &TeamLine) -> String {
    let side = |team: &TeamLine| match team.score {
        Some(score) => format!("{} {score}", team.abbrev),
        None => team.abbrev.clone(),
    };
    format!("{} @ {}", side(away), side(home))
}

fn status_color(class: StatusClass) -> Color {
    match class {
        StatusClass::Live => Color::Green,
        StatusClass::Intermission => Color::Yellow,
        StatusClass::Future => Color::Gray,
    }
}

fn draw_centered(f: &mut Frame, area: Rect, msg: &str) {
    f.render_widget(
        Paragraph::new(msg.to_string())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        area,
    );
}

fn draw_placeholder(f: &mut Frame, area: Rect, msg: &str) {
    let block = default_border(Color::DarkGray);
    let inner = block.inner(area);
    f.render_widget(block, area);
    draw_centered(f, inner, msg);
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(logs, area);
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading {
        return;
    }
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::White));
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
