use super::{centered_rows, SceneContext};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the travel screen with a gauge of how close the next monster is
pub fn draw_travel_scene(frame: &mut Frame, area: Rect, ctx: &SceneContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Title
            Constraint::Length(3), // Movement gauge
            Constraint::Length(2), // Stats
        ])
        .split(area);

    let title = vec![
        Line::from(Span::styled(
            "TRAVELING",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Keep walking. Something lurks ahead.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        centered_rows(chunks[0], 2),
    );

    let ratio = match ctx.travel_progress {
        Some((total, threshold)) if threshold > 0 => (total as f64 / threshold as f64).min(1.0),
        _ => 0.0,
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Distance"))
        .gauge_style(Style::default().fg(Color::Green))
        .label(format!("{:.0}%", ratio * 100.0))
        .ratio(ratio);
    frame.render_widget(gauge, chunks[1]);

    let player = ctx.player;
    let stats = Line::from(format!(
        "HP {}/{}   Sword {}  Magic {}  Bow {}",
        player.current_health,
        player.max_health,
        player.sword_damage,
        player.magic_damage,
        player.bow_damage
    ));
    frame.render_widget(
        Paragraph::new(stats).alignment(Alignment::Center),
        chunks[2],
    );
}
