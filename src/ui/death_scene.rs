use super::centered_rows;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw_death_scene(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "YOU DIED",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Your strength fades. A new hero will rise."),
        Line::from(Span::styled(
            "Press any button",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let height = lines.len() as u16;
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_rows(area, height));
}
