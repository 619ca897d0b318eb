use super::centered_rows;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw_welcome_scene(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "THE LEGEND OF",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "X O R",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any button to begin your journey",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let height = lines.len() as u16;
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_rows(area, height));
}
