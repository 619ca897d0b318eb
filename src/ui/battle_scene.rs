use super::monster_sprites::sprite_for;
use super::{centered_rows, Hud, SceneContext};
use crate::combat::types::{AttackReport, DamageType, StatBoost};
use crate::core::events::ViewSignal;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the battle screen: monster portrait and health, player health, the
/// three attack buttons and what happened on the last attack
pub fn draw_battle_scene(frame: &mut Frame, area: Rect, hud: &Hud, ctx: &SceneContext) {
    let Some(encounter) = ctx.encounter else {
        return;
    };

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Monster
            Constraint::Length(16), // Attack icons
        ])
        .split(area);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Min(4),    // Sprite
            Constraint::Length(3), // Monster HP
            Constraint::Length(1), // Player HP
            Constraint::Length(1), // Last attack
        ])
        .split(h_chunks[0]);

    let name = Paragraph::new(Line::from(Span::styled(
        encounter.monster.name,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(name, v_chunks[0]);

    let sprite = sprite_for(encounter.monster.sprite);
    frame.render_widget(
        Paragraph::new(sprite.art).alignment(Alignment::Center),
        centered_rows(v_chunks[1], sprite.height()),
    );

    let (current, max) = hud.monster_health.unwrap_or((
        encounter.monster_current_health,
        encounter.monster.max_health,
    ));
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Monster"))
        .gauge_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .label(format!("{}/{}", current.max(0), max))
        .percent(ViewSignal::monster_health_percent(current, max));
    frame.render_widget(gauge, v_chunks[2]);

    let player_health = hud.player_health.unwrap_or(ctx.player.current_health);
    frame.render_widget(
        Paragraph::new(format!("HP: {}", player_health)).alignment(Alignment::Center),
        v_chunks[3],
    );

    if let Some(report) = ctx.last_attack {
        frame.render_widget(
            Paragraph::new(attack_summary(report))
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center),
            v_chunks[4],
        );
    }

    draw_attack_icons(frame, h_chunks[1], ctx);
}

fn draw_attack_icons(frame: &mut Frame, area: Rect, ctx: &SceneContext) {
    let resisted = ctx
        .encounter
        .map(|e| e.monster.resistances)
        .unwrap_or_default();

    let lines: Vec<Line> = [
        (DamageType::Sword, "↑"),
        (DamageType::Magic, "⏎"),
        (DamageType::Bow, "↓"),
    ]
    .iter()
    .flat_map(|&(damage_type, key)| {
        let color = if resisted.contains(damage_type) {
            Color::DarkGray
        } else {
            Color::Cyan
        };
        [
            Line::from(vec![
                Span::styled(format!("{} ", key), Style::default().fg(Color::Yellow)),
                Span::styled(damage_type.name(), Style::default().fg(color)),
                Span::raw(format!(" {}", ctx.player.damage_for(damage_type))),
            ]),
            Line::from(""),
        ]
    })
    .collect();

    let icons = Paragraph::new(lines).block(Block::default().borders(Borders::LEFT));
    frame.render_widget(icons, area);
}

fn attack_summary(report: &AttackReport) -> String {
    let mut text = format!(
        "{} hits for {}{}",
        report.damage_type.name(),
        report.damage_dealt,
        if report.was_resisted { " (resisted)" } else { "" }
    );
    if let Some(damage) = report.counter_damage {
        text.push_str(&format!(", you take {}", damage));
    }
    if let Some(boost) = report.stat_boost {
        match boost {
            StatBoost::Damage(damage_type) => {
                text.push_str(&format!(", {} +1", damage_type.name()))
            }
            StatBoost::Health => text.push_str(", max HP +1"),
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::types::AttackOutcome;

    #[test]
    fn test_attack_summary() {
        let report = AttackReport {
            outcome: AttackOutcome::Continue,
            damage_type: DamageType::Sword,
            damage_dealt: 0,
            was_resisted: true,
            monster_health: 7,
            monster_max_health: 7,
            counter_damage: Some(1),
            player_health: 9,
            stat_boost: None,
        };
        let text = attack_summary(&report);
        assert!(text.contains("(resisted)"));
        assert!(text.contains("you take 1"));
    }
}
