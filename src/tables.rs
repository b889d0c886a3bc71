use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::message::InfoMessage;

#[must_use]
pub fn build_summary_table(messages: &[InfoMessage]) -> Table {
    let max_calories = messages.iter().map(|message| message.calories).max();

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec![
        "Тип тренировки",
        "Длительность",
        "Дистанция",
        "Ср. скорость",
        "Потрачено ккал",
    ]);
    for message in messages {
        table.add_row(vec![
            Cell::new(message.training_type),
            Cell::new(message.duration).set_alignment(CellAlignment::Right),
            Cell::new(message.distance).set_alignment(CellAlignment::Right),
            Cell::new(message.speed).set_alignment(CellAlignment::Right),
            Cell::new(message.calories).set_alignment(CellAlignment::Right).fg(
                if Some(message.calories) == max_calories { Color::Red } else { Color::Reset },
            ),
        ]);
    }
    table
}
