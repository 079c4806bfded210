use ratatui::text::{Line, Span};

use super::style::Theme;

#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub keys: &'static str,
    pub desc: &'static str,
}

const fn binding(keys: &'static str, desc: &'static str) -> Binding {
    Binding { keys, desc }
}

const UP: Binding = binding("↑", "move up");
const DOWN: Binding = binding("↓", "move down");
const LEFT: Binding = binding("←", "move left");
const RIGHT: Binding = binding("→", "move right");
const NEXT: Binding = binding("tab/space", "next section");
const PREV: Binding = binding("⇧ + tab", "prev section");
const SELECT: Binding = binding("enter", "select");
const COPY: Binding = binding("ctrl+c", "copy command");
const HELP: Binding = binding("?", "toggle help");
const QUIT: Binding = binding("q", "quit");

pub const SHORT: &[&[Binding]] = &[&[HELP, QUIT]];

pub const FULL: &[&[Binding]] = &[
    &[UP, DOWN, LEFT, RIGHT],
    &[NEXT, PREV],
    &[SELECT, COPY],
    &[HELP, QUIT],
];

pub fn lines(theme: &Theme, full: bool) -> Vec<Line<'static>> {
    let groups = if full { FULL } else { SHORT };
    groups
        .iter()
        .map(|group| {
            let mut spans = Vec::new();
            for (i, b) in group.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(" • ", theme.help_desc));
                }
                spans.push(Span::styled(b.keys, theme.help_key));
                spans.push(Span::styled(format!(" {}", b.desc), theme.help_desc));
            }
            Line::from(spans)
        })
        .collect()
}
