mod help;
mod style;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::Snapshot;
use crate::navigation::{Choice, PermissionGrid, Section};
use crate::permissions::{Access, Labeled, Subject};
use style::{Theme, CHECK_OFF, CHECK_ON, RADIO_OFF, RADIO_ON};

const WIDTH: u16 = 55;
const BLOCK_WIDTH: u16 = 17;

pub fn render(frame: &mut Frame<'_>, view: &Snapshot<'_>) {
    let theme = Theme::new();
    let area = frame.area();
    let area = Rect {
        width: area.width.min(WIDTH),
        ..area
    };

    let [banner, pwd, options, mode, path, permissions, footer, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(9),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            format!("chmod-cli v.{}", env!("CARGO_PKG_VERSION")),
            theme.banner,
        ))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(theme.banner_border)),
        banner,
    );

    frame.render_widget(
        Paragraph::new(format!("[PWD: {}]", view.working_directory_mode)).block(
            Block::new()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(theme.rule),
        ),
        pwd,
    );

    let mut lines = vec![header(&theme, Section::Options.title())];
    lines.extend(
        view.options
            .values
            .iter()
            .map(|&v| radio_item(&theme, view.options, v)),
    );
    frame.render_widget(Paragraph::new(lines), options);

    let modes = horizontal_choice(&theme, Section::CommandMode.title(), view.mode);
    frame.render_widget(Paragraph::new(modes), mode);
    let paths = horizontal_choice(&theme, Section::PathType.title(), view.path);
    frame.render_widget(Paragraph::new(paths), path);

    render_permissions(frame, &theme, view.permissions, permissions);

    frame.render_widget(
        Paragraph::new(Line::styled(format!(" Command: {}", view.command_text), theme.footer)),
        footer,
    );

    frame.render_widget(Paragraph::new(help::lines(&theme, view.show_help)), help);
}

fn header(theme: &Theme, title: &'static str) -> Line<'static> {
    Line::styled(format!("   {title}   "), theme.header)
}

/// A radio or check item; the focused item is fully highlighted, a selected one only at its marker
fn item(
    theme: &Theme, marker: &'static str, label: &'static str, focused: bool, active: bool,
) -> Vec<Span<'static>> {
    if focused {
        vec![Span::styled(format!("{marker} {label}"), theme.active_item)]
    } else if active {
        vec![Span::styled(marker, theme.active_item), Span::raw(format!(" {label}"))]
    } else {
        vec![Span::styled(format!("{marker} {label}"), theme.item)]
    }
}

fn radio_item<T: Labeled>(theme: &Theme, choice: &Choice<T>, value: T) -> Line<'static> {
    let active = choice.selected == value;
    let marker = if active { RADIO_ON } else { RADIO_OFF };
    Line::from(item(theme, marker, value.label(), choice.is_focused(value), active))
}

fn horizontal_choice<T: Labeled>(
    theme: &Theme, title: &'static str, choice: &Choice<T>,
) -> Vec<Line<'static>> {
    let mut spans = Vec::new();
    for (i, &value) in choice.values.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.extend(radio_item(theme, choice, value).spans);
    }
    vec![header(theme, title), Line::from(spans)]
}

fn render_permissions(frame: &mut Frame<'_>, theme: &Theme, grid: &PermissionGrid, area: Rect) {
    let [title, blocks] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    frame.render_widget(Paragraph::new(header(theme, Section::Permissions.title())), title);

    let columns = Layout::horizontal([Constraint::Length(BLOCK_WIDTH); 3]).split(blocks);
    for (column, subject) in Subject::ALL.into_iter().enumerate() {
        let block = grid.block(subject);
        let block_focused = grid.cursor == Some(column);

        let mut lines = vec![
            Line::styled(format!("[{}]", subject.label()), theme.block_title),
            Line::raw("-".repeat(7)),
        ];
        for (row, access) in Access::ALL.into_iter().enumerate() {
            let active = block.contains(access);
            let focused = block_focused && block.cursor == Some(row);
            let marker = if active { CHECK_ON } else { CHECK_OFF };
            lines.push(Line::from(item(theme, marker, access.label(), focused, active)));
        }

        let border = if block_focused { theme.active_block } else { theme.block };
        frame.render_widget(
            Paragraph::new(lines).block(Block::bordered().border_style(border)),
            columns[column],
        );
    }
}
