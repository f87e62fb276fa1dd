// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::{App, FIELDS, Field, InputState};
use crate::diagram::DiagramModel;
use crate::lingo::Labels;

const PANEL_WIDTH: u16 = 40;
const NODE_BOX_WIDTH: usize = 24;

/// Renders the user interface widgets.
pub fn render(app: &mut App, frame: &mut Frame) {
    if app.state() == InputState::Help {
        render_help(app, frame, frame.area());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_dashboard(app, frame, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(PANEL_WIDTH), Constraint::Min(1)].as_ref())
        .split(chunks[2]);
    render_panel(app, frame, body[0]);
    render_diagram(app, frame, body[1]);

    render_message(app, frame, chunks[3]);
}

fn base_style() -> Style {
    Style::default().fg(Color::Cyan).bg(Color::Black)
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_alignment(Alignment::Left)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(app: &mut App, frame: &mut Frame, area: Rect) {
    let labels = app.lang().labels();
    let sizing = sizing_label(app, labels);
    let text = vec![Line::from(vec![
        Span::styled(
            labels.app_title,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::from("  "),
        Span::styled(labels.app_subtitle, Style::default().fg(Color::Green)),
        Span::from("  |  "),
        Span::from(sizing),
    ])];
    frame.render_widget(
        Paragraph::new(text)
            .block(bordered(""))
            .style(base_style())
            .alignment(Alignment::Left),
        area,
    );
}

fn sizing_label(app: &App, labels: &'static Labels) -> &'static str {
    use loom_topology::config::SwitchSizing;
    match app.config().switch_sizing {
        SwitchSizing::Derived => labels.sizing_derived,
        SwitchSizing::Explicit { .. } => labels.sizing_explicit,
    }
}

fn render_dashboard(app: &mut App, frame: &mut Frame, area: Rect) {
    let labels = app.lang().labels();
    let stats = app.stats();
    let cards = [
        (labels.total_gpus, stats.total_gpus, Color::Green),
        (labels.total_rtsw, stats.total_rtsw_chips, Color::Cyan),
        (labels.total_ftsw, stats.total_ftsw_chips, Color::Blue),
        (labels.total_stsw, stats.total_stsw_chips, Color::Magenta),
        (labels.total_chips, stats.grand_total_chips, Color::Yellow),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5].as_ref())
        .split(area);

    for ((label, value, color), chunk) in cards.iter().zip(chunks.iter()) {
        let line = Line::from(vec![Span::styled(
            format_count(*value),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        )]);
        frame.render_widget(
            Paragraph::new(vec![line])
                .block(bordered(label))
                .style(base_style())
                .alignment(Alignment::Right),
            *chunk,
        );
    }
}

fn field_label(field: Field, labels: &'static Labels) -> &'static str {
    match field {
        Field::L1Units => labels.l1_units,
        Field::GpusPerL1 => labels.gpus_per_l1,
        Field::RtswPerL1 => labels.rtsw_per_l1,
        Field::FtswPerL1 => labels.ftsw_per_l1,
        Field::StswRatio => labels.stsw_ratio,
    }
}

fn field_description(field: Field, labels: &'static Labels) -> &'static str {
    match field {
        Field::L1Units => labels.l1_units_desc,
        Field::GpusPerL1 => labels.gpus_per_l1_desc,
        Field::RtswPerL1 => labels.rtsw_per_l1_desc,
        Field::FtswPerL1 => labels.ftsw_per_l1_desc,
        Field::StswRatio => labels.stsw_ratio_desc,
    }
}

/// Displayed value for a field: the entry buffer while typing,
/// otherwise the current value with decimals only on the ratio.
fn field_display(app: &App, field: Field) -> String {
    if field == app.selected() && app.state() == InputState::Entry {
        return format!("{}_", app.entry);
    }
    let value = app.field_value(field);
    if field.is_integral() {
        format!("{}", value as u64)
    } else {
        format!("{value:.1}")
    }
}

fn render_panel(app: &mut App, frame: &mut Frame, area: Rect) {
    let labels = app.lang().labels();
    let mut lines = Vec::new();

    for field in FIELDS {
        let selected = field == app.selected();
        let marker = if selected { "> " } else { "  " };
        let label = field_label(field, labels);
        let value = field_display(app, field);

        let pad = (PANEL_WIDTH as usize)
            .saturating_sub(marker.len() + label.len() + value.len() + 4)
            .max(1);
        let mut style = Style::default();
        if selected {
            style = style.add_modifier(Modifier::BOLD).fg(Color::Green);
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{label}"), style),
            Span::from(" ".repeat(pad)),
            Span::styled(value, style),
        ]));

        if selected {
            lines.push(Line::from(vec![
                Span::from("    "),
                Span::styled(
                    field_description(field, labels),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]));
        }
        lines.push(Line::from(vec![Span::from("")]));
    }

    lines.push(Line::from(vec![Span::styled(
        format!("e: {}  r: {}  ?: help", labels.export, labels.reset),
        Style::default().add_modifier(Modifier::DIM),
    )]));

    frame.render_widget(
        Paragraph::new(lines)
            .block(bordered(labels.config_panel))
            .style(base_style())
            .alignment(Alignment::Left),
        area,
    );
}

/// Join the rows of several equal-width text boxes side by side.
fn join_box_rows(boxes: &[Vec<String>], gap: &str) -> Vec<String> {
    let height = boxes.iter().map(Vec::len).max().unwrap_or(0);
    (0..height)
        .map(|row| {
            boxes
                .iter()
                .map(|b| {
                    b.get(row)
                        .cloned()
                        .unwrap_or_else(|| " ".repeat(NODE_BOX_WIDTH))
                })
                .collect::<Vec<_>>()
                .join(gap)
        })
        .collect()
}

/// Draw one box as text rows: a border, centred title, centred body
/// lines, a border.
fn text_box(title: &str, body: &[&str]) -> Vec<String> {
    let inner = NODE_BOX_WIDTH - 2;
    let mut rows = Vec::with_capacity(body.len() + 3);
    rows.push(format!("┌{}┐", "─".repeat(inner)));
    rows.push(format!("│{title:^inner$}│"));
    for line in body {
        rows.push(format!("│{line:^inner$}│"));
    }
    rows.push(format!("└{}┘", "─".repeat(inner)));
    rows
}

fn render_diagram(app: &mut App, frame: &mut Frame, area: Rect) {
    let model = DiagramModel::build(app.config(), app.stats(), app.lang().labels());

    let spine_boxes: Vec<Vec<String>> = model
        .spines
        .iter()
        .map(|s| text_box(&s.title, &[s.subtitle.as_str()]))
        .collect();
    let unit_boxes: Vec<Vec<String>> = model
        .units
        .iter()
        .map(|u| {
            text_box(
                &u.title,
                &[
                    u.ftsw_line.as_str(),
                    u.rtsw_line.as_str(),
                    u.compute_line.as_str(),
                ],
            )
        })
        .collect();

    let mut rows = join_box_rows(&spine_boxes, "   ");
    // Full-mesh connectivity between the rows, drawn as a band.
    rows.push("╲  ╲  │  ╱  ╱".to_string());
    rows.push(format!("({})", model.mesh_note));
    rows.push("╱  ╱  │  ╲  ╲".to_string());
    rows.extend(join_box_rows(&unit_boxes, "   "));

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|r| Line::from(vec![Span::from(r)]))
        .collect();

    frame.render_widget(
        Paragraph::new(lines)
            .block(bordered(&model.caption))
            .style(base_style())
            .alignment(Alignment::Center),
        area,
    );
}

fn render_message(app: &mut App, frame: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![Span::from(app.message.as_str())])];
    frame.render_widget(
        Paragraph::new(text)
            .block(bordered(""))
            .style(base_style())
            .alignment(Alignment::Left),
        area,
    );
}

struct HelpRender<'a> {
    style_header: Style,
    style_command: Style,
    style_text: Style,
    indent: &'static str,
    pub lines: Vec<Line<'a>>,
}

impl<'a> HelpRender<'a> {
    fn new() -> Self {
        Self {
            style_header: Style::default().add_modifier(Modifier::BOLD),
            style_command: Style::default().bg(Color::Blue).fg(Color::White),
            style_text: Style::default(),
            indent: "  ",
            lines: Vec::new(),
        }
    }

    fn add_header(&mut self, header: &'a str, extra: Vec<&'a str>) {
        self.add_blank_line();
        self.lines
            .push(Line::from(vec![Span::styled(header, self.style_header)]));
        if !extra.is_empty() {
            self.add_blank_line();
            for line in extra {
                self.lines.push(Line::from(vec![
                    Span::from(self.indent),
                    Span::from(self.indent),
                    Span::styled(line, self.style_text),
                ]));
            }
        }
        self.add_blank_line();
    }

    fn add_command_help_line(&mut self, command: &'a str, help: &'a str) {
        self.lines.push(Line::from(vec![
            Span::from(self.indent),
            Span::styled(command, self.style_command),
            Span::styled(format!(": {help}"), self.style_text),
        ]));
    }

    fn add_blank_line(&mut self) {
        self.lines.push(Line::from(vec![Span::from("")]));
    }
}

fn render_help(_app: &mut App, frame: &mut Frame, area: Rect) {
    let mut renderer = HelpRender::new();

    renderer.add_header(
        "Configuration:",
        vec![
            "Select a sizing input and adjust it; the totals and the",
            "diagram update as you type.",
        ],
    );
    renderer.add_command_help_line("up/down-arrow", "select the previous/next input");
    renderer.add_command_help_line("left/right-arrow", "step the input down/up");
    renderer.add_command_help_line("[0-9.]", "type a value, then Enter to commit");
    renderer.add_command_help_line("Esc", "discard the typed value");
    renderer.add_command_help_line("r", "reset to the default configuration");
    renderer.add_command_help_line("d", "toggle derived/explicit switch sizing");

    renderer.add_header("Display:", vec![]);
    renderer.add_command_help_line("l", "toggle display language");
    renderer.add_command_help_line("e", "export config and stats to JSON");
    renderer.add_command_help_line("q", "quit");

    frame.render_widget(
        Paragraph::new(renderer.lines)
            .block(bordered("Help"))
            .style(base_style())
            .alignment(Alignment::Left),
        area,
    );
}

/// Locale-style thousands separation for the dashboard cards.
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_thousands_separated() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(432), "432");
        assert_eq!(format_count(2064), "2,064");
        assert_eq!(format_count(20736), "20,736");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn text_boxes_have_uniform_width() {
        let rows = text_box("L1 Unit #1", &["RTSW Layer: 9"]);
        assert!(rows.iter().all(|r| r.chars().count() == NODE_BOX_WIDTH));
    }

    #[test]
    fn joined_rows_pad_missing_lines() {
        let tall = text_box("a", &["1", "2"]);
        let short = text_box("b", &[]);
        let joined = join_box_rows(&[tall.clone(), short], " ");
        assert_eq!(joined.len(), tall.len());
        assert!(joined.iter().all(|r| r.chars().count() > NODE_BOX_WIDTH));
    }
}
