//! Screen layout and rendering.
//!
//! One bordered display area with the expression line above the live/result
//! line, both right-aligned like a desk calculator, plus a status line for
//! clipboard feedback and a static key-help footer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::Stylize;
use ratatui::widgets::{Block, Paragraph};

use crate::calculator::Display;

const HELP: &str =
    "0-9 digits   . decimal   n sign   + - * / operator   = equals   c clear   y copy   q quit";

/// Draw the whole screen from the rendered display lines.
pub fn draw(frame: &mut Frame, display: &Display, status: &str) {
    let [display_area, status_area, help_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let block = Block::bordered().title("deskcalc");
    let inner = block.inner(display_area);
    frame.render_widget(block, display_area);

    let [expression_area, result_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

    frame.render_widget(
        Paragraph::new(display.expression.as_str()).alignment(Alignment::Right),
        expression_area,
    );
    frame.render_widget(
        Paragraph::new(display.result.as_str())
            .alignment(Alignment::Right)
            .bold(),
        result_area,
    );

    frame.render_widget(Paragraph::new(status).dim(), status_area);
    frame.render_widget(Paragraph::new(HELP).dim(), help_area);
}
