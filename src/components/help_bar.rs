use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::theme::Palette;

#[derive(Default)]
pub struct HelpBar;

pub struct HelpBarProps {
    pub palette: Palette,
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.palette;
        let help = Line::from(vec![
            Span::styled(" enter", Style::default().fg(palette.accent).bold()),
            Span::styled(" search  ", Style::default().fg(palette.muted)),
            Span::styled("ctrl+t", Style::default().fg(palette.accent).bold()),
            Span::styled(" theme  ", Style::default().fg(palette.muted)),
            Span::styled("esc", Style::default().fg(palette.accent).bold()),
            Span::styled(" quit ", Style::default().fg(palette.muted)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(help), area);
    }
}
