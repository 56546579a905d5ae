use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::store::PreferenceStore;
use crate::surfaces::ROOT_ATTRIBUTE;
use crate::tui::state::TuiApp;
use crate::tui::theme::Palette;

impl<S: PreferenceStore> TuiApp<S> {
    pub fn view(&mut self, f: &mut Frame) {
        let palette = self.palette();
        let size = f.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header with the desktop toggle
                Constraint::Min(1),    // Main content
                Constraint::Length(2), // Status footer
            ])
            .split(size);

        self.render_header(f, chunks[0], &palette);
        self.render_body(f, chunks[1], &palette);
        self.render_footer(f, chunks[2], &palette);

        if self.menu_open {
            self.render_mobile_menu(f, size, &palette);
        }
    }

    fn render_header(&mut self, f: &mut Frame, area: Rect, palette: &Palette) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let mut control_style = palette.control_style;
        if self.spinning() {
            // Terminal stand-in for the 300ms rotation of the round button.
            control_style = control_style.add_modifier(Modifier::REVERSED);
        }
        let title = Line::from(vec![
            Span::styled("shade", palette.header_style),
            Span::styled("  t:", palette.footer_style),
            Span::styled(format!(" {} ", self.desktop_icon.get()), control_style),
            Span::styled("  m: menu  q: quit", palette.footer_style),
        ]);
        f.render_widget(Paragraph::new(title), rows[0]);

        let separator = "─".repeat(area.width as usize);
        f.render_widget(
            Paragraph::new(separator).style(palette.footer_style),
            rows[1],
        );
    }

    fn render_body(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let lines = vec![
            Line::from(Span::styled(
                format!("{ROOT_ATTRIBUTE} = {}", self.root_attr.get()),
                palette.accent_style,
            )),
            Line::from(Span::styled(
                format!("{} mode", self.mode_label.get()),
                palette.body_style,
            )),
            Line::raw(""),
            Line::from(Span::styled(
                "Press t to toggle the theme. The control shows the mode it",
                palette.body_style,
            )),
            Line::from(Span::styled(
                "switches to, not the current one.",
                palette.body_style,
            )),
        ];
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let separator = "─".repeat(area.width as usize);
        f.render_widget(
            Paragraph::new(separator).style(palette.footer_style),
            rows[0],
        );

        // The live region is off-screen on the page; here the footer doubles
        // as its visible rendition.
        let status = self.announcement().unwrap_or_default();
        f.render_widget(
            Paragraph::new(status).style(palette.footer_style),
            rows[1],
        );
    }

    fn render_mobile_menu(&self, f: &mut Frame, screen: Rect, palette: &Palette) {
        let area = centered_rect(40, 7, screen);
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(" menu ")
            .borders(Borders::ALL)
            .style(palette.menu_style);
        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                format!("  {}  {} mode", self.mobile_icon.get(), self.mode_label.get()),
                palette.control_style,
            )),
            Line::raw(""),
            Line::from(Span::styled(
                "  Enter/Space: switch theme   Esc: close",
                palette.footer_style,
            )),
        ];
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn centered_rect(width: u16, height: u16, screen: Rect) -> Rect {
    let w = width.min(screen.width);
    let h = height.min(screen.height);
    Rect {
        x: screen.x + (screen.width.saturating_sub(w)) / 2,
        y: screen.y + (screen.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}
