use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block, Widget},
    Frame,
};

use crate::{
    clock::Clock,
    countdown_app::CountdownApp,
    theme::theme,
    ui::{
        widget::{CountdownView, Notification},
        StatefulWidgets,
    },
};

const VIEW_WIDTH: u16 = 48;
const VIEW_HEIGHT: u16 = 11;

pub fn render_main_ui<C: Clock>(f: &mut Frame, app: &CountdownApp<C>, widget_states: &mut StatefulWidgets) {
    let frame_area = f.area();
    Block::default().style(theme().background).render(frame_area, f.buffer_mut());

    let area = centered(frame_area, VIEW_WIDTH, VIEW_HEIGHT);
    render_countdown(f, app, area);

    if let Some(notification) = &mut widget_states.notice {
        f.render_stateful_widget(Notification::new(), area, notification);
    }
}

fn render_countdown<C: Clock>(f: &mut Frame, app: &CountdownApp<C>, area: Rect) {
    let mut view = CountdownView::builder()
        .remaining(app.remaining())
        .state(app.state());

    if let Some(caption) = app.caption() {
        view = view.caption(caption);
    }

    match view.build() {
        Ok(view) => f.render_widget(view, area),
        Err(e) => tracing::error!(error = %e, "failed to build countdown view"),
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);

    cell
}
