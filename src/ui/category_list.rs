use crate::app::state::*;
use crate::ui::theme::Theme;
use crate::ui::{spinner, truncate};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Categories;
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let session = &state.session;
    let title = if session.categories_loading() {
        format!(" Categories {} ", spinner(state.tick_count))
    } else if session.categories().is_empty() {
        " Categories ".to_string()
    } else {
        format!(" Categories ({}) ", session.categories().len())
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type(focused))
        .border_style(border_style);

    let width = block.inner(area).width.saturating_sub(4) as usize;
    let selected = session.selected_category();

    let mut items: Vec<ListItem> = Vec::with_capacity(state.category_rows());
    let placeholder_style = if selected.is_none() {
        Theme::selected()
    } else {
        Theme::disabled()
    };
    items.push(ListItem::new(Line::from(vec![
        Span::styled(if selected.is_none() { " ● " } else { "   " }, placeholder_style),
        Span::styled("Select a Category", placeholder_style),
    ])));

    for category in session.categories() {
        let is_selected = selected == Some(category.id);
        let (marker, style) = if is_selected {
            (" ● ", Theme::selected())
        } else {
            ("   ", Theme::option())
        };
        items.push(ListItem::new(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(truncate(&category.name, width), style),
        ])));
    }

    if session.categories().is_empty() && !session.categories_loading() {
        items.push(ListItem::new(Span::styled(
            "   No categories loaded. Press r to fetch.",
            Theme::disabled(),
        )));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(if focused { Theme::cursor() } else { Style::default() });

    let mut list_state = ListState::default().with_selected(Some(state.category_cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}
