use crate::gui::GuiApp;
use crate::gui::message::Message;
use crate::model::TodoItem;

use iced::widget::{Column, button, checkbox, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Color, Element, Length};

pub fn root(app: &GuiApp) -> Element<'_, Message> {
    let heading = text(app.config.title.as_str()).size(32);

    let input = text_input(&app.config.placeholder, app.list.pending_text())
        .on_input(Message::InputChanged)
        .on_submit(Message::Submit)
        .padding(10)
        .size(18);
    let add = button(text("Add To-Do").size(18))
        .on_press(Message::Submit)
        .padding(10);
    let input_row = row![input, add].spacing(12).align_y(Alignment::Center);

    let body: Element<'_, Message> = if app.list.is_empty() {
        container(
            text(app.config.empty_message.as_str())
                .size(18)
                .color(Color::from_rgb(0.5, 0.5, 0.5)),
        )
        .center_x(Length::Fill)
        .padding(16)
        .into()
    } else {
        let rows: Vec<Element<'_, Message>> = app.list.items().iter().map(item_row).collect();
        scrollable(Column::with_children(rows).spacing(8))
            .height(Length::Fill)
            .into()
    };

    let content = column![heading, input_row, body]
        .spacing(24)
        .max_width(560)
        .align_x(Alignment::Center);

    container(content)
        .padding(32)
        .center_x(Length::Fill)
        .into()
}

fn item_row(item: &TodoItem) -> Element<'_, Message> {
    let id = item.id();
    let label_color = if item.completed() {
        Color::from_rgb(0.55, 0.55, 0.55)
    } else {
        Color::from_rgb(0.15, 0.15, 0.15)
    };
    let label = if item.completed() {
        format!("✔ {}", item.text())
    } else {
        item.text().to_string()
    };

    row![
        checkbox("", item.completed()).on_toggle(move |_| Message::Toggle(id)),
        text(label).size(18).color(label_color).width(Length::Fill),
        button(text("✕")).on_press(Message::Delete(id)).padding([4, 10]),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}
