pub fn main() -> iced::Result {
    tickbox::gui::run()
}
