pub mod message;
pub mod view;

use crate::config::Config;
use crate::logging;
use crate::model::{Change, TodoList};
use iced::{Element, Task, Theme};
use message::Message;

pub fn run() -> iced::Result {
    let (config, config_err) = Config::load_or_default();
    if let Err(e) = logging::init(&config.log_level) {
        eprintln!("Logging disabled: {:#}", e);
    }
    if let Some(e) = config_err {
        log::warn!("using default config: {:#}", e);
    }
    log::info!("starting GUI");

    iced::application(GuiApp::title, GuiApp::update, GuiApp::view)
        .theme(GuiApp::theme)
        .run_with(move || (GuiApp::new(config), Task::none()))
}

pub struct GuiApp {
    pub list: TodoList,
    pub config: Config,
}

impl GuiApp {
    pub fn new(config: Config) -> Self {
        Self {
            list: TodoList::new(),
            config,
        }
    }

    fn title(&self) -> String {
        self.config.title.clone()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let change = match message {
            Message::InputChanged(value) => self.list.set_pending_text(value),
            Message::Submit => self.list.add_pending(),
            Message::Toggle(id) => self.list.toggle_completed(id),
            Message::Delete(id) => self.list.delete_item(id),
        };
        if let Change::Unchanged = change {
            log::trace!("message had no effect");
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::root(self)
    }
}
