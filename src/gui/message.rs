use crate::model::TodoId;

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
    Toggle(TodoId),
    Delete(TodoId),
}
