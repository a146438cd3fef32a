use crate::errors::ChatError;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Body of `PUT /chats/{id}`. Only the message is editable, any `from`, `to`
/// or timestamp sent along is dropped during deserialization.
#[derive(Serialize, Deserialize, Debug, Default, Validate)]
pub struct EditChat {
    #[serde(default, deserialize_with = "super::trimmed")]
    #[validate(min_length = 1)]
    pub msg: String,
}

impl EditChat {
    /// The validated, trimmed message.
    pub fn into_msg(self) -> Result<String, ChatError> {
        if let Err(errors) = self.validate() {
            tracing::debug!("Invalid chat edit form: {}", errors);
            return Err(ChatError::Validation("Message is required".to_string()));
        }

        Ok(self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web;

    fn parse(body: &str) -> EditChat {
        web::Query::<EditChat>::from_query(body).unwrap().into_inner()
    }

    #[test]
    fn msg_is_trimmed() {
        let form = parse("msg=%20hello%20");
        assert_eq!("hello", form.into_msg().unwrap());
    }

    #[test]
    fn immutable_fields_are_ignored() {
        let form = parse("msg=hello&from=Mallory&to=Eve&created_at=0");
        assert_eq!("hello", form.into_msg().unwrap());
    }

    #[test]
    fn empty_msg_is_rejected() {
        for body in ["", "msg=", "msg=%20%20"] {
            let form = parse(body);
            let err = form.into_msg().unwrap_err();
            assert!(matches!(err, ChatError::Validation(ref m) if m == "Message is required"));
        }
    }
}
