//! Contact Errors

use salvo::http::StatusError;
use tracing::error;

use posy_app::domain::contact::ContactServiceError;

pub(crate) fn into_status_error(error: ContactServiceError) -> StatusError {
    match error {
        ContactServiceError::MissingFields(fields) => StatusError::unprocessable_entity()
            .brief("Please fill in all required fields")
            .detail(fields.join(", ")),
        error @ ContactServiceError::InvalidEmail(_) => StatusError::unprocessable_entity()
            .brief("Please enter a valid email address")
            .detail(error.to_string()),
        ContactServiceError::Notification(source) => {
            error!(%source, "failed to forward contact message");

            StatusError::bad_gateway().brief("Your message could not be sent, please try again")
        }
    }
}

#[cfg(test)]
mod tests {
    use posy_app::domain::notifications::NotificationError;
    use salvo::http::StatusCode;
    use smallvec::smallvec;

    use super::*;

    #[test]
    fn missing_fields_are_listed_in_the_detail() {
        let error = into_status_error(ContactServiceError::MissingFields(smallvec![
            "subject", "message"
        ]));

        assert_eq!(error.code, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error.detail.as_deref(), Some("subject, message"));
    }

    #[test]
    fn transport_failures_are_bad_gateway() {
        let error = into_status_error(ContactServiceError::Notification(
            NotificationError::Transport("connection refused".to_string()),
        ));

        assert_eq!(error.code, StatusCode::BAD_GATEWAY);
    }
}
