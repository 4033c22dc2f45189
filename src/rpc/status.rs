use std::error::Error;

use crate::error::GatewayError;

/// Normalizes a failure from the authority channel.
///
/// A `tonic::Status` keeps its message verbatim; the status code is dropped,
/// since only the calling operation knows what the failure means. Anything
/// that is not a status becomes [`GatewayError::RemoteProtocol`].
pub fn translate(err: &(dyn Error + 'static)) -> GatewayError {
    match err.downcast_ref::<tonic::Status>() {
        Some(status) => GatewayError::Remote(status.message().to_string()),
        None => GatewayError::RemoteProtocol,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::REMOTE_PROTOCOL_MESSAGE;

    #[test]
    fn status_message_is_kept_verbatim() {
        let status = tonic::Status::unauthenticated("token expired");
        match translate(&status) {
            GatewayError::Remote(msg) => assert_eq!(msg, "token expired"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn status_code_does_not_change_the_kind() {
        for status in [
            tonic::Status::unavailable("authority down"),
            tonic::Status::invalid_argument("authority down"),
        ] {
            assert!(matches!(translate(&status), GatewayError::Remote(m) if m == "authority down"));
        }
    }

    #[test]
    fn non_status_errors_become_protocol_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = translate(&io);
        assert!(matches!(err, GatewayError::RemoteProtocol));
        assert_eq!(err.to_string(), REMOTE_PROTOCOL_MESSAGE);
    }
}
