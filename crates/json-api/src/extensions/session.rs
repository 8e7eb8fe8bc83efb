//! Session path parameter helpers.

use salvo::oapi::extract::PathParam;
use uuid::Uuid;

use posy_app::domain::sessions::models::SessionUuid;

pub(crate) trait SessionParamExt {
    fn into_session(self) -> SessionUuid;
}

impl SessionParamExt for PathParam<Uuid> {
    fn into_session(self) -> SessionUuid {
        SessionUuid::from_uuid(self.into_inner())
    }
}
