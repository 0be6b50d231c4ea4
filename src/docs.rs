use crate::api::vacation::{CreateVacation, StatusChange, UpdateVacation};
use crate::model::vacation_request::{Status, VacationRequest};
use crate::store::StatusCounts;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vacation Request API",
        version = "1.0.0",
        description = r#"
## Vacation Request Service

REST API for managing employee vacation requests.

### Operations
- Create, list (with status/employee filters), and fetch requests
- Approve or reject a request via a status change
- Partially update request fields
- Delete requests
- Aggregate counts per status

### Response Format
JSON bodies throughout; validation failures answer `400` with
`{"error": "<message>"}`, missing ids answer `404`.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::vacation::list_vacations,
        crate::api::vacation::get_vacation,
        crate::api::vacation::create_vacation,
        crate::api::vacation::update_status,
        crate::api::vacation::update_vacation,
        crate::api::vacation::delete_vacation,
        crate::api::vacation::get_stats
    ),
    components(
        schemas(
            VacationRequest,
            Status,
            CreateVacation,
            StatusChange,
            UpdateVacation,
            StatusCounts
        )
    ),
    tags(
        (name = "Vacations", description = "Vacation request management APIs"),
        (name = "Stats", description = "Aggregate reporting APIs"),
    )
)]
pub struct ApiDoc;
