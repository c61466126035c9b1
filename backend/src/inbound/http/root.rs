//! Root greeting.

use actix_web::{get, web};

use super::schemas::RootMessage;

/// Fixed greeting used as a smoke check.
#[utoipa::path(
    get,
    path = "/",
    tags = ["root"],
    responses((status = 200, description = "Greeting", body = RootMessage))
)]
#[get("/")]
pub async fn root() -> web::Json<RootMessage> {
    web::Json(RootMessage {
        message: "Hello World".to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};

    #[actix_web::test]
    async fn greets() {
        let app = actix_test::init_service(App::new().service(root)).await;
        let request = actix_test::TestRequest::get().uri("/").to_request();

        let body: RootMessage = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body.message, "Hello World");
    }
}
