use crate::api::vacation;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/vacations")
                    // /api/vacations
                    .service(
                        web::resource("")
                            .route(web::get().to(vacation::list_vacations))
                            .route(web::post().to(vacation::create_vacation)),
                    )
                    // /api/vacations/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(vacation::get_vacation))
                            .route(web::patch().to(vacation::update_status))
                            .route(web::put().to(vacation::update_vacation))
                            .route(web::delete().to(vacation::delete_vacation)),
                    ),
            )
            // /api/stats
            .service(web::resource("/stats").route(web::get().to(vacation::get_stats))),
    );
}
