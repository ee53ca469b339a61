use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{LoanTransformer, LoansByRutRequest};
use crate::response::LoanPresenter;
use application::service::GetLoanService;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

/*
 * The one route that stays outside the admin guard: the kiosk screen
 * where a student checks their own active loan.
 */
pub trait PublicRouter {
    fn route_public(self) -> Self;
}

impl PublicRouter for Router<AppModule> {
    fn route_public(self) -> Self {
        self.route(
            "/public/rut",
            get(
                |State(handler): State<AppModule>, Query(req): Query<LoansByRutRequest>| async move {
                    Controller::new(
                        LoanTransformer,
                        LoanPresenter::new(handler.config().loan_term().clone()),
                    )
                    .intake(req)
                    .handle(|dto| handler.pgpool().get_active_loans_by_rut(dto))
                    .await
                    .map_err(ErrorStatus::from)
                    .map(|res| {
                        res.map(IntoResponse::into_response)
                            .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                    })
                },
            ),
        )
    }
}
