use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    ApplySanctionRequest, RemoveSanctionRequest, SanctionTransformer, SanctionsByRutRequest,
};
use crate::response::{SanctionPresenter, StudentPresenter};
use application::service::{ApplySanctionService, GetSanctionService, RemoveSanctionService};
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};

pub trait SanctionRouter {
    fn route_sanction(self) -> Self;
}

impl SanctionRouter for Router<AppModule> {
    fn route_sanction(self) -> Self {
        self.route(
            "/sanctions/apply/:rut",
            put(
                |State(handler): State<AppModule>,
                 Path(rut): Path<i32>,
                 Json(req): Json<ApplySanctionRequest>| async move {
                    Controller::new(SanctionTransformer, SanctionPresenter)
                        .try_intake((rut, req))
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| handler.pgpool().apply_sanction(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/sanctions/remove/:rut",
            put(
                |State(handler): State<AppModule>,
                 Path(rut): Path<i32>,
                 Json(req): Json<RemoveSanctionRequest>| async move {
                    Controller::new(SanctionTransformer, SanctionPresenter)
                        .intake((rut, req))
                        .handle(|dto| handler.pgpool().remove_sanction(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/sanctions/active/:rut",
            get(
                |State(handler): State<AppModule>, Path(rut): Path<i32>| async move {
                    Controller::new(SanctionTransformer, SanctionPresenter)
                        .intake(SanctionsByRutRequest::new(rut))
                        .handle(|dto| handler.pgpool().get_active_sanctions_by_rut(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/sanctions/check/:rut",
            get(
                |State(handler): State<AppModule>, Path(rut): Path<i32>| async move {
                    Controller::new(SanctionTransformer, SanctionPresenter)
                        .intake(SanctionsByRutRequest::new(rut))
                        .handle(|dto| handler.pgpool().has_active_sanction(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/sanctions/blocked",
            get(|State(handler): State<AppModule>| async move {
                Controller::new((), StudentPresenter)
                    .bypass(|| handler.pgpool().get_blocked_students())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
