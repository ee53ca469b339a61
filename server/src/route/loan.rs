use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CreateLoanRequest, GetLoanRequest, LoanTransformer, LoansByRutRequest, LoansByStateRequest,
    ModifyLoanRequest,
};
use crate::response::{CreatedLoanPresenter, LoanPresenter, LoanResponse};
use application::service::{CreateLoanService, GetLoanService, ModifyLoanStateService};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use kernel::prelude::entity::LoanState;
use uuid::Uuid;

pub trait LoanRouter {
    fn route_loan(self) -> Self;
}

impl LoanRouter for Router<AppModule> {
    fn route_loan(self) -> Self {
        self.route(
            "/loans/new",
            post(
                |State(handler): State<AppModule>, Json(req): Json<CreateLoanRequest>| async move {
                    Controller::new(
                        LoanTransformer,
                        CreatedLoanPresenter::new(handler.config().loan_term().clone()),
                    )
                    .try_intake(req)
                    .map_err(ErrorStatus::from)?
                    .handle(|dto| handler.pgpool().create_loan(dto))
                    .await
                    .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/loans",
            get(
                |State(handler): State<AppModule>, Query(req): Query<LoansByRutRequest>| async move {
                    Controller::new(
                        LoanTransformer,
                        LoanPresenter::new(handler.config().loan_term().clone()),
                    )
                    .intake(req)
                    .handle(|dto| handler.pgpool().get_loans_by_rut(dto))
                    .await
                    .map_err(ErrorStatus::from)
                    .map(|res| {
                        res.map(IntoResponse::into_response)
                            .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                    })
                },
            ),
        )
        .route(
            "/loans/search",
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
        .route(
            "/loans/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(
                        LoanTransformer,
                        LoanPresenter::new(handler.config().loan_term().clone()),
                    )
                    .intake(GetLoanRequest::new(id))
                    .handle(|dto| handler.pgpool().get_loan_by_id(dto))
                    .await
                    .map_err(ErrorStatus::from)
                    .map(|res| {
                        res.map(LoanResponse::into_response)
                            .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                    })
                },
            ),
        )
        .route(
            "/loans/active/all",
            get(
                |State(handler): State<AppModule>| async move {
                    all_in_state(handler, LoanState::Active).await
                },
            ),
        )
        .route(
            "/loans/pending/all",
            get(
                |State(handler): State<AppModule>| async move {
                    all_in_state(handler, LoanState::Pending).await
                },
            ),
        )
        .route(
            "/loans/returned/all",
            get(
                |State(handler): State<AppModule>| async move {
                    all_in_state(handler, LoanState::Finalized).await
                },
            ),
        )
        .route(
            "/loans/modify/:rut",
            put(
                |State(handler): State<AppModule>,
                 Path(rut): Path<i32>,
                 Json(state): Json<i32>| async move {
                    Controller::new(
                        LoanTransformer,
                        LoanPresenter::new(handler.config().loan_term().clone()),
                    )
                    .intake(ModifyLoanRequest::new(rut, state))
                    .handle(|dto| handler.pgpool().modify_loan_state(dto))
                    .await
                    .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}

async fn all_in_state(
    handler: AppModule,
    state: LoanState,
) -> Result<axum::response::Response, ErrorStatus> {
    Controller::new(
        LoanTransformer,
        LoanPresenter::new(handler.config().loan_term().clone()),
    )
    .intake(LoansByStateRequest::new(state))
    .handle(|dto| handler.pgpool().get_loans_by_state(dto))
    .await
    .map_err(ErrorStatus::from)
    .map(|res| {
        res.map(IntoResponse::into_response)
            .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
    })
}
