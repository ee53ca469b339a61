use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CreateStudentRequest, GetStudentByIdRequest, GetStudentByRutRequest, StudentTransformer,
};
use crate::response::{StudentPresenter, StudentResponse};
use application::service::{CreateStudentService, GetStudentService};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

pub trait StudentRouter {
    fn route_student(self) -> Self;
}

impl StudentRouter for Router<AppModule> {
    fn route_student(self) -> Self {
        self.route(
            "/students/new",
            post(
                |State(handler): State<AppModule>,
                 Json(req): Json<CreateStudentRequest>| async move {
                    Controller::new(StudentTransformer, StudentPresenter)
                        .try_intake(req)
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| handler.pgpool().create_student(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/students/id/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(StudentTransformer, StudentPresenter)
                        .intake(GetStudentByIdRequest::new(id))
                        .handle(|dto| handler.pgpool().get_student_by_id(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(StudentResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            ),
        )
        .route(
            "/students/rut/:rut",
            get(
                |State(handler): State<AppModule>, Path(rut): Path<i32>| async move {
                    Controller::new(StudentTransformer, StudentPresenter)
                        .intake(GetStudentByRutRequest::new(rut))
                        .handle(|dto| handler.pgpool().get_student_by_rut(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(StudentResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            ),
        )
    }
}
