use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::response::NotebookPresenter;
use application::service::GetNotebookService;
use axum::extract::State;
use axum::routing::get;
use axum::Router;

pub trait NotebookRouter {
    fn route_notebook(self) -> Self;
}

impl NotebookRouter for Router<AppModule> {
    fn route_notebook(self) -> Self {
        self.route(
            "/notebooks/all",
            get(|State(handler): State<AppModule>| async move {
                Controller::new((), NotebookPresenter)
                    .bypass(|| handler.pgpool().get_all_notebooks())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/notebooks/available",
            get(|State(handler): State<AppModule>| async move {
                Controller::new((), NotebookPresenter)
                    .bypass(|| handler.pgpool().get_available_notebooks())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
