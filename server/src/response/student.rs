use crate::controller::Exhaust;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::{
    DestructStudent, IsBlocked, Student, StudentCampus, StudentCareer, StudentDv, StudentEmail,
    StudentId, StudentLastname, StudentName, StudentPhone, StudentRut,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreatedStudentResponse {
    id: StudentId,
    rut: StudentRut,
    dv: StudentDv,
    name: StudentName,
    lastname: StudentLastname,
    email: StudentEmail,
    phone: StudentPhone,
    campus: StudentCampus,
    career: StudentCareer,
    blocked: IsBlocked,
}

impl IntoResponse for CreatedStudentResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

/*
 * `blocked` is the stored flag, `has_active_sanction` is computed
 * against the clock. They move independently.
 */
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    id: StudentId,
    rut: StudentRut,
    dv: StudentDv,
    name: StudentName,
    lastname: StudentLastname,
    email: StudentEmail,
    phone: StudentPhone,
    campus: StudentCampus,
    career: StudentCareer,
    blocked: IsBlocked,
    has_active_sanction: bool,
}

impl IntoResponse for StudentResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BlockedStudentResponse {
    id: StudentId,
    rut: StudentRut,
    dv: StudentDv,
    name: StudentName,
    lastname: StudentLastname,
    email: StudentEmail,
    phone: StudentPhone,
    campus: StudentCampus,
    career: StudentCareer,
    blocked: IsBlocked,
}

pub struct StudentPresenter;

impl Exhaust<Student> for StudentPresenter {
    type To = CreatedStudentResponse;
    fn emit(&self, input: Student) -> Self::To {
        let DestructStudent {
            id,
            rut,
            dv,
            name,
            lastname,
            email,
            phone,
            campus,
            career,
            blocked,
        } = input.into_destruct();
        CreatedStudentResponse {
            id,
            rut,
            dv,
            name,
            lastname,
            email,
            phone,
            campus,
            career,
            blocked,
        }
    }
}

impl Exhaust<Option<(Student, bool)>> for StudentPresenter {
    type To = Option<StudentResponse>;
    fn emit(&self, input: Option<(Student, bool)>) -> Self::To {
        input.map(|(student, has_active_sanction)| {
            let DestructStudent {
                id,
                rut,
                dv,
                name,
                lastname,
                email,
                phone,
                campus,
                career,
                blocked,
            } = student.into_destruct();
            StudentResponse {
                id,
                rut,
                dv,
                name,
                lastname,
                email,
                phone,
                campus,
                career,
                blocked,
                has_active_sanction,
            }
        })
    }
}

impl Exhaust<Vec<Student>> for StudentPresenter {
    type To = axum::Json<Vec<BlockedStudentResponse>>;
    fn emit(&self, input: Vec<Student>) -> Self::To {
        let result = input
            .into_iter()
            .map(|student| {
                let DestructStudent {
                    id,
                    rut,
                    dv,
                    name,
                    lastname,
                    email,
                    phone,
                    campus,
                    career,
                    blocked,
                } = student.into_destruct();
                BlockedStudentResponse {
                    id,
                    rut,
                    dv,
                    name,
                    lastname,
                    email,
                    phone,
                    campus,
                    career,
                    blocked,
                }
            })
            .collect::<Vec<_>>();
        axum::Json::from(result)
    }
}

#[cfg(test)]
mod test {
    use super::StudentPresenter;
    use crate::controller::Exhaust;
    use kernel::prelude::entity::{
        IsBlocked, Student, StudentCampus, StudentCareer, StudentDv, StudentEmail, StudentId,
        StudentLastname, StudentName, StudentPhone, StudentRut,
    };
    use uuid::Uuid;

    fn blocked_student() -> Student {
        Student::new(
            StudentId::new(Uuid::new_v4()),
            StudentRut::new(12345678),
            StudentDv::new("5"),
            StudentName::new("Violeta"),
            StudentLastname::new("Parra"),
            StudentEmail::new("violeta.parra@usach.cl"),
            StudentPhone::new("987654321"),
            StudentCampus::new("San Joaquin"),
            StudentCareer::new("Ingenieria Informatica"),
            IsBlocked::new(true),
        )
    }

    #[test]
    fn block_flag_and_sanction_flag_are_separate_fields() {
        let response = StudentPresenter.emit(Some((blocked_student(), false)));
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["blocked"], true);
        assert_eq!(json["has_active_sanction"], false);
    }

    #[test]
    fn missing_student_presents_as_none() {
        let missing: Option<super::StudentResponse> = StudentPresenter.emit(None);
        assert!(missing.is_none());
    }
}
