mod support;

use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use application::service::{
    ApplySanctionService, GetSanctionService, GetStudentService, RemoveSanctionService,
};
use application::transfer::{
    ApplySanctionDto, GetSanctionsByRutDto, GetStudentByRutDto, RemoveSanctionDto,
};
use kernel::prelude::entity::{IsBlocked, LoanId};
use kernel::KernelError;

use crate::support::{enrolled_student, sanction_finishing_at, MemoryDatabase};

const RUT: i32 = 12345678;

fn week_long_sanction(rut: i32) -> ApplySanctionDto {
    ApplySanctionDto {
        student_rut: rut,
        description: "Returned the notebook two days late".into(),
        finish_date: OffsetDateTime::now_utc() + Duration::days(7),
        loan_id: None,
    }
}

#[tokio::test]
async fn applying_blocks_even_over_expired_history() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    db.seed_student(enrolled_student(RUT));
    db.seed_sanction(sanction_finishing_at(
        RUT,
        OffsetDateTime::now_utc() - Duration::days(30),
    ));

    let sanction = db.apply_sanction(week_long_sanction(RUT)).await?;
    assert!(sanction.is_active(OffsetDateTime::now_utc()));

    let student = db.committed_student(RUT).unwrap();
    assert_eq!(student.blocked(), &IsBlocked::new(true));

    Ok(())
}

#[tokio::test]
async fn applying_to_an_unknown_student_is_not_found() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();

    let result = db.apply_sanction(week_long_sanction(RUT)).await;

    assert!(matches!(
        result.unwrap_err().current_context(),
        KernelError::NotFound
    ));
    assert!(db.committed_sanctions().is_empty());

    Ok(())
}

#[tokio::test]
async fn removing_keeps_the_block_unless_asked() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    db.seed_student(enrolled_student(RUT));
    db.apply_sanction(week_long_sanction(RUT)).await?;

    let expired = db
        .remove_sanction(RemoveSanctionDto {
            student_rut: RUT,
            loan_id: None,
            unblock_student: false,
        })
        .await?;
    assert!(!expired.is_active(OffsetDateTime::now_utc()));

    let student = db.committed_student(RUT).unwrap();
    assert_eq!(student.blocked(), &IsBlocked::new(true));

    let active = db
        .get_active_sanctions_by_rut(GetSanctionsByRutDto { rut: RUT })
        .await?;
    assert!(active.is_empty());

    Ok(())
}

#[tokio::test]
async fn removing_can_unblock_explicitly() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    db.seed_student(enrolled_student(RUT));
    db.apply_sanction(week_long_sanction(RUT)).await?;

    db.remove_sanction(RemoveSanctionDto {
        student_rut: RUT,
        loan_id: None,
        unblock_student: true,
    })
    .await?;

    let student = db.committed_student(RUT).unwrap();
    assert_eq!(student.blocked(), &IsBlocked::new(false));

    Ok(())
}

#[tokio::test]
async fn removing_without_an_active_sanction_is_not_found() -> error_stack::Result<(), KernelError>
{
    let db = MemoryDatabase::new();
    db.seed_student(enrolled_student(RUT));
    db.seed_sanction(sanction_finishing_at(
        RUT,
        OffsetDateTime::now_utc() - Duration::days(1),
    ));

    let result = db
        .remove_sanction(RemoveSanctionDto {
            student_rut: RUT,
            loan_id: None,
            unblock_student: true,
        })
        .await;

    assert!(matches!(
        result.unwrap_err().current_context(),
        KernelError::NotFound
    ));

    // The failed removal must not have touched the blocked flag.
    let student = db.committed_student(RUT).unwrap();
    assert_eq!(student.blocked(), &IsBlocked::new(false));

    Ok(())
}

#[tokio::test]
async fn removal_scoped_to_a_loan_spares_the_rest() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    db.seed_student(enrolled_student(RUT));

    let loan_id = Uuid::new_v4();
    db.apply_sanction(ApplySanctionDto {
        loan_id: Some(loan_id),
        ..week_long_sanction(RUT)
    })
    .await?;
    db.apply_sanction(week_long_sanction(RUT)).await?;

    let expired = db
        .remove_sanction(RemoveSanctionDto {
            student_rut: RUT,
            loan_id: Some(loan_id),
            unblock_student: false,
        })
        .await?;
    assert_eq!(expired.loan_id(), &Some(LoanId::new(loan_id)));

    let active = db
        .get_active_sanctions_by_rut(GetSanctionsByRutDto { rut: RUT })
        .await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].loan_id(), &None);

    Ok(())
}

#[tokio::test]
async fn sanction_check_reads_false_for_unknown_rut() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();

    assert!(!db.has_active_sanction(GetSanctionsByRutDto { rut: RUT }).await?);
    let active = db
        .get_active_sanctions_by_rut(GetSanctionsByRutDto { rut: RUT })
        .await?;
    assert!(active.is_empty());

    Ok(())
}

#[tokio::test]
async fn blocked_list_and_sanction_check_follow_the_flags() -> error_stack::Result<(), KernelError>
{
    let db = MemoryDatabase::new();
    db.seed_student(enrolled_student(RUT));
    db.seed_student(enrolled_student(RUT + 1));

    db.apply_sanction(week_long_sanction(RUT)).await?;

    assert!(db.has_active_sanction(GetSanctionsByRutDto { rut: RUT }).await?);
    assert!(!db
        .has_active_sanction(GetSanctionsByRutDto { rut: RUT + 1 })
        .await?);

    let blocked = db.get_blocked_students().await?;
    assert_eq!(blocked.len(), 1);
    assert_eq!(blocked[0].rut().as_ref(), &RUT);

    Ok(())
}

#[tokio::test]
async fn student_read_tells_block_and_sanction_apart() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    db.seed_student(enrolled_student(RUT));

    db.apply_sanction(week_long_sanction(RUT)).await?;
    db.remove_sanction(RemoveSanctionDto {
        student_rut: RUT,
        loan_id: None,
        unblock_student: false,
    })
    .await?;

    // Still blocked, but no sanction is running anymore.
    let (student, has_active_sanction) = db
        .get_student_by_rut(GetStudentByRutDto { rut: RUT })
        .await?
        .unwrap();
    assert_eq!(student.blocked(), &IsBlocked::new(true));
    assert!(!has_active_sanction);

    db.apply_sanction(week_long_sanction(RUT)).await?;
    let (_, has_active_sanction) = db
        .get_student_by_rut(GetStudentByRutDto { rut: RUT })
        .await?
        .unwrap();
    assert!(has_active_sanction);

    Ok(())
}
