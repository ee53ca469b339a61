use error_stack::Report;
use kernel::KernelError;

/*
 * Shared field checks for the transformers. Anything structural beyond
 * this is the managers' business, not the API's.
 */

pub(in crate::request) fn rut(rut: i32) -> error_stack::Result<(), KernelError> {
    if !(1_000_000..=99_999_999).contains(&rut) {
        return Err(Report::new(KernelError::Validation)
            .attach_printable(format!("{rut} is not a plausible rut")));
    }
    Ok(())
}

pub(in crate::request) fn dv(dv: &str) -> error_stack::Result<(), KernelError> {
    let mut chars = dv.chars();
    let valid = matches!(
        (chars.next(), chars.next()),
        (Some('0'..='9' | 'K' | 'k'), None)
    );
    if !valid {
        return Err(Report::new(KernelError::Validation)
            .attach_printable(format!("{dv:?} is not a rut check digit")));
    }
    Ok(())
}

pub(in crate::request) fn email(email: &str) -> error_stack::Result<(), KernelError> {
    if !email.contains('@') {
        return Err(Report::new(KernelError::Validation)
            .attach_printable(format!("{email:?} is not an email address")));
    }
    Ok(())
}

pub(in crate::request) fn phone(phone: &str) -> error_stack::Result<(), KernelError> {
    if phone.len() != 9 || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(Report::new(KernelError::Validation)
            .attach_printable(format!("{phone:?} is not a 9 digit phone number")));
    }
    Ok(())
}

pub(in crate::request) fn description(description: &str) -> error_stack::Result<(), KernelError> {
    let length = description.chars().count();
    if !(5..=200).contains(&length) {
        return Err(Report::new(KernelError::Validation)
            .attach_printable("sanction description must be 5 to 200 characters"));
    }
    Ok(())
}
