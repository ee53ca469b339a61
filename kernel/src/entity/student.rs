mod blocked;
mod contact;
mod enrollment;
mod id;
mod name;
mod rut;

pub use self::{blocked::*, contact::*, enrollment::*, id::*, name::*, rut::*};
use destructure::{Destructure, Mutation};

#[derive(Debug, Clone, Eq, PartialEq, Destructure, Mutation)]
pub struct Student {
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

impl Student {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
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
    ) -> Self {
        Self {
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

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn rut(&self) -> &StudentRut {
        &self.rut
    }

    pub fn dv(&self) -> &StudentDv {
        &self.dv
    }

    pub fn name(&self) -> &StudentName {
        &self.name
    }

    pub fn lastname(&self) -> &StudentLastname {
        &self.lastname
    }

    pub fn email(&self) -> &StudentEmail {
        &self.email
    }

    pub fn phone(&self) -> &StudentPhone {
        &self.phone
    }

    pub fn campus(&self) -> &StudentCampus {
        &self.campus
    }

    pub fn career(&self) -> &StudentCareer {
        &self.career
    }

    pub fn blocked(&self) -> &IsBlocked {
        &self.blocked
    }
}
