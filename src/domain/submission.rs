use crate::domain::Email;
use crate::domain::SubmitterName;
use crate::domain::Website;
use crate::routes::SubmitFormBody;

/// A validated contact-form submission. Built once from the request body,
/// used to render the two outbound messages, then dropped.
pub struct Submission {
    pub name: SubmitterName,
    pub email: Email,
    pub website: Website,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

impl TryFrom<SubmitFormBody> for Submission {
    type Error = String;

    fn try_from(value: SubmitFormBody) -> Result<Self, Self::Error> {
        let name = SubmitterName::parse(value.name)?;
        let email = Email::parse(value.email)?;
        let website = Website::parse(value.website)?;

        Ok(Self {
            name,
            email,
            website,
            phone: value.phone,
            service: value.service,
            message: value.message,
        })
    }
}
