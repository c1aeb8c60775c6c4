mod email;
mod submission;
mod submitter_name;
mod website;

pub use email::Email;
pub use submission::Submission;
pub use submitter_name::SubmitterName;
pub use website::Website;
