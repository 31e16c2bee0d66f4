//! Input and entity fixtures shared by the core tests.

use chrono::{TimeZone, Utc};
use devfolio_domain::{
    EducationDraft, EducationInput, ExperienceDraft, ExperienceInput, Identity, IdentityId,
    ProfileInput,
};

pub fn identity(name: &str) -> Identity {
    Identity {
        id: IdentityId::new(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        avatar: Some(format!("https://avatars.example.com/{}", name.to_lowercase())),
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
    }
}

pub fn profile_input() -> ProfileInput {
    ProfileInput {
        company: Some("Acme".into()),
        website: Some("https://dev.example.com".into()),
        status: Some("Developer".into()),
        skills: Some("go, rust ,  python".into()),
        github_username: Some("octocat".into()),
        twitter: Some("https://twitter.com/dev".into()),
        ..ProfileInput::default()
    }
}

pub fn experience(title: &str) -> ExperienceDraft {
    ExperienceInput {
        title: Some(title.to_string()),
        company: Some("Acme".into()),
        from: Some("2020-01-01".into()),
        ..ExperienceInput::default()
    }
    .validate()
    .expect("valid experience fixture")
}

pub fn education(school: &str) -> EducationDraft {
    EducationInput {
        school: Some(school.to_string()),
        degree: Some("BSc".into()),
        field_of_study: Some("Computer Science".into()),
        from: Some("2012-09-01".into()),
        to: Some("2016-06-30".into()),
        ..EducationInput::default()
    }
    .validate()
    .expect("valid education fixture")
}
