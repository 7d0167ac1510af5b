//! Built-in demo resume, served by the sample endpoints and used across tests.

use serde_json::Value;

use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry, ResumeSnapshot};

pub fn sample_resume() -> ResumeSnapshot {
    ResumeSnapshot {
        full_name: "John Doe".into(),
        email: "john@example.com".into(),
        phone: "+1 (555) 123-4567".into(),
        location: "San Francisco, CA".into(),
        linkedin: "https://linkedin.com/in/johndoe".into(),
        github: "https://github.com/johndoe".into(),
        summary: "Experienced software engineer with 5+ years building web applications.".into(),
        education: vec![EducationEntry {
            degree: "B.S. Computer Science".into(),
            institution: "Stanford University".into(),
            dates: "2018–2020".into(),
            details: "GPA: 3.8".into(),
        }],
        experience: vec![
            ExperienceEntry {
                role: "Senior Software Engineer".into(),
                company: "Tech Corp".into(),
                dates: "2022–Present".into(),
                bullets: vec![
                    "Led development of microservices architecture".into(),
                    "Mentored 3 junior engineers".into(),
                    "Reduced API latency by 40%".into(),
                ],
            },
            ExperienceEntry {
                role: "Software Engineer".into(),
                company: "StartupXYZ".into(),
                dates: "2020–2022".into(),
                bullets: vec![
                    "Built core platform features using Django and React".into(),
                    "Implemented CI/CD pipeline".into(),
                ],
            },
        ],
        projects: vec![ProjectEntry {
            name: Some("Resume Builder".into()),
            tech: "Rust, axum, pdf-writer".into(),
            bullets: vec![
                "Voice-powered resume creation tool".into(),
                "Exports to PDF and DOCX formats".into(),
            ],
        }],
        skills: ["Python", "Django", "JavaScript", "React", "PostgreSQL", "Docker", "AWS"]
            .into_iter()
            .map(Value::from)
            .collect(),
    }
}
