//! Bundled sample data used when the backend has nothing to offer

use crate::core::{
    job::{DutyType, ExperienceLevel, Job, JobStatus, Sector},
    news::{PulseType, PulseUpdate},
};
use serde_json::Map;

struct Seed {
    id: &'static str,
    title: &'static str,
    organization: &'static str,
    category: &'static str,
    location: &'static str,
    qualification: &'static str,
    experience: &'static str,
    level: ExperienceLevel,
    speciality: &'static str,
    duty: DutyType,
    posts: u32,
    salary: &'static str,
    description: &'static str,
    last_date: &'static str,
    posted_date: &'static str,
    featured: bool,
    views: u64,
    applications: u64,
    email: &'static str,
    phone: &'static str,
}

const SEEDS: [Seed; 6] = [
    Seed {
        id: "1",
        title: "Senior Resident - Radiology",
        organization: "All India Institute of Medical Sciences",
        category: "Radiology",
        location: "New Delhi",
        qualification: "MD/DNB Radiodiagnosis",
        experience: "0-3 years",
        level: ExperienceLevel::Mid,
        speciality: "Radiology",
        duty: DutyType::FullTime,
        posts: 12,
        salary: "Rs. 67,700 + allowances",
        description: "Tenure posts of Senior Resident in the Department of Radiodiagnosis.",
        last_date: "2025-11-15",
        posted_date: "2025-10-12",
        featured: true,
        views: 1840,
        applications: 212,
        email: "recruitment@aiims.edu",
        phone: "011-26588500",
    },
    Seed {
        id: "2",
        title: "Medical Officer (General Duty)",
        organization: "Employees' State Insurance Corporation",
        category: "General Medicine",
        location: "Mumbai, Maharashtra",
        qualification: "MBBS",
        experience: "Freshers",
        level: ExperienceLevel::Entry,
        speciality: "General Medicine",
        duty: DutyType::FullTime,
        posts: 45,
        salary: "Pay Level 10",
        description: "Walk-in interview for contractual Medical Officers at ESIC hospitals.",
        last_date: "2025-11-05",
        posted_date: "2025-10-08",
        featured: false,
        views: 960,
        applications: 134,
        email: "mo-recruit@esic.gov.in",
        phone: "022-24932461",
    },
    Seed {
        id: "3",
        title: "Consultant Radiologist",
        organization: "Indian Council of Medical Research",
        category: "Radiology",
        location: "Chennai, Tamil Nadu",
        qualification: "MD Radiology",
        experience: "5+ years",
        level: ExperienceLevel::Senior,
        speciality: "Interventional Radiology",
        duty: DutyType::Contract,
        posts: 2,
        salary: "Rs. 1,25,000 consolidated",
        description: "Project consultant for a multi-centre imaging study.",
        last_date: "2025-11-30",
        posted_date: "2025-10-14",
        featured: true,
        views: 720,
        applications: 41,
        email: "projects@icmr.gov.in",
        phone: "044-28369500",
    },
    Seed {
        id: "4",
        title: "Staff Nurse",
        organization: "Postgraduate Institute of Medical Education and Research",
        category: "Nursing",
        location: "Chandigarh",
        qualification: "B.Sc Nursing",
        experience: "1-2 years",
        level: ExperienceLevel::Entry,
        speciality: "Critical Care Nursing",
        duty: DutyType::FullTime,
        posts: 60,
        salary: "Pay Level 7",
        description: "Regular posts of Nursing Officer across PGIMER wards.",
        last_date: "2025-12-01",
        posted_date: "2025-10-10",
        featured: false,
        views: 2210,
        applications: 488,
        email: "nursing@pgimer.edu.in",
        phone: "0172-2747585",
    },
    Seed {
        id: "5",
        title: "Assistant Professor - Anaesthesiology",
        organization: "Government Medical College",
        category: "Anaesthesiology",
        location: "Thiruvananthapuram, Kerala",
        qualification: "MD/DNB Anaesthesiology",
        experience: "3+ years teaching",
        level: ExperienceLevel::Senior,
        speciality: "Anaesthesiology",
        duty: DutyType::FullTime,
        posts: 4,
        salary: "As per UGC scale",
        description: "Faculty recruitment through the state public service commission.",
        last_date: "2025-11-20",
        posted_date: "2025-10-05",
        featured: false,
        views: 530,
        applications: 27,
        email: "principal@gmctvm.ac.in",
        phone: "0471-2528386",
    },
    Seed {
        id: "6",
        title: "Pharmacist Grade II",
        organization: "Railway Hospital",
        category: "Pharmacy",
        location: "Kolkata, West Bengal",
        qualification: "D.Pharm",
        experience: "2 years",
        level: ExperienceLevel::Mid,
        speciality: "Hospital Pharmacy",
        duty: DutyType::PartTime,
        posts: 8,
        salary: "Pay Level 5",
        description: "Part-time pharmacists for the divisional railway hospital.",
        last_date: "2025-11-10",
        posted_date: "2025-10-02",
        featured: false,
        views: 310,
        applications: 19,
        email: "medical@er.railnet.gov.in",
        phone: "033-22303581",
    },
];

/// The bundled job corpus: six government-sector listings
pub fn sample_jobs() -> Vec<Job> {
    SEEDS
        .iter()
        .map(|seed| Job {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            organization: seed.organization.to_string(),
            sector: Sector::Government,
            category: seed.category.to_string(),
            location: seed.location.to_string(),
            qualification: seed.qualification.to_string(),
            experience: seed.experience.to_string(),
            experience_level: Some(seed.level),
            speciality: Some(seed.speciality.to_string()),
            duty_type: Some(seed.duty),
            number_of_posts: Some(seed.posts),
            salary: Some(seed.salary.to_string()),
            description: seed.description.to_string(),
            last_date: seed.last_date.to_string(),
            posted_date: Some(seed.posted_date.to_string()),
            status: JobStatus::Active,
            featured: seed.featured,
            views: seed.views,
            applications: seed.applications,
            contact_email: Some(seed.email.to_string()),
            contact_phone: Some(seed.phone.to_string()),
            pdf_url: None,
            apply_link: None,
            extra: Map::new(),
        })
        .collect()
}

/// Pulse items shown when the news endpoint is empty or unreachable
pub fn sample_pulse_updates() -> Vec<PulseUpdate> {
    let items = [
        (
            "pulse-1",
            "NMC releases revised academic calendar for MBBS 2025 batch",
            PulseType::Govt,
            "2025-10-14",
            Some(true),
        ),
        (
            "pulse-2",
            "AIIMS institutes common recruitment portal for Group A medical posts",
            PulseType::Govt,
            "2025-10-12",
            None,
        ),
        (
            "pulse-3",
            "NBEMS announces tentative NEET-SS counseling window",
            PulseType::Exam,
            "2025-10-10",
            None,
        ),
        (
            "pulse-4",
            "Private hospital chains open 1,200 resident doctor positions across metros",
            PulseType::Private,
            "2025-10-08",
            None,
        ),
        (
            "pulse-5",
            "Last date extended for DM/MCh registration under NMC portal",
            PulseType::Deadline,
            "2025-10-06",
            None,
        ),
        (
            "pulse-6",
            "ICMR updates guidance on antimicrobial stewardship in tertiary care",
            PulseType::Update,
            "2025-10-05",
            None,
        ),
    ];

    items
        .into_iter()
        .map(|(id, title, kind, date, breaking)| PulseUpdate {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            date: date.to_string(),
            breaking,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_jobs_are_government_only() {
        let jobs = sample_jobs();
        assert_eq!(jobs.len(), 6);
        assert!(jobs.iter().all(|j| j.sector == Sector::Government));

        let ids: HashSet<_> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), jobs.len());
    }

    #[test]
    fn test_sample_pulse_updates() {
        let updates = sample_pulse_updates();
        assert_eq!(updates.len(), 6);
        assert_eq!(updates.iter().filter(|u| u.is_breaking()).count(), 1);
    }
}
