use clap::Args;
use revhire::board::{
    EmployerId, InMemoryBoardStore, Job, JobBoardService, JobFilter, SeekerId,
};
use revhire::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Employer identifier used throughout the walkthrough
    #[arg(long, default_value = "acme-hr")]
    pub(crate) employer: String,
    /// Job seeker identifier used throughout the walkthrough
    #[arg(long, default_value = "sam-rivera")]
    pub(crate) seeker: String,
    /// Skip the employer triage portion of the demo
    #[arg(long)]
    pub(crate) skip_triage: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        employer,
        seeker,
        skip_triage,
    } = args;

    let employer = EmployerId(employer);
    let seeker = SeekerId(seeker);

    let store = Arc::new(InMemoryBoardStore::new());
    let service = JobBoardService::new(store);

    println!("Job board demo");

    if let Err(err) = service.register_employer(employer.clone()) {
        println!("  Employer registration failed: {err}");
        return Ok(());
    }
    println!("- Registered employer {}", employer);

    let postings = [
        Job {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "NY".to_string(),
            experience_years: 3,
        },
        Job {
            title: "Support Specialist".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            experience_years: 0,
        },
    ];

    let mut posted = Vec::new();
    for job in postings {
        match service.post_job(&employer, job.clone()) {
            Ok(job_id) => {
                println!(
                    "- Posted job {}: {} at {} ({}, {} yrs experience)",
                    job_id, job.title, job.company, job.location, job.experience_years
                );
                posted.push(job_id);
            }
            Err(err) => {
                println!("  Posting rejected: {err}");
                return Ok(());
            }
        }
    }

    if let Err(err) = service.register_seeker(seeker.clone()) {
        println!("  Seeker registration failed: {err}");
        return Ok(());
    }
    println!("- Registered job seeker {}", seeker);

    let filter = JobFilter {
        location: Some("NY".to_string()),
        ..Default::default()
    };
    match service.search_jobs(&filter) {
        Ok(listings) => {
            println!("\nSearch results for location=NY");
            for listing in &listings {
                println!("- job {} | {} | {}", listing.job_id, listing.job.title, listing.job.company);
            }
        }
        Err(err) => println!("  Search unavailable: {err}"),
    }

    let first_job = match posted.first() {
        Some(job_id) => *job_id,
        None => return Ok(()),
    };

    if let Err(err) = service.apply(first_job, &seeker) {
        println!("  Application rejected: {err}");
        return Ok(());
    }
    println!("\n- {} applied to job {}", seeker, first_job);

    match service.applications(&seeker) {
        Ok(applications) => {
            println!("  Seeker view of applications:");
            for (job_id, status) in &applications {
                println!("    - job {} -> {}", job_id, status);
            }
        }
        Err(err) => println!("  Application listing unavailable: {err}"),
    }

    if skip_triage {
        return Ok(());
    }

    println!("\nEmployer triage");
    for status in ["shortlisted", "rejected"] {
        match service.process_application(&employer, first_job, status) {
            Ok(recorded) => println!("- Recorded decision {} for job {}", recorded, first_job),
            Err(err) => {
                println!("  Decision rejected: {err}");
                return Ok(());
            }
        }
    }

    match service.applications_for_job(&employer, first_job) {
        Ok(decisions) => match serde_json::to_string_pretty(&decisions) {
            Ok(json) => println!("  Decision log for job {}:\n{}", first_job, json),
            Err(err) => println!("  Decision log unavailable: {err}"),
        },
        Err(err) => println!("  Decision log unavailable: {err}"),
    }

    // The seeker's own view is unchanged by triage decisions.
    match service.applications(&seeker) {
        Ok(applications) => {
            println!("  Seeker view after triage:");
            for (job_id, status) in &applications {
                println!("    - job {} -> {}", job_id, status);
            }
        }
        Err(err) => println!("  Application listing unavailable: {err}"),
    }

    Ok(())
}
