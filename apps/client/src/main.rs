use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use jobtrack_client::gateway::ApiGateway;
use jobtrack_client::model::{Job, JobStatus};
use jobtrack_client::store::RemoteStore;
use jobtrack_client::ui::state::{AppView, StatusFilter};

const USAGE: &str = "\
Usage: jobtrack <command>

Commands:
  list [STATUS]                    show applications, optionally only one status
  add COMPANY POSITION LINK [STATUS]
                                   submit a new application
  status ID STATUS                 move an application to another status
  delete ID                        remove an application
";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=warn", env!("CARGO_CRATE_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = std::env::var("JOBTRACK_API_URL")
        .unwrap_or_else(|_| "http://localhost:8000".to_string());
    let mut view = AppView::new(RemoteStore::new(ApiGateway::new(base_url)));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        [] | ["list"] => {
            view.load().await;
            print_jobs(&view.visible());
        }
        ["list", status] => {
            view.load().await;
            view.set_filter(StatusFilter::Only(status.parse()?));
            print_jobs(&view.visible());
        }
        ["add", company, position, link, rest @ ..] => {
            view.open_form();
            view.form.company = company.to_string();
            view.form.position = position.to_string();
            view.form.link = link.to_string();
            if let [status] = rest {
                view.form.status = status.parse()?;
            }
            view.submit_form().await;
            // The form only closes on success.
            if view.show_form {
                bail!("application was not saved");
            }
            let job = &view.applications[0];
            println!("Added {} — {} ({})", job.company, job.position, job.id);
        }
        ["status", id, status] => {
            let id = parse_id(id)?;
            let status: JobStatus = status.parse()?;
            view.load().await;
            view.set_status(id, status).await;
            match view.applications.iter().find(|job| job.id == id) {
                Some(job) if job.status == status => {
                    println!("{} is now {}", job.company, job.status)
                }
                _ => bail!("status was not updated"),
            }
        }
        ["delete", id] => {
            let id = parse_id(id)?;
            view.load().await;
            let had_it = view.applications.iter().any(|job| job.id == id);
            view.remove(id).await;
            if view.applications.iter().any(|job| job.id == id) {
                bail!("application was not deleted");
            }
            if had_it {
                println!("Deleted {id}");
            } else {
                println!("Nothing to delete; {id} was already gone");
            }
        }
        _ => {
            eprint!("{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).with_context(|| format!("'{raw}' is not a valid application id"))
}

fn print_jobs(jobs: &[&Job]) {
    if jobs.is_empty() {
        println!("No applications.");
        return;
    }
    for job in jobs {
        println!(
            "{}  {:<10} {} — {}  applied {}  {}",
            job.id, job.status, job.company, job.position, job.date_applied, job.link
        );
    }
}
